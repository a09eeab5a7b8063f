use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File, FileFormat};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub firebase: FirebaseConfig,
    pub stripe: StripeConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// 后端 REST API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

/// 身份提供商（Firebase）项目配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
}

/// 支付网关配置（仅可发布密钥，私钥在后端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeConfig {
    pub publishable_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

impl AppConfig {
    /// 从配置文件加载配置
    pub fn from_file(config_path: &str) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // 加载默认配置
            .add_source(File::with_name(config_path).required(false))
            // 加载环境特定配置
            .add_source(File::with_name(&format!("{}.{}", config_path, run_mode)).required(false))
            // 从环境变量加载配置（前缀为 APP_）
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// 从嵌入的配置内容加载（支持编译时嵌入）
    pub fn from_embedded(
        default_config: &str,
        prod_config: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let mut builder = Config::builder()
            // 加载嵌入的默认配置
            .add_source(File::from_str(default_config, FileFormat::Toml));

        // 如果是生产环境且提供了生产配置，加载生产配置
        if run_mode == "production" {
            if let Some(prod_cfg) = prod_config {
                builder = builder.add_source(File::from_str(prod_cfg, FileFormat::Toml));
            }
        }

        // 从环境变量加载配置（优先级最高）
        let config = builder
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// 智能加载配置：优先从文件加载，如果失败则从嵌入资源加载
    pub fn from_file_or_embedded(
        config_path: &str,
        default_config: &str,
        prod_config: Option<&str>,
    ) -> Result<Self, ConfigError> {
        match Self::from_file(config_path) {
            Ok(config) => {
                println!("从文件系统加载配置: {}", config_path);
                Ok(config)
            }
            Err(e) => {
                println!("文件系统加载配置失败: {}，使用嵌入配置", e);
                Self::from_embedded(default_config, prod_config)
            }
        }
    }

    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(AppConfig {
            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .unwrap_or_else(|_| "http://localhost:5000".to_string()),
                timeout_secs: env::var("API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
            },
            firebase: FirebaseConfig {
                api_key: env::var("FIREBASE_API_KEY").unwrap_or_default(),
                auth_domain: env::var("FIREBASE_AUTH_DOMAIN")
                    .unwrap_or_else(|_| "loanlink.firebaseapp.com".to_string()),
                project_id: env::var("FIREBASE_PROJECT_ID")
                    .unwrap_or_else(|_| "loanlink".to_string()),
            },
            stripe: StripeConfig {
                publishable_key: env::var("STRIPE_PUBLISHABLE_KEY")
                    .unwrap_or_else(|_| "pk_test_placeholder".to_string()),
            },
            log: LogConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api: ApiConfig {
                base_url: "http://localhost:5000".to_string(),
                timeout_secs: 10,
            },
            firebase: FirebaseConfig {
                api_key: String::new(),
                auth_domain: "loanlink.firebaseapp.com".to_string(),
                project_id: "loanlink".to_string(),
            },
            stripe: StripeConfig {
                publishable_key: "pk_test_placeholder".to_string(),
            },
            log: LogConfig::default(),
        }
    }
}
