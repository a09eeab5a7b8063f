// 配置模块
mod app_config;

pub use app_config::{AppConfig, ApiConfig, FirebaseConfig, StripeConfig, LogConfig};
