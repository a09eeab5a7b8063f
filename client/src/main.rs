use common::models::req::LoanQuery;
use common::AppConfig;

use client::access::{self, AuthState};
use client::api::Api;
use client::http::ApiClient;
use client::session::SessionManager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 嵌入配置文件（编译时加载）
    const DEFAULT_CONFIG: &str = include_str!("../config.toml");

    let config = AppConfig::from_file_or_embedded("client/config", DEFAULT_CONFIG, None)
        .or_else(|_| AppConfig::from_env())?;

    // 初始化日志（使用配置的日志级别）
    std::env::set_var("RUST_LOG", &config.log.level);
    common::init_logger();

    log::info!("启动 LoanLink 客户端...");
    log::info!("后端地址: {}", config.api.base_url);

    let http = ApiClient::from_config(&config.api)?;
    let api = Api::new(http.clone());
    let session = SessionManager::new(http);

    // 未登录状态下的导航与首页数据
    let state = session.auth_state().await;
    log::info!("会话状态: {:?}", state);
    for link in access::nav_links(AuthState::SignedOut) {
        log::info!("导航: {} -> {}", link.label, link.path);
    }

    let query = LoanQuery::default().page(1).limit(6);
    match api.loans.get_all(&query).await {
        Ok(page) => {
            log::info!("贷款产品 {} 条（共 {} 页）", page.loans.len(), page.total_pages);
            for loan in &page.loans {
                log::info!(
                    "  {} [{}] 利率 {}% 上限 ${}",
                    loan.title,
                    loan.category.as_ref(),
                    loan.interest_rate,
                    loan.max_limit
                );
            }
        }
        Err(e) => log::error!("贷款列表获取失败: {}", e),
    }

    Ok(())
}
