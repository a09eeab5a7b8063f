// 类型化的 REST 端点封装，按资源分组
pub mod loans;
pub mod users;
pub mod applications;
pub mod payments;
pub mod stats;
pub mod auth_api;

use serde::Deserialize;

use crate::http::ApiClient;

pub use applications::ApplicationsApi;
pub use auth_api::AuthApi;
pub use loans::LoansApi;
pub use payments::PaymentsApi;
pub use stats::StatsApi;
pub use users::UsersApi;

/// 创建类接口的通用返回
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub inserted_id: String,
}

/// 所有端点分组的聚合入口
#[derive(Clone)]
pub struct Api {
    pub loans: LoansApi,
    pub users: UsersApi,
    pub applications: ApplicationsApi,
    pub payments: PaymentsApi,
    pub stats: StatsApi,
    pub auth: AuthApi,
}

impl Api {
    pub fn new(client: ApiClient) -> Self {
        Self {
            loans: LoansApi::new(client.clone()),
            users: UsersApi::new(client.clone()),
            applications: ApplicationsApi::new(client.clone()),
            payments: PaymentsApi::new(client.clone()),
            stats: StatsApi::new(client.clone()),
            auth: AuthApi::new(client),
        }
    }
}
