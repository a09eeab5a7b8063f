use common::models::{AdminStats, ManagerStats};
use common::AppResult;

use crate::http::ApiClient;

/// 仪表盘统计接口
#[derive(Clone)]
pub struct StatsApi {
    client: ApiClient,
}

impl StatsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 全平台概览（管理员）
    pub async fn admin(&self) -> AppResult<AdminStats> {
        self.client.get("/api/stats/admin").await
    }

    /// 经理名下产品的概览
    pub async fn manager(&self, email: &str) -> AppResult<ManagerStats> {
        let path = format!("/api/stats/manager/{}", urlencoding::encode(email));
        self.client.get(&path).await
    }
}
