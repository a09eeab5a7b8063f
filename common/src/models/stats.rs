use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 管理员总览统计
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_loans: u64,
    #[serde(default)]
    pub total_applications: u64,
    #[serde(default)]
    pub pending_applications: u64,
    #[serde(default)]
    pub approved_applications: u64,
    #[serde(default)]
    pub total_fees_collected: Decimal,
}

/// 经理维度统计（按经理 email 聚合）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerStats {
    #[serde(default)]
    pub total_loans: u64,
    #[serde(default)]
    pub total_applications: u64,
    #[serde(default)]
    pub pending_applications: u64,
    #[serde(default)]
    pub approved_applications: u64,
}
