use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{LoanCategory, LoanStatus};

/// 贷款产品
///
/// 由贷款经理创建，借款人在列表页浏览并发起申请
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProduct {
    #[serde(rename = "_id")]
    pub id: String,

    /// 产品名称
    pub title: String,

    /// 分类
    pub category: LoanCategory,

    /// 年利率（百分比）
    pub interest_rate: Decimal,

    /// 单笔申请金额上限
    pub max_limit: Decimal,

    /// 可选的还款期数（月）
    pub emi_options: Vec<u32>,

    /// 上架状态
    #[serde(default)]
    pub status: LoanStatus,

    /// 是否在首页展示
    #[serde(default)]
    pub show_on_home: bool,

    pub description: String,

    /// 申请条件（有序列表）
    #[serde(default)]
    pub requirements: Vec<String>,

    /// 产品图 URL
    #[serde(default)]
    pub image: Option<String>,

    /// 所属经理（所有权引用）
    pub manager_email: String,

    #[serde(default)]
    pub manager_name: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl LoanProduct {
    pub fn is_active(&self) -> bool {
        self.status == LoanStatus::Active
    }

    /// 申请金额是否在产品上限内（客户端预校验，后端仍会强制）
    pub fn allows_amount(&self, amount: Decimal) -> bool {
        amount > Decimal::ZERO && amount <= self.max_limit
    }

    /// 期数是否为产品允许的还款计划之一
    pub fn allows_plan(&self, months: u32) -> bool {
        self.emi_options.contains(&months)
    }
}

/// 贷款列表分页响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPage {
    pub loans: Vec<LoanProduct>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_loan() -> LoanProduct {
        serde_json::from_value(serde_json::json!({
            "_id": "665f1c2e8b3a4d0012ab34cd",
            "title": "Small Business Starter",
            "category": "Business",
            "interestRate": 12.5,
            "maxLimit": 10000,
            "emiOptions": [3, 6, 12],
            "status": "active",
            "showOnHome": true,
            "description": "Working capital for small businesses",
            "requirements": ["National ID", "Proof of income"],
            "managerEmail": "manager@loanlink.com"
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let loan = sample_loan();
        assert_eq!(loan.id, "665f1c2e8b3a4d0012ab34cd");
        assert_eq!(loan.category, crate::enums::LoanCategory::Business);
        assert!(loan.is_active());
        assert_eq!(loan.requirements.len(), 2);
        assert!(loan.created_at.is_none());
    }

    #[test]
    fn test_amount_and_plan_limits() {
        let loan = sample_loan();
        assert!(loan.allows_amount(Decimal::from(10000)));
        // 超过上限必须被拒绝
        assert!(!loan.allows_amount(Decimal::from(15000)));
        assert!(!loan.allows_amount(Decimal::ZERO));
        assert!(loan.allows_plan(6));
        assert!(!loan.allows_plan(24));
    }
}
