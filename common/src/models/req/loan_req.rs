use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{LoanCategory, LoanStatus};

/// 贷款列表查询参数（搜索/筛选/分页）
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// 按标题/分类模糊搜索
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// "all" 不发送该参数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<LoanCategory>,
}

impl LoanQuery {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        if !term.trim().is_empty() {
            self.search = Some(term);
        }
        self
    }

    pub fn category(mut self, category: LoanCategory) -> Self {
        self.category = Some(category);
        self
    }
}

/// 新建贷款产品（经理端表单）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoan {
    pub title: String,
    pub category: LoanCategory,
    pub interest_rate: Decimal,
    pub max_limit: Decimal,
    pub emi_options: Vec<u32>,
    pub status: LoanStatus,
    pub show_on_home: bool,
    pub description: String,
    pub requirements: Vec<String>,
    pub image: String,
    pub manager_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// 更新贷款产品（部分字段）
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<LoanCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_limit: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emi_options: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LoanStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_on_home: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
