use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{ApplicationStatus, LoanCategory, PaymentStatus};

/// 贷款申请
///
/// 创建时冗余一份产品信息（标题、分类、利率、经理），
/// 产品后续被修改不影响已提交的申请
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(rename = "_id")]
    pub id: String,

    /// 关联的贷款产品
    pub loan_id: String,
    pub loan_title: String,
    pub loan_category: LoanCategory,
    pub interest_rate: Decimal,
    pub manager_email: String,

    /// 申请人身份（来自身份提供商的档案）
    pub applicant_name: String,
    pub applicant_email: String,
    #[serde(default)]
    pub applicant_photo: String,

    /// 联系与就业信息
    pub phone: String,
    pub national_id: String,
    pub address: String,
    pub income_source: String,
    pub monthly_income: Decimal,

    /// 申请金额，创建时必须 ≤ 产品 maxLimit
    pub loan_amount: Decimal,

    /// 还款期数，必须是产品 emiOptions 之一
    pub emi_plan: u32,

    /// 提交时计算好的月供（旧版前端以字符串提交，读取时兼容两种类型）
    #[serde(with = "crate::utils::serde_helpers::decimal_flex")]
    pub emi_amount: Decimal,

    #[serde(default)]
    pub status: ApplicationStatus,

    #[serde(default)]
    pub payment_status: PaymentStatus,

    /// 借款用途
    pub reason: String,

    #[serde(default)]
    pub notes: Option<String>,

    /// 审批记录
    #[serde(default)]
    pub rejection_reason: Option<String>,
    #[serde(default)]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved_by: Option<String>,
    #[serde(default)]
    pub rejected_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rejected_by: Option<String>,
}

impl Application {
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }

    /// 借款人只能取消尚未进入终态的申请
    pub fn can_cancel(&self) -> bool {
        self.is_pending()
    }

    /// 申请费是否已支付
    pub fn fee_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}
