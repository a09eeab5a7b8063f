use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::enums::{ApplicationStatus, LoanCategory, PaymentStatus};

/// 提交贷款申请
///
/// 产品信息在提交时冗余进申请，月供由客户端预先算好
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub loan_id: String,
    pub loan_title: String,
    pub loan_category: LoanCategory,
    pub interest_rate: Decimal,
    pub manager_email: String,

    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_photo: String,

    pub phone: String,
    pub national_id: String,
    pub address: String,
    pub income_source: String,
    pub monthly_income: Decimal,

    pub loan_amount: Decimal,
    pub emi_plan: u32,
    #[serde(with = "crate::utils::serde_helpers::decimal_flex")]
    pub emi_amount: Decimal,

    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub status: ApplicationStatus,
    pub payment_status: PaymentStatus,
    pub applied_at: DateTime<Utc>,
}

/// 审批更新（approve / reject），只能从 pending 流出
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationUpdate {
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_by: Option<String>,
}

impl ApplicationUpdate {
    /// 批准申请
    pub fn approve(approver_email: impl Into<String>) -> Self {
        Self {
            status: ApplicationStatus::Approved,
            approved_at: Some(Utc::now()),
            approved_by: Some(approver_email.into()),
            rejection_reason: None,
            rejected_at: None,
            rejected_by: None,
        }
    }

    /// 驳回申请，必须附驳回原因
    pub fn reject(rejecter_email: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            status: ApplicationStatus::Rejected,
            approved_at: None,
            approved_by: None,
            rejection_reason: Some(reason.into()),
            rejected_at: Some(Utc::now()),
            rejected_by: Some(rejecter_email.into()),
        }
    }
}

/// 支付状态更新（专用端点，unpaid -> paid 单向）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusUpdate {
    pub payment_status: PaymentStatus,
}

impl PaymentStatusUpdate {
    pub fn paid() -> Self {
        Self { payment_status: PaymentStatus::Paid }
    }
}
