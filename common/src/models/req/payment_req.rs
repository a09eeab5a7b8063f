use rust_decimal::Decimal;
use serde::Serialize;

use crate::constants::{APPLICATION_FEE_CENTS, APPLICATION_FEE_DOLLARS};

/// 创建支付意向（金额单位为美分）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentRequest {
    pub application_id: String,
    pub amount: u64,
}

impl CreateIntentRequest {
    /// 固定 $10 申请费的意向
    pub fn application_fee(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            amount: APPLICATION_FEE_CENTS,
        }
    }
}

/// 支付成功后落库的记录（金额单位为美元）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub application_id: String,
    pub payment_intent_id: String,
    pub amount: Decimal,
    pub status: String,
}

impl NewPayment {
    pub fn completed(application_id: impl Into<String>, payment_intent_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            payment_intent_id: payment_intent_id.into(),
            amount: Decimal::from(APPLICATION_FEE_DOLLARS),
            status: "completed".to_string(),
        }
    }
}
