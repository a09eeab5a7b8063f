use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 后端创建支付意向后返回的凭据
///
/// client_secret 用于向支付网关确认扣款，不落盘、不打日志
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub client_secret: String,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
}

/// 已完成支付的记录
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    pub application_id: String,

    /// 网关侧的支付意向 ID
    pub payment_intent_id: String,

    /// 金额（美元）
    pub amount: Decimal,

    pub status: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl PaymentIntent {
    /// 从 client_secret 中取出意向 ID（格式 "pi_xxx_secret_yyy"）
    pub fn intent_id(&self) -> Option<&str> {
        if let Some(id) = self.payment_intent_id.as_deref() {
            return Some(id);
        }
        self.client_secret.split("_secret").next().filter(|s| !s.is_empty())
    }
}
