//! 申请费结账流程
//!
//! 意向在后端创建（私钥只在后端），客户端凭 client_secret 向支付
//! 网关确认扣款，成功后落库支付记录并把申请标记为已付。
//! 网关失败直接上报，申请保持未付，不留半截本地状态。

use std::time::Duration;

use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;
use uuid::Uuid;

use common::config::StripeConfig;
use common::models::req::{CreateIntentRequest, NewPayment};
use common::models::Application;
use common::{AppError, AppResult};

use crate::api::Api;

const STRIPE_API_BASE: &str = "https://api.stripe.com/v1";

/// 网关确认成功后的结果
#[derive(Debug, Clone)]
pub struct ConfirmedPayment {
    pub payment_intent_id: String,
    pub status: String,
}

/// 支付网关抽象，结账流程只依赖这个接口
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync {
    fn name(&self) -> &str;

    /// 用 client_secret 确认扣款，payment_method 是网关侧采集好的
    /// 支付方式令牌（卡号永不经过本层）
    async fn confirm(&self, client_secret: &str, payment_method: &str)
        -> AppResult<ConfirmedPayment>;
}

#[derive(Debug, Deserialize)]
struct StripeIntentResp {
    id: String,
    status: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    error: Option<StripeErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    message: Option<String>,
}

/// Stripe 网关实现（可发布密钥认证）
pub struct StripeGateway {
    client: Client,
    publishable_key: String,
}

impl StripeGateway {
    pub fn new(config: &StripeConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| AppError::network(format!("HTTP 客户端初始化失败: {}", e)))?;

        Ok(Self { client, publishable_key: config.publishable_key.clone() })
    }
}

#[async_trait::async_trait]
impl PaymentGateway for StripeGateway {
    fn name(&self) -> &str {
        "stripe"
    }

    async fn confirm(
        &self,
        client_secret: &str,
        payment_method: &str,
    ) -> AppResult<ConfirmedPayment> {
        // client_secret 形如 "pi_xxx_secret_yyy"，确认端点按意向 ID 寻址
        let intent_id = client_secret
            .split("_secret")
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::payment("无效的 client_secret"))?;

        let url = format!("{}/payment_intents/{}/confirm", STRIPE_API_BASE, intent_id);
        let form = [
            ("client_secret", client_secret),
            ("payment_method", payment_method),
        ];

        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.publishable_key, Option::<&str>::None)
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .form(&form)
            .send()
            .await?;
        let status = resp.status();

        if !status.is_success() {
            let message = resp
                .json::<StripeErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("支付网关返回 {}", status.as_u16()));
            warn!("支付确认失败: {}", message);
            return Err(AppError::payment(message));
        }

        let intent = resp
            .json::<StripeIntentResp>()
            .await
            .map_err(|e| AppError::ParseError(format!("网关响应解析失败: {}", e)))?;

        // 确认后必须直接到达终态，requires_action 等中间态按失败处理
        if intent.status != "succeeded" {
            warn!("支付未完成，网关状态: {}", intent.status);
            return Err(AppError::payment(format!("Payment not completed: {}", intent.status)));
        }

        Ok(ConfirmedPayment { payment_intent_id: intent.id, status: intent.status })
    }
}

/// 结账服务：申请费支付的完整编排
pub struct CheckoutService<G: PaymentGateway> {
    api: Api,
    gateway: G,
}

impl<G: PaymentGateway> CheckoutService<G> {
    pub fn new(api: Api, gateway: G) -> Self {
        Self { api, gateway }
    }

    /// 支付 $10 申请费
    ///
    /// 顺序：未付检查 → 后端创建意向 → 网关确认 → 落库记录 →
    /// 标记已付。网关确认之前的失败不产生任何副作用。
    pub async fn pay_application_fee(
        &self,
        application: &Application,
        payment_method: &str,
    ) -> AppResult<ConfirmedPayment> {
        let application_id = application.id.as_str();

        // 已付拒绝重复扣款（unpaid -> paid 单向）
        if application.fee_paid() {
            return Err(AppError::payment("Application fee already paid"));
        }

        let intent = self
            .api
            .payments
            .create_intent(&CreateIntentRequest::application_fee(application_id))
            .await?;

        let confirmed = self.gateway.confirm(&intent.client_secret, payment_method).await?;
        info!(
            "申请费支付成功: application={} intent={}",
            application_id, confirmed.payment_intent_id
        );

        // 扣款已成功，后续落库失败只记日志，不回滚支付
        if let Err(e) = self
            .api
            .payments
            .record(&NewPayment::completed(application_id, &confirmed.payment_intent_id))
            .await
        {
            warn!("支付记录落库失败: {}", e);
        }

        self.api.applications.mark_paid(application_id).await?;

        Ok(confirmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::enums::PaymentStatus;

    use crate::http::ApiClient;

    struct PanicGateway;

    #[async_trait::async_trait]
    impl PaymentGateway for PanicGateway {
        fn name(&self) -> &str {
            "panic"
        }

        async fn confirm(&self, _: &str, _: &str) -> AppResult<ConfirmedPayment> {
            panic!("gateway must not be reached");
        }
    }

    fn sample_application(paid: bool) -> Application {
        let json = serde_json::json!({
            "_id": "app-1",
            "loanId": "loan-1",
            "loanTitle": "Small Business Loan",
            "loanCategory": "Business",
            "interestRate": "12",
            "managerEmail": "manager@loanlink.com",
            "applicantName": "Amina Rahman",
            "applicantEmail": "amina@example.com",
            "applicantPhoto": "",
            "phone": "+880 1712-345678",
            "nationalId": "1987654321",
            "address": "12 Lake Road, Dhaka",
            "incomeSource": "Retail shop",
            "monthlyIncome": "850",
            "loanAmount": "5000",
            "emiPlan": 12,
            "emiAmount": "444.24",
            "reason": "Expanding inventory ahead of the festival sales season",
            "status": "pending",
            "paymentStatus": if paid { "paid" } else { "unpaid" },
            "appliedAt": "2025-06-01T10:00:00Z"
        });
        serde_json::from_value(json).unwrap()
    }

    #[tokio::test]
    async fn test_already_paid_is_refused_before_any_call() {
        let client = ApiClient::new("http://127.0.0.1:9", 1).unwrap();
        let service = CheckoutService::new(Api::new(client), PanicGateway);

        let application = sample_application(true);
        assert_eq!(application.payment_status, PaymentStatus::Paid);

        let err = service
            .pay_application_fee(&application, "pm_card_visa")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PaymentError(_)));
    }

    #[tokio::test]
    async fn test_unpaid_application_passes_the_guard() {
        // 未付申请能通过本地检查（随后死在无服务的后端调用上，
        // 而不是被已付守卫拦下）
        let client = ApiClient::new("http://127.0.0.1:9", 1).unwrap();
        let service = CheckoutService::new(Api::new(client), PanicGateway);

        let application = sample_application(false);
        let err = service
            .pay_application_fee(&application, "pm_card_visa")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NetworkError(_)));
    }
}
