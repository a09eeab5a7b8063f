use common::models::req::{CreateIntentRequest, NewPayment};
use common::models::{PaymentIntent, PaymentRecord};
use common::AppResult;

use super::InsertResult;
use crate::http::ApiClient;

/// 支付接口（意向创建在后端，确认走支付网关）
#[derive(Clone)]
pub struct PaymentsApi {
    client: ApiClient,
}

impl PaymentsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 创建申请费支付意向，拿到 client_secret
    pub async fn create_intent(&self, req: &CreateIntentRequest) -> AppResult<PaymentIntent> {
        self.client.post("/api/create-payment-intent", req).await
    }

    /// 支付确认成功后落库
    pub async fn record(&self, payment: &NewPayment) -> AppResult<InsertResult> {
        self.client.post("/api/payments", payment).await
    }

    /// 某申请的支付记录
    pub async fn get_by_application(&self, application_id: &str) -> AppResult<Vec<PaymentRecord>> {
        self.client
            .get(&format!("/api/payments/application/{}", application_id))
            .await
    }
}
