use serde_json::Value;

use common::models::req::{ApplicationUpdate, NewApplication, PaymentStatusUpdate};
use common::models::Application;
use common::AppResult;

use super::InsertResult;
use crate::http::ApiClient;

/// 贷款申请接口
#[derive(Clone)]
pub struct ApplicationsApi {
    client: ApiClient,
}

impl ApplicationsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 提交申请（借款人）
    pub async fn create(&self, application: &NewApplication) -> AppResult<InsertResult> {
        self.client.post("/api/applications", application).await
    }

    /// 全量列表（管理员）
    pub async fn get_all(&self) -> AppResult<Vec<Application>> {
        self.client.get("/api/applications").await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Application> {
        self.client.get(&format!("/api/applications/{}", id)).await
    }

    /// 待审批队列（经理）
    pub async fn get_pending(&self) -> AppResult<Vec<Application>> {
        self.client.get("/api/applications/pending").await
    }

    /// 已批准列表（经理）
    pub async fn get_approved(&self) -> AppResult<Vec<Application>> {
        self.client.get("/api/applications/approved").await
    }

    /// 某借款人自己的申请
    pub async fn get_by_user(&self, email: &str) -> AppResult<Vec<Application>> {
        let path = format!("/api/applications/user/{}", urlencoding::encode(email));
        self.client.get(&path).await
    }

    /// 审批流转（approve / reject）
    pub async fn update(&self, id: &str, update: &ApplicationUpdate) -> AppResult<Value> {
        self.client.patch(&format!("/api/applications/{}", id), update).await
    }

    /// 标记申请费已付（unpaid -> paid 单向）
    pub async fn mark_paid(&self, id: &str) -> AppResult<Value> {
        self.client
            .patch(&format!("/api/applications/{}/payment", id), &PaymentStatusUpdate::paid())
            .await
    }

    /// 撤销待审批的申请（借款人，DELETE 语义是取消）
    pub async fn cancel(&self, id: &str) -> AppResult<Value> {
        self.client.delete(&format!("/api/applications/{}", id)).await
    }
}
