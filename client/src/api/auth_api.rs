use serde_json::Value;

use common::models::req::{JwtRequest, JwtResponse};
use common::AppResult;

use crate::http::ApiClient;

/// 后端会话接口：换取与注销 JWT
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 用已验证的邮箱换取后端签发的会话令牌
    pub async fn request_jwt(&self, email: &str) -> AppResult<JwtResponse> {
        let req = JwtRequest { email: email.to_string() };
        self.client.post("/api/auth/jwt", &req).await
    }

    /// 通知后端会话结束
    pub async fn logout(&self) -> AppResult<Value> {
        self.client.post("/api/auth/logout", &serde_json::json!({})).await
    }
}
