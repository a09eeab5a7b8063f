use serde_json::Value;

use common::models::req::{NewUser, UserUpdate};
use common::models::User;
use common::AppResult;

use crate::http::ApiClient;

/// 用户接口
#[derive(Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// 全量列表（管理员）
    pub async fn get_all(&self) -> AppResult<Vec<User>> {
        self.client.get("/api/users").await
    }

    /// 按 email 查询（email 是唯一键，路径段需要编码）
    pub async fn get_by_email(&self, email: &str) -> AppResult<User> {
        let path = format!("/api/users/{}", urlencoding::encode(email));
        self.client.get(&path).await
    }

    /// 注册建档
    pub async fn create(&self, user: &NewUser) -> AppResult<Value> {
        self.client.post("/api/users", user).await
    }

    /// 改角色 / 停用 / 恢复（管理员）
    pub async fn update(&self, id: &str, update: &UserUpdate) -> AppResult<Value> {
        self.client.patch(&format!("/api/users/{}", id), update).await
    }
}
