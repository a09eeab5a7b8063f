//! 会话层：身份验证成功之后的状态机
//!
//! 登录流程：用验证过的邮箱换取后端 JWT 并装入请求客户端，再查询
//! 用户角色。会话状态从 Loading 起步，是访问判定的输入：未完成
//! 解析前一律悬停，不做跳转。

use std::sync::Arc;

use log::{error, info, warn};
use tokio::sync::RwLock;

use common::enums::UserRole;
use common::AppResult;

use crate::access::AuthState;
use crate::api::Api;
use crate::auth::AuthUser;
use crate::http::ApiClient;

/// 当前登录用户的档案
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub role: UserRole,
}

/// 会话快照
#[derive(Debug, Clone)]
pub struct Session {
    pub state: AuthState,
    pub user: Option<SessionUser>,
}

impl Session {
    fn loading() -> Self {
        Self { state: AuthState::Loading, user: None }
    }
}

/// 会话管理器
///
/// 是请求客户端令牌槽的唯一写入方：登录装入令牌，登出清除。
#[derive(Clone)]
pub struct SessionManager {
    client: ApiClient,
    api: Api,
    session: Arc<RwLock<Session>>,
}

impl SessionManager {
    pub fn new(client: ApiClient) -> Self {
        let api = Api::new(client.clone());
        Self {
            client,
            api,
            session: Arc::new(RwLock::new(Session::loading())),
        }
    }

    /// 身份验证成功后建立会话：换 JWT、查角色、发布登录态
    pub async fn on_signed_in(&self, user: &AuthUser) -> AppResult<UserRole> {
        if user.email.is_empty() {
            return Err(common::AppError::auth("身份提供商未返回邮箱"));
        }

        // 先拿后端令牌，后续的角色查询要带上它
        let jwt = self.api.auth.request_jwt(&user.email).await?;
        self.client.set_token(Some(jwt.token)).await;

        // 角色解析失败不阻断登录，降级为借款人
        let role = match self.api.users.get_by_email(&user.email).await {
            Ok(profile) => profile.role,
            Err(e) => {
                error!("角色查询失败，降级为借款人: {}", e);
                UserRole::Borrower
            }
        };

        let mut session = self.session.write().await;
        session.state = AuthState::SignedIn(role);
        session.user = Some(SessionUser {
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            photo_url: user.photo_url.clone(),
            role,
        });
        info!("会话建立: {} [{}]", user.email, role.as_ref());
        Ok(role)
    }

    /// 登出：本地会话立即失效，后端通知尽力而为
    pub async fn on_signed_out(&self) {
        self.client.set_token(None).await;

        if let Err(e) = self.api.auth.logout().await {
            warn!("登出通知后端失败: {}", e);
        }

        let mut session = self.session.write().await;
        session.state = AuthState::SignedOut;
        session.user = None;
        info!("会话已结束");
    }

    pub async fn auth_state(&self) -> AuthState {
        self.session.read().await.state
    }

    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    pub fn api(&self) -> &Api {
        &self.api
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with_dead_backend() -> SessionManager {
        // 端口 9（discard）不会有服务监听
        let client = ApiClient::new("http://127.0.0.1:9", 1).unwrap();
        SessionManager::new(client)
    }

    #[tokio::test]
    async fn test_session_starts_loading() {
        let manager = manager_with_dead_backend();
        assert_eq!(manager.auth_state().await, AuthState::Loading);
        assert!(manager.snapshot().await.user.is_none());
    }

    #[tokio::test]
    async fn test_sign_in_rejects_missing_email() {
        let manager = manager_with_dead_backend();
        let user = AuthUser {
            email: String::new(),
            display_name: None,
            photo_url: None,
            id_token: "tok".to_string(),
            local_id: "uid".to_string(),
        };
        assert!(manager.on_signed_in(&user).await.is_err());
        // 失败的登录不改变会话状态
        assert_eq!(manager.auth_state().await, AuthState::Loading);
    }

    #[tokio::test]
    async fn test_sign_out_succeeds_without_backend() {
        let manager = manager_with_dead_backend();
        manager.client.set_token(Some("jwt".to_string())).await;

        manager.on_signed_out().await;

        assert_eq!(manager.auth_state().await, AuthState::SignedOut);
        assert_eq!(manager.client.token().await, None);
    }
}
