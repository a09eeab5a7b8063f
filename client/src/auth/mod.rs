//! 身份提供商（Firebase Identity Toolkit）REST 封装
//!
//! 只负责身份验证本身：注册、邮箱密码登录、第三方登录、资料更新。
//! 登录成功后的会话建立（换取后端 JWT、查角色）由会话层完成。

use std::time::Duration;

use log::{error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use common::config::FirebaseConfig;
use common::{AppError, AppResult};

const IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// 第三方登录提供商
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdpProvider {
    Google,
    Github,
}

impl IdpProvider {
    pub fn provider_id(&self) -> &'static str {
        match self {
            IdpProvider::Google => "google.com",
            IdpProvider::Github => "github.com",
        }
    }
}

/// 验证通过的用户身份
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub id_token: String,
    pub local_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IdpSignInReq {
    post_body: String,
    request_uri: String,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileUpdateReq<'a> {
    id_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<&'a str>,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityResp {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    id_token: String,
    local_id: String,
}

#[derive(Debug, Deserialize)]
struct IdentityErrorBody {
    error: Option<IdentityErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct IdentityErrorDetail {
    message: Option<String>,
}

/// Firebase 身份服务
#[derive(Clone)]
pub struct FirebaseAuth {
    client: Client,
    api_key: String,
    auth_domain: String,
}

impl FirebaseAuth {
    pub fn new(config: &FirebaseConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::network(format!("HTTP 客户端初始化失败: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            auth_domain: config.auth_domain.clone(),
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{}/accounts:{}?key={}", IDENTITY_BASE_URL, action, self.api_key)
    }

    /// 邮箱密码注册
    pub async fn sign_up(&self, email: &str, password: &str) -> AppResult<AuthUser> {
        let req = PasswordCredentials { email, password, return_secure_token: true };
        let user = self.call("signUp", &req).await?;
        info!("注册成功: {}", user.email);
        Ok(user)
    }

    /// 邮箱密码登录
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthUser> {
        let req = PasswordCredentials { email, password, return_secure_token: true };
        let user = self.call("signInWithPassword", &req).await?;
        info!("登录成功: {}", user.email);
        Ok(user)
    }

    /// 第三方登录（Google / Github），access_token 由提供商侧授权流程取得
    pub async fn sign_in_with_idp(
        &self,
        provider: IdpProvider,
        access_token: &str,
    ) -> AppResult<AuthUser> {
        let req = IdpSignInReq {
            post_body: format!(
                "access_token={}&providerId={}",
                access_token,
                provider.provider_id()
            ),
            request_uri: format!("https://{}", self.auth_domain),
            return_secure_token: true,
        };
        let user = self.call("signInWithIdp", &req).await?;
        info!("第三方登录成功: {} ({})", user.email, provider.provider_id());
        Ok(user)
    }

    /// 更新昵称与头像（注册后立即补资料）
    pub async fn update_profile(
        &self,
        id_token: &str,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> AppResult<AuthUser> {
        let req = ProfileUpdateReq {
            id_token,
            display_name,
            photo_url,
            return_secure_token: true,
        };
        self.call("update", &req).await
    }

    async fn call<B: Serialize>(&self, action: &str, body: &B) -> AppResult<AuthUser> {
        let resp = self.client.post(self.endpoint(action)).json(body).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp
                .json::<IdentityResp>()
                .await
                .map_err(|e| AppError::ParseError(format!("身份响应解析失败: {}", e)))?;
            Ok(AuthUser {
                // signInWithIdp 的邮箱可能缺失，空串会在会话层被拦下
                email: parsed.email.unwrap_or_default(),
                display_name: parsed.display_name,
                photo_url: parsed.photo_url,
                id_token: parsed.id_token,
                local_id: parsed.local_id,
            })
        } else {
            // 身份服务错误体形如 { "error": { "message": "EMAIL_EXISTS" } }
            let message = resp
                .json::<IdentityErrorBody>()
                .await
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("身份验证失败 [{}]", status.as_u16()));
            error!("身份验证失败 [{}]: {}", action, message);
            Err(AppError::auth(message))
        }
    }
}
