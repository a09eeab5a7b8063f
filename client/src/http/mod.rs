use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use common::config::ApiConfig;
use common::constants::AUTH_HEADER_NAME;
use common::{AppError, AppResult};

/// 后端错误响应体
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// 后端 REST 客户端
///
/// 持有一个共享的令牌槽：会话层是唯一写入方，每个请求在发出前
/// 读取令牌并附加 `Authorization: Bearer` 头（对应旧版前端的
/// 请求拦截器）。请求只发一次，失败直接上报，不做重试。
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::network(format!("HTTP 客户端初始化失败: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        Self::new(config.base_url.clone(), config.timeout_secs)
    }

    /// 安装或清除会话令牌（唯一写入方是会话层）
    pub async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.execute(self.client.get(self.url(path))).await
    }

    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.execute(self.client.get(self.url(path)).query(query)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.client.post(self.url(path)).json(body)).await
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> AppResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(self.client.patch(self.url(path)).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.execute(self.client.delete(self.url(path))).await
    }

    /// 附加令牌、发出请求、统一处理响应
    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let builder = match self.token.read().await.clone() {
            Some(token) => builder.header(AUTH_HEADER_NAME, format!("Bearer {}", token)),
            None => builder,
        };

        let resp = builder.send().await?;
        let status = resp.status();

        if status.is_success() {
            resp.json::<T>()
                .await
                .map_err(|e| AppError::ParseError(format!("响应解析失败: {}", e)))
        } else {
            // 后端错误体形如 { "message": "..." }
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| {
                    status.canonical_reason().unwrap_or("request failed").to_string()
                });
            log::warn!("接口返回错误 [{}]: {}", status.as_u16(), message);
            Err(AppError::api(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/", 5).unwrap();
        assert_eq!(client.url("/api/loans"), "http://localhost:5000/api/loans");
    }

    #[tokio::test]
    async fn test_token_slot_single_writer() {
        let client = ApiClient::new("http://localhost:5000", 5).unwrap();
        assert_eq!(client.token().await, None);

        client.set_token(Some("jwt-abc".to_string())).await;
        assert_eq!(client.token().await.as_deref(), Some("jwt-abc"));

        // 克隆共享同一令牌槽（拦截器语义）
        let cloned = client.clone();
        client.set_token(None).await;
        assert_eq!(cloned.token().await, None);
    }
}
