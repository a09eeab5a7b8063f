use serde::{Deserialize, Serialize};

/// 用身份提供商验证过的邮箱换取后端会话令牌
#[derive(Debug, Clone, Serialize)]
pub struct JwtRequest {
    pub email: String,
}

/// 后端签发的会话令牌
#[derive(Debug, Clone, Deserialize)]
pub struct JwtResponse {
    pub token: String,
}
