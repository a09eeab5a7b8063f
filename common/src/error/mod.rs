// 错误处理模块
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("网络错误: {0}")]
    NetworkError(String),

    #[error("接口错误 [{status}]: {message}")]
    ApiError { status: u16, message: String },

    #[error("认证错误: {0}")]
    AuthError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("验证错误: {0}")]
    ValidationError(String),

    #[error("支付错误: {0}")]
    PaymentError(String),

    #[error("未找到: {0}")]
    NotFound(String),

    #[error("解析错误: {0}")]
    ParseError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 网络/后端失败（请求被拒绝或超时）
    pub fn network(msg: impl Into<String>) -> Self {
        AppError::NetworkError(msg.into())
    }

    /// 后端接口返回的非 2xx 响应
    pub fn api(status: u16, msg: impl Into<String>) -> Self {
        AppError::ApiError { status, message: msg.into() }
    }

    /// 身份提供商错误
    pub fn auth(msg: impl Into<String>) -> Self {
        AppError::AuthError(msg.into())
    }

    /// 表单/字段验证错误
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    /// 支付网关错误（网关返回的原始文案，行内展示）
    pub fn payment(msg: impl Into<String>) -> Self {
        AppError::PaymentError(msg.into())
    }
}

// 从 reqwest 错误转换
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::NetworkError(format!("请求超时: {}", err))
        } else {
            AppError::NetworkError(err.to_string())
        }
    }
}

// 从 config 错误转换
impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

// 从 serde_json 错误转换
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}
