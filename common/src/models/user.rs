use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{UserRole, UserStatus};

/// 平台用户
///
/// email 全局唯一，角色变更与停用由管理员操作
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,

    pub name: String,

    pub email: String,

    /// 头像 URL（沿用身份提供商的字段名）
    #[serde(rename = "photoURL", default)]
    pub photo_url: Option<String>,

    #[serde(default)]
    pub role: UserRole,

    #[serde(default)]
    pub status: UserStatus,

    /// 停用信息（仅 status = suspended 时有值）
    #[serde(default)]
    pub suspend_reason: Option<String>,
    #[serde(default)]
    pub suspend_feedback: Option<String>,
    #[serde(default)]
    pub suspended_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_suspended(&self) -> bool {
        self.status == UserStatus::Suspended
    }
}
