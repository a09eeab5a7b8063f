use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::enums::{UserRole, UserStatus};

/// 注册后在后端建档
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub role: UserRole,
}

/// 用户更新（管理员操作：改角色 / 停用 / 恢复）
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend_feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended_at: Option<DateTime<Utc>>,
}

impl UserUpdate {
    /// 变更角色
    pub fn change_role(role: UserRole) -> Self {
        Self { role: Some(role), ..Default::default() }
    }

    /// 停用用户，原因必填、反馈可选
    pub fn suspend(reason: impl Into<String>, feedback: Option<String>) -> Self {
        Self {
            status: Some(UserStatus::Suspended),
            suspend_reason: Some(reason.into()),
            suspend_feedback: feedback,
            suspended_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// 恢复为正常状态
    pub fn activate() -> Self {
        Self { status: Some(UserStatus::Active), ..Default::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_change_only_sends_role() {
        let json = serde_json::to_value(UserUpdate::change_role(UserRole::Manager)).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "manager" }));
    }

    #[test]
    fn test_suspend_payload() {
        let update = UserUpdate::suspend("Fraudulent documents", Some("Repeated offense".into()));
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["status"], "suspended");
        assert_eq!(json["suspendReason"], "Fraudulent documents");
        assert!(json.get("role").is_none());
        assert!(json.get("suspendedAt").is_some());
    }

    #[test]
    fn test_new_user_uses_provider_field_name() {
        let user = NewUser {
            name: "Amina".into(),
            email: "amina@example.com".into(),
            photo_url: "https://example.com/a.png".into(),
            role: UserRole::Borrower,
        };
        let json = serde_json::to_value(&user).unwrap();
        // 头像字段沿用身份提供商的大写拼写
        assert!(json.get("photoURL").is_some());
    }
}
