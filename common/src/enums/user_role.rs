use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// 用户角色枚举
///
/// 权限严格递增: admin ⊇ manager ⊇ borrower
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    /// 借款人（默认角色）
    #[default]
    Borrower,
    /// 贷款经理
    Manager,
    /// 管理员
    Admin,
}

impl UserRole {
    /// 权限等级，数值越大权限越高
    pub fn privilege_level(self) -> u8 {
        match self {
            UserRole::Borrower => 0,
            UserRole::Manager => 1,
            UserRole::Admin => 2,
        }
    }

    /// 从后端返回的角色字符串转换，未知值回落到借款人
    pub fn from_str_or_default(value: &str) -> Self {
        Self::iter()
            .find(|r| r.as_ref() == value)
            .unwrap_or_default()
    }
}

/// 用户状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    /// 被管理员停用，停用原因记录在用户档案上
    Suspended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        // 后端使用小写角色字符串
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
        let role: UserRole = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, UserRole::Manager);
    }

    #[test]
    fn test_role_from_str_defaults_to_borrower() {
        assert_eq!(UserRole::from_str_or_default("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str_or_default("superuser"), UserRole::Borrower);
    }

    #[test]
    fn test_privilege_ordering() {
        assert!(UserRole::Admin.privilege_level() > UserRole::Manager.privilege_level());
        assert!(UserRole::Manager.privilege_level() > UserRole::Borrower.privilege_level());
    }
}
