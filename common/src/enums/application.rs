use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// 贷款申请状态
///
/// pending 是唯一的非终态，其余状态不可再变更
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl ApplicationStatus {
    /// 是否为终态
    pub fn is_terminal(self) -> bool {
        !matches!(self, ApplicationStatus::Pending)
    }

    /// 状态转换是否合法（单向，仅 pending 可流出）
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        matches!(self, ApplicationStatus::Pending) && next != ApplicationStatus::Pending
    }
}

/// 申请费支付状态
///
/// 单调转换: unpaid -> paid，不可逆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub fn can_transition_to(self, next: PaymentStatus) -> bool {
        matches!((self, next), (PaymentStatus::Unpaid, PaymentStatus::Paid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_is_only_non_terminal() {
        assert!(!ApplicationStatus::Pending.is_terminal());
        assert!(ApplicationStatus::Approved.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(ApplicationStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_status_transitions_one_directional() {
        assert!(ApplicationStatus::Pending.can_transition_to(ApplicationStatus::Approved));
        assert!(ApplicationStatus::Pending.can_transition_to(ApplicationStatus::Cancelled));
        // 终态不可再变更
        assert!(!ApplicationStatus::Approved.can_transition_to(ApplicationStatus::Rejected));
        assert!(!ApplicationStatus::Rejected.can_transition_to(ApplicationStatus::Pending));
    }

    #[test]
    fn test_payment_status_monotonic() {
        assert!(PaymentStatus::Unpaid.can_transition_to(PaymentStatus::Paid));
        assert!(!PaymentStatus::Paid.can_transition_to(PaymentStatus::Unpaid));
        assert!(!PaymentStatus::Unpaid.can_transition_to(PaymentStatus::Unpaid));
    }

    #[test]
    fn test_wire_format() {
        assert_eq!(serde_json::to_string(&ApplicationStatus::Cancelled).unwrap(), "\"cancelled\"");
        assert_eq!(serde_json::to_string(&PaymentStatus::Unpaid).unwrap(), "\"unpaid\"");
    }
}
