//! 基于角色的视图访问判定
//!
//! 路由守卫、导航栏和侧边栏都通过同一张策略表判定，保证三处
//! 永远一致。会话未解析完时返回悬停，绝不因为状态未就绪而跳转。

pub mod routes;

use common::enums::UserRole;

pub use routes::{dashboard_links, guard, nav_links, requirement_for, NavLink, Route, ROUTES};

/// 会话认证状态（访问判定的输入）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// 会话尚未解析完成
    Loading,
    /// 未登录
    SignedOut,
    /// 已登录，角色已知
    SignedIn(UserRole),
}

/// 路由的访问门槛
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequirement {
    /// 任何人可见
    Public,
    /// 需登录，角色不限
    Authenticated,
    /// 经理或管理员
    ManagerOrAdmin,
    /// 仅管理员
    AdminOnly,
}

/// 拒绝访问时的去向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    /// 未登录去登录页
    Login,
    /// 已登录但角色不够，回首页
    Home,
}

/// 访问判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// 放行
    Permit,
    /// 会话未就绪，悬停等待（展示加载态）
    Pending,
    /// 拒绝并跳转
    Redirect(RedirectTarget),
}

/// 策略表本体
pub fn resolve_access(requirement: RouteRequirement, state: AuthState) -> AccessDecision {
    if requirement == RouteRequirement::Public {
        return AccessDecision::Permit;
    }

    match state {
        AuthState::Loading => AccessDecision::Pending,
        AuthState::SignedOut => AccessDecision::Redirect(RedirectTarget::Login),
        AuthState::SignedIn(role) => match requirement {
            RouteRequirement::Public | RouteRequirement::Authenticated => AccessDecision::Permit,
            RouteRequirement::ManagerOrAdmin => match role {
                UserRole::Manager | UserRole::Admin => AccessDecision::Permit,
                UserRole::Borrower => AccessDecision::Redirect(RedirectTarget::Home),
            },
            RouteRequirement::AdminOnly => match role {
                UserRole::Admin => AccessDecision::Permit,
                _ => AccessDecision::Redirect(RedirectTarget::Home),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [AuthState; 5] = [
        AuthState::Loading,
        AuthState::SignedOut,
        AuthState::SignedIn(UserRole::Borrower),
        AuthState::SignedIn(UserRole::Manager),
        AuthState::SignedIn(UserRole::Admin),
    ];

    #[test]
    fn test_public_permits_everyone() {
        for state in ALL_STATES {
            assert_eq!(
                resolve_access(RouteRequirement::Public, state),
                AccessDecision::Permit
            );
        }
    }

    #[test]
    fn test_loading_always_pends_on_guarded_routes() {
        for req in [
            RouteRequirement::Authenticated,
            RouteRequirement::ManagerOrAdmin,
            RouteRequirement::AdminOnly,
        ] {
            assert_eq!(resolve_access(req, AuthState::Loading), AccessDecision::Pending);
        }
    }

    #[test]
    fn test_signed_out_redirects_to_login() {
        for req in [
            RouteRequirement::Authenticated,
            RouteRequirement::ManagerOrAdmin,
            RouteRequirement::AdminOnly,
        ] {
            assert_eq!(
                resolve_access(req, AuthState::SignedOut),
                AccessDecision::Redirect(RedirectTarget::Login)
            );
        }
    }

    #[test]
    fn test_authenticated_admits_any_role() {
        for role in [UserRole::Borrower, UserRole::Manager, UserRole::Admin] {
            assert_eq!(
                resolve_access(RouteRequirement::Authenticated, AuthState::SignedIn(role)),
                AccessDecision::Permit
            );
        }
    }

    #[test]
    fn test_manager_tier_excludes_borrower() {
        assert_eq!(
            resolve_access(
                RouteRequirement::ManagerOrAdmin,
                AuthState::SignedIn(UserRole::Borrower)
            ),
            AccessDecision::Redirect(RedirectTarget::Home)
        );
        for role in [UserRole::Manager, UserRole::Admin] {
            assert_eq!(
                resolve_access(RouteRequirement::ManagerOrAdmin, AuthState::SignedIn(role)),
                AccessDecision::Permit
            );
        }
    }

    #[test]
    fn test_admin_tier_excludes_lower_roles() {
        for role in [UserRole::Borrower, UserRole::Manager] {
            assert_eq!(
                resolve_access(RouteRequirement::AdminOnly, AuthState::SignedIn(role)),
                AccessDecision::Redirect(RedirectTarget::Home)
            );
        }
        assert_eq!(
            resolve_access(RouteRequirement::AdminOnly, AuthState::SignedIn(UserRole::Admin)),
            AccessDecision::Permit
        );
    }
}
