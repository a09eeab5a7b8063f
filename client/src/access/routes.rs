//! 静态路由表与导航链接
//!
//! 守卫、导航栏、侧边栏共用这张表，链接只在判定放行时给出。

use common::constants::routes;
use common::enums::UserRole;

use super::{resolve_access, AccessDecision, AuthState, RouteRequirement};

/// 一条路由：路径模式（`:` 开头的段是通配）与访问门槛
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub pattern: &'static str,
    pub requirement: RouteRequirement,
}

pub const ROUTES: &[Route] = &[
    // 公开页
    Route { pattern: routes::HOME, requirement: RouteRequirement::Public },
    Route { pattern: routes::LOGIN, requirement: RouteRequirement::Public },
    Route { pattern: routes::REGISTER, requirement: RouteRequirement::Public },
    Route { pattern: routes::ALL_LOANS, requirement: RouteRequirement::Public },
    Route { pattern: routes::ABOUT, requirement: RouteRequirement::Public },
    Route { pattern: routes::CONTACT, requirement: RouteRequirement::Public },
    // 需登录
    Route { pattern: routes::LOAN_DETAILS, requirement: RouteRequirement::Authenticated },
    Route { pattern: routes::LOAN_APPLICATION, requirement: RouteRequirement::Authenticated },
    Route { pattern: routes::PAYMENT, requirement: RouteRequirement::Authenticated },
    Route { pattern: routes::PAYMENT_SUCCESS, requirement: RouteRequirement::Authenticated },
    Route { pattern: routes::DASHBOARD, requirement: RouteRequirement::Authenticated },
    Route { pattern: routes::DASHBOARD_MY_LOANS, requirement: RouteRequirement::Authenticated },
    Route { pattern: routes::DASHBOARD_PROFILE, requirement: RouteRequirement::Authenticated },
    // 经理及以上
    Route { pattern: routes::DASHBOARD_ADD_LOAN, requirement: RouteRequirement::ManagerOrAdmin },
    Route { pattern: routes::DASHBOARD_MANAGE_LOANS, requirement: RouteRequirement::ManagerOrAdmin },
    Route { pattern: routes::DASHBOARD_PENDING_APPLICATIONS, requirement: RouteRequirement::ManagerOrAdmin },
    Route { pattern: routes::DASHBOARD_APPROVED_APPLICATIONS, requirement: RouteRequirement::ManagerOrAdmin },
    Route { pattern: routes::DASHBOARD_MANAGER_PROFILE, requirement: RouteRequirement::ManagerOrAdmin },
    // 仅管理员
    Route { pattern: routes::DASHBOARD_MANAGE_USERS, requirement: RouteRequirement::AdminOnly },
    Route { pattern: routes::DASHBOARD_ALL_LOANS, requirement: RouteRequirement::AdminOnly },
    Route { pattern: routes::DASHBOARD_LOAN_APPLICATIONS, requirement: RouteRequirement::AdminOnly },
];

/// 逐段匹配，`:` 开头的模式段匹配任意非空段
fn pattern_matches(pattern: &str, path: &str) -> bool {
    let mut pattern_segs = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segs = path.split('/').filter(|s| !s.is_empty());

    loop {
        match (pattern_segs.next(), path_segs.next()) {
            (None, None) => return true,
            (Some(p), Some(s)) => {
                if !p.starts_with(':') && p != s {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// 查路径的访问门槛，表外路径视为公开（404 页不设门槛）
pub fn requirement_for(path: &str) -> RouteRequirement {
    ROUTES
        .iter()
        .find(|r| pattern_matches(r.pattern, path))
        .map(|r| r.requirement)
        .unwrap_or(RouteRequirement::Public)
}

/// 路由守卫
pub fn guard(path: &str, state: AuthState) -> AccessDecision {
    resolve_access(requirement_for(path), state)
}

/// 导航链接
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const PUBLIC_NAV: &[NavLink] = &[
    NavLink { label: "Home", path: routes::HOME },
    NavLink { label: "All Loans", path: routes::ALL_LOANS },
    NavLink { label: "About Us", path: routes::ABOUT },
    NavLink { label: "Contact", path: routes::CONTACT },
];

const DASHBOARD_NAV: NavLink = NavLink { label: "Dashboard", path: routes::DASHBOARD };

const BORROWER_SIDEBAR: &[NavLink] = &[
    NavLink { label: "My Loans", path: routes::DASHBOARD_MY_LOANS },
    NavLink { label: "Profile", path: routes::DASHBOARD_PROFILE },
];

const MANAGER_SIDEBAR: &[NavLink] = &[
    NavLink { label: "Add Loan", path: routes::DASHBOARD_ADD_LOAN },
    NavLink { label: "Manage Loans", path: routes::DASHBOARD_MANAGE_LOANS },
    NavLink { label: "Pending Applications", path: routes::DASHBOARD_PENDING_APPLICATIONS },
    NavLink { label: "Approved Applications", path: routes::DASHBOARD_APPROVED_APPLICATIONS },
    NavLink { label: "Manager Profile", path: routes::DASHBOARD_MANAGER_PROFILE },
];

const ADMIN_SIDEBAR: &[NavLink] = &[
    NavLink { label: "Manage Users", path: routes::DASHBOARD_MANAGE_USERS },
    NavLink { label: "All Loans", path: routes::DASHBOARD_ALL_LOANS },
    NavLink { label: "Loan Applications", path: routes::DASHBOARD_LOAN_APPLICATIONS },
];

/// 只保留判定放行的链接
fn permitted(state: AuthState, candidates: &[NavLink]) -> Vec<NavLink> {
    candidates
        .iter()
        .copied()
        .filter(|link| guard(link.path, state) == AccessDecision::Permit)
        .collect()
}

/// 顶部导航：公开链接，登录后追加仪表盘入口
pub fn nav_links(state: AuthState) -> Vec<NavLink> {
    let mut links = permitted(state, PUBLIC_NAV);
    if guard(DASHBOARD_NAV.path, state) == AccessDecision::Permit {
        links.push(DASHBOARD_NAV);
    }
    links
}

/// 仪表盘侧边栏：各角色自己的链接集，再过一遍判定
pub fn dashboard_links(state: AuthState) -> Vec<NavLink> {
    let candidates = match state {
        AuthState::SignedIn(UserRole::Borrower) => BORROWER_SIDEBAR,
        AuthState::SignedIn(UserRole::Manager) => MANAGER_SIDEBAR,
        AuthState::SignedIn(UserRole::Admin) => ADMIN_SIDEBAR,
        _ => return Vec::new(),
    };
    permitted(state, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::RedirectTarget;

    #[test]
    fn test_wildcard_segment_matching() {
        assert!(pattern_matches("/loan/:id", "/loan/abc123"));
        assert!(pattern_matches("/payment/:applicationId", "/payment/42"));
        assert!(!pattern_matches("/loan/:id", "/loan"));
        assert!(!pattern_matches("/loan/:id", "/loan/abc/extra"));
        assert!(pattern_matches("/", "/"));
    }

    #[test]
    fn test_unknown_path_is_public() {
        assert_eq!(requirement_for("/no-such-page"), RouteRequirement::Public);
    }

    #[test]
    fn test_guard_matches_policy() {
        assert_eq!(guard("/all-loans", AuthState::SignedOut), AccessDecision::Permit);
        assert_eq!(
            guard("/dashboard", AuthState::SignedOut),
            AccessDecision::Redirect(RedirectTarget::Login)
        );
        assert_eq!(guard("/dashboard", AuthState::Loading), AccessDecision::Pending);
        assert_eq!(
            guard("/dashboard/manage-users", AuthState::SignedIn(UserRole::Manager)),
            AccessDecision::Redirect(RedirectTarget::Home)
        );
        assert_eq!(
            guard("/loan/abc123", AuthState::SignedIn(UserRole::Borrower)),
            AccessDecision::Permit
        );
    }

    #[test]
    fn test_nav_links_grow_after_sign_in() {
        let anon = nav_links(AuthState::SignedOut);
        assert!(anon.iter().all(|l| l.path != routes::DASHBOARD));

        let signed = nav_links(AuthState::SignedIn(UserRole::Borrower));
        assert!(signed.iter().any(|l| l.path == routes::DASHBOARD));
    }

    #[test]
    fn test_sidebar_sets_per_role() {
        assert!(dashboard_links(AuthState::Loading).is_empty());
        assert!(dashboard_links(AuthState::SignedOut).is_empty());

        let borrower = dashboard_links(AuthState::SignedIn(UserRole::Borrower));
        assert_eq!(borrower.len(), 2);

        let manager = dashboard_links(AuthState::SignedIn(UserRole::Manager));
        assert_eq!(manager.len(), 5);

        let admin = dashboard_links(AuthState::SignedIn(UserRole::Admin));
        assert_eq!(admin.len(), 3);
        assert!(admin.iter().any(|l| l.path == routes::DASHBOARD_MANAGE_USERS));
    }

    #[test]
    fn test_sidebar_never_emits_denied_links() {
        // 任何状态下，给出的链接都必须是判定放行的
        for state in [
            AuthState::Loading,
            AuthState::SignedOut,
            AuthState::SignedIn(UserRole::Borrower),
            AuthState::SignedIn(UserRole::Manager),
            AuthState::SignedIn(UserRole::Admin),
        ] {
            for link in dashboard_links(state) {
                assert_eq!(guard(link.path, state), AccessDecision::Permit);
            }
        }
    }
}
