/// 应用常量定义

/// 认证请求头名称
pub const AUTH_HEADER_NAME: &str = "Authorization";

/// 申请费（美分），对应前端展示的 $10.00
pub const APPLICATION_FEE_CENTS: u64 = 1000;

/// 申请费（美元）
pub const APPLICATION_FEE_DOLLARS: u64 = 10;

/// 贷款申请最低金额（美元）
pub const MIN_LOAN_AMOUNT: u64 = 100;

/// 月收入最低要求（美元）
pub const MIN_MONTHLY_INCOME: u64 = 100;

/// 路由路径
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const ALL_LOANS: &str = "/all-loans";
    pub const ABOUT: &str = "/about";
    pub const CONTACT: &str = "/contact";
    pub const LOAN_DETAILS: &str = "/loan/:id";
    pub const LOAN_APPLICATION: &str = "/loan-application/:id";
    pub const PAYMENT: &str = "/payment/:applicationId";
    pub const PAYMENT_SUCCESS: &str = "/payment-success";

    pub const DASHBOARD: &str = "/dashboard";
    pub const DASHBOARD_MY_LOANS: &str = "/dashboard/my-loans";
    pub const DASHBOARD_PROFILE: &str = "/dashboard/profile";
    pub const DASHBOARD_ADD_LOAN: &str = "/dashboard/add-loan";
    pub const DASHBOARD_MANAGE_LOANS: &str = "/dashboard/manage-loans";
    pub const DASHBOARD_PENDING_APPLICATIONS: &str = "/dashboard/pending-applications";
    pub const DASHBOARD_APPROVED_APPLICATIONS: &str = "/dashboard/approved-applications";
    pub const DASHBOARD_MANAGER_PROFILE: &str = "/dashboard/manager-profile";
    pub const DASHBOARD_MANAGE_USERS: &str = "/dashboard/manage-users";
    pub const DASHBOARD_ALL_LOANS: &str = "/dashboard/all-loans";
    pub const DASHBOARD_LOAN_APPLICATIONS: &str = "/dashboard/loan-applications";
}
