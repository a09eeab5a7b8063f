// LoanLink 客户端
//
// 微贷平台的客户端层：类型化的 REST 客户端、身份与会话管理、
// 基于角色的视图访问判定、表单校验和申请费结账流程。
// 业务规则、持久化与授权强制均在外部后端，这里只做反映与请求。

pub mod http;
pub mod api;
pub mod auth;
pub mod session;
pub mod access;
pub mod validate;
pub mod payment;

// 重新导出常用类型
pub use http::ApiClient;
pub use api::Api;
pub use auth::{FirebaseAuth, AuthUser, IdpProvider};
pub use session::{Session, SessionManager};
pub use access::{resolve_access, AccessDecision, AuthState, RedirectTarget, RouteRequirement};
pub use payment::{CheckoutService, PaymentGateway, StripeGateway};
