// 请求载荷定义
pub mod loan_req;
pub mod application_req;
pub mod user_req;
pub mod payment_req;
pub mod auth_req;

pub use loan_req::{LoanQuery, NewLoan, LoanUpdate};
pub use application_req::{NewApplication, ApplicationUpdate, PaymentStatusUpdate};
pub use user_req::{NewUser, UserUpdate};
pub use payment_req::{CreateIntentRequest, NewPayment};
pub use auth_req::{JwtRequest, JwtResponse};
