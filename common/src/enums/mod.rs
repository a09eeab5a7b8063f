// 枚举定义模块
pub mod user_role;
pub mod loan;
pub mod application;

pub use user_role::{UserRole, UserStatus};
pub use loan::{LoanCategory, LoanStatus};
pub use application::{ApplicationStatus, PaymentStatus};
