// 数据模型模块
//
// 客户端消费（而非拥有）的后端资源模型，线上传输为 camelCase JSON

pub mod loan;
pub mod application;
pub mod user;
pub mod payment;
pub mod stats;
pub mod req;

pub use loan::{LoanProduct, LoanPage};
pub use application::Application;
pub use user::User;
pub use payment::{PaymentIntent, PaymentRecord};
pub use stats::{AdminStats, ManagerStats};
