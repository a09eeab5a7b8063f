// 公共模块
// 提供配置、日志、错误处理、领域模型和 EMI 计算等通用功能

pub mod config;
pub mod error;
pub mod logger;
pub mod enums;
pub mod models;
pub mod constants;
pub mod utils;

// 重新导出常用类型和函数
pub use error::{AppError, AppResult};
pub use config::{AppConfig, ApiConfig, FirebaseConfig, StripeConfig, LogConfig};
pub use logger::{init_logger, init_logger_with_level};
pub use enums::{
    UserRole, UserStatus, LoanCategory, LoanStatus, ApplicationStatus, PaymentStatus,
};

// 数据模型
pub use models::{LoanProduct, Application, User, PaymentIntent, PaymentRecord};

// EMI 计算
pub use utils::emi_util::{calculate_emi, emi_from_form};

/// 初始化公共模块
///
/// 这个函数可以用来初始化日志系统
pub fn init() {
    logger::init_logger();
    log::info!("✅ 公共模块初始化完成");
}

/// 初始化公共模块（带自定义日志级别）
pub fn init_with_log_level(level: log::LevelFilter) {
    logger::init_logger_with_level(level);
    log::info!("✅ 公共模块初始化完成");
}
