// 工具模块
pub mod emi_util;
pub mod serde_helpers;
