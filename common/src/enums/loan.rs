use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// 贷款产品分类
///
/// 线上传输使用首字母大写的英文名（"Business"、"Education" 等）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, AsRefStr)]
pub enum LoanCategory {
    Business,
    Education,
    Agriculture,
    Healthcare,
    Personal,
}

impl LoanCategory {
    /// 所有分类，用于筛选下拉框
    pub fn all() -> Vec<LoanCategory> {
        Self::iter().collect()
    }
}

/// 贷款产品状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LoanStatus {
    #[default]
    Active,
    Inactive,
}
