//! 错误类型定义

use crate::types::Weight;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("无效的边权重: {0}（权重必须为非负整数）")]
    InvalidWeight(Weight),

    #[error("配置错误: {0}")]
    InvalidConfig(String),
}
