//! 通用类型定义

use crate::error::{Error, Result};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// 边权重
///
/// 图中存储的权重恒为正；`0` 在 `set` 中表示"删除边"。
pub type Weight = i64;

/// 顶点标识需要满足的约束
///
/// 任何可比较、可哈希、可克隆并能打印的类型都可以作为顶点。
pub trait VertexKey: Clone + Eq + Hash + Debug + Display {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Debug + Display {}

/// 校验传给 `set` 的权重：负数被拒绝，`0` 与正数放行
pub fn check_set_weight(weight: Weight) -> Result<Weight> {
    if weight < 0 {
        tracing::warn!(weight, "拒绝负权重");
        return Err(Error::InvalidWeight(weight));
    }
    Ok(weight)
}

/// 校验可存储的边权重：必须严格为正
pub fn check_edge_weight(weight: Weight) -> Result<Weight> {
    if weight <= 0 {
        return Err(Error::InvalidWeight(weight));
    }
    Ok(weight)
}
