//! 边定义
//!
//! 有向带权边，创建后不可变

use crate::error::Result;
use crate::types::{check_edge_weight, VertexKey, Weight};
use std::fmt;

/// 有向边 source -> target
///
/// 权重恒为正：非正权重的边无法构造。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<V> {
    /// 源顶点
    source: V,
    /// 目标顶点
    target: V,
    /// 边权重
    weight: Weight,
}

impl<V: VertexKey> Edge<V> {
    /// 创建新边
    pub fn new(source: V, target: V, weight: Weight) -> Result<Self> {
        let weight = check_edge_weight(weight)?;
        Ok(Self {
            source,
            target,
            weight,
        })
    }

    /// 获取源顶点
    pub fn source(&self) -> &V {
        &self.source
    }

    /// 获取目标顶点
    pub fn target(&self) -> &V {
        &self.target
    }

    /// 获取边权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 是否连接 source -> target
    pub fn connects(&self, source: &V, target: &V) -> bool {
        &self.source == source && &self.target == target
    }

    /// 是否以 vertex 为端点
    pub fn touches(&self, vertex: &V) -> bool {
        &self.source == vertex || &self.target == vertex
    }

    pub(crate) fn check_rep(&self) {
        assert!(self.weight > 0, "边 {} 的权重非正", self);
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.weight)
    }
}
