//! 顶点定义
//!
//! 邻接表表示中的顶点：名称加出边映射 target -> weight

use crate::error::Result;
use crate::types::{check_set_weight, VertexKey, Weight};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fmt;

/// 顶点
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    /// 顶点名称
    name: V,
    /// 出边：目标顶点 -> 权重
    edges: IndexMap<V, Weight>,
}

impl<V: VertexKey> Vertex<V> {
    /// 创建新顶点
    pub fn new(name: V) -> Self {
        Self {
            name,
            edges: IndexMap::new(),
        }
    }

    /// 获取顶点名称
    pub fn name(&self) -> &V {
        &self.name
    }

    /// 获取所有出边（副本）
    pub fn edges(&self) -> HashMap<V, Weight> {
        self.edges
            .iter()
            .map(|(target, &weight)| (target.clone(), weight))
            .collect()
    }

    /// 获取到 target 的边权重，不存在时返回 0
    pub fn weight(&self, target: &V) -> Weight {
        self.edges.get(target).copied().unwrap_or(0)
    }

    /// 设置到 target 的边
    ///
    /// `weight == 0` 删除边，负权重被拒绝且不修改状态。返回之前的权重。
    pub fn set_edge(&mut self, target: V, weight: Weight) -> Result<Weight> {
        let weight = check_set_weight(weight)?;
        if weight == 0 {
            return Ok(self.remove_edge(&target));
        }
        Ok(self.edges.insert(target, weight).unwrap_or(0))
    }

    /// 删除到 target 的边，返回之前的权重（不存在时为 0）
    pub fn remove_edge(&mut self, target: &V) -> Weight {
        self.edges.shift_remove(target).unwrap_or(0)
    }

    /// 出边数量
    pub fn out_degree(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn targets(&self) -> impl Iterator<Item = (&V, Weight)> {
        self.edges.iter().map(|(target, &weight)| (target, weight))
    }

    pub(crate) fn check_rep(&self) {
        for (target, &weight) in &self.edges {
            assert!(weight > 0, "边 {} -> {} 的权重非正", self.name, target);
        }
    }
}

impl<V: fmt::Display> fmt::Display for Vertex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {{", self.name)?;
        for (i, (target, weight)) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", target, weight)?;
        }
        write!(f, "}}")
    }
}
