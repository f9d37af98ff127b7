//! 图核心模块
//!
//! 定义带权有向图的抽象接口 [`WeightedDigraph`] 以及它的两种内部表示：
//! - [`EdgeListGraph`]：顶点集合 + 边列表
//! - [`AdjacencyGraph`]：顶点列表，每个顶点保存自己的出边映射
//!
//! 两种表示对外行为完全一致，共用同一套实例测试。


mod adjacency;
mod edge;
mod edge_list;
mod vertex;

pub use adjacency::AdjacencyGraph;
pub use edge::Edge;
pub use edge_list::EdgeListGraph;
pub use vertex::Vertex;

use crate::error::Result;
use crate::types::{VertexKey, Weight};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// 可变的带权有向图
///
/// 顶点是任意可哈希的标识；边是有序对 (source, target)，权重恒为正。
/// 同一有序对之间最多一条边。所有查询都返回独立的快照，修改返回值不会影响图。
///
/// `Display` 输出仅用于调试，格式不作保证，只保证包含所有顶点与边权重。
pub trait WeightedDigraph<V: VertexKey>: fmt::Display {
    /// 添加顶点，若为新顶点返回 `true`，已存在则不做任何修改并返回 `false`
    fn add(&mut self, vertex: V) -> bool;

    /// 设置边 source -> target 的权重
    ///
    /// 缺失的端点会被自动添加。`weight > 0` 创建或覆盖边，`weight == 0` 删除边，
    /// `weight < 0` 返回 [`Error::InvalidWeight`](crate::Error::InvalidWeight)
    /// 且图保持不变。返回该边之前的权重（不存在时为 0）。
    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight>;

    /// 删除顶点及所有以它为端点的边，顶点存在时返回 `true`
    fn remove(&mut self, vertex: &V) -> bool;

    /// 所有顶点（副本）
    fn vertices(&self) -> HashSet<V>;

    /// 指向 target 的所有边：源顶点 -> 权重（副本）
    fn sources(&self, target: &V) -> HashMap<V, Weight>;

    /// 从 source 出发的所有边：目标顶点 -> 权重（副本）
    fn targets(&self, source: &V) -> HashMap<V, Weight>;

    /// 顶点是否存在
    fn contains(&self, vertex: &V) -> bool {
        self.vertices().contains(vertex)
    }

    /// 获取顶点数量
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// 获取边数量
    fn edge_count(&self) -> usize {
        self.vertices().iter().map(|v| self.targets(v).len()).sum()
    }

    /// 获取边 source -> target 的权重，不存在时返回 0
    fn weight(&self, source: &V, target: &V) -> Weight {
        self.targets(source).get(target).copied().unwrap_or(0)
    }

    /// 获取顶点的出度
    fn out_degree(&self, vertex: &V) -> usize {
        self.targets(vertex).len()
    }

    /// 获取顶点的入度
    fn in_degree(&self, vertex: &V) -> usize {
        self.sources(vertex).len()
    }
}
