//! 邻接表表示
//!
//! 图由顶点列表组成，每个顶点保存自己的出边

use super::vertex::Vertex;
use super::WeightedDigraph;
use crate::error::Result;
use crate::types::{check_set_weight, VertexKey, Weight};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// 邻接表图
///
/// 表示不变式：
/// - 顶点名称不重复，且与映射键一致
/// - 每条出边的目标顶点都存在
/// - 所有边权重为正
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V> {
    /// 顶点名称 -> 顶点（保持插入顺序）
    vertices: IndexMap<V, Vertex<V>>,
}

impl<V: VertexKey> AdjacencyGraph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 按预计顶点数创建空图
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        let graph = Self {
            vertices: IndexMap::with_capacity(vertex_capacity),
        };
        graph.check_rep();
        graph
    }

    /// 获取顶点
    pub fn vertex(&self, name: &V) -> Option<&Vertex<V>> {
        self.vertices.get(name)
    }

    fn check_rep(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        for (name, vertex) in &self.vertices {
            assert_eq!(name, vertex.name(), "顶点键与名称不一致");
            for (target, _) in vertex.targets() {
                assert!(
                    self.vertices.contains_key(target),
                    "边 {} -> {} 的目标顶点不存在",
                    name,
                    target
                );
            }
            vertex.check_rep();
        }
    }
}

impl<V: VertexKey> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey> WeightedDigraph<V> for AdjacencyGraph<V> {
    fn add(&mut self, vertex: V) -> bool {
        if self.vertices.contains_key(&vertex) {
            return false;
        }
        tracing::trace!(%vertex, "添加顶点");
        self.vertices.insert(vertex.clone(), Vertex::new(vertex));
        self.check_rep();
        true
    }

    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight> {
        let weight = check_set_weight(weight)?;

        self.add(source.clone());
        self.add(target.clone());
        let previous = self
            .vertices
            .entry(source.clone())
            .or_insert_with(|| Vertex::new(source.clone()))
            .set_edge(target.clone(), weight)?;

        tracing::debug!(%source, %target, weight, previous, "设置边");
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &V) -> bool {
        if self.vertices.shift_remove(vertex).is_none() {
            return false;
        }

        let mut removed_incoming = 0;
        for other in self.vertices.values_mut() {
            if other.remove_edge(vertex) > 0 {
                removed_incoming += 1;
            }
        }

        tracing::debug!(%vertex, removed_incoming, "删除顶点");
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<V> {
        self.vertices.keys().cloned().collect()
    }

    fn sources(&self, target: &V) -> HashMap<V, Weight> {
        self.vertices
            .values()
            .filter_map(|v| match v.weight(target) {
                0 => None,
                w => Some((v.name().clone(), w)),
            })
            .collect()
    }

    fn targets(&self, source: &V) -> HashMap<V, Weight> {
        self.vertices
            .get(source)
            .map(Vertex::edges)
            .unwrap_or_default()
    }

    fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::out_degree).sum()
    }

    fn weight(&self, source: &V, target: &V) -> Weight {
        self.vertices.get(source).map_or(0, |v| v.weight(target))
    }

    fn out_degree(&self, vertex: &V) -> usize {
        self.vertices.get(vertex).map_or(0, Vertex::out_degree)
    }
}

impl<V: fmt::Display> fmt::Display for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices.values() {
            writeln!(f, "{}", vertex)?;
        }
        Ok(())
    }
}
