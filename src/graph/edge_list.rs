//! 边列表表示
//!
//! 图由顶点集合和有向边列表组成

use super::edge::Edge;
use super::WeightedDigraph;
use crate::error::Result;
use crate::types::{check_set_weight, VertexKey, Weight};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// 边列表图
///
/// 表示不变式：
/// - 每条边的两个端点都在 `vertices` 中
/// - 任意有序对 (source, target) 至多出现一次
/// - 所有边权重为正（由 [`Edge`] 保证）
#[derive(Debug, Clone)]
pub struct EdgeListGraph<V> {
    /// 顶点集合（保持插入顺序）
    vertices: IndexSet<V>,
    /// 有向边
    edges: Vec<Edge<V>>,
}

impl<V: VertexKey> EdgeListGraph<V> {
    /// 创建空图
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// 按预计顶点数创建空图
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        let graph = Self {
            vertices: IndexSet::with_capacity(vertex_capacity),
            edges: Vec::new(),
        };
        graph.check_rep();
        graph
    }

    /// 所有边（按插入顺序）
    pub fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    fn position(&self, source: &V, target: &V) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }

    fn check_rep(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let mut pairs = HashSet::with_capacity(self.edges.len());
        for e in &self.edges {
            assert!(self.vertices.contains(e.source()), "边 {} 缺少源顶点", e);
            assert!(self.vertices.contains(e.target()), "边 {} 缺少目标顶点", e);
            assert!(pairs.insert((e.source(), e.target())), "重复的边 {}", e);
            e.check_rep();
        }
    }
}

impl<V: VertexKey> Default for EdgeListGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey> WeightedDigraph<V> for EdgeListGraph<V> {
    fn add(&mut self, vertex: V) -> bool {
        let added = self.vertices.insert(vertex);
        if added {
            tracing::trace!(count = self.vertices.len(), "添加顶点");
        }
        self.check_rep();
        added
    }

    fn set(&mut self, source: V, target: V, weight: Weight) -> Result<Weight> {
        let weight = check_set_weight(weight)?;

        self.add(source.clone());
        self.add(target.clone());

        let previous = match self.position(&source, &target) {
            Some(idx) if weight > 0 => {
                let previous = self.edges[idx].weight();
                self.edges[idx] = Edge::new(source.clone(), target.clone(), weight)?;
                previous
            }
            Some(idx) => self.edges.remove(idx).weight(),
            None if weight > 0 => {
                self.edges
                    .push(Edge::new(source.clone(), target.clone(), weight)?);
                0
            }
            None => 0,
        };

        tracing::debug!(%source, %target, weight, previous, "设置边");
        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &V) -> bool {
        if !self.vertices.shift_remove(vertex) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(vertex));

        tracing::debug!(%vertex, removed_edges = before - self.edges.len(), "删除顶点");
        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<V> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &V) -> HashMap<V, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &V) -> HashMap<V, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }

    fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<V: fmt::Display> fmt::Display for EdgeListGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices: [")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Edges:")?;
        for e in &self.edges {
            writeln!(f, "  {}", e)?;
        }
        Ok(())
    }
}
