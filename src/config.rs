//! 图配置
//!
//! 选择内部表示并按配置创建图实例

use crate::error::{Error, Result};
use crate::graph::{AdjacencyGraph, EdgeListGraph, WeightedDigraph};
use crate::types::VertexKey;
use std::fmt;
use std::str::FromStr;

/// 图的内部表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    /// 顶点集合 + 边列表
    EdgeList,
    /// 每个顶点保存出边映射
    #[default]
    Adjacency,
}

impl Representation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::EdgeList => "edge-list",
            Representation::Adjacency => "adjacency",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Representation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "edge-list" | "edge_list" | "edges" => Ok(Representation::EdgeList),
            "adjacency" | "vertices" => Ok(Representation::Adjacency),
            other => Err(Error::InvalidConfig(format!("未知的图表示: {}", other))),
        }
    }
}

/// 图配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// 内部表示
    pub representation: Representation,
    /// 预计顶点数（仅用于预分配）
    pub vertex_capacity: usize,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    pub fn with_vertex_capacity(mut self, vertex_capacity: usize) -> Self {
        self.vertex_capacity = vertex_capacity;
        self
    }
}

/// 按配置创建空图
pub fn new_graph<V: VertexKey + 'static>(config: &GraphConfig) -> Box<dyn WeightedDigraph<V>> {
    tracing::debug!(
        representation = %config.representation,
        vertex_capacity = config.vertex_capacity,
        "创建图"
    );
    match config.representation {
        Representation::EdgeList => Box::new(EdgeListGraph::with_capacity(config.vertex_capacity)),
        Representation::Adjacency => {
            Box::new(AdjacencyGraph::with_capacity(config.vertex_capacity))
        }
    }
}
