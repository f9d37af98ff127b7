//! weighted-digraph - 可变带权有向图
//!
//! 提供带权有向图的抽象数据类型，支持：
//! - 添加/删除顶点，设置/删除带权边
//! - 按目标查询来源、按来源查询目标（返回快照）
//! - 两种可互换的内部表示：边列表与邻接表
//! - 可选的加锁共享句柄

pub mod config;
pub mod error;
pub mod graph;
pub mod sync;
pub mod types;

// 重导出常用类型
pub use config::{new_graph, GraphConfig, Representation};
pub use error::{Error, Result};
pub use graph::{AdjacencyGraph, Edge, EdgeListGraph, Vertex, WeightedDigraph};
pub use sync::SharedGraph;
pub use types::{VertexKey, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
