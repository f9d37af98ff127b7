//! 跨线程共享
//!
//! 图本身不是线程安全的；需要多线程访问时由调用方持有 [`SharedGraph`]，
//! 每个实例一把读写锁。

use crate::error::Result;
use crate::graph::WeightedDigraph;
use crate::types::{VertexKey, Weight};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;
use std::sync::Arc;

/// 加锁的图句柄，克隆后指向同一个图
pub struct SharedGraph<V, G> {
    inner: Arc<RwLock<G>>,
    _vertex: PhantomData<fn() -> V>,
}

impl<V, G> Clone for SharedGraph<V, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _vertex: PhantomData,
        }
    }
}

impl<V: VertexKey, G: WeightedDigraph<V>> SharedGraph<V, G> {
    pub fn new(graph: G) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
            _vertex: PhantomData,
        }
    }

    /// 持读锁执行 f
    pub fn read<R>(&self, f: impl FnOnce(&G) -> R) -> R {
        f(&self.inner.read())
    }

    /// 持写锁执行 f，多个操作在同一把锁内完成
    pub fn write<R>(&self, f: impl FnOnce(&mut G) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn add(&self, vertex: V) -> bool {
        self.inner.write().add(vertex)
    }

    pub fn set(&self, source: V, target: V, weight: Weight) -> Result<Weight> {
        self.inner.write().set(source, target, weight)
    }

    pub fn remove(&self, vertex: &V) -> bool {
        self.inner.write().remove(vertex)
    }

    pub fn vertices(&self) -> HashSet<V> {
        self.inner.read().vertices()
    }

    pub fn sources(&self, target: &V) -> HashMap<V, Weight> {
        self.inner.read().sources(target)
    }

    pub fn targets(&self, source: &V) -> HashMap<V, Weight> {
        self.inner.read().targets(source)
    }

    /// 调试输出
    pub fn render(&self) -> String {
        self.inner.read().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, EdgeListGraph};
    use std::thread;

    #[test]
    fn test_shared_graph_concurrent_writers() {
        let shared: SharedGraph<String, _> = SharedGraph::new(AdjacencyGraph::new());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let g = shared.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        g.set(format!("t{}", t), format!("v{}", i), i + 1).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(shared.vertices().len(), 4 + 50);
        assert_eq!(shared.targets(&"t0".to_string()).len(), 50);
        assert_eq!(shared.sources(&"v9".to_string()).len(), 4);
        assert_eq!(shared.read(|g| g.edge_count()), 200);
    }

    #[test]
    fn test_shared_graph_write_closure() {
        let shared: SharedGraph<&str, _> = SharedGraph::new(EdgeListGraph::new());

        let previous = shared.write(|g| {
            g.set("A", "B", 3)?;
            g.set("A", "B", 8)
        });
        assert_eq!(previous, Ok(3));

        assert!(shared.remove(&"B"));
        assert!(!shared.add("A"));
        assert!(shared.targets(&"A").is_empty());
        assert!(shared.render().contains("A"));
    }
}
