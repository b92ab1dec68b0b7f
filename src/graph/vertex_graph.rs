//! 顶点中心表示
//!
//! 顶点记录列表 + 以源顶点为键的邻接映射

use super::graph::{validate_weight, Graph};
use super::vertex::Vertex;
use crate::error::{Error, Result};
use crate::types::{Label, Weight};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, trace};

/// 顶点中心的带权有向图
///
/// `vertices` 与 `edges` 的键集合始终一致：每个顶点都有一个（可能为空的）
/// 邻接映射，每个邻接映射的键都是已有顶点。
#[derive(Debug, Clone)]
pub struct VertexGraph<L = String> {
    /// 顶点记录，按插入顺序
    vertices: Vec<Vertex<L>>,
    /// 源顶点 -> (目标顶点 -> 权重)
    edges: IndexMap<L, IndexMap<L, Weight>>,
}

impl<L: Label> VertexGraph<L> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: IndexMap::new(),
        }
    }

    /// 修改操作结束后的自检，只在 debug 构建中生效
    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            if let Err(e) = self.check_invariants() {
                panic!("{}", e);
            }
        }
    }
}

impl<L: Label> Default for VertexGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Graph<L> for VertexGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        // 线性扫描顶点列表查重
        if self.vertices.iter().any(|v| v.is(&vertex)) {
            return false;
        }

        trace!(vertex = %vertex, "添加顶点");
        self.edges.insert(vertex.clone(), IndexMap::new());
        self.vertices.push(Vertex::new(vertex));

        self.check_rep();
        true
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        validate_weight(weight)?;

        self.add(source.clone());
        self.add(target.clone());

        let adjacency = self.edges.entry(source.clone()).or_default();
        let previous = if weight == 0 {
            adjacency.shift_remove(&target).unwrap_or(0)
        } else {
            adjacency.insert(target.clone(), weight).unwrap_or(0)
        };
        trace!(source = %source, target = %target, weight, previous, "设置边权重");

        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        let outgoing = match self.edges.shift_remove(vertex) {
            Some(outgoing) => outgoing,
            None => return false,
        };

        // 清理其余顶点指向它的边
        let mut dropped = outgoing.len();
        for adjacency in self.edges.values_mut() {
            if adjacency.shift_remove(vertex).is_some() {
                dropped += 1;
            }
        }
        self.vertices.retain(|v| !v.is(vertex));
        debug!(vertex = %vertex, dropped, "删除顶点及其关联边");

        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().map(|v| v.label().clone()).collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter_map(|(source, adjacency)| {
                adjacency
                    .get(target)
                    .map(|&weight| (source.clone(), weight))
            })
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.edges
            .get(source)
            .map(|adjacency| {
                adjacency
                    .iter()
                    .map(|(target, &weight)| (target.clone(), weight))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn edge_count(&self) -> usize {
        self.edges.values().map(IndexMap::len).sum()
    }

    fn contains(&self, vertex: &L) -> bool {
        self.edges.contains_key(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn check_invariants(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            if !seen.insert(vertex.label()) {
                return Err(Error::invariant(format!("重复顶点: {}", vertex)));
            }
            if !self.edges.contains_key(vertex.label()) {
                return Err(Error::invariant(format!("顶点 {} 缺少邻接映射", vertex)));
            }
        }
        if self.edges.len() != self.vertices.len() {
            return Err(Error::invariant(format!(
                "邻接映射数 {} 与顶点数 {} 不一致",
                self.edges.len(),
                self.vertices.len()
            )));
        }

        for (source, adjacency) in &self.edges {
            for (target, &weight) in adjacency {
                if !seen.contains(target) {
                    return Err(Error::invariant(format!(
                        "边 {} -> {} 的目标不是图中的顶点",
                        source, target
                    )));
                }
                if weight <= 0 {
                    return Err(Error::invariant(format!(
                        "边 {} -> {} 的权重非正: {}",
                        source, target, weight
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<L: Label> fmt::Display for VertexGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices: {}", self.vertices.len())?;
        writeln!(f, "edges: {}", self.edge_count())?;
        for (source, adjacency) in &self.edges {
            for (target, weight) in adjacency {
                writeln!(f, "{} -> {}: {}", source, target, weight)?;
            }
        }
        Ok(())
    }
}
