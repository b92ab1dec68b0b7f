//! 边中心表示
//!
//! 顶点标签集合 + 扁平的边记录列表

use super::edge::Edge;
use super::graph::{validate_weight, Graph};
use crate::error::{Error, Result};
use crate::types::{Label, Weight};
use indexmap::IndexSet;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::{debug, trace};

/// 边中心的带权有向图
#[derive(Debug, Clone)]
pub struct EdgeGraph<L = String> {
    /// 顶点标签，按插入顺序
    vertices: IndexSet<L>,
    /// 边记录，按创建顺序
    edges: Vec<Edge<L>>,
}

impl<L: Label> EdgeGraph<L> {
    /// 创建空图
    pub fn new() -> Self {
        Self {
            vertices: IndexSet::new(),
            edges: Vec::new(),
        }
    }

    /// 查找有序顶点对上的边
    fn position(&self, source: &L, target: &L) -> Option<usize> {
        self.edges.iter().position(|e| e.connects(source, target))
    }

    fn check_rep(&self) {
        if cfg!(debug_assertions) {
            if let Err(e) = self.check_invariants() {
                panic!("{}", e);
            }
        }
    }
}

impl<L: Label> Default for EdgeGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Graph<L> for EdgeGraph<L> {
    fn add(&mut self, vertex: L) -> bool {
        let inserted = self.vertices.insert(vertex.clone());
        if inserted {
            trace!(vertex = %vertex, "添加顶点");
            self.check_rep();
        }
        inserted
    }

    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight> {
        validate_weight(weight)?;

        self.add(source.clone());
        self.add(target.clone());

        let previous = match (self.position(&source, &target), weight) {
            (Some(index), 0) => self.edges.remove(index).weight(),
            (Some(index), _) => self.edges[index].set_weight(weight),
            (None, 0) => 0,
            (None, _) => {
                self.edges
                    .push(Edge::new(source.clone(), target.clone(), weight));
                0
            }
        };
        trace!(source = %source, target = %target, weight, previous, "设置边权重");

        self.check_rep();
        Ok(previous)
    }

    fn remove(&mut self, vertex: &L) -> bool {
        if !self.vertices.shift_remove(vertex) {
            return false;
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(vertex));
        debug!(
            vertex = %vertex,
            dropped = before - self.edges.len(),
            "删除顶点及其关联边"
        );

        self.check_rep();
        true
    }

    fn vertices(&self) -> HashSet<L> {
        self.vertices.iter().cloned().collect()
    }

    fn sources(&self, target: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.target() == target)
            .map(|e| (e.source().clone(), e.weight()))
            .collect()
    }

    fn targets(&self, source: &L) -> HashMap<L, Weight> {
        self.edges
            .iter()
            .filter(|e| e.source() == source)
            .map(|e| (e.target().clone(), e.weight()))
            .collect()
    }

    /// 只看顶点集合；没有顶点时不可能有边
    fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn contains(&self, vertex: &L) -> bool {
        self.vertices.contains(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn check_invariants(&self) -> Result<()> {
        let mut pairs = HashSet::with_capacity(self.edges.len());
        for edge in &self.edges {
            if !self.vertices.contains(edge.source()) {
                return Err(Error::invariant(format!("边 {} 的源不是图中的顶点", edge)));
            }
            if !self.vertices.contains(edge.target()) {
                return Err(Error::invariant(format!("边 {} 的目标不是图中的顶点", edge)));
            }
            if edge.weight() <= 0 {
                return Err(Error::invariant(format!("边 {} 的权重非正", edge)));
            }
            if !pairs.insert((edge.source(), edge.target())) {
                return Err(Error::invariant(format!("重复边: {}", edge)));
            }
        }
        Ok(())
    }
}

impl<L: Label> fmt::Display for EdgeGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices: {}", self.vertices.len())?;
        writeln!(f, "edges: {}", self.edges.len())?;
        for edge in &self.edges {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(label: &str) -> String {
        label.to_string()
    }

    #[test]
    fn test_set_updates_in_place() {
        let mut graph: EdgeGraph = EdgeGraph::new();
        graph.set(s("A"), s("B"), 5).unwrap();
        graph.set(s("B"), s("C"), 1).unwrap();

        assert_eq!(graph.set(s("A"), s("B"), 9).unwrap(), 5);
        assert_eq!(graph.edges.len(), 2);
        assert_eq!(graph.edges[0].weight(), 9);
    }

    #[test]
    fn test_zero_weight_removes_record() {
        let mut graph: EdgeGraph = EdgeGraph::new();
        graph.set(s("A"), s("B"), 5).unwrap();

        assert_eq!(graph.set(s("A"), s("B"), 0).unwrap(), 5);
        assert!(graph.edges.is_empty());
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_remove_filters_touching_edges() {
        let mut graph: EdgeGraph = EdgeGraph::new();
        graph.set(s("A"), s("B"), 1).unwrap();
        graph.set(s("B"), s("C"), 2).unwrap();
        graph.set(s("C"), s("A"), 3).unwrap();
        graph.set(s("B"), s("B"), 4).unwrap();

        assert!(graph.remove(&s("B")));

        assert_eq!(graph.edges.len(), 1);
        assert!(graph.edges[0].connects(&s("C"), &s("A")));
    }

    #[test]
    fn test_display_follows_creation_order() {
        let mut graph: EdgeGraph = EdgeGraph::new();
        graph.set(s("A"), s("B"), 5).unwrap();
        graph.set(s("B"), s("A"), 1).unwrap();
        graph.set(s("A"), s("C"), 2).unwrap();

        assert_eq!(
            graph.to_string(),
            "vertices: 3\nedges: 3\nA -> B: 5\nB -> A: 1\nA -> C: 2\n"
        );
    }

    #[test]
    fn test_check_invariants_detects_duplicate_pair() {
        let mut graph: EdgeGraph = EdgeGraph::new();
        graph.set(s("A"), s("B"), 5).unwrap();
        graph.edges.push(Edge::new(s("A"), s("B"), 6));

        assert!(matches!(
            graph.check_invariants(),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_check_invariants_detects_dangling_endpoint() {
        let mut graph: EdgeGraph = EdgeGraph::new();
        graph.add(s("A"));
        graph.edges.push(Edge::new(s("A"), s("ghost"), 1));

        assert!(graph.check_invariants().is_err());
    }

    #[test]
    #[should_panic(expected = "表示不变量被破坏")]
    fn test_mutation_on_corrupt_graph_panics() {
        let mut graph: EdgeGraph = EdgeGraph::new();
        graph.edges.push(Edge::new(s("A"), s("B"), -2));

        graph.add(s("C"));
    }
}
