//! 图核心模块
//!
//! 定义图的公共契约及其两种内部表示

mod edge;
mod edge_graph;
mod graph;
mod vertex;
mod vertex_graph;

pub use edge_graph::EdgeGraph;
pub use graph::Graph;
pub use vertex_graph::VertexGraph;
