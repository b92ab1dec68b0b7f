//! labeled-graph - 标签顶点上的带权有向图
//!
//! 同一个 [`Graph`] 契约的两种内部表示：
//! - [`VertexGraph`]：顶点记录 + 以源顶点为键的邻接映射
//! - [`EdgeGraph`]：顶点标签集合 + 扁平的边记录列表
//!
//! 两者对任意操作序列的可观察结果完全一致。

pub mod cli;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{EdgeGraph, Graph, VertexGraph};
pub use types::{Label, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
