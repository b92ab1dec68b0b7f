//! 边定义
//!
//! 只在边中心表示（`EdgeGraph`）内部使用的边记录

use crate::types::{Label, Weight};
use std::fmt;

/// 有向带权边
///
/// 端点不可变，权重可以原地更新。
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edge<L> {
    /// 源顶点标签
    source: L,
    /// 目标顶点标签
    target: L,
    /// 权重（恒为正）
    weight: Weight,
}

impl<L: Label> Edge<L> {
    /// 创建新边
    pub fn new(source: L, target: L, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    pub fn source(&self) -> &L {
        &self.source
    }

    pub fn target(&self) -> &L {
        &self.target
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 更新权重，返回旧权重
    pub fn set_weight(&mut self, weight: Weight) -> Weight {
        std::mem::replace(&mut self.weight, weight)
    }

    /// 是否连接给定的有序顶点对
    pub fn connects(&self, source: &L, target: &L) -> bool {
        &self.source == source && &self.target == target
    }

    /// 是否以给定顶点为源或目标
    pub fn touches(&self, vertex: &L) -> bool {
        &self.source == vertex || &self.target == vertex
    }
}

impl<L: Label> fmt::Display for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.source, self.target, self.weight)
    }
}
