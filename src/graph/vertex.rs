//! 顶点定义
//!
//! 只在顶点中心表示（`VertexGraph`）内部使用的顶点记录

use crate::types::Label;
use std::fmt;

/// 顶点，身份即标签，创建后不可变
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vertex<L> {
    label: L,
}

impl<L: Label> Vertex<L> {
    /// 创建新顶点
    pub fn new(label: L) -> Self {
        Self { label }
    }

    /// 获取顶点标签
    pub fn label(&self) -> &L {
        &self.label
    }

    /// 标签是否匹配
    pub fn is(&self, label: &L) -> bool {
        &self.label == label
    }
}

impl<L: Label> fmt::Display for Vertex<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}
