//! 图抽象
//!
//! 带权有向图的公共契约，两种内部表示（顶点中心、边中心）都实现它，
//! 调用方只依赖这个 trait，不依赖具体表示。

use crate::error::{Error, Result};
use crate::types::{Label, Weight};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// 带权有向图
///
/// 顶点由标签唯一标识；边是有序顶点对上的正权重，权重为 0 即表示边不存在。
/// 每个操作都把图从一个合法状态变到另一个合法状态：
///
/// - 顶点标签两两不同
/// - 每条边的两个端点都是图中的顶点
/// - 存储的权重恒为正
/// - 同一有序顶点对之间至多一条边
///
/// 所有查询返回的容器都是独立副本，修改它们不会影响图本身。
/// `Display` 输出顶点数和每条有向边，给定相同的操作历史输出确定。
pub trait Graph<L: Label>: fmt::Display {
    /// 添加顶点
    ///
    /// 顶点不存在时插入并返回 `true`；已存在时不做任何修改，返回 `false`。
    fn add(&mut self, vertex: L) -> bool;

    /// 设置 `source -> target` 边的权重
    ///
    /// 缺失的端点会先被创建为孤立顶点（即使权重为 0）。权重为 0 时删除边，
    /// 否则创建或覆盖。返回之前的权重，边原本不存在时返回 0。
    ///
    /// 负权重返回 [`Error::NegativeWeight`]，图保持调用前的状态。
    fn set(&mut self, source: L, target: L, weight: Weight) -> Result<Weight>;

    /// 删除顶点及所有以它为源或目标的边
    ///
    /// 顶点不存在时返回 `false`，图保持不变。
    fn remove(&mut self, vertex: &L) -> bool;

    /// 所有顶点标签的快照
    fn vertices(&self) -> HashSet<L>;

    /// 所有指向 `target` 的源顶点及对应边的权重
    fn sources(&self, target: &L) -> HashMap<L, Weight>;

    /// `source` 指向的所有目标顶点及对应边的权重
    fn targets(&self, source: &L) -> HashMap<L, Weight>;

    /// 图中没有任何顶点（因而也没有任何边）
    fn is_empty(&self) -> bool;

    /// 获取边数量
    fn edge_count(&self) -> usize;

    /// 校验内部表示的不变量
    ///
    /// 返回 `Err` 说明实现本身有缺陷，而不是调用方用错了接口。
    fn check_invariants(&self) -> Result<()>;

    /// 是否包含顶点
    fn contains(&self, vertex: &L) -> bool {
        self.vertices().contains(vertex)
    }

    /// 获取顶点数量
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }
}

/// 拒绝负权重，必须在任何修改之前调用
pub(crate) fn validate_weight(weight: Weight) -> Result<()> {
    if weight < 0 {
        return Err(Error::NegativeWeight(weight));
    }
    Ok(())
}
