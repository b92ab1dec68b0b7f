//! 通用类型定义

use std::fmt;
use std::hash::Hash;

/// 边权重；0 表示边不存在，存储中的权重恒为正
pub type Weight = i64;

/// 顶点标签
///
/// 标签即顶点的身份，同一个图内两两不同。任何可克隆、可哈希、
/// 可打印的类型都可以作为标签，默认使用 `String`。
pub trait Label: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> Label for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_label<L: Label>(_: &L) {}

    #[test]
    fn test_common_label_types() {
        assert_label(&"A".to_string());
        assert_label(&"A");
        assert_label(&42u32);
        assert_label(&'x');
    }
}
