//! 错误类型定义

use crate::types::Weight;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 调用方传入了负权重，图保持调用前的状态
    #[error("边权重不能为负数: {0}")]
    NegativeWeight(Weight),

    /// 内部表示被破坏，属于实现缺陷而非调用错误
    #[error("表示不变量被破坏: {0}")]
    InvariantViolation(String),
}

impl Error {
    pub(crate) fn invariant(msg: impl Into<String>) -> Self {
        Error::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::NegativeWeight(-3).to_string(),
            "边权重不能为负数: -3"
        );
        assert!(Error::invariant("重复顶点 A")
            .to_string()
            .contains("重复顶点 A"));
    }
}
