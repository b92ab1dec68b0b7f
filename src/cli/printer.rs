//! 结果打印器
//!
//! 把图的查询结果格式化为表格

use crate::types::Weight;
use prettytable::{format, row, Table};
use std::collections::{HashMap, HashSet};

/// 结果打印器
#[derive(Debug, Default, Clone, Copy)]
pub struct Printer;

impl Printer {
    pub fn new() -> Self {
        Self
    }

    /// 打印顶点集合，按标签排序
    pub fn print_vertices(&self, vertices: &HashSet<String>) -> String {
        if vertices.is_empty() {
            return "Empty set\n".to_string();
        }

        let mut labels: Vec<&String> = vertices.iter().collect();
        labels.sort();

        let mut table = Self::table();
        table.set_titles(row!["Vertex"]);
        for label in &labels {
            table.add_row(row![label]);
        }
        format!("{}{} vertex(es)\n", table, labels.len())
    }

    /// 打印 标签 -> 权重 映射，按标签排序
    pub fn print_weights(&self, column: &str, weights: &HashMap<String, Weight>) -> String {
        if weights.is_empty() {
            return "Empty set\n".to_string();
        }

        let mut entries: Vec<(&String, &Weight)> = weights.iter().collect();
        entries.sort();

        let mut table = Self::table();
        table.set_titles(row![column, "Weight"]);
        for (label, weight) in &entries {
            table.add_row(row![label, weight]);
        }
        format!("{}{} edge(s)\n", table, entries.len())
    }

    /// 打印统计信息
    pub fn print_stats(&self, vertex_count: usize, edge_count: usize) -> String {
        let mut table = Self::table();
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Vertex Count", vertex_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   labeled-graph CLI 命令帮助
═══════════════════════════════════════════════════════════════

  help, h, ?              显示帮助
  quit, exit, q           退出程序

  add <顶点>              添加顶点
  set <源> <目标> <权重>  设置边权重，权重为 0 时删除边
                          示例: set A B 5
  remove, rm <顶点>       删除顶点及其关联边

  vertices, v             列出所有顶点
  sources <顶点>          列出指向该顶点的边
  targets <顶点>          列出该顶点发出的边
  empty                   图是否为空
  stats, info             顶点数和边数
  show                    打印整个图
  check                   校验内部不变量

═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }

    fn table() -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_weights_sorted() {
        let mut weights = HashMap::new();
        weights.insert("C".to_string(), 3);
        weights.insert("A".to_string(), 5);

        let output = Printer::new().print_weights("Source", &weights);

        let a = output.find('A').unwrap();
        let c = output.find('C').unwrap();
        assert!(a < c);
        assert!(output.contains("2 edge(s)"));
    }

    #[test]
    fn test_print_empty() {
        let printer = Printer::new();

        assert_eq!(printer.print_vertices(&HashSet::new()), "Empty set\n");
        assert_eq!(printer.print_weights("Target", &HashMap::new()), "Empty set\n");
    }
}
