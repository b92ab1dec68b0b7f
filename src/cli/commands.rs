//! 控制台命令处理
//!
//! 把一行输入翻译成对 [`Graph`] 契约的一次调用

use crate::cli::printer::Printer;
use crate::graph::Graph;
use crate::types::Weight;

/// 控制台命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 把 `-e` 传入的脚本按 `;` 拆成单条命令
pub fn split_script(script: &str) -> impl Iterator<Item = &str> {
    script.split(';').map(str::trim).filter(|s| !s.is_empty())
}

/// 解析并执行一条命令
pub fn execute_command(graph: &mut dyn Graph<String>, input: &str) -> CommandResult {
    let printer = Printer::new();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((cmd, args)) = words.split_first() else {
        return CommandResult::Continue;
    };

    match (cmd.to_lowercase().as_str(), args) {
        ("quit" | "exit" | "q", _) => CommandResult::Exit,

        ("help" | "h" | "?", _) => CommandResult::Message(Printer::print_help()),

        ("add", [vertex]) => {
            if graph.add(vertex.to_string()) {
                CommandResult::Message(format!("已添加顶点 {}", vertex))
            } else {
                CommandResult::Message(format!("顶点 {} 已存在", vertex))
            }
        }
        ("add", _) => usage("add <顶点>"),

        ("set", [source, target, weight]) => {
            let weight: Weight = match weight.parse() {
                Ok(w) => w,
                Err(_) => return CommandResult::Error(format!("无效的权重: {}", weight)),
            };
            match graph.set(source.to_string(), target.to_string(), weight) {
                Ok(previous) => CommandResult::Message(format!(
                    "{} -> {}: {} (原权重 {})",
                    source, target, weight, previous
                )),
                Err(e) => CommandResult::Error(e.to_string()),
            }
        }
        ("set", _) => usage("set <源> <目标> <权重>"),

        ("remove" | "rm", [vertex]) => {
            if graph.remove(&vertex.to_string()) {
                CommandResult::Message(format!("已删除顶点 {}", vertex))
            } else {
                CommandResult::Message(format!("顶点 {} 不存在", vertex))
            }
        }
        ("remove" | "rm", _) => usage("remove <顶点>"),

        ("vertices" | "v", []) => CommandResult::Message(printer.print_vertices(&graph.vertices())),

        ("sources", [target]) => CommandResult::Message(
            printer.print_weights("Source", &graph.sources(&target.to_string())),
        ),
        ("sources", _) => usage("sources <顶点>"),

        ("targets", [source]) => CommandResult::Message(
            printer.print_weights("Target", &graph.targets(&source.to_string())),
        ),
        ("targets", _) => usage("targets <顶点>"),

        ("empty", []) => CommandResult::Message(graph.is_empty().to_string()),

        ("stats" | "info", []) => {
            CommandResult::Message(printer.print_stats(graph.vertex_count(), graph.edge_count()))
        }

        ("show", []) => CommandResult::Message(graph.to_string()),

        ("check", []) => match graph.check_invariants() {
            Ok(()) => CommandResult::Message("OK".to_string()),
            Err(e) => CommandResult::Error(e.to_string()),
        },

        (other, _) => CommandResult::Error(format!("未知命令: {}，输入 help 查看帮助", other)),
    }
}

fn usage(text: &str) -> CommandResult {
    CommandResult::Error(format!("用法: {}", text))
}
