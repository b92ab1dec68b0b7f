//! labeled-graph CLI 工具
//!
//! 交互式命令行界面，驱动任一种图表示

use anyhow::Result;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use labeled_graph::cli::{execute_command, split_script, CommandCompleter, CommandResult};
use labeled_graph::{EdgeGraph, Graph, VertexGraph};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tracing_subscriber::EnvFilter;

/// 图的内部表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Repr {
    /// 顶点中心：顶点列表 + 邻接映射
    Vertices,
    /// 边中心：顶点集合 + 边列表
    Edges,
}

#[derive(Parser, Debug)]
#[command(name = "labeled-graph-cli")]
#[command(about = "labeled-graph 命令行工具")]
struct Args {
    /// 使用的图表示
    #[arg(short, long, value_enum, default_value = "vertices")]
    repr: Repr,

    /// 执行以 ; 分隔的命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 未设置 RUST_LOG 时使用的日志级别
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut graph: Box<dyn Graph<String>> = match args.repr {
        Repr::Vertices => Box::new(VertexGraph::<String>::new()),
        Repr::Edges => Box::new(EdgeGraph::<String>::new()),
    };
    tracing::debug!(repr = ?args.repr, "图已创建");

    // 脚本模式
    if let Some(script) = args.execute {
        for line in split_script(&script) {
            if !report(execute_command(graph.as_mut(), line)) {
                break;
            }
        }
        return Ok(());
    }

    // 交互模式
    println!("labeled-graph CLI ({:?})", args.repr);
    println!("输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CommandCompleter::new()));

    loop {
        match rl.readline("graph> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if !report(execute_command(graph.as_mut(), line)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("再见！");
    Ok(())
}

/// 打印命令结果，返回是否继续
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => true,
        CommandResult::Exit => false,
        CommandResult::Message(msg) => {
            println!("{}", msg.trim_end());
            true
        }
        CommandResult::Error(msg) => {
            println!("{} {}", "错误:".red().bold(), msg);
            true
        }
    }
}
