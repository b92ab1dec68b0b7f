//! CLI 模块
//!
//! 交互式控制台：命令解析、补全和结果打印

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute_command, split_script, CommandResult};
pub use completer::CommandCompleter;
pub use printer::Printer;
