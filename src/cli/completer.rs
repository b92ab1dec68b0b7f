//! 命令补全器
//!
//! 基于 rustyline 实现命令名的 Tab 补全

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 控制台命令列表
const COMMANDS: &[&str] = &[
    "add", "set", "remove", "vertices", "sources", "targets", "empty", "stats", "show",
    "check", "help", "quit",
];

/// CLI 补全器，只补全行首的命令名
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    fn candidates(prefix: &str) -> Vec<Pair> {
        let prefix = prefix.to_lowercase();
        COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(&prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        // 已经输入了参数，不再补全
        if line_to_cursor.trim_start().contains(' ') {
            return Ok((pos, vec![]));
        }

        let start = line_to_cursor.len() - line_to_cursor.trim_start().len();
        Ok((start, Self::candidates(line_to_cursor.trim_start())))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates() {
        let names: Vec<String> = CommandCompleter::candidates("s")
            .into_iter()
            .map(|p| p.replacement)
            .collect();

        assert_eq!(names, vec!["set", "sources", "stats", "show"]);
        assert!(CommandCompleter::candidates("zzz").is_empty());
        assert_eq!(CommandCompleter::candidates("RE").len(), 1);
    }
}
