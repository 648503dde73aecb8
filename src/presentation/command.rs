// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 交互式终端中的一行输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 替换草稿并按下回车
    Query(String),
    /// 在浏览器中打开第 N 条结果
    Open(usize),
    Help,
    Quit,
    /// 以 `:` 开头但无法识别
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.trim_start().strip_prefix(':') else {
            return Command::Query(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("q" | "quit"), None, None) => Command::Quit,
            (Some("h" | "help"), None, None) => Command::Help,
            (Some("o" | "open"), Some(n), None) => match n.parse::<usize>() {
                Ok(position) if position > 0 => Command::Open(position),
                _ => Command::Unknown(line.to_string()),
            },
            _ => Command::Unknown(line.to_string()),
        }
    }
}

pub const HELP_TEXT: &str = "\
Type a query and press Enter to search.
  :open N   open result N in the browser
  :help     show this help
  :quit     exit";
