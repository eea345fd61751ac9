//! Line commands read from stdin.

use thiserror::Error;
use wevt_core::dashboard::CategoryFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Filter(CategoryFilter),
    AutoRefresh(bool),
    Categories,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("expected `on` or `off`, got `{0}`")]
    InvalidToggle(String),
}

pub const HELP: &str = "\
commands:
  r, refresh            fetch a new batch of events
  f, filter <category>  show only <category> (`all` for everything)
  a, auto <on|off>      toggle auto-refresh
  c, categories         list selectable categories
  h, help               show this help
  q, quit               exit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "r" | "refresh" => Ok(Command::Refresh),
            "f" | "filter" => {
                if rest.is_empty() {
                    Err(CommandError::MissingArgument("filter"))
                } else {
                    Ok(Command::Filter(CategoryFilter::parse(rest)))
                }
            }
            "a" | "auto" => match rest.to_ascii_lowercase().as_str() {
                "" => Err(CommandError::MissingArgument("auto")),
                "on" | "true" | "1" => Ok(Command::AutoRefresh(true)),
                "off" | "false" | "0" => Ok(Command::AutoRefresh(false)),
                _ => Err(CommandError::InvalidToggle(rest.to_string())),
            },
            "c" | "categories" => Ok(Command::Categories),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
