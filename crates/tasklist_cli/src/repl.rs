//! Interactive prompt.
//!
//! Plain text submits the form; slash commands toggle and list rows. A
//! leading `//` submits a title that itself starts with `/`.

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tasklist_core::{KeyValueStore, PageEvent, TaskListApp};

use crate::view;

const COMMANDS: &[&str] = &["/toggle", "/list", "/help", "/quit"];

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Submit(&'a str),
    Toggle(usize),
    List,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return Command::Submit(&trimmed[1..]);
    }
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Submit(line);
    };
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("toggle" | "t"), Some(number)) => match number.parse::<usize>() {
            Ok(number) if number > 0 => Command::Toggle(number - 1),
            _ => Command::Unknown(line),
        },
        (Some("list" | "ls"), None) => Command::List,
        (Some("help" | "h"), None) => Command::Help,
        (Some("quit" | "q" | "exit"), None) => Command::Quit,
        _ => Command::Unknown(line),
    }
}

struct CliHelper;

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return Ok((0, Vec::new()));
        }
        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, line: &str, _pos: usize, _forced: bool) -> bool {
        line.starts_with('/')
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }
        COMMANDS
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

fn print_help() {
    println!("{}", "Type a task title and press Enter to add it.".dimmed());
    println!("  {}  toggle task N", "/toggle N".bright_cyan());
    println!("  {}      show tasks", "/list".bright_cyan());
    println!("  {}      leave", "/quit".bright_cyan());
    println!("  {}     add a task titled /text", "//text".bright_cyan());
}

/// Runs the prompt until `/quit`, Ctrl-C or Ctrl-D.
pub fn run<S: KeyValueStore>(app: &mut TaskListApp<S>) -> Result<()> {
    let mut rl = Editor::<CliHelper, DefaultHistory>::new()?;
    rl.set_helper(Some(CliHelper));

    print!("{}", view::render_page(app.page()));
    print_help();

    loop {
        let line = match rl.readline("task> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if !line.trim().is_empty() {
            rl.add_history_entry(line.as_str())?;
        }

        let event = match parse_line(&line) {
            Command::Submit(text) => {
                app.type_input(text);
                PageEvent::Submit
            }
            Command::Toggle(row) => PageEvent::Toggle { row },
            Command::List => {
                print!("{}", view::render_page(app.page()));
                continue;
            }
            Command::Help => {
                print_help();
                continue;
            }
            Command::Quit => break,
            Command::Unknown(input) => {
                println!("{} unknown command `{}`", "error:".red(), input.trim());
                continue;
            }
        };

        // A failed interaction is reported and the prompt keeps running.
        match app.dispatch(event) {
            Ok(outcome) => {
                let message = view::describe_outcome(&outcome, app.store());
                if !message.is_empty() {
                    println!("{message}");
                }
            }
            Err(err) => println!("{} {err}", "error:".red()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_line, Command};

    #[test]
    fn plain_text_submits_verbatim() {
        assert_eq!(parse_line(" Buy milk "), Command::Submit(" Buy milk "));
        assert_eq!(parse_line(""), Command::Submit(""));
    }

    #[test]
    fn double_slash_submits_literal_slash_title() {
        assert_eq!(parse_line("//etc cleanup"), Command::Submit("/etc cleanup"));
        assert_eq!(parse_line("  //list"), Command::Submit("/list"));
        assert_eq!(parse_line("/etc cleanup"), Command::Unknown("/etc cleanup"));
    }

    #[test]
    fn toggle_takes_one_based_numbers() {
        assert_eq!(parse_line("/toggle 2"), Command::Toggle(1));
        assert_eq!(parse_line("/t 1"), Command::Toggle(0));
        assert_eq!(parse_line("/toggle 0"), Command::Unknown("/toggle 0"));
        assert_eq!(parse_line("/toggle x"), Command::Unknown("/toggle x"));
    }

    #[test]
    fn other_commands_parse() {
        assert_eq!(parse_line("/list"), Command::List);
        assert_eq!(parse_line("/quit"), Command::Quit);
        assert_eq!(parse_line("/nope"), Command::Unknown("/nope"));
    }
}
