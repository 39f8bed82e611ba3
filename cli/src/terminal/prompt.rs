//! Terminal implementation of the prompt port.
//!
//! When both stdin and stdout are terminals the menus are arrow-key lists; otherwise
//! (piped or redirected input) menus fall back to numbered choices and answers are
//! read from stdin line by line. Terminal I/O is blocking, so every call is moved
//! onto tokio's blocking pool.

use std::io::{self, BufRead, IsTerminal};

use async_trait::async_trait;
use console::{Key, Term, style};
use teamgen_core::TeamError;
use teamgen_core::ports::PromptService;
use teamgen_core::questions::{Answers, FieldDescriptor, ask_until_valid};

type Result<T> = std::result::Result<T, TeamError>;

pub struct TerminalPrompt {
    term: Term,
    interactive: bool,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        let term = Term::stdout();
        let interactive = interactive(io::stdin().is_terminal(), term.is_term());
        Self { term, interactive }
    }
}

/// Key-driven menus read from the controlling terminal, so they are only used when
/// stdin is that terminal too. A pipe on stdin always wins.
fn interactive(stdin_tty: bool, stdout_tty: bool) -> bool {
    stdin_tty && stdout_tty
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptService for TerminalPrompt {
    async fn ask(&mut self, questions: Vec<FieldDescriptor>) -> Result<Answers> {
        let term = self.term.clone();
        let interactive = self.interactive;
        tokio::task::spawn_blocking(move || ask_blocking(&term, interactive, &questions))
            .await
            .map_err(|e| TeamError::Prompt(io::Error::other(e)))?
    }

    async fn choose(&mut self, message: &str, choices: &[&str]) -> Result<usize> {
        let term = self.term.clone();
        let interactive = self.interactive;
        let message = message.to_string();
        let choices: Vec<String> = choices.iter().map(|c| c.to_string()).collect();

        tokio::task::spawn_blocking(move || {
            if interactive {
                select_interactive(&term, &message, &choices)
            } else {
                select_numbered(&term, &message, &choices)
            }
        })
        .await
        .map_err(|e| TeamError::Prompt(io::Error::other(e)))?
        .map_err(TeamError::Prompt)
    }
}

fn ask_blocking(
    term: &Term,
    interactive: bool,
    questions: &[FieldDescriptor],
) -> Result<Answers> {
    let mut answers = Answers::new();
    for descriptor in questions {
        let value = ask_until_valid(
            descriptor,
            |d| {
                let question = format!(
                    "{} {} ",
                    style("?").green().bold(),
                    style(&d.message).bold()
                );
                term.write_str(&question).map_err(TeamError::Prompt)?;
                read_answer(term, interactive).map_err(TeamError::Prompt)
            },
            |_, rejection| {
                let warning = format!("{} {}", style(">>").red().bold(), style(rejection).red());
                let _ = term.write_line(&warning);
            },
        )?;
        answers.insert(descriptor.field, value);
    }
    Ok(answers)
}

/// `Term::read_line` reports a closed stdin as an empty answer, which would be
/// re-asked forever. Piped input is read directly so EOF becomes an error.
fn read_answer(term: &Term, interactive: bool) -> io::Result<String> {
    if interactive {
        return term.read_line();
    }
    read_piped_line(&mut io::stdin().lock())
}

fn read_piped_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Shows the cursor again however the menu is left.
struct CursorGuard<'a>(&'a Term);

impl Drop for CursorGuard<'_> {
    fn drop(&mut self) {
        let _ = self.0.show_cursor();
    }
}

fn select_interactive(term: &Term, message: &str, choices: &[String]) -> io::Result<usize> {
    if choices.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "menu has no choices"));
    }

    term.write_line(&format!("{} {}", style("?").green().bold(), style(message).bold()))?;
    term.hide_cursor()?;
    let _guard = CursorGuard(term);

    let mut selected: usize = 0;
    loop {
        for (idx, choice) in choices.iter().enumerate() {
            if idx == selected {
                term.write_line(&format!("{} {}", style("❯").cyan(), style(choice).cyan()))?;
            } else {
                term.write_line(&format!("  {choice}"))?;
            }
        }

        let key = term.read_key()?;
        term.clear_last_lines(choices.len())?;

        match key {
            Key::ArrowUp | Key::Char('k') => {
                selected = (selected + choices.len() - 1) % choices.len();
            }
            Key::ArrowDown | Key::Char('j') | Key::Tab => {
                selected = (selected + 1) % choices.len();
            }
            Key::Enter => {
                term.write_line(&format!("{} {}", style("❯").cyan(), choices[selected]))?;
                return Ok(selected);
            }
            _ => {}
        }
    }
}

fn select_numbered(term: &Term, message: &str, choices: &[String]) -> io::Result<usize> {
    if choices.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "menu has no choices"));
    }

    term.write_line(&format!("{} {}", style("?").green().bold(), style(message).bold()))?;
    for (idx, choice) in choices.iter().enumerate() {
        term.write_line(&format!("  {}) {}", idx + 1, choice))?;
    }

    loop {
        term.write_str(&format!("  Answer (1-{}): ", choices.len()))?;
        let answer = read_answer(term, false)?;
        match parse_choice(&answer, choices) {
            Some(idx) => return Ok(idx),
            None => term.write_line(&format!(
                "{} {}",
                style(">>").red().bold(),
                style("Please enter a number from the list").red()
            ))?,
        }
    }
}

/// Accepts a 1-based number or a choice label, ignoring case.
fn parse_choice(answer: &str, choices: &[String]) -> Option<usize> {
    let answer = answer.trim();
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&number).then(|| number - 1);
    }
    choices
        .iter()
        .position(|choice| choice.eq_ignore_ascii_case(answer))
}
