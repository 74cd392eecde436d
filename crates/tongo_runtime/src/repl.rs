//! The interactive numeral explorer.
//!
//! A bare integer translates; commands prefixed with `:` inspect and manage
//! the session. Output is ANSI-styled for terminals.

use std::path::PathBuf;

use tongo_explain::{Explanation, to_json};
use tongo_foundation::Result;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// Commands the REPL understands.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Command {
    /// Translate a number.
    Translate(i64),
    /// Show the full construction explanation for a number.
    Explain(i64),
    /// Print the JSON report for a number.
    Json(i64),
    /// Load reference data from a file.
    Load(PathBuf),
    /// Evaluate rule output against the loaded reference data.
    Evaluate,
    /// Show the command summary.
    Help,
    /// Exit the REPL.
    Quit,
}

/// Parses one input line into a command.
fn parse_command(line: &str) -> std::result::Result<Command, String> {
    if let Ok(n) = line.parse::<i64>() {
        return Ok(Command::Translate(n));
    }

    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();
    let rest = words.collect::<Vec<_>>().join(" ");

    match head {
        ":explain" | ":e" => parse_number_arg(&rest).map(Command::Explain),
        ":json" | ":j" => parse_number_arg(&rest).map(Command::Json),
        ":load" | ":l" => {
            if rest.is_empty() {
                Err(":load requires a file path".to_string())
            } else {
                Ok(Command::Load(PathBuf::from(rest)))
            }
        }
        ":eval" => Ok(Command::Evaluate),
        ":help" | ":h" | "?" => Ok(Command::Help),
        ":quit" | ":q" => Ok(Command::Quit),
        other => Err(format!("unknown input: {other} (try :help)")),
    }
}

fn parse_number_arg(rest: &str) -> std::result::Result<i64, String> {
    rest.parse::<i64>()
        .map_err(|_| format!("expected a number, got: {rest:?}"))
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "tongo> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the read-eval-print loop until quit or EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails; evaluation errors are printed
    /// and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    self.editor.add_history(&line);
                    if !self.eval_line(&line) {
                        break;
                    }
                }
                ReadResult::Interrupted => println!("(interrupted; :quit to exit)"),
                ReadResult::Eof => break,
            }
        }

        Ok(())
    }

    /// Evaluates one input line. Returns `false` when the REPL should exit.
    pub fn eval_line(&mut self, line: &str) -> bool {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("\x1b[31m{message}\x1b[0m");
                return true;
            }
        };

        match command {
            Command::Translate(n) => match self.session.translate(n) {
                Ok(phrase) => println!("\x1b[1m{phrase}\x1b[0m"),
                Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            },
            Command::Explain(n) => match self.session.explain(n) {
                Ok(explanation) => println!("{}", format_explanation(&explanation)),
                Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            },
            Command::Json(n) => match self.session.explain(n).map(|e| to_json(&e)) {
                Ok(Ok(json)) => println!("{json}"),
                Ok(Err(e)) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
                Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            },
            Command::Load(path) => match self.session.load_reference(&path) {
                Ok(count) => println!("loaded {count} reference entries from {}", path.display()),
                Err(e) => eprintln!("\x1b[33mWarning: {e}; continuing rule-only\x1b[0m"),
            },
            Command::Evaluate => match self.session.evaluate() {
                Some(evaluation) => {
                    println!(
                        "{}/{} matched ({:.1}%)",
                        evaluation.matches,
                        evaluation.total,
                        evaluation.accuracy() * 100.0
                    );
                    for mismatch in evaluation.mismatches.iter().take(10) {
                        println!(
                            "  {}: expected \"{}\", rules give \"{}\"",
                            mismatch.number, mismatch.expected, mismatch.generated
                        );
                    }
                }
                None => eprintln!("no reference data loaded (:load PATH first)"),
            },
            Command::Help => print_help(),
            Command::Quit => return false,
        }

        true
    }
}

/// Formats an explanation as a terminal-friendly block.
#[must_use]
pub fn format_explanation(explanation: &Explanation) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\x1b[1;36m{}\x1b[0m → \x1b[1m{}\x1b[0m ({})\n",
        explanation.number, explanation.translation, explanation.source
    ));

    if !explanation.components.is_empty() {
        out.push_str("components:\n");
        for component in &explanation.components {
            out.push_str(&format!(
                "  {:>8}  {:<8} \"{}\"  [{}]\n",
                component.value, component.tier.to_string(), component.text, component.rule
            ));
        }
    }

    out.push_str("steps:\n");
    for step in &explanation.steps {
        out.push_str(&format!("  {step}\n"));
    }

    out.push_str("rules: ");
    let rules: Vec<String> = explanation
        .rules_applied
        .iter()
        .map(ToString::to_string)
        .collect();
    out.push_str(&rules.join(", "));
    out
}

fn print_banner() {
    println!("\x1b[1mTongo\x1b[0m - Susu numeral explorer");
    println!("Type a number to translate it, :help for commands.\n");
}

fn print_help() {
    println!(
        "\x1b[1mCOMMANDS:\x1b[0m
    N                Translate the number N
    :explain N       Show the construction steps for N
    :json N          Print the JSON report for N
    :load PATH       Load reference data (Number;Translation CSV)
    :eval            Compare rule output against loaded reference data
    :help            Show this summary
    :quit            Exit (Ctrl+D also works)"
    );
}
