//! Line input for the REPL.
//!
//! Uses a `rustyline` editor (history plus whole-command tab completion) when
//! stdin is a terminal, and plain buffered stdin otherwise or after the editor
//! fails.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// What a single read produced.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

type ReplEditor = rustyline::Editor<CommandCompleter, DefaultHistory>;

/// Reads player input, preferring the line editor.
pub struct InputManager {
    editor: Option<ReplEditor>,
    history: Option<PathBuf>,
}

impl InputManager {
    pub fn new(terms: Vec<String>) -> Self {
        let history = history_file_path();
        let editor = if io::stdin().is_terminal() {
            open_editor(terms, history.as_deref())
        } else {
            info!("stdin is not a terminal; reading plain lines");
            None
        };
        Self { editor, history }
    }

    /// Read one line. Ctrl-C and Ctrl-D come back as events, not errors.
    ///
    /// # Errors
    /// - if stdin can't be read
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        if let Some(editor) = self.editor.as_mut() {
            match editor.readline(prompt) {
                Ok(line) => {
                    remember(editor, self.history.as_deref(), &line);
                    return Ok(InputEvent::Line(line));
                },
                Err(ReadlineError::Interrupted) => return Ok(InputEvent::Interrupted),
                Err(ReadlineError::Eof) => return Ok(InputEvent::Eof),
                Err(err) => {
                    warn!("line editor failed ({err}); reading plain lines from now on");
                    self.editor = None;
                },
            }
        }
        read_plain_line(prompt)
    }
}

fn open_editor(terms: Vec<String>, history: Option<&Path>) -> Option<ReplEditor> {
    let mut editor = match ReplEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            warn!("line editor unavailable ({err}); reading plain lines");
            return None;
        },
    };
    editor.set_helper(Some(CommandCompleter { terms }));

    if let Some(path) = history {
        if let Some(dir) = path.parent()
            && let Err(err) = fs::create_dir_all(dir)
        {
            warn!("could not create history directory {}: {err}", dir.display());
        }
        match editor.load_history(path) {
            Ok(()) => info!("command history loaded from {}", path.display()),
            Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                info!("no command history at {} yet", path.display());
            },
            Err(err) => warn!("could not load command history from {}: {err}", path.display()),
        }
    }
    info!("using rustyline for REPL input");
    Some(editor)
}

fn remember(editor: &mut ReplEditor, history: Option<&Path>, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    if let Err(err) = editor.add_history_entry(line) {
        warn!("could not record history entry: {err}");
    }
    if let Some(path) = history
        && let Err(err) = editor.save_history(path)
    {
        warn!("could not save command history to {}: {err}", path.display());
    }
}

fn read_plain_line(prompt: &str) -> io::Result<InputEvent> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(InputEvent::Eof);
    }
    Ok(InputEvent::Line(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| history_file_in(&base))
}

fn history_file_in(base: &Path) -> PathBuf {
    base.join("turbo_engine").join("history.txt")
}

/// Completes whole commands, which may be several words, from the start of the line.
struct CommandCompleter {
    terms: Vec<String>,
}

impl CommandCompleter {
    /// Start of the typed command and the lowercased text typed so far.
    fn typed(line: &str, pos: usize) -> (usize, String) {
        let before = &line[..pos];
        let start = before.len() - before.trim_start().len();
        (start, before[start..].to_lowercase())
    }

    fn candidates(&self, typed: &str) -> Vec<Pair> {
        if typed.is_empty() {
            return Vec::new();
        }
        self.terms
            .iter()
            .filter(|term| term.starts_with(typed))
            .map(|term| Pair {
                display: term.clone(),
                replacement: term.clone(),
            })
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, typed) = Self::typed(line, pos);
        Ok((start, self.candidates(&typed)))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}
impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}
