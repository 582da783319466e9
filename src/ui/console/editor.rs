use crate::plugin::walk::WALK_PLUGIN;
use crate::ui::command::parser::{
    HELP_COMMAND, HELP_COMMAND_SHORT, QUIT_COMMAND, QUIT_COMMAND_SHORT, SYMBOL_COMMAND,
};
use chumsky::prelude::{any, choice, just};
use chumsky::text::whitespace;
use chumsky::{extra, text, Parser};
use crossterm::style::{Color, Stylize};
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::history::FileHistory;
use rustyline::line_buffer::LineBuffer;
use rustyline::{Changeset, CompletionType, Config, Context, Editor};
use rustyline_derive::{Helper, Hinter, Validator};
use std::borrow::Cow;
use std::borrow::Cow::{Borrowed, Owned};
use std::sync::{Arc, Mutex};
use trie_rs::{Trie, TrieBuilder};

struct CommandHint {
    short: Option<String>,
    long: String,
}

impl CommandHint {
    fn long(&self) -> String {
        self.long.clone()
    }

    fn display_with_short(&self) -> String {
        if let Some(ref short) = self.short {
            if self.long.starts_with(short) {
                format!(
                    "{}{}",
                    short.clone().bold().underlined(),
                    &self.long[short.len()..]
                )
            } else {
                format!("{}|{}", &self.long, short.clone().bold().underlined())
            }
        } else {
            self.long()
        }
    }
}

impl From<&str> for CommandHint {
    fn from(value: &str) -> Self {
        CommandHint {
            short: None,
            long: value.to_string(),
        }
    }
}

impl From<(&str, &str)> for CommandHint {
    fn from((short, long): (&str, &str)) -> Self {
        CommandHint {
            short: Some(short.to_string()),
            long: long.to_string(),
        }
    }
}

pub struct CommandCompleter {
    commands: Vec<CommandHint>,
    symbol_hints: Trie<u8>,
}

impl CommandCompleter {
    fn new(commands: impl IntoIterator<Item = CommandHint>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            symbol_hints: TrieBuilder::new().build(),
        }
    }

    pub fn replace_symbol_hints(&mut self, symbols: impl IntoIterator<Item = String>) {
        let mut builder = TrieBuilder::new();
        symbols.into_iter().for_each(|symbol| {
            builder.push(symbol);
        });
        self.symbol_hints = builder.build();
    }
}

#[derive(Debug)]
enum CompletableCommand<'a> {
    /// Commands taking a symbol name as their first argument.
    WithSymbol(&'a str),
    Unrecognized,
}

impl<'a> CompletableCommand<'a> {
    fn recognize(line: &'a str) -> Option<CompletableCommand<'a>> {
        let op = just::<_, _, extra::Default>;

        let with_symbol = op(SYMBOL_COMMAND)
            .or(op(WALK_PLUGIN))
            .then(whitespace().at_least(1))
            .ignore_then(any().repeated().to_slice())
            .map(CompletableCommand::WithSymbol);

        let other = text::ident()
            .padded()
            .map(|_: &str| CompletableCommand::Unrecognized);

        let r = choice((with_symbol, other)).parse(line);
        r.into_result().ok()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        if let Some(CompletableCommand::WithSymbol(maybe_symbol)) =
            CompletableCommand::recognize(line)
        {
            let maybe_symbol = maybe_symbol.trim_start();
            if !maybe_symbol.is_empty() {
                let variants = self.symbol_hints.predictive_search(maybe_symbol);
                if !variants.is_empty() {
                    let pos = line.len() - maybe_symbol.len();
                    let pairs = variants
                        .iter()
                        .map(|var| {
                            let symbol =
                                std::str::from_utf8(var.as_slice()).expect("invalid utf-8 string");
                            Pair {
                                display: symbol.to_string(),
                                replacement: symbol.to_string(),
                            }
                        })
                        .collect();
                    return Ok((pos, pairs));
                }
            }
            return Ok((0, vec![]));
        }

        let pairs = self
            .commands
            .iter()
            .filter(|&cmd| cmd.long.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.display_with_short(),
                replacement: cmd.long(),
            })
            .collect();
        Ok((0, pairs))
    }
}

#[derive(Helper, Hinter, Validator)]
pub struct RLHelper {
    pub completer: Arc<Mutex<CommandCompleter>>,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
    pub colored_prompt: String,
}

impl Completer for RLHelper {
    type Candidate = <CommandCompleter as Completer>::Candidate;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        self.completer.lock().unwrap().complete(line, pos, ctx)
    }

    fn update(&self, line: &mut LineBuffer, start: usize, elected: &str, cl: &mut Changeset) {
        self.completer
            .lock()
            .unwrap()
            .update(line, start, elected, cl)
    }
}

impl Highlighter for RLHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Borrowed(&self.colored_prompt)
        } else {
            Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(format!("{}", hint.with(Color::Grey)))
    }
}

pub fn create_editor(
    promt: &str,
    plugins: &[&str],
) -> anyhow::Result<Editor<RLHelper, FileHistory>> {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut commands: Vec<CommandHint> = vec![
        SYMBOL_COMMAND.into(),
        (HELP_COMMAND_SHORT, HELP_COMMAND).into(),
        (QUIT_COMMAND_SHORT, QUIT_COMMAND).into(),
    ];
    commands.extend(plugins.iter().map(|&plugin| CommandHint::from(plugin)));

    let h = RLHelper {
        completer: Arc::new(Mutex::new(CommandCompleter::new(commands))),
        hinter: HistoryHinter {},
        colored_prompt: format!("{}", promt.with(Color::DarkGreen)),
    };

    let mut editor = Editor::with_history(config, FileHistory::default())?;
    editor.set_helper(Some(h));
    Ok(editor)
}
