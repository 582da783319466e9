use super::{Command, CommandError, CommandResult};

pub const SYMBOL_COMMAND: &str = "symbol";
pub const HELP_COMMAND: &str = "help";
pub const HELP_COMMAND_SHORT: &str = "h";
pub const QUIT_COMMAND: &str = "quit";
pub const QUIT_COMMAND_SHORT: &str = "q";

use chumsky::error::Rich;
use chumsky::prelude::{any, choice, end, just};
use chumsky::{extra, text, Boxed, Parser};

type Err<'a> = extra::Err<Rich<'a, char>>;

fn command<'a, I>(ctx: &'static str, inner: I) -> Boxed<'a, 'a, &'a str, Command, Err<'a>>
where
    I: chumsky::Parser<'a, &'a str, Command, Err<'a>> + 'a,
{
    inner.then_ignore(end()).labelled(ctx).boxed()
}

impl Command {
    /// Parse input string into command.
    pub fn parse(input: &str) -> CommandResult<Command> {
        if input.trim().is_empty() {
            return Ok(Command::SkipInput);
        }

        Self::parser()
            .parse(input)
            .into_result()
            .map_err(|e| CommandError::Parsing(format!("{}", e[0])))
    }

    fn parser<'a>() -> impl chumsky::Parser<'a, &'a str, Command, Err<'a>> {
        let op = |sym| just(sym).padded();

        let print_symbol = op(SYMBOL_COMMAND)
            .ignore_then(any().repeated().at_least(1).to_slice())
            .map(|regex: &str| Command::PrintSymbol(regex.trim().to_string()));

        let help = op(HELP_COMMAND)
            .or(op(HELP_COMMAND_SHORT))
            .ignore_then(any().repeated().to_slice())
            .map(|topic: &str| {
                let topic = topic.trim();
                Command::Help {
                    command: (!topic.is_empty()).then(|| topic.to_string()),
                    reason: None,
                }
            });

        // a registered plugin invocation: plugin name plus everything after it
        // as an opaque argument string
        let plugin = text::ascii::ident()
            .padded()
            .then(any().repeated().to_slice())
            .map(|(name, args): (&str, &str)| {
                let args = args.trim();
                Command::Plugin(
                    name.to_string(),
                    (!args.is_empty()).then(|| args.to_string()),
                )
            });

        choice((
            command(SYMBOL_COMMAND, print_symbol),
            command(HELP_COMMAND, help),
            command("plugin", plugin),
        ))
    }
}
