use crate::inspector::walk::ListWalker;
use crate::inspector::Session;
use crate::plugin::ConsolePlugin;
use crate::ui::console::help::HELP_WALK;
use crate::ui::console::print::style::ErrorView;
use crate::ui::console::print::ExternalPrinter;
use crate::ui::console::view;

pub const WALK_PLUGIN: &str = "walk";

/// Builtin chain walker plugin. Invoked as `walk <root-symbol> [args..]`:
/// resolves the root symbol, follows `next` links until the null sentinel and
/// prints one line per record plus a trailing count.
#[derive(Default)]
pub struct WalkPlugin {
    walker: ListWalker,
}

impl WalkPlugin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConsolePlugin for WalkPlugin {
    fn name(&self) -> &'static str {
        WALK_PLUGIN
    }

    fn invoke(&self, session: &dyn Session, printer: &ExternalPrinter, args: Option<&str>) {
        let Some(input) = args else {
            printer.println(ErrorView::from("root symbol expected, see `help walk`"));
            return;
        };

        let (root, rest) = match input.split_once(char::is_whitespace) {
            Some((root, rest)) => (root, rest.trim()),
            None => (input, ""),
        };

        match self.walker.walk(session, root, rest) {
            Ok(result) => view::print_walk_result(printer, &result),
            Err(err) => {
                if !err.partial.records.is_empty() {
                    view::print_walk_result(printer, &err.partial);
                }
                printer.println(ErrorView::from(format!("walk failed: {:#}", err.source)));
            }
        }
    }

    fn help(&self) -> &str {
        HELP_WALK
    }
}
