use crate::inspector::Session;
use crate::plugin::walk::WalkPlugin;
use crate::plugin::{ConsolePlugin, PluginRegistry, RegistryError};
use crate::ui::command::parser::{QUIT_COMMAND, QUIT_COMMAND_SHORT};
use crate::ui::command::symbol;
use crate::ui::command::{Command, CommandError};
use crate::ui::config;
use crate::ui::console::editor::{create_editor, RLHelper};
use crate::ui::console::help::help_for_command;
use crate::ui::console::print::style::{AddressView, ErrorView, KeywordView};
use crate::ui::console::print::ExternalPrinter;
use crate::weak_error;
use itertools::Itertools;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;
use std::process::exit;
use std::rc::Rc;
use std::sync::mpsc;
use std::sync::mpsc::{Receiver, SyncSender};
use std::sync::Once;
use std::thread;

mod editor;
pub mod help;
pub mod print;
pub mod view;

const WELCOME_TEXT: &str = r#"
chainspect greets
"#;
const PROMT: &str = "(csp) ";
const HISTORY_FILE: &str = ".chainspect_history";

type CsEditor = Editor<RLHelper, FileHistory>;

pub struct AppBuilder {
    registry: PluginRegistry,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    pub fn new() -> Self {
        let mut registry = PluginRegistry::default();
        registry
            .register(Rc::new(WalkPlugin::new()))
            .expect("empty registry");
        Self { registry }
    }

    /// Install an additional plugin beside the builtin walker. Plugin names
    /// are unique, a taken name is an error.
    pub fn with_plugin(mut self, plugin: Rc<dyn ConsolePlugin>) -> Result<Self, RegistryError> {
        self.registry.register(plugin)?;
        Ok(self)
    }

    pub fn build(self, session: Box<dyn Session>) -> anyhow::Result<TerminalApplication> {
        let (control_tx, control_rx) = mpsc::sync_channel::<Control>(0);

        let plugin_names = self.registry.names().collect::<Vec<_>>();
        let mut editor = create_editor(PROMT, &plugin_names)?;

        if let Some(h) = editor.helper_mut() {
            let symbols = weak_error!(session.get_symbols(".*")).unwrap_or_default();
            h.completer
                .lock()
                .unwrap()
                .replace_symbol_hints(symbols.into_iter().map(|symbol| symbol.name));
        }

        Ok(TerminalApplication {
            session,
            registry: self.registry,
            editor,
            control_tx,
            control_rx,
        })
    }
}

enum Control {
    /// New command from user received
    Cmd(String),
    /// Terminate application
    Terminate,
}

pub struct TerminalApplication {
    session: Box<dyn Session>,
    registry: PluginRegistry,
    editor: CsEditor,
    control_tx: SyncSender<Control>,
    control_rx: Receiver<Control>,
}

pub static LOGGER_ONCE: Once = Once::new();
pub static HELLO_ONCE: Once = Once::new();

impl TerminalApplication {
    pub fn run(mut self) -> anyhow::Result<()> {
        LOGGER_ONCE.call_once(|| {
            env_logger::init();
        });

        let app_loop = AppLoop {
            session: self.session,
            registry: self.registry,
            printer: ExternalPrinter::new(&mut self.editor)?,
            control_rx: self.control_rx,
        };

        HELLO_ONCE.call_once(|| {
            println!("{WELCOME_TEXT}");
            println!(
                "installed plugins: {}",
                app_loop.registry.names().join(", ")
            );
        });

        let mut editor = self.editor;
        {
            let control_tx = self.control_tx.clone();
            thread::spawn(move || {
                let history_file = config::current()
                    .save_history
                    .then(|| home::home_dir().map(|home| home.join(HISTORY_FILE)))
                    .flatten();
                if let Some(ref path) = history_file {
                    _ = editor.load_history(path);
                }

                loop {
                    let line = editor.readline(PROMT);
                    match line {
                        Ok(input) => {
                            if input == QUIT_COMMAND || input == QUIT_COMMAND_SHORT {
                                _ = control_tx.send(Control::Terminate);
                                break;
                            } else {
                                _ = editor.add_history_entry(&input);
                                _ = control_tx.send(Control::Cmd(input));
                            }
                        }
                        Err(err) => match err {
                            ReadlineError::Eof | ReadlineError::Interrupted => {
                                _ = control_tx.send(Control::Terminate);
                                break;
                            }
                            _ => {
                                println!("error: {:#}", err);
                                _ = control_tx.send(Control::Terminate);
                                break;
                            }
                        },
                    }
                }

                if let Some(ref path) = history_file {
                    _ = editor.save_history(path);
                }
            });
        }

        app_loop.run();

        Ok(())
    }
}

struct AppLoop {
    session: Box<dyn Session>,
    registry: PluginRegistry,
    printer: ExternalPrinter,
    control_rx: Receiver<Control>,
}

impl AppLoop {
    fn handle_command(&mut self, cmd: &str) -> Result<(), CommandError> {
        match Command::parse(cmd)? {
            Command::SkipInput => {}
            Command::PrintSymbol(pattern) => {
                let symbols = symbol::Handler::new(self.session.as_ref()).handle(&pattern)?;
                if symbols.is_empty() {
                    self.printer
                        .println(format!("no symbols matching `{pattern}`"));
                }
                for symbol in symbols {
                    self.printer.println(format!(
                        "{} - {} {}",
                        KeywordView::from(symbol.name),
                        symbol.kind,
                        AddressView::from(symbol.value)
                    ));
                }
            }
            Command::Plugin(name, args) => match self.registry.get(&name) {
                Some(plugin) => {
                    plugin.invoke(self.session.as_ref(), &self.printer, args.as_deref())
                }
                None => {
                    return Err(CommandError::Parsing(format!(
                        "unknown command `{name}`, see `help`"
                    )))
                }
            },
            Command::Help { command, reason } => {
                if let Some(reason) = reason {
                    self.printer.println(reason);
                }
                match command.as_deref().and_then(|name| self.registry.get(name)) {
                    Some(plugin) => self.printer.println(plugin.help()),
                    None => self.printer.println(help_for_command(command.as_deref())),
                }
            }
        }

        Ok(())
    }

    fn run(mut self) {
        loop {
            let Ok(action) = self.control_rx.recv() else {
                break;
            };

            match action {
                Control::Cmd(command) => {
                    log::debug!(target: "console", "handle command: {command}");
                    if let Err(e) = self.handle_command(&command) {
                        match e {
                            CommandError::Parsing(_) => {
                                self.printer.println(ErrorView::from(e));
                            }
                            CommandError::Handle(ref err) if err.is_fatal() => {
                                self.printer.println(ErrorView::from("shutdown session"));
                                self.printer
                                    .println(ErrorView::from(format!("fatal error: {e:#}")));
                                exit(0);
                            }
                            CommandError::Handle(_) => {
                                self.printer
                                    .println(ErrorView::from(format!("error: {e:#}")));
                            }
                        }
                    }
                }
                Control::Terminate => {
                    break;
                }
            }
        }
    }
}
