use crate::plugin::walk::WALK_PLUGIN;
use crate::ui::command::parser;

pub const HELP: &str = r#"
Available console commands:

walk <symbol> <..args>          -- walk the record chain rooted at a process-global and print it
symbol <regex>                  -- print name, kind and address of matching symbols
h, help <>|<command>            -- show help
q, quit                         -- exit the chainspect
"#;

pub const HELP_WALK: &str = "\
\x1b[32;1mwalk\x1b[0m
Walk a null-terminated singly linked chain of records in the inspected process
and print one line per record plus a trailing count.

The first argument is the name of a process-global holding the address of the
first record (or null for an empty chain). Anything after it is a free-text
argument string, echoed back and not otherwise interpreted.

The chain must be acyclic: there is no cycle detection, walking a cyclic chain
loops until interrupted.

Examples of usage:
walk s_list_head - print the chain rooted at `s_list_head`
walk s_list_head annotate me - the same, `annotate me` echoed back
";

pub const HELP_SYMBOL: &str = "\
\x1b[32;1msymbol\x1b[0m
Print kind and address of every symbol in the inspected process whose name
matches a regular expression.

Examples of usage:
symbol main - print symbols with `main` in the name
symbol ^s_list - print symbols starting with `s_list`
";

pub fn help_for_command(command: Option<&str>) -> &str {
    match command {
        Some(WALK_PLUGIN) => HELP_WALK,
        Some(parser::SYMBOL_COMMAND) => HELP_SYMBOL,
        _ => HELP,
    }
}
