use crate::inspector::{Session, Symbol};
use crate::ui::command;

pub struct Handler<'a> {
    session: &'a dyn Session,
}

impl<'a> Handler<'a> {
    pub fn new(session: &'a dyn Session) -> Self {
        Self { session }
    }

    pub fn handle(self, regex: &str) -> command::CommandResult<Vec<Symbol>> {
        let mut symbols = self.session.get_symbols(regex)?;
        symbols.sort_by(|s1, s2| s1.name.cmp(&s2.name));
        Ok(symbols)
    }
}
