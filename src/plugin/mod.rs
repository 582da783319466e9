//! Plugin system. A plugin is a user-invocable action registered with the
//! console under a fixed invocation name, taking one free-text argument
//! string. The builtin chain walker is a plugin; external ones can be
//! registered by the embedding application.

pub mod walk;

use crate::inspector::Session;
use crate::ui::console::print::ExternalPrinter;
use indexmap::IndexMap;
use std::rc::Rc;

pub trait ConsolePlugin {
    /// Fixed invocation name.
    fn name(&self) -> &'static str;

    /// Execute the plugin against the current introspection session.
    ///
    /// # Arguments
    ///
    /// * `session`: host introspection session
    /// * `printer`: console printer instance
    /// * `args`: free-text argument string, `None` if the user gave none
    fn invoke(&self, session: &dyn Session, printer: &ExternalPrinter, args: Option<&str>);

    /// Return help information about this plugin.
    fn help(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("plugin `{0}` already registered")]
    AlreadyRegistered(&'static str),
}

/// Name-keyed plugin table. Registration is not idempotent: installing a
/// second plugin under a taken name is an error surfaced to the caller.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: IndexMap<&'static str, Rc<dyn ConsolePlugin>>,
}

impl PluginRegistry {
    pub fn register(&mut self, plugin: Rc<dyn ConsolePlugin>) -> Result<(), RegistryError> {
        let name = plugin.name();
        if self.plugins.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        self.plugins.insert(name, plugin);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Rc<dyn ConsolePlugin>> {
        self.plugins.get(name).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.plugins.keys().copied()
    }
}
