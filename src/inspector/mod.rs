//! Introspection layer. The host debugger (process control, breakpoints, raw
//! memory access) is an external collaborator hidden behind the [`Session`]
//! trait; everything here only reads already-available values from a stopped
//! process.

pub mod address;
pub mod error;
pub mod image;
pub mod snapshot;
pub mod value;
pub mod walk;

use crate::inspector::address::RemoteAddress;
use crate::inspector::error::Error;
use crate::inspector::value::Value;
use strum_macros::{Display, EnumString};

/// Kind of a symbol in the inspected process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum SymbolKind {
    #[strum(serialize = "data")]
    Data,
    #[strum(serialize = "text")]
    Text,
    #[strum(serialize = "unknown")]
    Unknown,
}

/// A named process-global resolved in the inspected process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub value: RemoteAddress,
}

/// Host introspection session, attached to a live, stopped process.
pub trait Session {
    /// Resolve a named process-global to its current value.
    fn resolve_symbol<'s>(&'s self, name: &str) -> Result<Box<dyn Value<'s> + 's>, Error>;

    /// Return all symbols whose name matches a regular expression.
    fn get_symbols(&self, regex: &str) -> Result<Vec<Symbol>, Error>;
}
