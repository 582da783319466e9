use crate::inspector::address::RemoteAddress;
use crate::inspector::error::Error;

/// A value read from the inspected process through the host introspection API.
///
/// Values are read-only views, the inspected process owns the underlying
/// memory. The lifetime parameter ties a value to the introspection session it
/// was read from, not to its parent value, so a chain cursor can be advanced
/// by replacing it with one of its own fields.
pub trait Value<'s> {
    /// Read a named struct field from a value representing a foreign-memory
    /// record.
    fn field(&self, name: &str) -> Result<Box<dyn Value<'s> + 's>, Error>;

    /// Interpret this value as an address in the inspected process.
    fn as_address(&self) -> Result<RemoteAddress, Error>;

    /// Interpret this value as an unsigned integer.
    fn as_u64(&self) -> Result<u64, Error>;

    /// True if this value equals the null sentinel.
    fn is_null(&self) -> bool;
}
