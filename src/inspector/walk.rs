use crate::inspector::address::RemoteAddress;
use crate::inspector::error::Error;
use crate::inspector::value::Value;
use crate::inspector::Session;

pub const DEFAULT_NEXT_FIELD: &str = "next";
pub const DEFAULT_PAYLOAD_FIELD: &str = "payload";

/// One visited record of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkedRecord {
    pub index: usize,
    pub addr: RemoteAddress,
    pub payload: u64,
}

/// Result of one traversal invocation. Created fresh per invocation and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalkResult {
    /// Visited records in traversal order, head to tail.
    pub records: Vec<WalkedRecord>,
    /// Free-text argument string, accepted for extensibility and echoed back,
    /// not otherwise interpreted.
    pub args: String,
}

impl WalkResult {
    fn new(args: &str) -> Self {
        Self {
            records: vec![],
            args: args.to_string(),
        }
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// Traversal failure. Records gathered before the failing node are carried in
/// `partial` and should still be reported for diagnostic value.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct WalkError {
    pub partial: WalkResult,
    #[source]
    pub source: Error,
}

/// Walker over a null-terminated singly linked chain of foreign-process
/// records.
///
/// The chain must be acyclic and finite: there is no cycle detection, a
/// cyclic chain makes the walk loop until the host session interrupts it or
/// an introspection read fails. Known limitation.
pub struct ListWalker {
    next_field: String,
    payload_field: String,
}

impl Default for ListWalker {
    fn default() -> Self {
        Self {
            next_field: DEFAULT_NEXT_FIELD.to_string(),
            payload_field: DEFAULT_PAYLOAD_FIELD.to_string(),
        }
    }
}

impl ListWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a walker for records with non-default link and payload field
    /// names.
    pub fn with_fields(next: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            next_field: next.into(),
            payload_field: payload.into(),
        }
    }

    /// Traverse the chain reachable from the process-global `root`, reading
    /// one payload per record until the null sentinel.
    ///
    /// The walk is synchronous and performs no retries: a resolution failure
    /// produces an error with an empty partial result, a failed dereference
    /// mid-chain produces an error carrying everything gathered so far. The
    /// inspected process memory is never written.
    pub fn walk(
        &self,
        session: &dyn Session,
        root: &str,
        args: &str,
    ) -> Result<WalkResult, WalkError> {
        let mut result = WalkResult::new(args);

        let mut current = session.resolve_symbol(root).map_err(|e| WalkError {
            partial: WalkResult::new(args),
            source: e,
        })?;

        let mut index = 0;
        while !current.is_null() {
            let record = current
                .as_address()
                .and_then(|addr| {
                    let payload = current.field(&self.payload_field)?.as_u64()?;
                    Ok(WalkedRecord {
                        index,
                        addr,
                        payload,
                    })
                })
                .map_err(|e| WalkError {
                    partial: result.clone(),
                    source: e,
                })?;
            result.records.push(record);

            current = current.field(&self.next_field).map_err(|e| WalkError {
                partial: result.clone(),
                source: e,
            })?;
            index += 1;
        }

        log::debug!(target: "inspector", "chain `{root}` walked, {} records", result.count());
        Ok(result)
    }
}
