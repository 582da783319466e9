use crate::inspector::address::RemoteAddress;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // --------------------------------- generic errors --------------------------------------------
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    RegEx(#[from] regex::Error),

    // --------------------------------- introspection errors --------------------------------------
    #[error("symbol `{0}` not found in the inspected process")]
    SymbolNotFound(String),
    #[error("read targets unmapped or inaccessible memory at {0}")]
    MemoryRead(RemoteAddress),
    #[error("field `{0}` not found")]
    FieldNotFound(String),
    #[error("value is not an address")]
    NotAnAddress,
    #[error("value is not a record reference")]
    NotARecord,

    // --------------------------------- snapshot errors -------------------------------------------
    #[error("snapshot parsing error: {0}")]
    SnapshotParsing(#[from] toml::de::Error),
    #[error("unknown symbol kind `{0}`")]
    UnknownSymbolKind(String),
    #[error("record at {0} defined twice in snapshot")]
    DuplicateRecord(RemoteAddress),
}

impl Error {
    /// Return a hint to an interface - continue the session after error or stop whole process.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::RegEx(_) => false,
            Error::SymbolNotFound(_) => false,
            Error::MemoryRead(_) => false,
            Error::FieldNotFound(_) => false,
            Error::NotAnAddress => false,
            Error::NotARecord => false,
            Error::UnknownSymbolKind(_) => false,
            Error::DuplicateRecord(_) => false,

            // currently fatal errors
            Error::IO(_) => true,
            Error::SnapshotParsing(_) => true,
        }
    }
}

#[macro_export]
macro_rules! _error {
    ($log_fn: path, $res: expr) => {
        match $res {
            Ok(value) => Some(value),
            Err(e) => {
                $log_fn!(target: "inspector", "{:#}", e);
                None
            }
        }
    };
    ($log_fn: path, $res: expr, $msg: tt) => {
        match $res {
            Ok(value) => Some(value),
            Err(e) => {
                $log_fn!(target: "inspector", concat!($msg, " {:#}"), e);
                None
            }
        }
    };
}

/// Transforms `Result` into `Option` and logs an error if it occurs.
#[macro_export]
macro_rules! weak_error {
    ($res: expr) => {
        $crate::_error!(log::warn, $res)
    };
    ($res: expr, $msg: tt) => {
        $crate::_error!(log::warn, $res, $msg)
    };
}
