use std::fmt::{Display, Formatter};

/// Represent an address in the inspected process memory space.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug, Default)]
pub struct RemoteAddress(u64);

impl RemoteAddress {
    /// The null sentinel, terminates a record chain.
    pub const NULL: RemoteAddress = RemoteAddress(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u64> for RemoteAddress {
    fn from(addr: u64) -> Self {
        RemoteAddress(addr)
    }
}

impl From<usize> for RemoteAddress {
    fn from(addr: usize) -> Self {
        RemoteAddress(addr as u64)
    }
}

impl From<RemoteAddress> for u64 {
    fn from(addr: RemoteAddress) -> Self {
        addr.0
    }
}

impl Display for RemoteAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format!("{:#016X}", self.0))
    }
}
