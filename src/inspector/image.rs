use crate::inspector::address::RemoteAddress;
use crate::inspector::error::Error;
use crate::inspector::value::Value;
use crate::inspector::walk::{DEFAULT_NEXT_FIELD, DEFAULT_PAYLOAD_FIELD};
use crate::inspector::{Session, Symbol, SymbolKind};
use indexmap::IndexMap;
use regex::Regex;

/// Base address used by [`ProcessImage::with_chain`] for the first record.
pub const CHAIN_BASE_ADDR: u64 = 0x0060_1010;
/// Distance between consecutive records placed by [`ProcessImage::with_chain`].
pub const CHAIN_RECORD_STRIDE: u64 = 0x10;

#[derive(Debug, Clone, Copy)]
struct ImageSymbol {
    kind: SymbolKind,
    value: u64,
}

/// One record resident in the image memory, a link address plus a payload.
#[derive(Debug, Clone, Copy)]
struct ImageRecord {
    next: u64,
    payload: u64,
}

/// In-memory image of an inspected process: a symbol table and a set of
/// linked records at fixed addresses.
///
/// This is the introspection service used when no real debugger is attached -
/// the test suite and the demo binary both drive the walker through it. Tables
/// keep insertion order.
#[derive(Debug, Default)]
pub struct ProcessImage {
    symbols: IndexMap<String, ImageSymbol>,
    records: IndexMap<u64, ImageRecord>,
}

impl ProcessImage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a process-global holding `value`.
    pub fn add_symbol(&mut self, name: impl Into<String>, kind: SymbolKind, value: u64) {
        self.symbols.insert(name.into(), ImageSymbol { kind, value });
    }

    /// Place a record at `addr`.
    pub fn add_record(&mut self, addr: u64, next: u64, payload: u64) {
        self.records.insert(addr, ImageRecord { next, payload });
    }

    /// Build an image with a single chain of `payloads.len()` records linked
    /// head to tail, reachable from the data symbol `root_symbol`. An empty
    /// payload list produces a null root.
    pub fn with_chain(root_symbol: &str, payloads: &[u64]) -> Self {
        let mut image = Self::new();

        let addr_of = |i: usize| CHAIN_BASE_ADDR + i as u64 * CHAIN_RECORD_STRIDE;
        for (i, &payload) in payloads.iter().enumerate() {
            let next = if i + 1 < payloads.len() {
                addr_of(i + 1)
            } else {
                0
            };
            image.add_record(addr_of(i), next, payload);
        }

        let root = if payloads.is_empty() { 0 } else { addr_of(0) };
        image.add_symbol(root_symbol, SymbolKind::Data, root);
        image
    }

    fn record(&self, addr: u64) -> Result<ImageRecord, Error> {
        self.records
            .get(&addr)
            .copied()
            .ok_or(Error::MemoryRead(RemoteAddress::from(addr)))
    }
}

impl Session for ProcessImage {
    fn resolve_symbol<'s>(&'s self, name: &str) -> Result<Box<dyn Value<'s> + 's>, Error> {
        let symbol = self
            .symbols
            .get(name)
            .ok_or_else(|| Error::SymbolNotFound(name.to_string()))?;

        Ok(Box::new(ImageValue {
            image: self,
            repr: ValueRepr::Pointer(symbol.value),
        }))
    }

    fn get_symbols(&self, regex: &str) -> Result<Vec<Symbol>, Error> {
        let re = Regex::new(regex)?;
        Ok(self
            .symbols
            .iter()
            .filter(|(name, _)| re.is_match(name))
            .map(|(name, symbol)| Symbol {
                name: name.clone(),
                kind: symbol.kind,
                value: RemoteAddress::from(symbol.value),
            })
            .collect())
    }
}

#[derive(Debug, Clone, Copy)]
enum ValueRepr {
    /// Address of a record, or the null sentinel.
    Pointer(u64),
    /// An opaque fixed-width payload.
    Scalar(u64),
}

struct ImageValue<'a> {
    image: &'a ProcessImage,
    repr: ValueRepr,
}

impl<'a> Value<'a> for ImageValue<'a> {
    fn field(&self, name: &str) -> Result<Box<dyn Value<'a> + 'a>, Error> {
        let ValueRepr::Pointer(addr) = self.repr else {
            return Err(Error::NotARecord);
        };

        let record = self.image.record(addr)?;
        let repr = match name {
            DEFAULT_NEXT_FIELD => ValueRepr::Pointer(record.next),
            DEFAULT_PAYLOAD_FIELD => ValueRepr::Scalar(record.payload),
            _ => return Err(Error::FieldNotFound(name.to_string())),
        };

        Ok(Box::new(ImageValue {
            image: self.image,
            repr,
        }))
    }

    fn as_address(&self) -> Result<RemoteAddress, Error> {
        match self.repr {
            ValueRepr::Pointer(addr) => Ok(RemoteAddress::from(addr)),
            ValueRepr::Scalar(_) => Err(Error::NotAnAddress),
        }
    }

    fn as_u64(&self) -> Result<u64, Error> {
        match self.repr {
            ValueRepr::Pointer(addr) => Ok(addr),
            ValueRepr::Scalar(value) => Ok(value),
        }
    }

    fn is_null(&self) -> bool {
        matches!(self.repr, ValueRepr::Pointer(0))
    }
}
