//! Process image snapshots. A snapshot is a TOML description of the symbols
//! and records of an inspected process, loaded into a [`ProcessImage`] so a
//! session can be replayed without a live debugger attached.

use crate::inspector::address::RemoteAddress;
use crate::inspector::error::Error;
use crate::inspector::image::ProcessImage;
use crate::inspector::SymbolKind;
use itertools::Itertools;
use rand::Rng;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    symbols: Vec<SymbolDef>,
    #[serde(default)]
    records: Vec<RecordDef>,
}

#[derive(Debug, Deserialize)]
struct SymbolDef {
    name: String,
    value: u64,
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RecordDef {
    addr: u64,
    #[serde(default)]
    next: u64,
    payload: u64,
}

impl Snapshot {
    pub fn from_toml(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Validate the snapshot and materialize it as a process image.
    pub fn into_image(self) -> Result<ProcessImage, Error> {
        let mut image = ProcessImage::new();

        let mut seen = std::collections::HashSet::new();
        for record in &self.records {
            if !seen.insert(record.addr) {
                return Err(Error::DuplicateRecord(RemoteAddress::from(record.addr)));
            }
            image.add_record(record.addr, record.next, record.payload);
        }

        for symbol in self.symbols {
            let kind = match symbol.kind {
                None => SymbolKind::Data,
                Some(ref s) => SymbolKind::from_str(s)
                    .map_err(|_| Error::UnknownSymbolKind(s.to_string()))?,
            };
            image.add_symbol(symbol.name, kind, symbol.value);
        }

        Ok(image)
    }
}

/// Build a demo image: one chain of `n` records filled with random payloads,
/// the kind of target such walkers are usually demonstrated against.
pub fn demo_image(root_symbol: &str, n: usize) -> ProcessImage {
    let mut rng = rand::thread_rng();
    let payloads: Vec<u64> = (0..n).map(|_| rng.gen::<u32>() as u64).collect();

    log::debug!(
        target: "inspector",
        "demo image `{root_symbol}` payloads: [{}]",
        payloads.iter().join(", ")
    );
    ProcessImage::with_chain(root_symbol, &payloads)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::inspector::Session;

    const SNAPSHOT: &str = r#"
[[symbols]]
name = "s_list_head"
value = 0x1000

[[symbols]]
name = "main"
kind = "text"
value = 0x401000

[[records]]
addr = 0x1000
next = 0x1010
payload = 11

[[records]]
addr = 0x1010
payload = 22
"#;

    #[test]
    fn test_snapshot_into_image() {
        let image = Snapshot::from_toml(SNAPSHOT).unwrap().into_image().unwrap();

        let root = image.resolve_symbol("s_list_head").unwrap();
        assert_eq!(root.as_address().unwrap().as_u64(), 0x1000);

        let symbols = image.get_symbols("^main$").unwrap();
        assert_eq!(symbols[0].kind, SymbolKind::Text);
    }

    #[test]
    fn test_malformed_snapshot() {
        assert!(matches!(
            Snapshot::from_toml("[[records]]\naddr = \"oops\""),
            Err(Error::SnapshotParsing(_))
        ));

        let dup = "[[records]]\naddr = 16\npayload = 1\n[[records]]\naddr = 16\npayload = 2";
        let err = Snapshot::from_toml(dup).unwrap().into_image().unwrap_err();
        assert!(matches!(err, Error::DuplicateRecord(addr) if addr.as_u64() == 16));

        let bad_kind = "[[symbols]]\nname = \"x\"\nvalue = 1\nkind = \"bss\"";
        let err = Snapshot::from_toml(bad_kind)
            .unwrap()
            .into_image()
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSymbolKind(kind) if kind == "bss"));
    }

    #[test]
    fn test_demo_image_is_walkable() {
        let image = demo_image("s_list_head", 4);
        let symbols = image.get_symbols("^s_list_head$").unwrap();
        assert_eq!(symbols.len(), 1);
    }
}
