use crate::ROOT_SYMBOL;
use chainspect::inspector::error::Error;
use chainspect::inspector::image::{ProcessImage, CHAIN_BASE_ADDR, CHAIN_RECORD_STRIDE};
use chainspect::inspector::walk::ListWalker;
use chainspect::inspector::SymbolKind;

#[test]
fn test_walk_empty_chain() {
    let image = ProcessImage::with_chain(ROOT_SYMBOL, &[]);

    let result = ListWalker::new().walk(&image, ROOT_SYMBOL, "").unwrap();
    assert_eq!(result.count(), 0);
    assert!(result.records.is_empty());
}

#[test]
fn test_walk_chain_of_any_len() {
    for len in 0..=8_usize {
        let payloads: Vec<u64> = (0..len as u64).map(|i| i * 100 + 7).collect();
        let image = ProcessImage::with_chain(ROOT_SYMBOL, &payloads);

        let result = ListWalker::new().walk(&image, ROOT_SYMBOL, "").unwrap();
        assert_eq!(result.count(), len);
        assert_eq!(result.records.len(), len);
    }
}

#[test]
fn test_walk_order_is_head_to_tail() {
    let image = ProcessImage::with_chain(ROOT_SYMBOL, &[3, 1, 2]);

    let result = ListWalker::new().walk(&image, ROOT_SYMBOL, "").unwrap();

    let indexes: Vec<usize> = result.records.iter().map(|r| r.index).collect();
    assert_eq!(indexes, vec![0, 1, 2]);

    let payloads: Vec<u64> = result.records.iter().map(|r| r.payload).collect();
    assert_eq!(payloads, vec![3, 1, 2]);

    let addrs: Vec<u64> = result.records.iter().map(|r| r.addr.as_u64()).collect();
    assert_eq!(
        addrs,
        vec![
            CHAIN_BASE_ADDR,
            CHAIN_BASE_ADDR + CHAIN_RECORD_STRIDE,
            CHAIN_BASE_ADDR + 2 * CHAIN_RECORD_STRIDE,
        ]
    );
}

#[test]
fn test_walk_five_records_scenario() {
    let payloads = [1144108930_u64, 984943658, 1622650073, 282475249, 16807];
    let image = ProcessImage::with_chain(ROOT_SYMBOL, &payloads);

    let result = ListWalker::new().walk(&image, ROOT_SYMBOL, "").unwrap();
    assert_eq!(result.count(), 5);
    assert_eq!(
        result.records.iter().map(|r| r.payload).collect::<Vec<_>>(),
        payloads.to_vec()
    );
}

#[test]
fn test_walk_is_idempotent() {
    let image = ProcessImage::with_chain(ROOT_SYMBOL, &[5, 6, 7, 8]);
    let walker = ListWalker::new();

    let result1 = walker.walk(&image, ROOT_SYMBOL, "echo me").unwrap();
    let result2 = walker.walk(&image, ROOT_SYMBOL, "echo me").unwrap();
    assert_eq!(result1, result2);
}

#[test]
fn test_walk_echoes_args() {
    let image = ProcessImage::with_chain(ROOT_SYMBOL, &[1]);

    let result = ListWalker::new()
        .walk(&image, ROOT_SYMBOL, "and some free text")
        .unwrap();
    assert_eq!(result.args, "and some free text");
}

#[test]
fn test_walk_root_resolution_failure() {
    let image = ProcessImage::with_chain(ROOT_SYMBOL, &[1, 2, 3]);

    let err = ListWalker::new()
        .walk(&image, "s_other_list", "")
        .unwrap_err();
    assert!(matches!(&err.source, Error::SymbolNotFound(name) if name == "s_other_list"));
    assert_eq!(err.partial.count(), 0);
}

#[test]
fn test_walk_mid_chain_memory_fault() {
    // three well-formed records, then a next pointer into unmapped memory
    let mut image = ProcessImage::new();
    let addr_of = |i: u64| 0x1000 + i * 0x10;
    image.add_record(addr_of(0), addr_of(1), 100);
    image.add_record(addr_of(1), addr_of(2), 200);
    image.add_record(addr_of(2), 0xDEAD_BEEF, 300);
    image.add_symbol(ROOT_SYMBOL, SymbolKind::Data, addr_of(0));

    let err = ListWalker::new().walk(&image, ROOT_SYMBOL, "").unwrap_err();
    assert!(matches!(&err.source, Error::MemoryRead(addr) if addr.as_u64() == 0xDEAD_BEEF));

    // records gathered before the fault are still reported
    assert_eq!(err.partial.count(), 3);
    assert_eq!(
        err.partial
            .records
            .iter()
            .map(|r| r.payload)
            .collect::<Vec<_>>(),
        vec![100, 200, 300]
    );
}

#[test]
fn test_walk_custom_field_names() {
    // images expose `next`/`payload` records, a walker configured for other
    // field names must fail the first read
    let image = ProcessImage::with_chain(ROOT_SYMBOL, &[1, 2]);

    let walker = ListWalker::with_fields("forward", "data");
    let err = walker.walk(&image, ROOT_SYMBOL, "").unwrap_err();
    assert!(matches!(&err.source, Error::FieldNotFound(name) if name == "data"));
}
