use crate::ROOT_SYMBOL;
use chainspect::inspector::image::ProcessImage;
use chainspect::inspector::walk::ListWalker;
use chainspect::ui::console::view::walk_result_lines;

#[test]
fn test_render_chain() {
    let payloads = [1144108930_u64, 984943658, 1622650073, 282475249, 16807];
    let image = ProcessImage::with_chain(ROOT_SYMBOL, &payloads);

    let result = ListWalker::new().walk(&image, ROOT_SYMBOL, "").unwrap();
    let lines = walk_result_lines(&result);

    assert_eq!(
        lines,
        vec![
            "0: Addr: 0x00000000601010, random value: 1144108930",
            "1: Addr: 0x00000000601020, random value: 984943658",
            "2: Addr: 0x00000000601030, random value: 1622650073",
            "3: Addr: 0x00000000601040, random value: 282475249",
            "4: Addr: 0x00000000601050, random value: 16807",
            "Found 5 nodes",
        ]
    );
}

#[test]
fn test_render_empty_chain() {
    let image = ProcessImage::with_chain(ROOT_SYMBOL, &[]);

    let result = ListWalker::new().walk(&image, ROOT_SYMBOL, "").unwrap();
    assert_eq!(walk_result_lines(&result), vec!["Found 0 nodes"]);
}

#[test]
fn test_render_args_echo() {
    let image = ProcessImage::with_chain(ROOT_SYMBOL, &[7]);

    let result = ListWalker::new()
        .walk(&image, ROOT_SYMBOL, "check me")
        .unwrap();
    let lines = walk_result_lines(&result);

    assert_eq!(lines[0], "args: check me");
    assert_eq!(lines.last().unwrap(), "Found 1 nodes");
}
