use crate::inspector::walk::WalkResult;
use crate::ui::console::print::ExternalPrinter;

/// Render one traversal result as console lines: optional argument echo, one
/// line per visited record, a trailing count.
pub fn walk_result_lines(result: &WalkResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.count() + 2);

    if !result.args.is_empty() {
        lines.push(format!("args: {}", result.args));
    }

    lines.extend(result.records.iter().map(|record| {
        format!(
            "{}: Addr: {}, random value: {}",
            record.index, record.addr, record.payload
        )
    }));

    lines.push(format!("Found {} nodes", result.count()));
    lines
}

pub fn print_walk_result(printer: &ExternalPrinter, result: &WalkResult) {
    for line in walk_result_lines(result) {
        printer.println(line);
    }
}
