use super::super::Element;
use super::super::block_builder::{BlockOptions, BlockTextBuilder, LinePrefix};
use super::super::node_util::{child_elements_named, parent_tag_name_equals};
use super::super::options::FormatOptions;
use super::Handlers;

/// `ul` / `ol`: one hanging-prefix block per `li`.
///
/// Lists nested inside a list item sit one line below the item text instead
/// of using the top-level separators.
pub(super) fn list_handler(
    handlers: &dyn Handlers,
    element: Element,
    builder: &mut BlockTextBuilder,
    options: &FormatOptions,
) {
    let items = child_elements_named(element.node, &["li"]);
    if items.is_empty() {
        return;
    }

    let (leading, trailing) = if parent_tag_name_equals(element.node, &["li"]) {
        (1, 1)
    } else {
        (options.leading_line_breaks, options.trailing_line_breaks)
    };

    let ordered = element.tag == "ol";
    let start = element
        .attr("start")
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(1);
    // Numbers stop at i64::MAX instead of overflowing
    let number_at = |i: usize| start.saturating_add(i64::try_from(i).unwrap_or(i64::MAX));
    let last = number_at(items.len() - 1);
    let number_width = start.to_string().len().max(last.to_string().len());

    builder.open_block(BlockOptions::new(leading));
    for (i, item) in items.iter().enumerate() {
        let marker = if ordered {
            format!(" {:>number_width$}. ", number_at(i))
        } else {
            " * ".to_string()
        };
        builder.open_block(BlockOptions::new(1).with_prefix(LinePrefix::hanging(marker)));
        handlers.walk_children(item, builder);
        builder.close_block(1);
    }
    builder.close_block(trailing);
}
