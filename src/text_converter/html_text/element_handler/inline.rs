use super::super::Element;
use super::super::block_builder::BlockTextBuilder;
use super::super::options::FormatOptions;
use super::Handlers;

/// Link text followed by the target in brackets, unless they are the same
pub(super) fn anchor_handler(
    handlers: &dyn Handlers,
    element: Element,
    builder: &mut BlockTextBuilder,
    _options: &FormatOptions,
) {
    let text = handlers.render_children(element.node);
    builder.add_inline(&text);

    if let Some(href) = element.attr("href")
        && !href.is_empty()
        && href != text.trim()
    {
        builder.add_inline(" [");
        builder.add_inline(href);
        builder.add_inline("]");
    }
}

/// Alt text in brackets; images without alt text vanish
pub(super) fn img_handler(
    _handlers: &dyn Handlers,
    element: Element,
    builder: &mut BlockTextBuilder,
    _options: &FormatOptions,
) {
    if let Some(alt) = element.attr("alt")
        && !alt.trim().is_empty()
    {
        builder.add_inline("[");
        builder.add_inline(alt);
        builder.add_inline("]");
    }
}

/// Task-list checkboxes as `[x]` / `[ ]`
pub(super) fn checkbox_handler(
    _handlers: &dyn Handlers,
    element: Element,
    builder: &mut BlockTextBuilder,
    _options: &FormatOptions,
) {
    if element.attr("type") != Some("checkbox") {
        return;
    }
    if element.attr("checked").is_some() {
        builder.add_inline("[x] ");
    } else {
        builder.add_inline("[ ] ");
    }
}
