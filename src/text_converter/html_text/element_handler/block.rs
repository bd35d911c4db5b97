use super::super::Element;
use super::super::block_builder::{BlockOptions, BlockTextBuilder, LinePrefix};
use super::super::options::FormatOptions;
use super::Handlers;
use crate::utils::HORIZONTAL_RULE_LENGTH;

pub(super) fn block_handler(
    handlers: &dyn Handlers,
    element: Element,
    builder: &mut BlockTextBuilder,
    options: &FormatOptions,
) {
    builder.open_block(BlockOptions::new(options.leading_line_breaks));
    handlers.walk_children(element.node, builder);
    builder.close_block(options.trailing_line_breaks);
}

/// Headings without a custom formatter: upper-cased text in its own block
pub(super) fn heading_handler(
    handlers: &dyn Handlers,
    element: Element,
    builder: &mut BlockTextBuilder,
    options: &FormatOptions,
) {
    let text = handlers.render_children(element.node);
    builder.open_block(BlockOptions::new(options.leading_line_breaks));
    builder.add_inline(&text.to_uppercase());
    builder.close_block(options.trailing_line_breaks);
}

/// Verbatim block: no whitespace collapsing, no word wrap
pub fn pre_handler(
    handlers: &dyn Handlers,
    element: Element,
    builder: &mut BlockTextBuilder,
    options: &FormatOptions,
) {
    builder.open_block(BlockOptions::new(options.leading_line_breaks).pre());
    handlers.walk_children(element.node, builder);
    builder.close_block(options.trailing_line_breaks);
}

pub(super) fn blockquote_handler(
    handlers: &dyn Handlers,
    element: Element,
    builder: &mut BlockTextBuilder,
    options: &FormatOptions,
) {
    builder.open_block(
        BlockOptions::new(options.leading_line_breaks).with_prefix(LinePrefix::uniform("> ")),
    );
    handlers.walk_children(element.node, builder);
    builder.close_block(options.trailing_line_breaks);
}

pub(super) fn br_handler(
    _handlers: &dyn Handlers,
    _element: Element,
    builder: &mut BlockTextBuilder,
    _options: &FormatOptions,
) {
    builder.add_line_break();
}

pub(super) fn hr_handler(
    _handlers: &dyn Handlers,
    _element: Element,
    builder: &mut BlockTextBuilder,
    options: &FormatOptions,
) {
    builder.open_block(BlockOptions::new(options.leading_line_breaks));
    builder.add_inline(&"-".repeat(HORIZONTAL_RULE_LENGTH));
    builder.close_block(options.trailing_line_breaks);
}

/// Drop the element and everything below it
pub(super) fn discard_handler(
    _handlers: &dyn Handlers,
    _element: Element,
    _builder: &mut BlockTextBuilder,
    _options: &FormatOptions,
) {
}
