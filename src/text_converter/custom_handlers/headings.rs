//! Underlined headings.
//!
//! `h1` is framed by `=` rules above and below, `h2` is underlined with `=`,
//! `h3`–`h6` with `-`. The rule is as long as the raw text of the heading's
//! first child. When that child is not text (a nested `<code>`, `<a>`, …)
//! the length falls back to a fixed default, so such rules will not line up
//! with the title.

use std::rc::Rc;

use markup5ever_rcdom::Node;

use crate::text_converter::html_text::node_util::text_node_contents;
use crate::text_converter::html_text::{
    BlockOptions, BlockTextBuilder, Element, ElementHandler, FormatOptions, Handlers,
};
use crate::utils::DEFAULT_RULE_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    /// `=` rule above and below
    Framed,
    /// `=` rule below
    DoubleUnderline,
    /// `-` rule below
    SingleUnderline,
}

impl HeadingStyle {
    /// Style for heading level 1–6; deeper levels share the `-` style
    #[must_use]
    pub fn for_level(level: u8) -> Self {
        match level {
            1 => Self::Framed,
            2 => Self::DoubleUnderline,
            _ => Self::SingleUnderline,
        }
    }

    #[must_use]
    pub fn rule_char(self) -> char {
        match self {
            Self::Framed | Self::DoubleUnderline => '=',
            Self::SingleUnderline => '-',
        }
    }
}

/// Character count of the first child's text, or the default
pub(crate) fn rule_length(node: &Rc<Node>) -> usize {
    node.children
        .borrow()
        .first()
        .and_then(text_node_contents)
        .map(|text| text.chars().count())
        .filter(|len| *len > 0)
        .unwrap_or(DEFAULT_RULE_LENGTH)
}

pub struct HeadingFormatter {
    style: HeadingStyle,
}

impl HeadingFormatter {
    #[must_use]
    pub fn new(style: HeadingStyle) -> Self {
        Self { style }
    }
}

impl ElementHandler for HeadingFormatter {
    fn handle(
        &self,
        handlers: &dyn Handlers,
        element: Element,
        builder: &mut BlockTextBuilder,
        options: &FormatOptions,
    ) {
        let rule: String = std::iter::repeat_n(self.style.rule_char(), rule_length(element.node))
            .collect();

        builder.open_block(BlockOptions::new(options.leading_line_breaks));
        if self.style == HeadingStyle::Framed {
            builder.add_inline(&rule);
            builder.add_line_break();
        }
        handlers.walk_children(element.node, builder);
        builder.add_line_break();
        builder.add_inline(&rule);
        builder.close_block(options.trailing_line_breaks);
    }
}
