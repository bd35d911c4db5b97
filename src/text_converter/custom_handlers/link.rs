//! Anchors rendered as text with the resolved target in brackets.
//!
//! The visible text is the raw text of the anchor's *first* child only.
//! Anchors whose first child is markup (`<a><code>x</code></a>`) count as
//! having no visible text: their children are walked and the target follows.

use crate::text_converter::html_text::node_util::{is_element, text_node_contents};
use crate::text_converter::html_text::{
    BlockTextBuilder, Element, ElementHandler, FormatOptions, Handlers,
};

use super::url_rewrite::resolve_href;

pub struct LinkFormatter {
    base_url: String,
}

impl LinkFormatter {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl ElementHandler for LinkFormatter {
    fn handle(
        &self,
        handlers: &dyn Handlers,
        element: Element,
        builder: &mut BlockTextBuilder,
        _options: &FormatOptions,
    ) {
        let href_attr = element.attr("href");
        let href = href_attr.and_then(|href| resolve_href(href, &self.base_url));

        let children = element.node.children.borrow();
        let first_child = children.first();
        let text = first_child
            .and_then(text_node_contents)
            .filter(|text| !text.is_empty());
        let nested = first_child.is_some_and(is_element);

        match (text, href) {
            (Some(text), None) => builder.add_inline(&text),
            (Some(text), Some(href)) if text == href => builder.add_inline(&text),
            // No href attribute at all: render the content as plain text
            (None, None) if href_attr.is_none() => handlers.walk(&children, builder),
            // Discarded target and no visible text
            (None, None) => {}
            (None, Some(href)) if nested => {
                handlers.walk(&children, builder);
                builder.add_inline(" [");
                builder.add_inline(&href);
                builder.add_inline("]");
            }
            (None, Some(href)) => builder.add_inline(&href),
            (Some(text), Some(href)) => {
                builder.add_inline(&text);
                builder.add_inline(" [");
                builder.add_inline(&href);
                builder.add_inline("]");
            }
        }
    }
}
