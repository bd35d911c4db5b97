//! HTML → plain text conversion driver.
//!
//! Parses HTML with `html5ever` into an `RcDom`, walks the tree and hands
//! each element to the handler registered for its tag. Handlers write into a
//! [`BlockTextBuilder`]. A set of built-in handlers covers common elements;
//! callers override them per tag through [`HtmlToTextBuilder::add_handler`].

pub mod block_builder;
pub(crate) mod dom_walker;
pub mod element_handler;
pub(crate) mod node_util;
pub mod options;
pub(crate) mod text_util;

use std::rc::Rc;

use html5ever::tendril::TendrilSink;
use html5ever::{Attribute, ParseOpts, parse_document};
use markup5ever_rcdom::{Node, RcDom};

use crate::error::Result;
use crate::utils::DEFAULT_WORDWRAP;

pub use block_builder::{BlockOptions, BlockTextBuilder, LinePrefix};
pub use element_handler::{ElementHandler, Handlers};
pub use options::FormatOptions;

use element_handler::ElementHandlers;

/// Read-only view of the element a handler is converting
pub struct Element<'a> {
    pub node: &'a Rc<Node>,
    pub tag: &'a str,
    pub attrs: &'a [Attribute],
}

impl<'a> Element<'a> {
    /// Attribute value by name
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.attrs
            .iter()
            .find(|a| &*a.name.local == name)
            .map(|a| &*a.value)
    }
}

pub struct HtmlToText {
    handlers: ElementHandlers,
    wordwrap: Option<usize>,
}

impl HtmlToText {
    /// Converter with the built-in handlers and default word wrap
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> HtmlToTextBuilder {
        HtmlToTextBuilder {
            handlers: ElementHandlers::new(),
            wordwrap: Some(DEFAULT_WORDWRAP),
        }
    }

    /// Convert an HTML document or fragment to text.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConvertError::Parse`] if the parser sink fails.
    pub fn convert(&self, html: &str) -> Result<String> {
        let dom = parse_document(RcDom::default(), ParseOpts::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())?;

        let mut builder = BlockTextBuilder::new(self.wordwrap);
        dom_walker::walk_node(&dom.document, &self.handlers, &mut builder);
        let text = builder.finish();

        log::debug!(
            "Converted {} bytes of HTML into {} bytes of text",
            html.len(),
            text.len()
        );
        Ok(text)
    }
}

impl Default for HtmlToText {
    fn default() -> Self {
        Self::new()
    }
}

pub struct HtmlToTextBuilder {
    handlers: ElementHandlers,
    wordwrap: Option<usize>,
}

impl HtmlToTextBuilder {
    /// Register `handler` for every tag in `tags`, replacing any earlier one.
    ///
    /// An empty `tags` slice registers nothing.
    #[must_use]
    pub fn add_handler<Handler>(
        mut self,
        tags: &[&str],
        handler: Handler,
        options: FormatOptions,
    ) -> Self
    where
        Handler: ElementHandler + 'static,
    {
        self.handlers.add_handler(tags, handler, options);
        self
    }

    #[must_use]
    pub fn wordwrap(mut self, width: Option<usize>) -> Self {
        self.wordwrap = width;
        self
    }

    #[must_use]
    pub fn build(self) -> HtmlToText {
        HtmlToText {
            handlers: self.handlers,
            wordwrap: self.wordwrap,
        }
    }
}
