mod block;
mod inline;
mod list;
mod table;

use std::collections::HashMap;
use std::rc::Rc;

use html5ever::Attribute;
use markup5ever_rcdom::Node;

use super::Element;
use super::block_builder::BlockTextBuilder;
use super::dom_walker;
use super::options::FormatOptions;

pub use block::pre_handler;

use block::{
    block_handler, blockquote_handler, br_handler, discard_handler, heading_handler, hr_handler,
};
use inline::{anchor_handler, checkbox_handler, img_handler};
use list::list_handler;
use table::table_handler;

/// Trait for converting one HTML element into text.
///
/// A handler receives the element, the walker (to render children on
/// demand), the output builder and the options of the matching selector.
pub trait ElementHandler {
    fn handle(
        &self,
        handlers: &dyn Handlers,
        element: Element,
        builder: &mut BlockTextBuilder,
        options: &FormatOptions,
    );
}

impl<F> ElementHandler for F
where
    F: Fn(&dyn Handlers, Element, &mut BlockTextBuilder, &FormatOptions),
{
    fn handle(
        &self,
        handlers: &dyn Handlers,
        element: Element,
        builder: &mut BlockTextBuilder,
        options: &FormatOptions,
    ) {
        self(handlers, element, builder, options);
    }
}

struct Registration {
    handler_idx: usize,
    options: FormatOptions,
}

/// Tag → handler table. Later registrations replace earlier ones.
pub(crate) struct ElementHandlers {
    handlers: Vec<Box<dyn ElementHandler>>,
    tag_to_handler: HashMap<String, Registration>,
}

impl ElementHandlers {
    pub fn new() -> Self {
        let mut handlers = Self {
            handlers: Vec::new(),
            tag_to_handler: HashMap::new(),
        };

        // headings
        handlers.add_handler(
            &["h1", "h2", "h3", "h4", "h5", "h6"],
            heading_handler,
            FormatOptions::new(2, 2),
        );

        // p
        handlers.add_handler(&["p"], block_handler, FormatOptions::new(2, 2));

        // pre
        handlers.add_handler(&["pre"], pre_handler, FormatOptions::new(2, 2));

        // quote
        handlers.add_handler(&["blockquote"], blockquote_handler, FormatOptions::new(2, 2));

        // list
        handlers.add_handler(&["ol", "ul"], list_handler, FormatOptions::new(2, 2));

        // table
        handlers.add_handler(&["table"], table_handler, FormatOptions::new(2, 2));

        // br
        handlers.add_handler(&["br"], br_handler, FormatOptions::inline());

        // hr
        handlers.add_handler(&["hr"], hr_handler, FormatOptions::new(2, 2));

        // a
        handlers.add_handler(&["a"], anchor_handler, FormatOptions::inline());

        // img
        handlers.add_handler(&["img"], img_handler, FormatOptions::inline());

        // task list checkboxes
        handlers.add_handler(&["input"], checkbox_handler, FormatOptions::inline());

        // Other block elements
        handlers.add_handler(
            &[
                "address", "article", "aside", "dd", "details", "div", "dl", "dt", "figcaption",
                "figure", "footer", "header", "main", "nav", "section", "summary",
            ],
            block_handler,
            FormatOptions::new(1, 1),
        );

        // Content with no text representation
        handlers.add_handler(
            &["head", "script", "style", "template", "title"],
            discard_handler,
            FormatOptions::inline(),
        );

        handlers
    }

    pub fn add_handler<Handler>(&mut self, tags: &[&str], handler: Handler, options: FormatOptions)
    where
        Handler: ElementHandler + 'static,
    {
        if tags.is_empty() {
            log::warn!("add_handler called with no tags; handler ignored");
            return;
        }
        let handler_idx = self.handlers.len();
        self.handlers.push(Box::new(handler));
        for tag in tags {
            self.tag_to_handler.insert(
                tag.to_ascii_lowercase(),
                Registration {
                    handler_idx,
                    options,
                },
            );
        }
    }

    pub fn handle(
        &self,
        node: &Rc<Node>,
        tag: &str,
        attrs: &[Attribute],
        builder: &mut BlockTextBuilder,
    ) {
        match self.tag_to_handler.get(tag) {
            Some(registration) => self.handlers[registration.handler_idx].handle(
                self,
                Element { node, tag, attrs },
                builder,
                &registration.options,
            ),
            // Default behavior: walk children inline
            None => self.walk_children(node, builder),
        }
    }
}

/// Gives handlers access to the tree walker.
///
/// Children are never pre-rendered: a handler that wants its children's
/// text must walk them itself, at the point in its output where they belong.
pub trait Handlers {
    /// Walk all children of `node` into `builder`.
    fn walk_children(&self, node: &Rc<Node>, builder: &mut BlockTextBuilder);

    /// Walk a list of sibling nodes into `builder`.
    fn walk(&self, nodes: &[Rc<Node>], builder: &mut BlockTextBuilder);

    /// Render the children of `node` in isolation, without word wrap.
    fn render_children(&self, node: &Rc<Node>) -> String;
}

impl Handlers for ElementHandlers {
    fn walk_children(&self, node: &Rc<Node>, builder: &mut BlockTextBuilder) {
        dom_walker::walk_children(node, self, builder);
    }

    fn walk(&self, nodes: &[Rc<Node>], builder: &mut BlockTextBuilder) {
        for node in nodes {
            dom_walker::walk_node(node, self, builder);
        }
    }

    fn render_children(&self, node: &Rc<Node>) -> String {
        let mut builder = BlockTextBuilder::new(None);
        self.walk_children(node, &mut builder);
        builder.finish()
    }
}
