use std::rc::Rc;

use markup5ever_rcdom::{Node, NodeData};

use super::block_builder::BlockTextBuilder;
use super::element_handler::ElementHandlers;

pub(crate) fn walk_node(node: &Rc<Node>, handlers: &ElementHandlers, builder: &mut BlockTextBuilder) {
    match node.data {
        NodeData::Document => walk_children(node, handlers, builder),

        NodeData::Text { ref contents } => {
            // Whitespace handling (collapse vs verbatim) is the builder's call
            builder.add_inline(&contents.borrow());
        }

        NodeData::Element {
            ref name,
            ref attrs,
            ..
        } => {
            let tag = &*name.local;
            handlers.handle(node, tag, &attrs.borrow(), builder);
        }

        NodeData::Comment { .. }
        | NodeData::Doctype { .. }
        | NodeData::ProcessingInstruction { .. } => {}
    }
}

pub(crate) fn walk_children(
    node: &Rc<Node>,
    handlers: &ElementHandlers,
    builder: &mut BlockTextBuilder,
) {
    for child in node.children.borrow().iter() {
        walk_node(child, handlers, builder);
    }
}
