use std::rc::Rc;
use std::rc::Weak;

use markup5ever_rcdom::{Node, NodeData};

/// RAII guard that puts a node's parent reference back when dropped.
///
/// `Node::parent` is a `Cell`, so reading it means taking the value out;
/// the guard restores it on every exit path, including unwinding.
struct ParentGuard<'a> {
    node: &'a Rc<Node>,
    value: Option<Option<Weak<Node>>>,
}

impl Drop for ParentGuard<'_> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.node.parent.set(value);
        }
    }
}

impl<'a> ParentGuard<'a> {
    fn new(node: &'a Rc<Node>) -> Self {
        let value = node.parent.take();
        Self {
            node,
            value: Some(value),
        }
    }

    fn upgrade(&self) -> Option<Rc<Node>> {
        self.value.as_ref()?.as_ref()?.upgrade()
    }
}

pub(crate) fn get_node_tag_name(node: &Rc<Node>) -> Option<&str> {
    match &node.data {
        NodeData::Document => Some("html"),
        NodeData::Element { name, .. } => Some(&name.local),
        _ => None,
    }
}

pub(crate) fn get_parent_node(node: &Rc<Node>) -> Option<Rc<Node>> {
    ParentGuard::new(node).upgrade()
}

// Check to see if node's parent's tag name matches one of the provided names.
pub(crate) fn parent_tag_name_equals(node: &Rc<Node>, tag_names: &[&str]) -> bool {
    get_parent_node(node)
        .as_ref()
        .and_then(|parent| get_node_tag_name(parent).map(|tag| tag_names.contains(&tag)))
        .unwrap_or(false)
}

/// Raw text of a text node, `None` for anything else.
///
/// Returns the contents exactly as parsed (entities decoded, whitespace kept).
pub(crate) fn text_node_contents(node: &Rc<Node>) -> Option<String> {
    match &node.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

pub(crate) fn is_element(node: &Rc<Node>) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

/// Element children carrying the given tag, in document order
pub(crate) fn child_elements_named(node: &Rc<Node>, tag_names: &[&str]) -> Vec<Rc<Node>> {
    node.children
        .borrow()
        .iter()
        .filter(|child| get_node_tag_name(child).is_some_and(|tag| tag_names.contains(&tag)))
        .cloned()
        .collect()
}
