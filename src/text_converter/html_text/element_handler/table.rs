use std::rc::Rc;

use markup5ever_rcdom::Node;
use textwrap::core::display_width;

use super::super::Element;
use super::super::block_builder::BlockTextBuilder;
use super::super::node_util::{child_elements_named, get_node_tag_name};
use super::super::options::FormatOptions;
use super::Handlers;
use crate::utils::TABLE_COLUMN_SPACING;

/// Rows as left-aligned columns; header cells upper-cased.
pub(super) fn table_handler(
    handlers: &dyn Handlers,
    element: Element,
    builder: &mut BlockTextBuilder,
    options: &FormatOptions,
) {
    let rows: Vec<Vec<String>> = collect_rows(element.node)
        .iter()
        .map(|row| render_row(handlers, row))
        .filter(|cells| !cells.is_empty())
        .collect();

    let lines = layout_columns(&rows);
    builder.add_literal_block(
        &lines,
        options.leading_line_breaks,
        options.trailing_line_breaks,
    );
}

fn collect_rows(table: &Rc<Node>) -> Vec<Rc<Node>> {
    let mut rows = Vec::new();
    for child in table.children.borrow().iter() {
        match get_node_tag_name(child) {
            Some("tr") => rows.push(Rc::clone(child)),
            Some("thead" | "tbody" | "tfoot") => {
                rows.extend(child_elements_named(child, &["tr"]));
            }
            _ => {}
        }
    }
    rows
}

fn render_row(handlers: &dyn Handlers, row: &Rc<Node>) -> Vec<String> {
    child_elements_named(row, &["td", "th"])
        .iter()
        .map(|cell| {
            let text = handlers
                .render_children(cell)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            if get_node_tag_name(cell) == Some("th") {
                text.to_uppercase()
            } else {
                text
            }
        })
        .collect()
}

fn layout_columns(rows: &[Vec<String>]) -> Vec<String> {
    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; column_count];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let spacing = " ".repeat(TABLE_COLUMN_SPACING);
    rows.iter()
        .map(|row| {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    line.push_str(&spacing);
                }
                line.push_str(cell);
                let pad = widths[i] - display_width(cell);
                line.extend(std::iter::repeat_n(' ', pad));
            }
            line.trim_end().to_string()
        })
        .collect()
}
