//! README formatters plugged into the HTML-to-text driver
//!
//! Overrides the built-in handlers for headings, code blocks, links and
//! images. Every other element keeps the driver's default behaviour.

pub mod headings;
pub mod img;
pub mod link;
pub mod url_rewrite;

use crate::config::ConvertOptions;
use crate::text_converter::html_text::element_handler::pre_handler;
use crate::text_converter::html_text::{FormatOptions, HtmlToText};

use headings::{HeadingFormatter, HeadingStyle};
use img::ImageFormatter;
use link::LinkFormatter;

/// Which formatter a selector maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Heading(HeadingStyle),
    Preformatted,
    Link,
    Image,
}

/// One row of the selector table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    pub tag: &'static str,
    pub format: Format,
    pub options: FormatOptions,
}

const HEADING_OPTIONS: FormatOptions = FormatOptions::new(1, 2);

/// The README selector table
pub const README_SELECTORS: &[Selector] = &[
    Selector {
        tag: "h1",
        format: Format::Heading(HeadingStyle::Framed),
        options: HEADING_OPTIONS,
    },
    Selector {
        tag: "h2",
        format: Format::Heading(HeadingStyle::DoubleUnderline),
        options: HEADING_OPTIONS,
    },
    Selector {
        tag: "h3",
        format: Format::Heading(HeadingStyle::SingleUnderline),
        options: HEADING_OPTIONS,
    },
    Selector {
        tag: "h4",
        format: Format::Heading(HeadingStyle::SingleUnderline),
        options: HEADING_OPTIONS,
    },
    Selector {
        tag: "h5",
        format: Format::Heading(HeadingStyle::SingleUnderline),
        options: HEADING_OPTIONS,
    },
    Selector {
        tag: "h6",
        format: Format::Heading(HeadingStyle::SingleUnderline),
        options: HEADING_OPTIONS,
    },
    Selector {
        tag: "pre",
        format: Format::Preformatted,
        options: FormatOptions::new(1, 0),
    },
    // Links and images are inline; their options are carried but unused
    Selector {
        tag: "a",
        format: Format::Link,
        options: FormatOptions::new(1, 2),
    },
    Selector {
        tag: "img",
        format: Format::Image,
        options: FormatOptions::new(1, 2),
    },
];

/// Build a converter from a selector table
#[must_use]
pub fn create_converter_with(selectors: &[Selector], options: &ConvertOptions) -> HtmlToText {
    let builder = HtmlToText::builder().wordwrap(options.wordwrap);

    selectors
        .iter()
        .fold(builder, |builder, selector| {
            let tags = [selector.tag];
            match selector.format {
                Format::Heading(style) => {
                    builder.add_handler(&tags, HeadingFormatter::new(style), selector.options)
                }
                Format::Preformatted => builder.add_handler(&tags, pre_handler, selector.options),
                Format::Link => builder.add_handler(
                    &tags,
                    LinkFormatter::new(options.base_url.as_str()),
                    selector.options,
                ),
                Format::Image => builder.add_handler(
                    &tags,
                    ImageFormatter::new(options.base_url.as_str()),
                    selector.options,
                ),
            }
        })
        .build()
}

/// Converter with the README formatters installed
#[must_use]
pub fn create_converter(options: &ConvertOptions) -> HtmlToText {
    create_converter_with(README_SELECTORS, options)
}
