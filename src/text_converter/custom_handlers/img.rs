use crate::text_converter::html_text::{
    BlockTextBuilder, Element, ElementHandler, FormatOptions, Handlers,
};

use super::url_rewrite::resolve_src;

/// Images become their (resolved) source URL; alt text is ignored.
pub struct ImageFormatter {
    base_url: String,
}

impl ImageFormatter {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl ElementHandler for ImageFormatter {
    fn handle(
        &self,
        _handlers: &dyn Handlers,
        element: Element,
        builder: &mut BlockTextBuilder,
        _options: &FormatOptions,
    ) {
        let Some(src) = element.attr("src") else {
            log::debug!("Skipping <img> without src");
            return;
        };
        builder.add_inline(&resolve_src(src, &self.base_url));
    }
}
