//! Append-only accumulator of text blocks, inline text and line breaks.
//!
//! Handlers never write strings directly; they open a block, add inline
//! content (or walk children, which adds it for them) and close the block.
//! Separation between two adjacent blocks is the larger of the previous
//! block's trailing breaks and the next block's leading breaks. Breaks owed
//! at the very start or very end of the output are dropped.

use crate::utils::MIN_WRAP_WIDTH;

use super::text_util::{push_collapsed, wrap_line};

/// Per-line prefix applied when a block closes (list bullets, quote marks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePrefix {
    first: String,
    rest: String,
}

impl LinePrefix {
    /// Same prefix on every line (`"> "` for quotes)
    pub fn uniform(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            rest: prefix.clone(),
            first: prefix,
        }
    }

    /// `first` on the opening line, spaces of equal width on the rest
    pub fn hanging(first: impl Into<String>) -> Self {
        let first = first.into();
        Self {
            rest: " ".repeat(first.chars().count()),
            first,
        }
    }

    fn width(&self) -> usize {
        self.first.chars().count().max(self.rest.chars().count())
    }

    fn apply(&self, content: &str) -> String {
        let mut out = String::with_capacity(content.len() + 8);
        for (i, line) in content.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let prefix = if i == 0 { &self.first } else { &self.rest };
            if line.is_empty() {
                out.push_str(prefix.trim_end());
            } else {
                out.push_str(prefix);
                out.push_str(line);
            }
        }
        out
    }
}

/// Options for opening a block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockOptions {
    pub leading_line_breaks: usize,
    /// Keep whitespace verbatim and skip word wrap
    pub is_pre: bool,
    pub prefix: Option<LinePrefix>,
}

impl BlockOptions {
    #[must_use]
    pub fn new(leading_line_breaks: usize) -> Self {
        Self {
            leading_line_breaks,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn pre(mut self) -> Self {
        self.is_pre = true;
        self
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: LinePrefix) -> Self {
        self.prefix = Some(prefix);
        self
    }
}

#[derive(Debug, Default)]
struct BlockFrame {
    leading_line_breaks: usize,
    is_pre: bool,
    prefix: Option<LinePrefix>,
    /// Finished lines, joined by '\n'
    content: String,
    /// Inline text not yet broken into lines
    inline: String,
    /// Line breaks owed before the next piece of content
    pending_line_breaks: usize,
}

impl BlockFrame {
    fn append(&mut self, text: &str, leading_line_breaks: usize) {
        if !self.content.is_empty() {
            let breaks = self.pending_line_breaks.max(leading_line_breaks).max(1);
            self.content.extend(std::iter::repeat_n('\n', breaks));
        }
        self.content.push_str(text);
        self.pending_line_breaks = 0;
    }

    fn flush_inline(&mut self, width: Option<usize>) {
        if self.is_pre {
            if !self.inline.is_empty() {
                let text = std::mem::take(&mut self.inline);
                self.append(&text, 0);
            }
            return;
        }

        if self.inline.trim().is_empty() {
            self.inline.clear();
            return;
        }

        let text = std::mem::take(&mut self.inline);
        let mut lines = Vec::new();
        for line in text.split('\n') {
            wrap_line(line, width, &mut lines);
        }
        self.append(&lines.join("\n"), 0);
    }
}

/// The output builder handed to every element handler
#[derive(Debug)]
pub struct BlockTextBuilder {
    root: BlockFrame,
    stack: Vec<BlockFrame>,
    wordwrap: Option<usize>,
}

impl BlockTextBuilder {
    #[must_use]
    pub fn new(wordwrap: Option<usize>) -> Self {
        Self {
            root: BlockFrame::default(),
            stack: Vec::new(),
            wordwrap,
        }
    }

    fn current(&mut self) -> &mut BlockFrame {
        self.stack.last_mut().unwrap_or(&mut self.root)
    }

    /// Whether inline text currently lands in a preformatted block
    #[must_use]
    pub fn is_pre(&self) -> bool {
        self.stack.last().is_some_and(|frame| frame.is_pre)
    }

    /// Width available to the innermost block after all prefixes
    fn wrap_width(&self) -> Option<usize> {
        let prefix_width: usize = self
            .stack
            .iter()
            .filter_map(|frame| frame.prefix.as_ref())
            .map(LinePrefix::width)
            .sum();
        self.wordwrap
            .map(|w| w.saturating_sub(prefix_width).max(MIN_WRAP_WIDTH.min(w)))
    }

    fn flush_current(&mut self) {
        let width = self.wrap_width();
        self.current().flush_inline(width);
    }

    pub fn open_block(&mut self, options: BlockOptions) {
        self.flush_current();
        let is_pre = options.is_pre || self.is_pre();
        self.stack.push(BlockFrame {
            leading_line_breaks: options.leading_line_breaks,
            is_pre,
            prefix: options.prefix,
            ..BlockFrame::default()
        });
    }

    pub fn add_inline(&mut self, text: &str) {
        let frame = self.current();
        if frame.is_pre {
            frame.inline.push_str(text);
        } else {
            push_collapsed(&mut frame.inline, text);
        }
    }

    pub fn add_line_break(&mut self) {
        if self.is_pre() {
            self.current().inline.push('\n');
            return;
        }

        let had_text = !self.current().inline.trim().is_empty();
        self.flush_current();
        let frame = self.current();
        if had_text {
            frame.pending_line_breaks = 1;
        } else {
            frame.pending_line_breaks += 1;
        }
    }

    pub fn close_block(&mut self, trailing_line_breaks: usize) {
        if self.stack.is_empty() {
            log::warn!("close_block called without an open block; ignoring");
            return;
        }

        if let Some(frame) = self.stack.last_mut()
            && frame.is_pre
            && frame.inline.ends_with('\n')
        {
            frame.inline.pop();
        }
        self.flush_current();

        let Some(BlockFrame {
            leading_line_breaks,
            prefix,
            content,
            ..
        }) = self.stack.pop()
        else {
            return;
        };

        // A prefixed block (list item) is kept even when empty so its marker shows
        let content = match prefix {
            Some(prefix) => prefix.apply(&content),
            None if content.is_empty() => return,
            None => content,
        };

        self.flush_current();
        let parent = self.current();
        parent.append(&content, leading_line_breaks);
        parent.pending_line_breaks = trailing_line_breaks;
    }

    /// Emit already-formatted lines as one block, bypassing wrap and collapse
    pub fn add_literal_block(
        &mut self,
        lines: &[String],
        leading_line_breaks: usize,
        trailing_line_breaks: usize,
    ) {
        if lines.is_empty() {
            return;
        }
        self.open_block(BlockOptions::new(leading_line_breaks).pre());
        self.add_inline(&lines.join("\n"));
        self.close_block(trailing_line_breaks);
    }

    /// Close any blocks left open and return the accumulated text
    #[must_use]
    pub fn finish(mut self) -> String {
        if !self.stack.is_empty() {
            log::debug!("finishing with {} unclosed block(s)", self.stack.len());
        }
        while !self.stack.is_empty() {
            self.close_block(0);
        }
        self.flush_current();
        self.root.content
    }
}
