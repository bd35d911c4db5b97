/// Line-break options attached to a selector registration.
///
/// Handlers receive the options of the selector that matched them and are
/// expected to use these instead of hard-coding separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub leading_line_breaks: usize,
    pub trailing_line_breaks: usize,
}

impl FormatOptions {
    #[must_use]
    pub const fn new(leading_line_breaks: usize, trailing_line_breaks: usize) -> Self {
        Self {
            leading_line_breaks,
            trailing_line_breaks,
        }
    }

    /// Options for elements that never open a block
    #[must_use]
    pub const fn inline() -> Self {
        Self::new(0, 0)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new(1, 1)
    }
}
