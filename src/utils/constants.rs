//! Shared configuration constants for readme2txt
//!
//! Default values used by the configuration builder and the CLI so the
//! binary run without arguments behaves the same as the library defaults.

/// Source document read when no input path is given
pub const DEFAULT_INPUT_PATH: &str = "README.md";

/// Plain-text document written when no output path is given
pub const DEFAULT_OUTPUT_PATH: &str = "README.txt";

/// Repository blob URL prefixed to site-relative link and image paths
pub const DEFAULT_BASE_URL: &str = "https://github.com/codeflorist/dunedynasty/blob/master";

/// Column at which non-preformatted text is wrapped
pub const DEFAULT_WORDWRAP: usize = 80;

/// Narrowest wrap width handed to nested blocks once prefixes are subtracted
pub const MIN_WRAP_WIDTH: usize = 20;

/// Heading rule length used when the first child of a heading carries no text
pub const DEFAULT_RULE_LENGTH: usize = 10;

/// Length of the dashed line emitted for `<hr>`
pub const HORIZONTAL_RULE_LENGTH: usize = 40;

/// Spaces between table columns
pub const TABLE_COLUMN_SPACING: usize = 3;
