//! Test utilities shared by the readme2txt integration tests

use readme2txt::ConvertOptions;

/// Base URL used by the default configuration
#[allow(dead_code)]
pub const BASE: &str = "https://github.com/codeflorist/dunedynasty/blob/master";

/// Convert Markdown with the default options
#[allow(dead_code)]
pub fn to_text(markdown: &str) -> String {
    readme2txt::convert_markdown(markdown, &ConvertOptions::default())
        .expect("conversion should not fail")
}

/// A README exercising every custom formatter
#[allow(dead_code)]
pub fn sample_readme() -> &'static str {
    r#"# Dune Dynasty

Dune Dynasty is a continuation of the classic real-time strategy game Dune II.

## Installation

Download a release from the [releases page](/dist/releases) or build it:

```sh
cmake .
make
```

### Features

- Play at higher resolutions
- Visit [the wiki](https://example.org/wiki)

See [Credits](#credits) and [LICENSE](/LICENSE.txt).

![Screenshot](/images/screenshot.png)

Contact: <dune@example.com>
"#
}
