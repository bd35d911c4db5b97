//! End-to-end conversion of Markdown into the README text format

mod common;

use common::{BASE, sample_readme, to_text};
use readme2txt::ConvertOptions;

#[test]
fn test_sample_readme() {
    let expected = format!(
        "============\n\
         Dune Dynasty\n\
         ============\n\
         \n\
         Dune Dynasty is a continuation of the classic real-time strategy game Dune II.\n\
         \n\
         Installation\n\
         ============\n\
         \n\
         Download a release from the releases page or build it:\n\
         \n\
         cmake .\n\
         make\n\
         Features\n\
         --------\n\
         \n\
         \x20* Play at higher resolutions\n\
         \x20* Visit the wiki [https://example.org/wiki]\n\
         \n\
         See Credits [see below] and LICENSE\n\
         [{BASE}/LICENSE.txt].\n\
         \n\
         {BASE}/images/screenshot.png\n\
         \n\
         Contact: dune@example.com"
    );

    assert_eq!(to_text(sample_readme()), expected);
}

#[test]
fn test_heading_rules_match_title_length() {
    let text = to_text("## Building from source\n");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Building from source", "===================="]);
}

#[test]
fn test_level_one_framed_other_levels_underlined() {
    let h1 = to_text("# Title\n");
    assert_eq!(h1, "=====\nTitle\n=====");

    for level in 2..=6 {
        let markdown = format!("{} Title\n", "#".repeat(level));
        let text = to_text(&markdown);
        let rule = if level == 2 { "=====" } else { "-----" };
        assert_eq!(text, format!("Title\n{rule}"), "level {level}");
    }
}

#[test]
fn test_heading_starting_with_code_uses_default_rule() {
    let text = to_text("### `cmake` options\n");
    assert_eq!(text, "cmake options\n----------");
}

#[test]
fn test_link_rules() {
    assert_eq!(to_text("<a@b.com>\n"), "a@b.com");
    assert_eq!(to_text("[a@b.com](mailto:a@b.com)\n"), "a@b.com");
    assert_eq!(to_text("[Get it](/dist/foo)\n"), "Get it");
    assert_eq!(
        to_text("[Docs](/docs/x)\n"),
        format!("Docs [{BASE}/docs/x]")
    );
    assert_eq!(to_text("[Section](#section)\n"), "Section [see below]");
    assert_eq!(
        to_text("[Rust](https://www.rust-lang.org)\n"),
        "Rust [https://www.rust-lang.org]"
    );
    assert_eq!(
        to_text("<https://www.rust-lang.org>\n"),
        "https://www.rust-lang.org"
    );
}

#[test]
fn test_link_wrapping_markup() {
    assert_eq!(
        to_text("[**Download**](https://example.org/dl)\n"),
        "Download [https://example.org/dl]"
    );
}

#[test]
fn test_dist_link_wrapping_image_is_dropped() {
    assert_eq!(to_text("[![dl](/img/dl.png)](/dist/game.zip)\n"), "");
    assert_eq!(
        to_text("Get [![dl](/img/dl.png)](/dist/game.zip) here.\n"),
        "Get here."
    );
}

#[test]
fn test_ordered_list_start_does_not_overflow() {
    let markdown = "<ol start=\"9223372036854775807\"><li>a</li><li>b</li></ol>\n";
    assert_eq!(
        to_text(markdown),
        " 9223372036854775807. a\n 9223372036854775807. b"
    );
}

#[test]
fn test_wide_characters_wrap_by_display_width() {
    let sentence = vec!["漢字漢字漢字"; 20].join(" ");
    let text = to_text(&sentence);
    assert!(text.lines().count() > 1);
    for line in text.lines() {
        assert!(
            textwrap::core::display_width(line) <= 80,
            "line too wide: {line:?}"
        );
    }
}

#[test]
fn test_image_rules() {
    assert_eq!(
        to_text("![shot](/img/a.png)\n"),
        format!("{BASE}/img/a.png")
    );
    assert_eq!(
        to_text("![shot](https://ext/img.png)\n"),
        "https://ext/img.png"
    );
}

#[test]
fn test_linked_badge_image() {
    assert_eq!(
        to_text("[![build](/badge.svg)](https://ci.example.org)\n"),
        format!("{BASE}/badge.svg [https://ci.example.org]")
    );
}

#[test]
fn test_code_block_is_not_wrapped() {
    let long_line = "x".repeat(30) + " " + &"y".repeat(30) + " " + &"z".repeat(30);
    let markdown = format!("```\n{long_line}\n    indented\n```\n");
    assert_eq!(to_text(&markdown), format!("{long_line}\n    indented"));
}

#[test]
fn test_wordwrap_can_be_disabled() {
    let sentence = "word ".repeat(30);
    let options = ConvertOptions {
        wordwrap: None,
        ..ConvertOptions::default()
    };
    let text = readme2txt::convert_markdown(&sentence, &options).unwrap();
    assert_eq!(text, sentence.trim_end());
    assert!(!text.contains('\n'));
}

#[test]
fn test_lists_and_tables_use_default_formatting() {
    let markdown = "1. first\n2. second\n\n| Key | Action |\n|-----|--------|\n| F1 | Help |\n";
    assert_eq!(
        to_text(markdown),
        " 1. first\n 2. second\n\nKEY   ACTION\nF1    Help"
    );
}

#[test]
fn test_conversion_is_idempotent() {
    let first = to_text(sample_readme());
    let second = to_text(sample_readme());
    assert_eq!(first.as_bytes(), second.as_bytes());
}
