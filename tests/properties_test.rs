//! Property tests for headings, code blocks and word wrap

mod common;

use common::to_text;
use proptest::prelude::*;

fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,10}( [A-Za-z0-9]{1,10}){0,3}"
}

proptest! {
    #[test]
    fn heading_rule_matches_title(title in title_strategy(), level in 2usize..=6) {
        let markdown = format!("{} {title}\n", "#".repeat(level));
        let rule_char = if level == 2 { "=" } else { "-" };
        let expected = format!("{title}\n{}", rule_char.repeat(title.chars().count()));
        prop_assert_eq!(to_text(&markdown), expected);
    }

    #[test]
    fn level_one_heading_is_framed(title in title_strategy()) {
        let rule = "=".repeat(title.chars().count());
        prop_assert_eq!(
            to_text(&format!("# {title}\n")),
            format!("{rule}\n{title}\n{rule}")
        );
    }

    #[test]
    fn code_block_content_is_verbatim(
        lines in prop::collection::vec("[a-zA-Z0-9 {}();=<>&\"']{0,30}", 1..6)
    ) {
        let code = lines.join("\n");
        let markdown = format!("```\n{code}\n```\n");
        prop_assert_eq!(to_text(&markdown), code);
    }

    #[test]
    fn wrapped_lines_fit_and_keep_words(
        words in prop::collection::vec("[a-z]{1,12}", 1..60)
    ) {
        let text = to_text(&words.join(" "));
        for line in text.lines() {
            prop_assert!(line.chars().count() <= 80, "line too long: {:?}", line);
        }
        let rewrapped: Vec<&str> = text.split_whitespace().collect();
        prop_assert_eq!(rewrapped, words.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn output_has_no_edge_newlines(
        words in prop::collection::vec("[a-z]{1,8}", 1..10),
        title in title_strategy()
    ) {
        let markdown = format!("## {title}\n\n{}\n", words.join(" "));
        let text = to_text(&markdown);
        prop_assert!(!text.starts_with('\n'));
        prop_assert!(!text.ends_with('\n'));
    }
}
