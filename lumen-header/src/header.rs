//! The license header text, its rendered form, and the marker that detects
//! an already-inserted header.

use std::sync::LazyLock;

use regex::Regex;

use crate::style::CommentStyle;

/// Header text with `YYYY` standing in for the insertion year.
const LICENSE_TEXT: &str = "Copyright YYYY The Lumen Project Developers

Use of this source code is governed by the MIT license that can be
found in the LICENSE file.";

/// Matches the copyright line of an inserted header, whatever year it was
/// inserted in.
static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Copyright \d{4} The Lumen Project Developers").expect("marker regex is valid")
});

/// True when `source` already carries a license header.
pub fn has_marker(source: &str) -> bool {
    MARKER.is_match(source)
}

/// Renders the header as comment lines in `style`, dated `year`. The
/// rendered block has no trailing newline.
pub fn render_header(style: CommentStyle, year: i32) -> String {
    let text = LICENSE_TEXT.replace("YYYY", &year.to_string());
    let lines: Vec<String> = text.lines().map(|line| style.comment_line(line)).collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_double_slash_header() {
        assert_eq!(
            render_header(CommentStyle::DoubleSlash, 2024),
            "// Copyright 2024 The Lumen Project Developers\n\
             //\n\
             // Use of this source code is governed by the MIT license that can be\n\
             // found in the LICENSE file."
        );
    }

    #[test]
    fn renders_hash_header() {
        assert_eq!(
            render_header(CommentStyle::Hash, 2024),
            "# Copyright 2024 The Lumen Project Developers\n\
             #\n\
             # Use of this source code is governed by the MIT license that can be\n\
             # found in the LICENSE file."
        );
    }

    #[test]
    fn marker_matches_any_year() {
        for style in [CommentStyle::DoubleSlash, CommentStyle::Hash] {
            assert!(has_marker(&render_header(style, 2019)));
            assert!(has_marker(&render_header(style, 2026)));
        }
    }

    #[test]
    fn marker_requires_a_four_digit_year() {
        assert!(!has_marker("Copyright The Lumen Project Developers"));
        assert!(!has_marker("Copyright 19 The Lumen Project Developers"));
        assert!(!has_marker("fn main() {}"));
    }

    #[test]
    fn marker_matches_anywhere_in_the_source() {
        let source = "#!/usr/bin/env python3\n# Copyright 2023 The Lumen Project Developers\n";
        assert!(has_marker(source));
    }
}
