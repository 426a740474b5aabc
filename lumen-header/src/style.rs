//! Comment styles and the extension table that selects them.

use std::ffi::OsStr;
use std::path::Path;

/// Per-line comment syntax of a recognized source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `//` comments, used by Rust sources.
    DoubleSlash,
    /// `#` comments, used by Python sources.
    Hash,
}

impl CommentStyle {
    /// Renders one line of text as a comment. Empty lines become the bare
    /// comment token with no trailing space.
    pub fn comment_line(&self, line: &str) -> String {
        let token = match self {
            CommentStyle::DoubleSlash => "//",
            CommentStyle::Hash => "#",
        };
        if line.is_empty() {
            token.to_string()
        } else {
            format!("{token} {line}")
        }
    }
}

/// Comment style for `path`, decided by its extension.
pub fn style_for(path: &Path) -> Option<CommentStyle> {
    match path.extension().and_then(OsStr::to_str) {
        Some("rs") => Some(CommentStyle::DoubleSlash),
        Some("py") => Some(CommentStyle::Hash),
        _ => None,
    }
}
