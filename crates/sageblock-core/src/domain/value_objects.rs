//! Domain value objects: the closed set of block file kinds.
//!
//! # Design
//!
//! [`TemplateKey`] is a pure value type (`Copy`, equality-by-value, no
//! identity). Every key owns exactly three strings: its configuration key,
//! the name of its default stub, and the name of the file it produces. The
//! generator walks [`TemplateKey::ALL`] so output order is stable across runs.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant and append it to `ALL`
//! 2. Add the `as_str`, `file_name` and `stub_name` arms here
//! 3. Ship a `<file_name>.stub` in the `stubs/` directory

use serde::{Deserialize, Serialize};
use std::fmt;

// ── TemplateKey ──────────────────────────────────────────────────────────────

/// One of the seven files that make up an editor block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKey {
    BlockJson,
    IndexJs,
    EditorJsx,
    SaveJsx,
    EditorCss,
    StyleCss,
    ViewJs,
}

impl TemplateKey {
    /// Every key, in generation order.
    pub const ALL: [TemplateKey; 7] = [
        Self::BlockJson,
        Self::IndexJs,
        Self::EditorJsx,
        Self::SaveJsx,
        Self::EditorCss,
        Self::StyleCss,
        Self::ViewJs,
    ];

    /// Configuration key, as written in the `[templates]` table.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BlockJson => "block_json",
            Self::IndexJs => "index_js",
            Self::EditorJsx => "editor_jsx",
            Self::SaveJsx => "save_jsx",
            Self::EditorCss => "editor_css",
            Self::StyleCss => "style_css",
            Self::ViewJs => "view_js",
        }
    }

    /// Conventional output file name inside the block directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::BlockJson => "block.json",
            Self::IndexJs => "index.js",
            Self::EditorJsx => "editor.jsx",
            Self::SaveJsx => "save.jsx",
            Self::EditorCss => "editor.css",
            Self::StyleCss => "style.css",
            Self::ViewJs => "view.js",
        }
    }

    /// File name of the package default stub for this key.
    pub const fn stub_name(&self) -> &'static str {
        match self {
            Self::BlockJson => "block.json.stub",
            Self::IndexJs => "index.js.stub",
            Self::EditorJsx => "editor.jsx.stub",
            Self::SaveJsx => "save.jsx.stub",
            Self::EditorCss => "editor.css.stub",
            Self::StyleCss => "style.css.stub",
            Self::ViewJs => "view.js.stub",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_contains_seven_distinct_keys() {
        let unique: HashSet<_> = TemplateKey::ALL.iter().collect();
        assert_eq!(unique.len(), 7);
    }

    #[test]
    fn file_names_are_distinct() {
        let names: HashSet<_> = TemplateKey::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn stub_name_is_file_name_plus_suffix() {
        for key in TemplateKey::ALL {
            assert_eq!(key.stub_name(), format!("{}.stub", key.file_name()));
        }
    }
}
