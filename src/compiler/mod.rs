//! Template discovery and page rendering.
//!
//! - **meta**: `Page` and its derived paths
//! - **env**: per-language template environment
//! - **pages**: page enumeration, rendering and writing
//!
//! # Build Flow
//!
//! ```text
//! collect_templates() ──► collect_pages() ──► build_env() ──► render_page() ──► write_page()
//!        │                      │                  │                │
//!        ▼                      ▼                  ▼                ▼
//!   *.html.tmpl          Page per (tmpl, lang)  Environment      page text
//! ```

pub mod env;
mod error;
pub mod meta;
pub mod pages;

use regex::Regex;
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};
use walkdir::WalkDir;

pub use env::build_env;
pub use error::RenderError;
pub use meta::Page;
pub use pages::{collect_pages, write_page};

/// Extension of template files.
pub const TEMPLATE_EXT: &str = "tmpl";

/// File names with at least two extensions, the last one being `.tmpl`.
static TEMPLATE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"\..*\.{TEMPLATE_EXT}$")).unwrap());

/// Check whether a file name follows the `<name>.<ext>.tmpl` convention.
pub fn is_template_name(file_name: &str) -> bool {
    TEMPLATE_NAME.is_match(file_name)
}

/// Collect template paths below `root`, relative to `root`.
///
/// Directories are walked depth-first with entries sorted by file name, which
/// is also the order pages are rendered in. Unreadable entries are skipped.
pub fn collect_templates(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .filter(|e| e.file_name().to_str().is_some_and(is_template_name))
        .filter_map(move |e| e.path().strip_prefix(root).ok().map(Path::to_path_buf))
}
