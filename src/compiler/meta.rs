//! Page identity and path derivation.
//!
//! A [`Page`] is one `(template, language)` pair. Everything else about it is
//! derived from the three stored fields on every call:
//!
//! | Template               | Lang | `name`       | `data_path`                  | `output_path`           |
//! |------------------------|------|--------------|------------------------------|-------------------------|
//! | `about.html.tmpl`      | `""` | `about`      | `<root>/about.yml`           | `about.html`            |
//! | `about.html.tmpl`      | `fr` | `about`      | `<root>/about.fr.yml`        | `fr/about.html`         |
//! | `blog/post.html.tmpl`  | `de` | `blog/post`  | `<root>/blog/post.de.yml`    | `de/blog/post.html`     |

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// Extension of page data files.
pub const DATA_EXT: &str = "yml";

/// One unit of rendering work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Template root directory.
    pub root: PathBuf,
    /// Template path relative to `root`.
    pub file: PathBuf,
    /// Language code, empty for the default variant.
    pub lang: String,
}

impl Page {
    pub fn new(root: impl Into<PathBuf>, file: impl Into<PathBuf>, lang: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            file: file.into(),
            lang: lang.into(),
        }
    }

    /// Template path with both trailing extensions stripped.
    pub fn name(&self) -> PathBuf {
        self.file.with_extension("").with_extension("")
    }

    /// `name` with `/` separators, as exposed to templates.
    pub fn name_str(&self) -> String {
        to_slash(&self.name())
    }

    /// Data file feeding this page.
    pub fn data_path(&self) -> PathBuf {
        let mut file_name = OsString::from(self.name());
        if !self.lang.is_empty() {
            file_name.push(".");
            file_name.push(&self.lang);
        }
        file_name.push(".");
        file_name.push(DATA_EXT);
        self.root.join(file_name)
    }

    /// Output path relative to the output directory.
    ///
    /// The default language renders at the output root.
    pub fn output_path(&self) -> PathBuf {
        Path::new(&self.lang).join(self.file.with_extension(""))
    }

    /// Name used to look the template up in the render environment.
    pub fn template_name(&self) -> String {
        to_slash(&self.file)
    }
}

/// Render a relative path with `/` separators on every platform.
fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
