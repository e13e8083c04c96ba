//! Translated string bundles.
//!
//! Every `*.json` file below `<strings>/<lang>/` becomes one entry of the
//! language's bundle, keyed by file stem:
//!
//! ```text
//! lang/fr/nav.json          ──►  __.nav
//! lang/fr/blog/footer.json  ──►  __.footer
//! ```
//!
//! Subdirectories do not namespace keys. When two files share a stem, the one
//! visited last (name-sorted, depth-first) wins.

use super::DataError;
use std::{collections::BTreeMap, fs, path::Path};
use walkdir::WalkDir;

/// Extension of string files.
const STRINGS_EXT: &str = "json";

/// Translation table of one language.
pub type StringBundle = BTreeMap<String, serde_json::Value>;

/// Load the string bundle for `lang`.
///
/// The default language (empty code) has no bundle, and neither does a
/// language without a directory under `strings_root`.
pub fn load_strings(strings_root: &Path, lang: &str) -> Result<StringBundle, DataError> {
    let mut bundle = StringBundle::new();
    if lang.is_empty() {
        return Ok(bundle);
    }

    let lang_dir = strings_root.join(lang);
    let files = WalkDir::new(&lang_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == STRINGS_EXT));

    for entry in files {
        let path = entry.path();
        let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let content =
            fs::read_to_string(path).map_err(|err| DataError::Io(path.to_path_buf(), err))?;
        let value =
            serde_json::from_str(&content).map_err(|err| DataError::Json(path.to_path_buf(), err))?;
        bundle.insert(key.to_owned(), value);
    }

    Ok(bundle)
}
