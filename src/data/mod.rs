//! Template input data.
//!
//! Two kinds of files feed a render:
//!
//! | File                        | Format | Exposed as                    |
//! |-----------------------------|--------|-------------------------------|
//! | `<root>/<name>[.<lang>].yml` | YAML   | top-level template variables  |
//! | `<strings>/<lang>/**/*.json` | JSON   | `__.<file stem>`              |

mod error;
pub mod strings;

pub use error::DataError;
pub use strings::load_strings;

use minijinja::Value;
use std::{collections::BTreeMap, fs, path::Path};

/// Top-level template variables of one page.
pub type PageData = BTreeMap<String, Value>;

/// Load a page data file.
///
/// An empty document yields no variables. Merge keys (`<<`) are resolved. Anything other than a mapping at the
/// top level is rejected, as are syntax errors.
pub fn load_page_data(path: &Path) -> Result<PageData, DataError> {
    let content = fs::read_to_string(path).map_err(|err| DataError::Io(path.to_path_buf(), err))?;
    if content.trim().is_empty() {
        return Ok(PageData::new());
    }

    let mut value: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|err| DataError::Yaml(path.to_path_buf(), err))?;
    // Resolve `<<: *anchor` merge keys into their mappings
    value
        .apply_merge()
        .map_err(|err| DataError::Yaml(path.to_path_buf(), err))?;

    match value {
        serde_yaml::Value::Null => Ok(PageData::new()),
        value @ serde_yaml::Value::Mapping(_) => {
            let fields: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_value(value)
                .map_err(|err| DataError::Yaml(path.to_path_buf(), err))?;
            Ok(fields
                .into_iter()
                .map(|(key, value)| (key, Value::from_serialize(&value)))
                .collect())
        }
        _ => Err(DataError::NotAMapping(path.to_path_buf())),
    }
}
