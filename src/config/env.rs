//! Environment values exposed to templates as the `env` global.
//!
//! Sources are merged once at startup, later sources winning on key collision:
//!
//! ```text
//! buildstamp  <  .env file  <  process environment
//! ```
//!
//! The `.env` file is parsed without touching the process environment, so the
//! merge stays a pure function of its three inputs.

use super::defaults::BUILDSTAMP_FORMAT;
use super::error::ConfigError;
use chrono::Utc;
use std::{collections::BTreeMap, path::Path};

/// Key of the build date entry.
pub const BUILDSTAMP_KEY: &str = "buildstamp";

/// Merged `KEY => VALUE` pairs, sorted by key.
pub type EnvData = BTreeMap<String, String>;

/// Load environment values from `env_file` and the process environment.
///
/// A missing `env_file` is not an error.
pub fn load_env_data(env_file: &Path) -> Result<EnvData, ConfigError> {
    let buildstamp = Utc::now().format(BUILDSTAMP_FORMAT).to_string();
    let file_vars = read_env_file(env_file)?;
    // Non UTF-8 variables cannot be exposed to templates
    let process_vars = std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));

    Ok(merge_env_data(buildstamp, file_vars, process_vars))
}

/// Merge the buildstamp, `.env` pairs and process pairs in increasing precedence.
pub fn merge_env_data(
    buildstamp: String,
    file_vars: impl IntoIterator<Item = (String, String)>,
    process_vars: impl IntoIterator<Item = (String, String)>,
) -> EnvData {
    let mut data = EnvData::new();
    data.insert(BUILDSTAMP_KEY.to_owned(), buildstamp);
    data.extend(file_vars);
    data.extend(process_vars);
    data
}

fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    if !path.is_file() {
        return Ok(Vec::new());
    }

    dotenv::from_path_iter(path)
        .and_then(|iter| iter.collect::<Result<Vec<_>, _>>())
        .map_err(|err| ConfigError::EnvFile(path.to_path_buf(), err))
}
