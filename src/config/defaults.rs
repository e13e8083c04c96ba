//! Default values for configuration fields.

use std::path::PathBuf;

/// Default `--strings` directory.
pub fn strings() -> PathBuf {
    "./lang".into()
}

/// Default `--env-file`.
pub fn env_file() -> PathBuf {
    ".env".into()
}

/// Date format of the `env.buildstamp` template value.
pub const BUILDSTAMP_FORMAT: &str = "%Y-%m-%d";
