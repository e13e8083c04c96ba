//! Build settings for one generator run.
//!
//! [`SiteConfig`] is assembled once from the CLI and then shared by reference
//! with every stage of the pipeline. Nothing mutates it after `from_cli`.
//!
//! | Field       | Source                     | Purpose                              |
//! |-------------|----------------------------|--------------------------------------|
//! | `root`      | `root` argument            | templates and page data files        |
//! | `dist`      | `dist` argument            | output tree                          |
//! | `strings`   | `--strings`                | `<strings>/<lang>/*.json` bundles    |
//! | `langs`     | `--langs`                  | languages to render besides default  |
//! | `templates` | `--templates`              | extra template lookup directories    |
//! | `env`       | `--env-file` + environment | `env` template global                |

pub mod defaults;
pub mod env;
mod error;

pub use env::EnvData;
pub use error::ConfigError;

use crate::cli::Cli;
use anyhow::{Result, bail};
use std::path::PathBuf;

/// Immutable settings of a build pass.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory with `*.tmpl` templates and `*.yml` data files.
    pub root: PathBuf,

    /// Output directory.
    pub dist: PathBuf,

    /// Translated string directory, one subdirectory per language.
    pub strings: PathBuf,

    /// Requested languages, as given on the command line minus blank entries.
    ///
    /// The implicit default language is added by the page enumerator.
    pub langs: Vec<String>,

    /// Extra template lookup directories, searched after `root` in order.
    pub templates: Vec<PathBuf>,

    /// Merged environment values.
    pub env: EnvData,
}

impl SiteConfig {
    /// Build configuration from CLI arguments, loading environment values.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let env = env::load_env_data(&cli.env_file)?;
        Ok(Self::from_parts(cli, env))
    }

    /// Build configuration from CLI arguments and already merged environment values.
    pub fn from_parts(cli: &Cli, env: EnvData) -> Self {
        let langs = cli
            .langs
            .iter()
            .map(|lang| lang.trim())
            .filter(|lang| !lang.is_empty())
            .map(str::to_owned)
            .collect();

        Self {
            root: cli.root.clone(),
            dist: cli.dist.clone(),
            strings: cli.strings.clone(),
            langs,
            templates: cli.templates.clone(),
            env,
        }
    }

    /// Validate configuration before building.
    pub fn validate(&self) -> Result<()> {
        if !self.root.is_dir() {
            bail!(ConfigError::Validation(format!(
                "root `{}` is not a directory",
                self.root.display()
            )));
        }

        if self.dist.exists() && !self.dist.is_dir() {
            bail!(ConfigError::Validation(format!(
                "dist `{}` exists and is not a directory",
                self.dist.display()
            )));
        }

        if let Some(lang) = self
            .langs
            .iter()
            .find(|lang| lang.contains(['/', '\\']) || matches!(lang.as_str(), "." | ".."))
        {
            bail!(ConfigError::Validation(format!(
                "language `{lang}` is not a plain directory name"
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
