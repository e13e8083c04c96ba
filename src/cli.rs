//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap.

use crate::config::defaults;
use clap::Parser;
use std::path::PathBuf;

/// Render `<name>.<ext>.tmpl` templates once per language into an output tree
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Directory with templates and data files
    pub root: PathBuf,

    /// Output directory (created if absent)
    pub dist: PathBuf,

    /// Comma-separated list of languages, e.g. `fr,de`
    #[arg(short, long, value_delimiter = ',')]
    pub langs: Vec<String>,

    /// Additional directories for template lookup, searched after `root`
    #[arg(short, long, num_args = 0..)]
    pub templates: Vec<PathBuf>,

    /// Translated string directory, one subdirectory per language
    #[arg(short, long, default_value_os_t = defaults::strings())]
    pub strings: PathBuf,

    /// `KEY=VALUE` file merged into the `env` template global
    #[arg(short, long, default_value_os_t = defaults::env_file())]
    pub env_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_only() {
        let cli = Cli::try_parse_from(["mkpages", "pages", "dist"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("pages"));
        assert_eq!(cli.dist, PathBuf::from("dist"));
        assert!(cli.langs.is_empty());
        assert!(cli.templates.is_empty());
        assert_eq!(cli.strings, defaults::strings());
        assert_eq!(cli.env_file, defaults::env_file());
    }

    #[test]
    fn test_langs_comma_separated() {
        let cli = Cli::try_parse_from(["mkpages", "pages", "dist", "-l", "fr,de"]).unwrap();
        assert_eq!(cli.langs, vec!["fr", "de"]);
    }

    #[test]
    fn test_multiple_template_dirs() {
        let cli = Cli::try_parse_from([
            "mkpages",
            "pages",
            "dist",
            "--templates",
            "layouts",
            "partials",
            "--strings",
            "i18n",
        ])
        .unwrap();
        assert_eq!(
            cli.templates,
            vec![PathBuf::from("layouts"), PathBuf::from("partials")]
        );
        assert_eq!(cli.strings, PathBuf::from("i18n"));
    }

    #[test]
    fn test_default_paths() {
        let cli = Cli::try_parse_from(["mkpages", "pages", "dist"]).unwrap();
        assert_eq!(cli.strings, PathBuf::from("./lang"));
        assert_eq!(cli.env_file, PathBuf::from(".env"));
    }

    #[test]
    fn test_missing_dist_is_error() {
        assert!(Cli::try_parse_from(["mkpages", "pages"]).is_err());
    }
}
