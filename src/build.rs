//! Site building orchestration.
//!
//! # Architecture
//!
//! ```text
//! build_site()
//!     │
//!     ├── create dist
//!     │
//!     └── collect_pages() ──► for each page, sequentially:
//!             │                   build_env(lang) ──► render_page() ──► write
//!             │
//!             └── templates name-sorted depth-first,
//!                 default language first, then --langs order
//! ```
//!
//! Rendering order matters for `assetContent`: a page can only inline output
//! written by a page that comes before it.

use crate::{
    compiler::{collect_pages, write_page},
    config::SiteConfig,
    log,
};
use anyhow::{Context, Result, anyhow};
use std::fs;

/// Render every page of the site into `config.dist`.
///
/// Stops at the first failing page; files written before it are kept.
/// Returns the number of pages written.
pub fn build_site(config: &SiteConfig) -> Result<usize> {
    fs::create_dir_all(&config.dist).with_context(|| {
        format!("Failed to create output directory: {}", config.dist.display())
    })?;

    let mut count = 0;
    for page in collect_pages(&config.root, &config.langs) {
        if let Err(e) = write_page(&page, config) {
            log!("error"; "{:#}", e);
            return Err(anyhow!("Build failed"));
        }
        count += 1;
    }

    log_build_result(count);
    Ok(count)
}

/// Log build result based on the number of written pages
fn log_build_result(count: usize) {
    if count == 0 {
        log!("warn"; "no pages written, check that templates have matching .yml data files");
    } else {
        log!("build"; "done, {} pages", count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvData;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn make_test_config(dir: &TempDir, langs: &[&str]) -> SiteConfig {
        SiteConfig {
            root: dir.path().join("pages"),
            dist: dir.path().join("dist"),
            strings: dir.path().join("lang"),
            langs: langs.iter().map(|s| (*s).to_owned()).collect(),
            templates: vec![dir.path().join("layouts")],
            env: EnvData::from([("buildstamp".to_string(), "2025-01-01".to_string())]),
        }
    }

    #[test]
    fn test_build_default_and_translated() {
        let dir = TempDir::new().unwrap();
        let config = make_test_config(&dir, &["fr"]);
        write(&config.root, "index.html.tmpl", "{{ page.name }}-{{ __.nav.home }}");
        write(&config.root, "index.yml", "");
        write(&config.root, "index.fr.yml", "");
        write(&config.strings, "fr/nav.json", r#"{"home":"Accueil"}"#);

        let count = build_site(&config).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read_to_string(config.dist.join("index.html")).unwrap(), "index-");
        assert_eq!(
            fs::read_to_string(config.dist.join("fr/index.html")).unwrap(),
            "index-Accueil"
        );
    }

    #[test]
    fn test_build_skips_languages_without_data() {
        let dir = TempDir::new().unwrap();
        let config = make_test_config(&dir, &["fr", "de"]);
        write(&config.root, "about.html.tmpl", "{{ page.lang }}");
        write(&config.root, "about.de.yml", "");

        assert_eq!(build_site(&config).unwrap(), 1);
        assert!(config.dist.join("de/about.html").is_file());
        assert!(!config.dist.join("about.html").exists());
        assert!(!config.dist.join("fr").exists());
    }

    #[test]
    fn test_build_layouts_and_data() {
        let dir = TempDir::new().unwrap();
        let config = make_test_config(&dir, &[]);
        write(
            &dir.path().join("layouts"),
            "base.html",
            "<title>{{ title }}</title>{% block body %}{% endblock %}<!-- {{ env.buildstamp }} -->",
        );
        write(
            &config.root,
            "blog/post.html.tmpl",
            r#"{% extends "base.html" %}{% block body %}{% for t in tags %}#{{ t }}{% endfor %}{% endblock %}"#,
        );
        write(&config.root, "blog/post.yml", "title: Post\ntags: [rust, web]\n");

        build_site(&config).unwrap();

        assert_eq!(
            fs::read_to_string(config.dist.join("blog/post.html")).unwrap(),
            "<title>Post</title>#rust#web<!-- 2025-01-01 -->"
        );
    }

    #[test]
    fn test_build_inlines_earlier_output() {
        let dir = TempDir::new().unwrap();
        let config = make_test_config(&dir, &[]);
        // "a.css.tmpl" is rendered before "b.html.tmpl"
        write(&config.root, "a.css.tmpl", "body{color:{{ color }}}");
        write(&config.root, "a.yml", "color: red\n");
        write(&config.root, "b.html.tmpl", "<style>{{ assetContent('a.css') }}</style>");
        write(&config.root, "b.yml", "");

        build_site(&config).unwrap();

        assert_eq!(
            fs::read_to_string(config.dist.join("b.html")).unwrap(),
            "<style>body{color:red}</style>"
        );
    }

    #[test]
    fn test_build_is_repeatable() {
        let dir = TempDir::new().unwrap();
        let config = make_test_config(&dir, &["fr"]);
        write(&config.root, "index.html.tmpl", "{{ page | json }}{{ langs | json }}{{ data | json }}");
        write(&config.root, "index.yml", "data:\n  z: 1\n  a: [x, y]\n");
        write(&config.root, "index.fr.yml", "data: {}\n");

        build_site(&config).unwrap();
        let first = fs::read(config.dist.join("index.html")).unwrap();
        build_site(&config).unwrap();
        let second = fs::read(config.dist.join("index.html")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_malformed_data_aborts() {
        let dir = TempDir::new().unwrap();
        let config = make_test_config(&dir, &[]);
        write(&config.root, "a.html.tmpl", "fine");
        write(&config.root, "a.yml", "");
        write(&config.root, "b.html.tmpl", "never");
        write(&config.root, "b.yml", "key: [broken\n");
        write(&config.root, "c.html.tmpl", "skipped");
        write(&config.root, "c.yml", "");

        assert!(build_site(&config).is_err());
        assert_eq!(fs::read_to_string(config.dist.join("a.html")).unwrap(), "fine");
        assert!(!config.dist.join("b.html").exists());
        assert!(!config.dist.join("c.html").exists());
    }

    #[test]
    fn test_build_empty_root() {
        let dir = TempDir::new().unwrap();
        let config = make_test_config(&dir, &[]);
        fs::create_dir_all(&config.root).unwrap();

        assert_eq!(build_site(&config).unwrap(), 0);
        assert!(config.dist.is_dir());
    }
}
