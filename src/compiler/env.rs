//! Template environment for one language pass.
//!
//! # Exposed to templates
//!
//! | Name              | Kind     | Value                                         |
//! |-------------------|----------|-----------------------------------------------|
//! | `json`            | filter   | compact JSON serialization of any value       |
//! | `langs`           | global   | configured languages                          |
//! | `env`             | global   | buildstamp, `.env` and process variables      |
//! | `__`              | global   | string bundle of the current language         |
//! | `assetContent(p)` | function | text of `<dist>/<p>`, empty string on failure |
//! | `page`            | global   | `{ name, lang }`, set by `render_page`        |
//!
//! Template names resolve against `root` first, then each extra template
//! directory in order.

use crate::{
    config::SiteConfig,
    data::{DataError, load_strings},
};
use minijinja::{AutoEscape, Environment, Error, ErrorKind, UndefinedBehavior, Value};
use std::{
    fs,
    path::{Component, Path, PathBuf},
};

/// Build the environment used to render pages of `lang`.
pub fn build_env(config: &SiteConfig, lang: &str) -> Result<Environment<'static>, DataError> {
    let strings = load_strings(&config.strings, lang)?;

    let mut env = Environment::new();
    // Missing bundle entries (`__.nav.home`) render empty instead of failing
    env.set_undefined_behavior(UndefinedBehavior::Chainable);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    let search_dirs: Vec<PathBuf> = std::iter::once(config.root.clone())
        .chain(config.templates.iter().cloned())
        .collect();
    env.set_loader(move |name| load_template(&search_dirs, name));

    env.add_filter("json", to_json);
    env.add_global("langs", Value::from_serialize(&config.langs));
    env.add_global("env", Value::from_serialize(&config.env));
    env.add_global("__", Value::from_serialize(&strings));

    let dist = config.dist.clone();
    env.add_function("assetContent", move |path: String| read_asset(&dist, &path));

    Ok(env)
}

/// Serialize a value to compact JSON.
fn to_json(value: Value) -> Result<String, Error> {
    serde_json::to_string(&value).map_err(|err| {
        Error::new(ErrorKind::BadSerialization, "cannot serialize value to JSON").with_source(err)
    })
}

/// Read a previously written output file, or nothing.
fn read_asset(dist: &Path, path: &str) -> String {
    fs::read_to_string(dist.join(path)).unwrap_or_default()
}

/// Resolve `name` against each search directory, first match wins.
fn load_template(search_dirs: &[PathBuf], name: &str) -> Result<Option<String>, Error> {
    let Some(rel) = template_rel_path(name) else {
        return Ok(None);
    };

    for dir in search_dirs {
        let path = dir.join(&rel);
        if path.is_file() {
            return fs::read_to_string(&path).map(Some).map_err(|err| {
                Error::new(
                    ErrorKind::InvalidOperation,
                    format!("cannot read template `{}`", path.display()),
                )
                .with_source(err)
            });
        }
    }

    Ok(None)
}

/// Turn a `/`-separated template name into a relative path.
///
/// Names escaping the search directory resolve to nothing.
fn template_rel_path(name: &str) -> Option<PathBuf> {
    let rel: PathBuf = name.split('/').filter(|s| !s.is_empty()).collect();
    let plain = rel
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    (plain && !rel.as_os_str().is_empty()).then_some(rel)
}
