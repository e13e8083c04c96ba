use crate::compiler::{Page, RenderError, build_env, collect_templates};
use crate::data::{PageData, load_page_data};
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result};
use minijinja::{Environment, Value};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The `page` template global.
#[derive(Debug, Serialize)]
struct PageIdentity<'a> {
    name: &'a str,
    lang: &'a str,
}

// ============================================================================
// Public API
// ============================================================================

/// Put the default language first, exactly once, followed by the requested ones.
pub fn normalize_langs(langs: &[String]) -> Vec<String> {
    std::iter::once(String::new())
        .chain(langs.iter().filter(|lang| !lang.is_empty()).cloned())
        .collect()
}

/// Enumerate the pages to render below `root`.
///
/// Every template is paired with every normalized language; a pair becomes a
/// page only when its data file exists. Order: templates in discovery order,
/// and for each template the default language first, then `langs` in order.
pub fn collect_pages(root: &Path, langs: &[String]) -> impl Iterator<Item = Page> {
    let langs = normalize_langs(langs);

    collect_templates(root).flat_map(move |file| {
        langs
            .iter()
            .map(|lang| Page::new(root, &file, lang))
            .filter(|page| page.data_path().exists())
            .collect::<Vec<_>>()
    })
}

/// Render a page to text.
///
/// Sets the `page` global on `env`, then renders the template with the page
/// data. Keys of `extra` shadow data keys of the same name.
pub fn render_page(
    page: &Page,
    env: &mut Environment<'static>,
    extra: &PageData,
) -> Result<String, RenderError> {
    let mut data = load_page_data(&page.data_path())?;
    data.extend(extra.iter().map(|(key, value)| (key.clone(), value.clone())));

    let name = page.name_str();
    let identity = PageIdentity {
        name: &name,
        lang: &page.lang,
    };
    env.add_global("page", Value::from_serialize(&identity));

    let template_name = page.template_name();
    let template_error = |source| RenderError::Template {
        template: template_name.clone(),
        source,
    };

    env.get_template(&template_name)
        .and_then(|template| template.render(&data))
        .map_err(template_error)
}

/// Render a page with a fresh environment and write it below `config.dist`.
///
/// Returns the written path.
pub fn write_page(page: &Page, config: &SiteConfig) -> Result<PathBuf> {
    let output = config.dist.join(page.output_path());

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut env = build_env(config, &page.lang)
        .with_context(|| format!("Failed to load strings for language `{}`", page.lang))?;
    let content = render_page(page, &mut env, &PageData::new())
        .with_context(|| format!("Failed to render {}", describe(page)))?;

    fs::write(&output, content)
        .with_context(|| format!("Failed to write: {}", output.display()))?;
    log!("render"; "{}", page.output_path().display());

    Ok(output)
}

// ============================================================================
// Internal
// ============================================================================

/// `about.html.tmpl [fr]`, or just the template for the default language.
fn describe(page: &Page) -> String {
    if page.lang.is_empty() {
        page.template_name()
    } else {
        format!("{} [{}]", page.template_name(), page.lang)
    }
}
