//! Dictionary-driven `{i18n{}}` resolution through the full pipeline.

use anyhow::Result;
use serde_json::json;

use tagmerge::{Engine, I18nDictionary, ReplacementMap};

use crate::common::{TestSpace, vars};

fn dictionary() -> I18nDictionary {
    let mut dict = I18nDictionary::new();
    dict.insert("en", "menu.home", "Home");
    dict.insert("de", "menu.home", "Startseite");
    dict
}

#[tokio::test]
async fn test_i18n_runs_after_variables() -> Result<()> {
    let engine = Engine::builder().dictionary(dictionary()).build();
    let out = engine
        .render_with_lang("<a>{i18n{menu.home}}</a> {{extra}}", &vars(&[("extra", json!("!"))]), "de")
        .await?;
    assert_eq!(out, "<a>Startseite</a> !");
    Ok(())
}

#[tokio::test]
async fn test_missing_key_substitutes_key_name() -> Result<()> {
    let engine = Engine::builder().dictionary(dictionary()).build();
    let out = engine.render("{i18n{menu.missing}}", &ReplacementMap::new()).await?;
    assert_eq!(out, "menu.missing");
    Ok(())
}

#[tokio::test]
async fn test_unknown_language_leaves_tags_untouched() -> Result<()> {
    let engine = Engine::builder().dictionary(dictionary()).build();
    let out =
        engine.render_with_lang("{i18n{menu.home}}", &ReplacementMap::new(), "fr").await?;
    assert_eq!(out, "{i18n{menu.home}}");
    Ok(())
}

#[tokio::test]
async fn test_no_dictionary_leaves_tags_untouched() -> Result<()> {
    let engine = Engine::builder().build();
    let out = engine.render("{i18n{menu.home}}", &ReplacementMap::new()).await?;
    assert_eq!(out, "{i18n{menu.home}}");
    Ok(())
}

#[tokio::test]
async fn test_i18n_tags_in_included_files_resolve() -> Result<()> {
    let space = TestSpace::new()?;
    space.write("nav.html", "<nav>{i18n{menu.home}}</nav>").await?;

    let engine = Engine::builder()
        .file_cache(std::sync::Arc::new(tagmerge::FileCache::with_base_dir(space.path())))
        .dictionary(dictionary())
        .default_lang("de")
        .build();

    let out = engine.render("{inc{/nav.html}}", &ReplacementMap::new()).await?;
    assert_eq!(out, "<nav>Startseite</nav>");
    Ok(())
}
