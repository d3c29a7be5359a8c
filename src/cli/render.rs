//! The `render` command: resolve a template file and print the result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use serde_json::Value;

use crate::constants::DEFAULT_LANG;
use crate::engine::Engine;
use crate::i18n::I18nDictionary;
use crate::vars::ReplacementMap;

/// Arguments for `tagmerge render`.
#[derive(Args)]
pub struct RenderCommand {
    /// Template file to resolve
    template: PathBuf,

    /// Replacement variable for `{{}}` tags, as KEY=VALUE (repeatable)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    vars: Vec<String>,

    /// Language for `{i18n{}}` merge tags
    #[arg(long, default_value = DEFAULT_LANG)]
    lang: String,

    /// JSON file holding the language-keyed i18n dictionary
    #[arg(long, value_name = "FILE")]
    i18n: Option<PathBuf>,

    /// Base directory for `{inc{}}` paths (defaults to the template's parent)
    #[arg(long, value_name = "DIR")]
    base_dir: Option<PathBuf>,

    /// Write the resolved output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl RenderCommand {
    pub async fn execute(self) -> Result<()> {
        let template = tokio::fs::read_to_string(&self.template)
            .await
            .with_context(|| format!("failed to read template '{}'", self.template.display()))?;

        let base_dir = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => self
                .template
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf(),
        };

        let mut builder = Engine::builder().base_dir(base_dir);

        if let Some(path) = &self.i18n {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read i18n dictionary '{}'", path.display()))?;
            let dictionary: I18nDictionary = serde_json::from_str(&raw)
                .with_context(|| format!("invalid i18n dictionary '{}'", path.display()))?;
            builder = builder.dictionary(dictionary);
        }

        let engine = builder.build();
        let replacements = parse_vars(&self.vars)?;

        let resolved = engine.render_with_lang(&template, &replacements, &self.lang).await?;

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, &resolved)
                    .await
                    .with_context(|| format!("failed to write output '{}'", path.display()))?;
            }
            None => println!("{resolved}"),
        }

        Ok(())
    }
}

/// Parse repeated `--var KEY=VALUE` pairs into a replacement map.
///
/// Values are plain strings; a value of `null` coerces to the empty string
/// at substitution time like any other null replacement.
fn parse_vars(pairs: &[String]) -> Result<ReplacementMap> {
    let mut map = ReplacementMap::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("invalid --var '{pair}', expected KEY=VALUE");
        };
        let value = if value == "null" {
            Value::Null
        } else {
            Value::String(value.to_string())
        };
        map.insert(key.to_string(), value);
    }
    Ok(map)
}
