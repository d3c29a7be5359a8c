//! Shared test fixtures for the integration suite.

use std::path::Path;

use anyhow::Result;
use tempfile::TempDir;

use tagmerge::{Engine, ReplacementMap};

/// A temporary template directory plus engines rooted at it.
pub struct TestSpace {
    dir: TempDir,
}

impl TestSpace {
    pub fn new() -> Result<Self> {
        tagmerge::test_utils::init_test_logging(None);
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a template file into the space, creating parent directories.
    pub async fn write(&self, name: &str, content: &str) -> Result<()> {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    /// A fresh engine whose include paths resolve against this space.
    pub fn engine(&self) -> Engine {
        Engine::builder().base_dir(self.dir.path()).build()
    }
}

/// Build a replacement map from name/value pairs.
pub fn vars(pairs: &[(&str, serde_json::Value)]) -> ReplacementMap {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}
