//! File cache behavior across render calls: lazy population, reuse,
//! forced reload, and cross-engine sharing.

use std::sync::Arc;

use anyhow::Result;

use tagmerge::{Engine, FileCache, ReplacementMap};

use crate::common::TestSpace;

#[tokio::test]
async fn test_sequential_renders_reuse_cached_content() -> Result<()> {
    let space = TestSpace::new()?;
    space.write("part.html", "old").await?;

    let engine = space.engine();
    let none = ReplacementMap::new();
    assert_eq!(engine.render("{inc{/part.html}}", &none).await?, "old");

    // The underlying file changes, the cached copy does not.
    space.write("part.html", "new").await?;
    assert_eq!(
        engine.render("{inc{/part.html}}", &none).await?,
        "old",
        "second load without forced reload must return the cached copy"
    );
    Ok(())
}

#[tokio::test]
async fn test_forced_reload_observes_updated_content() -> Result<()> {
    let space = TestSpace::new()?;
    space.write("part.html", "old").await?;

    let engine = space.engine();
    let none = ReplacementMap::new();
    engine.render("{inc{/part.html}}", &none).await?;

    space.write("part.html", "new").await?;
    let cache = engine.file_cache().expect("engine was built with a cache");
    assert_eq!(cache.load("/part.html", true).await?, "new");

    // The overwritten entry is what later renders see.
    assert_eq!(engine.render("{inc{/part.html}}", &none).await?, "new");
    Ok(())
}

#[tokio::test]
async fn test_cache_shared_between_engines() -> Result<()> {
    let space = TestSpace::new()?;
    space.write("part.html", "first").await?;

    let cache = Arc::new(FileCache::with_base_dir(space.path()));
    let one = Engine::builder().file_cache(cache.clone()).build();
    let two = Engine::builder().file_cache(cache.clone()).build();

    let none = ReplacementMap::new();
    assert_eq!(one.render("{inc{/part.html}}", &none).await?, "first");

    space.write("part.html", "second").await?;
    assert_eq!(
        two.render("{inc{/part.html}}", &none).await?,
        "first",
        "the second engine reads the entry populated by the first"
    );
    assert_eq!(cache.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_cache_populates_lazily() -> Result<()> {
    let space = TestSpace::new()?;
    space.write("a.html", "a").await?;
    space.write("b.html", "b").await?;

    let engine = space.engine();
    let cache = engine.file_cache().expect("engine was built with a cache");
    assert!(cache.is_empty());

    engine.render("{inc{/a.html}}", &ReplacementMap::new()).await?;
    assert_eq!(cache.len(), 1, "only the included path is cached");
    Ok(())
}

#[tokio::test]
async fn test_concurrent_renders_share_one_cache() -> Result<()> {
    let space = TestSpace::new()?;
    space.write("shared.html", "s").await?;

    let engine = space.engine();
    let none = ReplacementMap::new();
    let (a, b) = tokio::join!(
        engine.render("{inc{/shared.html}}1", &none),
        engine.render("{inc{/shared.html}}2", &none),
    );
    assert_eq!(a?, "s1");
    assert_eq!(b?, "s2");

    let cache = engine.file_cache().expect("engine was built with a cache");
    assert_eq!(cache.len(), 1, "racing loads overwrite one key idempotently");
    Ok(())
}
