use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressIterator};
use serde::Serialize;

use crate::{
    cache::ParseCache,
    collection::{registry::CollectionRegistry, zikr::CollectionMeta},
    content::renderer::{render_zikr, RenderedZikr},
};

// Output layout:
//   <root>/collections.json        CollectionMeta list
//   <root>/collection/<key>.json   RenderedCollection
pub enum BuildOut {
    Null,
    File { root: PathBuf, pretty: bool },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedCollection<'a> {
    pub key: &'a str,
    pub title: Option<&'a str>,
    pub items: Vec<RenderedZikr>,
}

impl BuildOut {
    pub fn init_file(root: &Path, pretty: bool) -> Result<Self> {
        fs::create_dir_all(root.join("collection")).context("Failed to create output directory")?;

        Ok(Self::File {
            root: root.to_path_buf(),
            pretty,
        })
    }

    // Renders every collection, writing files unless Null.
    pub fn save_registry(
        &self,
        registry: &CollectionRegistry,
        cache: &mut ParseCache,
        pb: ProgressBar,
    ) -> Result<()> {
        cache.begin_dataset(&registry.dataset_id());

        self.save_collections_meta(&registry.collections_meta())?;

        for (key, collection) in registry.iter().progress_with(pb) {
            let items = collection
                .items()
                .iter()
                .map(|zikr| render_zikr(zikr, cache))
                .collect();

            self.save_collection(&RenderedCollection {
                key,
                title: collection.title.as_deref(),
                items,
            })
            .with_context(|| format!("Failed to process collection: {}", key))?;
        }

        log::info!(
            "Parsed {} distinct texts ({} cache hits)",
            cache.misses(),
            cache.hits()
        );

        Ok(())
    }

    fn save_collections_meta(&self, meta: &[CollectionMeta]) -> Result<()> {
        self.write_json("collections.json", &meta)
    }

    fn save_collection(&self, collection: &RenderedCollection<'_>) -> Result<()> {
        self.write_json(&format!("collection/{}.json", collection.key), collection)
    }

    fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        if let BuildOut::File { root, pretty } = &self {
            let json = if *pretty {
                serde_json::to_string_pretty(value)?
            } else {
                serde_json::to_string(value)?
            };

            let path = root.join(name);
            fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        }

        Ok(())
    }
}
