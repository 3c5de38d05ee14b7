use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use anyhow::{ensure, Result};

use crate::collection::zikr::{CollectionMeta, Zikr, ZikrCollection};

// Collections in insertion order, looked up by key.
#[derive(Debug, Default)]
pub struct CollectionRegistry {
    collections: Vec<(String, ZikrCollection)>,
}

impl CollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, collection: ZikrCollection) -> Result<()> {
        ensure!(!key.is_empty(), "Collection key is empty");
        ensure!(
            self.get_collection(key).is_none(),
            "Different collections have same key: {}",
            key
        );

        self.collections.push((key.to_owned(), collection));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ZikrCollection)> {
        self.collections.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn collections_meta(&self) -> Vec<CollectionMeta> {
        self.iter()
            .map(|(key, collection)| CollectionMeta {
                key: key.to_owned(),
                title: collection
                    .title
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| key.to_owned()),
                item_count: collection.items().len(),
            })
            .collect()
    }

    pub fn get_collection(&self, key: &str) -> Option<&ZikrCollection> {
        self.collections
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, c)| c)
    }

    // Titles may arrive percent-encoded (e.g. from a route); the raw title is tried first.
    pub fn get_zikr(&self, collection_key: &str, title: &str) -> Option<&Zikr> {
        let items = self.get_collection(collection_key)?.items();

        if let Some(zikr) = items.iter().find(|z| z.title == title) {
            return Some(zikr);
        }

        let decoded = urlencoding::decode(title).ok()?;
        items.iter().find(|z| z.title == *decoded)
    }

    // Fingerprint of keys and items, used to tell datasets apart in ParseCache.
    pub fn dataset_id(&self) -> String {
        let mut hasher = DefaultHasher::new();
        for (key, collection) in &self.collections {
            key.hash(&mut hasher);
            collection.title.hash(&mut hasher);
            for zikr in collection.items() {
                zikr.title.hash(&mut hasher);
                zikr.content.hash(&mut hasher);
                zikr.footer.hash(&mut hasher);
            }
        }
        format!("{:016x}", hasher.finish())
    }
}
