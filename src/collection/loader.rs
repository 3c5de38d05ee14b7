use std::{
    fs::{self, File},
    path::Path,
};

use anyhow::{bail, ensure, Context, Result};

use crate::{
    collection::{registry::CollectionRegistry, zikr::ZikrCollection},
    utility::{str::decode_text, zip::ZipReader},
};

// `path` is a directory of *.json files, a .zip of them, or a single .json file.
// The collection key is the file stem.
pub fn load_registry(path: &Path) -> Result<CollectionRegistry> {
    ensure!(path.exists(), "File not found: {}", path.display());

    let mut registry = CollectionRegistry::new();

    if path.is_dir() {
        load_directory(path, &mut registry)?;
    } else if has_extension(path, "zip") {
        load_zip(path, &mut registry)?;
    } else if has_extension(path, "json") {
        let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let key = file_stem(path)?;
        insert_collection(&mut registry, &key, &bytes)
            .with_context(|| format!("Failed to load collection: {}", path.display()))?;
    } else {
        bail!("Unsupported collection source: {}", path.display());
    }

    log::info!("Loaded {} collections from {}", registry.len(), path.display());

    Ok(registry)
}

pub fn parse_collection(bytes: &[u8]) -> Result<ZikrCollection> {
    let json = decode_text(bytes)?;
    let collection = serde_json::from_str(&json).context("Invalid collection JSON")?;
    Ok(collection)
}

fn load_directory(path: &Path, registry: &mut CollectionRegistry) -> Result<()> {
    let mut paths = Vec::new();
    for entry in
        fs::read_dir(path).with_context(|| format!("Failed to read {}", path.display()))?
    {
        let entry_path = entry?.path();
        if entry_path.is_file() && has_extension(&entry_path, "json") {
            paths.push(entry_path);
        } else {
            log::debug!("Skipped {}", entry_path.display());
        }
    }

    // read_dir order is platform dependent
    paths.sort();

    for path in paths {
        let bytes = fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        let key = file_stem(&path)?;
        insert_collection(registry, &key, &bytes)
            .with_context(|| format!("Failed to load collection: {}", path.display()))?;
    }

    Ok(())
}

fn load_zip(path: &Path, registry: &mut CollectionRegistry) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut zip_reader =
        ZipReader::new(file).with_context(|| format!("Failed to open zip: {}", path.display()))?;

    let mut entries = Vec::new();
    for i in 0..zip_reader.len() {
        let mut entry = zip_reader.get_by_index(i)?;
        if entry.is_dir() || !entry.name().to_lowercase().ends_with(".json") {
            log::debug!("Skipped zip entry {}", entry.name());
            continue;
        }

        let name = entry.name().to_owned();
        entries.push((name, entry.as_bytes()?));
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, bytes) in entries {
        let key = file_stem(Path::new(&name))?;
        insert_collection(registry, &key, &bytes)
            .with_context(|| format!("Failed to load collection: {}:{}", path.display(), name))?;
    }

    Ok(())
}

fn insert_collection(registry: &mut CollectionRegistry, key: &str, bytes: &[u8]) -> Result<()> {
    let collection = parse_collection(bytes)?;

    if collection.collection.is_none() {
        log::warn!("Collection {} has no items", key);
    }
    log::info!(
        "Loaded collection {} ({} items)",
        key,
        collection.items().len()
    );

    registry.insert(key, collection)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn file_stem(path: &Path) -> Result<String> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("Invalid file name: {}", path.display()))?;
    Ok(stem.to_owned())
}
