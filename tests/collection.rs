use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use anyhow::Result;

use azkar_content::{
    collection::{
        loader::{load_registry, parse_collection},
        registry::CollectionRegistry,
        zikr::{CollectionMeta, ZikrCollection},
    },
};

fn percent_encode(s: &str) -> String {
    s.bytes().map(|b| format!("%{:02X}", b)).collect()
}

fn meta(key: &str, title: &str, item_count: usize) -> CollectionMeta {
    CollectionMeta {
        key: key.to_owned(),
        title: title.to_owned(),
        item_count,
    }
}

#[test]
fn test_load_directory() -> Result<()> {
    let registry = load_registry(Path::new("./tests/collections"))?;

    assert_eq!(
        registry.collections_meta(),
        vec![
            meta("morningEvening", "أذكار الصباح والمساء", 2),
            meta("poems", "قصائد", 1),
            meta("untitled", "untitled", 0),
        ]
    );

    let zikr = registry
        .get_zikr("morningEvening", "آية الكرسي")
        .expect("zikr by title");
    assert_eq!(
        zikr.url.as_deref(),
        Some("https://example.org/audio/ayat-alkursi.mp3")
    );
    assert!(zikr.footer.is_some());

    let second = registry
        .get_zikr("morningEvening", "سيد الاستغفار")
        .expect("zikr by title");
    assert_eq!(second.notes, None);

    Ok(())
}

#[test]
fn test_get_zikr() -> Result<()> {
    let registry = load_registry(Path::new("./tests/collections"))?;

    let encoded = percent_encode("البردة");
    assert_eq!(
        registry.get_zikr("poems", &encoded).map(|z| z.title.as_str()),
        Some("البردة")
    );

    assert!(registry.get_zikr("poems", "البردة ").is_none());
    assert!(registry.get_zikr("poems", "%Z1").is_none());
    assert!(registry.get_zikr("missing", "البردة").is_none());
    assert!(registry.get_zikr("untitled", "anything").is_none());
    assert!(registry.get_collection("untitled").is_some());

    Ok(())
}

#[test]
fn test_get_zikr_decodes_titles() -> Result<()> {
    let mut registry = CollectionRegistry::new();
    registry.insert(
        "c",
        parse_collection(
            r#"{"collection":[
                {"title":"a b","content":"1"},
                {"title":"ا","content":"2"},
                {"title":"100%","content":"3"}
            ]}"#
            .as_bytes(),
        )?,
    )?;

    let content = |title: &str| registry.get_zikr("c", title).map(|z| z.content.as_str());

    assert_eq!(content("a%20b"), Some("1"));
    assert_eq!(content("%D8%A7"), Some("2"));
    assert_eq!(content("%d8%a7"), Some("2"));
    assert_eq!(content("ا"), Some("2"));

    // the raw title wins over its decoding
    assert_eq!(content("100%"), Some("3"));

    // broken or non UTF-8 escapes find nothing
    assert_eq!(content("%"), None);
    assert_eq!(content("%2"), None);
    assert_eq!(content("%D8"), None);

    Ok(())
}

#[test]
fn test_load_zip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let zip_path = dir.path().join("collections.zip");

    {
        let mut writer = zip::ZipWriter::new(File::create(&zip_path)?);
        let options = zip::write::FileOptions::default();

        writer.add_directory("azkar/", options)?;
        writer.start_file("azkar/b.json", options)?;
        writer.write_all(
            r###"{"title":"B","collection":[{"title":"x","content":"## y"}]}"###.as_bytes(),
        )?;
        writer.start_file("azkar/a.json", options)?;
        writer.write_all(b"\xEF\xBB\xBF{\"title\":\"A\"}")?;
        writer.start_file("readme.txt", options)?;
        writer.write_all(b"ignored")?;
        writer.finish()?;
    }

    let registry = load_registry(&zip_path)?;
    assert_eq!(
        registry.collections_meta(),
        vec![meta("a", "A", 0), meta("b", "B", 1)]
    );
    assert_eq!(
        registry.get_zikr("b", "x").map(|z| z.content.as_str()),
        Some("## y")
    );

    Ok(())
}

#[test]
fn test_duplicate_keys_in_zip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let zip_path = dir.path().join("collections.zip");

    {
        let mut writer = zip::ZipWriter::new(File::create(&zip_path)?);
        let options = zip::write::FileOptions::default();

        writer.start_file("x/a.json", options)?;
        writer.write_all(b"{}")?;
        writer.start_file("y/a.json", options)?;
        writer.write_all(b"{}")?;
        writer.finish()?;
    }

    let err = load_registry(&zip_path).unwrap_err();
    assert!(format!("{:#}", err).contains("same key"), "{:#}", err);

    Ok(())
}

#[test]
fn test_load_single_file_and_errors() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let json_path = dir.path().join("chosenSalawat.json");
    fs::write(&json_path, r#"{"collection":[{"title":"t","content":"c"}]}"#)?;
    let registry = load_registry(&json_path)?;
    assert_eq!(
        registry.collections_meta(),
        vec![meta("chosenSalawat", "chosenSalawat", 1)]
    );

    let broken_path = dir.path().join("broken.json");
    fs::write(&broken_path, "{ not json")?;
    let err = load_registry(&broken_path).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid collection JSON"), "{:#}", err);

    // a broken file fails the whole directory
    assert!(load_registry(dir.path()).is_err());

    let txt_path = dir.path().join("notes.txt");
    fs::write(&txt_path, "text")?;
    assert!(load_registry(&txt_path).is_err());

    assert!(load_registry(&dir.path().join("missing")).is_err());

    Ok(())
}

#[test]
fn test_parse_collection() -> Result<()> {
    let collection = parse_collection(
        r#"{"title":"T","collection":[{"title":"a","content":"b","url":""}]}"#.as_bytes(),
    )?;
    assert_eq!(collection.items().len(), 1);
    assert_eq!(collection.items()[0].url.as_deref(), Some(""));

    assert!(parse_collection(b"\xFF\xFE{}").is_err());
    assert!(parse_collection(br#"{"collection":[{"title":"a"}]}"#).is_err());

    Ok(())
}

#[test]
fn test_registry() -> Result<()> {
    let mut registry = CollectionRegistry::new();
    assert!(registry.is_empty());

    registry.insert("a", ZikrCollection::default())?;
    let empty_id = registry.dataset_id();

    assert!(registry.insert("a", ZikrCollection::default()).is_err());
    assert!(registry.insert("", ZikrCollection::default()).is_err());

    registry.insert(
        "b",
        ZikrCollection {
            title: Some(String::new()),
            collection: None,
        },
    )?;
    assert_eq!(registry.len(), 2);
    assert_ne!(registry.dataset_id(), empty_id);
    assert_eq!(registry.collections_meta()[1], meta("b", "b", 0));

    let keys: Vec<_> = registry.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "b"]);

    let first = load_registry(Path::new("./tests/collections"))?;
    let second = load_registry(Path::new("./tests/collections"))?;
    assert_eq!(first.dataset_id(), second.dataset_id());

    Ok(())
}
