use bytes::Bytes;
use kiosk::resources::{INDEX_FILE, Resource, ResourceTable, WEB_FILES};

fn sample_table() -> ResourceTable {
    let resources = WEB_FILES
        .iter()
        .map(|(name, mime)| Resource {
            name: (*name).to_string(),
            mime: (*mime).to_string(),
            body: Bytes::from(format!("content of {name}")),
        })
        .collect();

    ResourceTable::from_entries(resources, INDEX_FILE).unwrap()
}

#[test]
fn test_lookup_registered_resource() {
    let table = sample_table();

    let css = table.lookup("Style.css").unwrap();
    assert_eq!(css.mime, "text/css");
    assert_eq!(css.body.as_ref(), b"content of Style.css");
}

#[test]
fn test_lookup_is_case_sensitive() {
    let table = sample_table();

    assert!(table.lookup("Main.html").is_some());
    assert!(table.lookup("main.html").is_none());
    assert!(table.lookup("MAIN.HTML").is_none());
}

#[test]
fn test_lookup_unknown_name() {
    let table = sample_table();

    assert!(table.lookup("Missing.html").is_none());
    assert!(table.lookup("Style.css?v=2").is_none());
}

#[test]
fn test_index_resource() {
    let table = sample_table();

    assert_eq!(table.index().name, "Main.html");
    assert_eq!(table.index().mime, "text/html");
}

#[test]
fn test_table_len() {
    let table = sample_table();

    assert_eq!(table.len(), WEB_FILES.len());
    assert!(!table.is_empty());
}

#[test]
fn test_from_entries_rejects_unknown_index() {
    let resources = vec![Resource {
        name: "Other.html".to_string(),
        mime: "text/html".to_string(),
        body: Bytes::from_static(b"<html></html>"),
    }];

    assert!(ResourceTable::from_entries(resources, "Main.html").is_err());
}

#[test]
fn test_preload_reads_all_manifest_files() {
    let dir = tempfile::tempdir().unwrap();
    for (name, _) in WEB_FILES {
        std::fs::write(dir.path().join(name), format!("disk body of {name}")).unwrap();
    }

    let table = ResourceTable::preload(dir.path()).unwrap();

    assert_eq!(table.len(), WEB_FILES.len());
    for (name, mime) in WEB_FILES {
        let resource = table.lookup(name).unwrap();
        assert_eq!(&resource.mime, mime);
        assert_eq!(
            resource.body.as_ref(),
            format!("disk body of {name}").as_bytes()
        );
    }
    assert_eq!(table.index().name, "Main.html");
}

#[test]
fn test_preload_fails_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    // Everything except the stylesheet.
    for (name, _) in WEB_FILES.iter().filter(|(name, _)| *name != "Style.css") {
        std::fs::write(dir.path().join(name), "x").unwrap();
    }

    let err = ResourceTable::preload(dir.path()).unwrap_err();

    assert!(err.to_string().contains("Style.css"));
}

#[test]
fn test_preload_fails_on_empty_directory() {
    let dir = tempfile::tempdir().unwrap();

    assert!(ResourceTable::preload(dir.path()).is_err());
}
