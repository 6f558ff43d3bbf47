use std::io::Write;

use curator_editor::selection;
use curator_model::prelude::*;

#[test]
fn selection_loads_from_a_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"id": "7", "tags": [{{"id": "t1", "name": "Outdoor"}}]}}, {{"id": "8"}}]"#
    )
    .unwrap();

    let loaded = selection::load_from_file(file.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, GalleryID::new("7").unwrap());
    assert_eq!(loaded[0].tags[0].name, "Outdoor");
}

#[test]
fn unreadable_selection_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("selection.json");
    let err = selection::load_from_file(&missing).unwrap_err();
    assert!(format!("{err:#}").contains("selection.json"));
}
