use std::fs;
use tempfile::tempdir;

use link_export::i18n::keys;
use link_export::{Catalog, Translator};

#[test]
fn loads_locale_file_with_params() {
    let td = tempdir().unwrap();
    let path = td.path().join("ja.json");
    fs::write(
        &path,
        r#"{"content": {"exportSuccess": "{{count}} 件のリンクを {{dir}} に作成しました"}}"#,
    )
    .unwrap();

    let catalog = Catalog::from_path(&path).unwrap();
    let msg = catalog.translate(
        keys::EXPORT_SUCCESS,
        &[("count", "2".into()), ("dir", "/out".into())],
    );
    assert_eq!(msg, "2 件のリンクを /out に作成しました");
    // Keys missing from the locale render as themselves.
    assert_eq!(catalog.translate(keys::READY, &[]), "ready");
}

#[test]
fn malformed_locale_is_an_error() {
    let td = tempdir().unwrap();
    let path = td.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(Catalog::from_path(&path).is_err());
    assert!(Catalog::from_path(&td.path().join("missing.json")).is_err());
}

#[test]
fn english_covers_every_key() {
    let catalog = Catalog::english();
    for key in [
        keys::NO_ITEMS_SELECTED,
        keys::NO_ITEMS_SELECTED_ON_LOAD,
        keys::EXPORT_CANCELED,
        keys::EXPORT_FAILED,
        keys::EXPORTING_LINKS,
        keys::EXPORT_SUCCESS,
        keys::EXPORT_WITH_ERRORS,
        keys::ERRORS_TITLE,
        keys::MISSING_FILE_PATH,
        keys::ERROR_EPERM,
        keys::ERROR_EXDEV,
        keys::READY,
    ] {
        assert_ne!(catalog.translate(key, &[]), key, "no English text for {key}");
    }
}
