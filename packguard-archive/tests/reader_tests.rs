mod support;

use packguard_archive::{
    ArchiveError, PrimaryEntryName, list_entries, locate_primary, read_entry, read_sidecar,
};
use support::{build_zip, build_zip_raw, sample_upload};
use zip::CompressionMethod;

#[test]
fn read_entry_returns_decompressed_bytes() {
    let body = "x".repeat(10_000);
    let archive = build_zip(&[("pack.json", body.as_str())]);
    assert!(archive.len() < body.len(), "entry should be deflated");

    let bytes = read_entry(&archive, "pack.json").unwrap();
    assert_eq!(bytes, body.as_bytes());
}

#[test]
fn read_entry_from_stored_archive() {
    let body: &[u8] = b"{\"a\":1}";
    let archive = build_zip_raw(&[("metadata.json", body)], CompressionMethod::Stored);
    assert_eq!(read_entry(&archive, "metadata.json").unwrap(), body);
}

#[test]
fn read_entry_missing_name_is_not_found() {
    let archive = build_zip(&[("pack.json", "{}")]);
    match read_entry(&archive, "other.json").unwrap_err() {
        ArchiveError::EntryNotFound(name) => assert_eq!(name, "other.json"),
        other => panic!("expected EntryNotFound, got: {other:?}"),
    }
}

#[test]
fn garbage_input_is_malformed() {
    let inputs: [&[u8]; 3] = [b"", b"not a zip at all", b"PK\x03\x04truncated"];
    for input in inputs {
        let err = read_entry(input, "pack.json").unwrap_err();
        assert!(
            matches!(err, ArchiveError::MalformedArchive(_)),
            "input {input:?} gave {err:?}"
        );
    }
}

#[test]
fn locate_primary_accepts_both_names() {
    let current = build_zip(&[("pack.json", r#"{"v":2}"#)]);
    let legacy = build_zip(&[("analysis_pack.json", r#"{"v":1}"#)]);

    let p = locate_primary(&current).unwrap();
    assert_eq!(p.name, PrimaryEntryName::Pack);
    assert_eq!(p.bytes, br#"{"v":2}"#);

    let p = locate_primary(&legacy).unwrap();
    assert_eq!(p.name, PrimaryEntryName::AnalysisPack);
    assert_eq!(p.bytes, br#"{"v":1}"#);
}

#[test]
fn locate_primary_prefers_first_in_archive_order() {
    let archive = build_zip(&[
        ("metadata.json", "{}"),
        ("analysis_pack.json", r#"{"first":true}"#),
        ("pack.json", r#"{"first":false}"#),
    ]);
    let p = locate_primary(&archive).unwrap();
    assert_eq!(p.name, PrimaryEntryName::AnalysisPack);
    assert_eq!(p.bytes, br#"{"first":true}"#);
}

#[test]
fn locate_primary_ignores_nested_paths() {
    let archive = build_zip(&[("nested/pack.json", "{}"), ("metadata.json", "{}")]);
    assert!(matches!(
        locate_primary(&archive).unwrap_err(),
        ArchiveError::MissingPrimaryEntry
    ));
}

#[test]
fn read_sidecar_optional() {
    let with = sample_upload();
    let without = build_zip(&[("pack.json", "{}")]);

    assert_eq!(read_sidecar(&with).unwrap(), Some(b"{}".to_vec()));
    assert_eq!(read_sidecar(&without).unwrap(), None);
}

#[test]
fn list_entries_in_archive_order() {
    let names = list_entries(&sample_upload()).unwrap();
    assert_eq!(names, ["analysis_pack.json", "metadata.json", "notes/readme.txt"]);
}
