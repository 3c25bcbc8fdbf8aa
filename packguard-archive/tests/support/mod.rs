//! Shared helpers for building pack archives in tests.

#![allow(dead_code)]

use std::io::{Cursor, Read, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Builds a ZIP archive from `(name, text)` pairs, in order.
pub fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let raw: Vec<(&str, &[u8])> = entries
        .iter()
        .map(|(name, text)| (*name, text.as_bytes()))
        .collect();
    build_zip_raw(&raw, CompressionMethod::Deflated)
}

/// Builds a ZIP archive from `(name, bytes)` pairs with the given method.
pub fn build_zip_raw(entries: &[(&str, &[u8])], method: CompressionMethod) -> Vec<u8> {
    let options = SimpleFileOptions::default().compression_method(method);
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in entries {
        writer.start_file(*name, options).expect("start entry");
        writer.write_all(bytes).expect("write entry");
    }
    writer.finish().expect("finish zip").into_inner()
}

/// Reads every entry of an archive into `(name, bytes)` pairs, in order.
pub fn read_all(archive: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut zip = ZipArchive::new(Cursor::new(archive)).expect("valid zip");
    (0..zip.len())
        .map(|i| {
            let mut file = zip.by_index(i).expect("entry");
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes).expect("read entry");
            (file.name().to_string(), bytes)
        })
        .collect()
}

/// A typical three-entry upload: primary, sidecar, and an unrelated file.
pub fn sample_upload() -> Vec<u8> {
    build_zip(&[
        ("analysis_pack.json", r#"{"metadata":{}}"#),
        ("metadata.json", "{}"),
        ("notes/readme.txt", "unrelated"),
    ])
}
