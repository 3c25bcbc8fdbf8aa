//! Shared fixtures for protection tests.

#![allow(dead_code)]

use packguard_crypto::KdfParams;
use packguard_protect::{ProtectionConfig, ProtectionPolicy};
use std::io::{Cursor, Read, Write};
use tracing_subscriber::EnvFilter;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Cheap scrypt settings so property tests stay fast. Not interoperable
/// with download clients.
pub const FAST_KDF: KdfParams = KdfParams {
    cost: 16,
    block_size: 1,
    parallelization: 1,
    output_len: 32,
};

pub fn fast_policy() -> ProtectionPolicy {
    ProtectionPolicy::new(ProtectionConfig {
        kdf: FAST_KDF,
        ..ProtectionConfig::default()
    })
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("packguard_protect=debug,packguard_archive=debug"))
        .with_test_writer()
        .try_init();
}

/// Builds a ZIP archive from `(name, bytes)` pairs, in order.
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
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

pub fn entry_names(archive: &[u8]) -> Vec<String> {
    read_all(archive).into_iter().map(|(name, _)| name).collect()
}

/// The upload from the catalog's worked example: an `analysis_pack.json`
/// with empty metadata, an empty sidecar, and a stray file.
pub fn sample_upload() -> Vec<u8> {
    let primary: &[u8] = br#"{"metadata":{}}"#;
    let sidecar: &[u8] = b"{}";
    let notes: &[u8] = b"unrelated";
    build_zip(&[
        ("analysis_pack.json", primary),
        ("metadata.json", sidecar),
        ("notes/readme.txt", notes),
    ])
}

/// An upload whose primary entry was already sealed by the uploader.
pub fn pre_encrypted_upload() -> Vec<u8> {
    let envelope =
        packguard_crypto::encrypt_with_params(br#"{"metadata":{}}"#, "uploader", &FAST_KDF)
            .expect("seal");
    let sidecar: &[u8] = b"{}";
    build_zip(&[("pack.json", &envelope[..]), ("metadata.json", sidecar)])
}
