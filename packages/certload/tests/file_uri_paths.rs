//! Tests for `file://` URI normalization across path conventions

use certload::source::{PathStyle, SourceKind, classify_source, normalize_file_uri};
use std::path::PathBuf;

#[test]
fn test_posix_triple_slash_is_absolute() {
    assert_eq!(
        normalize_file_uri("file:///etc/cert.pem", PathStyle::Posix).as_deref(),
        Some("/etc/cert.pem")
    );
}

#[test]
fn test_posix_extra_slashes_collapse_to_one() {
    assert_eq!(
        normalize_file_uri("file:////etc/ssl//cert.pem", PathStyle::Posix).as_deref(),
        Some("/etc/ssl//cert.pem")
    );
}

#[test]
fn test_posix_host_form_becomes_relative() {
    assert_eq!(
        normalize_file_uri("file://certs/client.pem", PathStyle::Posix).as_deref(),
        Some("certs/client.pem")
    );
}

#[test]
fn test_posix_keeps_double_slash_remainder_absolute() {
    // UNC handling is Windows-only; POSIX strips and re-roots
    assert_eq!(
        normalize_file_uri("file:////server/share/cert.pem", PathStyle::Posix).as_deref(),
        Some("/server/share/cert.pem")
    );
}

#[test]
fn test_windows_unc_remainder_preserved() {
    assert_eq!(
        normalize_file_uri("file:////server/share/cert.pem", PathStyle::Windows).as_deref(),
        Some("//server/share/cert.pem")
    );
}

#[test]
fn test_windows_drive_letter_not_rooted() {
    assert_eq!(
        normalize_file_uri("file:///C:/certs/cert.pem", PathStyle::Windows).as_deref(),
        Some("C:/certs/cert.pem")
    );
}

#[test]
fn test_windows_rooted_path_without_drive() {
    assert_eq!(
        normalize_file_uri("file:///certs/cert.pem", PathStyle::Windows).as_deref(),
        Some("/certs/cert.pem")
    );
}

#[test]
fn test_windows_host_form_becomes_relative() {
    assert_eq!(
        normalize_file_uri("file://certs/cert.pem", PathStyle::Windows).as_deref(),
        Some("certs/cert.pem")
    );
}

#[test]
fn test_non_file_inputs_are_not_normalized() {
    for input in [
        "-----BEGIN CERTIFICATE-----",
        "https://example.test/cert.pem",
        "s3://bucket/cert.pem",
        "FILE:///etc/cert.pem",
        "/etc/cert.pem",
        "",
    ] {
        assert_eq!(normalize_file_uri(input, PathStyle::Posix), None, "{input}");
        assert_eq!(normalize_file_uri(input, PathStyle::Windows), None, "{input}");
    }
}

#[test]
fn test_classify_source() {
    assert_eq!(
        classify_source("file:///etc/cert.pem", PathStyle::Posix),
        SourceKind::File(PathBuf::from("/etc/cert.pem"))
    );
    assert_eq!(
        classify_source("http://example.test/cert.pem", PathStyle::Posix),
        SourceKind::Inline
    );
}

#[test]
fn test_native_style_matches_platform() {
    let expected = if cfg!(windows) {
        PathStyle::Windows
    } else {
        PathStyle::Posix
    };
    assert_eq!(PathStyle::native(), expected);
    assert_eq!(PathStyle::default(), expected);
}
