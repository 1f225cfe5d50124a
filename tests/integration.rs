//! Integration tests for stripjpg.

use std::fs;
use std::path::Path;
use std::process::Command;
use stripjpg::cli::Config;
use stripjpg::jpeg::{StripOptions, jfif, strip};
use stripjpg::processor::Processor;
use stripjpg::{Error, JpegError};
use tempfile::tempdir;

mod helpers {
    //! Test helpers for building JPEG byte streams.

    /// Append a segment with a correct length field.
    pub fn segment(out: &mut Vec<u8>, code: u8, body: &[u8]) {
        out.extend_from_slice(&[0xFF, code]);
        out.extend_from_slice(&((body.len() + 2) as u16).to_be_bytes());
        out.extend_from_slice(body);
    }

    /// A progressive-style JPEG with metadata before and between scans.
    pub fn create_jpeg_with_metadata() -> Vec<u8> {
        let mut data = vec![0xFF, 0xD8];
        segment(&mut data, 0xE0, b"JFIF\x00\x01\x01\x00\x00\x48\x00\x48\x00\x00");
        segment(&mut data, 0xE1, b"Exif\x00\x00GPS 51.5N 0.1W");
        segment(&mut data, 0xE2, b"ICC_PROFILE\x00\x01\x01sRGB");
        segment(&mut data, 0xDB, &[0x00; 65]);
        segment(&mut data, 0xC2, &[0x08, 0x00, 0x02, 0x00, 0x02, 0x01, 0x01, 0x11, 0x00]);
        segment(&mut data, 0xC4, &[0x00; 17]);
        segment(&mut data, 0xDD, &[0x00, 0x02]);
        segment(&mut data, 0xDA, &[0x01, 0x01, 0x00, 0x00, 0x00, 0x00]);
        data.extend_from_slice(&[0x12, 0xFF, 0x00, 0x34, 0xFF, 0xD0, 0x56]);
        segment(&mut data, 0xFE, b"edited with something");
        segment(&mut data, 0xC4, &[0x10; 17]);
        segment(&mut data, 0xDA, &[0x01, 0x01, 0x00, 0x01, 0x3F, 0x00]);
        data.extend_from_slice(&[0x78, 0xFF, 0xD7, 0x9A]);
        data.extend_from_slice(&[0xFF, 0xD9]);
        data
    }

    pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }
}

use helpers::{contains, create_jpeg_with_metadata};

#[test]
fn test_strip_keeps_image_segments_in_order() {
    let data = create_jpeg_with_metadata();
    let result = strip(data.clone(), StripOptions::default()).unwrap();

    assert!(result.data.starts_with(&[0xFF, 0xD8]));
    assert!(result.data.ends_with(&[0xFF, 0xD9]));
    assert_eq!(&result.data[2..20], &jfif::APP0_SEGMENT);
    assert_eq!(result.segments_removed, 4);

    assert!(!contains(&result.data, b"GPS"));
    assert!(!contains(&result.data, b"ICC_PROFILE"));
    assert!(!contains(&result.data, b"edited"));
    assert!(contains(&result.data, &[0x12, 0xFF, 0x00, 0x34, 0xFF, 0xD0, 0x56]));
    assert!(contains(&result.data, &[0x78, 0xFF, 0xD7, 0x9A]));

    let positions: Vec<usize> = [0xDB, 0xC2, 0xC4, 0xDD, 0xDA]
        .into_iter()
        .map(|code| {
            result
                .data
                .windows(2)
                .position(|w| w == [0xFF, code])
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_strip_is_idempotent() {
    let options = StripOptions { jfif: false };
    let once = strip(create_jpeg_with_metadata(), options).unwrap().data;
    let twice = strip(once.clone(), options).unwrap().data;
    assert_eq!(once, twice);
}

#[test]
fn test_strip_rejects_non_jpeg() {
    assert_eq!(
        strip(Vec::new(), StripOptions::default()).unwrap_err(),
        JpegError::NotAJpeg
    );
    assert_eq!(
        strip(b"\x89PNG\r\n\x1a\n".to_vec(), StripOptions::default()).unwrap_err(),
        JpegError::NotAJpeg
    );
}

#[test]
fn test_strip_truncated_scan() {
    let mut data = create_jpeg_with_metadata();
    data.truncate(data.len() - 2);
    assert!(matches!(
        strip(data, StripOptions::default()),
        Err(JpegError::TruncatedFile { .. })
    ));
}

#[test]
fn test_processor_creates_stripped_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("photo.jpg");
    fs::write(&input, create_jpeg_with_metadata()).unwrap();

    let config = Config::parse(["stripjpg", "-q", input.to_str().unwrap()]).unwrap();
    let stats = Processor::new(config).run();
    assert_eq!(stats.processed, 1);
    assert_eq!(stats.failed, 0);

    let clean = fs::read(dir.path().join("photo.stripped.jpg")).unwrap();
    assert!(!contains(&clean, b"GPS"));
    assert!(contains(&fs::read(&input).unwrap(), b"GPS"));
}

#[test]
fn test_processor_numbers_repeated_runs() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("photo.jpg");
    fs::write(&input, create_jpeg_with_metadata()).unwrap();

    for _ in 0..3 {
        let config = Config::parse(["stripjpg", "-q", input.to_str().unwrap()]).unwrap();
        Processor::new(config).run();
    }

    assert!(dir.path().join("photo.stripped.jpg").exists());
    assert!(dir.path().join("photo.stripped1.jpg").exists());
    assert!(dir.path().join("photo.stripped2.jpg").exists());
}

#[test]
fn test_processor_overwrite_without_jfif() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("photo.jpg");
    fs::write(&input, create_jpeg_with_metadata()).unwrap();

    let config =
        Config::parse(["stripjpg", "-q", "-o", "--no-jfif", input.to_str().unwrap()]).unwrap();
    let stats = Processor::new(config).run();
    assert_eq!(stats.processed, 1);

    let clean = fs::read(&input).unwrap();
    assert!(!contains(&clean, &[0xFF, 0xE0]));
    assert!(!contains(&clean, b"GPS"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_processor_failure_leaves_no_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.jpg");
    let mut data = create_jpeg_with_metadata();
    data.truncate(40);
    fs::write(&input, &data).unwrap();

    let config = Config::parse(["stripjpg", "-q", input.to_str().unwrap()]).unwrap();
    let stats = Processor::new(config).run();
    assert_eq!(stats.failed, 1);
    assert!(!dir.path().join("broken.stripped.jpg").exists());
}

#[test]
fn test_missing_file_error() {
    let dir = tempdir().unwrap();
    let config = Config::default();
    let err = stripjpg::processor::process_file(&dir.path().join("nope.jpg"), &config)
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

fn stripjpg_bin() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_stripjpg"));
    command.env("NO_COLOR", "1");
    command
}

#[test]
fn test_binary_without_arguments_prints_usage() {
    let output = stripjpg_bin().output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage"));
    assert!(stdout.contains(".stripped"));
}

#[test]
fn test_binary_exit_code_is_failure_count() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.jpg");
    let bad = dir.path().join("bad.jpg");
    fs::write(&good, create_jpeg_with_metadata()).unwrap();
    fs::write(&bad, b"not a jpeg").unwrap();
    let missing = dir.path().join("missing.jpg");

    let output = stripjpg_bin()
        .arg(&good)
        .arg(&bad)
        .arg(&missing)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("good.jpg: success"));
    assert!(stderr.contains("bad.jpg: not a JPEG file"));
    assert!(stderr.contains("missing.jpg: file not found"));
    assert!(Path::new(&dir.path().join("good.stripped.jpg")).exists());
}
