/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use atelier_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("8080").unwrap();
    assert_eq!(port, 8080);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("http").unwrap_err();
    assert_eq!(port, "`http` is not a port number");
}

#[test]
fn test_greater_than_zero() {
    let num = greater_than_zero::<u32>("1").unwrap();
    assert_eq!(num, 1);

    let num = greater_than_zero::<usize>("0").unwrap_err();
    assert_eq!(num, "`0` is not larger than 0");

    let num = greater_than_zero::<u32>("-1").unwrap_err();
    assert_eq!(num, "`-1` is not a valid number");

    let num = greater_than_zero::<i32>("-1").unwrap_err();
    assert_eq!(num, "`-1` is not larger than 0");
}

#[test]
fn test_check_required() {
    assert!(check_required("Title", "Villa Savoye").is_ok());
    assert_eq!(check_required("Title", "").unwrap_err(), "Title is required");
    assert_eq!(check_required("Title", "   \t").unwrap_err(), "Title is required");
}

#[test]
fn test_normalize_optional() {
    assert_eq!(normalize_optional(None), None);
    assert_eq!(normalize_optional(Some("  ".to_string())), None);
    assert_eq!(
        normalize_optional(Some(" cover.jpg ".to_string())),
        Some("cover.jpg".to_string())
    );
}

#[test]
fn test_validate_email() {
    assert!(validate_email("careers@atelier.example").is_ok());
    assert!(validate_email(" applicant@example.com ").is_ok());
    assert!(validate_email("not-an-email").is_err());
    assert!(validate_email("").is_err());
}

#[test]
fn test_validate_image_name() {
    assert!(validate_image_name("facade-01.webp").is_ok());
    assert!(validate_image_name("1712345678-render.png").is_ok());

    assert_eq!(
        validate_image_name("").unwrap_err(),
        "Image name cannot be empty"
    );
    assert_eq!(
        validate_image_name("uploads/a.png").unwrap_err(),
        "Image name cannot contain path separators"
    );
    assert_eq!(
        validate_image_name("..\\a.png").unwrap_err(),
        "Image name cannot contain path separators"
    );
    assert_eq!(
        validate_image_name("..png").unwrap_err(),
        "Image name cannot contain '..'"
    );
    assert!(validate_image_name(&"a".repeat(256)).is_err());
}

#[test]
fn test_validate_video_link() {
    assert!(validate_video_link("https://www.youtube.com/watch?v=abc").is_ok());
    assert!(validate_video_link("http://vimeo.com/123").is_ok());
    assert!(validate_video_link("ftp://files.example.com/a.mp4").is_err());
    assert!(validate_video_link("youtube").is_err());
}

#[test]
fn test_validate_numbers() {
    assert!(validate_vacancies(1).is_ok());
    assert!(validate_vacancies(0).is_err());
    assert!(validate_vacancies(-3).is_err());

    assert!(validate_count(0).is_ok());
    assert!(validate_count(250).is_ok());
    assert!(validate_count(-1).is_err());
}

#[test]
fn test_validate_password() {
    assert!(validate_password("Sketchbook42").is_ok());
    assert!(validate_password("short1A").is_err());
    assert!(validate_password("alllowercase1").is_err());
    assert!(validate_password("NoDigitsHere").is_err());
    assert!(validate_password(&format!("Aa1{}", "x".repeat(130))).is_err());
}

#[test]
fn test_load_secret() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jwt");
    std::fs::write(&path, "  s3cret\n").unwrap();

    assert_eq!(load_secret(path.to_str().unwrap()), "s3cret");
    assert_eq!(load_secret("/nonexistent/secret/file"), "");
}
