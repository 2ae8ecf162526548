/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use email_address::EmailAddress;
use url::Url;

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

pub fn load_secret(f: &str) -> String {
    let s = std::fs::read_to_string(f).unwrap_or_default();
    s.trim().replace(char::from(25), "")
}

/// Rejects empty or whitespace-only values of a required field.
pub fn check_required(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }

    Ok(())
}

/// Trims an optional text field and drops it when nothing is left.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if !EmailAddress::is_valid(email.trim()) {
        return Err(format!("`{}` is not a valid email address", email));
    }

    Ok(())
}

/// Image and document names are stored relative to the asset base URL.
pub fn validate_image_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Image name cannot be empty".to_string());
    }

    if name.len() > MAX_IMAGE_NAME_LENGTH {
        return Err(format!(
            "Image name cannot exceed {} characters",
            MAX_IMAGE_NAME_LENGTH
        ));
    }

    if name.contains('/') || name.contains('\\') {
        return Err("Image name cannot contain path separators".to_string());
    }

    if name.contains("..") {
        return Err("Image name cannot contain '..'".to_string());
    }

    if name.contains("://") {
        return Err("Image name must be relative to the asset URL".to_string());
    }

    Ok(())
}

pub fn validate_video_link(link: &str) -> Result<(), String> {
    let url = Url::parse(link).map_err(|_| format!("`{}` is not a valid URL", link))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err("Video link must use http or https".to_string());
    }

    Ok(())
}

pub fn validate_vacancies(vacancies: i32) -> Result<(), String> {
    if vacancies < 1 {
        return Err("Vacancies must be at least 1".to_string());
    }

    Ok(())
}

pub fn validate_count(count: i32) -> Result<(), String> {
    if count < 0 {
        return Err("Count cannot be negative".to_string());
    }

    Ok(())
}

/// Validates password strength requirements
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password cannot exceed 128 characters".to_string());
    }

    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !has_uppercase || !has_lowercase {
        return Err("Password must mix uppercase and lowercase letters".to_string());
    }

    if !has_digit {
        return Err("Password must contain at least one digit".to_string());
    }

    Ok(())
}
