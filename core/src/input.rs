/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use email_address::EmailAddress;
use std::collections::HashSet;

use super::consts::*;
use super::error::{ServiceError, ServiceResult};

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

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> ServiceResult<()> {
    if EmailAddress::is_valid(email) {
        Ok(())
    } else {
        Err(ServiceError::Validation("Invalid email".to_string()))
    }
}

pub fn validate_password(password: &str) -> ServiceResult<()> {
    let length = password.chars().count();

    if length < *PASSWORD_LENGTH.start() {
        return Err(ServiceError::Validation(format!(
            "Password must be at least {} characters long",
            PASSWORD_LENGTH.start()
        )));
    }

    if length > *PASSWORD_LENGTH.end() {
        return Err(ServiceError::Validation(format!(
            "Password cannot exceed {} characters",
            PASSWORD_LENGTH.end()
        )));
    }

    Ok(())
}

pub fn require_field(value: &str, field: &str) -> ServiceResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ServiceError::Validation(format!("{} is required", field)));
    }

    Ok(value.to_string())
}

/// Trims every name, drops empty ones and collapses duplicates while keeping
/// the first occurrence in place.
pub fn clean_names<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();

    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .filter(|n| seen.insert(n.clone()))
        .collect()
}

pub fn encode_photos(photos: &[String]) -> ServiceResult<String> {
    serde_json::to_string(photos)
        .map_err(|e| ServiceError::Internal(format!("Failed to encode photos: {}", e)))
}

pub fn decode_photos(photos: &str) -> Vec<String> {
    if photos.trim().is_empty() {
        return Vec::new();
    }

    serde_json::from_str(photos).unwrap_or_else(|e| {
        tracing::warn!("Stored photo list is not valid JSON: {}", e);
        Vec::new()
    })
}

/// Lower-cased `LIKE` pattern matching `query` anywhere, with `\` as escape.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');

    for c in query.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}
