use crate::utils::error::{AppError, Result};
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AppError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Dates travel as `YYYY-MM-DD` text; the store matches them exactly,
/// so an unpadded date would validate but then match nothing. The
/// parser accepts `2024-5-1`, hence the round-trip check against the
/// canonical rendering.
pub fn validate_date(field_name: &str, date: &str) -> Result<()> {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) if parsed.format("%Y-%m-%d").to_string() == date => Ok(()),
        Ok(_) => Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: date.to_string(),
            reason: "Expected zero-padded YYYY-MM-DD".to_string(),
        }),
        Err(e) => Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: date.to_string(),
            reason: format!("Expected YYYY-MM-DD: {}", e),
        }),
    }
}

pub fn validate_minimum(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AppError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}
