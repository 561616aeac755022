use crate::utils::error::{CarscopeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CarscopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CarscopeError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CarscopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CarscopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_price_bounds(field_name: &str, floor: u32, ceiling: u32) -> Result<()> {
    if floor > ceiling {
        return Err(CarscopeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..{}", floor, ceiling),
            reason: "Price floor cannot exceed price ceiling".to_string(),
        });
    }
    Ok(())
}
