pub mod category;
pub mod inventory;
pub mod product;

pub use category::*;
pub use inventory::*;
pub use product::*;

use crate::error::{AppError, AppResult};

/// Length check counted in chars, inclusive on both ends.
pub(crate) fn check_len(field: &str, value: &str, min: usize, max: usize) -> AppResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::Validation(format!(
            "{} must be between {} and {} characters (got {})",
            field, min, max, len
        )));
    }
    Ok(())
}

pub(crate) fn check_positive_id(field: &str, value: i64) -> AppResult<()> {
    if value <= 0 {
        return Err(AppError::Validation(format!("{} must be greater than 0", field)));
    }
    Ok(())
}

pub(crate) fn check_price(value: f64) -> AppResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Validation("price must be greater than 0".to_string()));
    }
    Ok(())
}
