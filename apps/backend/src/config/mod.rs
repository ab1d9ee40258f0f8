//! Environment-driven configuration.

pub mod channel;
pub mod db;
pub mod game;

use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Read `name` and parse it, falling back to `default` when unset or blank.
pub(crate) fn var_or<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<T>().map_err(|e| {
            AppError::config(format!("Environment variable '{name}' is invalid: {e}"))
        }),
        _ => Ok(default),
    }
}

/// Read an optional variable, parsing it when present.
pub(crate) fn opt_var<T>(name: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::config(format!("Environment variable '{name}' is invalid: {e}"))),
        _ => Ok(None),
    }
}
