use crate::server::error::{parse::ParseError, AppError};

/// Parses an article id from a path segment.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::ParseErr(InvalidId))` - The segment is not a 32-bit integer
pub fn parse_article_id(value: &str) -> Result<i32, AppError> {
    let result = value.parse::<i32>().map_err(|e| ParseError::InvalidId {
        value: value.to_string(),
        source: e,
    })?;

    Ok(result)
}
