use sea_orm::DbErr;

use crate::server::error::internal::InternalError;

/// Parses an enumerated value stored as text in the database.
///
/// Enumerations are persisted by their `SCREAMING_SNAKE_CASE` name. A value that no
/// longer maps onto a variant means the row was written by something other than this
/// application, so it is surfaced as a database type error rather than a client error.
///
/// # Arguments
/// - `column` - Table and column the value was read from, used in the error message
/// - `value` - The stored text
/// - `parse` - The enum's `parse` function
///
/// # Returns
/// - `Ok(T)` - Successfully parsed variant
/// - `Err(DbErr::Type)` - Value does not match any variant
pub fn parse_stored<T>(
    column: &'static str,
    value: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, DbErr> {
    parse(value).ok_or_else(|| {
        DbErr::Type(
            InternalError::UnknownEnumValue {
                column,
                value: value.to_string(),
            }
            .to_string(),
        )
    })
}
