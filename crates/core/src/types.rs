//! Primitive aliases and the `'T'`/`'F'` flag encoding used by post-it rows.

/// Primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Stored value of a set flag (`pinned`, `completed`).
pub const FLAG_SET: &str = "T";

/// Stored value of a cleared flag.
pub const FLAG_CLEAR: &str = "F";

/// Encode a boolean as the single-character flag stored in the database.
pub fn flag_from_bool(value: bool) -> &'static str {
    if value {
        FLAG_SET
    } else {
        FLAG_CLEAR
    }
}

/// Decode a stored flag. Anything other than `"T"` (case-insensitive) is false.
pub fn flag_to_bool(flag: &str) -> bool {
    flag.eq_ignore_ascii_case(FLAG_SET)
}

/// Interpret an HTML checkbox value. Browsers send `"on"` for a ticked box
/// and omit the field otherwise.
pub fn checkbox_checked(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v.eq_ignore_ascii_case("on") || v.eq_ignore_ascii_case("true"))
}
