//! Field extraction shared by the search and profile handlers.
//!
//! Upstream records are loosely shaped: fields go missing, arrive as `null`,
//! or carry HTML entities. Everything here reads from a `serde_json::Value`
//! and never fails.

use serde_json::Value;

pub const DEFAULT_PICTURE: &str = "https://res.cloudinary.com/torre-technologies-co/image/upload/v1621443046/origin/starrgate/users/profile_default.jpg";

/// Returns the string at `key`, or `""` for missing, null and non-string values.
pub fn str_field<'a>(record: &'a Value, key: &str) -> &'a str {
    record.get(key).and_then(Value::as_str).unwrap_or("")
}

/// Decodes character references in `raw` the way an HTML5 parser does in text:
/// legacy names without `;`, Windows-1252 remapping of `&#x80;`..`&#x9F;`,
/// and U+FFFD for null or out-of-range code points.
pub fn decode_entities(raw: &str) -> String {
    htmlize::unescape(raw).into_owned()
}

/// `str_field` followed by entity decoding.
pub fn decoded_field(record: &Value, key: &str) -> String {
    decode_entities(str_field(record, key))
}

/// First non-empty of `picture` and `imageUrl`, else the default picture.
pub fn pick_picture(record: &Value) -> String {
    ["picture", "imageUrl"]
        .iter()
        .map(|key| str_field(record, key))
        .find(|url| !url.is_empty())
        .unwrap_or(DEFAULT_PICTURE)
        .to_string()
}
