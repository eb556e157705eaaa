//! Tag ("field") naming rules.

/// Prefix applied to every in-memory field id.
pub const FIELD_ID_PREFIX: &str = "f-";

/// Derive the deterministic field id for a tag name.
///
/// The id depends only on the lowercased name, so `"AI"` and `"ai"` share
/// the id `f-ai`.
///
/// ```
/// use investo_core::fields::field_id_for;
/// assert_eq!(field_id_for("FinTech"), "f-fintech");
/// ```
pub fn field_id_for(name: &str) -> String {
    format!("{FIELD_ID_PREFIX}{}", name.to_lowercase())
}
