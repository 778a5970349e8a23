//! The single domain entity and its mapping to object keys.

use serde_json::Value;

/// Suffix appended to a word to form its object key.
pub const KEY_SUFFIX: &str = ".txt";

/// A client-submitted, non-empty string.
///
/// A word is its own identity: the object key is the text plus
/// [`KEY_SUFFIX`] and the object body is the text itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word(String);

/// Why a submitted `word` field could not become a [`Word`].
#[derive(Debug, PartialEq, Eq)]
pub enum WordRejection {
    /// Absent, `null`, or any other falsy JSON value.
    Missing,
    /// Present and truthy but not a string.
    NotAString(&'static str),
}

impl Word {
    /// Returns `None` for the empty string.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        (!text.is_empty()).then_some(Self(text))
    }

    /// Interpret the `word` field of a submission.
    ///
    /// Falsy values (`null`, `""`, `false`, `0`, `[]`, `{}`) count as
    /// missing. Truthy values must be strings.
    pub fn from_field(value: Option<&Value>) -> Result<Self, WordRejection> {
        let Some(value) = value else {
            return Err(WordRejection::Missing);
        };
        if is_falsy(value) {
            return Err(WordRejection::Missing);
        }
        match value {
            Value::String(text) => Self::new(text.as_str()).ok_or(WordRejection::Missing),
            Value::Bool(_) => Err(WordRejection::NotAString("boolean")),
            Value::Number(_) => Err(WordRejection::NotAString("number")),
            Value::Array(_) => Err(WordRejection::NotAString("array")),
            Value::Object(_) => Err(WordRejection::NotAString("object")),
            Value::Null => Err(WordRejection::Missing),
        }
    }

    /// Recover a word from a listed key. A trailing [`KEY_SUFFIX`] is
    /// removed; keys without it come back unchanged.
    pub fn from_object_key(key: &str) -> String {
        key.strip_suffix(KEY_SUFFIX).unwrap_or(key).to_string()
    }

    pub fn object_key(&self) -> String {
        format!("{}{}", self.0, KEY_SUFFIX)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn object_key_appends_suffix() {
        let word = Word::new("hello").unwrap();
        assert_eq!(word.object_key(), "hello.txt");
        assert_eq!(word.as_str(), "hello");
    }

    #[test]
    fn empty_text_is_not_a_word() {
        assert!(Word::new("").is_none());
    }

    #[rstest]
    #[case::absent(None)]
    #[case::null(Some(json!(null)))]
    #[case::empty_string(Some(json!("")))]
    #[case::false_(Some(json!(false)))]
    #[case::zero(Some(json!(0)))]
    #[case::zero_float(Some(json!(0.0)))]
    #[case::empty_array(Some(json!([])))]
    #[case::empty_object(Some(json!({})))]
    fn falsy_fields_are_missing(#[case] value: Option<Value>) {
        assert_eq!(
            Word::from_field(value.as_ref()),
            Err(WordRejection::Missing)
        );
    }

    #[rstest]
    #[case::number(json!(42), "number")]
    #[case::boolean(json!(true), "boolean")]
    #[case::array(json!(["a"]), "array")]
    #[case::object(json!({"a": 1}), "object")]
    fn truthy_non_strings_are_rejected(#[case] value: Value, #[case] kind: &'static str) {
        assert_eq!(
            Word::from_field(Some(&value)),
            Err(WordRejection::NotAString(kind))
        );
    }

    #[test]
    fn strings_are_taken_verbatim() {
        let value = json!(" spaced out ");
        assert_eq!(
            Word::from_field(Some(&value)).unwrap().as_str(),
            " spaced out "
        );
    }

    #[rstest]
    #[case::plain("hello.txt", "hello")]
    #[case::no_suffix("notes", "notes")]
    #[case::inner_suffix("a.txt.b.txt", "a.txt.b")]
    #[case::only_suffix(".txt", "")]
    #[case::other_extension("image.png", "image.png")]
    fn strips_only_trailing_suffix(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(Word::from_object_key(key), expected);
    }
}
