//! Typed view over the backend's loosely-typed reply.
//!
//! Every optional piece of the reply resolves to a [`Field`]: absent (missing
//! or `null`), malformed (present with the wrong shape), or valid. Resolution
//! never fails; the formatters decide what each case looks like on screen.

use serde_json::{Map, Value};

/// A reply field after shape checking.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Missing from the payload, or `null`
    Absent,
    /// Present, but not the expected shape; keeps the raw value
    Malformed(Value),
    /// Present and well-formed
    Valid(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T: FromPayload> Field<T> {
    /// Resolve an optional raw value into a field.
    pub fn resolve(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Field::Absent,
            Some(raw) => match T::from_payload(raw) {
                Some(parsed) => Field::Valid(parsed),
                None => Field::Malformed(raw.clone()),
            },
        }
    }

    /// Resolve `key` of a JSON object.
    pub fn from_key(object: &Map<String, Value>, key: &str) -> Self {
        Self::resolve(object.get(key))
    }
}

impl<T> Field<T> {
    pub fn valid(&self) -> Option<&T> {
        match self {
            Field::Valid(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Field::Valid(_))
    }
}

impl Field<String> {
    /// The string if it is valid and non-empty; empty strings count as missing.
    pub fn non_empty(&self) -> Option<&str> {
        self.valid().map(String::as_str).filter(|s| !s.is_empty())
    }

    /// Text shown for this field when it is displayed raw.
    pub fn raw_text(&self) -> String {
        match self {
            Field::Absent => String::new(),
            Field::Malformed(raw) => display_value(raw),
            Field::Valid(text) => text.clone(),
        }
    }
}

impl Field<Vec<String>> {
    /// The list if it is valid and has at least one item.
    pub fn non_empty(&self) -> Option<&[String]> {
        self.valid().map(Vec::as_slice).filter(|items| !items.is_empty())
    }
}

/// Shape check from a raw JSON value.
pub trait FromPayload: Sized {
    fn from_payload(value: &Value) -> Option<Self>;
}

impl FromPayload for String {
    fn from_payload(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromPayload for Vec<String> {
    fn from_payload(value: &Value) -> Option<Self> {
        value.as_array().map(|items| items.iter().map(list_item).collect())
    }
}

/// Render any JSON value as display text.
///
/// Strings are shown without quotes, `null` as `null`, arrays as their items
/// joined with `,` (with `null` items left empty), objects as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(list_item).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Text of one list item; `null` items are empty.
fn list_item(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => display_value(other),
    }
}

/// `null`, `false`, `0`, and `""` do not count as set.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Structured clinical summary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryRecord {
    pub patient_name: Field<String>,
    pub symptoms: Field<Vec<String>>,
    pub diagnosis: Field<String>,
    pub treatment: Field<Vec<String>>,
    pub current_status: Field<String>,
    pub prognosis: Field<String>,
}

impl SummaryRecord {
    pub const KEYS: [&'static str; 6] =
        ["Patient_Name", "Symptoms", "Diagnosis", "Treatment", "Current_Status", "Prognosis"];

    /// Wire keys that are absent or mistyped.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.patient_name.is_valid(),
            self.symptoms.is_valid(),
            self.diagnosis.is_valid(),
            self.treatment.is_valid(),
            self.current_status.is_valid(),
            self.prognosis.is_valid(),
        ];

        Self::KEYS
            .iter()
            .zip(present)
            .filter(|(_, ok)| !ok)
            .map(|(key, _)| *key)
            .collect()
    }
}

impl FromPayload for SummaryRecord {
    fn from_payload(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            patient_name: Field::from_key(object, "Patient_Name"),
            symptoms: Field::from_key(object, "Symptoms"),
            diagnosis: Field::from_key(object, "Diagnosis"),
            treatment: Field::from_key(object, "Treatment"),
            current_status: Field::from_key(object, "Current_Status"),
            prognosis: Field::from_key(object, "Prognosis"),
        })
    }
}

/// One SOAP section: labeled values in the order the backend sent them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionRecord {
    entries: Vec<(String, String)>,
}

impl SectionRecord {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromPayload for SectionRecord {
    fn from_payload(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self { entries: object.iter().map(|(k, v)| (k.clone(), display_value(v))).collect() })
    }
}

/// The four SOAP sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SoapRecord {
    pub subjective: Field<SectionRecord>,
    pub objective: Field<SectionRecord>,
    pub assessment: Field<SectionRecord>,
    pub plan: Field<SectionRecord>,
}

impl FromPayload for SoapRecord {
    fn from_payload(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(Self {
            subjective: Field::from_key(object, "Subjective"),
            objective: Field::from_key(object, "Objective"),
            assessment: Field::from_key(object, "Assessment"),
            plan: Field::from_key(object, "Plan"),
        })
    }
}

/// Backend reply for one exchange.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConversationReply {
    /// Set when the backend reported a failure; all other fields are then ignored
    pub error: Option<String>,
    pub physician_reply: String,
    pub summary: Field<SummaryRecord>,
    pub sentiment: Field<String>,
    pub intent: Field<String>,
    pub soap_note: Field<SoapRecord>,
}

impl ConversationReply {
    /// Build a reply from a decoded JSON body.
    ///
    /// Fails only when the body is not a JSON object; individual fields of
    /// the wrong shape are kept as [`Field::Malformed`].
    pub fn from_value(value: &Value) -> crate::Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| crate::Error::Parse(format!("reply is not a JSON object: {}", value)))?;

        let error = object.get("error").filter(|v| is_truthy(v)).map(display_value);
        let physician_reply = Field::<String>::from_key(object, "physician_reply").raw_text();

        Ok(Self {
            error,
            physician_reply,
            summary: Field::from_key(object, "summary"),
            sentiment: Field::from_key(object, "sentiment"),
            intent: Field::from_key(object, "intent"),
            soap_note: Field::from_key(object, "soap_note"),
        })
    }

    /// Decode a raw body.
    pub fn from_json_str(body: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(&value)
    }
}
