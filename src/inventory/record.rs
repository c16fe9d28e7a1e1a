use serde_json::{Map, Value};

/// Inventory keys read by the rating engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DataClassification,
    BusinessCriticality,
    EmergencyTier,
    RecoveryTime,
    RecoveryPoint,
    ExternalUsers,
    InternalUsers,
    ExternalFacing,
    WafEnabled,
    RingFenced,
    EndOfLife,
    SecurityIssues,
    AppSecurityRating,
    Name,
    Portfolio,
}

impl Field {
    /// JSON key of this field in an application entry
    pub const fn key(self) -> &'static str {
        match self {
            Field::DataClassification => "dataClassification",
            Field::BusinessCriticality => "businessCriticality",
            Field::EmergencyTier => "emergencyTier",
            Field::RecoveryTime => "disasterRecoverRto",
            Field::RecoveryPoint => "disasterRecoverRpo",
            Field::ExternalUsers => "userImpactExternal",
            Field::InternalUsers => "userImpactInternal",
            Field::ExternalFacing => "externalFacing",
            Field::WafEnabled => "wafEnabled",
            Field::RingFenced => "applicationRingFenced",
            Field::EndOfLife => "existingEndOfLifeSystems",
            Field::SecurityIssues => "numberOfExistingSecurityIssues",
            Field::AppSecurityRating => "appSecurityRating",
            Field::Name => "businessApplicationName",
            Field::Portfolio => "portfolio",
        }
    }
}

/// One application entry from the inventory.
///
/// Borrows the decoded JSON object; no schema is enforced beyond string keys.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationRecord<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> ApplicationRecord<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Wrap a JSON value, or `None` when it is not an object
    pub fn from_value(value: &'a Value) -> Option<Self> {
        value.as_object().map(Self::new)
    }

    /// Raw value of a field. JSON `null` reads as absent.
    pub fn get(&self, field: Field) -> Option<&'a Value> {
        self.fields.get(field.key()).filter(|v| !v.is_null())
    }

    /// Text form of a scalar field (see [`value_text`])
    pub fn text(&self, field: Field) -> Option<String> {
        self.get(field).and_then(value_text)
    }
}

/// Render a scalar JSON value as text.
///
/// Numbers render in decimal and booleans as `true`/`false`. Arrays and
/// objects have no text form.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Whether a raw value counts as empty: absent, null, `""`, `false`, zero,
/// or an empty array/object.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(a)) => a.is_empty(),
        Some(Value::Object(o)) => o.is_empty(),
    }
}

/// Short echo of a raw value for audit output
pub fn describe(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "(absent)".to_string(),
        Some(Value::String(s)) => format!("'{}'", s),
        Some(other) => other.to_string(),
    }
}
