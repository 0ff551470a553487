use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Improvement {
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub current: Option<String>,
    #[serde(default)]
    pub suggested: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Typed view of the report shape the advisory prompt asks for. Every field
/// is optional; anything else the model returns lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiFeedback {
    #[serde(default)]
    pub color_scheme: Option<BTreeMap<String, String>>,

    #[serde(default)]
    pub improvements: Option<Vec<Improvement>>,

    #[serde(default)]
    pub animations: Option<Vec<String>>,

    #[serde(default)]
    pub typography: Option<BTreeMap<String, String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// What the advisory step produced. Serializes to exactly the JSON the model
/// returned, or to `{"raw": ..}` when it returned no JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum AdvisoryReport {
    Structured { feedback: UiFeedback, document: Value },
    /// Valid JSON that does not fit `UiFeedback`.
    Document(Value),
    Raw { raw: String },
}

impl AdvisoryReport {
    /// Classifies an already-parsed JSON value.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return AdvisoryReport::Document(value);
        }
        match UiFeedback::deserialize(&value) {
            Ok(feedback) => AdvisoryReport::Structured {
                feedback,
                document: value,
            },
            Err(_) => AdvisoryReport::Document(value),
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, AdvisoryReport::Raw { .. })
    }

    pub fn feedback(&self) -> Option<&UiFeedback> {
        match self {
            AdvisoryReport::Structured { feedback, .. } => Some(feedback),
            _ => None,
        }
    }
}

impl Serialize for AdvisoryReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AdvisoryReport::Structured { document, .. } => document.serialize(serializer),
            AdvisoryReport::Document(value) => value.serialize(serializer),
            AdvisoryReport::Raw { raw } => json!({ "raw": raw }).serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(report: &AdvisoryReport) -> Value {
        serde_json::to_value(report).unwrap()
    }

    #[test]
    fn recognized_fields_are_typed() {
        let v = json!({
            "colorScheme": { "primary": "#0b3d2e", "accent": "#d4af37" },
            "improvements": [
                {
                    "area": "menu",
                    "current": "bg-gray-800",
                    "suggested": "bg-emerald-900",
                    "reason": "felt"
                }
            ],
            "animations": ["deal cards"],
            "typography": { "headings": "serif" }
        });
        let report = AdvisoryReport::from_value(v.clone());
        let f = report.feedback().unwrap();
        assert_eq!(f.improvements.as_ref().map(Vec::len), Some(1));
        assert_eq!(f.animations.as_deref(), Some(&["deal cards".to_string()][..]));
        assert!(f.extra.is_empty());
        assert_eq!(saved(&report), v);
    }

    #[test]
    fn saved_report_keeps_the_model_json_verbatim() {
        let v = json!({
            "colorScheme": null,
            "improvements": [
                { "area": "menu", "priority": "high", "suggested": "bg-emerald-900" }
            ],
            "notes": "ship it"
        });
        let report = AdvisoryReport::from_value(v.clone());

        let f = report.feedback().unwrap();
        assert!(f.color_scheme.is_none());
        let first = &f.improvements.as_ref().unwrap()[0];
        assert_eq!(first.area.as_deref(), Some("menu"));
        assert!(first.current.is_none());
        assert_eq!(first.extra.get("priority"), Some(&json!("high")));
        assert_eq!(f.extra.get("notes"), Some(&json!("ship it")));

        assert_eq!(saved(&report), v);
    }

    #[test]
    fn unknown_fields_survive() {
        let report = AdvisoryReport::from_value(json!({ "a": 1 }));
        assert!(report.feedback().is_some());
        assert_eq!(saved(&report), json!({ "a": 1 }));
    }

    #[test]
    fn mismatched_shape_is_kept_as_document() {
        let v = json!({ "improvements": "make it pop" });
        assert_eq!(AdvisoryReport::from_value(v.clone()), AdvisoryReport::Document(v.clone()));
        assert_eq!(saved(&AdvisoryReport::Document(v.clone())), v);

        let v = json!([1, 2, 3]);
        assert_eq!(AdvisoryReport::from_value(v.clone()), AdvisoryReport::Document(v));
    }

    #[test]
    fn raw_serializes_as_object() {
        let r = AdvisoryReport::Raw { raw: "nope".into() };
        assert_eq!(saved(&r), json!({ "raw": "nope" }));
        assert!(r.is_raw());
    }
}
