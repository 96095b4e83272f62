//! Typed reads over a loosely-shaped manifest value.
//!
//! Every accessor is total: a wrong shape is recorded as a finding and the
//! field is treated as unset, so one pass collects every defect.

use bijux_portal_model::{FindingKind, Timestamp, TimestampForm, ValidationReport};
use serde_json::{Map, Value};

use crate::evaluation::{index_location, join_location};

pub(crate) type Object = Map<String, Value>;

pub(crate) struct FieldReader<'r> {
    report: &'r mut ValidationReport,
}

impl<'r> FieldReader<'r> {
    pub(crate) fn new(report: &'r mut ValidationReport) -> Self {
        Self { report }
    }

    pub(crate) fn report(&mut self) -> &mut ValidationReport {
        self.report
    }

    fn unexpected(&mut self, location: String, expected: &str, found: &Value) {
        self.report.record(
            FindingKind::UnexpectedShape,
            location,
            format!("expected {expected}, found {}", shape_name(found)),
        );
    }

    /// Child mapping at `key`; `None` when absent, null, or not a mapping.
    pub(crate) fn object<'v>(
        &mut self,
        parent: &'v Object,
        key: &str,
        prefix: &str,
    ) -> Option<&'v Object> {
        match parent.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::Object(map)) => Some(map),
            Some(other) => {
                self.unexpected(join_location(prefix, key), "a mapping", other);
                None
            }
        }
    }

    /// Sequence at `key`; empty when absent, null, or not a sequence.
    pub(crate) fn array<'v>(&mut self, parent: &'v Object, key: &str, prefix: &str) -> &'v [Value] {
        match parent.get(key) {
            None | Some(Value::Null) => &[],
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                self.unexpected(join_location(prefix, key), "a list", other);
                &[]
            }
        }
    }

    /// Each element of a sequence that is a mapping, with its location.
    pub(crate) fn objects<'v>(
        &mut self,
        parent: &'v Object,
        key: &str,
        prefix: &str,
    ) -> Vec<(String, &'v Object)> {
        let base = join_location(prefix, key);
        let mut out = Vec::new();
        for (i, item) in self.array(parent, key, prefix).iter().enumerate() {
            let location = index_location(&base, i);
            match item {
                Value::Object(map) => out.push((location, map)),
                other => self.unexpected(location, "a mapping", other),
            }
        }
        out
    }

    /// Scalar text at `key`. Numbers and booleans are stringified; blank
    /// strings count as unset.
    pub(crate) fn text(&mut self, parent: &Object, key: &str, prefix: &str) -> Option<String> {
        let value = parent.get(key)?;
        match scalar_text(value) {
            Some(text) if text.is_empty() => None,
            Some(text) => Some(text),
            None if value.is_null() => None,
            None => {
                self.unexpected(join_location(prefix, key), "text", value);
                None
            }
        }
    }

    /// Like [`Self::text`], but an unset value is a `MissingField`.
    pub(crate) fn required_text(&mut self, parent: &Object, key: &str, prefix: &str) -> String {
        if let Some(text) = self.text(parent, key, prefix) {
            return text;
        }
        if !matches!(parent.get(key), Some(v) if !v.is_null() && scalar_text(v).is_none()) {
            self.report.record(
                FindingKind::MissingField,
                join_location(prefix, key),
                format!("{key} is required"),
            );
        }
        String::new()
    }

    /// Text items of a sequence; blank items are dropped.
    pub(crate) fn text_list(&mut self, parent: &Object, key: &str, prefix: &str) -> Vec<String> {
        let base = join_location(prefix, key);
        let mut out = Vec::new();
        for (i, item) in self.array(parent, key, prefix).iter().enumerate() {
            match scalar_text(item) {
                Some(text) if text.is_empty() => {}
                Some(text) => out.push(text),
                None => self.unexpected(index_location(&base, i), "text", item),
            }
        }
        out
    }

    /// Like [`Self::text_list`] but every item keeps its position: blanks
    /// stay as empty strings and non-text items become empty after being
    /// reported. Used where the index itself is an identifier.
    pub(crate) fn indexed_text_list(
        &mut self,
        parent: &Object,
        key: &str,
        prefix: &str,
    ) -> Vec<String> {
        let base = join_location(prefix, key);
        let mut out = Vec::new();
        for (i, item) in self.array(parent, key, prefix).iter().enumerate() {
            match scalar_text(item) {
                Some(text) => out.push(text),
                None => {
                    self.unexpected(index_location(&base, i), "text", item);
                    out.push(String::new());
                }
            }
        }
        out
    }

    pub(crate) fn flag(&mut self, parent: &Object, key: &str, prefix: &str) -> bool {
        match parent.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                self.unexpected(join_location(prefix, key), "true or false", other);
                false
            }
        }
    }

    /// Timestamp at `key`. Unparsable text is kept opaque and reported.
    pub(crate) fn timestamp(
        &mut self,
        parent: &Object,
        key: &str,
        prefix: &str,
        form: TimestampForm,
    ) -> Option<Timestamp> {
        let raw = self.text(parent, key, prefix)?;
        let ts = Timestamp::parse(&raw);
        if !ts.is_valid_for(form) {
            let expected = match form {
                TimestampForm::DateOrDateTime => "a date or date-time",
                _ => "a date-time",
            };
            self.report.record(
                FindingKind::InvalidTimestamp,
                join_location(prefix, key),
                format!("`{raw}` is not {expected}"),
            );
        }
        Some(ts)
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Object {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be a mapping"),
        }
    }

    #[test]
    fn numbers_are_coerced_to_text() {
        let parent = obj(json!({"number": 2245, "open": true}));
        let mut report = ValidationReport::new();
        let mut reader = FieldReader::new(&mut report);
        assert_eq!(reader.text(&parent, "number", "store").as_deref(), Some("2245"));
        assert_eq!(reader.text(&parent, "open", "store").as_deref(), Some("true"));
        assert!(report.is_clean());
    }

    #[test]
    fn wrong_shape_is_reported_once_not_as_missing() {
        let parent = obj(json!({"name": ["a", "b"]}));
        let mut report = ValidationReport::new();
        let mut reader = FieldReader::new(&mut report);
        assert_eq!(reader.required_text(&parent, "name", "contacts.lead"), "");
        assert_eq!(report.len(), 1);
        assert_eq!(report.findings[0].kind, FindingKind::UnexpectedShape);
        assert_eq!(report.findings[0].location, "contacts.lead.name");
    }

    #[test]
    fn blank_required_text_is_missing() {
        let parent = obj(json!({"driver": "  "}));
        let mut report = ValidationReport::new();
        FieldReader::new(&mut report).required_text(&parent, "driver", "travel.carpool[0]");
        assert_eq!(report.findings[0].kind, FindingKind::MissingField);
    }

    #[test]
    fn text_list_skips_blank_and_reports_nested_values() {
        let parent = obj(json!({"riders": ["Ana", "", {"name": "Bo"}, 7]}));
        let mut report = ValidationReport::new();
        let riders = FieldReader::new(&mut report).text_list(&parent, "riders", "travel.carpool[0]");
        assert_eq!(riders, vec!["Ana".to_string(), "7".to_string()]);
        assert_eq!(report.len(), 1);
        assert_eq!(report.findings[0].location, "travel.carpool[0].riders[2]");
    }

    #[test]
    fn indexed_text_list_never_shifts_positions() {
        let parent = obj(json!({"required_actions": ["A", "", {"nested": true}, "D"]}));
        let mut report = ValidationReport::new();
        let actions = FieldReader::new(&mut report).indexed_text_list(&parent, "required_actions", "");
        assert_eq!(actions, vec!["A", "", "", "D"]);
        assert_eq!(report.len(), 1);
        assert_eq!(report.findings[0].location, "required_actions[2]");
        assert_eq!(report.findings[0].kind, FindingKind::UnexpectedShape);
    }

    #[test]
    fn invalid_timestamp_is_kept_and_reported() {
        let parent = obj(json!({"report_time": "YYYY-MM-DDTHH:MM:SS-07:00"}));
        let mut report = ValidationReport::new();
        let ts = FieldReader::new(&mut report)
            .timestamp(&parent, "report_time", "store", TimestampForm::DateTime)
            .expect("kept");
        assert_eq!(ts.raw(), "YYYY-MM-DDTHH:MM:SS-07:00");
        assert_eq!(report.findings[0].kind, FindingKind::InvalidTimestamp);
        assert_eq!(report.findings[0].location, "store.report_time");
    }
}
