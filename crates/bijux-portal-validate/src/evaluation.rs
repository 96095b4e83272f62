use bijux_portal_model::{FindingKind, ValidationReport};
use serde_json::Value;

#[derive(Debug, Clone, Copy)]
pub(crate) struct RequiredField {
    pub path: &'static str,
    pub message: &'static str,
}

pub(crate) const PROJECT_REQUIRED_FIELDS: &[RequiredField] = &[
    RequiredField {
        path: "id",
        message: "project id is required",
    },
    RequiredField {
        path: "title",
        message: "project title is required",
    },
    RequiredField {
        path: "store.address",
        message: "store address is required",
    },
];

pub(crate) const POLICY_REQUIRED_FIELDS: &[RequiredField] = &[
    RequiredField {
        path: "id",
        message: "policy id is required",
    },
    RequiredField {
        path: "title",
        message: "policy title is required",
    },
];

/// Records a `MissingField` finding for every rule whose path is absent,
/// null, or a blank string. `prefix` is prepended to reported locations.
pub(crate) fn evaluate_required_fields(
    root: &Value,
    rules: &[RequiredField],
    prefix: &str,
    report: &mut ValidationReport,
) {
    for rule in rules {
        let present = match field_path(root, rule.path) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        };
        if !present {
            report.record(
                FindingKind::MissingField,
                join_location(prefix, rule.path),
                rule.message,
            );
        }
    }
}

pub(crate) fn field_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut cur = root;
    for seg in path.split('.') {
        if seg.is_empty() {
            return None;
        }
        cur = cur.as_object()?.get(seg)?;
    }
    Some(cur)
}

pub(crate) fn join_location(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

pub(crate) fn index_location(prefix: &str, index: usize) -> String {
    format!("{prefix}[{index}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_and_null_required_fields_are_missing() {
        let raw = json!({"id": "  ", "title": null, "store": {"address": "4501 Hopyard Rd"}});
        let mut report = ValidationReport::new();
        evaluate_required_fields(&raw, PROJECT_REQUIRED_FIELDS, "", &mut report);
        let locations: Vec<&str> = report.iter().map(|f| f.location.as_str()).collect();
        assert_eq!(locations, vec!["id", "title"]);
    }

    #[test]
    fn nested_path_through_non_object_is_missing() {
        let raw = json!({"id": "A", "title": "B", "store": "somewhere"});
        let mut report = ValidationReport::new();
        evaluate_required_fields(&raw, PROJECT_REQUIRED_FIELDS, "", &mut report);
        assert_eq!(report.len(), 1);
        assert_eq!(report.findings[0].location, "store.address");
    }

    #[test]
    fn prefix_is_applied_to_locations() {
        let mut report = ValidationReport::new();
        evaluate_required_fields(&json!({}), POLICY_REQUIRED_FIELDS, "[3]", &mut report);
        let locations: Vec<&str> = report.iter().map(|f| f.location.as_str()).collect();
        assert_eq!(locations, vec!["[3].id", "[3].title"]);
    }
}
