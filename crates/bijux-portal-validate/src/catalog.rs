use bijux_portal_model::{
    Finding, FindingKind, Policy, PolicyCatalog, Project, TimestampForm, Validated,
    ValidationReport,
};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::evaluation::{
    evaluate_required_fields, index_location, join_location, POLICY_REQUIRED_FIELDS,
};
use crate::project::{file_type_matches, validate_project};
use crate::raw::{FieldReader, Object};

/// Validates a policy catalog document.
///
/// Accepts either a top-level list of policies or a mapping with a
/// `policies` list. A repeated id is fatal: no catalog is produced and the
/// report is returned as the error.
pub fn validate_policy_catalog(raw: &Value) -> Result<Validated<PolicyCatalog>, ValidationReport> {
    let mut report = ValidationReport::new();
    let entries: &[Value] = match raw {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("policies") {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => &[],
            Some(_) => {
                report.record(
                    FindingKind::UnexpectedShape,
                    "policies",
                    "policy catalog `policies` must be a list",
                );
                return Err(report);
            }
        },
        _ => {
            report.record(
                FindingKind::UnexpectedShape,
                "(root)",
                "policy catalog must be a list or a mapping with a `policies` list",
            );
            return Err(report);
        }
    };

    let mut policies: IndexMap<String, Policy> = IndexMap::new();
    for (i, entry) in entries.iter().enumerate() {
        let location = index_location("policies", i);
        let Some(object) = entry.as_object() else {
            report.record(
                FindingKind::UnexpectedShape,
                location,
                "policy entry must be a mapping",
            );
            continue;
        };
        evaluate_required_fields(entry, POLICY_REQUIRED_FIELDS, &location, &mut report);
        let policy = {
            let mut reader = FieldReader::new(&mut report);
            read_policy(&mut reader, object, &location)
        };
        if policy.id.is_empty() {
            continue;
        }
        if policies.contains_key(&policy.id) {
            report.record(
                FindingKind::DuplicateId,
                join_location(&location, "id"),
                format!("policy id `{}` appears more than once", policy.id),
            );
            continue;
        }
        policies.insert(policy.id.clone(), policy);
    }

    if report.has_fatal() {
        return Err(report);
    }
    let catalog = PolicyCatalog::from_policies(policies.into_values()).map_err(|err| {
        let mut failed = report.clone();
        failed.record(FindingKind::DuplicateId, "policies", err.to_string());
        failed
    })?;
    debug!(
        policies = catalog.len(),
        findings = report.len(),
        "validated policy catalog"
    );
    Ok(Validated::new(catalog, report))
}

fn read_policy(reader: &mut FieldReader<'_>, entry: &Object, prefix: &str) -> Policy {
    let policy = Policy {
        id: reader.text(entry, "id", prefix).unwrap_or_default(),
        title: reader.text(entry, "title", prefix).unwrap_or_default(),
        description: reader.text(entry, "description", prefix),
        kind: reader.text(entry, "type", prefix).unwrap_or_default(),
        path: reader.text(entry, "path", prefix),
        last_updated: reader.timestamp(
            entry,
            "last_updated",
            prefix,
            TimestampForm::DateOrDateTime,
        ),
    };
    if let Some(path) = policy.path.as_deref() {
        if !policy.kind.is_empty() {
            if let Err(message) = file_type_matches(&policy.kind, path) {
                reader.report().record(
                    FindingKind::TypeMismatch,
                    join_location(prefix, "path"),
                    message,
                );
            }
        }
    }
    policy
}

/// Validated projects keyed by id, in load order. Each entry remembers its
/// position in the batch it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectIndex {
    entries: IndexMap<String, (usize, Project)>,
}

impl ProjectIndex {
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.entries.get(id).map(|(_, project)| project)
    }

    /// Batch position of `id`, matching the `projects[i]` finding prefix.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.get(id).map(|(position, _)| *position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.entries.values().map(|(_, project)| project)
    }

    /// `(batch position, project)` pairs in load order.
    pub fn positioned(&self) -> impl Iterator<Item = (usize, &Project)> {
        self.entries
            .values()
            .map(|(position, project)| (*position, project))
    }
}

/// Validates a batch of project manifests loaded together.
///
/// Each project's findings are reported under `projects[i]`. A project id
/// repeated within the batch is fatal. Projects without an id are validated
/// but left out of the index.
pub fn validate_project_batch(
    raws: &[Value],
    catalog: &PolicyCatalog,
) -> Result<Validated<ProjectIndex>, ValidationReport> {
    let mut report = ValidationReport::new();
    let mut entries: IndexMap<String, (usize, Project)> = IndexMap::new();
    for (i, raw) in raws.iter().enumerate() {
        let prefix = index_location("projects", i);
        let (project, findings) = match validate_project(raw, catalog) {
            Ok(validated) => (Some(validated.value), validated.report),
            Err(findings) => (None, findings),
        };
        for finding in findings.iter() {
            report.push(Finding::new(
                finding.kind,
                nest_location(&prefix, &finding.location),
                finding.message.clone(),
            ));
        }
        let Some(project) = project else {
            continue;
        };
        if project.id.is_empty() {
            continue;
        }
        if entries.contains_key(&project.id) {
            report.record(
                FindingKind::DuplicateId,
                join_location(&prefix, "id"),
                format!("project id `{}` appears more than once", project.id),
            );
            continue;
        }
        entries.insert(project.id.clone(), (i, project));
    }

    if report.has_fatal() {
        return Err(report);
    }
    debug!(
        projects = entries.len(),
        findings = report.len(),
        "validated project batch"
    );
    Ok(Validated::new(ProjectIndex { entries }, report))
}

fn nest_location(prefix: &str, location: &str) -> String {
    match location {
        "" | "(root)" => prefix.to_string(),
        other => join_location(prefix, other),
    }
}
