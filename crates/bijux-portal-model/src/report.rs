use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Severity {
    Warning,
    Fatal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum FindingKind {
    MissingField,
    UnresolvedPolicyReference,
    TypeMismatch,
    InvalidTimestamp,
    UnexpectedShape,
    IdFormat,
    DuplicateReference,
    BrokenLink,
    DuplicateId,
}

impl FindingKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::UnresolvedPolicyReference => "unresolved_policy_reference",
            Self::TypeMismatch => "type_mismatch",
            Self::InvalidTimestamp => "invalid_timestamp",
            Self::UnexpectedShape => "unexpected_shape",
            Self::IdFormat => "id_format",
            Self::DuplicateReference => "duplicate_reference",
            Self::BrokenLink => "broken_link",
            Self::DuplicateId => "duplicate_id",
        }
    }

    /// Only an ambiguous id blocks construction; everything else degrades.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::DuplicateId => Severity::Fatal,
            _ => Severity::Warning,
        }
    }
}

impl Display for FindingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    /// Dotted field path, e.g. `travel.flights[0].legs[1].depart_time`.
    pub location: String,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn new(kind: FindingKind, location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            location: location.into(),
            message: message.into(),
        }
    }
}

impl Display for Finding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    pub fn record(
        &mut self,
        kind: FindingKind,
        location: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.push(Finding::new(kind, location, message));
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.findings.extend(other.findings);
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    #[must_use]
    pub fn has_fatal(&self) -> bool {
        self.findings.iter().any(|f| f.severity == Severity::Fatal)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    #[must_use]
    pub fn count(&self, kind: FindingKind) -> usize {
        self.findings.iter().filter(|f| f.kind == kind).count()
    }

    #[must_use]
    pub fn counts_by_kind(&self) -> BTreeMap<FindingKind, usize> {
        let mut out = BTreeMap::new();
        for finding in &self.findings {
            *out.entry(finding.kind).or_insert(0) += 1;
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter()
    }

    /// Findings ordered by location then kind, for diffable output.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        self.findings
            .sort_by(|a, b| a.location.cmp(&b.location).then(a.kind.cmp(&b.kind)));
        self
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.findings.is_empty() {
            return write!(f, "no findings");
        }
        let mut first = true;
        for finding in &self.findings {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{finding}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// A normalized value together with the non-fatal findings raised while
/// building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T> {
    pub value: T,
    pub report: ValidationReport,
}

impl<T> Validated<T> {
    #[must_use]
    pub fn new(value: T, report: ValidationReport) -> Self {
        Self { value, report }
    }

    /// Drops the value when any finding was raised.
    pub fn into_clean(self) -> Result<T, ValidationReport> {
        if self.report.is_clean() {
            Ok(self.value)
        } else {
            Err(self.report)
        }
    }
}
