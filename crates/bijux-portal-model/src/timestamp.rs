use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which shapes a manifest field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimestampForm {
    DateTime,
    DateOrDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParsedTime {
    /// Carries an explicit offset; labels render in that offset.
    Zoned(DateTime<FixedOffset>),
    /// Wall-clock time with no offset; rendered as written.
    Local(NaiveDateTime),
    Date(NaiveDate),
    Unparsed,
}

/// A manifest timestamp: the raw text plus whatever could be parsed from it.
///
/// Parsing never fails. Text that matches no accepted shape is kept as
/// [`ParsedTime::Unparsed`] so it can still be displayed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    raw: String,
    parsed: ParsedTime,
}

impl Timestamp {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let raw = input.trim().to_string();
        let parsed = parse_time(&raw);
        Self { raw, parsed }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn parsed(&self) -> &ParsedTime {
        &self.parsed
    }

    #[must_use]
    pub fn is_valid_for(&self, form: TimestampForm) -> bool {
        match (&self.parsed, form) {
            (ParsedTime::Zoned(_) | ParsedTime::Local(_), _) => true,
            (ParsedTime::Date(_), TimestampForm::DateOrDateTime) => true,
            (ParsedTime::Date(_), TimestampForm::DateTime) | (ParsedTime::Unparsed, _) => false,
        }
    }
}

fn parse_time(raw: &str) -> ParsedTime {
    if raw.is_empty() {
        return ParsedTime::Unparsed;
    }
    if let Ok(zoned) = DateTime::parse_from_rfc3339(raw) {
        return ParsedTime::Zoned(zoned);
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(raw, format) {
            return ParsedTime::Local(local);
        }
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => ParsedTime::Date(date),
        Err(_) => ParsedTime::Unparsed,
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}
