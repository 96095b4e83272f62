use bijux_portal_model::{ParsedTime, Timestamp};

pub const TBD: &str = "TBD";

const TIME_FORMAT: &str = "%b %-d, %-I:%M %p";
const DATE_FORMAT: &str = "%b %-d, %Y";

/// Clock label such as `Aug 26, 1:45 AM`, in the timestamp's own offset.
///
/// Calendar dates render as `Aug 26, 2025`; text that never parsed is
/// shown verbatim so the reader still sees what the manifest says.
#[must_use]
pub fn time_label(ts: Option<&Timestamp>) -> String {
    let Some(ts) = ts else {
        return TBD.to_string();
    };
    match ts.parsed() {
        ParsedTime::Zoned(dt) => dt.format(TIME_FORMAT).to_string(),
        ParsedTime::Local(dt) => dt.format(TIME_FORMAT).to_string(),
        ParsedTime::Date(d) => d.format(DATE_FORMAT).to_string(),
        _ => verbatim(ts),
    }
}

/// Calendar label such as `Aug 24, 2025`; date-times drop their clock.
#[must_use]
pub fn date_label(ts: Option<&Timestamp>) -> String {
    let Some(ts) = ts else {
        return TBD.to_string();
    };
    match ts.parsed() {
        ParsedTime::Zoned(dt) => dt.format(DATE_FORMAT).to_string(),
        ParsedTime::Local(dt) => dt.format(DATE_FORMAT).to_string(),
        ParsedTime::Date(d) => d.format(DATE_FORMAT).to_string(),
        _ => verbatim(ts),
    }
}

fn verbatim(ts: &Timestamp) -> String {
    let raw = ts.raw().trim();
    if raw.is_empty() {
        TBD.to_string()
    } else {
        raw.to_string()
    }
}

pub(crate) fn text_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

pub(crate) fn type_badge(kind: &str) -> String {
    let kind = kind.trim();
    if kind.is_empty() {
        "FILE".to_string()
    } else {
        kind.to_ascii_uppercase()
    }
}
