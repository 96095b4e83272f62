/// `dress-code` → `Dress Code`, `site_lead` → `Site Lead`.
///
/// Each word keeps its first letter uppercased and the rest lowercased.
#[must_use]
pub fn humanize(value: &str) -> String {
    value
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Checks the recommended `ABC-2025-08-24` shape: 2-4 uppercase ASCII
/// letters, then a dash-separated 4/2/2 digit group.
#[must_use]
pub fn is_recommended_project_id(id: &str) -> bool {
    let parts: Vec<&str> = id.split('-').collect();
    let &[prefix, year, month, day] = parts.as_slice() else {
        return false;
    };
    let digits = |s: &str, n: usize| s.len() == n && s.chars().all(|c| c.is_ascii_digit());
    (2..=4).contains(&prefix.len())
        && prefix.chars().all(|c| c.is_ascii_uppercase())
        && digits(year, 4)
        && digits(month, 2)
        && digits(day, 2)
}
