/// Deterministic slug derivation used for events and news items.
///
/// Lowercase, trim, strip everything that is not a word character, a space
/// or a hyphen, collapse whitespace runs into single hyphens, then collapse
/// hyphen runs. "Summer Wine Festival!!" becomes "summer-wine-festival".
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped: String = lowered
        .trim()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut out = String::with_capacity(stripped.len());
    let mut last_was_hyphen = false;
    for c in stripped.chars() {
        let mapped = if c.is_whitespace() || c == '-' { '-' } else { c };
        if mapped == '-' {
            if !last_was_hyphen && !out.is_empty() {
                out.push('-');
            }
            last_was_hyphen = true;
        } else {
            out.push(mapped);
            last_was_hyphen = false;
        }
    }

    out.trim_end_matches('-').to_string()
}
