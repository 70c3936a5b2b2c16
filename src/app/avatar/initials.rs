/// Shown when no usable display name exists.
pub const DEFAULT_INITIALS: &str = "SB";

/// Derives up to two uppercase characters from a display name.
///
/// One token yields its first two characters; several tokens yield the first
/// character of the first and last token. Blank or missing names fall back to
/// [`DEFAULT_INITIALS`]. Total function, never fails.
pub fn initials(name: Option<&str>) -> String {
    let trimmed = match name {
        Some(name) => name.trim(),
        None => return DEFAULT_INITIALS.to_owned(),
    };

    if trimmed.is_empty() {
        return DEFAULT_INITIALS.to_owned();
    }

    let mut parts = trimmed.split_whitespace();
    let first_token = parts.next().unwrap_or_default();
    let last_token = parts.next_back();

    let first = first_token.chars().next();
    let second = match last_token {
        Some(last) => last.chars().next(),
        None => first_token.chars().nth(1),
    };

    first
        .into_iter()
        .chain(second)
        .collect::<String>()
        .to_uppercase()
}
