// Gitmoji lookup helpers.
// Resolves short codes and names against a loaded gitmoji list.

use std::borrow::Cow;

use crate::remote::Gitmoji;

/// Ensure a code has surrounding colons, e.g. `art` -> `:art:`.
pub fn normalize_code(code: &str) -> Cow<'_, str> {
    let code = code.trim();
    let bare = code.trim_matches(':');
    if bare.len() + 2 == code.len() && code.starts_with(':') && code.ends_with(':') {
        Cow::Borrowed(code)
    } else {
        Cow::Owned(format!(":{bare}:"))
    }
}

/// Find the entry for a code, with or without surrounding colons.
pub fn find_by_code<'a>(gitmoji: &'a [Gitmoji], code: &str) -> Option<&'a Gitmoji> {
    let code = normalize_code(code);
    gitmoji.iter().find(|g| g.code == code)
}

/// Find the entry with the given name.
pub fn find_by_name<'a>(gitmoji: &'a [Gitmoji], name: &str) -> Option<&'a Gitmoji> {
    gitmoji.iter().find(|g| g.name == name)
}
