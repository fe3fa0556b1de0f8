//! Target filename derivation for pushed notes.

use chrono::NaiveDate;
use std::path::Path;

/// Characters the Jekyll content-naming convention disallows.
const DISALLOWED: [char; 2] = ['#', '?'];

/// Derive the target filename for a pushed note.
///
/// With `dated` off the source name passes through unchanged. With it on,
/// the extension is dropped, every `#` and `?` is removed, each maximal
/// whitespace run becomes a single hyphen (leading and trailing runs
/// included), and the result is composed as `{YYYY-MM-DD}-{title}.md`. The
/// output extension is `.md` regardless of the source extension.
///
/// `now` is the calendar date to prefix; callers pass the UTC date, which
/// near midnight can differ from the user's local date.
pub fn transform(source_name: &str, dated: bool, now: NaiveDate) -> String {
    if !dated {
        return source_name.to_string();
    }

    let title = Path::new(source_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(source_name);

    format!("{}-{}.md", now.format("%Y-%m-%d"), sanitize(title))
}

/// Remove disallowed characters, then collapse each whitespace run into one
/// hyphen. Runs separated only by disallowed characters merge.
fn sanitize(title: &str) -> String {
    let stripped: String = title.chars().filter(|c| !DISALLOWED.contains(c)).collect();

    let mut out = String::with_capacity(stripped.len());
    let mut in_run = false;
    for c in stripped.chars() {
        if c.is_whitespace() {
            in_run = true;
            continue;
        }
        if in_run {
            out.push('-');
            in_run = false;
        }
        out.push(c);
    }
    if in_run {
        out.push('-');
    }
    out
}
