/// Lower-cases `input` and collapses every run of characters outside
/// `[a-z0-9]` into a single `-`. Leading and trailing dashes are dropped.
///
/// `"Intro to Rust!"` becomes `"intro-to-rust"`.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c);
        } else {
            pending_dash = true;
        }
    }

    out
}

/// Picks the slug for a new record with id `new_id`.
///
/// A taken `base` gets `-<new_id>` appended. An empty `base` (a title with no
/// alphanumerics) falls back to `<prefix>-<new_id>`.
pub fn unique_slug<'a, I>(base: &str, prefix: &str, new_id: u64, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let existing: Vec<&str> = existing.into_iter().collect();
    let taken = |s: &str| existing.iter().any(|e| *e == s);

    let stem = if base.is_empty() {
        format!("{prefix}-{new_id}")
    } else if taken(base) {
        format!("{base}-{new_id}")
    } else {
        return base.to_string();
    };

    // Only reachable when someone hand-picked "<base>-<id>" earlier.
    let mut candidate = stem.clone();
    let mut n = 2;
    while taken(&candidate) {
        candidate = format!("{stem}-{n}");
        n += 1;
    }

    candidate
}
