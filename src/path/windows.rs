use super::resolve_segments;

fn is_sep(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Split `path` into its prefix (drive or UNC share), whether it is rooted, and the rest.
fn split_root(path: &str) -> (&str, bool, &str) {
    if let Some(unc) = unc_root_len(path) {
        return (&path[..unc], true, &path[unc..]);
    }
    if path.starts_with(is_sep) {
        return ("", true, path);
    }
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        let rest = &path[2..];
        return (&path[..2], rest.starts_with(is_sep), rest);
    }
    ("", false, path)
}

/// Length of a `\\server\share` prefix, if `path` starts with one.
fn unc_root_len(path: &str) -> Option<usize> {
    let rest = path
        .strip_prefix(['\\', '/'])?
        .strip_prefix(['\\', '/'])?;
    if rest.starts_with(is_sep) {
        return None;
    }
    let server = rest.find(is_sep)?;
    if server == 0 {
        return None;
    }
    let after_server = &rest[server..];
    let share_start = after_server.len() - after_server.trim_start_matches(is_sep).len();
    let share = &after_server[share_start..];
    let share_len = share.find(is_sep).unwrap_or(share.len());
    if share_len == 0 {
        return None;
    }
    Some(2 + server + share_start + share_len)
}

pub(super) fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_owned();
    }
    let (prefix, rooted, rest) = split_root(path);
    let trailing = rest.ends_with(is_sep);

    let mut tail = resolve_segments(rest.split(is_sep), rooted).join("\\");
    if tail.is_empty() && !rooted {
        tail.push('.');
    }
    if !tail.is_empty() && trailing {
        tail.push('\\');
    }

    let mut normalized = prefix.replace('/', "\\");
    if rooted {
        normalized.push('\\');
    }
    normalized.push_str(&tail);
    normalized
}

pub(super) fn join(segments: &[&str]) -> String {
    let mut parts = segments.iter().copied().filter(|segment| !segment.is_empty());
    let Some(first) = parts.next() else {
        return ".".to_owned();
    };
    let mut joined = first.to_owned();
    for part in parts {
        joined.push('\\');
        joined.push_str(part);
    }

    // Only the first segment may introduce a UNC root.
    if unc_root_len(first).is_none() && !looks_like_unc(first) {
        let stripped = joined.trim_start_matches(is_sep);
        if joined.len() - stripped.len() >= 2 {
            joined = format!("\\{stripped}");
        }
    }
    normalize(&joined)
}

/// `\\server` without a share still counts as a UNC start when joining.
fn looks_like_unc(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), Some(c)) if is_sep(a) && is_sep(b) && !is_sep(c)
    )
}
