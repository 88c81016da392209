use super::resolve_segments;

pub(super) fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_owned();
    }
    let absolute = path.starts_with('/');
    let trailing = path.ends_with('/');

    let mut tail = resolve_segments(path.split('/'), absolute).join("/");
    if tail.is_empty() && !absolute {
        tail.push('.');
    }
    if !tail.is_empty() && trailing {
        tail.push('/');
    }
    if absolute { format!("/{tail}") } else { tail }
}

pub(super) fn join(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");
    normalize(&joined)
}
