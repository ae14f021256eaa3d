/// Joins two URL parts so exactly one `/` separates them when either side has one,
/// and one is inserted when neither does.
pub fn join(first: &str, second: &str) -> String {
    match (first.ends_with('/'), second.starts_with('/')) {
        (true, true) => format!("{}{}", &first[..first.len() - 1], second),
        (false, false) => format!("{first}/{second}"),
        _ => format!("{first}{second}"),
    }
}

/// `base_url` + `api_path`, then the trailing segment when one is given.
pub fn assemble(base_url: &str, api_path: &str, trailing_segment: Option<&str>) -> String {
    let url = join(base_url, api_path);
    match trailing_segment {
        Some(trail) if !trail.is_empty() => join(&url, trail),
        _ => url,
    }
}
