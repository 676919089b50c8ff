/// Strip leading and trailing slashes. Used for comparison only.
pub fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

/// Drop any query string or fragment from a request path.
pub fn strip_query(path: &str) -> &str {
    match path.find(['?', '#']) {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Absolute href for a route under a base path.
///
/// The root route of a plugin links to the base path itself.
pub fn join(base_path: &str, route_path: &str) -> String {
    let base = normalize(base_path);
    let route = normalize(route_path);
    match (base.is_empty(), route.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", route),
        (false, true) => format!("/{}", base),
        (false, false) => format!("/{}/{}", base, route),
    }
}
