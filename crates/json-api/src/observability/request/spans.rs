//! Route templates for request spans.

/// Collapse caller-supplied path segments so promo requests group by route.
pub(super) fn route_template(method: &str, path: &str) -> String {
    let Some(segment) = path.trim_matches('/').strip_prefix("promos/") else {
        return path.to_owned();
    };

    if segment.is_empty() || segment.contains('/') {
        return path.to_owned();
    }

    if method.eq_ignore_ascii_case("DELETE") {
        "/promos/{code}".to_owned()
    } else {
        "/promos/{filter}".to_owned()
    }
}
