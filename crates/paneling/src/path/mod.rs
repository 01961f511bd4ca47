/// Path utilities for route mounting and redirects
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

pub mod hierarchy;
pub use hierarchy::PanelHierarchy;

/// Resolves the route pattern a paneling route is mounted on
///
/// The pattern always ends with a wildcard so the router hands every
/// trailing segment to the resolver as the splat.
///
/// # Rules
///
/// - `None` or empty → `*`
/// - `*` → `*`
/// - ends with `*` → unchanged
/// - ends with `/` → append `*`
/// - otherwise → append `/*`
///
/// # Examples
///
/// ```
/// use paneling::path::resolve_route_path;
///
/// assert_eq!(resolve_route_path(None), "*");
/// assert_eq!(resolve_route_path(Some("/")), "/*");
/// assert_eq!(resolve_route_path(Some("/app")), "/app/*");
/// assert_eq!(resolve_route_path(Some("/app/")), "/app/*");
/// assert_eq!(resolve_route_path(Some("/app/*")), "/app/*");
/// ```
pub fn resolve_route_path(path: Option<&str>) -> Cow<'_, str> {
    match path {
        None | Some("") | Some("*") => Cow::Borrowed("*"),
        Some(p) if p.ends_with('*') => Cow::Borrowed(p),
        Some(p) if p.ends_with('/') => Cow::Owned(format!("{}*", p)),
        Some(p) => Cow::Owned(format!("{}/*", p)),
    }
}

/// Resolves the prefix that redirect targets are built on
///
/// # Rules
///
/// - `None` or empty → `/`
/// - `/` → `/`
/// - strip one trailing `*`
/// - ensure a leading `/`
/// - ensure a trailing `/`
///
/// # Examples
///
/// ```
/// use paneling::path::resolve_redirect_path;
///
/// assert_eq!(resolve_redirect_path(None), "/");
/// assert_eq!(resolve_redirect_path(Some("/")), "/");
/// assert_eq!(resolve_redirect_path(Some("paneling")), "/paneling/");
/// assert_eq!(resolve_redirect_path(Some("/app/*")), "/app/");
/// assert_eq!(resolve_redirect_path(Some("/app/")), "/app/");
/// ```
pub fn resolve_redirect_path(path: Option<&str>) -> Cow<'_, str> {
    let path = match path {
        None | Some("") | Some("/") => return Cow::Borrowed("/"),
        Some(p) => p,
    };

    let trimmed = path.strip_suffix('*').unwrap_or(path);

    // Fast path: already `/.../` (zero-copy)
    if trimmed.starts_with('/') && trimmed.ends_with('/') {
        return Cow::Borrowed(trimmed);
    }

    let mut result = String::with_capacity(trimmed.len() + 2);
    if !trimmed.starts_with('/') {
        result.push('/');
    }
    result.push_str(trimmed);
    if !result.ends_with('/') {
        result.push('/');
    }
    Cow::Owned(result)
}

/// Recovers the route prefix preceding all panel segments
///
/// Decodes the location (percent-encoding), then removes the first
/// occurrence of `/` + the joined splat. When the first splat element is
/// empty the matched path itself starts with a separator, so the leading
/// character of the location is left untouched.
///
/// Falls back to the raw location when it does not decode to UTF-8.
///
/// # Examples
///
/// ```
/// use paneling::path::base_url;
///
/// let splat = vec!["info".to_string()];
/// assert_eq!(base_url(&splat, "/base/info"), "/base");
/// assert_eq!(base_url(&splat, "/info"), "");
///
/// let splat = vec!["extra;a b".to_string()];
/// assert_eq!(base_url(&splat, "/app/extra;a%20b"), "/app");
/// ```
pub fn base_url(splat: &[String], location: &str) -> String {
    let decoded = urlencoding::decode(location).unwrap_or(Cow::Borrowed(location));
    let suffix = format!("/{}", splat.join("/"));

    match splat.first() {
        Some(first) if first.is_empty() => {
            let split = decoded.chars().next().map_or(0, char::len_utf8);
            let (head, rest) = decoded.split_at(split);
            format!("{}{}", head, rest.replacen(&suffix, "", 1))
        }
        _ => decoded.replacen(&suffix, "", 1),
    }
}

/// Joins a route prefix and a panel suffix, normalising the empty case to `/`
///
/// A `/` suffix stands for "no panel" and yields the prefix alone.
///
/// # Examples
///
/// ```
/// use paneling::path::join_panel_path;
///
/// assert_eq!(join_panel_path("/base", "info"), "/base/info");
/// assert_eq!(join_panel_path("/base", ""), "/base/");
/// assert_eq!(join_panel_path("/base", "/"), "/base");
/// assert_eq!(join_panel_path("", "/"), "/");
/// ```
pub fn join_panel_path(base: &str, suffix: &str) -> String {
    let joined = if suffix == "/" {
        base.to_string()
    } else {
        format!("{}/{}", base, suffix)
    };

    if joined.is_empty() {
        "/".to_string()
    } else {
        joined
    }
}
