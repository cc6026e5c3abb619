//! Web path manipulation.
//!
//! Pure functions shared by the normalizer and the URL finisher:
//! - Relative-reference joining with `..` collapsing
//! - Context-path stripping (canonical keys are context-independent)
//! - Single-separator domain/path joining

/// Join a relative reference onto the path of the page referencing it.
///
/// The last segment of `base` (the page itself) is dropped, then `..` and
/// `.` segments collapse. A reference that resolves above the site root
/// cannot be joined; it is returned combined but uncollapsed, as a
/// best-effort path for the caller to tolerate.
///
/// # Examples
/// ```
/// use cachebust::path::concat_web_path;
/// assert_eq!(concat_web_path("/app/pages/x.jsp", "../images/a.png"), "/app/images/a.png");
/// assert_eq!(concat_web_path("/pages/x.html", "img/b.png"), "/pages/img/b.png");
/// ```
pub fn concat_web_path(base: &str, relative: &str) -> String {
    let dir = match base.rfind('/') {
        Some(i) => &base[..=i],
        None => "",
    };
    let combined = format!("{dir}{relative}");
    collapse_dots(&combined).unwrap_or(combined)
}

/// Collapse `.` and `..` segments and redundant separators.
///
/// Returns `None` when a `..` segment would climb above the root.
pub fn collapse_dots(path: &str) -> Option<String> {
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s => segments.push(s),
        }
    }

    let joined = segments.join("/");
    Some(if absolute { format!("/{joined}") } else { joined })
}

/// Strip the context-path prefix so the canonical key is context-independent.
///
/// The prefix may appear anywhere in the joined path (the request URI
/// carries it); everything through its first occurrence is dropped.
///
/// # Examples
/// ```
/// use cachebust::path::strip_context_path;
/// assert_eq!(strip_context_path("/app/images/a.png", "/app"), "/images/a.png");
/// assert_eq!(strip_context_path("/images/a.png", ""), "/images/a.png");
/// ```
pub fn strip_context_path<'a>(path: &'a str, context_path: &str) -> &'a str {
    if context_path.is_empty() {
        return path;
    }
    match path.find(context_path) {
        Some(i) => &path[i + context_path.len()..],
        None => path,
    }
}

/// Join a domain or mapping prefix onto a path with exactly one separator.
///
/// # Examples
/// ```
/// use cachebust::path::join_paths;
/// assert_eq!(join_paths("static", "/images/a.png"), "static/images/a.png");
/// assert_eq!(join_paths("http://cdn.example.com/", "css/site.css"), "http://cdn.example.com/css/site.css");
/// ```
#[inline]
pub fn join_paths(prefix: &str, path: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Get the lowercase file extension of a web path, if any.
///
/// # Examples
/// ```
/// use cachebust::path::extension_of;
/// assert_eq!(extension_of("/images/logo.PNG"), Some("png".to_string()));
/// assert_eq!(extension_of("/images/logo"), None);
/// ```
pub fn extension_of(path: &str) -> Option<String> {
    let name = path.rsplit('/').next()?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
