//! Session user identity.

/// Extracts the numeric user id from the session cookie's `twid` value.
///
/// The cookie carries `twid=u%3D<id>` (url-encoded `u=<id>`); some clients
/// store it already decoded. Returns `None` when the cookie has no usable
/// `twid`.
pub fn user_id_from_cookie(cookie: &str) -> Option<String> {
    let raw = cookie.split(';').find_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        (name == "twid").then(|| value.trim_matches('"').to_string())
    })?;

    let decoded = raw.replace("%3D", "=").replace("%3d", "=");
    let id = decoded.strip_prefix("u=").unwrap_or(&decoded);

    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        Some(id.to_string())
    } else {
        None
    }
}
