//! Request-side `Cookie` header lookup.

use cookie::Cookie;

/// Find a cookie by name in a request `Cookie` header.
///
/// Unparseable pairs are skipped; a blank header or name yields `None`.
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<Cookie<'a>> {
    if header.trim().is_empty() || name.trim().is_empty() {
        return None;
    }
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
}

/// The value of the named cookie in a request `Cookie` header.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    find_cookie(header, name).map(|cookie| cookie.value().to_string())
}
