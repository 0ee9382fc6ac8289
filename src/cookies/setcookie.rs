use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime};

use crate::cookies::header::append_same_site;
use crate::useragent;

/// Default cookie path.
pub const ROOT_PATH: &str = "/";

/// Legacy cookie `Expires` date format, always rendered in GMT.
const OLD_COOKIE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day]-[month repr:short]-[year] [hour]:[minute]:[second] GMT"
);

/// `SameSite` cookie directive.
/// Naming follows Chromium's `net::CookieSameSite`; `NoRestriction`
/// renders as `SameSite=None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    #[default]
    Unspecified,
    NoRestriction,
    Lax,
    Strict,
}

impl SameSite {
    /// The directive value as rendered on the wire, if any.
    pub fn as_str(self) -> Option<&'static str> {
        match self {
            SameSite::Unspecified => None,
            SameSite::NoRestriction => Some("None"),
            SameSite::Lax => Some("Lax"),
            SameSite::Strict => Some("Strict"),
        }
    }
}

/// `Priority` cookie attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CookiePriority {
    Low,
    Medium,
    High,
}

impl CookiePriority {
    pub fn as_str(self) -> &'static str {
        match self {
            CookiePriority::Low => "Low",
            CookiePriority::Medium => "Medium",
            CookiePriority::High => "High",
        }
    }
}

/// Cookie header format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CookieVersion {
    /// Original Netscape format (version 0): `Set-Cookie` with a legacy
    /// `Expires` date.
    #[default]
    Netscape,
    /// RFC 2109 format (version 1): `Set-Cookie2` with `Version=1`,
    /// `Max-Age`, and `Discard`.
    Rfc2109,
}

/// A `Set-Cookie` descriptor.
///
/// One transient value: construct it, render it to a header string, and
/// discard it. Rendering never fails; absent optional attributes are
/// simply omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: String,
    /// Lifetime in seconds. `None` or a negative value means a session
    /// cookie; `0` renders the fixed expired timestamp
    /// `Thu, 01-Jan-1970 00:00:10 GMT`.
    pub max_age: Option<i64>,
    pub secure: bool,
    pub http_only: bool,
    pub priority: Option<CookiePriority>,
    pub same_site: SameSite,
    pub version: CookieVersion,
    /// RFC 2109 `Comment` attribute; ignored in the Netscape rendering.
    pub comment: Option<String>,
}

impl SetCookie {
    /// Create a new builder.
    #[inline]
    pub fn builder(name: impl Into<String>, value: impl Into<String>) -> SetCookieBuilder {
        SetCookieBuilder {
            cookie: SetCookie {
                name: name.into(),
                value: value.into(),
                domain: None,
                path: ROOT_PATH.to_string(),
                max_age: None,
                secure: false,
                http_only: false,
                priority: None,
                same_site: SameSite::Unspecified,
                version: CookieVersion::Netscape,
                comment: None,
            },
        }
    }

    /// Descriptor that deletes the named cookie on the client: empty
    /// value, max-age 0, `HttpOnly`.
    pub fn removal(name: impl Into<String>) -> SetCookieBuilder {
        Self::builder(name, "").max_age(0).http_only(true)
    }

    /// Response header name for this descriptor.
    pub fn header_name(&self) -> &'static str {
        match self.version {
            CookieVersion::Netscape => "Set-Cookie",
            CookieVersion::Rfc2109 => "Set-Cookie2",
        }
    }

    /// Render the header value, with `Expires` computed against the
    /// current time.
    pub fn header_value(&self) -> String {
        self.header_value_at(OffsetDateTime::now_utc())
    }

    /// Render the header value with `Expires` computed against `now`.
    pub fn header_value_at(&self, now: OffsetDateTime) -> String {
        self.render(now, self.same_site)
    }

    /// Render the header value for a specific client, withholding
    /// `SameSite=None` from user agents known to mishandle it. `Lax` and
    /// `Strict` directives are never withheld.
    pub fn header_value_for_agent(&self, user_agent: &str) -> String {
        self.header_value_for_agent_at(user_agent, OffsetDateTime::now_utc())
    }

    /// [`header_value_for_agent`](Self::header_value_for_agent) with an
    /// explicit clock.
    pub fn header_value_for_agent_at(&self, user_agent: &str, now: OffsetDateTime) -> String {
        let same_site = if self.same_site == SameSite::NoRestriction
            && !useragent::should_send_same_site_none(user_agent)
        {
            tracing::debug!(user_agent = %user_agent, "withholding SameSite=None");
            SameSite::Unspecified
        } else {
            self.same_site
        };
        self.render(now, same_site)
    }

    fn render(&self, now: OffsetDateTime, same_site: SameSite) -> String {
        let mut buf = String::new();

        buf.push_str(&self.name);
        buf.push('=');
        push_maybe_quoted(&mut buf, &self.value);

        if self.version == CookieVersion::Rfc2109 {
            // Version=1 ... required
            buf.push_str("; Version=1");

            if let Some(comment) = &self.comment {
                buf.push_str("; Comment=");
                self.push_attribute(&mut buf, comment);
            }
        }

        if let Some(domain) = &self.domain {
            buf.push_str("; Domain=");
            self.push_attribute(&mut buf, domain);
        }

        // Max-Age=secs/Discard ... or the old "Expires" format
        match (self.max_age, self.version) {
            (Some(secs), CookieVersion::Netscape) if secs >= 0 => {
                buf.push_str("; Expires=");
                let expires = if secs == 0 {
                    OffsetDateTime::UNIX_EPOCH + Duration::seconds(10)
                } else {
                    now + Duration::seconds(secs)
                };
                buf.push_str(&format_expires(expires));
            }
            (Some(secs), CookieVersion::Rfc2109) if secs >= 0 => {
                buf.push_str("; Max-Age=");
                buf.push_str(&secs.to_string());
            }
            (_, CookieVersion::Rfc2109) => buf.push_str("; Discard"),
            _ => {}
        }

        buf.push_str("; Path=");
        self.push_attribute(&mut buf, &self.path);

        if self.secure {
            buf.push_str("; Secure");
        }

        if self.http_only {
            buf.push_str("; HttpOnly");
        }

        if let Some(priority) = self.priority {
            buf.push_str("; Priority=");
            buf.push_str(priority.as_str());
        }

        match same_site {
            SameSite::Unspecified => buf,
            directive => append_same_site(&buf, directive),
        }
    }

    // Attribute values (Domain, Path, Comment) are quoted only in the
    // RFC 2109 rendering; the Netscape format writes them raw.
    fn push_attribute(&self, buf: &mut String, value: &str) {
        match self.version {
            CookieVersion::Netscape => buf.push_str(value),
            CookieVersion::Rfc2109 => push_maybe_quoted(buf, value),
        }
    }
}

/// Builder for [`SetCookie`].
#[derive(Debug, Clone)]
#[must_use]
pub struct SetCookieBuilder {
    cookie: SetCookie,
}

impl SetCookieBuilder {
    /// Set the `Domain` attribute.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.cookie.domain = Some(domain.into());
        self
    }

    /// Set the `Path` attribute (default `/`).
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.cookie.path = path.into();
        self
    }

    /// Set the lifetime in seconds. Negative values mean a session
    /// cookie, as does never calling this.
    pub fn max_age(mut self, seconds: i64) -> Self {
        self.cookie.max_age = Some(seconds);
        self
    }

    /// Set the `Secure` flag.
    pub fn secure(mut self, secure: bool) -> Self {
        self.cookie.secure = secure;
        self
    }

    /// Set the `HttpOnly` flag.
    pub fn http_only(mut self, http_only: bool) -> Self {
        self.cookie.http_only = http_only;
        self
    }

    /// Set the `Priority` attribute.
    pub fn priority(mut self, priority: CookiePriority) -> Self {
        self.cookie.priority = Some(priority);
        self
    }

    /// Request a `SameSite` directive.
    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.cookie.same_site = same_site;
        self
    }

    /// Select the header format (default Netscape `Set-Cookie`).
    pub fn version(mut self, version: CookieVersion) -> Self {
        self.cookie.version = version;
        self
    }

    /// Set the RFC 2109 `Comment` attribute.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.cookie.comment = Some(comment.into());
        self
    }

    /// Build the descriptor.
    pub fn build(self) -> SetCookie {
        self.cookie
    }
}

fn format_expires(t: OffsetDateTime) -> String {
    t.format(OLD_COOKIE_FORMAT).unwrap_or_default()
}

/// RFC 2068 token separators, plus space and tab.
fn is_separator(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | '<'
            | '>'
            | '@'
            | ','
            | ';'
            | ':'
            | '\\'
            | '"'
            | '/'
            | '['
            | ']'
            | '?'
            | '='
            | '{'
            | '}'
            | ' '
            | '\t'
    )
}

/// Whether the string counts as an HTTP/1.1 "token": printable ASCII
/// (0x20-0x7E) with no separator characters.
fn is_token(value: &str) -> bool {
    value
        .chars()
        .all(|c| ('\x20'..'\x7f').contains(&c) && !is_separator(c))
}

fn push_maybe_quoted(buf: &mut String, value: &str) {
    if is_token(value) {
        buf.push_str(value);
    } else {
        buf.push('"');
        buf.push_str(value);
        buf.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const CHROME_85: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                             (KHTML, like Gecko) Chrome/85.0.4183.0 Safari/537.36";
    const IOS_12: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 12_0 like Mac OS X) \
                          AppleWebKit/605.1.15 (KHTML, like Gecko) Version/12.0 \
                          Mobile/15E148 Safari/604.1";

    #[test]
    fn test_minimal_render() {
        let cookie = SetCookie::builder("key", "value").build();
        assert_eq!(cookie.header_value(), "key=value; Path=/");
        assert_eq!(cookie.header_name(), "Set-Cookie");
    }

    #[test]
    fn test_all_attributes() {
        let cookie = SetCookie::builder("USER_COOKIE", "DE719787")
            .domain("example.com")
            .path("/app")
            .secure(true)
            .http_only(true)
            .priority(CookiePriority::High)
            .build();
        assert_eq!(
            cookie.header_value(),
            "USER_COOKIE=DE719787; Domain=example.com; Path=/app; Secure; HttpOnly; Priority=High"
        );
    }

    #[test]
    fn test_value_with_separator_is_quoted() {
        let cookie = SetCookie::builder("key", "a value").build();
        assert_eq!(cookie.header_value(), "key=\"a value\"; Path=/");

        let cookie = SetCookie::builder("key", "a\tb").build();
        assert_eq!(cookie.header_value(), "key=\"a\tb\"; Path=/");

        let cookie = SetCookie::builder("key", "a=b").build();
        assert_eq!(cookie.header_value(), "key=\"a=b\"; Path=/");
    }

    #[test]
    fn test_non_ascii_value_is_quoted() {
        let cookie = SetCookie::builder("key", "héllo").build();
        assert_eq!(cookie.header_value(), "key=\"héllo\"; Path=/");
    }

    #[test]
    fn test_token_value_unquoted() {
        let cookie = SetCookie::builder("key", "plain-token_1.2!").build();
        assert_eq!(cookie.header_value(), "key=plain-token_1.2!; Path=/");
    }

    #[test]
    fn test_empty_value() {
        let cookie = SetCookie::builder("key", "").build();
        assert_eq!(cookie.header_value(), "key=; Path=/");
    }

    #[test]
    fn test_max_age_zero_renders_expired_sentinel() {
        let cookie = SetCookie::builder("key", "value").max_age(0).build();
        assert_eq!(
            cookie.header_value(),
            "key=value; Expires=Thu, 01-Jan-1970 00:00:10 GMT; Path=/"
        );
    }

    #[test]
    fn test_max_age_renders_absolute_expires() {
        let now = datetime!(2020-05-05 12:00:00 UTC);
        let cookie = SetCookie::builder("key", "value").max_age(3600).build();
        assert_eq!(
            cookie.header_value_at(now),
            "key=value; Expires=Tue, 05-May-2020 13:00:00 GMT; Path=/"
        );
    }

    #[test]
    fn test_negative_max_age_is_session() {
        let cookie = SetCookie::builder("key", "value").max_age(-1).build();
        assert_eq!(cookie.header_value(), "key=value; Path=/");
    }

    #[test]
    fn test_rfc2109_render() {
        let cookie = SetCookie::builder("key", "value")
            .version(CookieVersion::Rfc2109)
            .max_age(60)
            .build();
        assert_eq!(cookie.header_name(), "Set-Cookie2");
        assert_eq!(
            cookie.header_value(),
            "key=value; Version=1; Max-Age=60; Path=\"/\""
        );
    }

    #[test]
    fn test_rfc2109_session_renders_discard() {
        let cookie = SetCookie::builder("key", "value")
            .version(CookieVersion::Rfc2109)
            .comment("demo")
            .build();
        assert_eq!(
            cookie.header_value(),
            "key=value; Version=1; Comment=demo; Discard; Path=\"/\""
        );
    }

    #[test]
    fn test_same_site_rendered_last() {
        let cookie = SetCookie::builder("key", "value")
            .secure(true)
            .same_site(SameSite::Lax)
            .build();
        assert_eq!(cookie.header_value(), "key=value; Path=/; Secure; SameSite=Lax");
    }

    #[test]
    fn test_same_site_none_withheld_for_buggy_webkit() {
        let cookie = SetCookie::builder("key", "value")
            .secure(true)
            .same_site(SameSite::NoRestriction)
            .build();
        assert_eq!(
            cookie.header_value_for_agent(IOS_12),
            "key=value; Path=/; Secure"
        );
        assert_eq!(
            cookie.header_value_for_agent(CHROME_85),
            "key=value; Path=/; Secure; SameSite=None"
        );
    }

    #[test]
    fn test_same_site_strict_never_withheld() {
        let cookie = SetCookie::builder("key", "value")
            .same_site(SameSite::Strict)
            .build();
        assert_eq!(
            cookie.header_value_for_agent(IOS_12),
            "key=value; Path=/; SameSite=Strict"
        );
    }

    #[test]
    fn test_same_site_none_withheld_for_blank_agent() {
        let cookie = SetCookie::builder("key", "value")
            .same_site(SameSite::NoRestriction)
            .build();
        assert_eq!(cookie.header_value_for_agent(""), "key=value; Path=/");
    }

    #[test]
    fn test_removal_descriptor() {
        let cookie = SetCookie::removal("session").domain("example.com").build();
        assert_eq!(
            cookie.header_value(),
            "session=; Domain=example.com; Expires=Thu, 01-Jan-1970 00:00:10 GMT; Path=/; HttpOnly"
        );
    }
}
