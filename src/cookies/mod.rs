//! Cookie descriptor, header encoding, and request-side lookup.
//!
//! This module renders `Set-Cookie` / `Set-Cookie2` header values from a
//! [`SetCookie`](setcookie::SetCookie) descriptor and provides the header
//! predicates used when appending a `SameSite` directive.
//!
//! # Architecture
//!
//! | Original (servlet container)   | cookienet (Rust)                      | Responsibility |
//! |--------------------------------|---------------------------------------|----------------|
//! | `Cookie` + `addCookie` overloads | [`SetCookie`](setcookie::SetCookie) builder | Cookie descriptor |
//! | `getCookieHeaderValue`         | [`SetCookie::header_value`](setcookie::SetCookie::header_value) | Header rendering |
//! | `appendSameSite`               | [`append_same_site`](header::append_same_site) | SameSite append |
//! | `getCookieValue`               | [`cookie_value`](request::cookie_value) | Request lookup |
//!
//! # Rendering a header
//!
//! ```rust
//! use cookienet::cookies::setcookie::{CookiePriority, SetCookie};
//!
//! let cookie = SetCookie::builder("USER_COOKIE", "DE719787")
//!     .secure(true)
//!     .http_only(true)
//!     .priority(CookiePriority::High)
//!     .build();
//!
//! assert_eq!(
//!     cookie.header_value(),
//!     "USER_COOKIE=DE719787; Path=/; Secure; HttpOnly; Priority=High"
//! );
//! ```

pub mod header;
pub mod request;
pub mod setcookie;
