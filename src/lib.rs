//! # cookienet
//!
//! `Set-Cookie` header construction with legacy browser compatibility.
//!
//! `cookienet` renders HTTP cookie headers the way servlet containers did
//! for two decades, including the `Set-Cookie2` (RFC 2109) variant, the
//! legacy `Expires` GMT date format, and RFC 2068 token quoting. It also
//! classifies user agents that mishandle `SameSite=None`, following
//! Chromium's incompatible-clients guidance from the Chrome 80 rollout.
//!
//! ## Features
//!
//! - **Header Encoding**: `Set-Cookie` / `Set-Cookie2` rendering from a
//!   single descriptor struct with named optional fields
//! - **Legacy Dates**: `EEE, dd-MMM-yyyy HH:mm:ss GMT` `Expires` values
//!   for Netscape-format cookies
//! - **SameSite Classification**: detects the iOS 12 / macOS 10.14 WebKit
//!   bug and clients that drop unrecognized SameSite values
//!   (Chrome 51-66, old UC Browser)
//! - **Demo Service**: a minimal hyper-based web service exercising the
//!   library end to end
//!
//! ## Quick Start
//!
//! ```rust
//! use cookienet::cookies::setcookie::{SameSite, SetCookie};
//!
//! let cookie = SetCookie::builder("session", "DE719787")
//!     .secure(true)
//!     .http_only(true)
//!     .same_site(SameSite::NoRestriction)
//!     .build();
//!
//! // Renders `SameSite=None` only for clients that handle it.
//! let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
//!           (KHTML, like Gecko) Chrome/85.0.4183.0 Safari/537.36";
//! let header = cookie.header_value_for_agent(ua);
//! assert!(header.ends_with("SameSite=None"));
//! ```
//!
//! ## Modules
//!
//! - [`cookies`] - Cookie descriptor, header encoding, and request lookup
//! - [`useragent`] - SameSite compatibility classification
//! - [`serve`] - Demonstration web service
//!
//! ## Chromium References
//!
//! - SameSite incompatible clients: `chromium.org/updates/same-site/incompatible-clients`
//! - Cookie attribute handling: `net/cookies/cookie_util.cc`

pub mod cookies;
pub mod serve;
pub mod useragent;
