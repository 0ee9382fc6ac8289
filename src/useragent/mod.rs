//! SameSite compatibility classification by user-agent sniffing.
//!
//! Some clients mishandle `SameSite=None`: WebKit on iOS 12 and
//! macOS 10.14 treats it as `SameSite=Strict`, and Chromium 51-66 (plus
//! old UC Browser) drops cookies with unrecognized `SameSite` values
//! outright. [`should_send_same_site_none`] decides whether the directive
//! is safe for a given client.
//!
//! Every predicate is a pure, stateless classification of a single
//! user-agent string; blank or unparseable input classifies as false.
//! Patterns are compiled once and are safe to use from any number of
//! concurrent callers.
//!
//! Modeled after Chromium's incompatible-clients guidance
//! (`chromium.org/updates/same-site/incompatible-clients`).

use once_cell::sync::Lazy;
use regex::Regex;

static IOS_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(iP.+; CPU .*OS (\d+)[_\d]*.*\) AppleWebKit/").expect("ios pattern"));

static MACOSX_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(Macintosh;.*Mac OS X (\d+)_(\d+)[_\d]*.*\) AppleWebKit/").expect("macosx pattern")
});

static SAFARI: Lazy<Regex> = Lazy::new(|| Regex::new(r"Version/.* Safari/").expect("safari pattern"));

static MAC_EMBEDDED_BROWSER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Mozilla/[.\d]+ \(Macintosh;.*Mac OS X [_\d]+\) AppleWebKit/[.\d]+ \(KHTML, like Gecko\)$")
        .expect("mac embedded pattern")
});

static CHROMIUM_BASED: Lazy<Regex> = Lazy::new(|| Regex::new(r"Chrom(e|ium)").expect("chromium pattern"));

static CHROMIUM_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Chrom[^ /]+/(\d+)[.\d]* ").expect("chromium version pattern"));

static UC_BROWSER_VERSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"UBrowser/(\d+)\.(\d+)\.(\d+)[.\d]* ").expect("uc version pattern"));

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Whether it is safe to send `SameSite=None` to this client. Blank
/// input classifies as unsafe.
pub fn should_send_same_site_none(user_agent: &str) -> bool {
    !is_blank(user_agent) && !is_same_site_none_incompatible(user_agent)
}

/// Whether this client is known to mishandle `SameSite=None`.
pub fn is_same_site_none_incompatible(user_agent: &str) -> bool {
    if is_blank(user_agent) {
        return false;
    }
    has_webkit_same_site_bug(user_agent) || drops_unrecognized_same_site_cookies(user_agent)
}

/// The WebKit bug that treats `SameSite=None` as `SameSite=Strict`:
/// iOS 12, or macOS 10.14 with Safari or an embedded (frameless) WebKit
/// browser.
pub fn has_webkit_same_site_bug(user_agent: &str) -> bool {
    if is_blank(user_agent) {
        return false;
    }
    is_ios_version(12, user_agent)
        || (is_macosx_version(10, 14, user_agent)
            && (is_safari(user_agent) || is_mac_embedded_browser(user_agent)))
}

/// Clients that drop cookies carrying unrecognized `SameSite` values:
/// UC Browser before 12.13.2, and Chromium 51-66.
pub fn drops_unrecognized_same_site_cookies(user_agent: &str) -> bool {
    if is_uc_browser(user_agent) {
        return !is_uc_browser_version_at_least(12, 13, 2, user_agent);
    }
    is_chromium_based(user_agent)
        && is_chromium_version_at_least(51, user_agent)
        && !is_chromium_version_at_least(67, user_agent)
}

/// Exact match on the iOS major version token.
pub fn is_ios_version(major: u32, user_agent: &str) -> bool {
    if is_blank(user_agent) {
        return false;
    }
    match IOS_VERSION.captures(user_agent) {
        Some(captures) => captures[1] == major.to_string(),
        None => false,
    }
}

/// Exact match on the macOS major and minor version tokens.
pub fn is_macosx_version(major: u32, minor: u32, user_agent: &str) -> bool {
    if is_blank(user_agent) {
        return false;
    }
    match MACOSX_VERSION.captures(user_agent) {
        Some(captures) => captures[1] == major.to_string() && captures[2] == minor.to_string(),
        None => false,
    }
}

pub fn is_safari(user_agent: &str) -> bool {
    !is_blank(user_agent) && SAFARI.is_match(user_agent)
}

pub fn is_mac_embedded_browser(user_agent: &str) -> bool {
    !is_blank(user_agent) && MAC_EMBEDDED_BROWSER.is_match(user_agent)
}

pub fn is_chromium_based(user_agent: &str) -> bool {
    !is_blank(user_agent) && CHROMIUM_BASED.is_match(user_agent)
}

/// Whether the Chromium major version is at least `major`.
pub fn is_chromium_version_at_least(major: u32, user_agent: &str) -> bool {
    if is_blank(user_agent) {
        return false;
    }
    match CHROMIUM_VERSION.captures(user_agent) {
        Some(captures) => captures[1]
            .parse::<u32>()
            .map(|version| version >= major)
            .unwrap_or(false),
        None => false,
    }
}

pub fn is_uc_browser(user_agent: &str) -> bool {
    !is_blank(user_agent) && user_agent.contains("UBrowser/")
}

/// Whether the UC Browser version is at least `major.minor.build`,
/// compared numerically component by component.
pub fn is_uc_browser_version_at_least(major: u32, minor: u32, build: u32, user_agent: &str) -> bool {
    if is_blank(user_agent) {
        return false;
    }
    let captures = match UC_BROWSER_VERSION.captures(user_agent) {
        Some(captures) => captures,
        None => return false,
    };
    let parsed = (
        captures[1].parse::<u32>(),
        captures[2].parse::<u32>(),
        captures[3].parse::<u32>(),
    );
    let (major_version, minor_version, build_version) = match parsed {
        (Ok(major), Ok(minor), Ok(build)) => (major, minor, build),
        _ => return false,
    };

    if major_version != major {
        major_version > major
    } else if minor_version != minor {
        minor_version > minor
    } else {
        build_version >= build
    }
}

/// Whether the client is Chromium 80 or later, where `SameSite=Lax` is
/// the default and `SameSite=None` requires `Secure`.
pub fn is_chromium_80_at_least(user_agent: &str) -> bool {
    is_chromium_version_at_least(80, user_agent)
}
