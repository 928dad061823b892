// Network checkers

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};
use url::{Host, Url};

const URL_MAX_LENGTH: usize = 2083;

static FQDN_LABEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z\x{00a1}-\x{ffff}0-9-]+$").unwrap());

static FQDN_TLD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:[a-z\x{00a1}-\x{ffff}]{2,}|xn[a-z0-9-]{2,})$").unwrap());

static MAC_ADDRESS_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [":", "-", " "]
        .iter()
        .map(|sep| {
            Regex::new(&format!(
                "^(?:[0-9a-fA-F]{{2}}{}){{5}}[0-9a-fA-F]{{2}}$",
                regex::escape(sep)
            ))
            .unwrap()
        })
        .collect()
});

const MOBILE_PHONE_PATTERNS: &[(&str, &str)] = &[
    (
        "en-US",
        r"^(?:(?:\+1|1)?[ -]?)?(?:\([2-9][0-9]{2}\)|[2-9][0-9]{2})[ -]?[2-9][0-9]{2}[ -]?[0-9]{4}$",
    ),
    (
        "en-CA",
        r"^(?:(?:\+1|1)?[ -]?)?(?:\([2-9][0-9]{2}\)|[2-9][0-9]{2})[ -]?[2-9][0-9]{2}[ -]?[0-9]{4}$",
    ),
    ("en-GB", r"^(?:\+?44|0)7\d{9}$"),
    ("en-AU", r"^(?:\+?61|0)4\d{8}$"),
    ("en-IN", r"^(?:\+?91|0)?[6789]\d{9}$"),
    (
        "de-DE",
        r"^(?:\+49)?0?1(?:5[0-25-9]\d|6(?:[23]|0\d?)|7(?:[0-57-9]|6\d))\d{7}$",
    ),
    ("fr-FR", r"^(?:\+?33|0)[67]\d{8}$"),
    ("es-ES", r"^(?:\+?34)?(?:6\d|7[1234])\d{7}$"),
    ("it-IT", r"^(?:\+?39)?\s?3\d{2} ?\d{6,7}$"),
    (
        "pt-BR",
        r"^(?:\+?55 ?[1-9]{2} ?|\+?55 ?\([1-9]{2}\) ?|0[1-9]{2} ?|\([1-9]{2}\) ?|[1-9]{2} ?)(?:\d{4}-?\d{4}|9[2-9]\d{3}-?\d{4})$",
    ),
    ("pt-PT", r"^(?:\+?351)?9[1236]\d{7}$"),
    ("nl-NL", r"^(?:\+?31|0)6?\d{8}$"),
    ("ja-JP", r"^(?:\+?81|0)[789]0[ -]?[1-9]\d{2}[ -]?\d{5}$"),
    (
        "zh-CN",
        r"^(?:(?:\+|00)86)?1(?:[358][0-9]|4[579]|6[67]|7[01235678]|9[189])[0-9]{8}$",
    ),
    ("ru-RU", r"^(?:\+?7|8)?9\d{9}$"),
    ("pl-PL", r"^(?:\+?48 ?)?[5-8]\d ?\d{3} ?\d{2} ?\d{2}$"),
];

/// Matches a number valid for any known locale.
pub const ANY_MOBILE_LOCALE: &str = "any";

static MOBILE_PHONE_REGEXES: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    MOBILE_PHONE_PATTERNS
        .iter()
        .map(|(locale, pattern)| (*locale, Regex::new(pattern).unwrap()))
        .collect()
});

/// Switches for [`is_fqdn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FqdnOptions {
    pub require_tld: bool,
    pub allow_underscores: bool,
    pub allow_trailing_dot: bool,
}

impl Default for FqdnOptions {
    fn default() -> Self {
        Self {
            require_tld: true,
            allow_underscores: false,
            allow_trailing_dot: false,
        }
    }
}

/// Fully qualified domain name.
pub fn is_fqdn(value: &str, options: &FqdnOptions) -> bool {
    let value = match value.strip_suffix('.') {
        Some(stripped) if options.allow_trailing_dot => stripped,
        _ => value,
    };

    let labels: Vec<&str> = value.split('.').collect();
    if options.require_tld {
        let Some(tld) = labels.last() else {
            return false;
        };
        if labels.len() < 2 || !FQDN_TLD_REGEX.is_match(tld) {
            return false;
        }
    }

    labels.iter().all(|label| {
        let label = if options.allow_underscores {
            label.replace('_', "")
        } else {
            label.to_string()
        };
        !label.is_empty()
            && label.len() <= 63
            && FQDN_LABEL_REGEX.is_match(&label)
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

/// Switches for [`is_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOptions {
    pub protocols: Vec<String>,
    pub require_protocol: bool,
    pub require_tld: bool,
    pub allow_underscores: bool,
    pub allow_trailing_dot: bool,
    pub allow_protocol_relative_urls: bool,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            protocols: vec!["http".into(), "https".into(), "ftp".into()],
            require_protocol: false,
            require_tld: true,
            allow_underscores: false,
            allow_trailing_dot: false,
            allow_protocol_relative_urls: false,
        }
    }
}

/// Absolute URL with an accepted protocol and a valid host.
pub fn is_url(value: &str, options: &UrlOptions) -> bool {
    if value.is_empty()
        || value.len() >= URL_MAX_LENGTH
        || value.chars().any(char::is_whitespace)
        || value.to_ascii_lowercase().starts_with("mailto:")
    {
        return false;
    }

    let candidate = match value.split_once("://") {
        Some((protocol, _)) => {
            let protocol = protocol.to_ascii_lowercase();
            if !options.protocols.iter().any(|p| p.eq_ignore_ascii_case(&protocol)) {
                return false;
            }
            value.to_string()
        }
        None if options.require_protocol => return false,
        None if value.starts_with("//") => {
            if !options.allow_protocol_relative_urls {
                return false;
            }
            format!("http:{}", value)
        }
        None => format!("http://{}", value),
    };

    let Ok(url) = Url::parse(&candidate) else {
        return false;
    };

    match url.host() {
        Some(Host::Domain(domain)) => is_fqdn(
            domain,
            &FqdnOptions {
                require_tld: options.require_tld,
                allow_underscores: options.allow_underscores,
                allow_trailing_dot: options.allow_trailing_dot,
            },
        ),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// IP protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    pub fn number(&self) -> u8 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// IPv4 or IPv6 address, optionally restricted to one version. IPv6
/// addresses may carry a zone id (`fe80::1%eth0`).
pub fn is_ip(value: &str, version: Option<IpVersion>) -> bool {
    let v4 = || value.parse::<Ipv4Addr>().is_ok();
    let v6 = || {
        let address = match value.split_once('%') {
            Some((address, zone)) if !zone.is_empty() => address,
            Some(_) => return false,
            None => value,
        };
        address.parse::<Ipv6Addr>().is_ok()
    };

    match version {
        Some(IpVersion::V4) => v4(),
        Some(IpVersion::V6) => v6(),
        None => v4() || v6(),
    }
}

/// Six hex octets separated consistently by `:`, `-` or a space.
pub fn is_mac_address(value: &str) -> bool {
    MAC_ADDRESS_REGEXES.iter().any(|pattern| pattern.is_match(value))
}

/// Locales [`is_mobile_phone`] knows, not counting [`ANY_MOBILE_LOCALE`].
pub fn mobile_phone_locales() -> impl Iterator<Item = &'static str> {
    MOBILE_PHONE_PATTERNS.iter().map(|(locale, _)| *locale)
}

pub fn is_mobile_phone_locale(locale: &str) -> bool {
    locale == ANY_MOBILE_LOCALE || mobile_phone_locales().any(|known| known == locale)
}

/// Mobile phone number for `locale`. Unknown locales never match.
pub fn is_mobile_phone(value: &str, locale: &str) -> bool {
    MOBILE_PHONE_REGEXES
        .iter()
        .filter(|(known, _)| locale == ANY_MOBILE_LOCALE || *known == locale)
        .any(|(_, pattern)| pattern.is_match(value))
}
