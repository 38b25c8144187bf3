use super::db::{KeywordDb, PREFIX_LEN};
use super::error::Result;
use super::matcher::KeywordMatcher;
use super::types::*;
use http::HeaderMap;
use std::path::Path;
use std::sync::OnceLock;

const ANDROID: &str = "android";
const MOBILE: &str = "mobile";
const IPAD: &str = "ipad";
const IPHONE: &str = "iphone";
const IPOD: &str = "ipod";
const SILK: &str = "silk";
const WAP: &str = "wap";

static GLOBAL: OnceLock<DeviceResolver> = OnceLock::new();

/// Resolves the device category and platform of a request from its headers.
///
/// Checks run in a fixed order and the first one that fires decides the result:
///
/// 1. tablet markers in the user agent (`android` or `silk` without `mobile`,
///    `ipad`, or a tablet keyword)
/// 2. presence of an `X-Wap-Profile` / `Profile` header
/// 3. a known mobile handset prefix at the start of the user agent
/// 4. `wap` in the `Accept` header
/// 5. mobile markers in the user agent (`android`, `iphone`/`ipod`/`ipad`, or a
///    mobile keyword)
///
/// Anything else is a normal device. All user-agent checks are case-insensitive
/// substring tests.
#[derive(Debug)]
pub struct DeviceResolver {
    mobile_prefixes: KeywordMatcher,
    mobile_keywords: KeywordMatcher,
    tablet_keywords: KeywordMatcher,
}

impl DeviceResolver {
    /// Build a resolver over `db`.
    pub fn new(db: KeywordDb) -> Result<Self> {
        Ok(Self {
            mobile_prefixes: KeywordMatcher::build(&db.mobile_user_agent_prefixes)?,
            mobile_keywords: KeywordMatcher::build(&db.mobile_user_agent_keywords)?,
            tablet_keywords: KeywordMatcher::build(&db.tablet_user_agent_keywords)?,
        })
    }

    /// Build a resolver from a YAML keyword-table override file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(KeywordDb::from_path(path)?)
    }

    /// Build a resolver from a YAML keyword-table override document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::new(KeywordDb::from_yaml_str(yaml)?)
    }

    /// Shared resolver over the built-in tables, built on first use.
    pub fn global() -> &'static DeviceResolver {
        GLOBAL.get_or_init(|| {
            let resolver =
                DeviceResolver::new(KeywordDb::default()).expect("built-in keyword tables compile");
            tracing::debug!(
                prefixes = resolver.mobile_prefixes.len(),
                mobile_keywords = resolver.mobile_keywords.len(),
                tablet_keywords = resolver.tablet_keywords.len(),
                "built default device resolver"
            );
            resolver
        })
    }

    /// Resolve straight from an `http::HeaderMap`.
    pub fn resolve_headers(&self, headers: &HeaderMap) -> Device {
        self.resolve(&RequestHeaders::from_header_map(headers))
    }

    pub fn resolve(&self, headers: &RequestHeaders<'_>) -> Device {
        let agent = headers.user_agent().unwrap_or("").to_lowercase();
        let (rule, device) = self.decide(&agent, headers);
        tracing::trace!(
            rule,
            kind = %device.kind(),
            platform = %device.platform(),
            "resolved device"
        );
        device
    }

    fn decide(&self, agent: &str, headers: &RequestHeaders<'_>) -> (&'static str, Device) {
        let has = |needle: &str| agent.contains(needle);
        let apple = || has(IPHONE) || has(IPOD) || has(IPAD);

        if !agent.is_empty() {
            if has(ANDROID) && !has(MOBILE) {
                return ("tablet", Device::tablet_on(Platform::Android));
            }
            if has(IPAD) {
                return ("tablet", Device::tablet_on(Platform::Ipad));
            }
            if has(SILK) && !has(MOBILE) {
                return ("tablet", Device::tablet_on(Platform::Kindle));
            }
            if self.tablet_keywords.matches(agent) {
                return ("tablet", Device::tablet_on(Platform::Unknown));
            }
        }

        let has_profile = headers.x_wap_profile().is_some() || headers.profile().is_some();
        if has_profile && !agent.is_empty() {
            let platform = if has(ANDROID) {
                Platform::Android
            } else if apple() {
                Platform::Ios
            } else {
                Platform::Unknown
            };
            return ("profile", Device::mobile_on(platform));
        }

        // Compared on bytes so a multi-byte character straddling the boundary
        // cannot split a char.
        if agent.len() >= PREFIX_LEN
            && self.mobile_prefixes.matches(&agent.as_bytes()[..PREFIX_LEN])
        {
            return ("prefix", Device::mobile_on(Platform::Unknown));
        }

        if headers.accept().is_some_and(|accept| accept.contains(WAP)) {
            return ("accept", Device::mobile_on(Platform::Unknown));
        }

        if !agent.is_empty() {
            if has(ANDROID) {
                return ("mobile", Device::mobile_on(Platform::Android));
            }
            if apple() {
                return ("mobile", Device::mobile_on(Platform::Ios));
            }
            if self.mobile_keywords.matches(agent) {
                return ("mobile", Device::mobile_on(Platform::Unknown));
            }
        }

        ("default", Device::NORMAL)
    }
}

/// Resolve `headers` with the shared built-in resolver.
pub fn resolve_device(headers: &HeaderMap) -> Device {
    DeviceResolver::global().resolve_headers(headers)
}
