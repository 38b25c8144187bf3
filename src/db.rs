use std::path::Path;

use indexmap::IndexSet;
use serde::Deserialize;

use crate::error::Result;

/// Length of the user-agent slice compared against [`MOBILE_USER_AGENT_PREFIXES`].
pub(crate) const PREFIX_LEN: usize = 4;

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

/// Leading four characters of user agents sent by mobile handsets.
pub const MOBILE_USER_AGENT_PREFIXES: &[&str] = &[
    "w3c ", "w3c-", "acs-", "alav", "alca", "amoi", "audi", "avan", "benq", "bird", "blac",
    "blaz", "brew", "cell", "cldc", "cmd-", "dang", "doco", "eric", "hipt", "htc_", "inno",
    "ipaq", "ipod", "jigs", "kddi", "keji", "leno", "lg-c", "lg-d", "lg-g", "lge-", "lg/u",
    "maui", "maxo", "midp", "mits", "mmef", "mobi", "mot-", "moto", "mwbp", "nec-", "newt",
    "noki", "palm", "pana", "pant", "phil", "play", "port", "prox", "qwap", "sage", "sams",
    "sany", "sch-", "sec-", "send", "seri", "sgh-", "shar", "sie-", "siem", "smal", "smar",
    "sony", "sph-", "symb", "t-mo", "teli", "tim-", "tosh", "tsm-", "upg1", "upsi", "vk-v",
    "voda", "wap-", "wapa", "wapi", "wapp", "wapr", "webc", "winw", "xda ", "xda-",
];

/// Substrings found anywhere in mobile browser user agents.
pub const MOBILE_USER_AGENT_KEYWORDS: &[&str] = &[
    "blackberry",
    "webos",
    "ipod",
    "lge vx",
    "midp",
    "maemo",
    "mmp",
    "mobile",
    "netfront",
    "hiptop",
    "nintendo ds",
    "novarra",
    "openweb",
    "opera mobi",
    "opera mini",
    "palm",
    "psp",
    "phone",
    "smartphone",
    "symbian",
    "up.browser",
    "up.link",
    "wap",
    "windows ce",
];

/// Substrings found anywhere in tablet user agents.
pub const TABLET_USER_AGENT_KEYWORDS: &[&str] = &["ipad", "playbook", "hp-tablet", "kindle"];

// ---------------------------------------------------------------------------
// KeywordDb
// ---------------------------------------------------------------------------

/// The three lookup tables consulted by the resolver.
///
/// Every table is an ordered set of lowercase entries. A YAML override may
/// replace any subset of them; omitted keys keep the built-in table:
///
/// ```yaml
/// tablet_user_agent_keywords: [ipad, playbook, hp-tablet, kindle, nexus 7]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordDb {
    pub mobile_user_agent_prefixes: IndexSet<String>,
    pub mobile_user_agent_keywords: IndexSet<String>,
    pub tablet_user_agent_keywords: IndexSet<String>,
}

impl Default for KeywordDb {
    fn default() -> Self {
        Self {
            mobile_user_agent_prefixes: to_set(MOBILE_USER_AGENT_PREFIXES),
            mobile_user_agent_keywords: to_set(MOBILE_USER_AGENT_KEYWORDS),
            tablet_user_agent_keywords: to_set(TABLET_USER_AGENT_KEYWORDS),
        }
    }
}

impl KeywordDb {
    /// Parse a YAML override. Entries are lowercased and empty entries dropped.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let db: KeywordDb = serde_yaml::from_str(yaml)?;
        Ok(db.normalized())
    }

    /// Load a YAML override from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let db = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            prefixes = db.mobile_user_agent_prefixes.len(),
            mobile_keywords = db.mobile_user_agent_keywords.len(),
            tablet_keywords = db.tablet_user_agent_keywords.len(),
            "loaded keyword tables"
        );
        Ok(db)
    }

    fn normalized(self) -> Self {
        let prefixes = normalize("mobile_user_agent_prefixes", self.mobile_user_agent_prefixes);
        for p in prefixes.iter().filter(|p| p.len() > PREFIX_LEN) {
            tracing::warn!(
                prefix = %p,
                "user agent prefix is longer than {} bytes and will never match",
                PREFIX_LEN
            );
        }
        Self {
            mobile_user_agent_prefixes: prefixes,
            mobile_user_agent_keywords: normalize(
                "mobile_user_agent_keywords",
                self.mobile_user_agent_keywords,
            ),
            tablet_user_agent_keywords: normalize(
                "tablet_user_agent_keywords",
                self.tablet_user_agent_keywords,
            ),
        }
    }
}

fn to_set(entries: &[&str]) -> IndexSet<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

/// Lowercase every entry (user agents are lowercased before matching) and drop
/// empty ones, which would otherwise match every input.
fn normalize(table: &str, entries: IndexSet<String>) -> IndexSet<String> {
    entries
        .into_iter()
        .filter_map(|e| {
            if e.is_empty() {
                tracing::warn!(table, "dropping empty keyword entry");
                None
            } else {
                Some(e.to_lowercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_lowercase() {
        let db = KeywordDb::default();
        let all = db
            .mobile_user_agent_prefixes
            .iter()
            .chain(&db.mobile_user_agent_keywords)
            .chain(&db.tablet_user_agent_keywords);
        for entry in all {
            assert_eq!(entry, &entry.to_lowercase());
        }
    }

    #[test]
    fn builtin_prefixes_are_four_bytes() {
        for p in MOBILE_USER_AGENT_PREFIXES {
            assert_eq!(p.len(), PREFIX_LEN, "{:?}", p);
        }
    }

    #[test]
    fn missing_keys_keep_builtin_tables() {
        let db = KeywordDb::from_yaml_str("tablet_user_agent_keywords: [Nexus 7, '']").unwrap();
        assert_eq!(
            db.tablet_user_agent_keywords.iter().collect::<Vec<_>>(),
            vec!["nexus 7"]
        );
        assert_eq!(
            db.mobile_user_agent_keywords,
            KeywordDb::default().mobile_user_agent_keywords
        );
    }

    #[test]
    fn duplicate_entries_collapse() {
        let db = KeywordDb::from_yaml_str("mobile_user_agent_prefixes: [winw, WINW, noki]").unwrap();
        assert_eq!(db.mobile_user_agent_prefixes.len(), 2);
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(KeywordDb::from_yaml_str("desktop_keywords: [x11]").is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = KeywordDb::from_path("does/not/exist.yml").unwrap_err();
        assert!(matches!(err, crate::Error::IO(_)));
    }
}
