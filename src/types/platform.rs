use serde::Serialize;

/// Coarse platform label attached to a mobile or tablet [`Device`](super::Device).
///
/// `Ipad` is only produced by the tablet rules. An iPad user agent that reaches
/// the mobile rules instead is labelled `Ios`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
    Ipad,
    Kindle,
    #[default]
    Unknown,
}

impl Platform {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "android" => Some(Self::Android),
            "ios" => Some(Self::Ios),
            "ipad" => Some(Self::Ipad),
            "kindle" => Some(Self::Kindle),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Ipad => "ipad",
            Self::Kindle => "kindle",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
