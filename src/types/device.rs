use super::{DeviceKind, Platform};
use serde::Serialize;

/// Result of resolving a request: what kind of device sent it, and on which
/// platform.
///
/// A device is exactly one of normal, mobile or tablet. Normal devices always
/// report [`Platform::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Device {
    kind: DeviceKind,
    platform: Platform,
}

impl Device {
    pub const NORMAL: Device = Device {
        kind: DeviceKind::Normal,
        platform: Platform::Unknown,
    };

    pub const fn mobile_on(platform: Platform) -> Self {
        Self {
            kind: DeviceKind::Mobile,
            platform,
        }
    }

    pub const fn tablet_on(platform: Platform) -> Self {
        Self {
            kind: DeviceKind::Tablet,
            platform,
        }
    }

    pub fn kind(&self) -> DeviceKind {
        self.kind
    }

    /// Neither a mobile phone nor a tablet.
    pub fn normal(&self) -> bool {
        self.kind == DeviceKind::Normal
    }

    pub fn mobile(&self) -> bool {
        self.kind == DeviceKind::Mobile
    }

    pub fn tablet(&self) -> bool {
        self.kind == DeviceKind::Tablet
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::NORMAL
    }
}
