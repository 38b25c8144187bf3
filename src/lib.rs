//! Classifies the device behind an HTTP request as normal, mobile or tablet
//! from its `User-Agent`, `X-Wap-Profile`, `Profile` and `Accept` headers.
//!
//! ```
//! use http::Request;
//! use mobile_detector::{DeviceResolver, Platform, RequestDeviceExt};
//!
//! let mut req = Request::builder()
//!     .header("User-Agent", "Mozilla/5.0 (Linux; Android 10)")
//!     .body(())
//!     .unwrap();
//! DeviceResolver::global().resolve_request(&mut req);
//!
//! let device = req.device().unwrap();
//! assert!(device.tablet());
//! assert_eq!(device.platform(), Platform::Android);
//! ```

mod db;
mod error;
mod extension;
mod matcher;
mod resolver;
mod types;

pub use db::{
    KeywordDb, MOBILE_USER_AGENT_KEYWORDS, MOBILE_USER_AGENT_PREFIXES,
    TABLET_USER_AGENT_KEYWORDS,
};
pub use error::{Error, Result};
pub use extension::{RequestDeviceExt, DEFAULT_KEY};
pub use resolver::{resolve_device, DeviceResolver};
pub use types::*;
