mod device;
mod device_kind;
mod platform;
mod request_headers;

pub use device::*;
pub use device_kind::*;
pub use platform::*;
pub use request_headers::*;
