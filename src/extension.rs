use super::error::{Error, Result};
use super::resolver::DeviceResolver;
use super::types::Device;
use http::{Extensions, Request};

/// Name of the per-request slot the resolved [`Device`] is stored under.
///
/// The slot itself is the `Device` type inside the request's
/// [`http::Extensions`]; the name only appears in logs and error messages.
pub const DEFAULT_KEY: &str = "mobile_detector::Device";

impl DeviceResolver {
    /// Resolve the device for `request` and store it in the request's
    /// extensions, replacing any earlier result.
    pub fn resolve_request<B>(&self, request: &mut Request<B>) -> Device {
        let device = self.resolve_headers(request.headers());
        if request.extensions_mut().insert(device).is_some() {
            tracing::debug!(key = DEFAULT_KEY, "replaced previously resolved device");
        }
        device
    }
}

/// Read back the [`Device`] stored by [`DeviceResolver::resolve_request`].
pub trait RequestDeviceExt {
    /// Fails with [`Error::DeviceNotResolved`] if the resolver has not run for
    /// this request yet.
    fn device(&self) -> Result<Device>;
}

impl RequestDeviceExt for Extensions {
    fn device(&self) -> Result<Device> {
        self.get::<Device>().copied().ok_or(Error::DeviceNotResolved)
    }
}

impl<B> RequestDeviceExt for Request<B> {
    fn device(&self) -> Result<Device> {
        self.extensions().device()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Platform;
    use http::header::USER_AGENT;

    fn request(agent: &str) -> Request<()> {
        Request::builder()
            .uri("/")
            .header(USER_AGENT, agent)
            .body(())
            .unwrap()
    }

    #[test]
    fn device_is_available_after_resolution() {
        let mut req = request("Mozilla/5.0 (iPhone; CPU iPhone OS 14_0)");
        let resolved = DeviceResolver::global().resolve_request(&mut req);
        let stored = req.device().unwrap();
        assert_eq!(stored, resolved);
        assert!(stored.mobile());
        assert_eq!(stored.platform(), Platform::Ios);
    }

    #[test]
    fn reading_before_resolution_fails() {
        let req = request("Mozilla/5.0 (iPhone; CPU iPhone OS 14_0)");
        let err = req.device().unwrap_err();
        assert!(matches!(err, Error::DeviceNotResolved));
        assert!(err.to_string().contains(DEFAULT_KEY));
    }

    #[test]
    fn resolving_twice_keeps_latest() {
        let mut req = request("Mozilla/5.0 (X11; Linux x86_64)");
        DeviceResolver::global().resolve_request(&mut req);
        req.headers_mut()
            .insert(USER_AGENT, "Mozilla/5.0 (Linux; Android 10)".parse().unwrap());
        DeviceResolver::global().resolve_request(&mut req);
        assert_eq!(req.device().unwrap(), Device::tablet_on(Platform::Android));
    }

    #[test]
    fn extensions_accessor() {
        let mut ext = Extensions::new();
        assert!(ext.device().is_err());
        ext.insert(Device::NORMAL);
        assert_eq!(ext.device().unwrap(), Device::NORMAL);
    }
}
