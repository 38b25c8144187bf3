use http::header::{ACCEPT, USER_AGENT};
use http::HeaderMap;
use std::borrow::Cow;

pub const X_WAP_PROFILE: &str = "x-wap-profile";
pub const PROFILE: &str = "profile";

/// The request headers the resolver looks at (`User-Agent`, `X-Wap-Profile`,
/// `Profile`, `Accept`).
///
/// An empty value is treated the same as a missing header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders<'a> {
    /// Value of the `User-Agent` header.
    pub user_agent: Option<Cow<'a, str>>,
    /// Value of the `X-Wap-Profile` header (UAProf document URL).
    pub x_wap_profile: Option<Cow<'a, str>>,
    /// Value of the `Profile` header.
    pub profile: Option<Cow<'a, str>>,
    /// Value of the `Accept` header.
    pub accept: Option<Cow<'a, str>>,
}

impl<'a> RequestHeaders<'a> {
    /// Borrow the relevant headers out of `map`. Lookup is case-insensitive and
    /// only the first value of a repeated header is used.
    pub fn from_header_map(map: &'a HeaderMap) -> Self {
        let get = move |name: &str| {
            map.get(name)
                .map(|v| String::from_utf8_lossy(v.as_bytes()))
        };
        Self {
            user_agent: get(USER_AGENT.as_str()),
            x_wap_profile: get(X_WAP_PROFILE),
            profile: get(PROFILE),
            accept: get(ACCEPT.as_str()),
        }
    }

    pub fn with_user_agent(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.user_agent = Some(value.into());
        self
    }

    pub fn with_x_wap_profile(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.x_wap_profile = Some(value.into());
        self
    }

    pub fn with_profile(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.profile = Some(value.into());
        self
    }

    pub fn with_accept(mut self, value: impl Into<Cow<'a, str>>) -> Self {
        self.accept = Some(value.into());
        self
    }

    pub fn user_agent(&self) -> Option<&str> {
        non_empty(&self.user_agent)
    }

    pub fn x_wap_profile(&self) -> Option<&str> {
        non_empty(&self.x_wap_profile)
    }

    pub fn profile(&self) -> Option<&str> {
        non_empty(&self.profile)
    }

    pub fn accept(&self) -> Option<&str> {
        non_empty(&self.accept)
    }
}

fn non_empty<'s>(value: &'s Option<Cow<'_, str>>) -> Option<&'s str> {
    value.as_deref().filter(|v| !v.is_empty())
}
