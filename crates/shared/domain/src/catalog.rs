use std::borrow::Cow;

/// Placeholder name for [`AppChannel::namespace`].
pub const NAMESPACE: &str = "namespace";
/// Placeholder name for [`AppChannel::app_name`].
pub const APP_NAME: &str = "app_name";
/// Placeholder name for [`AppChannel::channel`].
pub const CHANNEL: &str = "channel";

/// One configuration row: an application namespace with its display name and release channel.
///
/// Tables of rows are static and read-only. Namespaces are unique within a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppChannel {
    pub namespace: Cow<'static, str>,
    pub app_name: Cow<'static, str>,
    pub channel: Cow<'static, str>,
}

impl AppChannel {
    /// Builds a row from static strings, usable in `static` tables.
    #[must_use]
    pub const fn new(namespace: &'static str, app_name: &'static str, channel: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            app_name: Cow::Borrowed(app_name),
            channel: Cow::Borrowed(channel),
        }
    }

    /// Builds a row from runtime values.
    #[must_use]
    pub fn owned(
        namespace: impl Into<String>,
        app_name: impl Into<String>,
        channel: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Cow::Owned(namespace.into()),
            app_name: Cow::Owned(app_name.into()),
            channel: Cow::Owned(channel.into()),
        }
    }

    /// Looks up a field by its placeholder name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            NAMESPACE => Some(self.namespace.as_ref()),
            APP_NAME => Some(self.app_name.as_ref()),
            CHANNEL => Some(self.channel.as_ref()),
            _ => None,
        }
    }
}

/// The subset of row fields a template is allowed to reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSet {
    /// Only `namespace`. Used by the baseline locale template.
    Namespace,
    /// `namespace`, `app_name` and `channel`.
    Full,
}

impl FieldSet {
    /// Placeholder names exposed by this set, in row order.
    #[must_use]
    pub const fn names(self) -> &'static [&'static str] {
        match self {
            Self::Namespace => &[NAMESPACE],
            Self::Full => &[NAMESPACE, APP_NAME, CHANNEL],
        }
    }

    #[must_use]
    pub fn contains(self, name: &str) -> bool {
        self.names().contains(&name)
    }
}

/// Mobile applications feeding the daily search clients tables.
pub static MOBILE_SEARCH_APP_CHANNELS: [AppChannel; 5] = [
    AppChannel::new("org_mozilla_fenix", "Firefox Preview", "beta"),
    AppChannel::new("org_mozilla_fenix_nightly", "Firefox Preview", "nightly"),
    AppChannel::new("org_mozilla_fennec_aurora", "Fenix", "nightly"),
    AppChannel::new("org_mozilla_firefox_beta", "Fenix", "beta"),
    AppChannel::new("org_mozilla_firefox", "Fenix", "release"),
];

/// Same applications, addressed through their `_stable` namespaces.
pub static MOBILE_SEARCH_STABLE_APP_CHANNELS: [AppChannel; 5] = [
    AppChannel::new("org_mozilla_fenix_stable", "Firefox Preview", "beta"),
    AppChannel::new("org_mozilla_fenix_nightly_stable", "Firefox Preview", "nightly"),
    AppChannel::new("org_mozilla_fennec_aurora_stable", "Fenix", "nightly"),
    AppChannel::new("org_mozilla_firefox_beta_stable", "Fenix", "beta"),
    AppChannel::new("org_mozilla_firefox_stable", "Fenix", "release"),
];
