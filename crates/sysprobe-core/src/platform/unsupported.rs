use super::Sigar;

/// Every accessor fails with `NotImplemented` naming `platform`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
    platform: String,
}

impl Unsupported {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
        }
    }
}

impl Sigar for Unsupported {
    fn platform(&self) -> &str {
        &self.platform
    }
}
