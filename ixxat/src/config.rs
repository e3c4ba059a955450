use std::{fs::read_to_string, path::Path};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use rs_can::CanError;
use crate::bitrate::BitrateProfile;
use crate::bus::OperatingMode;
use crate::filter::AcceptanceFilter;

/// Settings of one controller channel.
///
/// ```yaml
/// bitrate: 500000
/// mode: STANDARD | EXTENDED
/// filter:
///   code: 0x80000000
///   mask: 0xFFFFFFFF
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Deserialize, Serialize, Getters)]
pub struct ChannelConfig {
    #[getter(copy)]
    bitrate: u32,
    #[serde(default)]
    #[getter(copy)]
    mode: OperatingMode,
    #[serde(default)]
    #[getter(copy)]
    filter: AcceptanceFilter,
}

impl ChannelConfig {
    pub fn new(bitrate: u32) -> Self {
        Self {
            bitrate,
            mode: Default::default(),
            filter: Default::default(),
        }
    }

    pub fn set_mode(&mut self, mode: OperatingMode) -> &mut Self {
        self.mode = mode;
        self
    }

    pub fn set_filter(&mut self, filter: AcceptanceFilter) -> &mut Self {
        self.filter = filter;
        self
    }

    pub fn from_yaml(data: &str) -> Result<Self, CanError> {
        serde_yaml::from_str(data)
            .map_err(|e| CanError::DeviceConfigError(format!("Error parsing YAML: {:?}", e)))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CanError> {
        let path = path.as_ref();
        let data = read_to_string(path)
            .map_err(|e| CanError::OtherError(format!("Unable to read `{}`: {:?}", path.display(), e)))?;
        Self::from_yaml(&data)
    }

    #[inline]
    pub fn profile(&self) -> Result<BitrateProfile, CanError> {
        BitrateProfile::try_from(self.bitrate)
    }

    /// `(bt0, bt1)` for the configured bitrate.
    #[inline]
    pub fn timing(&self) -> Result<(u8, u8), CanError> {
        self.profile().map(|p| p.timing())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let mut cfg = ChannelConfig::new(1_000_000);
        cfg.set_mode(OperatingMode::EXTENDED | OperatingMode::LISTEN_ONLY)
            .set_filter(AcceptanceFilter::NONE);

        assert_eq!(cfg.bitrate(), 1_000_000);
        assert_eq!(cfg.mode().bits(), 0x0A);
        assert!(cfg.filter().is_reject_all());
        assert_eq!(cfg.timing(), Ok((0x00, 0x14)));
    }

    #[test]
    fn test_unsupported_bitrate() {
        let cfg = ChannelConfig::new(83_333);
        assert!(matches!(cfg.timing(), Err(CanError::DeviceConfigError(_))));
    }

    #[test]
    fn test_missing_file() {
        let ret = ChannelConfig::from_file("does-not-exist.yaml");
        assert!(matches!(ret, Err(CanError::OtherError(_))));
    }
}
