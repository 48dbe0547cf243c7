//! Configuration for export operations.

use crate::ExportError;
use crate::Result;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

/// Configuration for a project export.
///
/// # Examples
///
/// ```
/// use prozip_core::ExportConfig;
///
/// let config = ExportConfig::default().with_compression_level(9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Deflate compression level (1-9).
    ///
    /// `None` stores entries uncompressed.
    ///
    /// Default: `Some(6)` (balanced).
    pub compression_level: Option<u8>,

    /// Cooperative cancellation flag.
    ///
    /// When set, the walk checks the flag before each directory
    /// recursion and aborts with [`ExportError::Cancelled`] once it is
    /// raised. The partially written archive is invalid after a
    /// cancellation.
    ///
    /// Default: `None` (never cancelled).
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            compression_level: Some(6),
            cancel_flag: None,
        }
    }
}

impl ExportConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the level is not in the range 1-9. Use `validate()` for
    /// non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!((1..=9).contains(&level), "compression level must be 1-9");
        self.compression_level = Some(level);
        self
    }

    /// Disables compression (entries stored as-is).
    #[must_use]
    pub fn with_stored_entries(mut self) -> Self {
        self.compression_level = None;
        self
    }

    /// Sets the cooperative cancellation flag.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidCompressionLevel`] if a compression
    /// level is set outside the range 1-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && !(1..=9).contains(&level)
        {
            return Err(ExportError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn test_config_default() {
        let config = ExportConfig::default();
        assert_eq!(config.compression_level, Some(6));
        assert!(config.cancel_flag.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let flag = Arc::new(AtomicBool::new(false));
        let config = ExportConfig::new()
            .with_compression_level(9)
            .with_cancel_flag(Arc::clone(&flag));

        assert_eq!(config.compression_level, Some(9));
        flag.store(true, Ordering::Relaxed);
        assert!(config.cancel_flag.unwrap().load(Ordering::Relaxed));
    }

    #[test]
    fn test_config_stored_entries() {
        let config = ExportConfig::new().with_stored_entries();
        assert_eq!(config.compression_level, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validate_invalid_level() {
        let config = ExportConfig {
            compression_level: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            ExportError::InvalidCompressionLevel { level: 0 }
        ));

        let config = ExportConfig {
            compression_level: Some(10),
            ..Default::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            ExportError::InvalidCompressionLevel { level: 10 }
        ));
    }

    #[test]
    #[should_panic(expected = "compression level must be 1-9")]
    fn test_config_builder_rejects_bad_level() {
        let _config = ExportConfig::new().with_compression_level(0);
    }
}
