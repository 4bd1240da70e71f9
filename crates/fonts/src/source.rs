//! FontSource trait for abstracting font byte loading.
//!
//! The registry treats each handle as an opaque key into a byte source; it
//! never touches the filesystem itself. The form layer decides whether a
//! handle is a file path, an asset key or a pre-fetched buffer.

use crate::FontError;
use std::fmt::Debug;
use std::sync::Arc;

/// Shared font data type (reference-counted bytes).
pub type SharedFontData = Arc<Vec<u8>>;

/// A source of raw font bytes.
///
/// Loading happens only while the registry is populated; the per-request
/// hot path never calls into a `FontSource`.
pub trait FontSource: Send + Sync + Debug {
    /// Load the font bytes behind a handle.
    fn load(&self, handle: &str) -> Result<SharedFontData, FontError>;

    /// Check whether a handle can be loaded.
    fn exists(&self, handle: &str) -> bool;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// An in-memory font source.
///
/// Handles are plain keys into a pre-populated map. Works in any
/// environment, including tests that ship no font files.
#[derive(Debug, Default)]
pub struct InMemoryFontSource {
    fonts: std::sync::RwLock<std::collections::HashMap<String, SharedFontData>>,
}

impl InMemoryFontSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add font bytes under a handle.
    ///
    /// # Errors
    ///
    /// Returns `FontError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, handle: impl Into<String>, data: Vec<u8>) -> Result<(), FontError> {
        let handle_string = handle.into();
        let mut fonts = self.fonts.write().map_err(|_| FontError::LoadFailed {
            handle: handle_string.clone(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts.insert(handle_string, Arc::new(data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fonts.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.read().map(|f| f.is_empty()).unwrap_or(true)
    }
}

impl FontSource for InMemoryFontSource {
    fn load(&self, handle: &str) -> Result<SharedFontData, FontError> {
        let fonts = self.fonts.read().map_err(|_| FontError::LoadFailed {
            handle: handle.to_string(),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts
            .get(handle)
            .cloned()
            .ok_or_else(|| FontError::LoadFailed {
                handle: handle.to_string(),
                message: "handle not found".to_string(),
            })
    }

    fn exists(&self, handle: &str) -> bool {
        self.fonts
            .read()
            .map(|f| f.contains_key(handle))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryFontSource"
    }
}
