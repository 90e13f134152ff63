use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::fractals::newton::errors::FrameConfigError;
use crate::core::fractals::newton::frame_config::FrameConfig;

/// Shared, externally owned frame configuration.
///
/// Interaction code edits it through [`ConfigHandle::update`]; the frame driver
/// copies it once per frame with [`ConfigHandle::snapshot`]. Edits made while a
/// frame is computing only show up in the next frame.
#[derive(Debug, Clone)]
pub struct ConfigHandle {
    inner: Arc<Mutex<FrameConfig>>,
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new(FrameConfig::default())
    }
}

impl ConfigHandle {
    #[must_use]
    pub fn new(config: FrameConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(config)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> FrameConfig {
        self.lock().clone()
    }

    /// Applies `edit` to a copy and commits it only if every step succeeds, so a
    /// rejected edit leaves the last valid configuration in place.
    pub fn update<F>(&self, edit: F) -> Result<(), FrameConfigError>
    where
        F: FnOnce(&mut FrameConfig) -> Result<(), FrameConfigError>,
    {
        let mut guard = self.lock();
        let mut candidate = guard.clone();

        match edit(&mut candidate) {
            Ok(()) => {
                debug!(
                    "config updated: {} roots, {} iterations, scale {}",
                    candidate.roots().len(),
                    candidate.iterations(),
                    candidate.viewport().scale()
                );
                *guard = candidate;
                Ok(())
            }
            Err(err) => {
                warn!("rejected config update: {}", err);
                Err(err)
            }
        }
    }

    /// Replaces the whole configuration with an already validated one.
    pub fn replace(&self, config: FrameConfig) {
        *self.lock() = config;
    }

    fn lock(&self) -> MutexGuard<'_, FrameConfig> {
        // FrameConfig is only ever replaced wholesale, so a panic elsewhere
        // cannot leave it half written.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
