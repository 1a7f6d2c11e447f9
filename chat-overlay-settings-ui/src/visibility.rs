//! Shared show/hide flag for the settings window.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Visibility of the settings window, shared between the window and the
/// command callback that toggles it.
#[derive(Debug, Clone, Default)]
pub struct VisibilityFlag(Arc<AtomicBool>);

impl VisibilityFlag {
    pub fn new(visible: bool) -> Self {
        Self(Arc::new(AtomicBool::new(visible)))
    }

    pub fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn set(&self, visible: bool) {
        self.0.store(visible, Ordering::Relaxed);
    }

    /// Flip the flag, returning the new value.
    pub fn toggle(&self) -> bool {
        !self.0.fetch_xor(true, Ordering::Relaxed)
    }
}
