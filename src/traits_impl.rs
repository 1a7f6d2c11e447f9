//! Concrete implementations of the settings UI traits.
//!
//! - [`HostOps`] on [`PluginHost`]: persistence goes to the host's config
//!   path; the remaining side effects are recorded for the render loop.
//! - [`CommandRegistrar`](chat_overlay_settings_ui::CommandRegistrar) is
//!   implemented directly in [`crate::commands`].

use anyhow::Context;
use chat_overlay_config::Config;
use chat_overlay_settings_ui::HostOps;

use crate::host::PluginHost;

impl HostOps for PluginHost {
    fn save_config(&mut self, config: &Config) -> anyhow::Result<()> {
        config
            .save_to(self.config_path())
            .with_context(|| format!("saving config to {}", self.config_path().display()))?;
        self.saves += 1;
        Ok(())
    }

    fn filter_all_tabs(&mut self) {
        self.refilters += 1;
        log::debug!("Re-filter of all tabs requested");
    }

    fn rebuild_fonts(&mut self) {
        self.fonts_dirty = true;
        log::debug!("Font rebuild requested");
    }

    fn set_chat_interactable(&mut self, interactable: bool) {
        self.chat_interactable = interactable;
        log::debug!("Chat interactable: {}", interactable);
    }
}
