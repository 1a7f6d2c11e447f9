//! Trait definitions for settings UI dependencies.
//!
//! These traits define the interface between the settings UI crate and the
//! plugin host. The host crate implements them to provide concrete
//! functionality.

use chat_overlay_config::Config;

use crate::SettingsWindowAction;

/// Callback bound to a text command. Receives the command name and the raw
/// argument string.
pub type CommandHandler = Box<dyn FnMut(&str, &str) + Send>;

/// Text command registration.
///
/// Implemented by the host to let components bind slash commands.
pub trait CommandRegistrar {
    /// Bind `command` to `handler`. Returns `false` if the command was
    /// already bound, in which case the existing binding is kept.
    fn add_handler(
        &mut self,
        command: &str,
        help_message: &str,
        handler: CommandHandler,
    ) -> bool;

    /// Remove the binding for `command`. Returns `false` if it was not bound.
    fn remove_handler(&mut self, command: &str) -> bool;
}

/// Host side effects triggered by saving settings.
///
/// Every method is fire-and-forget from the panel's point of view.
pub trait HostOps {
    /// Persist the configuration store
    fn save_config(&mut self, config: &Config) -> anyhow::Result<()>;

    /// Re-filter every tab's chat buffer against the current tab rules
    fn filter_all_tabs(&mut self);

    /// Rebuild fonts after a font size change
    fn rebuild_fonts(&mut self);

    /// Allow or block mouse/keyboard interaction with the chat window
    fn set_chat_interactable(&mut self, interactable: bool);

    /// Carry out one settings action. Persistence failures are logged.
    fn handle_action(&mut self, action: SettingsWindowAction, config: &Config) {
        match action {
            SettingsWindowAction::SaveConfig => {
                if let Err(e) = self.save_config(config) {
                    log::error!("Failed to save config: {:#}", e);
                }
            }
            SettingsWindowAction::FilterAllTabs => self.filter_all_tabs(),
            SettingsWindowAction::RebuildFonts => self.rebuild_fonts(),
            SettingsWindowAction::SetChatInteractable(interactable) => {
                self.set_chat_interactable(interactable)
            }
        }
    }
}
