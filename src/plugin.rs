//! Plugin entry point.
//!
//! Owns the configuration store, the command registry, the settings window
//! and the host state, and wires them together for each frame.

use anyhow::Result;
use chat_overlay_config::Config;
use chat_overlay_settings_ui::{HostOps, SettingsUI, SettingsWindowAction};
use std::path::PathBuf;

use crate::commands::CommandManager;
use crate::host::PluginHost;

/// Display name used in window titles and logs.
pub const PLUGIN_NAME: &str = "Chat Overlay";

/// The running plugin.
pub struct Plugin {
    /// Authoritative configuration store
    pub config: Config,
    pub commands: CommandManager,
    pub settings: SettingsUI,
    pub host: PluginHost,
}

impl Plugin {
    /// Install debug logging, load the default config file and set up the
    /// plugin.
    pub fn load() -> Result<Self> {
        crate::debug::init_log_bridge(None);
        Self::with_config_path(Config::config_path())
    }

    /// Load config from `config_path` (creating it if missing) and register
    /// the settings command.
    pub fn with_config_path(config_path: impl Into<PathBuf>) -> Result<Self> {
        let host = PluginHost::new(config_path);
        let config = Config::load_from(host.config_path())?;
        Ok(Self::new(config, host))
    }

    /// Set up the plugin around an already loaded config.
    pub fn new(config: Config, host: PluginHost) -> Self {
        let mut commands = CommandManager::new();
        let settings = SettingsUI::new(PLUGIN_NAME);
        settings.register_command(&mut commands);

        log::info!(
            "{} loaded with {} tabs (config: {:?})",
            PLUGIN_NAME,
            config.tabs.len(),
            host.config_path()
        );

        Self {
            config,
            commands,
            settings,
            host,
        }
    }

    /// Route a line of chat input to the command registry. Returns `true`
    /// if it was a known command.
    pub fn handle_command(&mut self, input: &str) -> bool {
        self.commands.dispatch(input)
    }

    /// Draw the plugin's UI for one frame and carry out any side effects of
    /// a settings save.
    pub fn draw(&mut self, ctx: &egui::Context) {
        let actions = self.settings.show(ctx, &mut self.config);
        self.process_actions(&actions);
    }

    /// Hand settings actions to the host.
    pub fn process_actions(&mut self, actions: &[SettingsWindowAction]) {
        for action in actions {
            log::debug!("Processing settings action {:?}", action);
            self.host.handle_action(*action, &self.config);
        }
    }
}

impl Drop for Plugin {
    fn drop(&mut self) {
        self.settings.unregister_command(&mut self.commands);
        log::info!("{} unloaded", PLUGIN_NAME);
    }
}
