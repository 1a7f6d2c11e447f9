//! SettingsUI state management methods.
//!
//! Covers construction, toggle-command registration, the hidden/shown
//! snapshot lifecycle and committing the snapshot back to the store.

use chat_overlay_config::Config;
use std::collections::HashSet;

use super::{FooterAction, SETTINGS_COMMAND, SettingsUI};
use crate::{CommandRegistrar, SettingsDraft, SettingsWindowAction, VisibilityFlag};

impl SettingsUI {
    /// Create a hidden settings window titled after the owning plugin.
    pub fn new(plugin_name: &str) -> Self {
        Self {
            title: format!("{} settings", plugin_name),
            visible: VisibilityFlag::new(false),
            was_visible: false,
            draft: None,
            collapsed_sections: HashSet::new(),
        }
    }

    /// Bind [`SETTINGS_COMMAND`] to a callback that toggles this window.
    pub fn register_command(&self, registrar: &mut dyn CommandRegistrar) {
        let visible = self.visible.clone();
        let added = registrar.add_handler(
            SETTINGS_COMMAND,
            "Toggle the chat overlay settings",
            Box::new(move |_command, _args| {
                let now_visible = visible.toggle();
                log::debug!("Settings window toggled by command (visible: {})", now_visible);
            }),
        );
        if !added {
            log::warn!("Command {} is already registered", SETTINGS_COMMAND);
        }
    }

    /// Remove the toggle command binding. Must be called before the window
    /// is dropped.
    pub fn unregister_command(&self, registrar: &mut dyn CommandRegistrar) {
        if !registrar.remove_handler(SETTINGS_COMMAND) {
            log::warn!("Command {} was not registered", SETTINGS_COMMAND);
        }
    }

    /// Handle to the shared visibility flag.
    pub fn visibility(&self) -> VisibilityFlag {
        self.visible.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn open(&mut self) {
        self.visible.set(true);
    }

    /// Close without saving. The draft is dropped on the next frame.
    pub fn close(&mut self) {
        self.visible.set(false);
    }

    pub fn toggle(&mut self) {
        self.visible.toggle();
    }

    /// The current working copy, if the window is open.
    pub fn draft(&self) -> Option<&SettingsDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut SettingsDraft> {
        self.draft.as_mut()
    }

    /// Whether the working copy differs from `config`.
    pub fn has_changes(&self, config: &Config) -> bool {
        self.draft
            .as_ref()
            .is_some_and(|draft| draft.differs_from(config))
    }

    /// Advance the hidden/shown lifecycle for a new frame.
    ///
    /// On the frame the window appears the draft is (re)built from `config`;
    /// on the frame it disappears the draft is dropped. Returns whether the
    /// window should be drawn this frame.
    pub fn begin_frame(&mut self, config: &Config) -> bool {
        let visible = self.visible.get();
        if visible && !self.was_visible {
            log::info!("Settings window opened");
            self.initialise(config);
        } else if !visible && self.was_visible {
            log::info!("Settings window closed");
            self.draft = None;
        }
        self.was_visible = visible;
        visible
    }

    /// Rebuild the working copy from `config`, discarding any edits.
    pub fn initialise(&mut self, config: &Config) {
        self.draft = Some(SettingsDraft::from_config(config));
    }

    /// Copy the working copy into `config` and return the side effects the
    /// host must carry out. The draft is rebuilt from the updated store.
    ///
    /// Does nothing if the window has no draft.
    pub fn commit(&mut self, config: &mut Config) -> Vec<SettingsWindowAction> {
        let Some(draft) = self.draft.take() else {
            return Vec::new();
        };

        let hide_chat = draft.hide_chat;
        let changes = draft.apply_to(config);
        log::info!(
            "Settings saved (font size changed: {}, hide chat changed: {})",
            changes.font_size_changed,
            changes.hide_chat_changed
        );

        let mut actions = vec![
            SettingsWindowAction::SaveConfig,
            SettingsWindowAction::FilterAllTabs,
        ];
        if changes.font_size_changed {
            actions.push(SettingsWindowAction::RebuildFonts);
        }
        if changes.hide_chat_changed && !hide_chat {
            actions.push(SettingsWindowAction::SetChatInteractable(true));
        }

        self.initialise(config);
        actions
    }

    /// Carry out a footer button or the close button.
    ///
    /// Closing hides the window; the draft goes on the next
    /// [`begin_frame`](Self::begin_frame).
    pub fn apply_footer_action(
        &mut self,
        action: FooterAction,
        config: &mut Config,
    ) -> Vec<SettingsWindowAction> {
        log::debug!("Settings: footer action {:?}", action);
        match action {
            FooterAction::Save => self.commit(config),
            FooterAction::SaveAndClose => {
                let actions = self.commit(config);
                self.close();
                actions
            }
            FooterAction::Discard | FooterAction::Close => {
                self.close();
                Vec::new()
            }
        }
    }
}
