//! Display methods for SettingsUI.
//!
//! Contains: show() and the scrollable section body.

use chat_overlay_config::Config;
use egui::{Context, Window};

use super::{FooterAction, SettingsUI};
use crate::section::{FOOTER_HEIGHT, section_spacing};
use crate::{SettingsDraft, SettingsWindowAction};

impl SettingsUI {
    /// Draw the settings window for this frame.
    ///
    /// Must be called once per frame. Returns the side effects of a save,
    /// if the user saved this frame; the store has already been updated
    /// when they are returned.
    pub fn show(&mut self, ctx: &Context, config: &mut Config) -> Vec<SettingsWindowAction> {
        if !self.begin_frame(config) {
            return Vec::new();
        }

        let Some(draft) = self.draft.as_mut() else {
            return Vec::new();
        };

        let has_changes = draft.differs_from(config);
        let collapsed = &mut self.collapsed_sections;
        let mut footer_action = None;
        let mut open = true;
        let mut changes_this_frame = false;

        Window::new(self.title.as_str())
            .id(egui::Id::new("chat_overlay_settings"))
            .resizable(true)
            .default_width(500.0)
            .default_height(600.0)
            .open(&mut open)
            .show(ctx, |ui| {
                let body_height = (ui.available_height() - FOOTER_HEIGHT).max(100.0);
                egui::ScrollArea::vertical()
                    .id_salt("settings_body")
                    .max_height(body_height)
                    .show(ui, |ui| {
                        show_sections(ui, draft, &mut changes_this_frame, collapsed);
                    });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        footer_action = Some(FooterAction::Save);
                    }
                    if ui.button("Save and close").clicked() {
                        footer_action = Some(FooterAction::SaveAndClose);
                    }
                    if ui.button("Discard").clicked() {
                        footer_action = Some(FooterAction::Discard);
                    }
                    if has_changes || changes_this_frame {
                        ui.colored_label(egui::Color32::YELLOW, "* Unsaved changes");
                    }
                });
            });

        if changes_this_frame {
            log::trace!("Settings: draft edited this frame");
        }

        if !open && footer_action.is_none() {
            footer_action = Some(FooterAction::Close);
        }

        match footer_action {
            Some(action) => self.apply_footer_action(action, config),
            None => Vec::new(),
        }
    }
}

/// Show every settings section inside the scroll area.
fn show_sections(
    ui: &mut egui::Ui,
    draft: &mut SettingsDraft,
    changes_this_frame: &mut bool,
    collapsed: &mut std::collections::HashSet<String>,
) {
    crate::general_tab::show(ui, draft, changes_this_frame);
    section_spacing(ui);
    crate::colours_tab::show(ui, draft, changes_this_frame, collapsed);
    crate::tabs_tab::show(ui, draft, changes_this_frame, collapsed);
}
