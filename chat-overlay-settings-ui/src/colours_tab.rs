//! Per-chat-type colour overrides.

use chat_overlay_config::{ChatType, rgba_to_rgb};
use std::collections::HashSet;

use crate::SettingsDraft;
use crate::section::collapsing_section;

/// Show the chat colours section.
pub fn show(
    ui: &mut egui::Ui,
    draft: &mut SettingsDraft,
    changes_this_frame: &mut bool,
    collapsed: &mut HashSet<String>,
) {
    collapsing_section(ui, "Chat colours", "chat_colours", false, collapsed, |ui| {
        for ty in ChatType::all() {
            ui.horizontal(|ui| {
                if ui
                    .button("Default")
                    .on_hover_text("Reset to the default colour")
                    .clicked()
                {
                    draft.reset_colour(*ty);
                    *changes_this_frame = true;
                }

                let mut rgb = rgba_to_rgb(draft.effective_colour(*ty));
                if ui.color_edit_button_srgb(&mut rgb).changed() {
                    draft.set_colour(*ty, rgb);
                    *changes_this_frame = true;
                }

                ui.label(ty.display_name());
            });
        }
    });
}
