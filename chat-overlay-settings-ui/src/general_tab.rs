//! General settings: chat visibility, tooltips, tab layout and font size.

use chat_overlay_config::defaults::{FONT_SIZE_STEP, MAX_FONT_SIZE, MIN_FONT_SIZE};

use crate::SettingsDraft;

/// Show the general settings controls.
pub fn show(ui: &mut egui::Ui, draft: &mut SettingsDraft, changes_this_frame: &mut bool) {
    if ui.checkbox(&mut draft.hide_chat, "Hide chat").changed() {
        *changes_this_frame = true;
    }

    if ui
        .checkbox(&mut draft.native_item_tooltips, "Show native item tooltips")
        .on_hover_text("Use the game's own tooltip when hovering an item link")
        .changed()
    {
        *changes_this_frame = true;
    }

    if ui
        .checkbox(&mut draft.sidebar_tab_view, "Show tabs in a sidebar")
        .changed()
    {
        *changes_this_frame = true;
    }

    ui.horizontal(|ui| {
        ui.label("Font size:");
        if ui
            .add(
                egui::DragValue::new(&mut draft.font_size)
                    .speed(FONT_SIZE_STEP)
                    .range(MIN_FONT_SIZE..=MAX_FONT_SIZE),
            )
            .changed()
        {
            *changes_this_frame = true;
        }
    });
}
