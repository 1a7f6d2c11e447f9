//! Helper functions for collapsible sections in the settings UI.
//!
//! Provides consistent styling and behavior for settings sections.

use std::collections::HashSet;

/// Standard width for text input controls
pub const INPUT_WIDTH: f32 = 300.0;

/// Standard width for combo boxes
pub const COMBO_WIDTH: f32 = 200.0;

/// Height reserved below the scroll area for the separator and button row
pub const FOOTER_HEIGHT: f32 = 45.0;

/// Helper to show a collapsible section with persistent state tracking.
///
/// The `collapsed_sections` set stores section IDs that have been toggled from
/// their default state, so a section keeps its open/closed state across
/// settings window open/close cycles.
pub fn collapsing_section<R>(
    ui: &mut egui::Ui,
    title: &str,
    id: &str,
    default_open: bool,
    collapsed_sections: &mut HashSet<String>,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::CollapsingResponse<R> {
    // XOR logic: toggled + default_open => closed, toggled + !default_open => open
    let is_toggled = collapsed_sections.contains(id);
    let should_be_open = is_toggled != default_open;

    let response = egui::CollapsingHeader::new(title)
        .id_salt(id)
        .default_open(should_be_open)
        .show(ui, add_contents);

    if response.header_response.clicked() {
        let section_id = id.to_string();
        if collapsed_sections.contains(&section_id) {
            collapsed_sections.remove(&section_id);
        } else {
            collapsed_sections.insert(section_id);
        }
    }

    response
}

/// Icon button with a hover tooltip.
pub fn icon_button(ui: &mut egui::Ui, icon: &str, tooltip: &str) -> bool {
    ui.button(icon).on_hover_text(tooltip).clicked()
}

/// Helper to add spacing after a section.
pub fn section_spacing(ui: &mut egui::Ui) {
    ui.add_space(12.0);
}
