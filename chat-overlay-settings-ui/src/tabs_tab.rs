//! Tab list editor.
//!
//! Contains:
//! - Add / delete / reorder tabs
//! - Per-tab name, unread count and timestamp toggles
//! - Input channel selection
//! - Per-chat-type routing with a source filter for each enabled type

use chat_overlay_config::{ChatSource, ChatType, InputChannel, Tab};
use std::collections::HashSet;

use crate::{SettingsDraft, TabEdit};
use crate::section::{COMBO_WIDTH, INPUT_WIDTH, collapsing_section, icon_button};

const NO_CHANNEL: &str = "<None>";

/// Longest tab name accepted by the name field.
const MAX_TAB_NAME_CHARS: usize = 512;

/// Show the tabs section.
pub fn show(
    ui: &mut egui::Ui,
    draft: &mut SettingsDraft,
    changes_this_frame: &mut bool,
    collapsed: &mut HashSet<String>,
) {
    collapsing_section(ui, "Tabs", "tabs", false, collapsed, |ui| {
        if icon_button(ui, "➕", "Add") {
            draft.add_tab();
            *changes_this_frame = true;
        }

        let mut pending: Option<TabEdit> = None;
        for (i, tab) in draft.tabs.iter_mut().enumerate() {
            egui::CollapsingHeader::new(tab.name.as_str())
                .id_salt(("tab", i))
                .show(ui, |ui| {
                    ui.push_id(("tab", i), |ui| {
                        ui.horizontal(|ui| {
                            if icon_button(ui, "🗑", "Delete") {
                                pending = Some(TabEdit::Delete(i));
                            }
                            if icon_button(ui, "⬆", "Move up") {
                                pending = Some(TabEdit::MoveUp(i));
                            }
                            if icon_button(ui, "⬇", "Move down") {
                                pending = Some(TabEdit::MoveDown(i));
                            }
                        });

                        show_tab(ui, tab, changes_this_frame);
                    });
                });
        }

        if let Some(edit) = pending {
            if draft.apply_tab_edit(edit) {
                log::debug!("Settings: applied tab edit {:?}", edit);
                *changes_this_frame = true;
            }
        }
    });
}

/// Show the editable fields of one tab.
fn show_tab(ui: &mut egui::Ui, tab: &mut Tab, changes_this_frame: &mut bool) {
    ui.horizontal(|ui| {
        ui.label("Name:");
        if ui
            .add(
                egui::TextEdit::singleline(&mut tab.name)
                    .char_limit(MAX_TAB_NAME_CHARS)
                    .desired_width(INPUT_WIDTH),
            )
            .changed()
        {
            *changes_this_frame = true;
        }
    });

    if ui
        .checkbox(&mut tab.display_unread, "Show unread count")
        .changed()
    {
        *changes_this_frame = true;
    }
    if ui
        .checkbox(&mut tab.display_timestamp, "Show timestamps")
        .changed()
    {
        *changes_this_frame = true;
    }

    ui.horizontal(|ui| {
        ui.label("Input channel:");
        let current = tab.input_channel;
        egui::ComboBox::from_id_salt("input_channel")
            .width(COMBO_WIDTH)
            .selected_text(current.map_or(NO_CHANNEL, InputChannel::display_name))
            .show_ui(ui, |ui| {
                if ui.selectable_label(current.is_none(), NO_CHANNEL).clicked() {
                    tab.input_channel = None;
                    *changes_this_frame = true;
                }
                for channel in InputChannel::all() {
                    if ui
                        .selectable_label(current == Some(*channel), channel.display_name())
                        .clicked()
                    {
                        tab.input_channel = Some(*channel);
                        *changes_this_frame = true;
                    }
                }
            });
    });

    egui::CollapsingHeader::new("Channels")
        .id_salt("channels")
        .show(ui, |ui| {
            for ty in ChatType::all() {
                show_chat_type(ui, tab, *ty, changes_this_frame);
            }
        });
}

/// Enable checkbox for one chat type plus, while enabled, its source flags.
fn show_chat_type(ui: &mut egui::Ui, tab: &mut Tab, ty: ChatType, changes_this_frame: &mut bool) {
    let mut enabled = tab.is_enabled(ty);
    if ui.checkbox(&mut enabled, ty.display_name()).changed() {
        tab.set_enabled(ty, enabled);
        *changes_this_frame = true;
    }

    if !enabled {
        return;
    }

    ui.indent(("sources", ty.code()), |ui| {
        egui::CollapsingHeader::new("Sources")
            .id_salt(("sources_header", ty.code()))
            .show(ui, |ui| {
                let sources = tab
                    .chat_codes
                    .get(&ty)
                    .copied()
                    .unwrap_or(ChatSource::empty());
                for source in ChatSource::each() {
                    let mut on = sources.contains(source);
                    if ui.checkbox(&mut on, source.display_name()).changed() {
                        tab.set_source(ty, source, on);
                        *changes_this_frame = true;
                    }
                }
            });
    });
}
