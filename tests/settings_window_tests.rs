//! Tests for the settings window lifecycle

use chat_overlay::config::{ChatSource, ChatType, Config};
use chat_overlay::settings_ui::{SettingsDraft, SettingsUI, SettingsWindowAction};

fn open_settings(config: &Config) -> SettingsUI {
    let mut settings = SettingsUI::new("Chat Overlay");
    settings.open();
    assert!(settings.begin_frame(config));
    settings
}

#[test]
fn test_unchanged_save_requests_only_persist_and_refilter() {
    let mut config = Config::default();
    let before = config.clone();
    let mut settings = open_settings(&config);

    assert_eq!(
        settings.commit(&mut config),
        vec![
            SettingsWindowAction::SaveConfig,
            SettingsWindowAction::FilterAllTabs,
        ]
    );
    assert_eq!(config, before);
}

#[test]
fn test_initialise_twice_gives_identical_drafts() {
    let config = Config::default();
    let mut settings = open_settings(&config);
    let first = settings.draft().cloned().unwrap();

    settings.initialise(&config);
    assert_eq!(settings.draft(), Some(&first));

    settings.draft_mut().unwrap().tabs[0].set_enabled(ChatType::Say, false);
    assert_eq!(first, SettingsDraft::from_config(&config));
}

#[test]
fn test_discard_keeps_store_unchanged() {
    let config = Config::default();
    let before = config.clone();
    let mut settings = open_settings(&config);

    {
        let draft = settings.draft_mut().unwrap();
        draft.font_size = 12.0;
        draft.sidebar_tab_view = true;
        draft.reset_colour(ChatType::Say);
        draft.set_colour(ChatType::Shout, [0, 0, 0]);
        draft.add_tab();
        draft.move_tab_up(1);
        draft.remove_tab(1);
    }

    settings.close();
    assert!(!settings.begin_frame(&config));
    assert_eq!(config, before);
}

#[test]
fn test_save_without_close_stays_open_with_fresh_draft() {
    let mut config = Config::default();
    let mut settings = open_settings(&config);
    settings.draft_mut().unwrap().sidebar_tab_view = true;

    let actions = settings.commit(&mut config);
    assert!(config.sidebar_tab_view);
    assert!(actions.contains(&SettingsWindowAction::SaveConfig));
    assert!(actions.contains(&SettingsWindowAction::FilterAllTabs));

    assert!(settings.is_visible());
    assert!(settings.begin_frame(&config));
    assert_eq!(settings.draft(), Some(&SettingsDraft::from_config(&config)));
}

#[test]
fn test_each_save_requests_refilter() {
    let mut config = Config::default();
    let mut settings = open_settings(&config);

    for _ in 0..3 {
        let actions = settings.commit(&mut config);
        assert_eq!(
            actions,
            vec![
                SettingsWindowAction::SaveConfig,
                SettingsWindowAction::FilterAllTabs
            ]
        );
    }
}

#[test]
fn test_enabling_source_then_clearing_keeps_entry_after_save() {
    let mut config = Config::default();
    let mut settings = open_settings(&config);
    {
        let tab = &mut settings.draft_mut().unwrap().tabs[0];
        tab.set_source(ChatType::RetainerSale, ChatSource::SELF, true);
        tab.set_source(ChatType::RetainerSale, ChatSource::SELF, false);
    }

    settings.commit(&mut config);
    assert_eq!(
        config.tabs[0].chat_codes.get(&ChatType::RetainerSale),
        Some(&ChatSource::empty())
    );
}

#[test]
fn test_has_changes_tracks_edits_until_save() {
    let mut config = Config::default();
    let mut settings = open_settings(&config);
    assert!(!settings.has_changes(&config));

    settings.draft_mut().unwrap().hide_chat = true;
    assert!(settings.has_changes(&config));

    settings.commit(&mut config);
    assert!(!settings.has_changes(&config));
}
