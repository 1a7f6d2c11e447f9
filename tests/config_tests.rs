use chat_overlay::config::{ChatSource, ChatType, Config, Tab};

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert!(!config.hide_chat);
    assert!(config.native_item_tooltips);
    assert!(!config.sidebar_tab_view);
    assert_eq!(config.font_size, 17.0);
    assert!(config.chat_colours.is_empty());
    assert_eq!(config.tabs.len(), 1);
    assert_eq!(config.tabs[0].name, "General");
}

#[test]
fn test_default_general_tab_accepts_every_source() {
    let config = Config::default();
    let general = &config.tabs[0];
    for ty in ChatType::general() {
        assert_eq!(general.chat_codes.get(ty), Some(&ChatSource::all()));
    }
    assert!(!general.is_enabled(ChatType::BattleSystem));
}

#[test]
fn test_config_yaml_serialization() {
    let mut config = Config::default();
    config.sidebar_tab_view = true;
    config.chat_colours.insert(ChatType::TellIncoming, 0xff00ffff);

    let yaml = serde_yaml_ng::to_string(&config).unwrap();
    assert!(yaml.contains("sidebar_tab_view: true"));
    assert!(yaml.contains("tell_incoming"));

    let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_empty_yaml_gives_defaults() {
    let parsed: Config = serde_yaml_ng::from_str("{}").unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn test_save_and_load_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let mut config = Config::default();
    let mut tab = Tab::new("Enemies");
    tab.chat_codes.insert(
        ChatType::BattleSystem,
        ChatSource::ENGAGED_ENEMY | ChatSource::UNENGAGED_ENEMY,
    );
    tab.display_timestamp = false;
    config.tabs.push(tab);

    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}
