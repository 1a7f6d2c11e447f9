//! End-to-end tests for the plugin: command toggle, drawing and saving.

use chat_overlay::config::{ChatType, Config};
use chat_overlay::settings_ui::SETTINGS_COMMAND;
use chat_overlay::{Plugin, PluginHost};

fn run_frame(plugin: &mut Plugin, ctx: &egui::Context) {
    let _ = ctx.run(egui::RawInput::default(), |ctx| plugin.draw(ctx));
}

#[test]
fn test_plugin_registers_settings_command() {
    let dir = tempfile::tempdir().unwrap();
    let plugin = Plugin::with_config_path(dir.path().join("config.yaml")).unwrap();

    assert!(plugin.commands.is_registered(SETTINGS_COMMAND));
    assert!(plugin.commands.help_message(SETTINGS_COMMAND).is_some());
    assert!(dir.path().join("config.yaml").exists());
}

#[test]
fn test_command_toggles_settings_window() {
    let ctx = egui::Context::default();
    let mut plugin = Plugin::new(Config::default(), PluginHost::new("unused.yaml"));

    assert!(plugin.handle_command(SETTINGS_COMMAND));
    run_frame(&mut plugin, &ctx);
    assert!(plugin.settings.is_visible());
    assert!(plugin.settings.draft().is_some());

    assert!(plugin.handle_command(SETTINGS_COMMAND));
    run_frame(&mut plugin, &ctx);
    assert!(!plugin.settings.is_visible());
    assert!(plugin.settings.draft().is_none());

    assert!(!plugin.handle_command("/unknown"));
}

#[test]
fn test_save_persists_and_fires_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let ctx = egui::Context::default();
    let mut plugin = Plugin::with_config_path(&path).unwrap();
    plugin.config.hide_chat = true;
    plugin.host.chat_interactable = false;

    plugin.handle_command(SETTINGS_COMMAND);
    run_frame(&mut plugin, &ctx);
    {
        let draft = plugin.settings.draft_mut().unwrap();
        draft.hide_chat = false;
        draft.font_size = 20.0;
        draft.set_colour(ChatType::Party, [0x12, 0x34, 0x56]);
    }

    let actions = plugin.settings.commit(&mut plugin.config);
    plugin.process_actions(&actions);

    assert_eq!(plugin.host.saves, 1);
    assert_eq!(plugin.host.refilters, 1);
    assert!(plugin.host.take_font_rebuild());
    assert!(!plugin.host.take_font_rebuild());
    assert!(plugin.host.chat_interactable);

    let on_disk = Config::load_from(&path).unwrap();
    assert_eq!(on_disk, plugin.config);
    assert_eq!(on_disk.chat_colours.get(&ChatType::Party), Some(&0x123456ff));
}

#[test]
fn test_closing_without_save_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    let ctx = egui::Context::default();
    let mut plugin = Plugin::with_config_path(&path).unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    plugin.handle_command(SETTINGS_COMMAND);
    run_frame(&mut plugin, &ctx);
    plugin.settings.draft_mut().unwrap().tabs.clear();

    plugin.handle_command(SETTINGS_COMMAND);
    run_frame(&mut plugin, &ctx);

    assert_eq!(plugin.config, Config::default());
    assert_eq!(plugin.host.saves, 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}
