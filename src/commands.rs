//! Text command registry.
//!
//! Maps slash commands (e.g. `/chatoverlay`) to handlers registered by UI
//! components. Arguments are passed through verbatim; parsing them is the
//! handler's business.

use chat_overlay_settings_ui::{CommandHandler, CommandRegistrar};
use std::collections::HashMap;

/// A registered command.
struct CommandInfo {
    help_message: String,
    handler: CommandHandler,
}

/// Registry of text commands mapping command names to handlers.
#[derive(Default)]
pub struct CommandManager {
    commands: HashMap<String, CommandInfo>,
}

impl CommandManager {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Help text for a registered command.
    pub fn help_message(&self, command: &str) -> Option<&str> {
        self.commands
            .get(command)
            .map(|info| info.help_message.as_str())
    }

    /// Registered command names, sorted.
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run the handler for a line of chat input such as `/chatoverlay` or
    /// `/chatoverlay some args`.
    ///
    /// Returns `true` if a handler ran.
    pub fn dispatch(&mut self, input: &str) -> bool {
        let input = input.trim();
        let (command, args) = match input.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim_start()),
            None => (input, ""),
        };

        match self.commands.get_mut(command) {
            Some(info) => {
                log::debug!("Dispatching command {} (args: {:?})", command, args);
                (info.handler)(command, args);
                true
            }
            None => {
                log::debug!("No handler for command {:?}", command);
                false
            }
        }
    }
}

impl CommandRegistrar for CommandManager {
    fn add_handler(
        &mut self,
        command: &str,
        help_message: &str,
        handler: CommandHandler,
    ) -> bool {
        if self.commands.contains_key(command) {
            log::warn!("Command {} already has a handler", command);
            return false;
        }
        log::info!("Registered command: {}", command);
        self.commands.insert(
            command.to_string(),
            CommandInfo {
                help_message: help_message.to_string(),
                handler,
            },
        );
        true
    }

    fn remove_handler(&mut self, command: &str) -> bool {
        let removed = self.commands.remove(command).is_some();
        if removed {
            log::info!("Unregistered command: {}", command);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_handler(counter: &Arc<AtomicUsize>) -> CommandHandler {
        let counter = Arc::clone(counter);
        Box::new(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_dispatch_runs_handler() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut commands = CommandManager::new();
        assert!(commands.add_handler("/test", "Test command", counting_handler(&counter)));

        assert!(commands.dispatch("/test"));
        assert!(commands.dispatch("  /test with args  "));
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let mut commands = CommandManager::new();
        assert!(!commands.dispatch("/missing"));
        assert!(!commands.dispatch(""));
    }

    #[test]
    fn test_duplicate_registration_keeps_first() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut commands = CommandManager::new();
        assert!(commands.add_handler("/test", "first", counting_handler(&first)));
        assert!(!commands.add_handler("/test", "second", counting_handler(&second)));

        commands.dispatch("/test");
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
        assert_eq!(commands.help_message("/test"), Some("first"));
    }

    #[test]
    fn test_args_are_passed_through() {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut commands = CommandManager::new();
        commands.add_handler(
            "/echo",
            "Echo",
            Box::new(move |command, args| sink.lock().push((command.to_string(), args.to_string()))),
        );

        commands.dispatch("/echo   a b  c");
        assert_eq!(
            seen.lock().as_slice(),
            &[("/echo".to_string(), "a b  c".to_string())]
        );
    }

    #[test]
    fn test_remove_handler() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut commands = CommandManager::new();
        commands.add_handler("/test", "Test", counting_handler(&counter));

        assert!(commands.remove_handler("/test"));
        assert!(!commands.remove_handler("/test"));
        assert!(!commands.dispatch("/test"));
        assert!(commands.command_names().is_empty());
    }
}
