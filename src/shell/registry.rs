//! Command registry - name to command lookup.

use std::collections::BTreeMap;

use crate::shell::command::Command;
use crate::shell::commands;

/// Commands available in every session.
///
/// To add a new command:
/// 1. Create a new file in `commands/` directory
/// 2. Implement the `Command` trait
/// 3. Export a static instance
/// 4. Add it to this array
static BUILTIN_COMMANDS: &[&dyn Command] = &[
    &commands::HELP,
    &commands::DIR,
    &commands::EXIT,
    &commands::PWD,
    &commands::CD,
    &commands::CAT,
];

/// Commands keyed by uppercase name, iterated in name order.
#[derive(Default)]
pub struct Registry {
    commands: BTreeMap<String, &'static dyn Command>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in commands.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for cmd in BUILTIN_COMMANDS {
            registry.register(*cmd);
        }
        registry
    }

    /// Insert `cmd` under its uppercase name. A command already registered
    /// under that name is replaced.
    pub fn register(&mut self, cmd: &'static dyn Command) {
        let key = cmd.name().to_uppercase();
        if self.commands.insert(key, cmd).is_some() {
            debug!("Replaced command {}", cmd.name());
        }
    }

    /// Case-insensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&'static dyn Command> {
        self.commands.get(&name.to_uppercase()).copied()
    }

    /// All commands sorted by name. Each call starts a fresh iteration.
    pub fn list_all(&self) -> impl Iterator<Item = &'static dyn Command> + '_ {
        self.commands.values().copied()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::command::{Args, Execution, Flow};
    use crate::ShellResult;

    struct Named(&'static str, &'static str);

    impl Command for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn description(&self) -> &'static str {
            self.1
        }

        fn execute(&self, _exec: &mut Execution<'_>, _args: Option<&Args<'_>>) -> ShellResult<Flow> {
            Ok(Flow::Continue)
        }
    }

    static FIRST: Named = Named("echo", "first");
    static SECOND: Named = Named("ECHO", "second");

    #[test]
    fn builtin_lists_six_commands_sorted() {
        let registry = Registry::builtin();
        let names: Vec<_> = registry.list_all().map(|c| c.name()).collect();
        assert_eq!(names, vec!["CAT", "CD", "DIR", "EXIT", "HELP", "PWD"]);
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn list_all_is_restartable() {
        let registry = Registry::builtin();
        assert_eq!(registry.list_all().count(), registry.list_all().count());
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = Registry::builtin();
        for cmd in registry.list_all() {
            let upper = registry.lookup(cmd.name()).unwrap();
            let lower = registry.lookup(&cmd.name().to_lowercase()).unwrap();
            assert_eq!(upper.name(), lower.name());
            assert!(std::ptr::addr_eq(upper, lower));
        }
        assert_eq!(registry.lookup("Exit").map(|c| c.name()), Some("EXIT"));
    }

    #[test]
    fn lookup_of_unknown_name_fails() {
        let registry = Registry::builtin();
        assert!(registry.lookup("foo").is_none());
        assert!(registry.lookup("").is_none());
    }

    #[test]
    fn keys_are_uppercase_names() {
        let mut registry = Registry::new();
        registry.register(&FIRST);
        assert_eq!(registry.commands.keys().collect::<Vec<_>>(), vec!["ECHO"]);
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = Registry::new();
        registry.register(&FIRST);
        registry.register(&SECOND);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("echo").unwrap().description(), "second");
    }
}
