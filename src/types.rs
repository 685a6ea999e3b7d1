// src/types.rs

//! Shared data types: screen events, command invocations and the bindings
//! between them.

use std::fmt;

/// Notification name posted by macOS when the screen locks.
pub const SCREEN_LOCKED_NOTIFICATION: &str = "com.apple.screenIsLocked";

/// Notification name posted by macOS when the screen unlocks.
pub const SCREEN_UNLOCKED_NOTIFICATION: &str = "com.apple.screenIsUnlocked";

/// The two screen events this tool reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenEvent {
    Locked,
    Unlocked,
}

impl ScreenEvent {
    pub const ALL: [ScreenEvent; 2] = [ScreenEvent::Locked, ScreenEvent::Unlocked];

    /// Distributed notification name for this event.
    pub fn notification_name(self) -> &'static str {
        match self {
            ScreenEvent::Locked => SCREEN_LOCKED_NOTIFICATION,
            ScreenEvent::Unlocked => SCREEN_UNLOCKED_NOTIFICATION,
        }
    }
}

impl fmt::Display for ScreenEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.notification_name())
    }
}

/// A command name (or path) followed by its arguments.
///
/// An invocation may be empty when `--lock` / `--unlock` was given without
/// any following tokens. Executing an empty invocation is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandInvocation {
    argv: Vec<String>,
}

impl CommandInvocation {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// First token: the command name or path.
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// A lone token is either a command/path or a line of shell text
    /// (`"echo locked"`); the executor decides which.
    pub fn is_single_token(&self) -> bool {
        self.argv.len() == 1
    }

    /// Command word of a single token read as shell text: the first word
    /// after any leading `NAME=value` assignments.
    pub fn shell_text_command_word(&self) -> Option<&str> {
        if !self.is_single_token() {
            return None;
        }
        self.program()?
            .split_whitespace()
            .find(|word| !is_assignment(word))
    }
}

/// `NAME=value`, where NAME is a valid shell variable name.
fn is_assignment(word: &str) -> bool {
    let Some((name, _value)) = word.split_once('=') else {
        return false;
    };
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

/// One screen event paired with the (optional) command to run for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    pub event: ScreenEvent,
    pub invocation: Option<CommandInvocation>,
}

/// Both event bindings, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    lock: EventBinding,
    unlock: EventBinding,
}

impl Bindings {
    pub fn new(lock: Option<CommandInvocation>, unlock: Option<CommandInvocation>) -> Self {
        Self {
            lock: EventBinding {
                event: ScreenEvent::Locked,
                invocation: lock,
            },
            unlock: EventBinding {
                event: ScreenEvent::Unlocked,
                invocation: unlock,
            },
        }
    }

    pub fn binding(&self, event: ScreenEvent) -> &EventBinding {
        match event {
            ScreenEvent::Locked => &self.lock,
            ScreenEvent::Unlocked => &self.unlock,
        }
    }

    pub fn invocation_for(&self, event: ScreenEvent) -> Option<&CommandInvocation> {
        self.binding(event).invocation.as_ref()
    }

    /// True when neither event has anything bound.
    pub fn is_unbound(&self) -> bool {
        self.lock.invocation.is_none() && self.unlock.invocation.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inv(tokens: &[&str]) -> CommandInvocation {
        CommandInvocation::new(tokens.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn notification_names_are_distinct() {
        assert_eq!(ScreenEvent::Locked.to_string(), "com.apple.screenIsLocked");
        assert_eq!(ScreenEvent::Unlocked.to_string(), "com.apple.screenIsUnlocked");
    }

    #[test]
    fn program_is_first_token() {
        let i = inv(&["say", "hello", "world"]);
        assert_eq!(i.program(), Some("say"));
        assert_eq!(i.argv().len(), 3);
        assert!(!i.is_single_token());
        assert_eq!(i.shell_text_command_word(), None);
    }

    #[test]
    fn empty_invocation_has_no_program() {
        let i = inv(&[]);
        assert!(i.is_empty());
        assert_eq!(i.program(), None);
        assert_eq!(i.shell_text_command_word(), None);
    }

    #[test]
    fn shell_text_command_word_is_first_word() {
        let i = inv(&["echo 'Screen locked' >> /tmp/log"]);
        assert!(i.is_single_token());
        assert_eq!(i.shell_text_command_word(), Some("echo"));
    }

    #[test]
    fn shell_text_command_word_skips_assignments() {
        assert_eq!(inv(&["FOO=1 _BAR=x say hi"]).shell_text_command_word(), Some("say"));
        assert_eq!(inv(&["FOO=1"]).shell_text_command_word(), None);
        // Not assignments: invalid names.
        assert_eq!(inv(&["1X=2 say"]).shell_text_command_word(), Some("1X=2"));
        assert_eq!(inv(&["=x say"]).shell_text_command_word(), Some("=x"));
    }

    #[test]
    fn bindings_report_unbound_only_when_both_absent() {
        assert!(Bindings::new(None, None).is_unbound());
        assert!(!Bindings::new(Some(inv(&[])), None).is_unbound());

        let b = Bindings::new(None, Some(inv(&["true"])));
        assert_eq!(b.invocation_for(ScreenEvent::Locked), None);
        assert_eq!(b.invocation_for(ScreenEvent::Unlocked), Some(&inv(&["true"])));
        assert_eq!(b.binding(ScreenEvent::Unlocked).event, ScreenEvent::Unlocked);
    }
}
