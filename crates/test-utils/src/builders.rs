use screenwatch::types::{Bindings, CommandInvocation};

/// Build a `CommandInvocation` from string slices.
pub fn invocation(tokens: &[&str]) -> CommandInvocation {
    CommandInvocation::new(tokens.iter().map(|s| s.to_string()).collect())
}

/// Builder for `Bindings` to simplify test setup.
#[derive(Debug, Default)]
pub struct BindingsBuilder {
    lock: Option<CommandInvocation>,
    unlock: Option<CommandInvocation>,
}

impl BindingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(mut self, tokens: &[&str]) -> Self {
        self.lock = Some(invocation(tokens));
        self
    }

    pub fn unlock(mut self, tokens: &[&str]) -> Self {
        self.unlock = Some(invocation(tokens));
        self
    }

    pub fn build(self) -> Bindings {
        Bindings::new(self.lock, self.unlock)
    }
}
