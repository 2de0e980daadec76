// Command
//
// The invoker (think: a button) triggers an action without knowing who
// carries it out. Each command object is registered under a name and runs a
// set of instructions on its receiver. Commands hold no state of their own,
// so one command can be reused by several invokers.

use crate::error::Result;
use crate::example::{Category, PatternExample, RunContext, Transcript};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

// ============================================================================
// Example: Command Pattern - Invoker, Commands and Receiver
// ============================================================================

pub trait Command {
    fn execute(&self);
}

/// Performs the actual work and keeps a log of what it did.
#[derive(Debug, Default)]
pub struct Receiver {
    log: RefCell<Vec<String>>,
}

impl Receiver {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn run_command_1(&self) {
        self.record("Executing Command 1");
    }

    pub fn run_command_2(&self) {
        self.record("Executing Command 2");
    }

    pub fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    fn record(&self, line: &str) {
        tracing::info!("{line}");
        self.log.borrow_mut().push(line.to_string());
    }
}

pub struct Command1 {
    receiver: Rc<Receiver>,
}

impl Command1 {
    pub fn new(receiver: Rc<Receiver>) -> Self {
        Self { receiver }
    }
}

impl Command for Command1 {
    fn execute(&self) {
        self.receiver.run_command_1();
    }
}

pub struct Command2 {
    receiver: Rc<Receiver>,
}

impl Command2 {
    pub fn new(receiver: Rc<Receiver>) -> Self {
        Self { receiver }
    }
}

impl Command for Command2 {
    fn execute(&self) {
        self.receiver.run_command_2();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Execution {
    Executed,
    NotRecognized(String),
}

impl Execution {
    pub fn message(&self) -> Option<String> {
        match self {
            Execution::Executed => None,
            Execution::NotRecognized(name) => Some(format!("Command [{name}] not recognised")),
        }
    }
}

#[derive(Default)]
pub struct Invoker {
    commands: HashMap<String, Box<dyn Command>>,
    history: Vec<String>,
}

impl Invoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `command` under `name`, replacing any earlier registration.
    pub fn register(&mut self, name: impl Into<String>, command: Box<dyn Command>) {
        self.commands.insert(name.into(), command);
    }

    pub fn execute(&mut self, name: &str) -> Execution {
        match self.commands.get(name) {
            Some(command) => {
                command.execute();
                self.history.push(name.to_string());
                Execution::Executed
            }
            None => {
                let outcome = Execution::NotRecognized(name.to_string());
                if let Some(message) = outcome.message() {
                    tracing::warn!("{message}");
                }
                outcome
            }
        }
    }

    /// Names of the commands that ran, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}

// ============================================================================
// Catalog Entry
// ============================================================================

pub struct CommandExample;

impl PatternExample for CommandExample {
    fn name(&self) -> &'static str {
        "command"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "decouple the invoker of an action from the receiver performing it"
    }

    fn run(&self, _ctx: &mut RunContext<'_>) -> Result<Transcript> {
        let receiver = Receiver::new();
        let mut invoker = Invoker::new();
        invoker.register("1", Box::new(Command1::new(Rc::clone(&receiver))));
        invoker.register("2", Box::new(Command2::new(Rc::clone(&receiver))));

        let mut transcript = Transcript::new();
        for name in ["1", "2", "3"] {
            if let Some(message) = invoker.execute(name).message() {
                transcript.push(message);
            } else if let Some(line) = receiver.log().last() {
                transcript.push(line.clone());
            }
        }
        Ok(transcript)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;

    fn wired() -> (Rc<Receiver>, Invoker) {
        let receiver = Receiver::new();
        let mut invoker = Invoker::new();
        invoker.register("1", Box::new(Command1::new(Rc::clone(&receiver))));
        invoker.register("2", Box::new(Command2::new(Rc::clone(&receiver))));
        (receiver, invoker)
    }

    #[test]
    fn test_registered_commands_reach_receiver() {
        let (receiver, mut invoker) = wired();

        assert_eq!(invoker.execute("1"), Execution::Executed);
        assert_eq!(invoker.execute("2"), Execution::Executed);
        assert_eq!(receiver.log(), vec!["Executing Command 1", "Executing Command 2"]);
        assert_eq!(invoker.history(), ["1", "2"]);
    }

    #[test]
    fn test_unknown_command_is_reported_not_failed() {
        let (receiver, mut invoker) = wired();

        let outcome = invoker.execute("missing");
        assert_eq!(outcome, Execution::NotRecognized("missing".into()));
        assert_eq!(outcome.message().unwrap(), "Command [missing] not recognised");
        assert!(receiver.log().is_empty());
        assert!(invoker.history().is_empty());
    }

    #[test]
    fn test_reregistering_replaces_command() {
        let (receiver, mut invoker) = wired();
        invoker.register("1", Box::new(Command2::new(Rc::clone(&receiver))));

        invoker.execute("1");
        assert_eq!(receiver.log(), vec!["Executing Command 2"]);
        assert!(invoker.is_registered("1"));
    }

    #[test]
    fn test_example_transcript() {
        let config = CatalogConfig::default();
        let transcript = CommandExample.run(&mut RunContext::new(&config)).unwrap();
        assert_eq!(
            transcript.lines(),
            [
                "Executing Command 1",
                "Executing Command 2",
                "Command [3] not recognised"
            ]
        );
    }
}
