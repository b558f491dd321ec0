//! otrs.Console.pl command synthesis and dispatch

pub mod command;
pub mod dispatcher;
pub mod executor;

pub use command::ConsoleCommand;
pub use dispatcher::{DispatchSummary, Dispatcher, KindSummary};
pub use executor::{
    CommandExecutor, ConsoleConfig, ConsoleExecutor, ExecutionOutcome, DEFAULT_CONSOLE,
    DEFAULT_INTERPRETER,
};
