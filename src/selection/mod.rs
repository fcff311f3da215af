pub mod state;

pub use state::{ArmedTools, PartialTools, ToolSelection};
