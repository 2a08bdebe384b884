//! Ready-made [`crate::Tool`] implementations with declared parameter
//! schemas, usable directly in workflow steps or from agent tool maps.

pub mod command;
pub mod file;
pub mod http;
pub mod parse;

pub use command::RunCommand;
pub use file::{ReadFile, WriteFile};
pub use http::{HttpGet, HttpPost};
pub use parse::{ExtractJson, strip_code_fences};
