/// JSON bridge command.
pub mod json;
/// Message conversion command.
pub mod message;
/// Schema population command.
pub mod populate;
/// Builtin schema listing command.
pub mod schema;

pub(crate) mod print;
pub(crate) mod util;
