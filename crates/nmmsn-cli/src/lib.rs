//! Library side of the `nmmsn` command.

pub mod commands;
pub mod logging;
pub mod settings;
