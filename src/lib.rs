//! Research Voice - spoken and typed commands for selecting research sources

pub mod command;
pub mod core;
pub mod session;
pub mod sources;
