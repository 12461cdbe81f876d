// Application layer: wiring between the CLI surface and the API facade.

#[cfg(feature = "cli")]
pub mod commands;
