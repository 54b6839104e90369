//! Exit code constants for the CLI application.
//!
//! Centralised so every command maps outcomes the same way.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code: bad arguments, invalid configuration or a
/// failed command.
pub const ERROR: i32 = 2;
