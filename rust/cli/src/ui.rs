//! UI helper functions for terminal output.
//!
//! Every user-facing error and warning goes through these so the prefixes
//! stay consistent across commands.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_prefix() {
        let mut buf = Vec::new();
        write_error(&mut buf, "tile (1, 1) is already occupied").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Error: tile (1, 1) is already occupied\n"
        );
    }

    #[test]
    fn warning_prefix() {
        let mut buf = Vec::new();
        display_warning(&mut buf, "seed ignored").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "WARNING: seed ignored\n");
    }
}
