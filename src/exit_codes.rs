/// Exit codes for snipcat.
///
/// These let users and scripts distinguish a bad snippet file from a tool
/// failure.
/// Success - the snippet was merged into the catalog
pub const SUCCESS: i32 = 0;

/// Invalid input - malformed snippet file or unresolvable language
pub const INVALID_INPUT: i32 = 1;

/// Tool error - file access error or corrupt catalog
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{INVALID_INPUT, SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with invalid input code (1)
    pub fn invalid_input() -> ! {
        std::process::exit(INVALID_INPUT);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
