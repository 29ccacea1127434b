//! Exit codes for the codegen CLI.
//!
//! Scripts and CI jobs can tell a stale output apart from a broken config or
//! an unparsable document by the exit code alone.

/// Exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - everything generated or up to date
    Success = 0,
    /// `check` found outputs that are missing or differ from a fresh generation
    StaleOutput = 1,
    /// Configuration error (missing or invalid config file, no matching documents)
    ConfigError = 2,
    /// I/O error (file read/write failure)
    IoError = 4,
    /// Parse error (invalid GraphQL syntax or unusable documents)
    ParseError = 5,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        tracing::debug!(code = self.code(), reason = %self, "Exiting");
        std::process::exit(self.code())
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::StaleOutput => write!(f, "stale output"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::IoError => write!(f, "I/O error"),
            Self::ParseError => write!(f, "parse error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            ExitCode::Success,
            ExitCode::StaleOutput,
            ExitCode::ConfigError,
            ExitCode::IoError,
            ExitCode::ParseError,
        ]
        .map(ExitCode::code);

        assert_eq!(codes, [0, 1, 2, 4, 5]);
    }

    #[test]
    fn test_display() {
        assert_eq!(ExitCode::StaleOutput.to_string(), "stale output");
        assert_eq!(ExitCode::ParseError.to_string(), "parse error");
    }
}
