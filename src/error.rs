//! Error types for the roster manager and value types.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the crate.

use thiserror::Error;

/// The main error type for the crate.
///
/// All fallible operations return this error type, making it easy to handle
/// errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staff_roster::error::RosterError;
///
/// let error = RosterError::FileNotFound {
///     path: "/missing/roster.xml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Roster file not found: /missing/roster.xml");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A file could not be read or written.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The path being read or written.
        path: String,
        /// A description of the underlying I/O failure.
        message: String,
    },

    /// An XML document could not be parsed or produced.
    #[error("Failed to parse XML: {message}")]
    XmlParse {
        /// A description of the XML error.
        message: String,
    },

    /// A field's text did not parse as a number.
    #[error("Invalid number for '{field}': '{text}'")]
    InvalidNumber {
        /// The field being parsed.
        field: &'static str,
        /// The text that failed to parse.
        text: String,
    },

    /// An XML fragment did not structurally match the value type being decoded.
    #[error("Cannot decode {expected} from XML: {message}")]
    ValueDecode {
        /// The value type being reconstructed.
        expected: &'static str,
        /// A description of the structural mismatch.
        message: String,
    },

    /// Arithmetic was attempted between values of different variants.
    #[error("Unsupported operand types: {left} and {right}")]
    OperandMismatch {
        /// The variant of the left operand.
        left: &'static str,
        /// The variant of the right operand.
        right: &'static str,
    },

    /// An interactive command was not recognized.
    #[error("Unknown command: {input}")]
    UnknownCommand {
        /// The input that was not recognized.
        input: String,
    },

    /// An interactive command was missing a required argument.
    #[error("Command '{command}' requires a {argument} argument")]
    MissingArgument {
        /// The command that was given.
        command: &'static str,
        /// The argument that was missing.
        argument: &'static str,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_displays_path() {
        let error = RosterError::FileNotFound {
            path: "/missing/roster.xml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Roster file not found: /missing/roster.xml"
        );
    }

    #[test]
    fn test_io_displays_path_and_message() {
        let error = RosterError::Io {
            path: "/tmp/roster.xml".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "I/O error on '/tmp/roster.xml': permission denied"
        );
    }

    #[test]
    fn test_invalid_number_displays_field_and_text() {
        let error = RosterError::InvalidNumber {
            field: "year",
            text: "two thousand".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid number for 'year': 'two thousand'"
        );
    }

    #[test]
    fn test_operand_mismatch_displays_both_variants() {
        let error = RosterError::OperandMismatch {
            left: "Money",
            right: "Fraction",
        };
        assert_eq!(
            error.to_string(),
            "Unsupported operand types: Money and Fraction"
        );
    }

    #[test]
    fn test_missing_argument_displays_command_and_argument() {
        let error = RosterError::MissingArgument {
            command: "select",
            argument: "period",
        };
        assert_eq!(
            error.to_string(),
            "Command 'select' requires a period argument"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<RosterError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_file_not_found() -> RosterResult<()> {
            Err(RosterError::FileNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> RosterResult<()> {
            returns_file_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
