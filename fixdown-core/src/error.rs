/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for the FixDown markup extension.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across all FixDown operations.
//!
//! Every error is local to a single directive: a failed render aborts that
//! directive's output cleanly and the host continues with the next block.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`FixdownError`] as the error type.
pub type Result<T> = std::result::Result<T, FixdownError>;

/// Top-level error type for all FixDown operations.
#[derive(Debug, Error)]
pub enum FixdownError {
    /// Error while loading or parsing a data dictionary.
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Error while rendering a directive into a table.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// `run` was invoked on a block carrying no `::fix` directive.
    #[error("no ::fix directive in block")]
    NoDirective,

    /// I/O error from the host environment.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while loading a FIX data dictionary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// Dictionary file could not be read.
    #[error("cannot read dictionary {}: {reason}", .path.display())]
    Io {
        /// Path of the dictionary file.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Dictionary content is not well-formed XML.
    #[error("malformed dictionary xml: {reason}")]
    Xml {
        /// Description of the parse failure.
        reason: String,
    },

    /// An element attribute is missing or carries an unusable value.
    #[error("invalid attribute '{attribute}' on <{element}>: {reason}")]
    InvalidAttribute {
        /// Element carrying the attribute.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Errors that occur while rendering a directive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The referenced dictionary could not be loaded.
    #[error("dictionary load failed: {0}")]
    Dictionary(#[from] DictionaryError),

    /// No message with the requested msgtype exists in the dictionary.
    #[error("message not found: msgtype {msg_type}")]
    MessageNotFound {
        /// The msgtype requested by the directive.
        msg_type: String,
    },

    /// A member reference names a field absent from the dictionary.
    #[error("field not found: {name} (referenced from {context})")]
    FieldNotFound {
        /// Name of the missing field.
        name: String,
        /// Message, component, or group containing the reference.
        context: String,
    },

    /// A member reference names a component absent from the dictionary.
    #[error("component not found: {name} (referenced from {context})")]
    ComponentNotFound {
        /// Name of the missing component.
        name: String,
        /// Message, component, or group containing the reference.
        context: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_error_display() {
        let err = DictionaryError::Io {
            path: PathBuf::from("specs/FIX44.xml"),
            reason: "No such file or directory".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot read dictionary specs/FIX44.xml: No such file or directory"
        );
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::FieldNotFound {
            name: "ClOrdID".to_string(),
            context: "NewOrderSingle".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field not found: ClOrdID (referenced from NewOrderSingle)"
        );
    }

    #[test]
    fn test_message_not_found_display() {
        let err = RenderError::MessageNotFound {
            msg_type: "AE".to_string(),
        };
        assert_eq!(err.to_string(), "message not found: msgtype AE");
    }

    #[test]
    fn test_fixdown_error_from_render() {
        let render_err = RenderError::MessageNotFound {
            msg_type: "D".to_string(),
        };
        let err: FixdownError = render_err.into();
        assert!(matches!(
            err,
            FixdownError::Render(RenderError::MessageNotFound { .. })
        ));
    }

    #[test]
    fn test_render_error_from_dictionary() {
        let dict_err = DictionaryError::Xml {
            reason: "unexpected end of file".to_string(),
        };
        let err: RenderError = dict_err.into();
        assert!(matches!(err, RenderError::Dictionary(_)));
    }
}
