/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The parsed `::fix` directive.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A parsed `::fix <msgType> <path>` directive.
///
/// A directive is extracted from one document block by the recognizer and
/// consumed by exactly one render. `msg_type` is matched case-sensitively
/// against the dictionary's message definitions; `dictionary_path` is
/// resolved relative to the host's working directory at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Message type code (tag 35 value).
    pub msg_type: String,
    /// Path to the FIX data dictionary.
    pub dictionary_path: PathBuf,
}

impl Directive {
    /// Creates a new directive.
    ///
    /// # Arguments
    /// * `msg_type` - The message type code (tag 35 value)
    /// * `dictionary_path` - Path to the FIX data dictionary
    #[must_use]
    pub fn new(msg_type: impl Into<String>, dictionary_path: impl Into<PathBuf>) -> Self {
        Self {
            msg_type: msg_type.into(),
            dictionary_path: dictionary_path.into(),
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "::fix {} {}",
            self.msg_type,
            self.dictionary_path.display()
        )
    }
}
