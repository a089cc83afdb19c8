/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! `::fix` directive recognition.
//!
//! The directive grammar is `::fix <msgType> <path>`: the literal token,
//! optional whitespace, an alphanumeric message type, optional whitespace,
//! and a run of non-whitespace characters for the dictionary path. Matching
//! is a search, so other content may precede the directive inside a block;
//! the host still consumes the whole block once it is claimed.

use fixdown_core::Directive;
use once_cell::sync::Lazy;
use regex::Regex;

/// Lazily compiled directive pattern.
static DIRECTIVE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"::fix\s*(?P<msgType>[a-zA-Z0-9]+)\s*(?P<path>\S*)\s*").unwrap());

/// Returns true if a `::fix` directive occurs anywhere in the block.
///
/// Used by the host to decide whether this handler claims the block.
#[must_use]
pub fn test(block: &str) -> bool {
    DIRECTIVE_REGEX.is_match(block)
}

/// Extracts the directive from a block, if one is present.
///
/// Pure text analysis; no side effects. The path token may be empty, in
/// which case the failure surfaces later as a dictionary load error.
#[must_use]
pub fn recognize(block: &str) -> Option<Directive> {
    let caps = DIRECTIVE_REGEX.captures(block)?;
    Some(Directive::new(&caps["msgType"], &caps["path"]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_recognize_basic_directive() {
        let directive = recognize("::fix D specs/FIX44.xml").unwrap();
        assert_eq!(directive.msg_type, "D");
        assert_eq!(directive.dictionary_path, PathBuf::from("specs/FIX44.xml"));
    }

    #[test]
    fn test_recognize_is_a_search_not_anchored() {
        let directive = recognize("some preceding text ::fix AE dd.xml").unwrap();
        assert_eq!(directive.msg_type, "AE");
        assert_eq!(directive.dictionary_path, PathBuf::from("dd.xml"));
    }

    #[test]
    fn test_recognize_tolerates_extra_whitespace() {
        let directive = recognize("::fix   8   specs/FIX42.xml   ").unwrap();
        assert_eq!(directive.msg_type, "8");
        assert_eq!(directive.dictionary_path, PathBuf::from("specs/FIX42.xml"));
    }

    #[test]
    fn test_recognize_allows_empty_path() {
        let directive = recognize("::fix AE").unwrap();
        assert_eq!(directive.msg_type, "AE");
        assert_eq!(directive.dictionary_path, PathBuf::new());
    }

    #[test]
    fn test_recognize_rejects_plain_text() {
        assert!(recognize("a paragraph about fix messages").is_none());
        assert!(recognize("::fi x D dd.xml").is_none());
    }

    #[test]
    fn test_test_matches_recognize() {
        for block in ["::fix D dd.xml", "::fix AE", "nothing here", "", "prefix ::fix 0 x.xml"] {
            assert_eq!(test(block), recognize(block).is_some(), "block: {block:?}");
        }
    }
}
