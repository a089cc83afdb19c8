/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixDown Render
//!
//! Directive recognition and table rendering for the FixDown markup
//! extension.
//!
//! This crate provides:
//! - **Recognizer**: Finds `::fix <msgType> <path>` directives in document
//!   blocks
//! - **Renderer**: Expands a directive into a message layout table by
//!   recursively walking the dictionary's field/component/group structure
//! - **HTML output**: Serializes a rendered table as an HTML fragment

pub mod html;
pub mod recognizer;
pub mod renderer;

pub use html::to_html;
pub use recognizer::{recognize, test};
pub use renderer::Renderer;
