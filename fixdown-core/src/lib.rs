/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixDown Core
//!
//! Core types, errors, and the output table model for the FixDown markup
//! extension.
//!
//! This crate provides the fundamental building blocks used across all
//! FixDown crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Directive**: The parsed `::fix` directive consumed by one render
//! - **Table model**: `Table`, `Row`, `Cell`, and the row construction
//!   primitives shared by every renderer output

pub mod directive;
pub mod error;
pub mod table;

pub use directive::Directive;
pub use error::{DictionaryError, FixdownError, RenderError, Result};
pub use table::{Cell, CellTag, Row, RowClass, Table, COLUMNS};
