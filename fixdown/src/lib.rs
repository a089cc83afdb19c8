/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixDown
//!
//! A FIX data dictionary markup extension for document pipelines.
//!
//! FixDown expands compact `::fix <msgType> <path>` directives embedded in
//! text documents into structured tables describing a FIX message layout,
//! sourced from a QuickFIX-style XML data dictionary.
//!
//! ## Features
//!
//! - **Directive recognition**: Claims blocks carrying a `::fix` directive
//! - **Recursive rendering**: Walks fields, components, and repeating groups
//!   into table rows with group-depth indentation
//! - **Typed failures**: Every dictionary lookup is guarded; a bad directive
//!   reports a diagnostic instead of corrupting the document
//! - **All-or-nothing output**: A table reaches the host only when the whole
//!   render succeeds
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixdown::prelude::*;
//! use std::collections::VecDeque;
//!
//! let processor = DataDictionaryProcessor::new();
//! let mut tables: Vec<Table> = Vec::new();
//! let mut blocks = VecDeque::from(["::fix D specs/FIX44.xml".to_string()]);
//!
//! if processor.test(&blocks[0]) {
//!     processor.run(&mut tables, &mut blocks)?;
//!     println!("{}", to_html(&tables[0]));
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Errors, the directive type, and the output table model
//! - [`dictionary`]: Data dictionary schema and QuickFIX XML loading
//! - [`render`]: Directive recognition, rendering, and HTML output
//! - [`processor`]: The block processor registered into the host pipeline

pub mod processor;

pub mod core {
    //! Errors, the directive type, and the output table model.
    pub use fixdown_core::*;
}

pub mod dictionary {
    //! Data dictionary schema and QuickFIX XML loading.
    pub use fixdown_dictionary::*;
}

pub mod render {
    //! Directive recognition, rendering, and HTML output.
    pub use fixdown_render::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixdown_core::{
        Cell, CellTag, DictionaryError, Directive, FixdownError, RenderError, Result, Row,
        RowClass, Table,
    };

    // Dictionary
    pub use fixdown_dictionary::{
        ComponentDef, Dictionary, FieldDef, MemberRef, MessageDef, Version,
    };

    // Rendering
    pub use fixdown_render::{Renderer, recognize, to_html};

    // Host integration
    pub use crate::processor::{
        BlockProcessor, DataDictionaryProcessor, DocumentSink, Registration,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let directive = Directive::new("D", "specs/FIX44.xml");
        let _renderer = Renderer::new();
        let _processor = DataDictionaryProcessor::new();
        assert_eq!(directive.msg_type, "D");
    }

    #[test]
    fn test_recognize_through_prelude() {
        let directive = recognize("::fix AE dd.xml").unwrap();
        assert_eq!(directive.msg_type, "AE");
    }
}
