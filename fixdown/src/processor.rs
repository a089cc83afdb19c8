/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Host pipeline integration.
//!
//! The host document pipeline owns block splitting, output assembly, and
//! processor registration; this module exposes the capability interface it
//! consumes: [`BlockProcessor::test`] to claim a block and
//! [`BlockProcessor::run`] to consume it and append the rendered table.
//!
//! A failing run appends nothing: the table is buffered by the renderer and
//! attached to the sink only on full success, so one bad directive never
//! corrupts the surrounding document or stops the host from processing the
//! remaining blocks.

use fixdown_core::error::{FixdownError, Result};
use fixdown_core::table::Table;
use fixdown_render::Renderer;
use fixdown_render::recognizer;
use std::collections::VecDeque;
use tracing::debug;

/// Where a processor asks to sit in the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    /// Processor name, unique within the host registry.
    pub name: &'static str,
    /// Host stage this processor must run before.
    pub before: &'static str,
}

/// A destination for rendered tables, supplied by the host.
pub trait DocumentSink {
    /// Appends a fully rendered table to the document tree.
    fn append_table(&mut self, table: Table);
}

impl DocumentSink for Vec<Table> {
    fn append_table(&mut self, table: Table) {
        self.push(table);
    }
}

/// Block processor capability interface registered into the host pipeline.
pub trait BlockProcessor {
    /// Returns true if this processor claims the block.
    fn test(&self, block: &str) -> bool;

    /// Consumes the first queued block and appends output to the sink.
    ///
    /// # Errors
    /// Returns an error local to the consumed block; the host reports it and
    /// continues with the remaining blocks.
    fn run(&self, parent: &mut dyn DocumentSink, blocks: &mut VecDeque<String>) -> Result<()>;

    /// Returns where this processor registers in the pipeline.
    fn registration(&self) -> Registration;
}

/// Block processor expanding `::fix` directives into message layout tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataDictionaryProcessor {
    renderer: Renderer,
}

impl DataDictionaryProcessor {
    /// Creates a new processor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            renderer: Renderer::new(),
        }
    }
}

impl BlockProcessor for DataDictionaryProcessor {
    fn test(&self, block: &str) -> bool {
        recognizer::test(block)
    }

    fn run(&self, parent: &mut dyn DocumentSink, blocks: &mut VecDeque<String>) -> Result<()> {
        // The whole block is consumed even though only a substring matched;
        // a directive must be the sole content of its block.
        let block = blocks.pop_front().unwrap_or_default();
        let directive = recognizer::recognize(&block).ok_or(FixdownError::NoDirective)?;

        if let Ok(cwd) = std::env::current_dir() {
            debug!(cwd = %cwd.display(), directive = %directive, "expanding directive");
        }

        let table = self.renderer.render(&directive)?;
        parent.append_table(table);
        Ok(())
    }

    fn registration(&self) -> Registration {
        // Claimed ahead of generic code-block handling so the directive is
        // never swallowed as preformatted text.
        Registration {
            name: "fix-data-dictionary",
            before: "code",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SAMPLE: &str = r#"<fix major="4" minor="4">
      <messages>
        <message name="NewOrderSingle" msgtype="D" msgcat="app">
          <field name="ClOrdID" required="Y"/>
        </message>
      </messages>
      <fields>
        <field number="11" name="ClOrdID" type="STRING"/>
      </fields>
    </fix>"#;

    fn temp_dictionary(tag: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("fixdown-{tag}-{}.xml", std::process::id()));
        fs::write(&path, SAMPLE).unwrap();
        path
    }

    #[test]
    fn test_processor_claims_directive_blocks() {
        let processor = DataDictionaryProcessor::new();
        assert!(processor.test("::fix D specs/FIX44.xml"));
        assert!(!processor.test("a plain paragraph"));
    }

    #[test]
    fn test_run_consumes_block_and_appends_table() {
        let path = temp_dictionary("run-ok");
        let processor = DataDictionaryProcessor::new();
        let mut sink: Vec<Table> = Vec::new();
        let mut blocks = VecDeque::from([format!("::fix D {}", path.display())]);

        let result = processor.run(&mut sink, &mut blocks);
        fs::remove_file(&path).ok();

        result.unwrap();
        assert!(blocks.is_empty());
        assert_eq!(sink.len(), 1);
        assert_eq!(
            sink[0].head[0].cells[0].text,
            "<NewOrderSingle> MsgType (35)=D"
        );
    }

    #[test]
    fn test_failed_render_appends_nothing() {
        let processor = DataDictionaryProcessor::new();
        let mut sink: Vec<Table> = Vec::new();
        let mut blocks = VecDeque::from(["::fix D /nonexistent/FIX44.xml".to_string()]);

        let err = processor.run(&mut sink, &mut blocks).unwrap_err();
        assert!(matches!(err, FixdownError::Render(_)));
        assert!(sink.is_empty());
        // The failing block is still consumed; the host moves on.
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_unknown_msg_type_appends_nothing() {
        let path = temp_dictionary("run-unknown");
        let processor = DataDictionaryProcessor::new();
        let mut sink: Vec<Table> = Vec::new();
        let mut blocks = VecDeque::from([format!("::fix ZZ {}", path.display())]);

        let err = processor.run(&mut sink, &mut blocks).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, FixdownError::Render(_)));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_run_without_directive() {
        let processor = DataDictionaryProcessor::new();
        let mut sink: Vec<Table> = Vec::new();
        let mut blocks = VecDeque::from(["no directive here".to_string()]);

        let err = processor.run(&mut sink, &mut blocks).unwrap_err();
        assert!(matches!(err, FixdownError::NoDirective));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_registration() {
        let registration = DataDictionaryProcessor::new().registration();
        assert_eq!(registration.name, "fix-data-dictionary");
        assert_eq!(registration.before, "code");
    }
}
