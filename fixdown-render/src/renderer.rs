/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message layout renderer.
//!
//! Given a parsed [`Directive`], the renderer loads the referenced data
//! dictionary, locates the message definition, and recursively walks its
//! member list into a [`Table`].
//!
//! One render is a single blocking sequence: read, parse, walk, return. The
//! table is buffered in full and returned only on success, so a failing
//! render leaves nothing behind for the host to clean up. Indentation is
//! threaded through the walk as an accumulating prefix, one `>` marker per
//! enclosing group level; components never deepen it.

use fixdown_core::Directive;
use fixdown_core::error::RenderError;
use fixdown_core::table::{CellTag, Row, RowClass, Table};
use fixdown_dictionary::{Dictionary, MemberRef};
use tracing::debug;

/// Renders `::fix` directives into message layout tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Renders a directive, loading the dictionary it references.
    ///
    /// # Errors
    /// Returns `RenderError::Dictionary` if the dictionary cannot be loaded,
    /// and any error from [`Renderer::render_with`].
    pub fn render(&self, directive: &Directive) -> Result<Table, RenderError> {
        let dict = Dictionary::load(&directive.dictionary_path)?;
        self.render_with(&dict, directive)
    }

    /// Renders a directive against an already loaded dictionary.
    ///
    /// # Errors
    /// Returns `RenderError::MessageNotFound` if no message matches the
    /// directive's msgtype, and `RenderError::FieldNotFound` /
    /// `RenderError::ComponentNotFound` if a member reference does not
    /// resolve.
    pub fn render_with(
        &self,
        dict: &Dictionary,
        directive: &Directive,
    ) -> Result<Table, RenderError> {
        let message =
            dict.get_message(&directive.msg_type)
                .ok_or_else(|| RenderError::MessageNotFound {
                    msg_type: directive.msg_type.clone(),
                })?;
        debug!(msg_type = %directive.msg_type, message = %message.name, "rendering message layout");

        let mut table = Table::new();
        table.head.push(Row::full_width(
            RowClass::MsgHeader,
            CellTag::Th,
            format!("<{}> MsgType (35)={}", message.name, directive.msg_type),
        ));
        table.head.push(Row::cells(
            RowClass::FieldHeader,
            CellTag::Th,
            ["Tag", "Field Name", "Type", "Req"],
        ));

        table.body.push(Row::full_width(
            RowClass::MessageHeader,
            CellTag::Td,
            "<Standard Header>",
        ));
        self.walk(dict, &message.members, "", &mut table.body, &message.name)?;
        table.body.push(Row::full_width(
            RowClass::MessageFooter,
            CellTag::Td,
            "<Standard Footer>",
        ));

        Ok(table)
    }

    /// Walks a member list, appending rows in declaration order.
    fn walk(
        &self,
        dict: &Dictionary,
        members: &[MemberRef],
        indent: &str,
        rows: &mut Vec<Row>,
        context: &str,
    ) -> Result<(), RenderError> {
        for member in members {
            match member {
                MemberRef::Field { name, required } => {
                    rows.push(field_row(dict, name, required.as_deref(), indent, context)?);
                }
                MemberRef::Component { name, required } => {
                    let component =
                        dict.get_component(name)
                            .ok_or_else(|| RenderError::ComponentNotFound {
                                name: name.clone(),
                                context: context.to_string(),
                            })?;
                    rows.push(Row::component_boundary(
                        RowClass::ComponentStart,
                        format!("{indent} Start component <{name}>"),
                        required.clone().unwrap_or_default(),
                    ));
                    self.walk(dict, &component.members, indent, rows, name)?;
                    rows.push(Row::full_width(
                        RowClass::ComponentEnd,
                        CellTag::Td,
                        format!("{indent} End component <{name}>"),
                    ));
                }
                MemberRef::Group {
                    name,
                    required,
                    members: group_members,
                } => {
                    // The group emits a field-style row for itself, then its
                    // members, all one indent level deeper than its container.
                    let deeper = format!("{indent}>");
                    rows.push(field_row(dict, name, required.as_deref(), &deeper, context)?);
                    self.walk(dict, group_members, &deeper, rows, name)?;
                }
            }
        }
        Ok(())
    }
}

/// Builds one field row: tag (prefixed with the indent), name, type, req.
fn field_row(
    dict: &Dictionary,
    name: &str,
    required: Option<&str>,
    indent: &str,
    context: &str,
) -> Result<Row, RenderError> {
    let field = dict
        .get_field(name)
        .ok_or_else(|| RenderError::FieldNotFound {
            name: name.to_string(),
            context: context.to_string(),
        })?;
    Ok(Row::cells(
        RowClass::Field,
        CellTag::Td,
        [
            format!("{indent} {}", field.number),
            field.name.clone(),
            field.field_type.clone(),
            required.unwrap_or_default().to_string(),
        ],
    ))
}
