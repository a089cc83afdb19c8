/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema definitions for FIX data dictionaries.
//!
//! This module defines the structures that represent a QuickFIX-style data
//! dictionary:
//! - [`FieldDef`]: Field definitions with tag number, name, and type
//! - [`MemberRef`]: A field, component, or group reference inside a body
//! - [`MessageDef`]: Message definitions with members in declaration order
//! - [`ComponentDef`]: Reusable component definitions
//! - [`Dictionary`]: Complete data dictionary for one FIX version
//!
//! Member lists keep the dictionary's declaration order; the renderer emits
//! rows in exactly that order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// FIX dictionary version, taken from the root element attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Major version component (e.g. `4`).
    pub major: String,
    /// Minor version component (e.g. `4`).
    pub minor: String,
    /// Service pack component, when declared.
    pub servicepack: Option<String>,
}

impl Version {
    /// Returns the BeginString value for this version.
    #[must_use]
    pub fn begin_string(&self) -> String {
        format!("FIX.{}.{}", self.major, self.minor)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.begin_string())
    }
}

/// Definition of a FIX field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field tag number.
    pub number: u32,
    /// Field name.
    pub name: String,
    /// Raw dictionary type string (e.g. `STRING`, `NUMINGROUP`).
    ///
    /// Kept verbatim: the rendered table reproduces the dictionary's own
    /// type text.
    pub field_type: String,
}

impl FieldDef {
    /// Creates a new field definition.
    ///
    /// # Arguments
    /// * `number` - The field tag number
    /// * `name` - The field name
    /// * `field_type` - The raw dictionary type string
    #[must_use]
    pub fn new(number: u32, name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// Reference to a member inside a message, component, or group body.
///
/// The three kinds form a closed set; every walk over members matches
/// exhaustively, so a fourth kind becomes a compile-time-visible change.
/// `required` carries the raw attribute value without normalization; an
/// absent attribute is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRef {
    /// Reference to a field by name.
    Field {
        /// Referenced field name.
        name: String,
        /// Raw `required` attribute value, if present.
        required: Option<String>,
    },
    /// Reference to a component by name.
    Component {
        /// Referenced component name.
        name: String,
        /// Raw `required` attribute value, if present.
        required: Option<String>,
    },
    /// A repeating group carrying its own nested member list.
    Group {
        /// Group name; resolves to a field definition like any field.
        name: String,
        /// Raw `required` attribute value, if present.
        required: Option<String>,
        /// Nested members in declaration order.
        members: Vec<MemberRef>,
    },
}

impl MemberRef {
    /// Returns the referenced name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field { name, .. } | Self::Component { name, .. } | Self::Group { name, .. } => {
                name
            }
        }
    }

    /// Returns the raw required flag, if present.
    #[must_use]
    pub fn required(&self) -> Option<&str> {
        match self {
            Self::Field { required, .. }
            | Self::Component { required, .. }
            | Self::Group { required, .. } => required.as_deref(),
        }
    }
}

/// Definition of a FIX message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDef {
    /// Message type value (tag 35).
    pub msg_type: String,
    /// Message display name.
    pub name: String,
    /// Message category (`admin` or `app`), as declared.
    pub category: Option<String>,
    /// Members in declaration order.
    pub members: Vec<MemberRef>,
}

/// Definition of a reusable component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDef {
    /// Component name.
    pub name: String,
    /// Members in declaration order.
    pub members: Vec<MemberRef>,
}

/// Complete FIX data dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dictionary {
    /// Dictionary version, when the root element declares one.
    pub version: Option<Version>,
    /// Field definitions indexed by name.
    pub fields: HashMap<String, FieldDef>,
    /// Field names indexed by tag number.
    pub fields_by_number: HashMap<u32, String>,
    /// Message definitions indexed by msgtype.
    pub messages: HashMap<String, MessageDef>,
    /// Component definitions indexed by name.
    pub components: HashMap<String, ComponentDef>,
    /// Standard header members.
    pub header: Vec<MemberRef>,
    /// Standard trailer members.
    pub trailer: Vec<MemberRef>,
}

impl Dictionary {
    /// Creates a new empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field definition.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields_by_number.insert(field.number, field.name.clone());
        self.fields.insert(field.name.clone(), field);
    }

    /// Adds a message definition.
    pub fn add_message(&mut self, message: MessageDef) {
        self.messages.insert(message.msg_type.clone(), message);
    }

    /// Adds a component definition.
    pub fn add_component(&mut self, component: ComponentDef) {
        self.components.insert(component.name.clone(), component);
    }

    /// Gets a field definition by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }

    /// Gets a field definition by tag number.
    #[must_use]
    pub fn get_field_by_number(&self, number: u32) -> Option<&FieldDef> {
        self.fields_by_number
            .get(&number)
            .and_then(|name| self.fields.get(name))
    }

    /// Gets a message definition by msgtype (exact, case-sensitive).
    #[must_use]
    pub fn get_message(&self, msg_type: &str) -> Option<&MessageDef> {
        self.messages.get(msg_type)
    }

    /// Gets a component definition by name.
    #[must_use]
    pub fn get_component(&self, name: &str) -> Option<&ComponentDef> {
        self.components.get(name)
    }

    /// Returns an iterator over all field definitions.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.values()
    }

    /// Returns an iterator over all message definitions.
    pub fn messages(&self) -> impl Iterator<Item = &MessageDef> {
        self.messages.values()
    }

    /// Returns an iterator over all component definitions.
    pub fn components(&self) -> impl Iterator<Item = &ComponentDef> {
        self.components.values()
    }
}
