/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! QuickFIX XML dictionary loader.
//!
//! This module parses the QuickFIX data dictionary layout into a
//! [`Dictionary`]: a `<fix>` root with `<header>`, `<trailer>`, `<messages>`,
//! `<components>`, and `<fields>` sections. Member lists nest `<group>`
//! elements recursively and keep declaration order.
//!
//! Every lookup the renderer performs later is backed by the maps built
//! here; the loader itself only rejects input that is unreadable, not
//! well-formed XML, or missing the attributes the schema requires.

use crate::schema::{ComponentDef, Dictionary, FieldDef, MemberRef, MessageDef, Version};
use fixdown_core::error::DictionaryError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

impl Dictionary {
    /// Loads a dictionary from a QuickFIX XML file.
    ///
    /// The file is read in full and released before parsing begins, so the
    /// handle is never held across a parse failure.
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the path is unreadable, or any parse
    /// error from [`Dictionary::parse_str`].
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        info!(path = %path.display(), "loading data dictionary");
        let xml = fs::read_to_string(path).map_err(|err| DictionaryError::Io {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        Self::parse_str(&xml)
    }

    /// Parses a dictionary from QuickFIX XML text.
    ///
    /// # Errors
    /// Returns `DictionaryError::Xml` if the input is not well-formed or is
    /// missing the `<fix>` root, and `DictionaryError::InvalidAttribute` if
    /// a required attribute is absent or unusable.
    pub fn parse_str(xml: &str) -> Result<Self, DictionaryError> {
        let mut reader = Reader::from_str(xml);
        let mut dict = Self::new();
        let mut seen_root = false;

        loop {
            match next_event(&mut reader)? {
                Event::Start(e) => match e.name().as_ref() {
                    b"fix" => {
                        dict.version = parse_version(&e)?;
                        seen_root = true;
                    }
                    b"header" => dict.header = parse_members(&mut reader, b"header")?,
                    b"trailer" => dict.trailer = parse_members(&mut reader, b"trailer")?,
                    b"messages" => parse_messages(&mut reader, &mut dict)?,
                    b"components" => parse_components(&mut reader, &mut dict)?,
                    b"fields" => parse_fields(&mut reader, &mut dict)?,
                    _ => {}
                },
                Event::Empty(e) if e.name().as_ref() == b"fix" => {
                    dict.version = parse_version(&e)?;
                    seen_root = true;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(DictionaryError::Xml {
                reason: "missing <fix> root element".to_string(),
            });
        }

        debug!(
            fields = dict.fields.len(),
            components = dict.components.len(),
            messages = dict.messages.len(),
            "dictionary parsed"
        );
        Ok(dict)
    }
}

/// Reads the next event, mapping reader errors into the dictionary taxonomy.
fn next_event<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>, DictionaryError> {
    reader.read_event().map_err(|err| DictionaryError::Xml {
        reason: err.to_string(),
    })
}

/// Parses the version attributes of the `<fix>` root, when declared.
fn parse_version(e: &BytesStart<'_>) -> Result<Option<Version>, DictionaryError> {
    let major = attr(e, "major")?;
    let minor = attr(e, "minor")?;
    match (major, minor) {
        (Some(major), Some(minor)) => Ok(Some(Version {
            major,
            minor,
            servicepack: attr(e, "servicepack")?,
        })),
        _ => Ok(None),
    }
}

/// Parses a member list until the matching end tag, recursing into groups.
fn parse_members(
    reader: &mut Reader<&[u8]>,
    end_tag: &[u8],
) -> Result<Vec<MemberRef>, DictionaryError> {
    let mut members = Vec::new();
    loop {
        match next_event(reader)? {
            Event::Empty(e) => match e.name().as_ref() {
                b"field" => members.push(MemberRef::Field {
                    name: need_attr(&e, "field", "name")?,
                    required: attr(&e, "required")?,
                }),
                b"component" => members.push(MemberRef::Component {
                    name: need_attr(&e, "component", "name")?,
                    required: attr(&e, "required")?,
                }),
                b"group" => members.push(MemberRef::Group {
                    name: need_attr(&e, "group", "name")?,
                    required: attr(&e, "required")?,
                    members: Vec::new(),
                }),
                _ => {}
            },
            Event::Start(e) => match e.name().as_ref() {
                b"field" => members.push(MemberRef::Field {
                    name: need_attr(&e, "field", "name")?,
                    required: attr(&e, "required")?,
                }),
                b"component" => members.push(MemberRef::Component {
                    name: need_attr(&e, "component", "name")?,
                    required: attr(&e, "required")?,
                }),
                b"group" => {
                    let name = need_attr(&e, "group", "name")?;
                    let required = attr(&e, "required")?;
                    let nested = parse_members(reader, b"group")?;
                    members.push(MemberRef::Group {
                        name,
                        required,
                        members: nested,
                    });
                }
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == end_tag => break,
            Event::End(_) => {}
            Event::Eof => return Err(unexpected_eof(&String::from_utf8_lossy(end_tag))),
            _ => {}
        }
    }
    Ok(members)
}

/// Parses the `<messages>` section.
fn parse_messages(
    reader: &mut Reader<&[u8]>,
    dict: &mut Dictionary,
) -> Result<(), DictionaryError> {
    loop {
        match next_event(reader)? {
            Event::Start(e) if e.name().as_ref() == b"message" => {
                let msg_type = need_attr(&e, "message", "msgtype")?;
                let name = need_attr(&e, "message", "name")?;
                let category = attr(&e, "msgcat")?;
                let members = parse_members(reader, b"message")?;
                dict.add_message(MessageDef {
                    msg_type,
                    name,
                    category,
                    members,
                });
            }
            Event::Empty(e) if e.name().as_ref() == b"message" => {
                let msg_type = need_attr(&e, "message", "msgtype")?;
                let name = need_attr(&e, "message", "name")?;
                let category = attr(&e, "msgcat")?;
                dict.add_message(MessageDef {
                    msg_type,
                    name,
                    category,
                    members: Vec::new(),
                });
            }
            Event::End(e) if e.name().as_ref() == b"messages" => break,
            Event::Eof => return Err(unexpected_eof("messages")),
            _ => {}
        }
    }
    Ok(())
}

/// Parses the `<components>` section.
fn parse_components(
    reader: &mut Reader<&[u8]>,
    dict: &mut Dictionary,
) -> Result<(), DictionaryError> {
    loop {
        match next_event(reader)? {
            Event::Start(e) if e.name().as_ref() == b"component" => {
                let name = need_attr(&e, "component", "name")?;
                let members = parse_members(reader, b"component")?;
                dict.add_component(ComponentDef { name, members });
            }
            Event::Empty(e) if e.name().as_ref() == b"component" => {
                let name = need_attr(&e, "component", "name")?;
                dict.add_component(ComponentDef {
                    name,
                    members: Vec::new(),
                });
            }
            Event::End(e) if e.name().as_ref() == b"components" => break,
            Event::Eof => return Err(unexpected_eof("components")),
            _ => {}
        }
    }
    Ok(())
}

/// Parses the `<fields>` section. Enum `<value>` children are skipped.
fn parse_fields(reader: &mut Reader<&[u8]>, dict: &mut Dictionary) -> Result<(), DictionaryError> {
    loop {
        match next_event(reader)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"field" => {
                dict.add_field(parse_field_def(&e)?);
            }
            Event::End(e) if e.name().as_ref() == b"fields" => break,
            Event::Eof => return Err(unexpected_eof("fields")),
            _ => {}
        }
    }
    Ok(())
}

/// Parses one `<field>` definition element.
fn parse_field_def(e: &BytesStart<'_>) -> Result<FieldDef, DictionaryError> {
    let number_raw = need_attr(e, "field", "number")?;
    let number = number_raw
        .parse::<u32>()
        .map_err(|err| DictionaryError::InvalidAttribute {
            element: "field".to_string(),
            attribute: "number".to_string(),
            reason: format!("{err}: '{number_raw}'"),
        })?;
    let name = need_attr(e, "field", "name")?;
    let field_type = need_attr(e, "field", "type")?;
    Ok(FieldDef::new(number, name, field_type))
}

/// Returns an attribute value, unescaped, if present.
fn attr(e: &BytesStart<'_>, name: &str) -> Result<Option<String>, DictionaryError> {
    for attribute in e.attributes() {
        let attribute = attribute.map_err(|err| DictionaryError::Xml {
            reason: err.to_string(),
        })?;
        if attribute.key.as_ref() == name.as_bytes() {
            let value = attribute
                .unescape_value()
                .map_err(|err| DictionaryError::Xml {
                    reason: err.to_string(),
                })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Returns a mandatory attribute value or a typed error.
fn need_attr(e: &BytesStart<'_>, element: &str, name: &str) -> Result<String, DictionaryError> {
    attr(e, name)?.ok_or_else(|| DictionaryError::InvalidAttribute {
        element: element.to_string(),
        attribute: name.to_string(),
        reason: "missing".to_string(),
    })
}

fn unexpected_eof(element: &str) -> DictionaryError {
    DictionaryError::Xml {
        reason: format!("unexpected end of file inside <{element}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<fix major="4" minor="4">
      <header>
        <field name="BeginString" required="Y"/>
      </header>
      <trailer>
        <field name="CheckSum" required="Y"/>
      </trailer>
      <messages>
        <message name="NewOrderSingle" msgtype="D" msgcat="app">
          <field name="ClOrdID" required="Y"/>
          <component name="Instrument" required="Y"/>
          <group name="NoAllocs" required="N">
            <field name="AllocAccount" required="N"/>
          </group>
        </message>
        <message name="Heartbeat" msgtype="0" msgcat="admin"/>
      </messages>
      <components>
        <component name="Instrument">
          <field name="Symbol" required="Y"/>
          <field name="SecurityID"/>
        </component>
      </components>
      <fields>
        <field number="8" name="BeginString" type="STRING"/>
        <field number="10" name="CheckSum" type="STRING"/>
        <field number="11" name="ClOrdID" type="STRING"/>
        <field number="55" name="Symbol" type="STRING"/>
        <field number="48" name="SecurityID" type="STRING"/>
        <field number="78" name="NoAllocs" type="NUMINGROUP"/>
        <field number="79" name="AllocAccount" type="STRING"/>
      </fields>
    </fix>"#;

    #[test]
    fn test_parse_sample_dictionary() {
        let dict = Dictionary::parse_str(SAMPLE).unwrap();

        assert_eq!(dict.version.as_ref().map(Version::begin_string).as_deref(), Some("FIX.4.4"));
        assert_eq!(dict.fields.len(), 7);
        assert_eq!(dict.messages.len(), 2);
        assert_eq!(dict.components.len(), 1);
        assert_eq!(dict.header.len(), 1);
        assert_eq!(dict.trailer.len(), 1);

        let field = dict.get_field("NoAllocs").unwrap();
        assert_eq!(field.number, 78);
        assert_eq!(field.field_type, "NUMINGROUP");
    }

    #[test]
    fn test_message_members_keep_declaration_order() {
        let dict = Dictionary::parse_str(SAMPLE).unwrap();
        let message = dict.get_message("D").unwrap();

        assert_eq!(message.name, "NewOrderSingle");
        assert_eq!(message.category.as_deref(), Some("app"));
        assert_eq!(message.members.len(), 3);
        assert!(matches!(&message.members[0], MemberRef::Field { name, .. } if name == "ClOrdID"));
        assert!(
            matches!(&message.members[1], MemberRef::Component { name, .. } if name == "Instrument")
        );
        match &message.members[2] {
            MemberRef::Group { name, members, .. } => {
                assert_eq!(name, "NoAllocs");
                assert_eq!(members.len(), 1);
                assert!(matches!(&members[0], MemberRef::Field { name, .. } if name == "AllocAccount"));
            }
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_required_is_raw_pass_through() {
        let dict = Dictionary::parse_str(SAMPLE).unwrap();
        let component = dict.get_component("Instrument").unwrap();

        assert_eq!(component.members[0].required(), Some("Y"));
        assert_eq!(component.members[1].required(), None);

        let message = dict.get_message("D").unwrap();
        assert_eq!(message.members[2].required(), Some("N"));
    }

    #[test]
    fn test_empty_message_has_no_members() {
        let dict = Dictionary::parse_str(SAMPLE).unwrap();
        let heartbeat = dict.get_message("0").unwrap();
        assert!(heartbeat.members.is_empty());
    }

    #[test]
    fn test_field_enum_values_are_skipped() {
        let xml = r#"<fix major="4" minor="2">
          <fields>
            <field number="54" name="Side" type="CHAR">
              <value enum="1" description="BUY"/>
              <value enum="2" description="SELL"/>
            </field>
          </fields>
        </fix>"#;
        let dict = Dictionary::parse_str(xml).unwrap();
        let side = dict.get_field("Side").unwrap();
        assert_eq!(side.number, 54);
        assert_eq!(side.field_type, "CHAR");
        assert_eq!(dict.fields.len(), 1);
    }

    #[test]
    fn test_nested_groups() {
        let xml = r#"<fix major="4" minor="4">
          <messages>
            <message name="MarketDataSnapshot" msgtype="W" msgcat="app">
              <group name="NoMDEntries" required="Y">
                <field name="MDEntryType" required="Y"/>
                <group name="NoPartyIDs" required="N">
                  <field name="PartyID" required="N"/>
                </group>
              </group>
            </message>
          </messages>
        </fix>"#;
        let dict = Dictionary::parse_str(xml).unwrap();
        let message = dict.get_message("W").unwrap();
        match &message.members[0] {
            MemberRef::Group { members, .. } => match &members[1] {
                MemberRef::Group { name, members, .. } => {
                    assert_eq!(name, "NoPartyIDs");
                    assert_eq!(members.len(), 1);
                }
                other => panic!("expected nested group, got {other:?}"),
            },
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_root_is_rejected() {
        let err = Dictionary::parse_str("").unwrap_err();
        assert!(matches!(err, DictionaryError::Xml { .. }));
    }

    #[test]
    fn test_invalid_number_attribute() {
        let xml = r#"<fix major="4" minor="4">
          <fields>
            <field number="abc" name="Oops" type="STRING"/>
          </fields>
        </fix>"#;
        let err = Dictionary::parse_str(xml).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::InvalidAttribute { ref attribute, .. } if attribute == "number"
        ));
    }

    #[test]
    fn test_missing_name_attribute() {
        let xml = r#"<fix major="4" minor="4">
          <messages>
            <message msgtype="D" name="NewOrderSingle">
              <field required="Y"/>
            </message>
          </messages>
        </fix>"#;
        let err = Dictionary::parse_str(xml).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::InvalidAttribute { ref attribute, .. } if attribute == "name"
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dictionary::load(Path::new("/nonexistent/FIX44.xml")).unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }
}
