/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Renders a `::fix` directive against an embedded demo dictionary and
//! prints the resulting HTML table.

use fixdown::prelude::*;
use tracing::info;

const DEMO_DICTIONARY: &str = r#"<fix major="4" minor="4">
  <messages>
    <message name="NewOrderSingle" msgtype="D" msgcat="app">
      <field name="ClOrdID" required="Y"/>
      <component name="Instrument" required="Y"/>
      <group name="NoAllocs" required="N">
        <field name="AllocAccount" required="N"/>
      </group>
    </message>
  </messages>
  <components>
    <component name="Instrument">
      <field name="Symbol" required="Y"/>
      <field name="SecurityID"/>
    </component>
  </components>
  <fields>
    <field number="11" name="ClOrdID" type="STRING"/>
    <field number="55" name="Symbol" type="STRING"/>
    <field number="48" name="SecurityID" type="STRING"/>
    <field number="78" name="NoAllocs" type="NUMINGROUP"/>
    <field number="79" name="AllocAccount" type="STRING"/>
  </fields>
</fix>"#;

fn main() -> Result<()> {
    init_logging();

    let block = "::fix D FIX44.xml";
    let directive = recognize(block).ok_or(FixdownError::NoDirective)?;
    info!(%directive, "recognized directive");

    let dict = Dictionary::parse_str(DEMO_DICTIONARY)?;
    if let Some(version) = &dict.version {
        info!(version = %version, "dictionary parsed");
    }

    let table = Renderer::new().render_with(&dict, &directive)?;
    println!("{}", to_html(&table));
    Ok(())
}

/// Initializes logging for examples.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}
