//! XML-RPC request serialization
//!
//! Builds the `methodCall` document for `xname.updateArecord`. The
//! struct carries exactly seven members in a fixed order:
//!
//! ```text
//! name, zone, oldaddress, user, ttl, newaddress, password
//! ```
//!
//! The order is a compatibility contract with the server-side parser
//! inherited from earlier clients; XML-RPC structs are nominally
//! unordered, but this one must never be reordered. Every value is
//! serialized as `<string>` regardless of semantic type.
//!
//! Serialization goes through `quick-xml`'s event writer so that
//! text-content escaping of `&`, `<`, `>`, `"`, and `'` is guaranteed
//! by the library rather than by hand-rolled string assembly.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{Error, Result};
use crate::request::UpdateRequest;

/// Serialize the `methodCall` document for a single A record update
///
/// Output is compact UTF-8 XML without a declaration, matching what
/// historical clients put on the wire.
pub fn update_a_record_call(method_name: &str, request: &UpdateRequest) -> Result<String> {
    // Fixed member order; see module docs.
    let members = [
        ("name", request.name()),
        ("zone", request.zone()),
        ("oldaddress", request.old_address()),
        ("user", request.user()),
        ("ttl", request.ttl()),
        ("newaddress", request.new_address()),
        ("password", request.password()),
    ];

    let mut writer = Writer::new(Vec::new());

    start(&mut writer, "methodCall")?;
    text_element(&mut writer, "methodName", method_name)?;
    start(&mut writer, "params")?;
    start(&mut writer, "param")?;
    start(&mut writer, "value")?;
    start(&mut writer, "struct")?;
    for (key, value) in members {
        start(&mut writer, "member")?;
        text_element(&mut writer, "name", key)?;
        start(&mut writer, "value")?;
        text_element(&mut writer, "string", value)?;
        end(&mut writer, "value")?;
        end(&mut writer, "member")?;
    }
    end(&mut writer, "struct")?;
    end(&mut writer, "value")?;
    end(&mut writer, "param")?;
    end(&mut writer, "params")?;
    end(&mut writer, "methodCall")?;

    String::from_utf8(writer.into_inner()).map_err(|e| Error::xml(e.to_string()))
}

fn start(writer: &mut Writer<Vec<u8>>, tag: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(|e| Error::xml(e.to_string()))
}

fn end(writer: &mut Writer<Vec<u8>>, tag: &str) -> Result<()> {
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(|e| Error::xml(e.to_string()))
}

fn text_element(writer: &mut Writer<Vec<u8>>, tag: &str, content: &str) -> Result<()> {
    start(writer, tag)?;
    writer
        .write_event(Event::Text(BytesText::new(content)))
        .map_err(|e| Error::xml(e.to_string()))?;
    end(writer, tag)
}
