//! Pretty rendering of decoded documents.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// Render `doc` as JSON with 4-space indentation.
///
/// Object keys keep the order the document holds them in. An empty object
/// renders as `{}`. Non-ASCII text is written as UTF-8, not `\u` escaped.
pub fn to_pretty_json(doc: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    doc.serialize(&mut ser)?;
    String::from_utf8(buf)
        .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write the rendered document followed by a trailing newline.
pub fn write_document<W: Write>(mut out: W, doc: &Value) -> io::Result<()> {
    let text = to_pretty_json(doc).map_err(io::Error::other)?;
    writeln!(out, "{text}")?;
    out.flush()
}
