//! Composite dump of every notation for one GUID

use crate::domain::GuidValue;
use crate::format::{bytes, canonical, define, structure};

/// Render the macro call, canonical string, byte dump and struct initializer,
/// separated by blank lines
pub fn render_dump(guid: &GuidValue, name: Option<&str>) -> String {
    format!(
        "{}\n\nGUID: {}\n\nBytes: {}\n\nStruct: {}\n",
        define::render(guid, name),
        canonical::render(guid),
        bytes::render(guid),
        structure::render(guid)
    )
}
