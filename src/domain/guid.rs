//! GUID value type
//!
//! A GUID is four fields: `data1` (u32), `data2` (u16), `data3` (u16) and
//! `data4` (eight bytes). Textual formats encode the field *values*; only the
//! byte dump encodes the in-memory layout, where the first three fields are
//! stored little-endian.

use serde::{Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Size of a GUID in memory
pub const GUID_LEN: usize = 16;

/// A 128-bit GUID value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GuidValue {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl GuidValue {
    /// The all-zero GUID
    pub const NIL: GuidValue = GuidValue::new(0, 0, 0, [0; 8]);

    /// Create a GUID from its field values
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Build a GUID from its in-memory byte layout
    pub fn from_bytes(bytes: [u8; GUID_LEN]) -> Self {
        let mut data4 = [0u8; 8];
        data4.copy_from_slice(&bytes[8..]);

        Self {
            data1: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            data2: u16::from_le_bytes([bytes[4], bytes[5]]),
            data3: u16::from_le_bytes([bytes[6], bytes[7]]),
            data4,
        }
    }

    /// The in-memory byte layout (first three fields little-endian)
    pub fn to_bytes(&self) -> [u8; GUID_LEN] {
        let mut bytes = [0u8; GUID_LEN];
        bytes[0..4].copy_from_slice(&self.data1.to_le_bytes());
        bytes[4..6].copy_from_slice(&self.data2.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.data3.to_le_bytes());
        bytes[8..].copy_from_slice(&self.data4);
        bytes
    }

    /// Generate a random (version 4) GUID
    pub fn random() -> Self {
        Uuid::new_v4().into()
    }
}

impl From<Uuid> for GuidValue {
    fn from(uuid: Uuid) -> Self {
        let (data1, data2, data3, data4) = uuid.as_fields();
        Self::new(data1, data2, data3, *data4)
    }
}

impl From<GuidValue> for Uuid {
    fn from(guid: GuidValue) -> Self {
        Uuid::from_fields(guid.data1, guid.data2, guid.data3, &guid.data4)
    }
}

/// Displays the canonical registry form, e.g. `{000214F9-0000-0000-C000-000000000046}`
impl fmt::Display for GuidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", Uuid::from(*self).braced())
    }
}

impl Serialize for GuidValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL_LINK_W: GuidValue =
        GuidValue::new(0x000214F9, 0, 0, [0xC0, 0, 0, 0, 0, 0, 0, 0x46]);

    #[test]
    fn test_memory_layout_is_little_endian() {
        let bytes = SHELL_LINK_W.to_bytes();
        assert_eq!(
            bytes,
            [0xF9, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0, 0, 0, 0, 0, 0, 0x46]
        );
    }

    #[test]
    fn test_from_bytes_inverts_to_bytes() {
        let guid = GuidValue::new(0xEB0FE172, 0x1A3A, 0x11D0, [0x89, 0xB3, 0, 0xA0, 0xC9, 0x0A, 0x90, 0xAC]);
        assert_eq!(GuidValue::from_bytes(guid.to_bytes()), guid);
    }

    #[test]
    fn test_layout_matches_uuid_le_bytes() {
        let guid = GuidValue::new(0x12345678, 0x9ABC, 0xDEF0, [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(guid.to_bytes(), Uuid::from(guid).to_bytes_le());
    }

    #[test]
    fn test_display_canonical() {
        assert_eq!(
            SHELL_LINK_W.to_string(),
            "{000214F9-0000-0000-C000-000000000046}"
        );
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::from(SHELL_LINK_W);
        assert_eq!(GuidValue::from(uuid), SHELL_LINK_W);
    }

    #[test]
    fn test_random_is_not_nil() {
        assert_ne!(GuidValue::random(), GuidValue::NIL);
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&SHELL_LINK_W).unwrap();
        assert_eq!(json, "\"{000214F9-0000-0000-C000-000000000046}\"");
    }
}
