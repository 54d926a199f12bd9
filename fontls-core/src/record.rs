//! Raw host records and legacy-encoding decode (made by FontLab https://www.fontlab.com/)

use encoding_rs::GBK;

/// Fixed capacity of the host's name and style buffers, in bytes.
pub const NAME_CAPACITY: usize = 32;

/// One font family record as delivered by the host enumeration service.
///
/// Byte fields are kept exactly as the host wrote them: legacy-encoded (GBK
/// family) and zero-terminated when shorter than [`NAME_CAPACITY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontlsFamilyRecord {
    pub face_name: Vec<u8>,
    pub style: Vec<u8>,
    pub charset: u8,
}

impl FontlsFamilyRecord {
    /// Capture a record from raw host buffers, clamping each field to
    /// [`NAME_CAPACITY`].
    pub fn from_raw(face_name: &[u8], style: &[u8], charset: u8) -> Self {
        Self {
            face_name: clamp(face_name),
            style: clamp(style),
            charset,
        }
    }

    /// Decoded face name, best effort.
    pub fn decoded_face_name(&self) -> String {
        decode_legacy(until_nul(&self.face_name))
    }

    /// Decoded style classification (e.g. "Regular"), best effort.
    pub fn decoded_style(&self) -> String {
        decode_legacy(until_nul(&self.style))
    }
}

fn clamp(bytes: &[u8]) -> Vec<u8> {
    bytes[..bytes.len().min(NAME_CAPACITY)].to_vec()
}

/// Bytes up to (not including) the first zero, or the whole buffer when no
/// zero occurs within it.
pub fn until_nul(buf: &[u8]) -> &[u8] {
    match buf.iter().position(|&b| b == 0) {
        Some(end) => &buf[..end],
        None => buf,
    }
}

/// Decode legacy multi-byte text into UTF-8.
///
/// Bytes that are not valid GBK fall back to a best-effort reading of the
/// raw buffer; a mangled name is still a name, and one bad record must
/// never abort an enumeration pass.
pub fn decode_legacy(bytes: &[u8]) -> String {
    let (text, _, had_errors) = GBK.decode(bytes);
    if had_errors {
        log::warn!(
            "legacy decode failed for a {}-byte field, keeping raw text",
            bytes.len()
        );
        return String::from_utf8_lossy(bytes).into_owned();
    }
    text.into_owned()
}
