//! GVAS save container parsing.
//!
//! A Hogwarts Legacy save is an Unreal GVAS property bag that embeds one
//! complete SQLite database image. The image is stored as a length-prefixed
//! blob: the `RawDatabaseImage` property name occurs exactly once, its
//! metadata ends 65 bytes after the marker's first byte, and the 4 bytes
//! immediately before that point hold the image length as a little-endian
//! u32.

use crate::error::FormatError;

/// Magic bytes at the start of every GVAS save container.
pub const MAGIC_HEADER: [u8; 4] = *b"GVAS";

/// Property name marking the embedded database image.
pub const DB_IMAGE_MARKER: &[u8] = b"RawDatabaseImage";

/// Distance from the marker's first byte to the first byte of image data.
/// Covers the marker itself plus the property metadata that follows it.
const IMAGE_DATA_OFFSET: usize = 65;

/// Size of the little-endian length field preceding the image data.
const IMAGE_LEN_FIELD: usize = 4;

/// Read a little-endian u32 from a byte slice.
fn read_u32_le(buf: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}

/// Find the first occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Locate and slice the embedded database image out of raw save bytes.
///
/// Pure bounds-checked slicing; no assumption is made about the image
/// content. Whether the bytes form a valid database is decided by the
/// session layer that opens them.
pub fn extract_database_image(save: &[u8]) -> Result<&[u8], FormatError> {
    if !save.starts_with(&MAGIC_HEADER) {
        return Err(FormatError::MissingMagic);
    }

    let marker = find(save, DB_IMAGE_MARKER).ok_or(FormatError::MissingMarker)?;
    let data_start = marker + IMAGE_DATA_OFFSET;
    if data_start > save.len() {
        return Err(FormatError::Truncated {
            expected: data_start,
            actual: save.len(),
        });
    }

    let image_len = read_u32_le(save, data_start - IMAGE_LEN_FIELD) as usize;
    let data_end = data_start + image_len;
    log::debug!(
        "database image: marker at {marker:#x}, data at {data_start:#x}, {image_len} bytes"
    );

    save.get(data_start..data_end).ok_or(FormatError::Truncated {
        expected: data_end,
        actual: save.len(),
    })
}
