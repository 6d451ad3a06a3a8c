use keycanvas_types::constants::{
    GLYPHS_PER_PATTERN, PATTERN_KEY_LEN, SEGMENT_LEN, SEGMENT_OFFSETS,
};
use keycanvas_types::glyph::position_from_code;
use keycanvas_types::{Color, GlyphDescriptor, Pattern, Shape};

/// Derive the visual mnemonic for an address.
///
/// The pattern depends only on the first 12 characters. Each of the four
/// glyphs reads a 3-character segment starting at offsets 0, 3, 6 and 9:
/// the segment's first character picks the shape, its second the color, and
/// the characters at `offset` and `offset + 1` pick the x and y positions.
///
/// An empty address yields an empty pattern. Keys shorter than 11 characters
/// wrap around (`index % key.len()`), so any non-empty input yields exactly
/// four glyphs.
pub fn derive_pattern(address: &str) -> Pattern {
    let key: Vec<u32> = address
        .chars()
        .take(PATTERN_KEY_LEN)
        .map(u32::from)
        .collect();
    if key.is_empty() {
        return Pattern::default();
    }

    let mut glyphs = Vec::with_capacity(GLYPHS_PER_PATTERN);
    glyphs.extend(
        SEGMENT_OFFSETS
            .iter()
            .map(|&offset| derive_glyph(&key, offset)),
    );

    let pattern = Pattern::new(glyphs);
    tracing::trace!(key_len = key.len(), glyphs = pattern.len(), "derived pattern");
    pattern
}

/// Build one glyph from the segment of `key` starting at `offset`. `key` is non-empty.
fn derive_glyph(key: &[u32], offset: usize) -> GlyphDescriptor {
    let segment = segment(key, offset);
    let at = |index: usize| key[index % key.len()];

    GlyphDescriptor {
        shape: Shape::from_code(segment[0]),
        // A one-character segment reads the same character for shape and color.
        color: Color::from_code(segment[1 % segment.len()]),
        x: position_from_code(at(offset)),
        y: position_from_code(at(offset + 1)),
    }
}

/// The up-to-three character segment at `offset`, or the single wrapped
/// character when `offset` is past the end of the key.
fn segment(key: &[u32], offset: usize) -> &[u32] {
    if offset < key.len() {
        &key[offset..(offset + SEGMENT_LEN).min(key.len())]
    } else {
        let index = offset % key.len();
        &key[index..=index]
    }
}
