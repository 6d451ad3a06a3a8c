// ─── Pattern Derivation ─────────────────────────────────────────────────────

/// Number of leading address characters that feed the pattern.
pub const PATTERN_KEY_LEN: usize = 12;

/// Start offsets into the pattern key, one per glyph, in render order.
pub const SEGMENT_OFFSETS: [usize; 4] = [0, 3, 6, 9];

/// Characters per segment.
pub const SEGMENT_LEN: usize = 3;

/// Maximum number of glyphs in a pattern.
pub const GLYPHS_PER_PATTERN: usize = SEGMENT_OFFSETS.len();

/// Distance between grid positions, in percent of the canvas.
pub const POSITION_STEP: u8 = 33;

/// Margin before the first grid position, in percent of the canvas.
pub const POSITION_MARGIN: u8 = 10;

/// Number of grid positions per axis.
pub const GRID_SIZE: usize = 3;

// ─── Mock Addresses ─────────────────────────────────────────────────────────

/// Alphabet for mock address bodies.
pub const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

// ─── Sharing ────────────────────────────────────────────────────────────────

/// Shortest address the share page accepts.
pub const MIN_SHARED_ADDRESS_LEN: usize = 26;

/// Addresses longer than this are truncated for display.
pub const SHORT_FORM_THRESHOLD: usize = 16;

/// Leading characters kept in the short display form.
pub const SHORT_FORM_HEAD: usize = 8;

/// Trailing characters kept in the short display form.
pub const SHORT_FORM_TAIL: usize = 4;

/// Default base URL for share links.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://keycanvas.app";
