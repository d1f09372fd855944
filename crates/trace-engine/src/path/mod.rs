pub mod glyphs;
pub mod reference;

pub use glyphs::{letter_a, path_from_json, GlyphDocument, BOARD_OFFSET, LETTER_A};
pub use reference::{Checkpoint, ReferencePath, Stroke};
