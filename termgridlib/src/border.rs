//! Border glyph sets.
//!
//! A table frame is assembled from fifteen named glyph slots: four edges,
//! two separator fills, five joins and four corners. Any slot may be the
//! empty string, which renders nothing for that segment; the default set is
//! entirely empty, producing a borderless table. Partial glyph sets
//! deserialize cleanly since every missing field falls back to empty.

use serde::{Deserialize, Serialize};

/// The fifteen glyph slots of a table frame.
///
/// Single-character strings are the intended use, but any length is
/// accepted; an edge glyph is repeated once per column of width.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Border {
    /// Left edge of data rows
    pub left: String,
    /// Top edge fill
    pub top: String,
    /// Right edge of data rows
    pub right: String,
    /// Bottom edge fill
    pub bottom: String,

    /// Fill of the header separator row
    pub center_horizontal: String,
    /// Divider between columns in data rows
    pub center_vertical: String,

    /// Left end of the header separator row
    pub left_join: String,
    /// Column crossing in the header separator row
    pub center_join: String,
    /// Right end of the header separator row
    pub right_join: String,
    /// Column crossing in the top edge
    pub top_join: String,
    /// Column crossing in the bottom edge
    pub bottom_join: String,

    /// Top left corner
    pub top_left: String,
    /// Top right corner
    pub top_right: String,
    /// Bottom left corner
    pub bottom_left: String,
    /// Bottom right corner
    pub bottom_right: String,
}

impl Border {
    /// All slots empty; nothing is drawn.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Plain ASCII frame: `+`, `-` and `|`.
    pub fn ascii() -> Self {
        Self {
            left: "|".to_string(),
            top: "-".to_string(),
            right: "|".to_string(),
            bottom: "-".to_string(),
            center_horizontal: "-".to_string(),
            center_vertical: "|".to_string(),
            left_join: "+".to_string(),
            center_join: "+".to_string(),
            right_join: "+".to_string(),
            top_join: "+".to_string(),
            bottom_join: "+".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
        }
    }

    /// Light box-drawing frame.
    pub fn light() -> Self {
        Self {
            left: "│".to_string(),
            top: "─".to_string(),
            right: "│".to_string(),
            bottom: "─".to_string(),
            center_horizontal: "─".to_string(),
            center_vertical: "│".to_string(),
            left_join: "├".to_string(),
            center_join: "┼".to_string(),
            right_join: "┤".to_string(),
            top_join: "┬".to_string(),
            bottom_join: "┴".to_string(),
            top_left: "┌".to_string(),
            top_right: "┐".to_string(),
            bottom_left: "└".to_string(),
            bottom_right: "┘".to_string(),
        }
    }
}
