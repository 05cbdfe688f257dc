//! # termgridlib
//!
//! A table layout engine for terminals: turns a header plus body rows of
//! text into a bordered, aligned text block, splitting tables that are too
//! wide into side-by-side-printable pages.
//!
//! ## Overview
//!
//! Construction is a single pipeline: raw strings are normalized into a
//! rectangular grid, each cell is sanitized and measured, column widths and
//! row heights are derived, columns are partitioned against the width
//! budget, and each partition is rendered with the configured border glyphs
//! and alignment. The resulting [`Table`] is immutable; querying it never
//! recomputes anything.
//!
//! ## Features
//!
//! - **Alignment**: horizontal (left/center/right) and vertical
//!   (top/center/bottom) cell alignment
//! - **Width budgeting**: a fixed column budget, the detected terminal
//!   width, or no limit; over-wide tables split into ordered chunks
//! - **Borders**: fifteen configurable glyph slots, all optional, with
//!   ready-made `ascii` and `light` presets
//! - **Orientation**: fields as columns (records are rows) or transposed
//! - **Serialization**: arbitrary JSON records become tables via schema
//!   inference, with a recursion limit for nested structures
//!
//! Cells measure by character count; display-width concerns such as wide
//! glyphs or ANSI styling are out of scope.
//!
//! ## Example
//!
//! ```rust
//! use termgridlib::{Settings, Table};
//!
//! let header: Vec<String> = ["Name", "Age"].iter().map(|s| s.to_string()).collect();
//! let body = vec![
//!     vec!["Alice".to_string(), "30".to_string()],
//!     vec!["Bob".to_string(), "7".to_string()],
//! ];
//!
//! let table = Table::new(&header, &body, &Settings::default()).unwrap();
//! assert_eq!(table.get(), "Name Age\nAlice30 \nBob  7  ");
//! ```

pub mod border;
pub mod cell;
pub mod error;
pub mod grid;
pub mod layout;
pub mod render;
pub mod serialize;
pub mod settings;
pub mod table;
pub mod terminal;

pub use border::Border;
pub use cell::Cell;
pub use error::{ConfigViolation, TermgridError};
pub use layout::{Dimensions, Slice, WidthBudget};
pub use serialize::Serializer;
pub use settings::{
    HorizontalAlignment, MaxWidth, Orientation, RawMaxWidth, RawSettings, Settings,
    VerticalAlignment,
};
pub use table::Table;
pub use terminal::{FixedWidth, NoTerminal, TerminalSize, WidthSource};

/// Result type for termgridlib operations
pub type Result<T> = std::result::Result<T, TermgridError>;
