//! Table facade: the construction pipeline and the rendered output.

use crate::border::Border;
use crate::cell::Cell;
use crate::error::TermgridError;
use crate::grid;
use crate::layout::{self, Dimensions, WidthBudget};
use crate::render;
use crate::settings::{MaxWidth, Settings};
use crate::terminal::{TerminalSize, WidthSource};
use crate::Result;

/// A rendered table.
///
/// Construction runs the whole pipeline — normalize, analyze, measure,
/// slice, render — and caches the rendered chunks; the value is read-only
/// afterwards, so querying it any number of times returns identical text.
#[derive(Debug, Clone)]
pub struct Table {
    settings: Settings,
    column_widths: Vec<usize>,
    row_heights: Vec<usize>,
    chunks: Vec<String>,
}

impl Table {
    /// Build a borderless table with the default terminal width source.
    pub fn new(header: &[String], body: &[Vec<String>], settings: &Settings) -> Result<Self> {
        Self::with_border(header, body, settings, &Border::blank())
    }

    /// Build a table with the given border glyphs.
    pub fn with_border(
        header: &[String],
        body: &[Vec<String>],
        settings: &Settings,
        border: &Border,
    ) -> Result<Self> {
        Self::with_width_source(header, body, settings, border, &TerminalSize)
    }

    /// Build a table, injecting the terminal width source consulted when the
    /// width budget is [`MaxWidth::Auto`].
    ///
    /// Fails fast on invalid settings or an empty header, before any layout
    /// work happens; a missing terminal is not a failure and degrades to an
    /// unbounded budget.
    pub fn with_width_source(
        header: &[String],
        body: &[Vec<String>],
        settings: &Settings,
        border: &Border,
        source: &dyn WidthSource,
    ) -> Result<Self> {
        settings.validate()?;
        if header.is_empty() {
            return Err(TermgridError::EmptyHeader);
        }

        let raw = grid::normalize(header, body, settings.orientation);
        let analyzed: Vec<Vec<Cell>> = raw
            .iter()
            .map(|row| row.iter().map(|value| Cell::analyze(value)).collect())
            .collect();
        let dimensions = Dimensions::measure(&analyzed, settings.margin);
        let budget = resolve_budget(settings.max_width, source);
        let slices = layout::slice_columns(&dimensions.column_widths, budget);
        let chunks = slices
            .iter()
            .map(|slice| {
                render::render_slice(slice, &analyzed, &dimensions.row_heights, settings, border)
            })
            .collect();

        Ok(Table {
            settings: *settings,
            column_widths: dimensions.column_widths,
            row_heights: dimensions.row_heights,
            chunks,
        })
    }

    /// The full rendered table: all chunks joined by a newline.
    pub fn get(&self) -> String {
        self.chunks.join("\n")
    }

    /// The rendered pages, in column order, without joining.
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    /// The settings the table was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Measured column widths, margin included.
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Measured row heights, margin included.
    pub fn row_heights(&self) -> &[usize] {
        &self.row_heights
    }
}

fn resolve_budget(max_width: MaxWidth, source: &dyn WidthSource) -> WidthBudget {
    match max_width {
        MaxWidth::Infinity => WidthBudget::Unbounded,
        MaxWidth::Fixed(columns) => WidthBudget::Columns(columns),
        MaxWidth::Auto => source
            .columns()
            .map(WidthBudget::Columns)
            .unwrap_or(WidthBudget::Unbounded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{HorizontalAlignment, Orientation, VerticalAlignment};
    use crate::terminal::{FixedWidth, NoTerminal};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn name_age_body() -> Vec<Vec<String>> {
        vec![strings(&["Alice", "30"]), strings(&["Bob", "7"])]
    }

    #[test]
    fn test_borderless_defaults_render_content_only() {
        let table = Table::new(
            &strings(&["Name", "Age"]),
            &name_age_body(),
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(table.get(), "Name Age\nAlice30 \nBob  7  ");
        assert_eq!(table.column_widths(), &[5, 3]);
        assert_eq!(table.row_heights(), &[1, 1, 1]);
    }

    #[test]
    fn test_get_is_nonempty_for_any_single_column() {
        let table = Table::new(&strings(&["h"]), &[], &Settings::default()).unwrap();
        assert!(!table.get().is_empty());
    }

    #[test]
    fn test_empty_header_is_rejected() {
        let error = Table::new(&[], &[], &Settings::default()).unwrap_err();
        assert!(matches!(error, TermgridError::EmptyHeader));
    }

    #[test]
    fn test_invalid_settings_fail_before_layout() {
        let settings = Settings::default().with_max_width(MaxWidth::Fixed(3));
        let error = Table::new(&strings(&["h"]), &[], &settings).unwrap_err();
        assert!(matches!(error, TermgridError::Config { .. }));
    }

    #[test]
    fn test_missing_body_cells_render_blank() {
        let table = Table::new(
            &strings(&["a", "b"]),
            &[strings(&["1"])],
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(table.get(), "ab\n1 ");
    }

    #[test]
    fn test_margin_grows_columns_and_rows() {
        let settings = Settings::default().with_margin(1);
        let table = Table::new(&strings(&["ab"]), &[strings(&["c"])], &settings).unwrap();
        assert_eq!(table.column_widths(), &[3]);
        assert_eq!(table.row_heights(), &[2, 2]);
        assert_eq!(table.get(), "ab \n   \nc  \n   ");
    }

    #[test]
    fn test_fixed_budget_splits_into_chunks() {
        // five columns of width 4 against a budget of 10
        let header = strings(&["aaaa", "bbbb", "cccc", "dddd", "eeee"]);
        let settings = Settings::default().with_max_width(MaxWidth::Fixed(10));
        let table = Table::new(&header, &[], &settings).unwrap();
        assert_eq!(table.chunks().len(), 3);
        assert_eq!(table.get(), "aaaabbbb\nccccdddd\neeee");
    }

    #[test]
    fn test_infinity_budget_is_one_chunk() {
        let header = strings(&["aaaa", "bbbb", "cccc", "dddd", "eeee"]);
        let table = Table::new(&header, &[], &Settings::default()).unwrap();
        assert_eq!(table.chunks().len(), 1);
    }

    #[test]
    fn test_auto_budget_uses_injected_source() {
        let header = strings(&["aaaa", "bbbb", "cccc", "dddd", "eeee"]);
        let settings = Settings::default().with_max_width(MaxWidth::Auto);
        let sliced = Table::with_width_source(
            &header,
            &[],
            &settings,
            &Border::blank(),
            &FixedWidth(10),
        )
        .unwrap();
        assert_eq!(sliced.chunks().len(), 3);

        let unbounded =
            Table::with_width_source(&header, &[], &settings, &Border::blank(), &NoTerminal)
                .unwrap();
        assert_eq!(unbounded.chunks().len(), 1);
    }

    #[test]
    fn test_oversize_column_still_renders() {
        let header = strings(&["wider-than-the-budget", "b"]);
        let settings = Settings::default().with_max_width(MaxWidth::Fixed(10));
        let table = Table::new(&header, &[], &settings).unwrap();
        assert_eq!(table.chunks().len(), 2);
        assert!(table.chunks()[0].contains("wider-than-the-budget"));
    }

    #[test]
    fn test_horizontal_orientation_transposes() {
        let settings = Settings::default().with_orientation(Orientation::Horizontal);
        let table = Table::new(&strings(&["Name", "Age"]), &name_age_body(), &settings).unwrap();
        assert_eq!(table.get(), "NameAliceBob\nAge 30   7  ");
    }

    #[test]
    fn test_right_alignment_pads_leading() {
        let settings =
            Settings::default().with_horizontal_alignment(HorizontalAlignment::Right);
        let table = Table::new(&strings(&["Name", "Age"]), &name_age_body(), &settings).unwrap();
        assert_eq!(table.get(), " NameAge\nAlice 30\n  Bob  7");
    }

    #[test]
    fn test_bottom_alignment_pads_above() {
        let settings = Settings::default()
            .with_vertical_alignment(VerticalAlignment::Bottom)
            .with_orientation(Orientation::Horizontal);
        let table = Table::new(
            &strings(&["k"]),
            &[strings(&["a\nb"]), strings(&["c"])],
            &settings,
        )
        .unwrap();
        assert_eq!(table.get(), " a \nkbc");
    }

    #[test]
    fn test_bordered_table_draws_header_separator() {
        let table = Table::with_border(
            &strings(&["Name", "Age"]),
            &name_age_body(),
            &Settings::default(),
            &Border::ascii(),
        )
        .unwrap();
        assert_eq!(
            table.get(),
            "+-----+---+\n\
             |Name |Age|\n\
             +-----+---+\n\
             |Alice|30 |\n\
             |Bob  |7  |\n\
             +-----+---+"
        );
    }

    #[test]
    fn test_querying_twice_is_identical() {
        let table = Table::new(
            &strings(&["Name", "Age"]),
            &name_age_body(),
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(table.get(), table.get());
        assert_eq!(table.chunks().join("\n"), table.get());
    }

    #[test]
    fn test_sanitization_happens_before_measurement() {
        let table = Table::new(
            &strings(&["h"]),
            &[strings(&["a\tb"])],
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(table.column_widths(), &[5]);
        assert!(table.get().contains("a   b"));
    }
}
