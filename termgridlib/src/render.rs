//! Border and alignment rendering: one slice into final text.
//!
//! Rendering is pure: it reads the analyzed grid and builds fresh padded
//! strings, so rendering the same slice twice produces identical output.

use crate::border::Border;
use crate::cell::Cell;
use crate::layout::Slice;
use crate::settings::{HorizontalAlignment, Orientation, Settings, VerticalAlignment};

/// Render one slice of the analyzed grid.
///
/// Produces the top border, every grid row padded to its row height and
/// column widths, the header separator between rows 0 and 1 when one is
/// configured, and the bottom border. Border lines whose glyphs are all
/// empty are omitted entirely, so a blank border yields content lines only.
pub fn render_slice(
    slice: &Slice,
    grid: &[Vec<Cell>],
    row_heights: &[usize],
    settings: &Settings,
    border: &Border,
) -> String {
    let widths = &slice.column_widths;
    let mut out: Vec<String> = Vec::new();

    let top = frame_line(
        &border.top_left,
        &border.top,
        &border.top_join,
        &border.top_right,
        widths,
    );
    if !top.is_empty() {
        out.push(top);
    }

    let separator = frame_line(
        &border.left_join,
        &border.center_horizontal,
        &border.center_join,
        &border.right_join,
        widths,
    );

    for (row_index, row) in grid.iter().enumerate() {
        // The separator marks the header off from the body; in horizontal
        // orientation row 0 is an ordinary field row, so none is drawn.
        if row_index == 1
            && settings.orientation == Orientation::Vertical
            && !separator.is_empty()
        {
            out.push(separator.clone());
        }

        let height = row_heights[row_index];
        let padded: Vec<Vec<String>> = row[slice.start..slice.finish]
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| {
                pad_cell(
                    cell,
                    width,
                    height,
                    settings.horizontal_alignment,
                    settings.vertical_alignment,
                )
            })
            .collect();

        for line_index in 0..height {
            let mut line = border.left.clone();
            for (column, block) in padded.iter().enumerate() {
                if column > 0 {
                    line.push_str(&border.center_vertical);
                }
                line.push_str(&block[line_index]);
            }
            line.push_str(&border.right);
            out.push(line);
        }
    }

    let bottom = frame_line(
        &border.bottom_left,
        &border.bottom,
        &border.bottom_join,
        &border.bottom_right,
        widths,
    );
    if !bottom.is_empty() {
        out.push(bottom);
    }

    out.join("\n")
}

/// Compose a horizontal border line: corner, an edge run per column, a join
/// at each interior column boundary, closing corner. All-empty glyphs
/// compose to an empty string.
fn frame_line(left: &str, edge: &str, join: &str, right: &str, widths: &[usize]) -> String {
    let mut line = String::from(left);
    for (column, &width) in widths.iter().enumerate() {
        if column > 0 {
            line.push_str(join);
        }
        line.push_str(&edge.repeat(width));
    }
    line.push_str(right);
    line
}

/// Pad one cell out to `width` x `height` according to the alignments.
///
/// Returns a freshly allocated block of exactly `height` lines, each exactly
/// `width` characters; the analyzed cell is left untouched.
fn pad_cell(
    cell: &Cell,
    width: usize,
    height: usize,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> Vec<String> {
    let deficit = height.saturating_sub(cell.height);
    let (above, below) = match vertical {
        VerticalAlignment::Top => (0, deficit),
        VerticalAlignment::Center => (deficit / 2, deficit - deficit / 2),
        VerticalAlignment::Bottom => (deficit, 0),
    };

    let mut block = Vec::with_capacity(height);
    for _ in 0..above {
        block.push(" ".repeat(width));
    }
    for line in &cell.lines {
        block.push(pad_line(line, width, horizontal));
    }
    for _ in 0..below {
        block.push(" ".repeat(width));
    }
    block
}

/// Pad a single line out to `width` characters.
pub(crate) fn pad_line(line: &str, width: usize, alignment: HorizontalAlignment) -> String {
    let deficit = width.saturating_sub(line.chars().count());
    match alignment {
        HorizontalAlignment::Left => format!("{}{}", line, " ".repeat(deficit)),
        HorizontalAlignment::Right => format!("{}{}", " ".repeat(deficit), line),
        HorizontalAlignment::Center => {
            let leading = deficit / 2;
            format!(
                "{}{}{}",
                " ".repeat(leading),
                line,
                " ".repeat(deficit - leading)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzed(values: &[&[&str]]) -> Vec<Vec<Cell>> {
        values
            .iter()
            .map(|row| row.iter().map(|value| Cell::analyze(value)).collect())
            .collect()
    }

    fn full_slice(column_widths: Vec<usize>) -> Slice {
        Slice {
            start: 0,
            finish: column_widths.len(),
            column_widths,
        }
    }

    #[test]
    fn test_pad_line_always_reaches_width() {
        for alignment in [
            HorizontalAlignment::Left,
            HorizontalAlignment::Center,
            HorizontalAlignment::Right,
        ] {
            let padded = pad_line("ab", 7, alignment);
            assert_eq!(padded.chars().count(), 7);
            assert_eq!(padded.trim(), "ab");
        }
    }

    #[test]
    fn test_pad_line_placement() {
        assert_eq!(pad_line("ab", 5, HorizontalAlignment::Left), "ab   ");
        assert_eq!(pad_line("ab", 5, HorizontalAlignment::Right), "   ab");
        // odd deficit: shorter half leads
        assert_eq!(pad_line("ab", 5, HorizontalAlignment::Center), " ab  ");
    }

    #[test]
    fn test_pad_line_counts_characters_not_bytes() {
        let padded = pad_line("héllo", 7, HorizontalAlignment::Left);
        assert_eq!(padded.chars().count(), 7);
    }

    #[test]
    fn test_pad_cell_vertical_placement() {
        let cell = Cell::analyze("x");

        let top = pad_cell(&cell, 1, 3, HorizontalAlignment::Left, VerticalAlignment::Top);
        assert_eq!(top, vec!["x", " ", " "]);

        let bottom = pad_cell(
            &cell,
            1,
            3,
            HorizontalAlignment::Left,
            VerticalAlignment::Bottom,
        );
        assert_eq!(bottom, vec![" ", " ", "x"]);

        // odd deficit: shorter half above, remainder below
        let center = pad_cell(
            &cell,
            1,
            4,
            HorizontalAlignment::Left,
            VerticalAlignment::Center,
        );
        assert_eq!(center, vec![" ", "x", " ", " "]);
    }

    #[test]
    fn test_borderless_render_has_no_frame_lines() {
        let grid = analyzed(&[&["Name", "Age"], &["Alice", "30"], &["Bob", "7"]]);
        let rendered = render_slice(
            &full_slice(vec![5, 3]),
            &grid,
            &[1, 1, 1],
            &Settings::default(),
            &Border::blank(),
        );
        assert_eq!(rendered, "Name Age\nAlice30 \nBob  7  ");
    }

    #[test]
    fn test_ascii_border_frames_every_row() {
        let grid = analyzed(&[&["h"], &["b"]]);
        let rendered = render_slice(
            &full_slice(vec![1]),
            &grid,
            &[1, 1],
            &Settings::default(),
            &Border::ascii(),
        );
        assert_eq!(rendered, "+-+\n|h|\n+-+\n|b|\n+-+");
    }

    #[test]
    fn test_header_separator_skipped_in_horizontal_orientation() {
        let grid = analyzed(&[&["h"], &["b"]]);
        let settings = Settings::default().with_orientation(Orientation::Horizontal);
        let rendered = render_slice(
            &full_slice(vec![1]),
            &grid,
            &[1, 1],
            &settings,
            &Border::ascii(),
        );
        assert_eq!(rendered, "+-+\n|h|\n|b|\n+-+");
    }

    #[test]
    fn test_multiline_cell_fills_row_height() {
        let grid = analyzed(&[&["one\ntwo", "x"]]);
        let rendered = render_slice(
            &full_slice(vec![3, 1]),
            &grid,
            &[2],
            &Settings::default(),
            &Border::blank(),
        );
        assert_eq!(rendered, "onex\ntwo ");
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let grid = analyzed(&[&["a\nb", "c"], &["d", "e"]]);
        let slice = full_slice(vec![1, 1]);
        let settings = Settings::default();
        let border = Border::light();
        let first = render_slice(&slice, &grid, &[2, 1], &settings, &border);
        let second = render_slice(&slice, &grid, &[2, 1], &settings, &border);
        assert_eq!(first, second);
    }

    #[test]
    fn test_frame_line_composition() {
        assert_eq!(frame_line("+", "-", "+", "+", &[3, 2]), "+---+--+");
        assert_eq!(frame_line("", "", "", "", &[3, 2]), "");
    }
}
