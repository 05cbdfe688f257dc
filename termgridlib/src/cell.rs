//! Cell analysis: one raw string into sanitized, measured lines.

/// A single analyzed cell.
///
/// Immutable once built; the renderer pads copies of the lines, never the
/// cell itself, so a cell can be rendered any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Character count of the widest sanitized line
    pub width: usize,
    /// Number of lines, always at least 1
    pub height: usize,
    /// Sanitized lines
    pub lines: Vec<String>,
}

impl Cell {
    /// Analyze one raw cell value.
    ///
    /// Sanitization: tabs expand to three spaces, a vertical tab becomes two
    /// newlines, the text splits on newlines, and each line drops remaining
    /// ASCII control characters (0x00-0x1F, 0x7F) and leading/trailing
    /// whitespace. Width is measured in characters, not display columns.
    pub fn analyze(raw: &str) -> Self {
        let expanded = raw.replace('\t', "   ").replace('\u{000B}', "\n\n");
        let lines: Vec<String> = expanded.split('\n').map(sanitize_line).collect();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let height = lines.len();
        Cell {
            width,
            height,
            lines,
        }
    }
}

fn sanitize_line(line: &str) -> String {
    let stripped: String = line.chars().filter(|c| !c.is_ascii_control()).collect();
    stripped.trim().to_string()
}
