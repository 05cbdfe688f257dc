//! Table settings: alignment, orientation, margin, width budget.
//!
//! Two forms exist. [`Settings`] is the resolved value the engine consumes,
//! with typed fields and documented defaults. [`RawSettings`] is the loose
//! surface (JSON payloads, CLI flags) where every field is optional and
//! stringly typed; [`RawSettings::resolve`] validates the whole set in a
//! single pass and reports every violation at once rather than stopping at
//! the first bad field.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigViolation, TermgridError};

/// How cell content is padded out to its column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlignment {
    /// Content at the left edge, padding after
    #[default]
    Left,
    /// Padding split around the content, remainder trailing
    Center,
    /// Content at the right edge, padding before
    Right,
}

impl FromStr for HorizontalAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(HorizontalAlignment::Left),
            "center" => Ok(HorizontalAlignment::Center),
            "right" => Ok(HorizontalAlignment::Right),
            _ => Err(format!("unknown horizontal alignment: {}", s)),
        }
    }
}

/// How cell lines are padded out to their row height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    /// Content at the top, blank lines after
    #[default]
    Top,
    /// Blank lines split around the content, remainder after
    Center,
    /// Content at the bottom, blank lines before
    Bottom,
}

impl FromStr for VerticalAlignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VerticalAlignment::Top),
            "center" => Ok(VerticalAlignment::Center),
            "bottom" => Ok(VerticalAlignment::Bottom),
            _ => Err(format!("unknown vertical alignment: {}", s)),
        }
    }
}

/// Whether header fields map to columns or rows of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Fields are columns; the header is the first row
    #[default]
    Vertical,
    /// Fields are rows; each row starts with its field name
    Horizontal,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(Orientation::Vertical),
            "horizontal" => Ok(Orientation::Horizontal),
            _ => Err(format!("unknown orientation: {}", s)),
        }
    }
}

/// Width budget for a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxWidth {
    /// Never split into pages
    #[default]
    Infinity,
    /// Use the detected terminal width; degrade to `Infinity` when no
    /// terminal is detectable
    Auto,
    /// Fixed column budget; must be at least [`MaxWidth::MINIMUM`]
    Fixed(usize),
}

impl MaxWidth {
    /// Smallest accepted fixed budget
    pub const MINIMUM: usize = 10;
}

/// Resolved, validated table settings.
///
/// Immutable once handed to a table; builder methods consume and return the
/// value so settings read as one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Horizontal cell alignment
    pub horizontal_alignment: HorizontalAlignment,
    /// Vertical cell alignment
    pub vertical_alignment: VerticalAlignment,
    /// Grid orientation
    pub orientation: Orientation,
    /// Extra padding added to every measured cell width and height
    pub margin: usize,
    /// Reserved: accepted and stored but not consulted by layout
    pub wrap: bool,
    /// Width budget per rendered page
    pub max_width: MaxWidth,
    /// Recursion limit for the object-graph serializer; at least 1
    pub max_deep: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            horizontal_alignment: HorizontalAlignment::Left,
            vertical_alignment: VerticalAlignment::Top,
            orientation: Orientation::Vertical,
            margin: 0,
            wrap: false,
            max_width: MaxWidth::Infinity,
            max_deep: 1,
        }
    }
}

impl Settings {
    /// Builder: set horizontal alignment
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Builder: set vertical alignment
    pub fn with_vertical_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Builder: set orientation
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Builder: set margin
    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Builder: set the reserved wrap flag
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Builder: set the width budget
    pub fn with_max_width(mut self, max_width: MaxWidth) -> Self {
        self.max_width = max_width;
        self
    }

    /// Builder: set the serializer recursion limit
    pub fn with_max_deep(mut self, max_deep: usize) -> Self {
        self.max_deep = max_deep;
        self
    }

    /// Check the invariants the type system cannot encode: a fixed width
    /// budget of at least [`MaxWidth::MINIMUM`] and a recursion limit of at
    /// least 1. Programmatically built settings go through this at table
    /// construction; [`RawSettings::resolve`] never produces a failing value.
    pub fn validate(&self) -> Result<(), TermgridError> {
        let mut violations = Vec::new();
        if let MaxWidth::Fixed(width) = self.max_width {
            if width < MaxWidth::MINIMUM {
                violations.push(ConfigViolation {
                    parameter: "maxWidth",
                    problem: format!("{} is below the minimum", width),
                    expected: "integer >= 10, 'auto' or 'Infinity'",
                });
            }
        }
        if self.max_deep == 0 {
            violations.push(ConfigViolation {
                parameter: "maxDeep",
                problem: "0 disables serialization entirely".to_string(),
                expected: "integer >= 1",
            });
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(TermgridError::Config { violations })
        }
    }
}

/// Loosely typed width budget as it arrives from JSON or a CLI flag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawMaxWidth {
    /// A numeric column budget
    Columns(i64),
    /// `"auto"` or `"Infinity"`
    Keyword(String),
}

/// Unvalidated settings as received from the outside.
///
/// Every field is optional; omitted fields take the documented defaults
/// (left / top / vertical / 0 / false / Infinity / 1).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSettings {
    /// `"left"`, `"center"` or `"right"`
    pub horizontal_alignment: Option<String>,
    /// `"top"`, `"center"` or `"bottom"`
    pub vertical_alignment: Option<String>,
    /// `"vertical"` or `"horizontal"`
    pub orientation: Option<String>,
    /// Non-negative padding
    pub margin: Option<i64>,
    /// Reserved flag
    pub wrap: Option<bool>,
    /// Column budget, `"auto"` or `"Infinity"`
    pub max_width: Option<RawMaxWidth>,
    /// Serializer recursion limit, at least 1
    pub max_deep: Option<i64>,
}

impl RawSettings {
    /// Validate every present field and produce resolved [`Settings`].
    ///
    /// The pass always visits all fields, so the returned
    /// [`TermgridError::Config`] carries every violation, not just the first
    /// one encountered.
    pub fn resolve(&self) -> Result<Settings, TermgridError> {
        let mut settings = Settings::default();
        let mut violations = Vec::new();

        if let Some(value) = &self.horizontal_alignment {
            match value.parse() {
                Ok(alignment) => settings.horizontal_alignment = alignment,
                Err(_) => violations.push(ConfigViolation {
                    parameter: "horizontalAlignment",
                    problem: format!("unrecognized value '{}'", value),
                    expected: "'left', 'center' or 'right'",
                }),
            }
        }

        if let Some(value) = &self.vertical_alignment {
            match value.parse() {
                Ok(alignment) => settings.vertical_alignment = alignment,
                Err(_) => violations.push(ConfigViolation {
                    parameter: "verticalAlignment",
                    problem: format!("unrecognized value '{}'", value),
                    expected: "'top', 'center' or 'bottom'",
                }),
            }
        }

        if let Some(value) = &self.orientation {
            match value.parse() {
                Ok(orientation) => settings.orientation = orientation,
                Err(_) => violations.push(ConfigViolation {
                    parameter: "orientation",
                    problem: format!("unrecognized value '{}'", value),
                    expected: "'vertical' or 'horizontal'",
                }),
            }
        }

        if let Some(margin) = self.margin {
            if margin >= 0 {
                settings.margin = margin as usize;
            } else {
                violations.push(ConfigViolation {
                    parameter: "margin",
                    problem: format!("{} is negative", margin),
                    expected: "integer >= 0",
                });
            }
        }

        if let Some(wrap) = self.wrap {
            settings.wrap = wrap;
        }

        if let Some(max_width) = &self.max_width {
            match max_width {
                RawMaxWidth::Columns(columns) if *columns >= MaxWidth::MINIMUM as i64 => {
                    settings.max_width = MaxWidth::Fixed(*columns as usize);
                }
                RawMaxWidth::Columns(columns) => violations.push(ConfigViolation {
                    parameter: "maxWidth",
                    problem: format!("{} is below the minimum", columns),
                    expected: "integer >= 10, 'auto' or 'Infinity'",
                }),
                RawMaxWidth::Keyword(keyword) => match keyword.as_str() {
                    "auto" => settings.max_width = MaxWidth::Auto,
                    "Infinity" => settings.max_width = MaxWidth::Infinity,
                    _ => violations.push(ConfigViolation {
                        parameter: "maxWidth",
                        problem: format!("unrecognized value '{}'", keyword),
                        expected: "integer >= 10, 'auto' or 'Infinity'",
                    }),
                },
            }
        }

        if let Some(max_deep) = self.max_deep {
            if max_deep >= 1 {
                settings.max_deep = max_deep as usize;
            } else {
                violations.push(ConfigViolation {
                    parameter: "maxDeep",
                    problem: format!("{} is below the minimum", max_deep),
                    expected: "integer >= 1",
                });
            }
        }

        if violations.is_empty() {
            Ok(settings)
        } else {
            Err(TermgridError::Config { violations })
        }
    }
}
