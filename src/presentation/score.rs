//! Nutri-Score indicator mapping
//!
//! The indicator is a marker on a 0-100% horizontal scale split into five
//! equal segments, one per grade. Mapping is total: any input, including
//! malformed grade text, produces a defined indicator.

use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Label colour used when no grade colour applies
pub const DEFAULT_LABEL_COLOR: &str = "white";

/// Border colour of the marker whenever it is visible
pub const MARKER_BORDER_COLOR: &str = "white";

/// Position that parks the marker just left of the scale
pub const OFF_SCALE_POSITION: i8 = -10;

/// A recognised Nutri-Score grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(ascii_case_insensitive)]
pub enum NutriGrade {
    A,
    B,
    C,
    D,
    E,
}

impl NutriGrade {
    /// Centre of the grade's segment, in percent of the scale
    pub fn position_pct(self) -> i8 {
        match self {
            NutriGrade::A => 10,
            NutriGrade::B => 30,
            NutriGrade::C => 50,
            NutriGrade::D => 70,
            NutriGrade::E => 90,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            NutriGrade::A => "#038141",
            NutriGrade::B => "#85BB2F",
            NutriGrade::C => "#FECB02",
            NutriGrade::D => "#EE8100",
            NutriGrade::E => "#E63E11",
        }
    }

    pub fn all() -> [NutriGrade; 5] {
        [
            NutriGrade::A,
            NutriGrade::B,
            NutriGrade::C,
            NutriGrade::D,
            NutriGrade::E,
        ]
    }
}

/// What the score widget shows for one product
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreIndicator {
    /// Whether the marker is drawn at all
    pub visible: bool,
    /// Marker position in percent; `None` when hidden
    pub position_pct: Option<i8>,
    /// Colour of the label text
    pub color: &'static str,
    pub label: String,
    pub grade: Option<NutriGrade>,
}

impl ScoreIndicator {
    /// Map raw grade text to an indicator
    ///
    /// Absent or empty text hides the marker and labels it `?`. Text outside
    /// A-E keeps the marker visible but parks it off-scale.
    pub fn for_grade(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(text) if !text.is_empty() => text,
            _ => {
                return Self {
                    visible: false,
                    position_pct: None,
                    color: DEFAULT_LABEL_COLOR,
                    label: "?".to_string(),
                    grade: None,
                }
            }
        };

        let grade = raw.parse::<NutriGrade>().ok();
        Self {
            visible: true,
            position_pct: Some(grade.map_or(OFF_SCALE_POSITION, NutriGrade::position_pct)),
            color: grade.map_or(DEFAULT_LABEL_COLOR, NutriGrade::color),
            label: raw.to_uppercase(),
            grade,
        }
    }

    /// True when the marker sits inside the 0-100% scale
    pub fn is_on_scale(&self) -> bool {
        matches!(self.position_pct, Some(p) if (0..=100).contains(&p))
    }
}
