use serde::Serialize;
use std::fmt;

/// Analyst rating on the value or feasibility axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Score {
    High,
    Medium,
    Low,
}

impl Score {
    /// Read a stored rating. Blank or unrecognized ratings count as unscored.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw?.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Score::High),
            "medium" => Some(Score::Medium),
            "low" => Some(Score::Low),
            _ => None,
        }
    }

    fn is_favourable(&self) -> bool {
        matches!(self, Score::High | Score::Medium)
    }
}

/// Placement on the value/feasibility matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// High value, high feasibility
    Pursue,
    /// High value, low feasibility
    Strategic,
    /// Low value, high feasibility
    QuickWin,
    /// Low value, low feasibility
    Deprioritize,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Strategic,
        Quadrant::Pursue,
        Quadrant::Deprioritize,
        Quadrant::QuickWin,
    ];

    /// `None` unless both axes carry a rating.
    pub fn classify(value: Option<Score>, feasibility: Option<Score>) -> Option<Self> {
        let (value, feasibility) = (value?, feasibility?);
        Some(match (value.is_favourable(), feasibility.is_favourable()) {
            (true, true) => Quadrant::Pursue,
            (true, false) => Quadrant::Strategic,
            (false, true) => Quadrant::QuickWin,
            (false, false) => Quadrant::Deprioritize,
        })
    }

    pub fn title(&self) -> &'static str {
        match self {
            Quadrant::Pursue => "Pursue Immediately",
            Quadrant::Strategic => "Strategic Initiatives",
            Quadrant::QuickWin => "Quick Wins",
            Quadrant::Deprioritize => "Deprioritize / Pass",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::Pursue => "High Value / High Feasibility",
            Quadrant::Strategic => "High Value / Low Feasibility",
            Quadrant::QuickWin => "Low Value / High Feasibility",
            Quadrant::Deprioritize => "Low Value / Low Feasibility",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
