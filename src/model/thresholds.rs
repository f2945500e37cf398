#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MarkBand {
    Fail,
    Careful,
    Satisfactory,
    Good,
    Excellent,
}

pub fn band_order() -> &'static [MarkBand] {
    &[
        MarkBand::Fail,
        MarkBand::Careful,
        MarkBand::Satisfactory,
        MarkBand::Good,
        MarkBand::Excellent,
    ]
}

/// Ascending exclusive upper bounds for every band but the last.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    pub upper: [f64; 4],
}

impl BandTable {
    pub fn additional_language_v1() -> Self {
        Self {
            upper: [0.4, 0.5, 0.6, 0.8],
        }
    }

    pub fn home_language_v1() -> Self {
        Self {
            upper: [0.5, 0.55, 0.6, 0.8],
        }
    }

    pub fn band(&self, score: f64) -> MarkBand {
        let bands = band_order();
        for (idx, &limit) in self.upper.iter().enumerate() {
            if score < limit {
                return bands[idx];
            }
        }
        MarkBand::Excellent
    }
}

/// Per-task scores below this draw a failure comment.
pub const TASK_FAIL_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleVariant {
    /// Stricter banding, additional-language classes.
    AdditionalLanguage,
    /// Looser banding, home-language classes.
    HomeLanguage,
}

impl RuleVariant {
    pub fn table(self) -> BandTable {
        match self {
            RuleVariant::AdditionalLanguage => BandTable::additional_language_v1(),
            RuleVariant::HomeLanguage => BandTable::home_language_v1(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RuleVariant::AdditionalLanguage => "additional-language",
            RuleVariant::HomeLanguage => "home-language",
        }
    }
}

/// Maps class identifiers to a final-mark variant by marker substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingTable {
    pub subject_marker: String,
    pub home_marker: String,
    pub additional_marker: String,
}

impl RoutingTable {
    pub fn default_v1() -> Self {
        Self {
            subject_marker: "ENG".to_string(),
            home_marker: "HL".to_string(),
            additional_marker: "FAL".to_string(),
        }
    }

    pub fn variant_for(&self, class_id: &str) -> Option<RuleVariant> {
        let id = class_id.to_ascii_uppercase();
        if !contains_marker(&id, &self.subject_marker) {
            return None;
        }
        if contains_marker(&id, &self.additional_marker) {
            Some(RuleVariant::AdditionalLanguage)
        } else if contains_marker(&id, &self.home_marker) {
            Some(RuleVariant::HomeLanguage)
        } else {
            None
        }
    }
}

fn contains_marker(upper_id: &str, marker: &str) -> bool {
    !marker.is_empty() && upper_id.contains(&marker.to_ascii_uppercase())
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
