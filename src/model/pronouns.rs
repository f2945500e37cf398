#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

pub const MALE_MARKER: &str = "M";

impl Gender {
    /// Only a case-insensitive `M` is male. Anything else, empty or unknown
    /// included, is female.
    pub fn from_marker(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case(MALE_MARKER) {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PronounSet {
    pub subjective: &'static str,
    pub subjective_cap: &'static str,
    pub objective: &'static str,
    pub possessive: &'static str,
    pub possessive_cap: &'static str,
    pub label: &'static str,
}

const MASCULINE: PronounSet = PronounSet {
    subjective: "he",
    subjective_cap: "He",
    objective: "him",
    possessive: "his",
    possessive_cap: "His",
    label: "boy",
};

const FEMININE: PronounSet = PronounSet {
    subjective: "she",
    subjective_cap: "She",
    objective: "her",
    possessive: "her",
    possessive_cap: "Her",
    label: "girl",
};

pub fn resolve(gender: Gender) -> PronounSet {
    match gender {
        Gender::Male => MASCULINE,
        Gender::Female => FEMININE,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/pronouns.rs"]
mod tests;
