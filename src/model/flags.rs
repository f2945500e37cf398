#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BehaviourFlag {
    Pleasure,
    Attention,
    Disruption,
    Read,
}

impl BehaviourFlag {
    /// Header of the class-file column carrying this flag.
    pub fn column(self) -> &'static str {
        match self {
            BehaviourFlag::Pleasure => "Pleasure",
            BehaviourFlag::Attention => "Attention",
            BehaviourFlag::Disruption => "Disruption",
            BehaviourFlag::Read => "Read",
        }
    }
}

/// Marker that sets a flag when it appears in a flag column.
pub const FLAG_MARKER: &str = "X";

pub fn flag_order() -> &'static [BehaviourFlag] {
    &[
        BehaviourFlag::Pleasure,
        BehaviourFlag::Attention,
        BehaviourFlag::Disruption,
        BehaviourFlag::Read,
    ]
}

pub fn parse_flag_cell(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(FLAG_MARKER)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet {
    bits: u8,
}

impl FlagSet {
    pub fn empty() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, flag: BehaviourFlag) -> Self {
        self.insert(flag);
        self
    }

    pub fn insert(&mut self, flag: BehaviourFlag) {
        self.bits |= 1 << flag as u8;
    }

    pub fn contains(&self, flag: BehaviourFlag) -> bool {
        self.bits & (1 << flag as u8) != 0
    }

    /// Set flags in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = BehaviourFlag> + '_ {
        flag_order().iter().copied().filter(|f| self.contains(*f))
    }
}
