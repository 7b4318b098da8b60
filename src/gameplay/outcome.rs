use super::who::Who;

/// How a hand stands. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Active,
    /// Won uncontested by this player.
    Folded(Who),
    /// Decided by the arbiter; `None` splits.
    Showdown(Option<Who>),
}

impl Outcome {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
    pub fn is_showdown(&self) -> bool {
        matches!(self, Self::Showdown(_))
    }
    pub fn winner(&self) -> Option<Who> {
        match self {
            Self::Active => None,
            Self::Folded(who) => Some(*who),
            Self::Showdown(verdict) => *verdict,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Folded(who) => write!(f, "player {} wins uncontested", who),
            Self::Showdown(Some(who)) => write!(f, "player {} wins at showdown", who),
            Self::Showdown(None) => write!(f, "split pot"),
        }
    }
}
