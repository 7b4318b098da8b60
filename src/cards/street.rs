/// The four betting rounds of a hand, in order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// The following street, or `None` after the river.
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Pref => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::Rive),
            Self::Rive => None,
        }
    }
    /// Position of this street in the hand, preflop first.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Community cards visible during this street.
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
}

impl TryFrom<usize> for Street {
    type Error = String;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::all()
            .get(n)
            .copied()
            .ok_or_else(|| format!("no street at index {}", n))
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progression_is_forward() {
        assert_eq!(Street::Pref.next(), Some(Street::Flop));
        assert_eq!(Street::Turn.next(), Some(Street::Rive));
        assert_eq!(Street::Rive.next(), None);
        assert!(Street::Pref < Street::Rive);
    }

    #[test]
    fn bijective_index() {
        for street in Street::all() {
            assert_eq!(Ok(*street), Street::try_from(street.index()));
        }
        assert!(Street::try_from(4).is_err());
    }
}
