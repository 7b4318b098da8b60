/// Card rank, deuce through ace.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Rank {
    #[default]
    Two = 0,
    Three = 1,
    Four = 2,
    Five = 3,
    Six = 4,
    Seven = 5,
    Eight = 6,
    Nine = 7,
    Ten = 8,
    Jack = 9,
    Queen = 10,
    King = 11,
    Ace = 12,
}

/// Notation characters, indexed by rank.
const RANKS: &str = "23456789TJQKA";

#[rustfmt::skip]
impl Rank {
    pub const fn all() -> [Self; 13] {
        [
            Self::Two, Self::Three, Self::Four, Self::Five, Self::Six, Self::Seven, Self::Eight,
            Self::Nine, Self::Ten, Self::Jack, Self::Queen, Self::King, Self::Ace,
        ]
    }
}

/// u8 isomorphism
impl From<u8> for Rank {
    fn from(n: u8) -> Rank {
        Self::all()[n as usize % 13]
    }
}
impl From<Rank> for u8 {
    fn from(r: Rank) -> u8 {
        r as u8
    }
}

/// str isomorphism
impl TryFrom<&str> for Rank {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match (s.len(), RANKS.find(s)) {
            (1, Some(i)) => Ok(Self::from(i as u8)),
            _ => Err(format!("invalid rank str: {}", s)),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let i = *self as usize;
        write!(f, "{}", &RANKS[i..i + 1])
    }
}
