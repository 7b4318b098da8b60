use serde::Deserialize;
use serde::Serialize;

/// One of the two players at a heads-up table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Who {
    One = 1,
    Two = 2,
}

impl Who {
    pub const fn all() -> [Self; 2] {
        [Self::One, Self::Two]
    }
    /// The opponent.
    pub const fn other(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
    /// Array index for per-player storage, `One` first.
    pub const fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

/// u8 isomorphism
impl From<Who> for u8 {
    fn from(who: Who) -> u8 {
        who as u8
    }
}
impl TryFrom<u8> for Who {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(anyhow::anyhow!("no player {}", n)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Who {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            _ => Err(anyhow::anyhow!("no player {:?}", s)),
        }
    }
}

impl std::fmt::Display for Who {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
