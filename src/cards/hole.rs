use super::card::Card;
use super::hand::Hand;

/// A player's two private cards, kept in the order they were dealt.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        Self([a, b])
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0.into_iter().collect()
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] if a != b => Ok(Self::from((*a, *b))),
            [_, _] => Err(format!("hole cards must differ: {}", s)),
            _ => Err(format!("hole needs 2 cards: {}", s)),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dealt_order_survives_display() {
        let hole = Hole::try_from("8s7s").unwrap();
        assert_eq!(hole.to_string(), "8s7s");
    }

    #[test]
    fn rejects_pairs_of_the_same_card() {
        assert!(Hole::try_from("8s8s").is_err());
        assert!(Hole::try_from("8s").is_err());
        assert!(Hole::try_from("8s7s6s").is_err());
    }
}
