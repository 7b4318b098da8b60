use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The five community cards of a hand, in dealing order.
///
/// The whole runout is fixed up front; which cards are public depends on
/// the street the betting has reached. See [`Board::revealed`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Board([Card; 5]);

impl Board {
    pub fn cards(&self) -> [Card; 5] {
        self.0
    }
    /// Community cards visible once betting reaches `street`.
    pub fn revealed(&self, street: Street) -> &[Card] {
        &self.0[..street.n_observed()]
    }
}

impl From<[Card; 5]> for Board {
    fn from(cards: [Card; 5]) -> Self {
        Self(cards)
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0.into_iter().collect()
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        let cards = <[Card; 5]>::try_from(cards).map_err(|_| format!("board needs 5 cards: {}", s))?;
        match cards.into_iter().collect::<Hand>().size() {
            5 => Ok(Self(cards)),
            _ => Err(format!("board cards must differ: {}", s)),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revealed_by_street() {
        let board = Board::try_from("Qh7d2c5s9h").unwrap();
        assert_eq!(board.revealed(Street::Pref).len(), 0);
        assert_eq!(board.revealed(Street::Flop).len(), 3);
        assert_eq!(board.revealed(Street::Turn).len(), 4);
        assert_eq!(board.revealed(Street::Rive).len(), 5);
        assert_eq!(board.revealed(Street::Turn)[3].to_string(), "5s");
    }

    #[test]
    fn rejects_duplicate_runouts() {
        assert!(Board::try_from("Qh7d2c5sQh").is_err());
        assert!(Board::try_from("Qh7d2c").is_err());
    }
}
