use super::who::Who;
use crate::Arbitrary;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;

/// Every card a hand can show: both holes and the full runout.
///
/// Fixed at the start of the hand. How much of it a player may see is decided
/// by the codec, never by the deal itself.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Deal {
    holes: [Hole; 2],
    board: Board,
}

impl Deal {
    pub fn new(one: Hole, two: Hole, board: Board) -> Self {
        Self { holes: [one, two], board }
    }
    /// Like [`new`](Self::new), but refuses any card dealt twice.
    pub fn try_new(one: Hole, two: Hole, board: Board) -> Result<Self, String> {
        let deal = Self::new(one, two, board);
        match Hand::from(deal).size() {
            9 => Ok(deal),
            _ => Err(format!("deal cards must differ: {}", deal)),
        }
    }
    pub fn hole(&self, who: Who) -> Hole {
        self.holes[who.index()]
    }
    pub fn board(&self) -> Board {
        self.board
    }
}

impl Arbitrary for Deal {
    fn random() -> Self {
        let mut deck = Deck::new();
        let one = deck.hole();
        let two = deck.hole();
        let board = deck.board();
        Self::new(one, two, board)
    }
}

impl From<Deal> for Hand {
    fn from(deal: Deal) -> Self {
        deal.holes
            .iter()
            .flat_map(|h| h.cards())
            .chain(deal.board.cards())
            .collect()
    }
}

/// "{one} {two} {board}", e.g. "8s7s KdKh Qh7d2c5s9h"
impl TryFrom<&str> for Deal {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        let cards = <[Card; 9]>::try_from(cards).map_err(|_| format!("deal needs 9 cards: {}", s))?;
        Self::try_new(
            Hole::from((cards[0], cards[1])),
            Hole::from((cards[2], cards[3])),
            Board::from([cards[4], cards[5], cards[6], cards[7], cards[8]]),
        )
    }
}

impl std::fmt::Display for Deal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.holes[0], self.holes[1], self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_deal_has_nine_distinct_cards() {
        for _ in 0..64 {
            assert_eq!(Hand::from(Deal::random()).size(), 9);
        }
    }

    #[test]
    fn parse_and_display() {
        let deal = Deal::try_from("8s7s KdKh Qh7d2c5s9h").unwrap();
        assert_eq!(deal.hole(Who::One).to_string(), "8s7s");
        assert_eq!(deal.hole(Who::Two).to_string(), "KdKh");
        assert_eq!(deal.to_string(), "8s7s KdKh Qh7d2c5s9h");
    }

    #[test]
    fn rejects_repeated_cards() {
        assert!(Deal::try_from("8s7s 8sKh Qh7d2c5s9h").is_err());
        assert!(Deal::try_from("8s7s KdKh Qh7d2c5s").is_err());
        assert!(Deal::try_from("8s8s KdKh Qh7d2c5s9h").is_err());
    }
}
