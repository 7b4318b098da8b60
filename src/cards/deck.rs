use super::board::Board;
use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;

/// A deck of the cards not yet dealt, supporting uniform random draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self) -> Card {
        debug_assert!(self.0.size() > 0);
        let i = rand::random_range(0..self.0.size());
        let mut cards = self.0;
        let card = cards.nth(i).expect("index within deck size");
        self.0.remove(card);
        card
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::from((a, b))
    }
    /// Deals the five community cards.
    pub fn board(&mut self) -> Board {
        Board::from([(); 5].map(|_| self.draw()))
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
