use crate::Chips;

/// Raise sizing relative to the spot the actor faces.
///
/// Every variant resolves to an *on-top* amount: the chips the raiser puts in
/// beyond calling.
/// - `Min`: the minimum legal raise
/// - `Pot(n, d)`: fraction n/d of the pot after calling
/// - `Over`: the pot plus a minimum raise
/// - `Stack(n, d)`: commit fraction n/d of the actor's stack in total
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Size {
    Min,
    Pot(Chips, Chips),
    Over,
    Stack(Chips, Chips),
}

/// What the actor faces when choosing a raise size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spot {
    /// Carried pot plus both stakes on this street.
    pub pot: Chips,
    /// Chips needed to match the opponent's stake.
    pub gap: Chips,
    /// Actor's chips behind.
    pub stack: Chips,
    /// Opponent's chips behind.
    pub rival: Chips,
    /// Minimum raise: the gap when facing a bet, otherwise the big blind.
    pub min: Chips,
}

#[rustfmt::skip]
impl Size {
    pub const GRID: [Self; 4] = [Self::Min, Self::Pot(1, 2), Self::Over, Self::Stack(1, 2)];
}

impl Size {
    /// On-top chips this size resolves to, if the arithmetic is meaningful.
    pub fn into_chips(self, spot: &Spot) -> Option<Chips> {
        match self {
            Self::Min => Some(spot.min),
            Self::Pot(n, d) => Some(spot.pot.saturating_add(spot.gap).saturating_mul(n) / d),
            Self::Over => Some(spot.pot.saturating_add(spot.min)),
            Self::Stack(n, d) => (spot.stack.saturating_mul(n) / d).checked_sub(spot.gap),
        }
    }
    /// Distinct legal raise amounts for this spot, in grid order.
    ///
    /// A size survives when it is at least the minimum raise, strictly below
    /// the rival's stack, and leaves the actor with chips behind. Anything
    /// larger is covered by the all-in.
    pub fn raises(spot: &Spot) -> Vec<Chips> {
        let mut sizes = Vec::with_capacity(Self::GRID.len());
        for chips in Self::GRID.iter().filter_map(|s| s.into_chips(spot)) {
            if chips >= spot.min
                && chips < spot.rival
                && spot.gap.saturating_add(chips) < spot.stack
                && !sizes.contains(&chips)
            {
                sizes.push(chips);
            }
        }
        sizes
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Min => write!(f, "min"),
            Self::Pot(n, d) => write!(f, "{}:{}pot", n, d),
            Self::Over => write!(f, "over"),
            Self::Stack(n, d) => write!(f, "{}:{}stack", n, d),
        }
    }
}
