use super::action::*;
use super::arbiter::*;
use super::deal::*;
use super::outcome::*;
use super::round::*;
use super::who::*;
use crate::Arbitrary;
use crate::Chips;
use crate::cards::street::Street;
use crate::codec::pov::Pov;
use std::sync::Arc;

/// One hand of heads-up hold'em, from blinds to payout.
///
/// Rounds accumulate street by street; the last one is live until the hand
/// resolves. Chip totals are never cached. They derive from the rounds, so
/// `pot() + stacks()` always sums to the starting chips.
#[derive(Clone)]
pub struct HandState {
    button: Who,
    blind: Chips,
    starting: [Chips; 2],
    deal: Deal,
    rounds: Vec<BettingRound>,
    outcome: Outcome,
    arbiter: Arc<dyn Arbiter>,
}

impl HandState {
    /// A fresh hand over a random deal.
    pub fn make(button: Who, blind: Chips, stacks: [Chips; 2], arbiter: Arc<dyn Arbiter>) -> Self {
        Self::dealt(button, blind, stacks, Deal::random(), arbiter)
    }
    pub fn dealt(
        button: Who,
        blind: Chips,
        stacks: [Chips; 2],
        deal: Deal,
        arbiter: Arc<dyn Arbiter>,
    ) -> Self {
        Self::try_dealt(button, blind, stacks, deal, arbiter).expect("valid table")
    }
    /// Fallible version of [`dealt`](Self::dealt).
    ///
    /// Both stacks must strictly exceed the big blind, and the chips on the
    /// table must fit in [`Chips`].
    pub fn try_dealt(
        button: Who,
        blind: Chips,
        stacks: [Chips; 2],
        deal: Deal,
        arbiter: Arc<dyn Arbiter>,
    ) -> anyhow::Result<Self> {
        use anyhow::Context;
        if blind == 0 {
            anyhow::bail!("blind must be positive");
        }
        let big = blind.checked_mul(2).context("big blind overflows")?;
        stacks[0].checked_add(stacks[1]).context("table chips overflow")?;
        if let Some(who) = Who::all().into_iter().find(|w| stacks[w.index()] <= big) {
            anyhow::bail!(
                "player {} cannot cover the big blind of {} with {}",
                who,
                big,
                stacks[who.index()]
            );
        }
        Ok(Self {
            button,
            blind,
            starting: stacks,
            deal,
            rounds: vec![BettingRound::blinds(button, blind, stacks)],
            outcome: Outcome::Active,
            arbiter,
        })
    }
    /// The next hand: button alternated, ending stacks carried.
    ///
    /// `None` while this hand is unresolved or when either player cannot
    /// cover another big blind.
    pub fn continuation(&self, deal: Deal) -> Option<Self> {
        if self.outcome.is_active() {
            return None;
        }
        Self::try_dealt(
            self.button.other(),
            self.blind,
            self.ending_stacks(),
            deal,
            self.arbiter.clone(),
        )
        .ok()
    }
}

/// read-only accessors
impl HandState {
    pub fn button(&self) -> Who {
        self.button
    }
    pub fn blind(&self) -> Chips {
        self.blind
    }
    pub fn starting(&self) -> [Chips; 2] {
        self.starting
    }
    pub fn deal(&self) -> &Deal {
        &self.deal
    }
    pub fn arbiter(&self) -> Arc<dyn Arbiter> {
        self.arbiter.clone()
    }
    pub fn rounds(&self) -> &[BettingRound] {
        &self.rounds
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn winner(&self) -> Option<Who> {
        self.outcome.winner()
    }
    pub fn is_settled(&self) -> bool {
        !self.outcome.is_active()
    }
    pub fn is_showdown(&self) -> bool {
        self.outcome.is_showdown()
    }
    /// The live round, or the last one played once resolved.
    pub fn round(&self) -> &BettingRound {
        self.rounds.last().expect("hands open with preflop")
    }
    pub fn street(&self) -> Street {
        self.round().street()
    }
    pub fn preflop(&self) -> Option<&BettingRound> {
        self.rounds.get(Street::Pref.index())
    }
    pub fn flop(&self) -> Option<&BettingRound> {
        self.rounds.get(Street::Flop.index())
    }
    pub fn turn(&self) -> Option<&BettingRound> {
        self.rounds.get(Street::Turn.index())
    }
    pub fn river(&self) -> Option<&BettingRound> {
        self.rounds.get(Street::Rive.index())
    }
}

/// chip accounting
impl HandState {
    /// Everything this player has put in across every street.
    pub fn contributed(&self, who: Who) -> Chips {
        self.rounds.iter().map(|r| r.stake(who)).sum()
    }
    pub fn pot(&self) -> Chips {
        Who::all().iter().map(|w| self.contributed(*w)).sum()
    }
    /// Chips behind, excluding anything still in the pot.
    pub fn stacks(&self) -> [Chips; 2] {
        Who::all().map(|w| self.starting[w.index()] - self.contributed(w))
    }
    /// Chips each player takes from the pot once resolved.
    ///
    /// The bigger contributor first takes back whatever was never matched;
    /// the matched part goes to the winner or splits evenly.
    pub fn payouts(&self) -> [Chips; 2] {
        let mut payouts = [0; 2];
        if self.outcome.is_active() {
            return payouts;
        }
        let paid = Who::all().map(|w| self.contributed(w));
        let matched = paid[0].min(paid[1]);
        for who in Who::all() {
            payouts[who.index()] += paid[who.index()] - matched;
        }
        match self.outcome.winner() {
            Some(winner) => payouts[winner.index()] += 2 * matched,
            None => {
                payouts[0] += matched;
                payouts[1] += matched;
            }
        }
        payouts
    }
    pub fn ending_stacks(&self) -> [Chips; 2] {
        let stacks = self.stacks();
        let payouts = self.payouts();
        [stacks[0] + payouts[0], stacks[1] + payouts[1]]
    }
}

/// betting
impl HandState {
    pub fn current_who(&self) -> Option<Who> {
        match self.outcome {
            Outcome::Active => self.round().current_who(),
            _ => None,
        }
    }
    pub fn allowed_actions(&self) -> Vec<Action> {
        match self.outcome {
            Outcome::Active => self.round().allowed_actions(),
            _ => Vec::new(),
        }
    }
    /// Applies the action if it is legal right now, advancing the street or
    /// resolving the hand when the round settles.
    pub fn maybe_add_action(&mut self, action: Action) -> bool {
        if !self.outcome.is_active() {
            log::debug!("rejected {:?}: hand is over", action);
            return false;
        }
        let round = self.rounds.last_mut().expect("hands open with preflop");
        if !round.maybe_add_action(action) {
            return false;
        }
        self.advance();
        true
    }
    fn advance(&mut self) {
        let round = self.round();
        if !round.is_settled() {
            return;
        }
        if let Some(folder) = round.folder() {
            self.outcome = Outcome::Folded(folder.other());
            log::info!("{} (pot {})", self.outcome, self.pot());
            return;
        }
        match round.street().next() {
            Some(street) if !round.is_allin() => {
                let next = BettingRound::opening(
                    street,
                    self.button,
                    self.blind,
                    round.pot(),
                    round.stacks(),
                );
                log::debug!("{} opens with pot {}", street, next.pot());
                self.rounds.push(next);
            }
            _ => {
                self.outcome = Outcome::Showdown(self.arbiter.verdict(&self.deal));
                log::info!("{} (pot {})", self.outcome, self.pot());
            }
        }
    }
}

/// encoding
impl HandState {
    /// What `who` is allowed to see of this hand.
    pub fn pov_of(&self, who: Who) -> Pov {
        Pov::of(self, who)
    }
    /// Omniscient encoding: every card, both holes.
    pub fn fen(&self) -> String {
        Pov::omniscient(self).fen()
    }
    /// Rebuilds a playable hand from an omniscient encoding by replaying every
    /// recorded action through the engine.
    pub fn from_fen(fen: &str, arbiter: Arc<dyn Arbiter>) -> anyhow::Result<Self> {
        let pov = Pov::try_from(fen)?;
        let deal = pov.deal()?;
        let mut hand = Self::try_dealt(pov.button(), pov.blind(), pov.starting(), deal, arbiter)?;
        for action in pov.records().flat_map(|r| r.actions()) {
            if !hand.maybe_add_action(action) {
                anyhow::bail!("illegal {:?} on {}", action, hand.street());
            }
        }
        match hand.fen() == fen {
            true => Ok(hand),
            false => anyhow::bail!("replay does not reproduce {:?}", fen),
        }
    }
}

impl std::fmt::Debug for HandState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("HandState")
            .field("button", &self.button)
            .field("blind", &self.blind)
            .field("starting", &self.starting)
            .field("deal", &self.deal)
            .field("rounds", &self.rounds)
            .field("outcome", &self.outcome)
            .finish()
    }
}

impl std::fmt::Display for HandState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        let stacks = self.stacks();
        writeln!(f, "{}", format!("button {}  blind {}", self.button, self.blind).dimmed())?;
        for who in Who::all() {
            writeln!(f, "{} {:<4} {:>6}", who, self.deal.hole(who), stacks[who.index()])?;
        }
        for round in self.rounds.iter() {
            write!(f, "{}", round)?;
        }
        writeln!(f, "{}", self.outcome.to_string().bold())
    }
}
