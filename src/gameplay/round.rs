use super::action::*;
use super::size::*;
use super::who::*;
use crate::Chips;
use crate::cards::street::Street;

/// One street of betting between two players.
///
/// Stakes are this street's contributions, blinds included. Stacks are never
/// stored; they derive from the stacks at street start minus the stakes, so
/// chips can only ever move in one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BettingRound {
    street: Street,
    button: Who,
    blind: Chips,
    carried: Chips,
    before: [Chips; 2],
    posted: [Chips; 2],
    stakes: [Chips; 2],
    actions: Vec<Action>,
    option: bool,
    settled: bool,
}

impl BettingRound {
    /// Preflop, with the button posting the big blind and the other player the
    /// small blind. A stack too short for its blind posts what it has.
    pub fn blinds(button: Who, blind: Chips, stacks: [Chips; 2]) -> Self {
        let mut posted = [0; 2];
        posted[button.index()] = stacks[button.index()].min(blind.saturating_mul(2));
        posted[button.other().index()] = stacks[button.other().index()].min(blind);
        let mut round = Self {
            street: Street::Pref,
            button,
            blind,
            carried: 0,
            before: stacks,
            posted,
            stakes: posted,
            actions: Vec::new(),
            option: false,
            settled: false,
        };
        round.settled = round.settles();
        round
    }
    /// A later street with zero stakes and the pot carried in.
    pub fn opening(
        street: Street,
        button: Who,
        blind: Chips,
        carried: Chips,
        stacks: [Chips; 2],
    ) -> Self {
        Self {
            street,
            button,
            blind,
            carried,
            before: stacks,
            posted: [0; 2],
            stakes: [0; 2],
            actions: Vec::new(),
            option: false,
            settled: false,
        }
    }
}

/// read-only accessors
impl BettingRound {
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn button(&self) -> Who {
        self.button
    }
    pub fn blind(&self) -> Chips {
        self.blind
    }
    pub fn carried(&self) -> Chips {
        self.carried
    }
    /// Stacks at street start, before any blind.
    pub fn before(&self) -> [Chips; 2] {
        self.before
    }
    /// Blinds posted at street start; zero after preflop.
    pub fn posted(&self) -> [Chips; 2] {
        self.posted
    }
    pub fn stakes(&self) -> [Chips; 2] {
        self.stakes
    }
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
    pub fn has_option(&self) -> bool {
        self.option
    }
    pub fn is_settled(&self) -> bool {
        self.settled
    }
    /// The player who opens the action, every street.
    pub fn first(&self) -> Who {
        self.button.other()
    }
    pub fn stake(&self, who: Who) -> Chips {
        self.stakes[who.index()]
    }
    pub fn stack(&self, who: Who) -> Chips {
        self.before[who.index()] - self.stakes[who.index()]
    }
    /// Chips behind for each player.
    pub fn stacks(&self) -> [Chips; 2] {
        [self.stack(Who::One), self.stack(Who::Two)]
    }
    /// Carried pot plus both stakes.
    pub fn pot(&self) -> Chips {
        self.carried + self.stakes.iter().sum::<Chips>()
    }
    /// The player who folded, if anyone did.
    pub fn folder(&self) -> Option<Who> {
        self.actions.iter().find(|a| a.is_fold()).map(|a| a.who())
    }
    pub fn is_allin(&self) -> bool {
        self.stacks().contains(&0)
    }
    /// Whose decision it is, `None` once settled.
    pub fn current_who(&self) -> Option<Who> {
        if self.settled {
            None
        } else {
            Some(
                self.actions
                    .last()
                    .map(|a| a.who().other())
                    .unwrap_or_else(|| self.first()),
            )
        }
    }
}

/// legal menu
impl BettingRound {
    /// Chips the actor needs to match the opponent.
    pub fn gap(&self, who: Who) -> Chips {
        self.stake(who.other()).saturating_sub(self.stake(who))
    }
    fn spot(&self, who: Who) -> Spot {
        let gap = self.gap(who);
        Spot {
            pot: self.pot(),
            gap,
            stack: self.stack(who),
            rival: self.stack(who.other()),
            min: if gap > 0 { gap } else { self.blind.saturating_mul(2) },
        }
    }
    /// Every legal action for the player on turn, in a fixed order:
    /// check or call, raises by size, all-in, then fold (always).
    pub fn allowed_actions(&self) -> Vec<Action> {
        let Some(who) = self.current_who() else {
            return Vec::new();
        };
        let spot = self.spot(who);
        let mut menu = Vec::new();
        if spot.gap == 0 {
            menu.push(Action::check(who));
        } else if spot.gap < spot.stack {
            menu.push(Action::call(who, spot.gap));
        }
        if spot.stack <= spot.gap {
            menu.push(Action::allin(who, spot.stack));
        } else if spot.rival > 0 {
            menu.extend(Size::raises(&spot).into_iter().map(|x| Action::raise(who, x)));
            menu.push(Action::allin(who, spot.stack));
        }
        menu.push(Action::fold(who));
        menu
    }
    pub fn is_allowed(&self, action: &Action) -> bool {
        self.allowed_actions().contains(action)
    }
}

/// state transitions
impl BettingRound {
    /// Records the action if it is exactly one of the legal menu entries.
    pub fn maybe_add_action(&mut self, action: Action) -> bool {
        match self.try_apply(action) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("rejected {:?} on {}: {}", action, self.street, e);
                false
            }
        }
    }
    pub fn try_apply(&mut self, action: Action) -> anyhow::Result<()> {
        if self.settled {
            anyhow::bail!("{} already settled", self.street);
        }
        if self.current_who() != Some(action.who()) {
            anyhow::bail!("player {} is not on turn", action.who());
        }
        if !self.is_allowed(&action) {
            anyhow::bail!("not in the legal menu");
        }
        let who = action.who();
        let moved = match action.kind() {
            ActionKind::Check | ActionKind::Fold => 0,
            ActionKind::Call | ActionKind::AllIn => action.amount(),
            ActionKind::Raise => self.gap(who) + action.amount(),
        };
        self.stakes[who.index()] += moved;
        self.actions.push(action);
        self.option = self.opens_option(&action) || (self.option && who != self.button);
        self.settled = self.settles();
        log::trace!("{} {}", self.street, action);
        Ok(())
    }
    /// Preflop limp into an unraised big blind that still has chips.
    fn opens_option(&self, action: &Action) -> bool {
        self.street == Street::Pref
            && self.actions.len() == 1
            && action.kind() == ActionKind::Call
            && action.who() == self.first()
            && self.stack(self.button) > 0
    }
    fn is_touched(&self, who: Who) -> bool {
        self.stack(who) == 0 || self.actions.iter().any(|a| a.who() == who)
    }
    fn is_everyone_touched(&self) -> bool {
        Who::all().iter().all(|w| self.is_touched(*w))
    }
    fn is_everyone_matched(&self) -> bool {
        self.stakes[0] == self.stakes[1]
    }
    /// Trailing player cannot put in more.
    fn is_behind_exhausted(&self) -> bool {
        Who::all()
            .iter()
            .find(|w| self.stake(**w) < self.stake(w.other()))
            .is_some_and(|w| self.stack(*w) == 0)
    }
    fn settles(&self) -> bool {
        self.folder().is_some()
            || self.is_behind_exhausted()
            || (self.is_everyone_matched() && self.is_everyone_touched() && !self.option)
    }
}

impl std::fmt::Display for BettingRound {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        writeln!(f, "{} {}", self.street.to_string().bold(), self.pot())?;
        for action in self.actions.iter() {
            writeln!(f, "  {}", action)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preflop() -> BettingRound {
        BettingRound::blinds(Who::Two, 10, [100, 100])
    }

    #[test]
    fn blinds_posted() {
        let round = preflop();
        assert_eq!(round.pot(), 30);
        assert_eq!(round.stakes(), [10, 20]);
        assert_eq!(round.stacks(), [90, 80]);
        assert_eq!(round.current_who(), Some(Who::One));
        assert!(!round.is_settled());
    }

    #[test]
    fn opening_menu() {
        assert_eq!(
            preflop().allowed_actions(),
            vec![
                Action::call(Who::One, 10),
                Action::raise(Who::One, 10),
                Action::raise(Who::One, 20),
                Action::raise(Who::One, 40),
                Action::raise(Who::One, 35),
                Action::allin(Who::One, 90),
                Action::fold(Who::One),
            ]
        );
    }

    #[test]
    fn menu_is_deterministic() {
        let round = preflop();
        assert_eq!(round.allowed_actions(), round.allowed_actions());
    }

    #[test]
    fn limp_grants_option() {
        let mut round = preflop();
        assert!(round.maybe_add_action(Action::call(Who::One, 10)));
        assert_eq!(round.pot(), 40);
        assert_eq!(round.current_who(), Some(Who::Two));
        assert!(round.has_option());
        assert!(!round.is_settled());
        assert_eq!(
            round.allowed_actions(),
            vec![
                Action::check(Who::Two),
                Action::raise(Who::Two, 20),
                Action::raise(Who::Two, 60),
                Action::raise(Who::Two, 40),
                Action::allin(Who::Two, 80),
                Action::fold(Who::Two),
            ]
        );
        assert!(round.maybe_add_action(Action::check(Who::Two)));
        assert!(!round.has_option());
        assert!(round.is_settled());
        assert_eq!(round.pot(), 40);
    }

    #[test]
    fn raise_then_call_settles() {
        let mut round = preflop();
        assert!(round.maybe_add_action(Action::raise(Who::One, 20)));
        assert_eq!(round.stakes(), [40, 20]);
        assert!(!round.has_option());
        assert!(round.maybe_add_action(Action::call(Who::Two, 20)));
        assert!(round.is_settled());
        assert_eq!(round.pot(), 80);
        assert_eq!(round.stacks(), [60, 60]);
    }

    #[test]
    fn rejects_inexact_amounts() {
        let mut round = preflop();
        let before = round.clone();
        assert!(!round.maybe_add_action(Action::call(Who::One, 11)));
        assert!(!round.maybe_add_action(Action::raise(Who::One, 13)));
        assert!(!round.maybe_add_action(Action::allin(Who::One, 89)));
        assert!(!round.maybe_add_action(Action::check(Who::One)));
        assert!(!round.maybe_add_action(Action::call(Who::Two, 10)));
        assert_eq!(round, before);
    }

    #[test]
    fn shove_leaves_short_stack_allin_or_fold() {
        let mut round = preflop();
        assert!(round.maybe_add_action(Action::allin(Who::One, 90)));
        assert_eq!(
            round.allowed_actions(),
            vec![Action::allin(Who::Two, 80), Action::fold(Who::Two)]
        );
        assert!(!round.maybe_add_action(Action::call(Who::Two, 80)));
        assert!(round.maybe_add_action(Action::allin(Who::Two, 80)));
        assert!(round.is_settled());
        assert!(round.is_allin());
        assert_eq!(round.pot(), 200);
    }

    #[test]
    fn fold_settles_with_empty_menu() {
        let mut round = preflop();
        assert!(round.maybe_add_action(Action::call(Who::One, 10)));
        assert!(round.maybe_add_action(Action::fold(Who::Two)));
        assert!(round.is_settled());
        assert!(!round.has_option());
        assert_eq!(round.folder(), Some(Who::Two));
        assert!(round.allowed_actions().is_empty());
        assert_eq!(round.current_who(), None);
    }

    #[test]
    fn fold_offered_against_a_check() {
        let round = BettingRound::opening(Street::Flop, Who::Two, 10, 40, [80, 80]);
        assert_eq!(
            round.allowed_actions(),
            vec![
                Action::check(Who::One),
                Action::raise(Who::One, 20),
                Action::raise(Who::One, 60),
                Action::raise(Who::One, 40),
                Action::allin(Who::One, 80),
                Action::fold(Who::One),
            ]
        );
    }

    #[test]
    fn settled_round_rejects_everything() {
        let mut round = preflop();
        assert!(round.maybe_add_action(Action::fold(Who::One)));
        assert!(!round.maybe_add_action(Action::check(Who::Two)));
        assert_eq!(round.actions().len(), 1);
    }

    #[test]
    fn postflop_needs_both_players() {
        let mut round = BettingRound::opening(Street::Flop, Who::Two, 10, 40, [80, 80]);
        assert_eq!(round.current_who(), Some(Who::One));
        assert!(round.maybe_add_action(Action::check(Who::One)));
        assert!(!round.is_settled());
        assert!(round.maybe_add_action(Action::check(Who::Two)));
        assert!(round.is_settled());
        assert_eq!(round.pot(), 40);
    }

    #[test]
    fn no_raise_into_allin_opponent() {
        let mut round = BettingRound::opening(Street::Turn, Who::Two, 10, 40, [80, 30]);
        assert!(round.maybe_add_action(Action::raise(Who::One, 20)));
        assert!(round.maybe_add_action(Action::allin(Who::Two, 30)));
        assert_eq!(
            round.allowed_actions(),
            vec![Action::call(Who::One, 10), Action::fold(Who::One)]
        );
        assert!(round.maybe_add_action(Action::call(Who::One, 10)));
        assert!(round.is_settled());
    }

    #[test]
    fn short_allin_behind_settles() {
        let mut round = BettingRound::opening(Street::Flop, Who::Two, 10, 40, [80, 60]);
        assert!(round.maybe_add_action(Action::raise(Who::One, 20)));
        assert_eq!(round.stakes(), [20, 0]);
        assert!(round.maybe_add_action(Action::raise(Who::Two, 20)));
        assert_eq!(round.stakes(), [20, 40]);
        assert!(round.maybe_add_action(Action::allin(Who::One, 60)));
        assert_eq!(
            round.allowed_actions(),
            vec![Action::allin(Who::Two, 20), Action::fold(Who::Two)]
        );
        assert!(round.maybe_add_action(Action::allin(Who::Two, 20)));
        assert!(round.is_settled());
        assert_eq!(round.stakes(), [80, 60]);
        assert_eq!(round.stacks(), [0, 0]);
    }
}
