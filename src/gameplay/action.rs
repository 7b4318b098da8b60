use super::who::Who;
use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// The closed set of betting decisions.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionKind {
    Check,
    Call,
    Raise,
    AllIn,
    Fold,
}

impl ActionKind {
    pub const fn all() -> [Self; 5] {
        [Self::Check, Self::Call, Self::Raise, Self::AllIn, Self::Fold]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Check => "CHECK",
            Self::Call => "CALL",
            Self::Raise => "RAISE",
            Self::AllIn => "ALLIN",
            Self::Fold => "FOLD",
        }
    }
}

/// A player's betting decision.
///
/// `amount` is always the number of chips the action moves from the actor's
/// stack, except for `Raise`, where it is the size *on top* of calling:
///
/// - `Check`, `Fold`: zero
/// - `Call(g)`: exactly the gap to the opponent's stake
/// - `Raise(x)`: the actor moves `g + x`, ending `x` above the opponent
/// - `AllIn(s)`: the actor's whole remaining stack
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    who: Who,
    kind: ActionKind,
    amount: Chips,
}

impl Action {
    pub const fn new(who: Who, kind: ActionKind, amount: Chips) -> Self {
        Self { who, kind, amount }
    }
    pub const fn check(who: Who) -> Self {
        Self::new(who, ActionKind::Check, 0)
    }
    pub const fn call(who: Who, gap: Chips) -> Self {
        Self::new(who, ActionKind::Call, gap)
    }
    pub const fn raise(who: Who, on_top: Chips) -> Self {
        Self::new(who, ActionKind::Raise, on_top)
    }
    pub const fn allin(who: Who, stack: Chips) -> Self {
        Self::new(who, ActionKind::AllIn, stack)
    }
    pub const fn fold(who: Who) -> Self {
        Self::new(who, ActionKind::Fold, 0)
    }
}

impl Action {
    pub fn who(&self) -> Who {
        self.who
    }
    pub fn kind(&self) -> ActionKind {
        self.kind
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
    pub fn is_fold(&self) -> bool {
        self.kind == ActionKind::Fold
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        let who = self.who;
        match self.kind {
            ActionKind::Check => write!(f, "{who} {}", "CHECK".cyan()),
            ActionKind::Fold => write!(f, "{who} {}", "FOLD".red()),
            ActionKind::Call => write!(f, "{who} {}", format!("CALL  {}", self.amount).yellow()),
            ActionKind::Raise => write!(f, "{who} {}", format!("RAISE {}", self.amount).green()),
            ActionKind::AllIn => write!(f, "{who} {}", format!("ALLIN {}", self.amount).magenta()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passive_actions_carry_no_chips() {
        assert_eq!(Action::check(Who::One).amount(), 0);
        assert_eq!(Action::fold(Who::Two).amount(), 0);
        assert!(Action::fold(Who::Two).is_fold());
        assert!(!Action::check(Who::One).is_fold());
    }

    #[test]
    fn equality_includes_actor_and_amount() {
        assert_ne!(Action::call(Who::One, 10), Action::call(Who::Two, 10));
        assert_ne!(Action::call(Who::One, 10), Action::call(Who::One, 20));
        assert_ne!(Action::raise(Who::One, 80), Action::allin(Who::One, 80));
    }
}
