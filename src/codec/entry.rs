use crate::Chips;
use crate::gameplay::action::*;
use crate::gameplay::who::Who;

/// One `who.kind.amount` triple in a street's log.
///
/// Blind posts are not actions (nobody chooses them) but the log records them
/// so a street's chip movement can be read without any table context.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Entry {
    BigBlind(Who, Chips),
    SmallBlind(Who, Chips),
    Act(Action),
}

impl Entry {
    pub fn who(&self) -> Who {
        match self {
            Self::BigBlind(who, _) | Self::SmallBlind(who, _) => *who,
            Self::Act(action) => action.who(),
        }
    }
    pub fn amount(&self) -> Chips {
        match self {
            Self::BigBlind(_, chips) | Self::SmallBlind(_, chips) => *chips,
            Self::Act(action) => action.amount(),
        }
    }
    pub fn action(&self) -> Option<Action> {
        match self {
            Self::Act(action) => Some(*action),
            _ => None,
        }
    }
    pub fn code(&self) -> u8 {
        match self {
            Self::BigBlind(..) => 1,
            Self::SmallBlind(..) => 2,
            Self::Act(action) => match action.kind() {
                ActionKind::Check => 3,
                ActionKind::Call => 4,
                ActionKind::Raise => 5,
                ActionKind::AllIn => 6,
                ActionKind::Fold => 7,
            },
        }
    }
}

impl From<Action> for Entry {
    fn from(action: Action) -> Self {
        Self::Act(action)
    }
}

impl TryFrom<&str> for Entry {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        use anyhow::Context;
        let mut parts = s.split('.');
        let (Some(who), Some(code), Some(amount), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            anyhow::bail!("entry {:?} is not who.kind.amount", s);
        };
        let who = Who::try_from(who)?;
        let amount = amount
            .parse::<Chips>()
            .with_context(|| format!("amount in entry {:?}", s))?;
        let kind = match code {
            "1" => return Ok(Self::BigBlind(who, amount)),
            "2" => return Ok(Self::SmallBlind(who, amount)),
            "3" => ActionKind::Check,
            "4" => ActionKind::Call,
            "5" => ActionKind::Raise,
            "6" => ActionKind::AllIn,
            "7" => ActionKind::Fold,
            _ => anyhow::bail!("unknown kind in entry {:?}", s),
        };
        match kind {
            ActionKind::Check | ActionKind::Fold if amount != 0 => {
                anyhow::bail!("{} carries no chips: {:?}", kind.label(), s)
            }
            _ => Ok(Self::Act(Action::new(who, kind, amount))),
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.who(), self.code(), self.amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blind_posts() {
        assert_eq!(Entry::try_from("1.2.10").unwrap(), Entry::SmallBlind(Who::One, 10));
        assert_eq!(Entry::try_from("2.1.20").unwrap(), Entry::BigBlind(Who::Two, 20));
    }

    #[test]
    fn actions() {
        assert_eq!(Entry::try_from("1.5.35").unwrap(), Entry::Act(Action::raise(Who::One, 35)));
        assert_eq!(Entry::try_from("2.7.0").unwrap(), Entry::Act(Action::fold(Who::Two)));
        assert_eq!(Entry::from(Action::call(Who::One, 10)).to_string(), "1.4.10");
    }

    #[test]
    fn malformed() {
        assert!(Entry::try_from("3.4.10").is_err());
        assert!(Entry::try_from("1.8.10").is_err());
        assert!(Entry::try_from("1.4").is_err());
        assert!(Entry::try_from("1.4.10.0").is_err());
        assert!(Entry::try_from("1.4.-10").is_err());
        assert!(Entry::try_from("1.3.5").is_err());
    }
}
