use super::entry::*;
use crate::Chips;
use crate::gameplay::action::*;
use crate::gameplay::round::BettingRound;
use crate::gameplay::who::Who;

/// One street as it appears in an encoding:
/// `{button}/{before one} {before two}/{blind}/{log}/{after one} {after two}`.
///
/// Construction checks that the log moves exactly the chips separating
/// `before` from `after`, so a decoded record is internally consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    button: Who,
    before: [Chips; 2],
    blind: Chips,
    entries: Vec<Entry>,
    after: [Chips; 2],
}

impl Record {
    pub fn button(&self) -> Who {
        self.button
    }
    pub fn before(&self) -> [Chips; 2] {
        self.before
    }
    pub fn blind(&self) -> Chips {
        self.blind
    }
    pub fn after(&self) -> [Chips; 2] {
        self.after
    }
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
    /// The chosen actions, blind posts left out.
    pub fn actions(&self) -> impl Iterator<Item = Action> + '_ {
        self.entries.iter().filter_map(|e| e.action())
    }
    /// Chips moved into the pot on this street.
    pub fn stakes(&self) -> [Chips; 2] {
        [
            self.before[0] - self.after[0],
            self.before[1] - self.after[1],
        ]
    }
    /// Who decides next on this street, assuming the street is still live.
    pub fn next_who(&self) -> Who {
        self.actions()
            .last()
            .map(|a| a.who().other())
            .unwrap_or_else(|| self.button.other())
    }
    /// Replays the log into per-player stakes. Fails when a stake overflows.
    fn replay(entries: &[Entry]) -> anyhow::Result<[Chips; 2]> {
        let mut stakes = [0 as Chips; 2];
        for entry in entries {
            let who = entry.who();
            let gap = stakes[who.other().index()].saturating_sub(stakes[who.index()]);
            let moved = match entry {
                Entry::Act(a) if a.kind() == ActionKind::Raise => gap.checked_add(a.amount()),
                _ => Some(entry.amount()),
            };
            stakes[who.index()] = moved
                .and_then(|m| stakes[who.index()].checked_add(m))
                .ok_or_else(|| anyhow::anyhow!("{} overflows the stake of {}", entry, who))?;
        }
        Ok(stakes)
    }
}

impl From<&BettingRound> for Record {
    fn from(round: &BettingRound) -> Self {
        let button = round.button();
        let posted = round.posted();
        let mut entries = Vec::with_capacity(round.actions().len() + 2);
        if posted[button.other().index()] > 0 {
            entries.push(Entry::SmallBlind(button.other(), posted[button.other().index()]));
        }
        if posted[button.index()] > 0 {
            entries.push(Entry::BigBlind(button, posted[button.index()]));
        }
        entries.extend(round.actions().iter().copied().map(Entry::from));
        Self {
            button,
            before: round.before(),
            blind: round.blind(),
            entries,
            after: round.stacks(),
        }
    }
}

fn pair(s: &str) -> anyhow::Result<[Chips; 2]> {
    use anyhow::Context;
    let mut parts = s.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(one), Some(two), None) => Ok([
            one.parse().with_context(|| format!("chips {:?}", one))?,
            two.parse().with_context(|| format!("chips {:?}", two))?,
        ]),
        _ => anyhow::bail!("expected two chip counts in {:?}", s),
    }
}

impl TryFrom<&str> for Record {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        use anyhow::Context;
        let fields = s.split('/').collect::<Vec<_>>();
        let [button, before, blind, log, after] = fields.as_slice() else {
            anyhow::bail!("street record {:?} needs 5 fields", s);
        };
        let button = Who::try_from(*button)?;
        let before = pair(before)?;
        let blind = blind.parse::<Chips>().with_context(|| format!("blind {:?}", blind))?;
        let after = pair(after)?;
        let entries = match *log {
            "-" => Vec::new(),
            log => log
                .split(' ')
                .map(Entry::try_from)
                .collect::<anyhow::Result<Vec<_>>>()?,
        };
        let moved = Self::replay(&entries)?;
        for who in Who::all() {
            let i = who.index();
            if before[i].checked_sub(moved[i]) != Some(after[i]) {
                anyhow::bail!(
                    "player {} moves {} from {} but ends with {} in {:?}",
                    who,
                    moved[i],
                    before[i],
                    after[i],
                    s
                );
            }
        }
        Ok(Self { button, before, blind, entries, after })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let log = match self.entries.is_empty() {
            true => "-".to_string(),
            false => self
                .entries
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        };
        write!(
            f,
            "{}/{} {}/{}/{}/{} {}",
            self.button, self.before[0], self.before[1], self.blind, log, self.after[0], self.after[1]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_blinds() {
        let round = BettingRound::blinds(Who::Two, 10, [100, 100]);
        let record = Record::from(&round);
        assert_eq!(record.to_string(), "2/100 100/10/1.2.10 2.1.20/90 80");
        assert_eq!(record.stakes(), [10, 20]);
        assert_eq!(record.next_who(), Who::One);
        assert_eq!(record.actions().count(), 0);
    }

    #[test]
    fn raise_moves_gap_plus_size() {
        let record = Record::try_from("2/100 100/10/1.2.10 2.1.20 1.5.20/60 80").unwrap();
        assert_eq!(record.actions().collect::<Vec<_>>(), vec![Action::raise(Who::One, 20)]);
        assert_eq!(record.next_who(), Who::Two);
    }

    #[test]
    fn empty_log() {
        let record = Record::try_from("1/80 80/10/-/80 80").unwrap();
        assert!(record.entries().is_empty());
        assert_eq!(record.to_string(), "1/80 80/10/-/80 80");
        assert_eq!(record.next_who(), Who::Two);
    }

    #[test]
    fn rejects_inconsistent_chips() {
        assert!(Record::try_from("2/100 100/10/1.2.10 2.1.20/90 90").is_err());
        assert!(Record::try_from("2/100 100/10/1.2.10 2.1.20/90").is_err());
        assert!(Record::try_from("2/100 100/10/1.2.10 2.1.20").is_err());
        assert!(Record::try_from("2/10 100/10/1.6.20/-10 100").is_err());
    }

    #[test]
    fn rejects_overflowing_stakes() {
        assert!(Record::try_from("2/100 100/10/1.6.4294967295 1.6.1/0 0").is_err());
        assert!(Record::try_from("2/100 100/10/2.6.10 1.5.4294967295/0 0").is_err());
    }
}
