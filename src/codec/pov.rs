use super::record::*;
use crate::Chips;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::gameplay::deal::Deal;
use crate::gameplay::hand::HandState;
use crate::gameplay::outcome::Outcome;
use crate::gameplay::who::Who;
use anyhow::Context;

/// A hand as one player may see it, and its single-line encoding.
///
/// Ten `;`-separated fields:
///
/// ```text
/// {hole} {flop} {turn} {river};{viewer};{button};{blind};{one} {two};
/// {preflop};{flop};{turn};{river};{outcome}[ {rival hole}]
/// ```
///
/// Unknown cards and unreached streets encode as `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pov {
    hole: Option<Hole>,
    flop: Option<[Card; 3]>,
    turn: Option<Card>,
    river: Option<Card>,
    viewer: Who,
    button: Who,
    blind: Chips,
    starting: [Chips; 2],
    records: Vec<Record>,
    outcome: Outcome,
    rival: Option<Hole>,
}

impl Pov {
    /// Viewer's hole, board up to the reached street, rival only at showdown.
    pub fn of(hand: &HandState, viewer: Who) -> Self {
        let showdown = hand.is_showdown();
        let reached = match showdown {
            true => Street::Rive,
            false => hand.street(),
        };
        Self::project(hand, viewer, reached, showdown)
    }
    /// Everything, from player one's seat.
    pub fn omniscient(hand: &HandState) -> Self {
        Self::project(hand, Who::One, Street::Rive, true)
    }
    fn project(hand: &HandState, viewer: Who, reached: Street, rival: bool) -> Self {
        let deal = hand.deal();
        let board = deal.board();
        let shown = board.revealed(reached);
        Self {
            hole: Some(deal.hole(viewer)),
            flop: shown.get(..3).map(|c| [c[0], c[1], c[2]]),
            turn: shown.get(3).copied(),
            river: shown.get(4).copied(),
            viewer,
            button: hand.button(),
            blind: hand.blind(),
            starting: hand.starting(),
            records: hand.rounds().iter().map(Record::from).collect(),
            outcome: hand.outcome(),
            rival: rival.then(|| deal.hole(viewer.other())),
        }
    }
}

/// read-only accessors
impl Pov {
    pub fn viewer(&self) -> Who {
        self.viewer
    }
    pub fn button(&self) -> Who {
        self.button
    }
    pub fn blind(&self) -> Chips {
        self.blind
    }
    pub fn starting(&self) -> [Chips; 2] {
        self.starting
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn hole(&self) -> Option<Hole> {
        self.hole
    }
    pub fn rival(&self) -> Option<Hole> {
        self.rival
    }
    /// Community cards visible to the viewer, in dealing order.
    pub fn board(&self) -> Vec<Card> {
        self.flop
            .iter()
            .flatten()
            .chain(self.turn.iter())
            .chain(self.river.iter())
            .copied()
            .collect()
    }
    /// The full deal. Fails unless every card is known and none repeats.
    pub fn deal(&self) -> anyhow::Result<Deal> {
        let hole = self.hole.context("hole is hidden")?;
        let rival = self.rival.context("rival hole is hidden")?;
        let [a, b, c] = self.flop.context("flop is hidden")?;
        let turn = self.turn.context("turn is hidden")?;
        let river = self.river.context("river is hidden")?;
        let board = Board::from([a, b, c, turn, river]);
        match self.viewer {
            Who::One => Deal::try_new(hole, rival, board),
            Who::Two => Deal::try_new(rival, hole, board),
        }
        .map_err(anyhow::Error::msg)
    }
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }
    pub fn preflop(&self) -> Option<&Record> {
        self.records.get(Street::Pref.index())
    }
    pub fn flop(&self) -> Option<&Record> {
        self.records.get(Street::Flop.index())
    }
    pub fn turn(&self) -> Option<&Record> {
        self.records.get(Street::Turn.index())
    }
    pub fn river(&self) -> Option<&Record> {
        self.records.get(Street::Rive.index())
    }
    /// The last street betting reached.
    pub fn street(&self) -> Street {
        Street::try_from(self.records.len().saturating_sub(1)).unwrap_or(Street::Rive)
    }
    pub fn stacks(&self) -> [Chips; 2] {
        self.records.last().map(|r| r.after()).unwrap_or(self.starting)
    }
    pub fn pot(&self) -> Chips {
        self.records.iter().flat_map(|r| r.stakes()).sum()
    }
    pub fn current_who(&self) -> Option<Who> {
        match self.outcome {
            Outcome::Active => self.records.last().map(|r| r.next_who()),
            _ => None,
        }
    }
    pub fn fen(&self) -> String {
        self.to_string()
    }
}

fn dash<T: std::fmt::Display>(item: Option<T>) -> String {
    item.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
}
fn undash<T>(s: &str, parse: impl FnOnce(&str) -> Result<T, String>) -> anyhow::Result<Option<T>> {
    match s {
        "-" => Ok(None),
        s => parse(s).map(Some).map_err(anyhow::Error::msg),
    }
}

impl std::fmt::Display for Pov {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let flop = self.flop.map(|cards| cards.iter().map(|c| c.to_string()).collect::<String>());
        write!(
            f,
            "{} {} {} {};{};{};{};{} {}",
            dash(self.hole),
            dash(flop),
            dash(self.turn),
            dash(self.river),
            self.viewer,
            self.button,
            self.blind,
            self.starting[0],
            self.starting[1],
        )?;
        for street in Street::all() {
            write!(f, ";{}", dash(self.records.get(street.index())))?;
        }
        let outcome = match self.outcome {
            Outcome::Active => "-".to_string(),
            Outcome::Folded(who) => format!("f{}", who),
            Outcome::Showdown(Some(who)) => format!("s{}", who),
            Outcome::Showdown(None) => "s-".to_string(),
        };
        match self.rival {
            Some(rival) => write!(f, ";{} {}", outcome, rival),
            None => write!(f, ";{}", outcome),
        }
    }
}

impl TryFrom<&str> for Pov {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let fields = s.trim().split(';').collect::<Vec<_>>();
        let [cards, viewer, button, blind, starting, pref, flop, turn, rive, result] =
            fields.as_slice()
        else {
            anyhow::bail!("expected 10 fields, found {}", fields.len());
        };
        // cards
        let tokens = cards.split(' ').collect::<Vec<_>>();
        let [hole, flop_cards, turn_card, river_card] = tokens.as_slice() else {
            anyhow::bail!("cards field {:?} needs 4 tokens", cards);
        };
        let hole = undash(hole, |s| Hole::try_from(s)).context("hole")?;
        let flop_cards = undash(flop_cards, |s| {
            <[Card; 3]>::try_from(Card::parse(s)?).map_err(|_| format!("flop needs 3 cards: {}", s))
        })
        .context("flop")?;
        let turn_card = undash(turn_card, |s| Card::try_from(s)).context("turn")?;
        let river_card = undash(river_card, |s| Card::try_from(s)).context("river")?;
        // table
        let viewer = Who::try_from(*viewer).context("viewer")?;
        let button = Who::try_from(*button).context("button")?;
        let blind = blind.parse::<Chips>().context("blind")?;
        let starting = {
            let chips = starting
                .split(' ')
                .map(|c| c.parse::<Chips>())
                .collect::<Result<Vec<_>, _>>()
                .context("starting stacks")?;
            <[Chips; 2]>::try_from(chips)
                .map_err(|_| anyhow::anyhow!("starting stacks need two counts"))?
        };
        starting[0]
            .checked_add(starting[1])
            .context("starting stacks overflow")?;
        // streets
        let mut records = Vec::new();
        for (street, field) in Street::all().iter().zip([pref, flop, turn, rive]) {
            match (*field, records.len() == street.index()) {
                ("-", _) => continue,
                (_, false) => anyhow::bail!("{} recorded after an unreached street", street),
                (field, true) => {
                    let record = Record::try_from(field).with_context(|| street.to_string())?;
                    let expected = records.last().map(Record::after).unwrap_or(starting);
                    if record.before() != expected {
                        anyhow::bail!("{} opens with stacks that do not carry over", street);
                    }
                    if record.button() != button || record.blind() != blind {
                        anyhow::bail!("{} disagrees with the table", street);
                    }
                    records.push(record);
                }
            }
        }
        if records.is_empty() {
            anyhow::bail!("preflop is missing");
        }
        // result
        let (outcome, rival) = match result.split_once(' ') {
            Some((outcome, rival)) => (outcome, Some(rival)),
            None => (*result, None),
        };
        let outcome = match outcome {
            "-" => Outcome::Active,
            "s-" => Outcome::Showdown(None),
            o if o.starts_with('f') => Outcome::Folded(Who::try_from(&o[1..]).context("outcome")?),
            o if o.starts_with('s') => {
                Outcome::Showdown(Some(Who::try_from(&o[1..]).context("outcome")?))
            }
            o => anyhow::bail!("unknown outcome {:?}", o),
        };
        let rival = match rival {
            Some(rival) => Some(Hole::try_from(rival).map_err(anyhow::Error::msg).context("rival")?),
            None => None,
        };
        let visible = hole
            .iter()
            .chain(rival.iter())
            .flat_map(|h| h.cards())
            .chain(flop_cards.iter().flatten().copied())
            .chain(turn_card)
            .chain(river_card)
            .collect::<Vec<_>>();
        if visible.iter().copied().collect::<Hand>().size() != visible.len() {
            anyhow::bail!("visible cards repeat in {:?}", cards);
        }
        Ok(Self {
            hole,
            flop: flop_cards,
            turn: turn_card,
            river: river_card,
            viewer,
            button,
            blind,
            starting,
            records,
            outcome,
            rival,
        })
    }
}

impl std::str::FromStr for Pov {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Serializes as its encoding.
impl serde::Serialize for Pov {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.fen())
    }
}

impl<'de> serde::Deserialize<'de> for Pov {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fen = String::deserialize(deserializer)?;
        Self::try_from(fen.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::action::Action;
    use crate::gameplay::arbiter::*;
    use std::sync::Arc;

    const FRESH: &str = "8s7s - - -;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-;-";

    fn hand(verdict: Option<Who>) -> HandState {
        let deal = Deal::try_from("8s7s KdKh Qh7d2c5s9h").unwrap();
        HandState::dealt(Who::Two, 10, [100, 100], deal, Arc::new(Fixed(verdict)))
    }

    #[test]
    fn fresh_hand_encoding() {
        let hand = hand(None);
        assert_eq!(hand.pov_of(Who::One).fen(), FRESH);
        assert_eq!(Pov::try_from(FRESH).unwrap().fen(), FRESH);
    }

    #[test]
    fn decoded_view() {
        let pov = FRESH.parse::<Pov>().unwrap();
        assert_eq!(pov.viewer(), Who::One);
        assert_eq!(pov.button(), Who::Two);
        assert_eq!(pov.pot(), 30);
        assert_eq!(pov.stacks(), [90, 80]);
        assert_eq!(pov.current_who(), Some(Who::One));
        assert_eq!(pov.street(), Street::Pref);
        assert!(pov.preflop().is_some());
        assert!(pov.flop().is_none());
        assert!(pov.board().is_empty());
        assert!(pov.deal().is_err());
    }

    #[test]
    fn rival_view_hides_hole() {
        let mut hand = hand(None);
        assert!(hand.maybe_add_action(Action::call(Who::One, 10)));
        assert!(hand.maybe_add_action(Action::check(Who::Two)));
        assert_eq!(
            hand.pov_of(Who::Two).fen(),
            "KdKh Qh7d2c - -;2;2;10;100 100;2/100 100/10/1.2.10 2.1.20 1.4.10 2.3.0/80 80;2/80 80/10/-/80 80;-;-;-"
        );
    }

    #[test]
    fn showdown_reveals_everything() {
        let mut hand = hand(Some(Who::Two));
        assert!(hand.maybe_add_action(Action::allin(Who::One, 90)));
        assert!(hand.maybe_add_action(Action::allin(Who::Two, 80)));
        let fen = hand.pov_of(Who::One).fen();
        assert_eq!(
            fen,
            "8s7s Qh7d2c 5s 9h;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20 1.6.90 2.6.80/0 0;-;-;-;s2 KdKh"
        );
        assert_eq!(fen, hand.fen());
        let pov = Pov::try_from(fen.as_str()).unwrap();
        assert_eq!(pov.board().len(), 5);
        assert_eq!(pov.pot(), 200);
        assert_eq!(pov.current_who(), None);
        assert_eq!(pov.deal().unwrap(), *hand.deal());
    }

    #[test]
    fn fold_keeps_rival_hidden() {
        let mut hand = hand(None);
        assert!(hand.maybe_add_action(Action::fold(Who::One)));
        let fen = hand.pov_of(Who::Two).fen();
        assert!(fen.ends_with(";f2"));
        assert!(!fen.contains("8s7s"));
        assert!(hand.fen().ends_with(";f2 KdKh"));
    }

    #[test]
    fn round_trips_through_random_play() {
        for _ in 0..128 {
            let mut hand = HandState::make(Who::One, 1, [100, 100], Arc::new(Fixed(None)));
            loop {
                for who in Who::all() {
                    let fen = hand.pov_of(who).fen();
                    assert_eq!(Pov::try_from(fen.as_str()).unwrap().fen(), fen);
                }
                let omni = hand.fen();
                let pov = Pov::try_from(omni.as_str()).unwrap();
                assert_eq!(pov.pot(), hand.pot());
                assert_eq!(pov.stacks(), hand.stacks());
                assert_eq!(pov.current_who(), hand.current_who());
                let menu = hand.allowed_actions();
                if menu.is_empty() {
                    break;
                }
                assert!(hand.maybe_add_action(menu[rand::random_range(0..menu.len())]));
            }
        }
    }

    #[test]
    fn replay_rebuilds_playable_hand() {
        let mut hand = hand(Some(Who::One));
        assert!(hand.maybe_add_action(Action::raise(Who::One, 20)));
        assert!(hand.maybe_add_action(Action::call(Who::Two, 20)));
        assert!(hand.maybe_add_action(Action::check(Who::One)));
        let fen = hand.fen();
        let mut copy = HandState::from_fen(&fen, Arc::new(Fixed(Some(Who::One)))).unwrap();
        assert_eq!(copy.fen(), fen);
        assert_eq!(copy.allowed_actions(), hand.allowed_actions());
        assert!(copy.maybe_add_action(Action::check(Who::Two)));
        assert_eq!(copy.street(), Street::Turn);
    }

    #[test]
    fn replay_rejects_redacted_and_illegal() {
        assert!(HandState::from_fen(FRESH, Arc::new(Fixed(None))).is_err());
        let illegal = "8s7s Qh7d2c 5s 9h;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20 1.5.13/67 80;-;-;-;- KdKh";
        assert!(Pov::try_from(illegal).is_ok());
        assert!(HandState::from_fen(illegal, Arc::new(Fixed(None))).is_err());
    }

    #[test]
    fn replay_rejects_repeated_and_oversized() {
        let repeated = "8s7s Qh7d2c 5s 9h;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-;- 9h5s";
        assert!(HandState::from_fen(repeated, Arc::new(Fixed(None))).is_err());
        let blind = "8s7s Qh7d2c 5s 9h;1;2;3000000000;100 100;2/100 100/3000000000/-/100 100;-;-;-;- KdKh";
        assert!(HandState::from_fen(blind, Arc::new(Fixed(None))).is_err());
    }

    #[test]
    fn malformed_input_is_an_error() {
        for fen in [
            "",
            "8s7s - - -;1;2;10;100 100;-;-;-;-;-",
            "8s7s - - -;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-",
            "8s7s - -;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-;-",
            "8s7s - - -;3;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-;-",
            "8s7s - - -;1;2;ten;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-;-",
            "8s7s - - -;1;2;10;100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-;-",
            "8s7s - - -;1;2;10;100 100;1/100 100/10/1.2.10 2.1.20/90 80;-;-;-;-",
            "8s7s - - -;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;2/90 80/10/-/90 80;-;-",
            "8s7s - - -;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;2/90 90/10/-/90 90;-;-;-",
            "8s7s - - -;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-;x3",
            "8s8s - - -;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-;-",
            "8s7s - - -;1;2;10;4294967295 4294967295;2/4294967295 4294967295/10/-/4294967295 4294967295;-;-;-;-",
            "8s7s - - -;1;2;10;100 100;2/100 100/10/1.6.4294967295 1.6.1/0 0;-;-;-;-",
            "8s7s 8s7d2c - -;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-;-",
            "8s7s Qh7d2c 5s 9h;1;2;10;100 100;2/100 100/10/1.2.10 2.1.20/90 80;-;-;-;- Qh9h",
        ] {
            assert!(Pov::try_from(fen).is_err(), "{:?}", fen);
        }
    }

    #[test]
    fn serializes_as_encoding() {
        let pov = Pov::try_from(FRESH).unwrap();
        let json = serde_json::to_string(&pov).unwrap();
        assert_eq!(json, format!("{:?}", FRESH));
        assert_eq!(serde_json::from_str::<Pov>(&json).unwrap(), pov);
    }
}
