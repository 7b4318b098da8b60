use super::config::*;
use super::scheduler::*;
use crate::Arbitrary;
use crate::codec::pov::Pov;
use crate::gameplay::action::Action;
use crate::gameplay::arbiter::Arbiter;
use crate::gameplay::deal::Deal;
use crate::gameplay::hand::HandState;
use crate::gameplay::who::Who;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Invoked with each freshly dealt hand after the first.
pub type Callback = Arc<dyn Fn(&HandState) + Send + Sync>;

/// Mutable table state shared with scheduled tasks.
#[derive(Debug)]
struct Table {
    hand: HandState,
    hands: usize,
    pending: bool,
}

impl Table {
    /// Replaces the resolved hand with the next one, rebuying busted
    /// players. The table reopens even when the deal fails.
    fn deal_next(&mut self, config: &TableConfig, arbiter: Arc<dyn Arbiter>) -> anyhow::Result<()> {
        self.pending = false;
        let button = self.hand.button().other();
        self.hand = match self.hand.continuation(Deal::random()) {
            Some(next) => next,
            None => {
                log::info!("[table] rebuy to {:?}", config.stacks);
                HandState::try_dealt(button, config.blind, config.stacks, Deal::random(), arbiter)?
            }
        };
        self.hands += 1;
        log::info!("[table] hand {} dealt, button {}", self.hands, button);
        Ok(())
    }
}

/// Runs hand after hand at one heads-up table.
///
/// Actions go to the live hand. Once it resolves, the next deal is handed to
/// the scheduler rather than performed inline, giving observers the showdown
/// pause. Until that task fires, the table is between hands and rejects
/// every action.
pub struct HeadsUpGame {
    config: TableConfig,
    table: Arc<Mutex<Table>>,
    scheduler: Arc<dyn Scheduler>,
    arbiter: Arc<dyn Arbiter>,
    callback: Callback,
}

impl HeadsUpGame {
    /// Deals the first hand immediately, `config.button` on the button.
    pub fn new<S, A, F>(config: TableConfig, scheduler: S, arbiter: A, on_new_round: F) -> anyhow::Result<Self>
    where
        S: Scheduler + 'static,
        A: Arbiter + 'static,
        F: Fn(&HandState) + Send + Sync + 'static,
    {
        config.validate()?;
        let arbiter: Arc<dyn Arbiter> = Arc::new(arbiter);
        let hand = HandState::try_dealt(
            config.button,
            config.blind,
            config.stacks,
            Deal::random(),
            arbiter.clone(),
        )?;
        log::info!("[table] hand 1 dealt, button {}", config.button);
        Ok(Self {
            config,
            table: Arc::new(Mutex::new(Table {
                hand,
                hands: 1,
                pending: false,
            })),
            scheduler: Arc::new(scheduler),
            arbiter,
            callback: Arc::new(on_new_round),
        })
    }

    /// Forwards the action to the live hand. Schedules the next deal when
    /// this action resolves the hand.
    pub fn apply(&self, action: Action) -> bool {
        let resolved = {
            let mut table = self.lock();
            if table.pending {
                log::debug!("[table] rejected {:?} between hands", action);
                return false;
            }
            if !table.hand.maybe_add_action(action) {
                return false;
            }
            table.pending = table.hand.is_settled();
            table.pending
        };
        if resolved {
            log::debug!("[table] next hand in {:?}", self.config.delay());
            self.scheduler.schedule(self.next_hand(), self.config.delay());
        }
        true
    }

    /// Task that deals the next hand. Busted players rebuy to the
    /// configured stacks.
    fn next_hand(&self) -> Task {
        let table = self.table.clone();
        let config = self.config;
        let arbiter = self.arbiter.clone();
        let callback = self.callback.clone();
        Box::new(move || {
            let dealt = {
                let mut table = table.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
                table.deal_next(&config, arbiter).map(|_| table.hand.clone())
            };
            match dealt {
                Ok(hand) => callback(&hand),
                Err(e) => log::error!("[table] cannot deal: {:#}", e),
            }
        })
    }

    fn lock(&self) -> MutexGuard<'_, Table> {
        self.table.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// queries
impl HeadsUpGame {
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    /// Snapshot of the live hand.
    pub fn hand(&self) -> HandState {
        self.lock().hand.clone()
    }
    pub fn pov_of(&self, who: Who) -> Pov {
        self.lock().hand.pov_of(who)
    }
    /// Hands dealt so far, the live one included.
    pub fn hands(&self) -> usize {
        self.lock().hands
    }
    /// True between a resolved hand and the next deal.
    pub fn is_pending(&self) -> bool {
        self.lock().pending
    }
}

impl std::fmt::Debug for HeadsUpGame {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("HeadsUpGame")
            .field("config", &self.config)
            .field("table", &*self.lock())
            .finish()
    }
}
