//! Heads-up No-Limit Hold'em hand engine.
//!
//! ## Modules
//!
//! - [`cards`]: Card primitives and the deck
//! - [`gameplay`]: Betting rounds, legal menus and hand resolution
//! - [`codec`]: Compact reversible text encoding (FEN) and player views (POV)
//! - [`gameroom`]: Hand-to-hand orchestration over an injected scheduler
pub mod cards;
pub mod codec;
pub mod gameplay;
pub mod gameroom;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes and bet amounts.
pub type Chips = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and dealing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Default starting stack for each player.
pub const STACK: Chips = 100;
/// Default blind unit. The small blind posts one unit, the big blind two.
pub const BLIND: Chips = 1;
/// Default pause between a settled hand and the next deal, in milliseconds.
pub const SHOWDOWN_DELAY: u64 = 3_000;

// ============================================================================
// LOGGING
// ============================================================================
/// Initialize terminal and file logging.
///
/// Terminal receives `Info` and above, `logs/{unix time}.log` receives `Debug`.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
