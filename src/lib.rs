//! Crazy Circus puzzle engine.
//!
//! A set of distinct animals is split across two work podiums and must be
//! rearranged, one order at a time, until the work podiums match a randomly
//! dealt pair of goal podiums.
pub mod circus;
pub mod error;
pub mod podium;
#[cfg(feature = "cli")]
pub mod ring;
pub mod signal;
pub mod tokens;

pub use circus::*;
pub use error::*;
pub use podium::*;
pub use signal::*;
pub use tokens::*;

// ============================================================================
// PUZZLE PARAMETERS
// ============================================================================
/// Smallest token set that still makes a puzzle.
pub const MIN_TOKENS: usize = 2;
/// Token count used when none is requested.
pub const DEFAULT_TOKENS: usize = 3;
/// Largest token set (size of the animal roster).
pub const MAX_TOKENS: usize = 10;
/// Probability that a shuffled token lands on the left podium of a deal.
pub const SPLIT_RATIO: f64 = 0.5;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal
/// so the board stays readable while playing.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
