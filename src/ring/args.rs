use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(
        allow_negative_numbers = true,
        help = "Number of animals in the ring (2 to 10, default 3)"
    )]
    pub animals: Option<String>,
    #[arg(long, env = "CIRCUS_SEED", help = "Seed for a reproducible deal")]
    pub seed: Option<u64>,
    #[arg(long, help = "Start with the SO order forbidden")]
    pub no_so: bool,
}

impl Args {
    /// Requested animal count. Anything that is not a number falls back to
    /// the default, anything out of range is clamped.
    pub fn count(&self) -> usize {
        self.animals
            .as_deref()
            .map(str::trim)
            .and_then(|s| s.parse::<i64>().ok())
            .map(|n| n.clamp(crate::MIN_TOKENS as i64, crate::MAX_TOKENS as i64) as usize)
            .unwrap_or(crate::DEFAULT_TOKENS)
    }
}
