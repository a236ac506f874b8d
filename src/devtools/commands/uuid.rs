use crate::error::{DevToolsError, Result};
use clap::ValueEnum;
use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use uuid::{Builder, Uuid};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum UuidVersion {
    /// Random
    #[default]
    #[value(alias = "4")]
    V4,
    /// Unix-millisecond timestamp followed by random bits
    #[value(alias = "7")]
    V7,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entropy {
    /// Small non-cryptographic PRNG, seeded from the OS unless a seed is given
    Fast { seed: Option<u64> },
    /// The operating system's CSPRNG
    Crypto,
}

impl Default for Entropy {
    fn default() -> Self {
        Entropy::Fast { seed: None }
    }
}

pub trait RandomSource {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

pub struct FastRandom(SmallRng);

impl FastRandom {
    pub fn new() -> Self {
        Self(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.0.fill_bytes(dest);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SecureRandom;

impl RandomSource for SecureRandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(DevToolsError::Entropy)
    }
}

pub fn random_source(entropy: Entropy) -> Box<dyn RandomSource> {
    match entropy {
        Entropy::Fast { seed: Some(seed) } => Box::new(FastRandom::seeded(seed)),
        Entropy::Fast { seed: None } => Box::new(FastRandom::new()),
        Entropy::Crypto => Box::new(SecureRandom),
    }
}

/// Milliseconds since the Unix epoch, clamped at zero for clocks set before it.
pub fn unix_millis_now() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Builds a UUID of the requested version. `now_millis` is only used by v7.
pub fn generate(
    version: UuidVersion,
    rng: &mut dyn RandomSource,
    now_millis: u64,
) -> Result<Uuid> {
    let uuid = match version {
        UuidVersion::V4 => {
            let mut bytes = [0u8; 16];
            rng.fill(&mut bytes)?;
            Builder::from_random_bytes(bytes).into_uuid()
        }
        UuidVersion::V7 => {
            let mut bytes = [0u8; 10];
            rng.fill(&mut bytes)?;
            Builder::from_unix_timestamp_millis(now_millis, &bytes).into_uuid()
        }
    };
    Ok(uuid)
}
