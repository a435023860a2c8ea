//! Mock status simulation.
//!
//! Used when every relay fails for a service, so the dashboard always has a
//! plausible value. Draw layout per call:
//! ```text
//! roll < up                  → operational (degraded if latency > 800 ms)
//! up <= roll < up + 0.05     → degraded, base * 2.5 + [0, 200) ms
//! otherwise                  → down, no latency
//! ```

pub mod random;
pub mod simulator;

pub use random::{FixedRandom, RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use simulator::{MockSimulator, Simulation};
