//! Mock status generation from per-service profiles.

use std::sync::Arc;

use crate::config::SimulationConfig;
use crate::registry::MockProfile;
use crate::simulate::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::status::{CheckResult, ServiceStatus};

pub const OPERATIONAL_MESSAGE: &str = "All Systems Operational";
pub const ELEVATED_LATENCY_MESSAGE: &str = "Elevated response times";
pub const PARTIAL_DISRUPTION_MESSAGE: &str = "Partial service disruption";
pub const UNAVAILABLE_MESSAGE: &str = "Service unavailable or timed out";

const LATENCY_FLOOR_MS: f64 = 40.0;
const ELEVATED_THRESHOLD_MS: u64 = 800;
/// Width of the degraded band just above `up_probability`.
const DEGRADED_BAND: f64 = 0.05;
const DEGRADED_MULTIPLIER: f64 = 2.5;
const DEGRADED_SPREAD_MS: f64 = 200.0;

/// One simulated draw, before it becomes a `CheckResult`.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    pub status: ServiceStatus,
    pub latency_ms: Option<u64>,
    pub message: &'static str,
}

#[derive(Clone)]
pub struct MockSimulator {
    random: Arc<dyn RandomSource>,
}

impl MockSimulator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        let random: Arc<dyn RandomSource> = match config.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };
        Self::new(random)
    }

    pub fn simulate(&self, profile: &MockProfile) -> Simulation {
        let base = f64::from(profile.base_latency_ms);
        let roll = self.random.next_unit();

        if roll < profile.up_probability {
            let swing = (self.random.next_unit() - 0.5) * 2.0 * f64::from(profile.variance_ms);
            let latency = (base + swing).round().max(LATENCY_FLOOR_MS) as u64;
            if latency > ELEVATED_THRESHOLD_MS {
                Simulation {
                    status: ServiceStatus::Degraded,
                    latency_ms: Some(latency),
                    message: ELEVATED_LATENCY_MESSAGE,
                }
            } else {
                Simulation {
                    status: ServiceStatus::Operational,
                    latency_ms: Some(latency),
                    message: OPERATIONAL_MESSAGE,
                }
            }
        } else if roll < profile.up_probability + DEGRADED_BAND {
            let latency =
                (base * DEGRADED_MULTIPLIER + self.random.next_unit() * DEGRADED_SPREAD_MS).round();
            Simulation {
                status: ServiceStatus::Degraded,
                latency_ms: Some(latency as u64),
                message: PARTIAL_DISRUPTION_MESSAGE,
            }
        } else {
            Simulation {
                status: ServiceStatus::Down,
                latency_ms: None,
                message: UNAVAILABLE_MESSAGE,
            }
        }
    }

    pub fn simulate_result(&self, profile: &MockProfile) -> CheckResult {
        let sim = self.simulate(profile);
        CheckResult::simulated(sim.status, sim.latency_ms, sim.message)
    }
}

impl std::fmt::Debug for MockSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockSimulator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulate::random::{FixedRandom, ScriptedRandom};

    fn profile(base: u32, variance: u32, up: f64) -> MockProfile {
        MockProfile {
            base_latency_ms: base,
            variance_ms: variance,
            up_probability: up,
        }
    }

    fn scripted(draws: &[f64]) -> MockSimulator {
        MockSimulator::new(Arc::new(ScriptedRandom::new(draws.iter().copied())))
    }

    #[test]
    fn test_fixed_zero_draw_hits_base_latency() {
        let sim = MockSimulator::new(Arc::new(FixedRandom(0.0)));
        let result = sim.simulate(&profile(100, 0, 1.0));
        assert_eq!(result.status, ServiceStatus::Operational);
        assert_eq!(result.latency_ms, Some(100));
        assert_eq!(result.message, OPERATIONAL_MESSAGE);
    }

    #[test]
    fn test_operational_swing_spans_full_variance() {
        // swing = (0.0 - 0.5) * 2 * 100 = -100
        let low = scripted(&[0.1, 0.0]).simulate(&profile(300, 100, 0.9));
        assert_eq!(low.latency_ms, Some(200));

        // swing = (0.75 - 0.5) * 2 * 100 = +50
        let high = scripted(&[0.1, 0.75]).simulate(&profile(300, 100, 0.9));
        assert_eq!(high.latency_ms, Some(350));
    }

    #[test]
    fn test_latency_floor() {
        let result = scripted(&[0.0, 0.0]).simulate(&profile(50, 100, 0.9));
        assert_eq!(result.latency_ms, Some(40));
        assert_eq!(result.status, ServiceStatus::Operational);
    }

    #[test]
    fn test_slow_operational_becomes_elevated() {
        let result = scripted(&[0.0, 0.5]).simulate(&profile(900, 0, 0.9));
        assert_eq!(result.status, ServiceStatus::Degraded);
        assert_eq!(result.latency_ms, Some(900));
        assert_eq!(result.message, ELEVATED_LATENCY_MESSAGE);
    }

    #[test]
    fn test_degraded_band() {
        // roll 0.92 with up 0.9 lands in [0.9, 0.95)
        let result = scripted(&[0.92, 0.5]).simulate(&profile(100, 60, 0.9));
        assert_eq!(result.status, ServiceStatus::Degraded);
        assert_eq!(result.latency_ms, Some(350));
        assert_eq!(result.message, PARTIAL_DISRUPTION_MESSAGE);
    }

    #[test]
    fn test_down_band_has_no_latency() {
        let result = scripted(&[0.99]).simulate(&profile(100, 60, 0.9));
        assert_eq!(result.status, ServiceStatus::Down);
        assert_eq!(result.latency_ms, None);
        assert_eq!(result.message, UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_simulated_result_is_flagged() {
        let result = scripted(&[0.99]).simulate_result(&MockProfile::default());
        assert!(result.is_simulated());
        assert_eq!(result.status(), ServiceStatus::Down);
        assert_eq!(result.latency_ms(), None);
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = SimulationConfig { seed: Some(42) };
        let a = MockSimulator::from_config(&config);
        let b = MockSimulator::from_config(&config);
        let p = MockProfile::default();
        for _ in 0..10 {
            assert_eq!(a.simulate(&p), b.simulate(&p));
        }
    }
}
