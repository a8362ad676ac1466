use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{disease, pest, Classifier, Diagnosis, ScanKind, ScanRequest, Severity};

/// Randomized stand-in for a real vision model: picks uniformly from the
/// crop's profile table with a confidence of 75-94%.
pub struct RandomStub {
    rng: StdRng,
    latency: Duration,
}

impl RandomStub {
    pub fn new() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Deterministic stub for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            latency: Duration::from_millis(2000),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for RandomStub {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for RandomStub {
    fn latency(&self) -> Duration {
        self.latency
    }

    fn classify(&mut self, request: &ScanRequest) -> Diagnosis {
        let label = match request.kind {
            ScanKind::Disease => {
                let options = disease::profiles(request.crop);
                options[self.rng.random_range(0..options.len())].name
            }
            ScanKind::Pest => {
                let options = pest::profiles(request.crop);
                options[self.rng.random_range(0..options.len())].name
            }
        };
        let confidence_pct = 75 + self.rng.random_range(0..20u8);
        Diagnosis {
            label,
            confidence_pct,
            severity: Severity::from_confidence(confidence_pct),
        }
    }
}
