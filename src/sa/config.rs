//! SA configuration and the geometric cooling schedule.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default starting temperature.
pub const INITIAL_TEMPERATURE: f64 = 1000.0;

/// Default fraction of the temperature removed at every step.
pub const COOLING_RATE: f64 = 0.0003;

/// Default termination threshold. The loop runs while `T > MIN_TEMPERATURE`.
pub const MIN_TEMPERATURE: f64 = 1.0;

/// Upper bound on the number of cooling steps a valid configuration may take.
pub const MAX_STEPS: usize = 100_000_000;

/// Configuration for the Simulated Annealing loop.
///
/// Cooling is geometric: `T_{k+1} = (1 - cooling_rate) * T_k`. The number of
/// steps depends only on the three temperature parameters, never on the
/// problem, see [`SaConfig::step_count`].
///
/// # Examples
///
/// ```
/// use u_binpack::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.01)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial temperature. Higher values accept more uphill moves early on.
    pub initial_temperature: f64,

    /// Threshold temperature. The algorithm stops once T drops to or below it.
    pub min_temperature: f64,

    /// Cooling rate in (0, 1). Lower = slower cooling, more steps.
    pub cooling_rate: f64,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: INITIAL_TEMPERATURE,
            min_temperature: MIN_TEMPERATURE,
            cooling_rate: COOLING_RATE,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generator for one run: seeded from `seed`, or from OS entropy if unset.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        }
    }

    /// Temperature after one cooling step from `temperature`.
    pub fn cool(&self, temperature: f64) -> f64 {
        temperature * (1.0 - self.cooling_rate)
    }

    /// Exact number of loop iterations a run with this configuration performs.
    ///
    /// Replays the floating-point cooling sequence, so the result matches the
    /// runner step for step. Only terminates for a configuration that passes
    /// [`validate`](SaConfig::validate), which bounds the count by [`MAX_STEPS`].
    pub fn step_count(&self) -> usize {
        let mut temperature = self.initial_temperature;
        let mut steps = 0;
        while temperature > self.min_temperature {
            temperature = self.cool(temperature);
            steps += 1;
        }
        steps
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature.is_nan()
            || self.initial_temperature <= 0.0
            || self.initial_temperature.is_infinite()
        {
            return Err("initial_temperature must be positive and finite".into());
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if 1.0 - self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate {} is too small to lower the temperature",
                self.cooling_rate
            ));
        }
        let estimated_steps = (self.initial_temperature / self.min_temperature).ln()
            / -(-self.cooling_rate).ln_1p();
        if estimated_steps.is_nan() || estimated_steps > MAX_STEPS as f64 {
            return Err(format!(
                "cooling schedule needs about {estimated_steps:.0} steps, more than {MAX_STEPS}"
            ));
        }
        Ok(())
    }
}
