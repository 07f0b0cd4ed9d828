use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    pub initial_c: f64,
    pub initial_f: f64,
    pub initial_freq: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub k_steepness: f64,
    pub t_mid: f64,
    pub f_k_steepness: f64,
    pub f_t_mid: f64,
    pub delta: f64,
    pub freq_max: f64,
    pub c_max: f64,
    pub f_min: f64,
    pub f_max: f64,
    pub time_steps: u32,
    pub use_log_freq: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            initial_c: 0.1,
            initial_f: -0.9,
            initial_freq: 0.5,
            alpha: 1.0,
            beta: 1.0,
            gamma: 0.5,
            k_steepness: 0.2,
            t_mid: 25.0,
            f_k_steepness: 0.2,
            f_t_mid: 18.0,
            delta: 0.1,
            freq_max: 3.0,
            c_max: 1.0,
            f_min: -1.0,
            f_max: 0.0,
            time_steps: 50,
            use_log_freq: true,
        }
    }
}

/// Errors raised when a parameter set violates the model's preconditions.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("acceptance steepness must be non-zero")]
    ZeroAcceptanceSteepness,
    #[error("feeling steepness must be non-zero")]
    ZeroFeelingSteepness,
    #[error("freq_max must be non-zero")]
    ZeroFreqMax,
    #[error("acceptance ceiling {c_max} must be positive")]
    NonPositiveCeiling { c_max: f64 },
    #[error("initial acceptance {initial_c} must lie strictly between 0 and {c_max}")]
    InitialAcceptanceOutOfRange { initial_c: f64, c_max: f64 },
    #[error("feeling floor {f_min} exceeds ceiling {f_max}")]
    InvertedFeelingBounds { f_min: f64, f_max: f64 },
    #[error("initial frequency {initial_freq} must be positive")]
    NonPositiveInitialFrequency { initial_freq: f64 },
}

impl SimulationParams {
    /// Rejects parameter sets the recurrence cannot run on. A zero steepness
    /// degenerates the logistic, an initial acceptance outside (0, c_max)
    /// breaks the offset calibration, and a non-positive starting frequency
    /// would let the log-mode growth term reach a negative square-root
    /// argument.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.k_steepness == 0.0 {
            return Err(ConfigError::ZeroAcceptanceSteepness);
        }
        if self.f_k_steepness == 0.0 {
            return Err(ConfigError::ZeroFeelingSteepness);
        }
        if self.freq_max == 0.0 {
            return Err(ConfigError::ZeroFreqMax);
        }
        if self.c_max <= 0.0 {
            return Err(ConfigError::NonPositiveCeiling { c_max: self.c_max });
        }
        if self.initial_c <= 0.0 || self.initial_c >= self.c_max {
            return Err(ConfigError::InitialAcceptanceOutOfRange {
                initial_c: self.initial_c,
                c_max: self.c_max,
            });
        }
        if self.f_min > self.f_max {
            return Err(ConfigError::InvertedFeelingBounds {
                f_min: self.f_min,
                f_max: self.f_max,
            });
        }
        if self.initial_freq <= 0.0 {
            return Err(ConfigError::NonPositiveInitialFrequency {
                initial_freq: self.initial_freq,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationState {
    pub time: u32,
    pub c: f64,
    pub f: f64,
    pub freq: f64,
    pub tpm: f64,
    pub phi: f64,
}
