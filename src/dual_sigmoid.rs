use crate::types::{ConfigError, SimulationParams, SimulationState};

// exp() leaves the f64 range near an argument of ±709; past that the logistic
// is pinned to its bound instead of propagating inf or NaN.
const EXP_ARG_LIMIT: f64 = 700.0;

fn saturating_logistic(ceiling: f64, exponent: f64) -> f64 {
    if exponent >= EXP_ARG_LIMIT {
        0.0
    } else if exponent <= -EXP_ARG_LIMIT {
        ceiling
    } else {
        ceiling / (1.0 + exponent.exp())
    }
}

fn feeling(t: f64, params: &SimulationParams) -> f64 {
    let range = params.f_max - params.f_min;
    params.f_min + saturating_logistic(range, -params.f_k_steepness * (t - params.f_t_mid))
}

fn phi(c: f64, freq: f64, f: f64, params: &SimulationParams) -> f64 {
    // Hard floor at zero: the drift never shifts the acceptance midpoint in
    // the retarding direction.
    let mix =
        params.alpha * (freq / params.freq_max) + params.beta * (f + 1.0) + params.gamma * c;
    mix.max(0.0)
}

// Additive time-shift that forces the acceptance curve through initial_c at
// t = 0, derived from the phi value of the initial (c, freq, f) triple.
// Computed once per run; it moves the effective midpoint, not the shape.
fn phi_offset(params: &SimulationParams) -> f64 {
    let phi0 = phi(params.initial_c, params.initial_freq, params.initial_f, params);
    params.t_mid - phi0 + (params.c_max / params.initial_c - 1.0).ln() / -params.k_steepness
}

fn advance_c(
    t: f64,
    c: f64,
    freq: f64,
    f: f64,
    params: &SimulationParams,
    offset: f64,
) -> f64 {
    let drift = phi(c, freq, f, params);
    saturating_logistic(
        params.c_max,
        -params.k_steepness * (t - params.t_mid + drift + offset),
    )
}

fn advance_freq(freq: f64, c: f64, f: f64, params: &SimulationParams) -> f64 {
    let influence = (c + (f + 1.0)) / 2.0;
    if params.use_log_freq {
        freq + params.delta * influence * (freq + 0.1).sqrt()
    } else {
        freq + params.delta * influence * freq * 0.8
    }
}

fn display_freq(freq: f64, use_log_freq: bool) -> f64 {
    if use_log_freq {
        freq.exp() - 1.0
    } else {
        freq
    }
}

/// Runs the full recurrence for one parameter set, yielding `time_steps + 1`
/// snapshots ordered by time. Identical parameters always produce an
/// identical sequence.
pub fn run(params: &SimulationParams) -> Result<Vec<SimulationState>, ConfigError> {
    params.validate()?;

    let offset = phi_offset(params);
    let mut states = Vec::with_capacity(params.time_steps as usize + 1);
    let mut c = params.initial_c;
    let mut freq = params.initial_freq;

    for time in 0..=params.time_steps {
        let t = f64::from(time);
        let f = feeling(t, params);
        states.push(SimulationState {
            time,
            c,
            f,
            freq,
            tpm: display_freq(freq, params.use_log_freq),
            phi: phi(c, freq, f, params),
        });

        if time < params.time_steps {
            // The frequency update reads the acceptance value from before
            // this step's C update.
            let prev_c = c;
            c = advance_c(t, prev_c, freq, f, params, offset);
            freq = advance_freq(freq, prev_c, f, params);
        }
    }

    Ok(states)
}
