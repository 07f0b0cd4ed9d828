use crate::types::SimulationParams;

/// Named parameter bundle for an example sentence undergoing language change.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub label: &'static str,
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
}

impl Preset {
    // Feeling bounds, step count and the frequency display mode stay
    // whatever the user last chose.
    pub fn apply(&self, params: &mut SimulationParams) {
        params.initial_c = self.initial_c;
        params.initial_f = self.initial_f;
        params.initial_freq = self.initial_freq;
        params.alpha = self.alpha;
        params.beta = self.beta;
        params.gamma = self.gamma;
        params.k_steepness = self.k_steepness;
        params.t_mid = self.t_mid;
        params.f_k_steepness = self.f_k_steepness;
        params.f_t_mid = self.f_t_mid;
        params.delta = self.delta;
        params.freq_max = self.freq_max;
        params.c_max = self.c_max;
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        label: "I've finished it yesterday",
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
    },
    Preset {
        label: "It very good",
        initial_c: 0.1,
        initial_f: -0.95,
        initial_freq: 0.8,
        alpha: 1.2,
        beta: 0.8,
        gamma: 0.6,
        k_steepness: 0.2,
        t_mid: 25.0,
        f_k_steepness: 0.22,
        f_t_mid: 16.0,
        delta: 0.15,
        freq_max: 3.0,
        c_max: 1.0,
    },
    Preset {
        label: "We sheared three sheeps",
        initial_c: 0.05,
        initial_f: -0.92,
        initial_freq: 0.2,
        alpha: 0.8,
        beta: 1.2,
        gamma: 0.4,
        k_steepness: 0.18,
        t_mid: 30.0,
        f_k_steepness: 0.19,
        f_t_mid: 22.0,
        delta: 0.08,
        freq_max: 3.0,
        c_max: 1.0,
    },
    Preset {
        label: "I saw Joan, a friend of whose was visiting",
        initial_c: 0.3,
        initial_f: -0.85,
        initial_freq: 0.4,
        alpha: 0.9,
        beta: 0.9,
        gamma: 0.5,
        k_steepness: 0.2,
        t_mid: 25.0,
        f_k_steepness: 0.21,
        f_t_mid: 19.0,
        delta: 0.05,
        freq_max: 3.0,
        c_max: 1.0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.label, b.label);
            }
        }
    }

    #[test]
    fn apply_leaves_display_parameters_untouched() {
        let defaults = SimulationParams::default();
        for preset in PRESETS {
            let mut params = defaults;
            params.time_steps = 80;
            params.use_log_freq = false;
            preset.apply(&mut params);

            assert_eq!(params.initial_c, preset.initial_c);
            assert_eq!(params.delta, preset.delta);
            assert_eq!(params.f_min, defaults.f_min);
            assert_eq!(params.f_max, defaults.f_max);
            assert_eq!(params.time_steps, 80);
            assert!(!params.use_log_freq);
        }
    }

    #[test]
    fn every_preset_is_a_valid_configuration() {
        for preset in PRESETS {
            let mut params = SimulationParams::default();
            preset.apply(&mut params);
            params.validate().unwrap();
        }
    }
}
