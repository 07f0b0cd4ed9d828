use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::dual_sigmoid;
use crate::presets::{Preset, PRESETS};
use crate::types::{ConfigError, SimulationParams, SimulationState};

const ACCEPTANCE_COLOR: Color32 = Color32::from_rgb(37, 99, 235);
const FEELING_COLOR: Color32 = Color32::from_rgb(220, 38, 38);
const FREQUENCY_COLOR: Color32 = Color32::from_rgb(22, 163, 74);
const DRIFT_COLOR: Color32 = Color32::from_rgb(147, 51, 234);

pub struct ModelApp {
    params: SimulationParams,
    applied: Option<SimulationParams>,
    states: Vec<SimulationState>,
    config_error: Option<ConfigError>,
    active_preset: &'static str,
}

impl ModelApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            params: SimulationParams::default(),
            applied: None,
            states: Vec::new(),
            config_error: None,
            active_preset: PRESETS[0].label,
        };
        app.refresh();
        app
    }

    fn refresh(&mut self) {
        if self.applied == Some(self.params) {
            return;
        }

        match dual_sigmoid::run(&self.params) {
            Ok(states) => {
                self.states = states;
                self.config_error = None;
            }
            Err(err) => self.config_error = Some(err),
        }
        self.applied = Some(self.params);
    }

    fn load_preset(&mut self, preset: &Preset) {
        self.active_preset = preset.label;
        preset.apply(&mut self.params);
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Example sentences");
        for preset in PRESETS {
            if ui
                .selectable_label(self.active_preset == preset.label, preset.label)
                .clicked()
            {
                self.load_preset(preset);
            }
        }

        ui.separator();
        ui.heading("Community acceptance C(u)");
        ui.add(egui::Slider::new(&mut self.params.initial_c, 0.0..=1.0).text("initial C"));
        ui.add(egui::Slider::new(&mut self.params.k_steepness, 0.05..=0.5).text("steepness"));
        ui.add(egui::Slider::new(&mut self.params.t_mid, 10.0..=40.0).text("midpoint"));

        ui.separator();
        ui.heading("Grammatical feeling F(u)");
        ui.add(egui::Slider::new(&mut self.params.f_k_steepness, 0.05..=0.5).text("steepness"));
        ui.add(egui::Slider::new(&mut self.params.f_t_mid, 5.0..=40.0).text("midpoint"));
        ui.small("set below the C(u) midpoint so feeling leads acceptance");

        ui.separator();
        ui.heading("Drift and frequency");
        ui.add(egui::Slider::new(&mut self.params.alpha, 0.1..=2.0).text("alpha"));
        ui.add(egui::Slider::new(&mut self.params.beta, 0.1..=2.0).text("beta"));
        ui.add(egui::Slider::new(&mut self.params.gamma, 0.1..=1.0).text("gamma"));
        ui.add(egui::Slider::new(&mut self.params.delta, 0.0..=0.3).text("delta"));
        ui.add(
            egui::Slider::new(&mut self.params.initial_freq, 0.05..=2.0)
                .text("initial frequency"),
        );
        ui.add(egui::Slider::new(&mut self.params.time_steps, 20..=100).text("time steps"));
        ui.checkbox(&mut self.params.use_log_freq, "log frequency growth");

        if let Some(err) = &self.config_error {
            ui.separator();
            ui.colored_label(
                Color32::from_rgb(230, 100, 100),
                format!("Invalid parameters: {err}"),
            );
        }
    }

    fn draw_charts(&self, ui: &mut egui::Ui) {
        if let Some(last) = self.states.last() {
            ui.horizontal(|ui| {
                ui.label(format!("C: {:.3}", last.c));
                ui.separator();
                ui.label(format!("F: {:.3}", last.f));
                ui.separator();
                ui.label(format!("freq: {:.3}", last.freq));
                ui.separator();
                ui.label(format!("TPM: {:.3}", last.tpm));
                ui.separator();
                ui.label(format!("phi: {:.3}", last.phi));
            });
            ui.separator();
        }

        let height = (ui.available_height() / 3.0 - 28.0).max(120.0);

        ui.label("Combined F(u) and C(u)");
        Plot::new("acceptance_feeling")
            .height(height)
            .include_y(-1.0)
            .include_y(1.0)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(series(&self.states, |s| s.c))
                        .color(ACCEPTANCE_COLOR)
                        .width(2.0)
                        .name("C(u)"),
                );
                plot_ui.line(
                    Line::new(series(&self.states, |s| s.f))
                        .color(FEELING_COLOR)
                        .width(2.0)
                        .name("F(u)"),
                );
            });

        ui.label("Frequency");
        let freq_name = if self.params.use_log_freq {
            "log(TPM+1)"
        } else {
            "TPM"
        };
        Plot::new("frequency")
            .height(height)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(series(&self.states, |s| s.freq))
                        .color(FREQUENCY_COLOR)
                        .width(2.0)
                        .name(freq_name),
                );
            });

        ui.label("S-curve drift φ");
        Plot::new("drift")
            .height(height)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(series(&self.states, |s| s.phi))
                        .color(DRIFT_COLOR)
                        .width(2.0)
                        .name("φ"),
                );
            });
    }
}

impl eframe::App for ModelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh();

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(290.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.draw_controls(ui);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_charts(ui);
        });
    }
}

fn series(states: &[SimulationState], value: impl Fn(&SimulationState) -> f64) -> PlotPoints {
    states
        .iter()
        .map(|s| [f64::from(s.time), value(s)])
        .collect()
}
