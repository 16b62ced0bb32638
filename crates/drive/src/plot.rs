//! Plotting observer for viewing a run.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use roadload_core::Observer;

use crate::simulate::{Action, Event};

const TRACES: [&str; 3] = ["Position (m)", "Velocity (m/s)", "Throttle"];

/// An observer that collects time traces during a run and displays them via egui.
///
/// Records position, velocity, and throttle against elapsed time for every
/// event. Pass `&mut PlotObserver` to [`simulate::run`](crate::simulate::run)
/// so [`show`](PlotObserver::show) can be called once the run returns.
///
/// ```ignore
/// let mut plot = PlotObserver::new();
/// simulate::run(&mut vehicle, &scenario, 2_000, &mut plot)?;
/// plot.show("Ramp")?;
/// ```
#[derive(Debug, Default)]
pub struct PlotObserver {
    data: [Vec<[f64; 2]>; 3],
}

impl PlotObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the traces for one event.
    pub fn record(&mut self, event: &Event) {
        let sample = &event.sample;
        let values = [
            sample.state.position,
            sample.state.velocity,
            sample.controls.throttle,
        ];
        for (trace, y) in self.data.iter_mut().zip(values) {
            trace.push([sample.time, y]);
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, title: &str) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = TRACES
            .iter()
            .map(|name| (*name).to_owned())
            .zip(self.data)
            .collect();

        eframe::run_native(
            title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces }))),
        )
    }
}

impl Observer<Event, Action> for PlotObserver {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        self.record(event);
        None
    }
}

impl Observer<Event, Action> for &mut PlotObserver {
    fn observe(&mut self, event: &Event) -> Option<Action> {
        (*self).observe(event)
    }
}

struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("roadload_run")
                .legend(Legend::default())
                .x_axis_label("Time (s)")
                .show(ui, |plot_ui| {
                    for (name, points) in &self.traces {
                        let points: PlotPoints = points.iter().copied().collect();
                        plot_ui.line(Line::new(points).name(name));
                    }
                });
        });
    }
}
