//! Shared test support: a recording ReaderOps and a failing port

use std::fmt::Write as _;

use riffle::{BindingMap, BindingPort, PortError, ReaderOps};

/// Records every operation invocation as a readable `name(param)` string.
#[derive(Default)]
pub struct RecordingOps {
    pub calls: Vec<String>,
}

impl RecordingOps {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, name: &str, param: Option<f32>) {
        let mut call = String::from(name);
        if let Some(param) = param {
            let _ = write!(call, "({})", param);
        }
        self.calls.push(call);
    }
}

impl ReaderOps for RecordingOps {
    fn move_backward(&mut self, amount: f32) {
        self.record("moveBackward", Some(amount));
    }
    fn move_forward(&mut self, amount: f32) {
        self.record("moveForward", Some(amount));
    }
    fn smooth_scroll_backward(&mut self, amount: f32) {
        self.record("smoothScrollBackward", Some(amount));
    }
    fn smooth_scroll_forward(&mut self, amount: f32) {
        self.record("smoothScrollForward", Some(amount));
    }
    fn start_continuous_scroll(&mut self, velocity: f32) {
        self.record("startContinuousScroll", Some(velocity));
    }
    fn stop_continuous_scroll(&mut self) {
        self.record("stopContinuousScroll", None);
    }
    fn toggle_menu(&mut self) {
        self.record("toggleMenu", None);
    }
}

/// A port whose every operation fails, for exercising error paths.
pub struct FailingPort;

impl BindingPort for FailingPort {
    fn load(&self) -> Result<BindingMap, PortError> {
        Err("backing store unavailable".into())
    }
    fn save(&self, _map: &BindingMap) -> Result<(), PortError> {
        Err("backing store unavailable".into())
    }
}
