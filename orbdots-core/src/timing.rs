/// Frame timing and fps derivation
///
/// Tracks the timestamp of the previous tick and derives an
/// instantaneous frames-per-second figure for the overlay.
#[derive(Debug, Default)]
pub struct FrameClock {
    last_tick_ms: Option<f64>,
    fps: u32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tick and return the instantaneous fps.
    ///
    /// `fps = floor(1000 / delta_ms)`. The very first tick has no delta
    /// and reports 0; the value is overwritten on the next tick.
    pub fn tick(&mut self, now_ms: f64) -> u32 {
        if let Some(last) = self.last_tick_ms {
            let delta = now_ms - last;
            self.fps = (1000.0 / delta).floor() as u32;
        }
        self.last_tick_ms = Some(now_ms);
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
