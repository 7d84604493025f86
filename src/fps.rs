//! Rolling one-second frame counter.

/// Counts frames and publishes the count once per elapsed second.
///
/// Timestamps are `f64` ms so long page uptimes keep sub-ms resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct FpsCounter {
    frames: u32,
    window_start: f64,
    fps: u32,
}

impl FpsCounter {
    /// Start a window at `now` (ms). Reads 60 until the first window closes.
    pub fn new(now: f64) -> Self {
        FpsCounter { frames: 0, window_start: now, fps: 60 }
    }

    /// Count a frame at `now` (ms).
    pub fn tick(&mut self, now: f64) {
        self.frames += 1;
        if now - self.window_start >= 1000.0 {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = now;
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Restart the window at `now` without touching the published value.
    pub fn restart(&mut self, now: f64) {
        self.frames = 0;
        self.window_start = now;
    }
}
