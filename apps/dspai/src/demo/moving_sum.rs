//! Moving-window sum over a deterministic sample ramp.
//!
//! The window buffer is the component's only resource: allocated in
//! `do_initialize`, zeroed in place by `do_reset`, freed by `do_terminate`.
//! `do_execute` touches only preallocated memory.

use dspai_comp::{Behavior, CompError};

/// Period of the input ramp.
const RAMP_PERIOD: u64 = 16;

/// Sample `n` of the input: a sawtooth in `-8..8`.
fn ramp(n: u64) -> i64 {
    (n % RAMP_PERIOD) as i64 - (RAMP_PERIOD / 2) as i64
}

/// Integer moving sum of the last `window` samples.
#[derive(Debug, Clone)]
pub struct MovingSum {
    window: usize,
    samples: u64,
    fail_init: bool,
    buffer: Vec<i64>,
    pos: usize,
    sum: i64,
    produced: u64,
}

impl MovingSum {
    /// Create a moving sum over `window` samples that completes after
    /// `samples` outputs.
    #[must_use]
    pub fn new(window: usize, samples: u64) -> Self {
        Self {
            window,
            samples,
            fail_init: false,
            buffer: Vec::new(),
            pos: 0,
            sum: 0,
            produced: 0,
        }
    }

    /// Make `do_initialize` fail.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_init = true;
        self
    }

    /// The most recent output.
    #[must_use]
    pub fn output(&self) -> i64 {
        self.sum
    }

    /// Outputs produced since initialization or the last reset.
    #[must_use]
    pub fn produced(&self) -> u64 {
        self.produced
    }

    /// Whether the window buffer is currently allocated.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.buffer.capacity() > 0
    }
}

impl Behavior for MovingSum {
    fn do_initialize(&mut self) -> Result<(), CompError> {
        if self.window == 0 {
            return Err(CompError::InitFailed(
                "moving-sum window must be at least 1".to_string(),
            ));
        }
        if self.fail_init {
            return Err(CompError::ResourceUnavailable(
                "moving-sum configured to fail".to_string(),
            ));
        }

        self.buffer = vec![0; self.window];
        self.pos = 0;
        self.sum = 0;
        self.produced = 0;
        Ok(())
    }

    fn do_reset(&mut self) {
        self.buffer.fill(0);
        self.pos = 0;
        self.sum = 0;
        self.produced = 0;
    }

    fn do_execute(&mut self) -> bool {
        let sample = ramp(self.produced);
        if let Some(slot) = self.buffer.get_mut(self.pos) {
            self.sum = self.sum - *slot + sample;
            *slot = sample;
        }
        self.pos = (self.pos + 1) % self.window.max(1);
        self.produced += 1;
        self.produced >= self.samples
    }

    fn do_terminate(&mut self) {
        self.buffer = Vec::new();
        tracing::debug!(produced = self.produced, "moving-sum buffer released");
    }
}
