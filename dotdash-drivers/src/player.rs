//! Blink plan playback
//!
//! Walks a [`BlinkPlan`] step by step: set the level, then hold it for the
//! step's duration using an async delay.

use dotdash_core::{BlinkPlan, SignalOutput};
use embedded_hal_async::delay::DelayNs;

/// Plays blink plans on an output
pub struct Blinker<O, D> {
    output: O,
    delay: D,
}

impl<O: SignalOutput, D: DelayNs> Blinker<O, D> {
    pub fn new(output: O, delay: D) -> Self {
        Self { output, delay }
    }

    /// Play every step of the plan
    ///
    /// The output is forced off afterwards. Returns the time spent waiting
    /// in milliseconds.
    pub async fn play(&mut self, plan: &BlinkPlan) -> Result<u64, O::Error> {
        let mut elapsed_ms = 0u64;

        for step in plan.steps() {
            #[cfg(feature = "defmt")]
            defmt::trace!("{} for {} ms", step.level, step.duration_ms);

            self.output.apply(step.level)?;
            if step.duration_ms > 0 {
                self.delay.delay_ms(step.duration_ms).await;
                elapsed_ms += step.duration_ms as u64;
            }
        }

        self.output.set_on(false)?;
        Ok(elapsed_ms)
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Release the output and delay
    pub fn into_inner(self) -> (O, D) {
        (self.output, self.delay)
    }
}
