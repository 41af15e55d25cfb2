//! The core 0 loop: show the digit, poll both buttons, report, wait.
//!
//! Debouncing is a fixed 50 ms wait after a button reads pressed, with no re-check.
//! A press shorter than that still counts, and a held button repeats every pass
//! (about 150 ms). The loop never yields to other work except in those waits.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;

use crate::Result;
use crate::button::Button;
use crate::counter::Digit;
use crate::led2d::DigitPanel;
use crate::led_strip::PulseQueue;

/// Wait after seeing a press before acting on it.
pub const DEBOUNCE_DELAY_MS: u32 = 50;

/// Wait at the end of every pass.
pub const LOOP_DELAY_MS: u32 = 100;

/// Owns everything on core 0: the panel, both buttons, and the counter.
pub struct CounterLoop<Q: PulseQueue, A, B, D> {
    panel: DigitPanel<Q>,
    increment_button: Button<A>,
    decrement_button: Button<B>,
    delay: D,
    digit: Digit,
}

impl<Q, A, B, D> CounterLoop<Q, A, B, D>
where
    Q: PulseQueue,
    A: InputPin,
    B: InputPin,
    D: DelayNs,
{
    /// A loop starting at 0.
    #[must_use]
    pub const fn new(
        panel: DigitPanel<Q>,
        increment_button: Button<A>,
        decrement_button: Button<B>,
        delay: D,
    ) -> Self {
        Self::starting_at(panel, increment_button, decrement_button, delay, Digit::MIN)
    }

    /// A loop starting at `digit`.
    #[must_use]
    pub const fn starting_at(
        panel: DigitPanel<Q>,
        increment_button: Button<A>,
        decrement_button: Button<B>,
        delay: D,
        digit: Digit,
    ) -> Self {
        Self {
            panel,
            increment_button,
            decrement_button,
            delay,
            digit,
        }
    }

    /// The counter's current value.
    #[must_use]
    pub const fn digit(&self) -> Digit {
        self.digit
    }

    /// The panel being driven.
    #[must_use]
    pub const fn panel(&self) -> &DigitPanel<Q> {
        &self.panel
    }

    /// One pass without the trailing wait: render, then button A, then button B.
    ///
    /// Returns the value after both buttons were handled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinState`](crate::Error::PinState) if a button cannot be read.
    pub async fn poll_once(&mut self) -> Result<Digit> {
        self.panel.render(self.digit).await;

        if self.increment_button.is_pressed()? {
            self.delay.delay_ms(DEBOUNCE_DELAY_MS).await;
            self.digit = self.digit.increment();
        }

        if self.decrement_button.is_pressed()? {
            self.delay.delay_ms(DEBOUNCE_DELAY_MS).await;
            self.digit = self.digit.decrement();
        }

        Ok(self.digit)
    }

    /// Poll forever, logging the counter once per pass.
    ///
    /// # Errors
    ///
    /// Returns only if a button cannot be read.
    pub async fn run(mut self) -> Result<Infallible> {
        loop {
            let digit = self.poll_once().await?;
            report(digit);
            self.delay.delay_ms(LOOP_DELAY_MS).await;
        }
    }
}

#[cfg(not(feature = "host"))]
fn report(digit: Digit) {
    defmt::info!("Counter: {}", digit);
}

#[cfg(feature = "host")]
const fn report(_digit: Digit) {}
