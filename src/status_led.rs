//! A device abstraction for a status LED that blinks forever on its own core.
//!
//! See [`StatusBlinker`] for the blink cycle and `start_on_core1` for the hardware launch.
//!
//! The blinker owns nothing but its pin. It never sees the LED panel, so a stalled panel
//! write on core 0 cannot stop the blinking, and the other way round.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::{Error, Result};

/// Time spent in each phase: 200 ms on, 200 ms off (2.5 Hz).
pub const BLINK_HALF_PERIOD_MS: u32 = 200;

/// Which half of the blink cycle the LED is in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(not(feature = "host"), derive(defmt::Format))]
pub enum BlinkPhase {
    /// LED on (pin driven high).
    #[default]
    High,
    /// LED off.
    Low,
}

impl BlinkPhase {
    /// The other phase.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Low => Self::High,
        }
    }
}

/// Toggles an active-high output pin at a fixed half period, starting high.
pub struct StatusBlinker<P, D> {
    pin: P,
    delay: D,
    phase: BlinkPhase,
    half_period_ms: u32,
}

impl<P: OutputPin, D: DelayNs> StatusBlinker<P, D> {
    /// A blinker with the standard 200 ms half period.
    #[must_use]
    pub const fn new(pin: P, delay: D) -> Self {
        Self::with_half_period(pin, delay, BLINK_HALF_PERIOD_MS)
    }

    /// A blinker with a custom half period.
    #[must_use]
    pub const fn with_half_period(pin: P, delay: D, half_period_ms: u32) -> Self {
        Self {
            pin,
            delay,
            phase: BlinkPhase::High,
            half_period_ms,
        }
    }

    /// The phase the next [`step`](Self::step) will drive.
    #[must_use]
    pub const fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// Drive the pin for the current phase, hold it for one half period, then advance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinState`] if the pin cannot be set.
    pub async fn step(&mut self) -> Result<()> {
        match self.phase {
            BlinkPhase::High => self.pin.set_high(),
            BlinkPhase::Low => self.pin.set_low(),
        }
        .map_err(|_| Error::PinState)?;
        self.delay.delay_ms(self.half_period_ms).await;
        self.phase = self.phase.next();
        Ok(())
    }

    /// Blink until power-off.
    ///
    /// # Errors
    ///
    /// Returns only if the pin cannot be set.
    pub async fn run(mut self) -> Result<Infallible> {
        loop {
            self.step().await?;
        }
    }
}

#[cfg(not(feature = "host"))]
pub use core1::start_on_core1;

#[cfg(not(feature = "host"))]
mod core1 {
    use embassy_executor::Executor;
    use embassy_rp::Peri;
    use embassy_rp::gpio::{Level, Output, Pin};
    use embassy_rp::multicore::{Stack, spawn_core1};
    use embassy_rp::peripherals::CORE1;
    use embassy_time::Delay;
    use static_cell::StaticCell;

    use super::StatusBlinker;

    const CORE1_STACK_SIZE: usize = 4096;

    static CORE1_STACK: StaticCell<Stack<CORE1_STACK_SIZE>> = StaticCell::new();
    static CORE1_EXECUTOR: StaticCell<Executor> = StaticCell::new();

    /// Start core 1 with its own executor and a single task blinking `led_pin`.
    ///
    /// Call once. Core 1 gets the pin and nothing else.
    ///
    /// # Panics
    ///
    /// Panics if called twice.
    pub fn start_on_core1(core1: Peri<'static, CORE1>, led_pin: Peri<'static, impl Pin>) {
        let status_led = Output::new(led_pin, Level::High);
        let stack = CORE1_STACK.init(Stack::new());
        spawn_core1(core1, stack, move || {
            let executor = CORE1_EXECUTOR.init(Executor::new());
            executor.run(|spawner| {
                let token = status_led_task(StatusBlinker::new(status_led, Delay));
                defmt::unwrap!(spawner.spawn(token));
            })
        });
        defmt::info!("status led: blinking on core 1");
    }

    #[embassy_executor::task]
    async fn status_led_task(blinker: StatusBlinker<Output<'static>, Delay>) -> ! {
        let err = blinker.run().await.unwrap_err();
        core::panic!("{err}");
    }
}
