//! Device abstractions for a 5×5 NeoPixel-style digit counter on a dual-core Pico.
//!
//! Core 0 polls two buttons and redraws the digit on the LED panel; core 1 blinks a
//! status LED. The two cores share nothing.
//!
//! # Glossary
//!
//! Resources available on the Pico 1 and Pico 2:
//!
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):** Pico 1 has 2. Pico 2 has 3.
//!   Each PIO block has 4 state machines. The LED panel claims one of them.
//! - **Serpentine wiring:** consecutive rows of the LED chain run in alternating directions.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature");

#[cfg(all(feature = "host", any(feature = "pico1", feature = "pico2")))]
compile_error!("'host' cannot be combined with a board feature; build firmware with --no-default-features");

pub mod button;
pub mod counter;
pub mod counter_loop;
mod error;
pub mod led2d;
pub mod led_strip;
// PIO interrupt bindings used by the PIO byte queue
#[cfg(not(feature = "host"))]
#[doc(hidden)]
pub mod pio_irqs;
pub mod status_led;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
