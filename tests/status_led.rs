#![allow(missing_docs)]
//! Host-level tests for the status LED blink cycle.

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;

use digit_panel::status_led::{BLINK_HALF_PERIOD_MS, BlinkPhase, StatusBlinker};
use embassy_futures::block_on;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_async::delay::DelayNs;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Event {
    High,
    Low,
    Wait(u32),
}

type Log = Rc<RefCell<Vec<Event>>>;

struct FakeLed(Log);

impl ErrorType for FakeLed {
    type Error = Infallible;
}

impl OutputPin for FakeLed {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(Event::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(Event::High);
        Ok(())
    }
}

struct FakeDelay(Log);

impl DelayNs for FakeDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(Event::Wait(ns / 1_000_000));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(Event::Wait(ms));
    }
}

fn blinker() -> (Log, StatusBlinker<FakeLed, FakeDelay>) {
    let log = Log::default();
    let blinker = StatusBlinker::new(FakeLed(log.clone()), FakeDelay(log.clone()));
    (log, blinker)
}

#[test]
fn starts_high() {
    let (log, blinker) = blinker();
    assert_eq!(blinker.phase(), BlinkPhase::High);
    assert!(log.borrow().is_empty());
}

#[test]
fn alternates_high_and_low_every_200_ms() {
    let (log, mut blinker) = blinker();
    for _ in 0..4 {
        block_on(blinker.step()).expect("pin never fails");
    }
    assert_eq!(
        *log.borrow(),
        [
            Event::High,
            Event::Wait(200),
            Event::Low,
            Event::Wait(200),
            Event::High,
            Event::Wait(200),
            Event::Low,
            Event::Wait(200),
        ]
    );
    // Two full cycles, each two half periods long.
    let waited: u32 = log
        .borrow()
        .iter()
        .map(|event| match event {
            Event::Wait(ms) => *ms,
            Event::High | Event::Low => 0,
        })
        .sum();
    assert_eq!(waited, 4 * BLINK_HALF_PERIOD_MS);
    assert_eq!(blinker.phase(), BlinkPhase::High);
}

#[test]
fn custom_half_period_is_used() {
    let log = Log::default();
    let mut blinker =
        StatusBlinker::with_half_period(FakeLed(log.clone()), FakeDelay(log.clone()), 50);
    block_on(blinker.step()).expect("pin never fails");
    assert_eq!(*log.borrow(), [Event::High, Event::Wait(50)]);
    assert_eq!(blinker.phase(), BlinkPhase::Low);
}
