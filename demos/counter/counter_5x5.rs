#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};
use digit_panel::{
    Result,
    button::{Button, PressedTo},
    counter_loop::CounterLoop,
    led_strip::{LedMatrix, pio_queue::new_claimed_queue},
    led2d::DigitPanel,
    status_led,
};
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let err = inner_main().await.unwrap_err();
    panic!("{err}");
}

async fn inner_main() -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // Core 1 only ever touches the status LED.
    status_led::start_on_core1(p.CORE1, p.PIN_13);

    // Tries PIO0 first, then PIO1.
    let (_claim, queue) = new_claimed_queue(p.PIO0, p.PIO1, p.PIN_7)?;
    let mut panel = DigitPanel::new(LedMatrix::new(queue));
    panel.clear().await;

    // Both buttons pull up and read low when pressed.
    let increment_button = Button::new(p.PIN_5, PressedTo::Ground);
    let decrement_button = Button::new(p.PIN_6, PressedTo::Ground);

    CounterLoop::new(panel, increment_button, decrement_button, Delay)
        .run()
        .await
}
