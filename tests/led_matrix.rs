#![allow(missing_docs)]
//! Host-level tests for the frame buffer and its byte stream.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use digit_panel::Error;
use digit_panel::led_strip::{Frame1d, LedMatrix, PulseQueue, Rgb, colors, grb_bytes};
use embassy_futures::block_on;

const LEN: usize = 25;

#[derive(Default)]
struct Recorder(Vec<u8>);

impl PulseQueue for Recorder {
    async fn submit(&mut self, byte: u8) {
        self.0.push(byte);
    }
}

// Returns Pending once per byte, like a full FIFO.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Default)]
struct SlowRecorder {
    bytes: Vec<u8>,
}

impl PulseQueue for SlowRecorder {
    async fn submit(&mut self, byte: u8) {
        YieldOnce(false).await;
        self.bytes.push(byte);
    }
}

fn distinct_color(index: usize) -> Rgb {
    let index = u8::try_from(index).expect("small index");
    Rgb::new(index, index + 100, index + 200)
}

#[test]
fn write_streams_green_red_blue_in_chain_order() {
    let mut matrix = LedMatrix::<_, LEN>::new(Recorder::default());
    for index in 0..LEN {
        matrix.set_led(index, distinct_color(index));
    }
    block_on(matrix.write());

    let bytes = &matrix.queue().0;
    assert_eq!(bytes.len(), LEN * 3);
    for (index, chunk) in bytes.chunks(3).enumerate() {
        let color = distinct_color(index);
        assert_eq!(chunk, [color.g, color.r, color.b], "LED {index}");
    }
}

#[test]
fn grb_bytes_reorders_channels() {
    assert_eq!(grb_bytes(Rgb::new(1, 2, 3)), [2, 1, 3]);
    assert_eq!(grb_bytes(colors::GREEN), [128, 0, 0]);
}

#[test]
fn new_matrix_starts_black_and_sends_nothing() {
    let matrix = LedMatrix::<_, LEN>::new(Recorder::default());
    assert!(matrix.frame().iter().all(|color| *color == colors::BLACK));
    assert!(matrix.queue().0.is_empty());
}

#[test]
fn set_led_is_not_visible_until_write() {
    let mut matrix = LedMatrix::<_, LEN>::new(Recorder::default());
    matrix.set_led(3, colors::WHITE);
    assert!(matrix.queue().0.is_empty());
    assert_eq!(matrix.led(3), colors::WHITE);
}

#[test]
fn set_led_overwrites_previous_color() {
    let mut matrix = LedMatrix::<_, LEN>::new(Recorder::default());
    matrix.set_led(7, colors::RED);
    matrix.set_led(7, Rgb::new(10, 20, 30));
    block_on(matrix.write());

    let bytes = &matrix.queue().0;
    assert_eq!(bytes[7 * 3..7 * 3 + 3], [20, 10, 30]);
}

#[test]
fn clear_zeroes_buffer_and_flushes_black_frame() {
    let mut matrix = LedMatrix::<_, LEN>::new(Recorder::default());
    for index in 0..LEN {
        matrix.set_led(index, colors::WHITE);
    }
    block_on(matrix.clear());

    assert!(matrix.frame().iter().all(|color| *color == colors::BLACK));
    assert_eq!(matrix.queue().0, vec![0; LEN * 3]);
}

#[test]
fn every_write_sends_the_full_frame() {
    let mut matrix = LedMatrix::<_, LEN>::new(Recorder::default());
    block_on(matrix.write());
    block_on(matrix.write());
    assert_eq!(matrix.queue().0.len(), 2 * LEN * 3);
}

#[test]
#[should_panic(expected = "LED index out of bounds")]
fn set_led_panics_out_of_range() {
    let mut matrix = LedMatrix::<_, LEN>::new(Recorder::default());
    matrix.set_led(LEN, colors::RED);
}

#[test]
#[should_panic(expected = "LED index out of bounds")]
fn led_panics_reading_past_the_end() {
    let matrix = LedMatrix::<_, LEN>::new(Recorder::default());
    let _ = matrix.led(LEN);
}

#[test]
#[should_panic(expected = "LED index out of bounds")]
fn frame_get_panics_reading_past_the_end() {
    let _ = Frame1d::<LEN>::new().get(LEN);
}

#[test]
fn try_get_reports_index_out_of_bounds() {
    let frame = Frame1d::<LEN>::filled(colors::BLUE);
    assert_eq!(frame.try_get(24).ok(), Some(colors::BLUE));
    assert!(matches!(
        frame.try_get(25),
        Err(Error::IndexOutOfBounds { index: 25, len: 25 })
    ));
}

#[test]
fn write_waits_on_a_queue_that_is_not_ready() {
    let mut matrix = LedMatrix::<_, 2>::new(SlowRecorder::default());
    matrix.set_led(0, Rgb::new(1, 2, 3));
    matrix.set_led(1, Rgb::new(4, 5, 6));
    block_on(matrix.write());
    assert_eq!(matrix.queue().bytes, [2, 1, 3, 5, 4, 6]);
}

#[test]
fn borrowed_queue_records_into_the_owner() {
    let mut recorder = Recorder::default();
    {
        let mut matrix = LedMatrix::<_, 1>::new(&mut recorder);
        matrix.set_led(0, colors::RED);
        block_on(matrix.write());
    }
    assert_eq!(recorder.0, [0, 255, 0]);
}
