//! PIO-backed [`PulseQueue`]: a WS2812 bit encoder fed one byte per TX FIFO word.
//!
//! The state machine autopulls 8 bits at a time and shifts them out MSB first, so each
//! byte is pushed left-aligned in a 32-bit word. The 4-deep TX FIFO is the bounded queue;
//! `wait_push` suspends the caller while it is full.
//!
//! The inter-frame reset (line low for more than 50 µs) happens on its own whenever the
//! FIFO runs dry between frames, so this layer never inserts it.

use embassy_rp::Peri;
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::peripherals::{PIO0, PIO1};
use embassy_rp::pio::program::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, LoadedProgram, Pio, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use fixed::types::U24F8;

use super::PulseQueue;
use super::claim::{PIO0_POOL, PIO1_POOL, PioBlock, StateMachineClaim, claim_state_machine};
use crate::pio_irqs::{Pio0Irqs, Pio1Irqs};
use crate::{Error, Result};

// Cycles spent in each phase of one bit: T1 always high, T2 high only for a 1, T3 low.
const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;

/// WS2812 symbol rate.
pub const WS2812_FREQ_KHZ: u32 = 800;

fn load_ws2812_program<'d, PIO: Instance>(common: &mut Common<'d, PIO>) -> LoadedProgram<'d, PIO> {
    let side_set = SideSet::new(false, 1, false);
    let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();
    assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
    assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    assembler.bind(&mut do_zero);
    assembler.nop_with_delay_and_side_set(T2 - 1, 0);
    assembler.bind(&mut wrap_source);

    let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
    common.load_program(&program)
}

/// One PIO state machine running the WS2812 encoder on a single data pin.
pub struct PioByteQueue<'d, P: Instance, const S: usize> {
    // Keeps the PIO block (and the loaded program) alive while the state machine runs.
    _common: Common<'d, P>,
    sm: StateMachine<'d, P, S>,
}

impl<'d, P: Instance, const S: usize> PioByteQueue<'d, P, S> {
    /// Load the encoder, route `pin` to the state machine, and start it at 800 kHz.
    pub fn new(
        mut common: Common<'d, P>,
        mut sm: StateMachine<'d, P, S>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let program = load_ws2812_program(&mut common);
        let mut cfg = Config::default();

        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program, &[&out_pin]);

        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let ws2812_freq = U24F8::from_num(WS2812_FREQ_KHZ);
        let bit_freq = ws2812_freq * CYCLES_PER_BIT;
        cfg.clock_divider = clock_freq / bit_freq;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 8,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_enable(true);

        Self {
            _common: common,
            sm,
        }
    }
}

impl<P: Instance, const S: usize> PulseQueue for PioByteQueue<'_, P, S> {
    async fn submit(&mut self, byte: u8) {
        self.sm.tx().wait_push(u32::from(byte) << 24).await;
    }
}

macro_rules! claimed_pio_queue {
    ($($pio:ident => [$($sm:literal),+]),+ $(,)?) => {
        ::paste::paste! {
            /// The state machine picked by [`new_claimed_queue`], whichever block and number it turned out to be.
            pub enum ClaimedPioQueue<'d> {
                $($(
                    #[doc = concat!(stringify!($pio), " state machine ", stringify!($sm))]
                    [<$pio:camel Sm $sm>](PioByteQueue<'d, $pio, $sm>),
                )+)+
            }

            impl PulseQueue for ClaimedPioQueue<'_> {
                async fn submit(&mut self, byte: u8) {
                    match self {
                        $($(
                            Self::[<$pio:camel Sm $sm>](queue) => queue.submit(byte).await,
                        )+)+
                    }
                }
            }
        }
    };
}

claimed_pio_queue! {
    PIO0 => [0, 1, 2, 3],
    PIO1 => [0, 1, 2, 3],
}

/// Claim a state machine (PIO0 first, PIO1 if PIO0 is full) and start the encoder on `pin`.
///
/// Call once at start-up. Both PIO peripherals are taken so either can be used; the
/// unpicked one is released when this returns.
///
/// # Errors
///
/// Returns [`Error::NoFreeStateMachine`] when every state machine in both pools was
/// already claimed or reserved.
pub fn new_claimed_queue<'d>(
    primary: Peri<'d, PIO0>,
    fallback: Peri<'d, PIO1>,
    pin: Peri<'d, impl PioPin>,
) -> Result<(StateMachineClaim, ClaimedPioQueue<'d>)> {
    let claim = claim_state_machine(&PIO0_POOL, &PIO1_POOL)?;
    defmt::info!(
        "led matrix: claimed {} state machine {}",
        claim.block,
        claim.index
    );

    let queue = match claim.block {
        PioBlock::Pio0 => {
            let Pio {
                common,
                sm0,
                sm1,
                sm2,
                sm3,
                ..
            } = Pio::new(primary, Pio0Irqs);
            match claim.index {
                0 => ClaimedPioQueue::Pio0Sm0(PioByteQueue::new(common, sm0, pin)),
                1 => ClaimedPioQueue::Pio0Sm1(PioByteQueue::new(common, sm1, pin)),
                2 => ClaimedPioQueue::Pio0Sm2(PioByteQueue::new(common, sm2, pin)),
                3 => ClaimedPioQueue::Pio0Sm3(PioByteQueue::new(common, sm3, pin)),
                _ => return Err(Error::NoFreeStateMachine),
            }
        }
        PioBlock::Pio1 => {
            let Pio {
                common,
                sm0,
                sm1,
                sm2,
                sm3,
                ..
            } = Pio::new(fallback, Pio1Irqs);
            match claim.index {
                0 => ClaimedPioQueue::Pio1Sm0(PioByteQueue::new(common, sm0, pin)),
                1 => ClaimedPioQueue::Pio1Sm1(PioByteQueue::new(common, sm1, pin)),
                2 => ClaimedPioQueue::Pio1Sm2(PioByteQueue::new(common, sm2, pin)),
                3 => ClaimedPioQueue::Pio1Sm3(PioByteQueue::new(common, sm3, pin)),
                _ => return Err(Error::NoFreeStateMachine),
            }
        }
    };

    Ok((claim, queue))
}
