//! Dotdash - Morse Word Blinker Firmware
//!
//! Picks a random three-letter word, blinks it in Morse code on the
//! on-board LED, then reveals the word and its code on the serial console
//! once the user answers the prompt.
//!
//! There is no recovery path: any error is logged and halts the board.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::clocks::RoscRng;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::{Delay, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use dotdash_core::{MorseTable, Session, SessionConfig};
use dotdash_drivers::{Blinker, Console, GpioLed, PROMPT};

mod board;

/// Character to code table (compiled into firmware, validated by build.rs)
/// Edit morse.json and rebuild to change it
const MORSE_TABLE_JSON: &str = include_str!("../morse.json");

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; board::CONSOLE_BUF_SIZE]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; board::CONSOLE_BUF_SIZE]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Dotdash firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let table = unwrap!(MorseTable::from_json(MORSE_TABLE_JSON));
    info!("Morse table loaded: {} characters", table.len());

    // Pick the word and work out the whole blink sequence up front
    let config = SessionConfig::default();
    let session = unwrap!(Session::prepare(&table, &mut RoscRng, &config));
    info!(
        "Prepared {}-letter word: {} steps, {} ms",
        session.word.len(),
        session.plan.len(),
        session.plan.total_duration_ms()
    );

    // LED output
    let led_pin = Output::new(p.PIN_25, Level::Low);
    let led = GpioLed::new(led_pin, board::LED_INVERTED).unwrap_or_else(|e| match e {});

    // Console on UART0
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = board::CONSOLE_BAUDRATE;

    let tx_buf = TX_BUF.init([0u8; board::CONSOLE_BUF_SIZE]);
    let rx_buf = RX_BUF.init([0u8; board::CONSOLE_BUF_SIZE]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    let mut console = Console::new(rx, tx);

    info!("UART initialized for console");

    // Blink
    let mut blinker = Blinker::new(led, Delay);
    let elapsed_ms = blinker
        .play(&session.plan)
        .await
        .unwrap_or_else(|e| match e {});
    info!("Blinking finished after {} ms", elapsed_ms);

    // Reveal once the user asks for it
    unwrap!(console.prompt(PROMPT).await);
    unwrap!(console.wait_for_line().await);
    unwrap!(console.reveal(&session.word, &session.morse).await);
    info!("Revealed word: {}", session.word.as_str());

    // Nothing left to do; the LED stays off until reset
    loop {
        Timer::after_secs(60).await;
        trace!("Idle heartbeat");
    }
}
