//! Board wiring for the Raspberry Pi Pico
//!
//! - LED: GPIO25 (on-board, active high)
//! - Console: UART0, TX=GPIO0, RX=GPIO1

/// On-board LED is driven directly, lit when the pin is high
pub const LED_INVERTED: bool = false;

/// Console baud rate (8N1)
pub const CONSOLE_BAUDRATE: u32 = 115_200;

/// UART ring buffer size for each direction
pub const CONSOLE_BUF_SIZE: usize = 64;
