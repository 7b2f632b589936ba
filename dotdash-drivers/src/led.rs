//! GPIO LED output
//!
//! Drives an LED from any `embedded-hal` output pin, either directly or
//! through a transistor that inverts the logic.

use dotdash_core::SignalOutput;
use embedded_hal::digital::OutputPin;

/// LED on a GPIO pin
pub struct GpioLed<P> {
    pin: P,
    /// If true, LED ON = pin LOW
    inverted: bool,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> GpioLed<P> {
    /// Create a new LED output, switched off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the LED is lit when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Result<Self, P::Error> {
        let mut led = Self {
            pin,
            inverted,
            on: false,
        };
        led.set_on(false)?;
        Ok(led)
    }

    /// LED wired between pin and ground
    pub fn new_active_high(pin: P) -> Result<Self, P::Error> {
        Self::new(pin, false)
    }

    /// LED wired between supply and pin
    pub fn new_active_low(pin: P) -> Result<Self, P::Error> {
        Self::new(pin, true)
    }

    /// Release the pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> SignalOutput for GpioLed<P> {
    type Error = P::Error;

    fn set_on(&mut self, on: bool) -> Result<(), Self::Error> {
        if on != self.inverted {
            self.pin.set_high()?;
        } else {
            self.pin.set_low()?;
        }
        self.on = on;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
