//! GPIO wrappers for STM32F0
//!
//! Thin newtypes so board code can hand embassy pins to anything written
//! against the `statline-hal` pin traits.

use embassy_stm32::gpio::{Input, Output};
use statline_hal::{InputPin, OutputPin};

/// Digital input backed by an embassy pin
pub struct Stm32Input<'d>(pub Input<'d>);

impl InputPin for Stm32Input<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Push-pull output backed by an embassy pin
pub struct Stm32Output<'d>(pub Output<'d>);

impl OutputPin for Stm32Output<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
