//! Buzzer output for STM32F0
//!
//! Callers on the main loop get a [`SignalBuzzer`], which only posts
//! commands. [`drive_buzzer`] runs in its own task, owns the pin and
//! produces tones as a square wave, so a tone never stalls the loop.
//! A new command replaces whatever is playing.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Instant, Timer};
use statline_hal::{Buzzer, OutputPin};

/// Command for the buzzer task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BuzzerCommand {
    /// Hold the pin at a level
    Level(bool),
    /// Play a square wave
    Tone { freq_hz: u16, duration_ms: u16 },
    /// Pin low
    Silence,
}

/// `Buzzer` that forwards to the buzzer task
pub struct SignalBuzzer<'a, M: RawMutex> {
    commands: &'a Signal<M, BuzzerCommand>,
}

impl<'a, M: RawMutex> SignalBuzzer<'a, M> {
    pub fn new(commands: &'a Signal<M, BuzzerCommand>) -> Self {
        Self { commands }
    }
}

impl<M: RawMutex> Buzzer for SignalBuzzer<'_, M> {
    fn set_level(&mut self, on: bool) {
        self.commands.signal(BuzzerCommand::Level(on));
    }

    fn tone(&mut self, freq_hz: u16, duration_ms: u16) {
        self.commands.signal(BuzzerCommand::Tone {
            freq_hz,
            duration_ms,
        });
    }

    fn silence(&mut self) {
        self.commands.signal(BuzzerCommand::Silence);
    }
}

/// Run the buzzer pin from commands, forever
pub async fn drive_buzzer<P: OutputPin, M: RawMutex>(
    pin: &mut P,
    commands: &Signal<M, BuzzerCommand>,
) -> ! {
    let mut command = commands.wait().await;
    loop {
        command = match command {
            BuzzerCommand::Level(on) => {
                pin.set_state(on);
                commands.wait().await
            }
            BuzzerCommand::Tone {
                freq_hz,
                duration_ms,
            } if freq_hz > 0 => {
                let played = select(square_wave(pin, freq_hz, duration_ms), commands.wait()).await;
                pin.set_low();
                match played {
                    Either::First(()) => commands.wait().await,
                    Either::Second(next) => next,
                }
            }
            BuzzerCommand::Tone { .. } | BuzzerCommand::Silence => {
                pin.set_low();
                commands.wait().await
            }
        };
    }
}

async fn square_wave<P: OutputPin>(pin: &mut P, freq_hz: u16, duration_ms: u16) {
    let half_period_us = 500_000 / u64::from(freq_hz);
    let end = Instant::now() + embassy_time::Duration::from_millis(u64::from(duration_ms));

    while Instant::now() < end {
        pin.set_high();
        Timer::after_micros(half_period_us).await;
        pin.set_low();
        Timer::after_micros(half_period_us).await;
    }
}
