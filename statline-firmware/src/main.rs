//! Statline Firmware
//!
//! Desk status display on an STM32F042K6 with an SH1106 OLED. A host
//! script sends one line of system metrics every couple of seconds over
//! USART2; the display shows them, a Pomodoro timer on button press and,
//! in the deck profile, an animation while no new data arrives.

#![no_std]
#![no_main]

mod assets;
mod sh1106;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::bind_interrupts;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::mode::Async;
use embassy_stm32::peripherals::{I2C1, USART2};
use embassy_stm32::usart::{self, Uart};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::pipe::Pipe;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use statline_core::config::LOOP_INTERVAL_MS;
use statline_core::serial::{SerialError, SerialLines};
use statline_core::{Input as StepInput, Profile, Scheduler};
use statline_display::{render, render_welcome, welcome_centre, welcome_positions};
use statline_hal::gpio::ActiveLow;
use statline_hal::{Buzzer, UartConfig};
use statline_hal_stm32f0::uart::usart_config;
use statline_hal_stm32f0::{
    drive_buzzer, BuzzerCommand, I2cBusError, I2cConfig, PipeRx, SignalBuzzer, Stm32Input,
    Stm32Output, UartBusError,
};

use crate::assets::SPINNER;
use crate::sh1106::Sh1106;

bind_interrupts!(struct Irqs {
    USART2 => usart::InterruptHandler<USART2>;
    I2C1 => i2c::EventInterruptHandler<I2C1>, i2c::ErrorInterruptHandler<I2C1>;
});

type Display = Sh1106<I2c<'static, Async, i2c::Master>>;

/// Received bytes not yet taken by the main loop
const RX_PIPE_SIZE: usize = 128;

/// Pause between frames of the scrolling boot banner
const WELCOME_FRAME_MS: u64 = 100;

/// How long the centred boot banner stays up
const WELCOME_HOLD_MS: u64 = 1000;

static RX_PIPE: Pipe<CriticalSectionRawMutex, RX_PIPE_SIZE> = Pipe::new();

/// Latest command for the buzzer task
static BUZZER: Signal<CriticalSectionRawMutex, BuzzerCommand> = Signal::new();

#[cfg(feature = "classic")]
fn profile() -> Profile {
    Profile::classic()
}

#[cfg(not(feature = "classic"))]
fn profile() -> Profile {
    Profile::deck()
}

/// Millisecond clock sample; wraps after ~49 days
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let profile = profile();
    info!("Statline starting ({:?})", profile.line_format);

    debug_assert!(SPINNER.is_well_formed());

    let p = embassy_stm32::init(Default::default());

    // OLED on I2C1 (PB6=SCL, PB7=SDA)
    let i2c = I2c::new(
        p.I2C1,
        p.PB6,
        p.PB7,
        Irqs,
        p.DMA1_CH2,
        p.DMA1_CH3,
        I2cConfig::default().to_embassy(),
    );

    let mut display: Display = Sh1106::new(i2c);
    if let Err(e) = display.init().await {
        error!("Failed to initialize display: {:?}", I2cBusError::from(e));
        core::future::pending::<()>().await;
    }
    info!("OLED initialized");

    // Host link on USART2 (PA2=TX, PA3=RX)
    let uart_config = UartConfig::default();
    info!("Host link: {:?}", uart_config);
    let uart = match Uart::new(
        p.USART2,
        p.PA3,
        p.PA2,
        Irqs,
        p.DMA1_CH4,
        p.DMA1_CH5,
        usart_config(&uart_config),
    ) {
        Ok(uart) => uart,
        Err(e) => {
            error!("Failed to configure UART: {:?}", e);
            core::future::pending::<()>().await;
            return;
        }
    };
    let (_tx, rx) = uart.split();

    // Button to ground on PA1, buzzer on PA0
    let button = ActiveLow(Stm32Input(Input::new(p.PA1, Pull::Up)));
    let buzzer_pin = Output::new(p.PA0, Level::Low, Speed::Low);

    unwrap!(spawner.spawn(uart_rx_task(rx)));
    unwrap!(spawner.spawn(buzzer_task(Stm32Output(buzzer_pin))));

    boot_splash(&mut display).await;

    let mut scheduler = Scheduler::new(profile, SPINNER.frame_count(), now_ms());
    let mut serial = SerialLines::new(PipeRx::new(&RX_PIPE));
    let mut buzzer = SignalBuzzer::new(&BUZZER);
    let mut ticker = Ticker::every(Duration::from_millis(LOOP_INTERVAL_MS.into()));

    info!("Entering main loop");

    loop {
        let now = now_ms();

        let received = serial.poll();
        let line = match &received {
            Ok(Some(line)) => Some(Ok(line.as_str())),
            Ok(None) => None,
            Err(SerialError::Line(e)) => Some(Err(*e)),
            Err(SerialError::Uart(never)) => match *never {},
        };

        let before = scheduler.mode();
        let step = scheduler.step(
            now,
            StepInput {
                button_down: button.is_pressed(),
                line,
            },
        );

        if let Some(rejected) = step.rejected {
            warn!("Dropped line: {:?}", rejected);
        }
        if scheduler.mode() != before {
            debug!("Mode: {} -> {}", before.name(), scheduler.mode().name());
        }

        if let Some(alert) = step.alert {
            if alert.is_active() {
                info!("RAM usage above threshold: {}", scheduler.snapshot().ram_usage());
            }
            alert.apply(&mut buzzer);
        }
        if let Some(chime) = step.chime {
            info!("Pomodoro complete");
            buzzer.tone(chime.freq_hz, chime.duration_ms);
        }

        if let Some(screen) = step.render {
            match render(&mut display, screen, &scheduler, &SPINNER) {
                Ok(()) => {
                    if let Err(e) = display.flush().await {
                        warn!("Display flush failed: {:?}", I2cBusError::from(e));
                    }
                }
                Err(e) => warn!("Render failed: {:?}", e),
            }
        }

        ticker.next().await;
    }
}

/// Scroll the welcome banner across, then leave it centred
async fn boot_splash(display: &mut Display) {
    for x in welcome_positions(&*display) {
        show_welcome(display, x).await;
        Timer::after_millis(WELCOME_FRAME_MS).await;
    }
    let centre = welcome_centre(&*display);
    show_welcome(display, centre).await;
    Timer::after_millis(WELCOME_HOLD_MS).await;
}

async fn show_welcome(display: &mut Display, x: i32) {
    if let Err(e) = render_welcome(display, x) {
        warn!("Render failed: {:?}", e);
        return;
    }
    if let Err(e) = display.flush().await {
        warn!("Display flush failed: {:?}", I2cBusError::from(e));
    }
}

/// UART receive task - moves host bytes into the pipe
#[embassy_executor::task]
async fn uart_rx_task(mut rx: usart::UartRx<'static, Async>) {
    info!("UART RX task started");

    let mut buf = [0u8; 32];

    loop {
        match rx.read_until_idle(&mut buf).await {
            Ok(len) => RX_PIPE.write_all(&buf[..len]).await,
            Err(e) => {
                warn!("UART read error: {:?}", UartBusError::from(e));
                Timer::after(Duration::from_millis(10)).await;
            }
        }
    }
}

/// Buzzer task - plays whatever the main loop last asked for
#[embassy_executor::task]
async fn buzzer_task(mut pin: Stm32Output<'static>) {
    info!("Buzzer task started");
    drive_buzzer(&mut pin, &BUZZER).await
}
