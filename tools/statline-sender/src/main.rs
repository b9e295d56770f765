//! Statline metrics sender
//!
//! Samples CPU, memory, disk and the local time every couple of seconds
//! and writes one deck line per sample to the display's serial port.
//! The port is found automatically: the first USB serial adapter wins.

mod line;
mod port;
mod sample;

use std::io::Write;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use statline_hal::UartConfig;

use crate::line::format_line;
use crate::port::detect_port;
use crate::sample::Sampler;

/// Pause between lines
const SEND_INTERVAL: Duration = Duration::from_secs(2);

/// Wait after opening the port before the first line
const SETTLE_TIME: Duration = Duration::from_secs(2);

/// Read timeout on the port
const PORT_TIMEOUT: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let port_name = detect_port()?;

    let link = UartConfig::default();
    let mut port = serialport::new(&port_name, link.baudrate)
        .timeout(PORT_TIMEOUT)
        .open()
        .with_context(|| format!("opening {}", port_name))?;

    thread::sleep(SETTLE_TIME);
    log::info!("Connected to {} at {} baud", port_name, link.baudrate);

    let mut sampler = Sampler::new();
    loop {
        let line = format_line(&sampler.sample());
        log::info!("Sending: {}", line.trim_end());
        port.write_all(line.as_bytes())
            .with_context(|| format!("writing to {}", port_name))?;
        thread::sleep(SEND_INTERVAL);
    }
}
