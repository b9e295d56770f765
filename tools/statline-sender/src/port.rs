//! Serial port discovery

use anyhow::{anyhow, Context, Result};
use serialport::{SerialPortInfo, SerialPortType};

/// Pick the port the display is most likely attached to
///
/// USB adapters win; otherwise the first port whose name looks like a
/// USB or COM device.
pub fn pick_port(ports: &[SerialPortInfo]) -> Option<&SerialPortInfo> {
    ports
        .iter()
        .find(|port| matches!(port.port_type, SerialPortType::UsbPort(_)))
        .or_else(|| {
            ports
                .iter()
                .find(|port| port.port_name.contains("USB") || port.port_name.contains("COM"))
        })
}

/// Name of the detected display port
pub fn detect_port() -> Result<String> {
    let ports = serialport::available_ports().context("listing serial ports")?;
    for port in &ports {
        log::debug!("Found serial port {}", port.port_name);
    }

    pick_port(&ports)
        .map(|port| port.port_name.clone())
        .ok_or_else(|| anyhow!("no serial port found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialport::UsbPortInfo;

    fn port(name: &str, port_type: SerialPortType) -> SerialPortInfo {
        SerialPortInfo {
            port_name: name.into(),
            port_type,
        }
    }

    #[test]
    fn test_usb_adapter_preferred() {
        let usb = SerialPortType::UsbPort(UsbPortInfo {
            vid: 0x0483,
            pid: 0x5740,
            serial_number: None,
            manufacturer: None,
            product: None,
        });
        let ports = [
            port("/dev/ttyS0", SerialPortType::Unknown),
            port("/dev/ttyACM0", usb),
        ];
        assert_eq!(pick_port(&ports).unwrap().port_name, "/dev/ttyACM0");
    }

    #[test]
    fn test_falls_back_to_port_name() {
        let ports = [
            port("/dev/ttyS0", SerialPortType::Unknown),
            port("COM3", SerialPortType::Unknown),
        ];
        assert_eq!(pick_port(&ports).unwrap().port_name, "COM3");
    }

    #[test]
    fn test_no_candidate() {
        let ports = [port("/dev/ttyS0", SerialPortType::PciPort)];
        assert!(pick_port(&ports).is_none());
        assert!(pick_port(&[]).is_none());
    }
}
