//! Metrics snapshot
//!
//! One parsed line worth of metrics. Fields stay textual: the display
//! shows exactly what the sender wrote.

use heapless::String;

/// Capacity of a single field
pub const FIELD_LEN: usize = 24;

/// A single textual field
pub type Field = String<FIELD_LEN>;

/// Metrics from one accepted line
///
/// Built only by the parser (or [`Snapshot::initial`]) and never
/// modified afterwards; a new line replaces the whole value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub(crate) cpu_usage: Field,
    pub(crate) ram_usage: Field,
    pub(crate) disk_usage: Field,
    pub(crate) time_of_day: Field,
    /// Weekday label (Deck format)
    pub(crate) day_label: Option<Field>,
    /// CPU temperature (Classic format)
    pub(crate) cpu_temperature: Option<Field>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

impl Snapshot {
    /// Snapshot shown before any data arrives
    pub fn initial() -> Self {
        Self {
            cpu_usage: zero(),
            ram_usage: zero(),
            disk_usage: zero(),
            time_of_day: Field::new(),
            day_label: None,
            cpu_temperature: None,
        }
    }

    /// CPU usage percentage text
    pub fn cpu_usage(&self) -> &str {
        &self.cpu_usage
    }

    /// RAM usage percentage text
    pub fn ram_usage(&self) -> &str {
        &self.ram_usage
    }

    /// Disk usage percentage text
    pub fn disk_usage(&self) -> &str {
        &self.disk_usage
    }

    /// Time of day text as sent (e.g. "14:05" or "2025-01-07 14:05")
    pub fn time_of_day(&self) -> &str {
        &self.time_of_day
    }

    /// Weekday label, if the line format carries one
    pub fn day_label(&self) -> Option<&str> {
        self.day_label.as_deref()
    }

    /// CPU temperature text, if the line format carries one
    pub fn cpu_temperature(&self) -> Option<&str> {
        self.cpu_temperature.as_deref()
    }

    /// Check whether any displayed field differs from `other`
    pub fn differs_from(&self, other: &Snapshot) -> bool {
        self != other
    }
}

fn zero() -> Field {
    let mut field = Field::new();
    let _ = field.push('0');
    field
}
