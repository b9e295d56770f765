//! Stats line parser
//!
//! Splits a line on [`SEPARATOR`] at fixed positions. The field after the
//! last required separator takes the rest of the line, so a stray comma
//! there ends up inside the final field rather than failing the parse.

use heapless::Vec;

use crate::snapshot::{Field, Snapshot};

/// Field separator
pub const SEPARATOR: char = ',';

/// Most fields any format uses
const MAX_FIELDS: usize = 7;

/// Wire layouts understood by the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineFormat {
    /// `cpu,_,mem_total,ram,disk,time,cpu_temp`
    Classic,
    /// `cpu,mem_free,ram,disk,time,day`
    Deck,
}

/// Field positions within a line
struct Layout {
    cpu: usize,
    ram: usize,
    disk: usize,
    time: usize,
    /// Index of the trailing field (temperature or day)
    tail: usize,
}

impl LineFormat {
    /// Number of separators a valid line must contain
    pub const fn separators(self) -> usize {
        match self {
            LineFormat::Classic => 6,
            LineFormat::Deck => 5,
        }
    }

    const fn layout(self) -> Layout {
        match self {
            LineFormat::Classic => Layout {
                cpu: 0,
                ram: 3,
                disk: 4,
                time: 5,
                tail: 6,
            },
            LineFormat::Deck => Layout {
                cpu: 0,
                ram: 2,
                disk: 3,
                time: 4,
                tail: 5,
            },
        }
    }
}

/// Names of the extracted fields, for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldName {
    Cpu,
    Ram,
    Disk,
    Time,
    CpuTemp,
    Day,
}

/// Reasons a line is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Fewer separators than the format requires
    MissingSeparator { found: u8, required: u8 },
    /// A field does not fit its buffer
    FieldTooLong(FieldName),
}

/// Parse one line into a snapshot
///
/// A trailing `\r` is dropped and each field is trimmed of surrounding
/// whitespace. On error nothing is produced.
pub fn parse(line: &str, format: LineFormat) -> Result<Snapshot, ParseError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let required = format.separators();

    let mut fields: Vec<&str, MAX_FIELDS> = Vec::new();
    for field in line.splitn(required + 1, SEPARATOR) {
        // splitn never yields more than required + 1 <= MAX_FIELDS pieces
        let _ = fields.push(field.trim());
    }

    if fields.len() <= required {
        return Err(ParseError::MissingSeparator {
            found: (fields.len() - 1) as u8,
            required: required as u8,
        });
    }

    let layout = format.layout();
    let tail = to_field(fields[layout.tail], tail_name(format))?;

    let (day_label, cpu_temperature) = match format {
        LineFormat::Classic => (None, Some(tail)),
        LineFormat::Deck => (Some(tail), None),
    };

    Ok(Snapshot {
        cpu_usage: to_field(fields[layout.cpu], FieldName::Cpu)?,
        ram_usage: to_field(fields[layout.ram], FieldName::Ram)?,
        disk_usage: to_field(fields[layout.disk], FieldName::Disk)?,
        time_of_day: to_field(fields[layout.time], FieldName::Time)?,
        day_label,
        cpu_temperature,
    })
}

fn tail_name(format: LineFormat) -> FieldName {
    match format {
        LineFormat::Classic => FieldName::CpuTemp,
        LineFormat::Deck => FieldName::Day,
    }
}

fn to_field(text: &str, name: FieldName) -> Result<Field, ParseError> {
    let mut field = Field::new();
    field
        .push_str(text)
        .map_err(|_| ParseError::FieldTooLong(name))?;
    Ok(field)
}

/// Integer value of a percentage field
///
/// Reads leading digits after optional whitespace and stops at the first
/// non-digit, so `"73.4"` is 73 and `"n/a"` is 0. Saturates at 255.
pub fn percent(text: &str) -> u8 {
    let value = text
        .trim_start()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, digit| {
            acc.saturating_mul(10).saturating_add((digit - b'0') as u32)
        });
    value.min(u8::MAX as u32) as u8
}
