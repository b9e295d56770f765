//! Deck line formatting

use statline_protocol::{LINE_TERMINATOR, SEPARATOR};

use crate::sample::Sample;

/// Format for the time field
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format for the day field (full weekday name)
const DAY_FORMAT: &str = "%A";

/// Render a sample as one terminated deck line
///
/// `cpu,mem_free,ram,disk,time,day` with one decimal on the numeric
/// fields.
pub fn format_line(sample: &Sample) -> String {
    let fields = [
        format!("{:.1}", sample.cpu_usage),
        format!("{:.1}", sample.mem_free_mb),
        format!("{:.1}", sample.ram_usage),
        format!("{:.1}", sample.disk_usage),
        sample.taken_at.format(TIME_FORMAT).to_string(),
        sample.taken_at.format(DAY_FORMAT).to_string(),
    ];

    let mut line = fields.join(&SEPARATOR.to_string());
    line.push(LINE_TERMINATOR as char);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use statline_protocol::{parse, percent, LineAssembler, LineFormat, MAX_LINE_LEN};

    fn sample() -> Sample {
        Sample {
            cpu_usage: 12.46,
            mem_free_mb: 8123.457,
            ram_usage: 73.4,
            disk_usage: 41.0,
            taken_at: NaiveDate::from_ymd_opt(2025, 1, 7)
                .unwrap()
                .and_hms_opt(14, 5, 30)
                .unwrap(),
        }
    }

    #[test]
    fn test_deck_line_layout() {
        assert_eq!(
            format_line(&sample()),
            "12.5,8123.5,73.4,41.0,2025-01-07 14:05,Tuesday\n"
        );
    }

    #[test]
    fn test_display_reads_back_every_field() {
        let line = format_line(&sample());
        assert!(line.len() <= MAX_LINE_LEN);

        let mut assembler: LineAssembler = LineAssembler::new();
        let mut received = None;
        for &byte in line.as_bytes() {
            if let Some(line) = assembler.feed(byte).unwrap() {
                received = Some(line);
            }
        }
        let received = received.unwrap();

        let snapshot = parse(&received, LineFormat::Deck).unwrap();
        assert_eq!(snapshot.cpu_usage(), "12.5");
        assert_eq!(snapshot.ram_usage(), "73.4");
        assert_eq!(snapshot.disk_usage(), "41.0");
        assert_eq!(snapshot.time_of_day(), "2025-01-07 14:05");
        assert_eq!(snapshot.day_label(), Some("Tuesday"));
        assert_eq!(percent(snapshot.ram_usage()), 73);
    }

    #[test]
    fn test_longest_weekday_fits() {
        let mut wednesday = sample();
        wednesday.taken_at = NaiveDate::from_ymd_opt(2025, 1, 8)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let line = format_line(&wednesday);
        let snapshot = parse(line.trim_end(), LineFormat::Deck).unwrap();
        assert_eq!(snapshot.day_label(), Some("Wednesday"));
    }
}
