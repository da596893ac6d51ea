//! ICS export for event definitions.
//!
//! Serializes a single definition (not its expanded occurrences) as a
//! VCALENDAR/VEVENT text block. Recurring definitions carry one RRULE line
//! derived from the definition's frequency and weekday pattern; a recurring
//! definition whose stored frequency was unrecognized gets no RRULE line.

use crate::error::CalGridResult;
use crate::event::{EventDefinition, Frequency};
use crate::weekday::WeekdaySet;

/// ICS BYDAY codes, indexed 0=Sunday through 6=Saturday.
const BYDAY_CODES: [&str; 7] = ["SU", "MO", "TU", "WE", "TH", "FR", "SA"];

/// Generate .ics content for one event definition.
pub fn generate_ics(definition: &EventDefinition) -> CalGridResult<String> {
    let mut lines: Vec<String> = Vec::new();

    lines.push("BEGIN:VCALENDAR".to_string());
    lines.push("VERSION:2.0".to_string());
    lines.push("PRODID:CALGRID".to_string());
    lines.push("BEGIN:VEVENT".to_string());
    lines.push(format!("UID:{}", definition.id));
    lines.push(format!("SUMMARY:{}", escape_text(&definition.title)));

    if let Some(ref description) = definition.description {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }

    // All-day date values, no time-of-day
    lines.push(format!(
        "DTSTART;VALUE=DATE:{}",
        definition.start_date.format("%Y%m%d")
    ));
    lines.push(format!(
        "DTEND;VALUE=DATE:{}",
        definition.end_date.format("%Y%m%d")
    ));

    if definition.is_recurring {
        if let Some(rrule) = build_rrule(definition.frequency, &definition.days_of_week) {
            lines.push(rrule);
        }
    }

    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    let mut output = lines.join("\r\n");
    output.push_str("\r\n");
    Ok(output)
}

/// Build the RRULE line for a recurring definition.
///
/// A weekly definition with an empty weekday set gets a bare FREQ=WEEKLY
/// rather than an empty BYDAY list.
fn build_rrule(frequency: Option<Frequency>, days: &WeekdaySet) -> Option<String> {
    match frequency? {
        Frequency::Daily => Some("RRULE:FREQ=DAILY".to_string()),
        Frequency::Weekly => {
            if days.is_empty() {
                return Some("RRULE:FREQ=WEEKLY".to_string());
            }
            let codes: Vec<&str> = days
                .iter()
                .map(|index| BYDAY_CODES[usize::from(index)])
                .collect();
            Some(format!("RRULE:FREQ=WEEKLY;BYDAY={}", codes.join(",")))
        }
        Frequency::Monthly => Some("RRULE:FREQ=MONTHLY".to_string()),
    }
}

/// Backslash-escape RFC 5545 TEXT special characters.
/// Bare carriage returns are dropped; newlines become a literal `\n`.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use icalendar::parser::{read_calendar, unfold};

    fn make_definition() -> EventDefinition {
        EventDefinition {
            id: "evt-123".to_string(),
            title: "Team sync".to_string(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            is_recurring: false,
            frequency: None,
            days_of_week: WeekdaySet::new(),
        }
    }

    #[test]
    fn test_one_time_event_has_no_rrule() {
        let ics = generate_ics(&make_definition()).unwrap();

        assert!(ics.contains("UID:evt-123"), "ICS:\n{}", ics);
        assert!(ics.contains("SUMMARY:Team sync"), "ICS:\n{}", ics);
        assert!(ics.contains("DTSTART;VALUE=DATE:20240320"), "ICS:\n{}", ics);
        assert!(ics.contains("DTEND;VALUE=DATE:20240320"), "ICS:\n{}", ics);
        assert!(!ics.contains("RRULE"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_daily_rrule() {
        let mut definition = make_definition();
        definition.is_recurring = true;
        definition.frequency = Some(Frequency::Daily);

        let ics = generate_ics(&definition).unwrap();
        assert!(ics.contains("RRULE:FREQ=DAILY"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_weekly_rrule_byday_codes() {
        let mut definition = make_definition();
        definition.is_recurring = true;
        definition.frequency = Some(Frequency::Weekly);
        definition.days_of_week = WeekdaySet::from_indices([1, 3, 5]);

        let ics = generate_ics(&definition).unwrap();
        assert!(
            ics.contains("RRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR"),
            "ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_weekly_rrule_empty_set_omits_byday() {
        let mut definition = make_definition();
        definition.is_recurring = true;
        definition.frequency = Some(Frequency::Weekly);

        let ics = generate_ics(&definition).unwrap();
        assert!(ics.contains("RRULE:FREQ=WEEKLY\r\n"), "ICS:\n{}", ics);
        assert!(!ics.contains("BYDAY"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_monthly_rrule() {
        let mut definition = make_definition();
        definition.is_recurring = true;
        definition.frequency = Some(Frequency::Monthly);

        let ics = generate_ics(&definition).unwrap();
        assert!(ics.contains("RRULE:FREQ=MONTHLY"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_recurring_without_frequency_has_no_rrule() {
        let mut definition = make_definition();
        definition.is_recurring = true;

        let ics = generate_ics(&definition).unwrap();
        assert!(!ics.contains("RRULE"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_text_escaping() {
        let mut definition = make_definition();
        definition.title = "Lunch; with, friends\\".to_string();
        definition.description = Some("line one\nline two".to_string());

        let ics = generate_ics(&definition).unwrap();
        assert!(
            ics.contains("SUMMARY:Lunch\\; with\\, friends\\\\"),
            "ICS:\n{}",
            ics
        );
        assert!(
            ics.contains("DESCRIPTION:line one\\nline two"),
            "ICS:\n{}",
            ics
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let ics = generate_ics(&make_definition()).unwrap();
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        for line in ics.split("\r\n").filter(|l| !l.is_empty()) {
            assert!(!line.contains('\n'), "stray LF in line: {:?}", line);
        }
    }

    #[test]
    fn test_output_parses_as_calendar() {
        let mut definition = make_definition();
        definition.is_recurring = true;
        definition.frequency = Some(Frequency::Weekly);
        definition.days_of_week = WeekdaySet::from_indices([2, 4]);

        let ics = generate_ics(&definition).unwrap();
        let unfolded = unfold(&ics);
        let calendar = read_calendar(&unfolded).expect("generated ICS should parse");
        assert!(calendar.components.iter().any(|c| c.name == "VEVENT"));
    }
}
