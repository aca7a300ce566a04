//! iCalendar invite formatting for a chosen slot.
//!
//! Pure text assembly with no clock access: the UID derives from the slot
//! bounds and DTSTAMP mirrors DTSTART, so the same slot always yields the
//! same invite.

use crate::slot::TimeSlot;

/// UTC "basic" datetime format used in iCalendar lines, e.g. `20240101T140000Z`.
const ICAL_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Render an RFC 5545 calendar invite for a chosen slot.
///
/// Produces a single VEVENT inside a VCALENDAR, CRLF line endings, with
/// SUMMARY and DESCRIPTION escaped per RFC 5545 section 3.3.11. An empty
/// `description` omits the DESCRIPTION line.
pub fn generate_invite(slot: &TimeSlot, subject: &str, description: &str) -> String {
    let dtstart = slot.start().format(ICAL_UTC_FORMAT);
    let dtend = slot.end().format(ICAL_UTC_FORMAT);

    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//slotwise//slotwise-core//EN".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{dtstart}-{dtend}@slotwise"),
        format!("DTSTAMP:{dtstart}"),
        format!("DTSTART:{dtstart}"),
        format!("DTEND:{dtend}"),
        format!("SUMMARY:{}", escape_text(subject)),
    ];
    if !description.is_empty() {
        lines.push(format!("DESCRIPTION:{}", escape_text(description)));
    }
    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

/// Escape a TEXT property value (RFC 5545 section 3.3.11).
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace('\n', "\\n")
}
