//! Parser for Colorado Timing Systems start list (.scb) files.
//!
//! Each file holds one event: a header line naming the event, followed by
//! blocks of 10 lane lines, one block per heat:
//!
//! ```text
//! #<event number> <event description>
//! <name>--<team>      lane 1 of heat 1
//! ...
//! ```
//!
//! The body must be exactly `10 * num_heats` lines long. A file that breaks
//! the layout fails as a whole; there is no partial recovery.

use crate::domain::model::{Event, Heat, Lane, LANES_PER_HEAT};
use crate::utils::error::{Result, StartListError};

/// Recognized start list file extension (case-sensitive).
pub const SCB_EXTENSION: &str = "scb";

/// Parses a whole start list file into an [`Event`]. `source` is the file
/// name, used only for error attribution.
pub fn parse_event(lines: &[String], source: &str) -> Result<Event> {
    let (event, event_desc) = parse_header(lines, source)?;
    let body = &lines[1..];
    check_body_length(body.len(), source)?;

    let num_heats = body.len() / LANES_PER_HEAT;
    let mut heats = Vec::with_capacity(num_heats);
    for heat_number in 1..=num_heats {
        heats.push(extract_heat(
            body,
            heat_number as u32,
            &event,
            &event_desc,
            source,
        )?);
    }

    Ok(Event {
        event,
        event_desc,
        heats,
    })
}

/// Parses a single 1-based heat out of a start list file. The file must
/// carry at least `heat_number * 10` body lines.
pub fn parse_heat(lines: &[String], heat_number: u32, source: &str) -> Result<Heat> {
    let (event, event_desc) = parse_header(lines, source)?;
    let body = &lines[1..];
    check_body_length(body.len(), source)?;

    let needed = heat_number as usize * LANES_PER_HEAT;
    if heat_number == 0 || body.len() < needed {
        return Err(StartListError::LineCountMismatch {
            filename: source.to_string(),
            message: format!(
                "heat {} needs {} body lines, found {}",
                heat_number,
                needed,
                body.len()
            ),
        });
    }

    extract_heat(body, heat_number, &event, &event_desc, source)
}

/// Splits a lane line at the first `--` and trims both halves. A name can
/// therefore never itself contain `--`: the first occurrence always wins.
pub fn split_lane_line(line: &str) -> Option<Lane> {
    let (name, team) = line.split_once("--")?;
    Some(Lane::new(name.trim(), team.trim()))
}

/// Header layout: `#`, the event number token, whitespace, then the
/// description. The token ends at the first whitespace character and must be
/// non-empty; the description may be empty.
fn parse_header(lines: &[String], source: &str) -> Result<(String, String)> {
    let malformed = || StartListError::MalformedHeader {
        filename: source.to_string(),
    };

    let header = lines.first().ok_or_else(malformed)?;
    let rest = header.strip_prefix('#').ok_or_else(malformed)?;
    let id_len = rest.find(char::is_whitespace).ok_or_else(malformed)?;
    if id_len == 0 {
        return Err(malformed());
    }

    let event = rest[..id_len].to_string();
    let event_desc = rest[id_len..].trim_start().to_string();
    Ok((event, event_desc))
}

fn check_body_length(body_len: usize, source: &str) -> Result<()> {
    if body_len % LANES_PER_HEAT != 0 {
        return Err(StartListError::LineCountMismatch {
            filename: source.to_string(),
            message: format!(
                "body is {} lines, expected a multiple of {}",
                body_len, LANES_PER_HEAT
            ),
        });
    }
    Ok(())
}

/// Builds one heat from its 10-line block. `body` excludes the header line.
fn extract_heat(
    body: &[String],
    heat_number: u32,
    event: &str,
    event_desc: &str,
    source: &str,
) -> Result<Heat> {
    let start = (heat_number as usize - 1) * LANES_PER_HEAT;
    let block = &body[start..start + LANES_PER_HEAT];

    let mut lanes: [Lane; LANES_PER_HEAT] = Default::default();
    for (i, line) in block.iter().enumerate() {
        lanes[i] = split_lane_line(line).ok_or_else(|| StartListError::LaneFormat {
            filename: source.to_string(),
            // 1-based file line: header is line 1, body starts on line 2
            line: start + i + 2,
        })?;
    }

    Ok(Heat {
        event: event.to_string(),
        event_desc: event_desc.to_string(),
        heat: heat_number,
        lanes,
    })
}
