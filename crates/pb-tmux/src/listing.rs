// ABOUTME: Parser for tmux `list-panes` output.
// ABOUTME: One comma-separated record per pane; blank lines are skipped.

use std::collections::HashSet;

use pb_core::{Pane, Snapshot};

use crate::MuxError;

/// Format string passed to `tmux list-panes -F`
pub const PANE_FORMAT: &str =
    "#{pane_id},#{pane_index},#{pane_width},#{pane_height},#{pane_left},#{pane_top},#{pane_active}";

const FIELD_COUNT: usize = 7;

/// Parse the full `list-panes` response into a snapshot.
/// Line numbers in errors are 1-based.
pub fn parse_snapshot(output: &str) -> Result<Snapshot, MuxError> {
    let mut panes = Vec::new();
    let mut ids = HashSet::new();
    let mut indices = HashSet::new();

    for (line_no, line) in output.lines().enumerate() {
        let line_no = line_no + 1;
        if line.is_empty() {
            continue;
        }
        let pane = parse_pane(line).map_err(|reason| MuxError::Malformed {
            line: line_no,
            reason,
        })?;

        if !ids.insert(pane.id.clone()) {
            return Err(MuxError::Malformed {
                line: line_no,
                reason: format!("duplicate pane id {}", pane.id),
            });
        }
        if !indices.insert(pane.index) {
            return Err(MuxError::Malformed {
                line: line_no,
                reason: format!("duplicate pane index {}", pane.index),
            });
        }
        panes.push(pane);
    }

    let active = panes.iter().filter(|pane| pane.active).count();
    if active > 1 {
        tracing::warn!(active, "several panes flagged active, using the first");
    }

    Ok(Snapshot::new(panes))
}

fn parse_pane(line: &str) -> Result<Pane, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        ));
    }

    Ok(Pane {
        id: fields[0].to_string(),
        index: number(fields[1], "pane_index")?,
        width: number(fields[2], "pane_width")?,
        height: number(fields[3], "pane_height")?,
        x: number(fields[4], "pane_left")?,
        y: number(fields[5], "pane_top")?,
        active: fields[6] == "1",
    })
}

fn number(raw: &str, field: &str) -> Result<u32, String> {
    raw.parse::<u32>()
        .map_err(|err| format!("{} {:?} is not a number: {}", field, raw, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tmux_listing() {
        let output = "%0,0,80,24,0,0,0\n%3,1,79,24,81,0,1\n";
        let snapshot = parse_snapshot(output).unwrap();

        assert_eq!(snapshot.panes().len(), 2);
        assert_eq!(
            snapshot.panes()[1],
            Pane {
                id: "%3".to_string(),
                index: 1,
                width: 79,
                height: 24,
                x: 81,
                y: 0,
                active: true,
            }
        );
        assert_eq!(snapshot.active().map(|p| p.id.as_str()), Some("%3"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let snapshot = parse_snapshot("\n%0,0,80,24,0,0,1\n\n").unwrap();
        assert_eq!(snapshot.panes().len(), 1);
        assert!(parse_snapshot("").unwrap().panes().is_empty());
    }

    #[test]
    fn only_literal_one_is_active() {
        let snapshot = parse_snapshot("%0,0,80,24,0,0,true\n%1,1,80,24,0,25,01\n").unwrap();
        assert!(snapshot.active().is_none());
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let err = parse_snapshot("%0,0,80,24,0,0,1\n%1,1,80,24\n").unwrap_err();
        assert!(matches!(err, MuxError::Malformed { line: 2, .. }));
    }

    #[test]
    fn non_numeric_geometry_is_malformed() {
        let err = parse_snapshot("%0,0,wide,24,0,0,1").unwrap_err();
        match err {
            MuxError::Malformed { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("pane_width"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_offsets_are_malformed() {
        assert!(parse_snapshot("%0,0,80,24,-1,0,1").is_err());
    }

    #[test]
    fn duplicate_ids_and_indices_are_malformed() {
        let dup_id = parse_snapshot("%0,0,80,24,0,0,1\n%0,1,80,24,0,25,0\n").unwrap_err();
        assert!(matches!(dup_id, MuxError::Malformed { line: 2, .. }));

        let dup_index = parse_snapshot("%0,0,80,24,0,0,1\n%1,0,80,24,0,25,0\n").unwrap_err();
        assert!(matches!(dup_index, MuxError::Malformed { line: 2, .. }));
    }

    #[test]
    fn carriage_returns_are_tolerated() {
        let snapshot = parse_snapshot("%0,0,80,24,0,0,1\r\n").unwrap();
        assert!(snapshot.panes()[0].active);
    }
}
