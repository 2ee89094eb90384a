//! # Radiomap Reader
//!
//! `radiomaps.dat` lists frequencies already claimed elsewhere in the
//! theater, one `callsign, uhf_khz, victor_khz` record per line with
//! optional `//` trailing comments. Only the UHF values matter here: they
//! are reserved and never handed out by the pool.

use std::collections::BTreeSet;
use std::io::BufRead;

use crate::band::FreqKhz;
use crate::error::{FreqGenError, Result};

/// One parsed radiomap record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiomapEntry {
    pub callsign: String,
    pub uhf_khz: FreqKhz,
    /// Kept as text; the VHF column is never validated.
    pub victor: String,
}

/// Parse one radiomap line. `line_no` is 1-based and only used in errors.
///
/// Returns `Ok(None)` for blank or comment-only lines and for records whose
/// UHF column is not an integer (placeholders are tolerated). A record with
/// any field count other than three is
/// [`FreqGenError::MalformedRadiomapRecord`].
pub fn parse_radiomap_line(line: &str, line_no: usize) -> Result<Option<RadiomapEntry>> {
    let content = match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    }
    .trim();
    if content.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = content.split(',').map(str::trim).collect();
    let [callsign, uhf, victor] = fields[..] else {
        return Err(FreqGenError::MalformedRadiomapRecord {
            line: line_no,
            fields: fields.len(),
        });
    };

    let Ok(uhf_khz) = uhf.parse::<FreqKhz>() else {
        tracing::debug!(
            line = line_no,
            callsign,
            uhf,
            "skipping radiomap record with non-numeric UHF"
        );
        return Ok(None);
    };

    Ok(Some(RadiomapEntry {
        callsign: callsign.to_string(),
        uhf_khz,
        victor: victor.to_string(),
    }))
}

/// Read a whole radiomap and collect the reserved UHF frequencies.
pub fn read_reserved_frequencies<R: BufRead>(reader: R) -> Result<BTreeSet<FreqKhz>> {
    let mut reserved = BTreeSet::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(entry) = parse_radiomap_line(&line, idx + 1)? {
            reserved.insert(entry.uhf_khz);
        }
    }
    Ok(reserved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_record_with_comment() {
        let entry = parse_radiomap_line(" KUNSAN , 292300 , 126200 // wolfpack", 3)
            .unwrap()
            .unwrap();
        assert_eq!(entry.callsign, "KUNSAN");
        assert_eq!(entry.uhf_khz, 292_300);
        assert_eq!(entry.victor, "126200");
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert!(parse_radiomap_line("", 1).unwrap().is_none());
        assert!(parse_radiomap_line("   ", 1).unwrap().is_none());
        assert!(parse_radiomap_line("// OSAN, 300000, 0", 1).unwrap().is_none());
    }

    #[test]
    fn non_numeric_uhf_is_tolerated() {
        assert!(parse_radiomap_line("OSAN, xxx, 0", 1).unwrap().is_none());
        assert!(parse_radiomap_line("OSAN, , 0", 1).unwrap().is_none());
    }

    #[test]
    fn wrong_field_count_is_fatal() {
        let err = parse_radiomap_line("OSAN, 300000", 12).unwrap_err();
        assert!(matches!(
            err,
            FreqGenError::MalformedRadiomapRecord { line: 12, fields: 2 }
        ));

        let err = parse_radiomap_line("OSAN, 300000, 0, extra // note", 4).unwrap_err();
        assert!(matches!(
            err,
            FreqGenError::MalformedRadiomapRecord { line: 4, fields: 4 }
        ));
    }

    #[test]
    fn reads_reserved_set() {
        let input = "\
// Korea radiomap
OSAN, 300000, 126500
KUNSAN, 292300, 126200 // duplicate below

PLACEHOLDER, TBD, 0
KUNSAN2, 292300, 0
";
        let reserved = read_reserved_frequencies(Cursor::new(input)).unwrap();
        assert_eq!(reserved, BTreeSet::from([292_300, 300_000]));
    }

    #[test]
    fn malformed_record_reports_line_number() {
        let input = "OSAN, 300000, 0\n\nBROKEN\n";
        let err = read_reserved_frequencies(Cursor::new(input)).unwrap_err();
        assert!(matches!(
            err,
            FreqGenError::MalformedRadiomapRecord { line: 3, fields: 1 }
        ));
    }
}
