//! Integration tests for cue table conversion

use disguisetool::cue::{self, CueSelectMode, CueTable};
use std::fs;
use tempfile::TempDir;

const SAMPLE_TABLE: &str = "Cue table for Act One\r\n\
    Beat\tTag\tNote\tTrack_Time\tTC_Time\r\n\
    1\tCUE 00.01.00\tPreset\t0:00.00\t00:00:00:00\r\n\
    9\tCUE 5\tHouse out\t0:04.00\t00:00:04:00\r\n\
    17\tCUE 00.10.50\tBlackout\t0:08.00\t00:00:08:00\r\n\
    25\tsome note\t\t0:12.00\t00:00:12:00\r\n";

#[test]
fn test_read_table_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("act_one.txt");
    fs::write(&path, SAMPLE_TABLE).unwrap();

    let table = CueTable::read(&path).unwrap();
    assert_eq!(table.track_name, "Act One");
    assert_eq!(table.entries.len(), 4);
    assert_eq!(table.entries[1].tag.as_deref(), Some("CUE 5"));
}

#[test]
fn test_table_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("act_one.txt");
    let copy = dir.path().join("act_one_copy.txt");
    fs::write(&source, SAMPLE_TABLE).unwrap();

    let table = CueTable::read(&source).unwrap();
    table.write(&copy).unwrap();

    assert_eq!(CueTable::read(&copy).unwrap(), table);
    // disguise expects CRLF line endings
    let written = fs::read_to_string(&copy).unwrap();
    assert!(written.contains("\r\n"));
}

#[test]
fn test_cue_list_conversion_end_to_end() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("act_one.txt");
    let output = dir.path().join("act_one_cues.csv");
    fs::write(&source, SAMPLE_TABLE).unwrap();

    let table = CueTable::read(&source).unwrap();
    let cues = cue::extract_cues(&table, CueSelectMode::All);
    cue::write_eos_csv(&cues, &output).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Cue,Label,Timecode");
    // Ordered by numeric cue value: 00.01.00 = 1, 5, 00.10.50 = 10.5
    assert_eq!(lines[1], "00.01.00,Preset,00:00:00:00");
    assert_eq!(lines[2], "5,House out,00:00:04:00");
    assert_eq!(lines[3], "00.10.50,Blackout,00:00:08:00");
}

#[test]
fn test_dmx_only_selection() {
    let table = CueTable::parse(SAMPLE_TABLE).unwrap();
    let cues = cue::extract_cues(&table, CueSelectMode::DmxOnly);
    assert_eq!(cues.len(), 2);
    assert!(cues.iter().all(|c| c.dmx_format));
}

#[test]
fn test_standard_only_selection() {
    let table = CueTable::parse(SAMPLE_TABLE).unwrap();
    let cues = cue::extract_cues(&table, CueSelectMode::StandardOnly);
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].number, "5");
}
