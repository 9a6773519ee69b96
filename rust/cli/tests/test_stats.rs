use std::fs;
use std::io::Cursor;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(Vec::<u8>::new());
    let code = ecard_cli::run_with_input(args, &mut out, &mut err, &mut stdin);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

/// Builds a transcript by running sim, so stats always sees the real format.
fn write_transcript(path: &std::path::Path, sessions: u32) {
    let arg = path.to_string_lossy().into_owned();
    let sessions_arg = sessions.to_string();
    let (code, _out, _err) = run(&[
        "ecard", "sim", "--sessions", &sessions_arg, "--seed", "17", "--output", &arg,
    ]);
    assert_eq!(code, 0, "sim should produce the transcript");
}

#[test]
fn stats_summarizes_a_transcript() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("sessions.jsonl");
    write_transcript(&path, 6);

    let arg = path.to_string_lossy().into_owned();
    let (code, out, _err) = run(&["ecard", "stats", "--input", &arg]);
    assert_eq!(code, 0);
    assert!(out.contains("sessions: 6"));
    assert!(out.contains("player card usage:"));
    assert!(out.contains("Citizen:"));
}

#[test]
fn stats_skips_malformed_lines_with_a_warning() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("mixed.jsonl");
    write_transcript(&path, 2);

    let mut contents = fs::read_to_string(&path).expect("read");
    contents.push_str("this is not json\n");
    fs::write(&path, contents).expect("append garbage");

    let arg = path.to_string_lossy().into_owned();
    let (code, out, err) = run(&["ecard", "stats", "--input", &arg]);
    assert_eq!(code, 0, "valid records still count");
    assert!(out.contains("sessions: 2"));
    assert!(err.contains("Failed to parse"), "stderr: {}", err);
}

#[test]
fn stats_rejects_a_file_with_no_valid_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("empty.jsonl");
    fs::write(&path, "\n\n").expect("write empty");

    let arg = path.to_string_lossy().into_owned();
    let (code, _out, err) = run(&["ecard", "stats", "--input", &arg]);
    assert_eq!(code, 2);
    assert!(err.contains("no valid session records"));
}

#[test]
fn stats_round_totals_match_the_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("rounds.jsonl");
    write_transcript(&path, 4);

    let expected: usize = fs::read_to_string(&path)
        .expect("read")
        .lines()
        .map(|l| {
            let r: ecard_engine::record::SessionRecord =
                serde_json::from_str(l).expect("parse");
            r.rounds.len()
        })
        .sum();

    let arg = path.to_string_lossy().into_owned();
    let (code, out, _err) = run(&["ecard", "stats", "--input", &arg]);
    assert_eq!(code, 0);
    assert!(out.contains(&format!("total rounds: {}", expected)));
}
