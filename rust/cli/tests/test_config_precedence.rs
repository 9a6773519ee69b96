use serial_test::serial;
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

fn clear_env() {
    for key in ["ECARD_CONFIG", "ECARD_ROLE", "ECARD_SEED", "ECARD_LOG"] {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
#[serial]
fn cfg_defaults_when_nothing_is_set() {
    clear_env();
    let (code, out, _err) = run(&["ecard", "cfg"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("cfg emits JSON");
    assert_eq!(parsed["seed"]["source"], "default");
    assert_eq!(parsed["role"]["source"], "default");
    assert!(parsed["seed"]["value"].is_null());
}

#[test]
#[serial]
fn env_values_override_defaults() {
    clear_env();
    unsafe {
        std::env::set_var("ECARD_SEED", "123");
        std::env::set_var("ECARD_ROLE", "slave");
    }
    let (code, out, _err) = run(&["ecard", "cfg"]);
    clear_env();
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("cfg emits JSON");
    assert_eq!(parsed["seed"]["value"], 123);
    assert_eq!(parsed["seed"]["source"], "env");
    assert_eq!(parsed["role"]["value"], "slave");
    assert_eq!(parsed["role"]["source"], "env");
}

#[test]
#[serial]
fn file_values_load_and_env_wins_over_file() {
    clear_env();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ecard.toml");
    std::fs::write(&path, "role = \"emperor\"\nseed = 99\n").expect("write config");
    unsafe {
        std::env::set_var("ECARD_CONFIG", path.to_string_lossy().as_ref());
        std::env::set_var("ECARD_SEED", "7");
    }
    let (code, out, _err) = run(&["ecard", "cfg"]);
    clear_env();
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("cfg emits JSON");
    assert_eq!(parsed["role"]["value"], "emperor");
    assert_eq!(parsed["role"]["source"], "file");
    assert_eq!(parsed["seed"]["value"], 7);
    assert_eq!(parsed["seed"]["source"], "env");
}

#[test]
#[serial]
fn invalid_env_seed_fails_the_command() {
    clear_env();
    unsafe { std::env::set_var("ECARD_SEED", "not-a-number") };
    let (code, _out, err) = run(&["ecard", "cfg"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("Invalid configuration"));
}

#[test]
#[serial]
fn invalid_role_in_file_fails_the_command() {
    clear_env();
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "role = \"citizen\"\n").expect("write config");
    unsafe { std::env::set_var("ECARD_CONFIG", path.to_string_lossy().as_ref()) };
    let (code, _out, err) = run(&["ecard", "cfg"]);
    clear_env();
    assert_eq!(code, 2);
    assert!(err.contains("role must be emperor or slave"));
}

#[test]
#[serial]
fn play_seed_flag_beats_the_environment() {
    clear_env();
    unsafe { std::env::set_var("ECARD_SEED", "500") };
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(b"q\n".to_vec());
    let code = ecard_cli::run_with_input(
        ["ecard", "play", "--role", "emperor", "--seed", "42"],
        &mut out,
        &mut err,
        &mut stdin,
    );
    clear_env();
    assert_eq!(code, 0);
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("play: seed=42"), "flag wins: {}", out);
}
