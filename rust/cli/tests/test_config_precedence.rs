mod helpers;

use helpers::CliRunner;
use serde_json::Value;

fn cfg_json(cli: &CliRunner, env: &[(&str, &str)]) -> Value {
    let res = cli.run_with_env(&["cfg"], env);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg prints JSON")
}

#[test]
fn cfg_shows_defaults() {
    let cli = CliRunner::new();
    let json = cfg_json(&cli, &[]);
    assert_eq!(json["seats"]["value"], 6);
    assert_eq!(json["big_blind"]["value"], 20);
    assert_eq!(json["ai"]["value"], "baseline");
    assert_eq!(json["seed"]["source"], "default");
}

#[test]
fn env_beats_file_and_file_beats_default() {
    let cli = CliRunner::new();
    let path = cli.dir().join("holdem.toml");
    std::fs::write(&path, "seats = 3\nsmall_blind = 25\nbig_blind = 50\nseed = 1\n").unwrap();
    let path = path.to_string_lossy().into_owned();

    let json = cfg_json(
        &cli,
        &[("HOLDEM_CONFIG", path.as_str()), ("HOLDEM_SEED", "77"), ("HOLDEM_AI", "station")],
    );
    assert_eq!(json["seats"]["value"], 3);
    assert_eq!(json["seats"]["source"], "file");
    assert_eq!(json["big_blind"]["value"], 50);
    assert_eq!(json["seed"]["value"], 77);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["ai"]["source"], "env");
    assert_eq!(json["starting_stack"]["source"], "default");
}

#[test]
fn flags_beat_env() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(
        &["sim", "--hands", "1", "--seed", "5"],
        &[("HOLDEM_SEED", "9"), ("HOLDEM_SEATS", "2")],
    );
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.starts_with("sim: hands=1 seats=2 seed=5 "), "{}", res.stdout);
}

#[test]
fn invalid_config_fails_every_table_command() {
    let cli = CliRunner::new();
    let env = [("HOLDEM_SMALL_BLIND", "40"), ("HOLDEM_BIG_BLIND", "20")];
    for args in [&["cfg"][..], &["deal"][..], &["sim", "--hands", "1"][..]] {
        let res = cli.run_with_env(args, &env);
        assert_eq!(res.exit_code, 2, "{:?}", args);
        assert!(res.stderr.contains("big blind must be greater"), "{}", res.stderr);
    }
}

#[test]
fn malformed_config_file_is_reported() {
    let cli = CliRunner::new();
    let path = cli.dir().join("bad.toml");
    std::fs::write(&path, "seats = \"six\"\n").unwrap();
    let path = path.to_string_lossy().into_owned();
    let res = cli.run_with_env(&["cfg"], &[("HOLDEM_CONFIG", path.as_str())]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"), "{}", res.stderr);
}
