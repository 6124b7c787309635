mod helpers;

use helpers::CliRunner;

#[test]
fn help_lists_every_command() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["play", "sim", "deal", "eval", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn unknown_command_exits_with_two() {
    let cli = CliRunner::new();
    let res = cli.run(&["replay"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Commands:"));
}

#[test]
fn eval_ranks_seven_cards() {
    let cli = CliRunner::new();
    let res = cli.run(&["eval", "Kh", "Kd", "Ks", "2c", "2d", "9h", "4s"]);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("Best hand: Full House"), "{}", res.stdout);
}

#[test]
fn eval_accepts_a_single_quoted_list() {
    let cli = CliRunner::new();
    let res = cli.run(&["eval", "5c,4d,3h,2s,Ac"]);
    assert_eq!(res.exit_code, 0, "{}", res.stderr);
    assert!(res.stdout.contains("Best hand: Straight"), "{}", res.stdout);
}

#[test]
fn eval_rejects_duplicates() {
    let cli = CliRunner::new();
    let res = cli.run(&["eval", "As", "As", "Kd", "Qh", "Jc"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error:"));
}

#[test]
fn deal_is_reproducible_from_the_seed() {
    let cli = CliRunner::new();
    let a = cli.run(&["deal", "--seed", "2024", "--seats", "6"]);
    let b = cli.run(&["deal", "--seed", "2024", "--seats", "6"]);
    assert_eq!(a.exit_code, 0, "{}", a.stderr);
    assert_eq!(a.stdout, b.stdout);
    assert_eq!(a.stdout.lines().filter(|l| l.starts_with("Seat ") && l.contains("):")).count(), 6);
}

#[test]
fn deal_rejects_ten_seats() {
    let cli = CliRunner::new();
    let res = cli.run(&["deal", "--seats", "10"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("seats must be between 2 and 9"), "{}", res.stderr);
}
