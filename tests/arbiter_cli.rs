use assert_cmd::{cargo::cargo_bin, Command};
use indoc::indoc;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn randbot() -> String {
    cargo_bin("randbot").display().to_string()
}

/// Write a shell bot and return the command launching it
fn shell_bot(script: &str) -> (NamedTempFile, String) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(script.as_bytes()).unwrap();
    file.flush().unwrap();
    let command = format!("sh {}", file.path().display());
    (file, command)
}

fn arbiter(player1: &str, player2: &str) -> Command {
    let mut cmd = Command::cargo_bin("arbiter").unwrap();
    cmd.env_remove("ARBITER_PLAYER1")
        .env_remove("ARBITER_PLAYER2")
        .args(["--player1", player1, "--player2", player2]);
    cmd
}

#[test]
fn test_random_bots_play_to_a_result() {
    let bot = randbot();
    arbiter(&bot, &bot)
        .env("RANDBOT_SEED", "7")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("=== MATCH START ===")
                .and(predicate::str::contains("Player1 -> "))
                .and(predicate::str::contains("=== MATCH END ==="))
                .and(predicate::str::contains("Final position: "))
                .and(predicate::str::is_match(r"RESULT (Player[12] WINS!|DRAW!)").unwrap()),
        );
}

#[test]
fn test_move_cap_is_configurable() {
    let bot = randbot();
    arbiter(&bot, &bot)
        .args(["--set", "maxmoves=4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moves played: 4"));
}

#[test]
fn test_invalid_move_disqualifies() {
    let (_file, cheater) = shell_bot(indoc! {"
        read -r line
        echo 2R
        while read -r line; do :; done
    "});

    arbiter(&cheater, &randbot())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Player1 -> 2R")
                .and(predicate::str::contains(
                    "RESULT Player1 disqualified (invalid move: 2R)",
                ))
                .and(predicate::str::contains("Player2 wins by disqualification!"))
                .and(predicate::str::contains("=== MATCH END ===").not()),
        );
}

#[test]
fn test_silent_bot_times_out() {
    let (_file, silent) = shell_bot(indoc! {"
        while read -r line; do :; done
    "});

    arbiter(&randbot(), &silent)
        .args(["--timeout-ms", "300"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("RESULT Player2 disqualified (timeout)")
                .and(predicate::str::contains("Player1 wins by disqualification!")),
        );
}

#[test]
fn test_pass_ends_the_match() {
    let (_file, passer) = shell_bot(indoc! {"
        read -r line
        echo NOMOVE
        while read -r line; do :; done
    "});

    arbiter(&passer, &randbot())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Player1 -> NOMOVE (no move available)")
                .and(predicate::str::contains("Moves played: 0"))
                .and(predicate::str::contains("RESULT DRAW!")),
        );
}

#[test]
fn test_missing_bot_fails_without_result() {
    arbiter("/nonexistent/awale-bot", &randbot())
        .assert()
        .failure()
        .stdout(predicate::str::contains("RESULT").not());
}

#[test]
fn test_bad_override_is_rejected() {
    let bot = randbot();
    arbiter(&bot, &bot)
        .args(["--set", "colour=red"])
        .assert()
        .failure();
}
