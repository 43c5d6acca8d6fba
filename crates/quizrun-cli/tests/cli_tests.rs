//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizrun() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("quizrun").unwrap()
}

#[test]
fn validate_structured_bank() {
    quizrun()
        .arg("validate")
        .arg("--bank")
        .arg("../../banks/security-basics.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("5 questions"))
        .stdout(predicate::str::contains("Bank is valid"));
}

#[test]
fn validate_flat_bank() {
    quizrun()
        .arg("validate")
        .arg("--bank")
        .arg("../../banks/security-basics.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 questions"))
        .stdout(predicate::str::contains("Bank is valid"));
}

#[test]
fn validate_reports_skipped_flat_blocks() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("mixed.txt");
    std::fs::write(
        &bank,
        "Question 1: Fine?\nA) a\nB) b\nC) c\nD) d\nAnswer: A\n\n\
         Question 2: Broken?\nA) only\nB) two\n\n\
         Question 3: Also fine?\nA) a\nB) b\nC) c\nD) d\nAnswer: D\n",
    )
    .unwrap();

    quizrun()
        .arg("validate")
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 questions"))
        .stdout(predicate::str::contains("1 warning(s) found"));
}

#[test]
fn validate_reports_answer_text_mismatch() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("mismatch.json");
    std::fs::write(
        &bank,
        r#"[{"question": "2 + 2?", "options": ["3", "4", "5", "6"], "answer": "B", "answer_text": "5"}]"#,
    )
    .unwrap();

    quizrun()
        .arg("validate")
        .arg("--bank")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 questions"))
        .stdout(predicate::str::contains("answer_text"));
}

#[test]
fn validate_nonexistent_bank() {
    quizrun()
        .arg("validate")
        .arg("--bank")
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_rejects_invalid_answer_letter() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("bad.json");
    std::fs::write(
        &bank,
        r#"[{"question": "2 + 2?", "options": ["3", "4", "5", "6"], "answer": "7"}]"#,
    )
    .unwrap();

    quizrun()
        .arg("validate")
        .arg("--bank")
        .arg(&bank)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unresolvable answer"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    quizrun()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created quizrun.toml"))
        .stdout(predicate::str::contains("Created banks/example.json"));

    assert!(dir.path().join("quizrun.toml").exists());
    assert!(dir.path().join("banks/example.json").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    quizrun()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizrun()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_output_is_a_valid_bank() {
    let dir = TempDir::new().unwrap();

    quizrun()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    quizrun()
        .current_dir(dir.path())
        .arg("validate")
        .arg("--bank")
        .arg("banks/example.json")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bank is valid"));
}

#[test]
fn convert_flat_to_structured() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("questions.txt");
    let output = dir.path().join("questions.json");
    std::fs::write(
        &input,
        "Question 1: Fine?\nA) a\nB) b\nC) c\nD) d\nAnswer: A\n\n\
         Question 2: Broken?\nA) only\n\n\
         Question 3: Also fine?\nA) a\nB) b\nC) c\nD) d\nAnswer: D\n",
    )
    .unwrap();

    quizrun()
        .arg("convert")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 2 questions"));

    // the converted bank loads through the structured parser
    quizrun()
        .arg("validate")
        .arg("--bank")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 questions"))
        .stdout(predicate::str::contains("Bank is valid"));
}

#[test]
fn convert_nonexistent_input() {
    quizrun()
        .arg("convert")
        .arg("--input")
        .arg("no_such_bank.txt")
        .arg("--output")
        .arg("out.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn history_with_no_log() {
    let dir = TempDir::new().unwrap();

    quizrun()
        .arg("history")
        .arg("--file")
        .arg(dir.path().join("scores.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No recorded sessions"));
}

#[test]
fn history_renders_entries_and_totals() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("scores.json");
    std::fs::write(
        &log,
        r#"[
            {"timestamp": "2024-03-01T12:00:00Z", "score": 3, "total": 5,
             "category_stats": {"Geography": {"correct": 2, "total": 3}}},
            {"timestamp": "2024-03-02T12:00:00Z", "score": 4, "total": 5}
        ]"#,
    )
    .unwrap();

    quizrun()
        .arg("history")
        .arg("--file")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("3/5"))
        .stdout(predicate::str::contains("4/5"))
        .stdout(predicate::str::contains("2 session(s), 7/10 lifetime (70.0%)"))
        .stdout(predicate::str::contains("Geography"));
}

#[test]
fn help_output() {
    quizrun()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Randomized multiple-choice quiz runner"));
}

#[test]
fn version_output() {
    quizrun()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quizrun"));
}
