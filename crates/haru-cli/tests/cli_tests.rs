use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command running against the in-process
/// store, with plain output and no remote configuration leaking in from
/// the environment.
fn haru_cmd() -> Command {
    let mut cmd = Command::cargo_bin("haru").expect("Failed to find haru binary");
    cmd.arg("--no-color");
    cmd.env_remove("HARU_DATABASE_URL");
    cmd.env_remove("HARU_AUTH_TOKEN");
    cmd.env_remove("HARU_COLLECTION");
    cmd
}

#[test]
fn test_cli_list_empty_shows_placeholder() {
    haru_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("할 일이 없습니다."))
        .stdout(predicate::str::contains("새로운 할 일을 추가해보세요!"));
}

#[test]
fn test_cli_no_command_renders_list() {
    haru_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("할 일 목록"));
}

#[test]
fn test_cli_add_renders_confirmed_task() {
    haru_cmd()
        .args([
            "add",
            "Buy milk",
            "--date",
            "2024-03-05",
            "--time",
            "09:30",
            "--category",
            "home",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("가정"))
        .stdout(predicate::str::contains("3월 5일"))
        .stdout(predicate::str::contains("09:30"));
}

#[test]
fn test_cli_add_with_empty_text_is_silent() {
    haru_cmd()
        .args(["add", "", "--date", "2024-03-05", "--time", "09:30"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_add_rejects_malformed_date() {
    haru_cmd()
        .args(["add", "Task", "--date", "03/05/2024", "--time", "09:30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input for field 'date'"));
}

#[test]
fn test_cli_add_rejects_unknown_category() {
    haru_cmd()
        .args(["add", "Task", "--category", "groceries"])
        .assert()
        .failure();
}

#[test]
fn test_cli_delete_without_yes_only_asks() {
    haru_cmd()
        .args(["delete", "some-id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("정말 삭제하시겠습니까?"));
}

#[test]
fn test_cli_toggle_unknown_id_is_silent() {
    haru_cmd()
        .args(["toggle", "missing-id"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_help_mentions_intents() {
    haru_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("toggle"))
        .stdout(predicate::str::contains("watch"));
}
