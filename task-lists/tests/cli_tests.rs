use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

fn cmd_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("task-lists").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn add_then_list_shows_a_started_task_with_id_zero() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .args(["add", "Buy milk", "2% milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added."));

    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Active tasks:"))
        .stdout(predicate::str::contains(
            "[0] - Buy milk - 2% milk - Status: Started",
        ));
}

#[test]
fn update_marks_a_task_completed() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["add", "Buy milk", "2% milk"])
        .assert()
        .success();

    cmd_in(&dir)
        .args(["update", "0", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'Buy milk' Status updated to: Completed"));

    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] - Buy milk - 2% milk - Status: Completed"));
}

#[test]
fn status_filter_narrows_the_active_listing() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir).args(["add", "Buy milk", ""]).assert().success();
    cmd_in(&dir)
        .args(["add", "Water plants", ""])
        .assert()
        .success();
    cmd_in(&dir).args(["update", "1", "3"]).assert().success();

    cmd_in(&dir)
        .args(["list", "--status", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Water plants"))
        .stdout(predicate::str::contains("Buy milk").not());
}

#[test]
fn edit_changes_only_the_given_field() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["add", "Buy milk", "2% milk"])
        .assert()
        .success();

    cmd_in(&dir)
        .args(["edit", "0", "--name", "Buy oat milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 'Buy oat milk' updated."));

    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[0] - Buy oat milk - 2% milk - Status: Started",
        ));
}

#[test]
fn remove_reports_the_removed_task_by_name() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["add", "Buy milk", "2% milk"])
        .assert()
        .success();

    cmd_in(&dir)
        .args(["remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task 'Buy milk' has been removed."));

    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No available tasks."));
}

#[test]
fn removing_an_unknown_id_reports_invalid_number_and_exits_zero() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .args(["remove", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid task number."));
}

#[test]
fn unknown_list_flag_aborts_without_creating_a_file() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .args(["add", "Buy milk", "2% milk", "--list", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List 'nope' does not exist."));

    assert!(!dir.path().join("nope.json").exists());
    assert!(!dir.path().join("default.json").exists());
}

#[test]
fn tasks_can_be_added_to_a_named_list() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir).args(["new-list", "work"]).assert().success();

    cmd_in(&dir)
        .args(["add", "Send report", "to accounting", "--list", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added."));

    cmd_in(&dir)
        .args(["list", "--list", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Send report"));

    // The default list is untouched.
    cmd_in(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Send report").not());
}

#[test]
fn lists_enumerates_created_lists() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["new-list", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created new list: work"));
    cmd_in(&dir).args(["new-list", "home"]).assert().success();

    cmd_in(&dir)
        .arg("lists")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available task lists:"))
        .stdout(predicate::str::contains("- home"))
        .stdout(predicate::str::contains("- work"));
}

#[test]
fn deleting_the_default_list_falls_back_to_it() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["add", "Buy milk", "2% milk"])
        .assert()
        .success();

    cmd_in(&dir)
        .args(["delete-list", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List 'default' has been deleted."))
        .stdout(predicate::str::contains("Switched to the default task list."));

    assert!(!dir.path().join("default.json").exists());
}

#[test]
fn deleting_an_unknown_list_reports_not_found() {
    let dir = TempDir::new().unwrap();

    cmd_in(&dir)
        .args(["delete-list", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List 'nope' does not exist."));
}
