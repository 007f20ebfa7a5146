//! CLI integration tests for tasktracker
//!
//! These tests drive the binary against a temporary data directory, starting
//! from the sample data every fresh tracker gets.

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get a command instance isolated from the user's config and data
fn tracker_cmd(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("tasktracker"));
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("TASKTRACKER_DATA_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Command bound to the `data` directory inside `dir`
fn data_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = tracker_cmd(dir.path());
    cmd.arg("--data-dir").arg(dir.path().join("tracker"));
    cmd
}

fn json_output(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.arg("--format").arg("json").output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Initialization Tests
// =============================================================================

#[test]
fn test_init_creates_local_dir() {
    let dir = TempDir::new().unwrap();

    tracker_cmd(dir.path())
        .arg("init")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized tracker"));

    assert!(dir.path().join(".tasktracker").is_dir());
}

#[test]
fn test_local_dir_used_from_subdirectory() {
    let dir = TempDir::new().unwrap();
    tracker_cmd(dir.path()).arg("init").arg(dir.path()).assert().success();

    let sub = dir.path().join("src").join("deep");
    fs::create_dir_all(&sub).unwrap();

    tracker_cmd(dir.path())
        .current_dir(&sub)
        .args(["subject", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Work"));

    assert!(dir.path().join(".tasktracker/subjects.json").is_file());
    assert!(dir.path().join(".tasktracker/tasks.json").is_file());
}

#[test]
fn test_init_is_idempotent() {
    let dir = TempDir::new().unwrap();

    tracker_cmd(dir.path()).arg("init").arg(dir.path()).assert().success();
    tracker_cmd(dir.path()).arg("init").arg(dir.path()).assert().success();
}

// =============================================================================
// Subject Tests
// =============================================================================

#[test]
fn test_fresh_tracker_has_sample_subjects() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["subject", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Work"))
        .stdout(predicate::str::contains("Personal"))
        .stdout(predicate::str::contains("Study"))
        .stdout(predicate::str::contains("Health"));
}

#[test]
fn test_subject_add() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["subject", "add", "  Errands  "])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Category \"Errands\" added successfully",
        ));

    let subjects = json_output(data_cmd(&dir).args(["subject", "list"]));
    let last = &subjects.as_array().unwrap()[4];
    assert_eq!(last["id"], 5);
    assert_eq!(last["name"], "Errands");
    assert_eq!(last["tasks"], 0);
}

#[test]
fn test_subject_add_duplicate_fails() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["subject", "add", "WORK"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Category with this name already exists",
        ));
}

#[test]
fn test_subject_clear_needs_confirmation() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["subject", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    data_cmd(&dir)
        .args(["subject", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All categories and tasks cleared"));

    data_cmd(&dir)
        .args(["subject", "clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories to clear"));

    let tasks = json_output(data_cmd(&dir).args(["task", "list"]));
    assert_eq!(tasks, serde_json::json!([]));
}

// =============================================================================
// Task Tests
// =============================================================================

#[test]
fn test_task_add_and_list() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args([
            "task",
            "add",
            "Plan garden",
            "--subject",
            "personal",
            "--due",
            "2099-04-01",
            "--priority",
            "high",
            "--description",
            "Tomatoes and basil",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully"));

    let tasks = json_output(data_cmd(&dir).args(["task", "list", "--subject", "2"]));
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 2);

    let added = tasks.iter().find(|t| t["title"] == "Plan garden").unwrap();
    assert_eq!(added["id"], 6);
    assert_eq!(added["category"], "Personal");
    assert_eq!(added["dueDate"], "2099-04-01");
    assert_eq!(added["priority"], "high");
    assert_eq!(added["completed"], false);
    assert_eq!(added["label"], "upcoming");
}

#[test]
fn test_task_add_unknown_category_name_fails() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "add", "Orphan", "--subject", "Garden"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found"));
}

#[test]
fn test_task_add_blank_title_fails() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "add", "   ", "--subject", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill all required fields"));
}

#[test]
fn test_task_add_bad_date_fails() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "add", "Dated", "--subject", "1", "--due", "31/12/2099"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid due date"));
}

#[test]
fn test_task_list_status_filter() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed Tasks (1)"))
        .stdout(predicate::str::contains("Read Book Chapter"))
        .stdout(predicate::str::contains("Gym Session").not());
}

#[test]
fn test_task_list_search() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "list", "--search", "GYM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gym Session"))
        .stdout(predicate::str::contains("Team Meeting").not());

    data_cmd(&dir)
        .args(["task", "list", "--search", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found for \"zzz\""));
}

#[test]
fn test_task_list_filters_conflict() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "list", "--status", "pending", "--search", "gym"])
        .assert()
        .failure();
}

#[test]
fn test_task_toggle() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task completed! Great job!"));

    data_cmd(&dir)
        .args(["task", "toggle", "#1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task marked as pending"));

    data_cmd(&dir)
        .args(["task", "toggle", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task not found: #99"));
}

#[test]
fn test_task_edit() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "edit", "2", "--title", "Evening run", "--priority", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task updated successfully"));

    data_cmd(&dir)
        .args(["task", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Evening run"))
        .stdout(predicate::str::contains("Low Priority"))
        .stdout(predicate::str::contains("Category: Health"));

    data_cmd(&dir)
        .args(["task", "edit", "2", "--title", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please fill all required fields"));
}

#[test]
fn test_task_show_missing() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task not found"));
}

#[test]
fn test_task_delete_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "delete", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    data_cmd(&dir)
        .args(["task", "delete", "4", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task deleted successfully"));

    data_cmd(&dir)
        .args(["task", "show", "4"])
        .assert()
        .failure();
}

#[test]
fn test_clear_completed() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .args(["task", "clear-completed", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared 1 completed tasks"));

    data_cmd(&dir)
        .args(["task", "clear-completed", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed tasks to clear"));
}

// =============================================================================
// Dashboard Tests
// =============================================================================

#[test]
fn test_stats_on_sample_data() {
    let dir = TempDir::new().unwrap();

    let value = json_output(data_cmd(&dir).arg("stats"));
    let stats = &value["stats"];
    assert_eq!(stats["total"], 5);
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["pending"], 4);
    assert_eq!(stats["productivity"], 20);
    assert_eq!(stats["today"]["total"], 4);
    assert_eq!(stats["today"]["percent"], 25);
    assert_eq!(stats["deadlines"].as_array().unwrap().len(), 3);
}

#[test]
fn test_stats_text() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Productivity: 20%"))
        .stdout(predicate::str::contains("Today's progress: 1/4 (25%)"));
}

// =============================================================================
// Data Tests
// =============================================================================

#[test]
fn test_export_reset_import() {
    let dir = TempDir::new().unwrap();
    let backup = dir.path().join("backup.json");

    data_cmd(&dir)
        .arg("export")
        .arg("--output")
        .arg(&backup)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks exported successfully"));

    let content = fs::read_to_string(&backup).unwrap();
    assert!(content.contains("\"exportDate\""));
    assert!(content.contains("\n  \"subjects\""));

    data_cmd(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("App reset to initial state"));

    let tasks = json_output(data_cmd(&dir).args(["task", "list"]));
    assert_eq!(tasks, serde_json::json!([]));

    data_cmd(&dir)
        .arg("import")
        .arg(&backup)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks imported successfully"));

    let tasks = json_output(data_cmd(&dir).args(["task", "list"]));
    assert_eq!(tasks.as_array().unwrap().len(), 5);
}

#[test]
fn test_export_to_stdout() {
    let dir = TempDir::new().unwrap();

    let output = data_cmd(&dir).args(["export", "--output", "-"]).output().unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["subjects"].as_array().unwrap().len(), 4);
    assert_eq!(doc["tasks"].as_array().unwrap().len(), 5);
}

#[test]
fn test_import_malformed_file_keeps_data() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ this is not json").unwrap();

    data_cmd(&dir)
        .arg("import")
        .arg(&bad)
        .arg("--yes")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error importing file. Please check the file format.",
        ));

    let tasks = json_output(data_cmd(&dir).args(["task", "list"]));
    assert_eq!(tasks.as_array().unwrap().len(), 5);
}

#[test]
fn test_import_partial_document() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("subjects-only.json");
    fs::write(&file, r#"{"subjects": [{"id": 7, "name": "Garden"}]}"#).unwrap();

    data_cmd(&dir)
        .arg("import")
        .arg(&file)
        .arg("--yes")
        .assert()
        .success();

    let subjects = json_output(data_cmd(&dir).args(["subject", "list"]));
    assert_eq!(subjects, serde_json::json!([{"id": 7, "name": "Garden", "tasks": 0}]));

    let tasks = json_output(data_cmd(&dir).args(["task", "list"]));
    assert_eq!(tasks, serde_json::json!([]));
}

#[test]
fn test_theme() {
    let dir = TempDir::new().unwrap();

    data_cmd(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("light"));

    data_cmd(&dir).args(["theme", "dark"]).assert().success();

    data_cmd(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("dark"));

    assert_eq!(
        fs::read_to_string(dir.path().join("tracker/theme")).unwrap(),
        "dark"
    );
}

#[test]
fn test_corrupt_subjects_file_is_recovered() {
    let dir = TempDir::new().unwrap();
    data_cmd(&dir).args(["subject", "list"]).assert().success();

    fs::write(dir.path().join("tracker/subjects.json"), "{broken").unwrap();

    data_cmd(&dir)
        .args(["subject", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No categories"));

    let tasks = json_output(data_cmd(&dir).args(["task", "list"]));
    assert_eq!(tasks.as_array().unwrap().len(), 5);
}

#[test]
fn test_config_disables_seeding() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config").join("tasktracker");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "seed_samples = false\n").unwrap();

    data_cmd(&dir)
        .args(["task", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks added yet"));
}

#[test]
fn test_config_default_format() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config").join("tasktracker");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "default_format = \"json\"\n").unwrap();

    data_cmd(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("{\"theme\":\"light\"}"));
}
