#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hub(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hub").unwrap();
    cmd.current_dir(dir.path()).env("HUB_ROOT", dir.path());
    cmd
}

fn stdout_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = hub(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).unwrap()
}

// ---------------------------------------------------------------------------
// hub init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_hub_dir() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("project ideas"));

    assert!(dir.path().join(".hub").is_dir());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    hub(&dir).arg("init").assert().success();
    hub(&dir).arg("init").assert().success();
}

#[test]
fn init_adds_gitignore_entry_inside_git_repo() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    std::fs::write(dir.path().join(".gitignore"), "target/\n").unwrap();

    hub(&dir).arg("init").assert().success();

    let content = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
    assert!(content.contains("target/"));
    assert!(content.contains(".hub/"));
}

#[test]
fn init_does_not_duplicate_gitignore_entry() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    hub(&dir).arg("init").assert().success();
    hub(&dir).arg("init").assert().success();

    let content = std::fs::read_to_string(dir.path().join(".gitignore")).unwrap();
    assert_eq!(content.matches(".hub/").count(), 1);
}

#[test]
fn init_leaves_gitignore_alone_outside_git_repo() {
    let dir = TempDir::new().unwrap();
    hub(&dir).arg("init").assert().success();
    assert!(!dir.path().join(".gitignore").exists());
}

// ---------------------------------------------------------------------------
// hub ideas
// ---------------------------------------------------------------------------

#[test]
fn ideas_list_shows_catalog() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["ideas", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("task-cli"))
        .stdout(predicate::str::contains("chat-room"));
}

#[test]
fn ideas_list_filters_by_difficulty() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["ideas", "list", "--difficulty", "beginner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("task-cli"))
        .stdout(predicate::str::contains("chat-room").not());
}

#[test]
fn ideas_list_filters_by_category() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["ideas", "list", "--category", "developer-tools"])
        .assert()
        .success()
        .stdout(predicate::str::contains("task-cli"))
        .stdout(predicate::str::contains("markdown-blog").not());
}

#[test]
fn ideas_list_requires_every_skill_filter() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["ideas", "list", "--skill", "React", "--skill", "TypeScript"])
        .assert()
        .success()
        .stdout(predicate::str::contains("flashcard-trainer"))
        .stdout(predicate::str::contains("chat-room").not());
}

#[test]
fn ideas_list_search_matches_description() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["ideas", "list", "--search", "terminal to-do"])
        .assert()
        .success()
        .stdout(predicate::str::contains("task-cli"));
}

#[test]
fn ideas_list_rejects_unknown_difficulty() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["ideas", "list", "--difficulty", "heroic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid difficulty"));
}

#[test]
fn ideas_show_prints_details() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["ideas", "show", "task-cli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Task Tracker CLI"))
        .stdout(predicate::str::contains("CLI Design"));
}

#[test]
fn ideas_show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["ideas", "show", "not-a-project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown project id"));
}

// ---------------------------------------------------------------------------
// hub project
// ---------------------------------------------------------------------------

#[test]
fn project_set_and_show() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["project", "set", "task-cli", "in-progress"])
        .assert()
        .success();

    hub(&dir)
        .args(["project", "show", "task-cli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in-progress"));
}

#[test]
fn project_status_persists_across_invocations() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["project", "set", "markdown-blog", "completed"])
        .assert()
        .success();

    assert!(dir.path().join(".hub/project-statuses.json").exists());

    hub(&dir)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown-blog"))
        .stdout(predicate::str::contains("completed"));
}

#[test]
fn project_list_filters_by_status() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["project", "set", "task-cli", "in-progress"])
        .assert()
        .success();
    hub(&dir)
        .args(["project", "set", "markdown-blog", "completed"])
        .assert()
        .success();

    hub(&dir)
        .args(["project", "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("markdown-blog"))
        .stdout(predicate::str::contains("task-cli").not());
}

#[test]
fn project_set_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["project", "set", "not-a-project", "completed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown project id"));
}

#[test]
fn project_set_invalid_status_fails() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["project", "set", "task-cli", "finished"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status"));
}

#[test]
fn started_at_survives_completion() {
    let dir = TempDir::new().unwrap();

    let first = stdout_json(&dir, &["project", "set", "task-cli", "in-progress", "--json"]);
    let started = first["record"]["startedAt"].as_str().unwrap().to_string();
    assert!(first["record"].get("completedAt").is_none());

    let second = stdout_json(&dir, &["project", "set", "task-cli", "completed", "--json"]);
    assert_eq!(second["record"]["startedAt"].as_str().unwrap(), started);
    assert!(second["record"]["completedAt"].is_string());
}

#[test]
fn completed_at_cleared_when_reopened() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["project", "set", "task-cli", "completed"])
        .assert()
        .success();

    let reopened = stdout_json(&dir, &["project", "set", "task-cli", "in-progress", "--json"]);
    assert_eq!(reopened["status"], "in-progress");
    assert!(reopened["record"].get("completedAt").is_none());
}

#[test]
fn corrupt_status_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join(".hub")).unwrap();
    std::fs::write(dir.path().join(".hub/project-statuses.json"), "{{not json").unwrap();

    hub(&dir)
        .args(["project", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tracked projects"));
}

// ---------------------------------------------------------------------------
// hub skill
// ---------------------------------------------------------------------------

#[test]
fn skill_set_and_list() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["skill", "set", "React", "learning"])
        .assert()
        .success()
        .stdout(predicate::str::contains("React: learning"));

    hub(&dir)
        .args(["skill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("React"))
        .stdout(predicate::str::contains("learning"));
}

#[test]
fn skill_list_covers_unrated_catalog_skills() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["skill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WebSockets"))
        .stdout(predicate::str::contains("not-started"));
}

#[test]
fn skill_set_unknown_skill_fails() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["skill", "set", "Quantum Computing", "learning"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown skill"));
}

#[test]
fn skill_set_invalid_level_fails() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["skill", "set", "React", "expert"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid skill level"));
}

// ---------------------------------------------------------------------------
// hub roadmap
// ---------------------------------------------------------------------------

fn create_roadmap(dir: &TempDir, name: &str) -> String {
    let created = stdout_json(dir, &["roadmap", "create", name, "--json"]);
    created["id"].as_str().unwrap().to_string()
}

#[test]
fn roadmap_create_and_list() {
    let dir = TempDir::new().unwrap();
    let id = create_roadmap(&dir, "Backend path");

    hub(&dir)
        .args(["roadmap", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()))
        .stdout(predicate::str::contains("Backend path"));
}

#[test]
fn roadmap_create_blank_name_fails() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["roadmap", "create", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blank"));
}

#[test]
fn roadmap_add_preserves_order() {
    let dir = TempDir::new().unwrap();
    let id = create_roadmap(&dir, "Ordered");

    hub(&dir)
        .args(["roadmap", "add", &id, "task-cli"])
        .assert()
        .success();
    hub(&dir)
        .args(["roadmap", "add", &id, "git-standup"])
        .assert()
        .success();

    let shown = stdout_json(&dir, &["roadmap", "show", &id, "--json"]);
    assert_eq!(shown["projectIds"][0], "task-cli");
    assert_eq!(shown["projectIds"][1], "git-standup");
}

#[test]
fn roadmap_add_twice_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let id = create_roadmap(&dir, "Dedup");

    hub(&dir)
        .args(["roadmap", "add", &id, "task-cli"])
        .assert()
        .success();
    hub(&dir)
        .args(["roadmap", "add", &id, "task-cli"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already on"));

    let shown = stdout_json(&dir, &["roadmap", "show", &id, "--json"]);
    assert_eq!(shown["projectIds"].as_array().unwrap().len(), 1);
}

#[test]
fn roadmap_add_unknown_project_fails() {
    let dir = TempDir::new().unwrap();
    let id = create_roadmap(&dir, "Strict");

    hub(&dir)
        .args(["roadmap", "add", &id, "not-a-project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown project id"));
}

#[test]
fn roadmap_move_repositions_project() {
    let dir = TempDir::new().unwrap();
    let id = create_roadmap(&dir, "Shuffle");

    for project in ["task-cli", "git-standup", "markdown-blog"] {
        hub(&dir)
            .args(["roadmap", "add", &id, project])
            .assert()
            .success();
    }

    hub(&dir)
        .args(["roadmap", "move", &id, "markdown-blog", "1"])
        .assert()
        .success();

    let shown = stdout_json(&dir, &["roadmap", "show", &id, "--json"]);
    assert_eq!(shown["projectIds"][0], "markdown-blog");
    assert_eq!(shown["projectIds"][1], "task-cli");
}

#[test]
fn roadmap_move_position_zero_fails() {
    let dir = TempDir::new().unwrap();
    let id = create_roadmap(&dir, "One-based");
    hub(&dir)
        .args(["roadmap", "add", &id, "task-cli"])
        .assert()
        .success();

    hub(&dir)
        .args(["roadmap", "move", &id, "task-cli", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1-based"));
}

#[test]
fn roadmap_move_missing_project_fails() {
    let dir = TempDir::new().unwrap();
    let id = create_roadmap(&dir, "Absent");

    hub(&dir)
        .args(["roadmap", "move", &id, "task-cli", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in roadmap"));
}

#[test]
fn roadmap_reorder_replaces_order() {
    let dir = TempDir::new().unwrap();
    let id = create_roadmap(&dir, "Rewrite");

    for project in ["task-cli", "git-standup"] {
        hub(&dir)
            .args(["roadmap", "add", &id, project])
            .assert()
            .success();
    }

    hub(&dir)
        .args(["roadmap", "reorder", &id, "git-standup", "task-cli"])
        .assert()
        .success();

    let shown = stdout_json(&dir, &["roadmap", "show", &id, "--json"]);
    assert_eq!(shown["projectIds"][0], "git-standup");
}

#[test]
fn roadmap_delete_removes_roadmap() {
    let dir = TempDir::new().unwrap();
    let id = create_roadmap(&dir, "Short-lived");

    hub(&dir)
        .args(["roadmap", "delete", &id])
        .assert()
        .success();
    hub(&dir)
        .args(["roadmap", "delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn roadmap_show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["roadmap", "show", "roadmap-0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

// ---------------------------------------------------------------------------
// hub wizard
// ---------------------------------------------------------------------------

#[test]
fn wizard_starts_at_step_one() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .arg("wizard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 8"))
        .stdout(predicate::str::contains("Meet your learning hub"));
}

#[test]
fn wizard_next_advances_and_persists() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["wizard", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 2 of 8"));

    hub(&dir)
        .arg("wizard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 2 of 8"));
}

#[test]
fn wizard_back_stops_at_first_step() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["wizard", "back"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 8"));
}

#[test]
fn wizard_goto_clamps_past_the_end() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["wizard", "goto", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 8 of 8"));
}

#[test]
fn wizard_reset_returns_to_start() {
    let dir = TempDir::new().unwrap();
    hub(&dir).args(["wizard", "goto", "5"]).assert().success();
    hub(&dir)
        .args(["wizard", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 8"));
}

#[test]
fn wizard_json_reports_position() {
    let dir = TempDir::new().unwrap();
    hub(&dir).args(["wizard", "next"]).assert().success();

    let json = stdout_json(&dir, &["wizard", "--json"]);
    assert_eq!(json["step"], 2);
    assert_eq!(json["total"], 8);
    assert_eq!(json["content"]["id"], "initialize-workspace");
}

// ---------------------------------------------------------------------------
// hub theme
// ---------------------------------------------------------------------------

#[test]
fn theme_defaults_to_dark() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: dark"));
}

#[test]
fn theme_toggle_flips_and_persists() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));

    hub(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn theme_set_rejects_unknown_mode() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["theme", "set", "sepia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid theme"));
}

// ---------------------------------------------------------------------------
// hub recommend
// ---------------------------------------------------------------------------

#[test]
fn recommend_prefers_small_unrated_projects_on_a_fresh_hub() {
    let dir = TempDir::new().unwrap();
    // With no ratings, two-skill ideas get the new-skill bonus and the
    // earliest catalog entry wins ties.
    hub(&dir)
        .arg("recommend")
        .assert()
        .success()
        .stdout(predicate::str::contains("task-cli"))
        .stdout(predicate::str::contains("2.0"));
}

#[test]
fn recommend_follows_learning_skills() {
    let dir = TempDir::new().unwrap();
    for skill in ["Web Scraping", "Node.js", "Caching"] {
        hub(&dir)
            .args(["skill", "set", skill, "learning"])
            .assert()
            .success();
    }

    hub(&dir)
        .arg("recommend")
        .assert()
        .success()
        .stdout(predicate::str::contains("hub ideas show price-watcher"));
}

#[test]
fn recommend_excludes_completed_projects() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["project", "set", "task-cli", "completed"])
        .assert()
        .success();

    hub(&dir)
        .args(["recommend", "-n", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("task-cli").not());
}

#[test]
fn recommend_json_is_sorted_by_score() {
    let dir = TempDir::new().unwrap();
    let json = stdout_json(&dir, &["recommend", "-n", "15", "--json"]);

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 15);
    let scores: Vec<f64> = entries.iter().map(|e| e["score"].as_f64().unwrap()).collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn recommend_count_limits_results() {
    let dir = TempDir::new().unwrap();
    let json = stdout_json(&dir, &["recommend", "--count", "2", "--json"]);
    assert_eq!(json.as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// hub progress
// ---------------------------------------------------------------------------

#[test]
fn progress_counts_projects_and_skills() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["project", "set", "task-cli", "in-progress"])
        .assert()
        .success();
    hub(&dir)
        .args(["project", "set", "markdown-blog", "completed"])
        .assert()
        .success();
    hub(&dir)
        .args(["skill", "set", "React", "learning"])
        .assert()
        .success();

    let json = stdout_json(&dir, &["progress", "--json"]);
    assert_eq!(json["projects"]["in_progress"], 1);
    assert_eq!(json["projects"]["completed"], 1);
    assert_eq!(json["projects"]["not_started"], 13);
    assert_eq!(json["projects"]["total"], 15);
    assert_eq!(json["skills"]["learning"], 1);
    assert_eq!(json["skills"]["total"], 16);
}

#[test]
fn progress_human_output_reads_naturally() {
    let dir = TempDir::new().unwrap();
    hub(&dir)
        .args(["project", "set", "task-cli", "in-progress"])
        .assert()
        .success();

    hub(&dir)
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 in progress"))
        .stdout(predicate::str::contains("15 total"));
}
