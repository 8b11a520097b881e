#[allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create tempdir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("flowdeck").expect("binary");
        cmd.env("FLOWDECK_DATA_DIR", self.dir.path().join("data"));
        cmd.env_remove("FLOWDECK_LOG");
        cmd
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).output().expect("run");
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn run_ok(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], true, "expected success=true: {v}");
        v
    }

    fn run_err(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], false, "expected success=false: {v}");
        v
    }

    fn add_task(&self, text: &str) -> String {
        let v = self.run_ok(&["task", "add", text]);
        v["data"]["task"]["id"]
            .as_str()
            .expect("task id")
            .to_string()
    }

    fn db(&self) -> rusqlite::Connection {
        rusqlite::Connection::open(self.dir.path().join("data").join("flowdeck.db"))
            .expect("open store")
    }
}

fn today_string() -> String {
    chrono::Local::now().date_naive().to_string()
}

// ─── tasks ─────────────────────────────────────────────────────────

#[test]
fn add_and_list_round_trip_across_invocations() {
    let env = TestEnv::new();
    let id = env.add_task("Write spec");

    let v = env.run_ok(&["task", "list"]);
    let todo = v["data"]["todo"].as_array().expect("todo column");
    assert_eq!(todo.len(), 1);
    assert_eq!(todo[0]["id"], Value::String(id));
    assert_eq!(todo[0]["text"], "Write spec");
    assert_eq!(todo[0]["status"], "todo");
    assert_eq!(todo[0]["total_ms"], 0);
    assert_eq!(todo[0]["is_timer_running"], false);
}

#[test]
fn add_trims_and_rejects_blank_text() {
    let env = TestEnv::new();
    let v = env.run_err(&["task", "add", "   "]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");

    let v = env.run_ok(&["task", "list"]);
    assert_eq!(v["data"]["todo"].as_array().unwrap().len(), 0);
}

#[test]
fn start_and_done_walk_the_lifecycle() {
    let env = TestEnv::new();
    let id = env.add_task("ship it");

    let v = env.run_ok(&["task", "start", &id]);
    assert_eq!(v["data"]["task"]["status"], "in_progress");
    assert!(v["data"]["task"]["started_at"].is_i64());
    assert_eq!(v["data"]["previous"], "todo");
    assert_eq!(v["data"]["celebrated"], false);

    let v = env.run_ok(&["task", "done", &id]);
    assert_eq!(v["data"]["task"]["status"], "done");
    assert!(v["data"]["task"]["completed_at"].is_i64());
    assert_eq!(v["data"]["celebrated"], true);

    // already done: completed_at is refreshed but nobody cheers twice
    let v = env.run_ok(&["task", "done", &id]);
    assert_eq!(v["data"]["celebrated"], false);
}

#[test]
fn completion_prints_a_celebration_line() {
    let env = TestEnv::new();
    let id = env.add_task("confetti");
    env.cmd()
        .args(["task", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nice work"));
}

#[test]
fn unknown_reference_is_a_noop_not_an_error() {
    let env = TestEnv::new();
    env.add_task("only task");

    let v = env.run_ok(&["task", "done", "zzzzzz"]);
    assert_eq!(v["data"]["matched"], false);

    env.cmd()
        .args(["task", "rm", "zzzzzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to do"));
}

#[test]
fn ambiguous_prefix_is_an_error() {
    let env = TestEnv::new();
    let a = env.add_task("first");
    let b = env.add_task("second");

    let prefix: String = a
        .chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect();
    assert!(!prefix.is_empty(), "ULIDs from the same run share a prefix");

    let v = env.run_err(&["task", "show", &prefix]);
    assert_eq!(v["error"]["code"], "AMBIGUOUS_REF");
}

#[test]
fn edit_replaces_text_and_rejects_blank() {
    let env = TestEnv::new();
    let id = env.add_task("old words");

    let v = env.run_ok(&["task", "edit", &id, "new words"]);
    assert_eq!(v["data"]["task"]["text"], "new words");

    let v = env.run_err(&["task", "edit", &id, "  "]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");

    let v = env.run_ok(&["task", "show", &id]);
    assert_eq!(v["data"]["task"]["text"], "new words");
}

#[test]
fn rm_deletes_and_list_filters_by_status() {
    let env = TestEnv::new();
    let keep = env.add_task("keep");
    let drop = env.add_task("drop");
    env.run_ok(&["task", "start", &keep]);

    env.run_ok(&["task", "rm", &drop]);
    let v = env.run_ok(&["task", "list", "--status", "in_progress"]);
    let tasks = v["data"]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"], Value::String(keep));

    let v = env.run_err(&["task", "list", "--status", "paused"]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

// ─── timer ─────────────────────────────────────────────────────────

#[test]
fn timer_toggle_pause_reset_cycle() {
    let env = TestEnv::new();
    let id = env.add_task("focus");
    env.run_ok(&["task", "start", &id]);

    let v = env.run_ok(&["timer", "toggle", &id]);
    assert_eq!(v["data"]["task"]["is_timer_running"], true);

    let v = env.run_ok(&["timer", "toggle", &id]);
    assert_eq!(v["data"]["task"]["is_timer_running"], false);
    let elapsed = v["data"]["task"]["elapsed_ms"].as_i64().unwrap();
    assert!(
        (0..10_000).contains(&elapsed),
        "closed segment should be the small delta between two invocations, got {elapsed}"
    );

    let v = env.run_ok(&["timer", "reset", &id]);
    assert_eq!(v["data"]["task"]["elapsed_ms"], 0);
    assert_eq!(v["data"]["task"]["is_timer_running"], false);
}

#[test]
fn done_stops_a_running_timer() {
    let env = TestEnv::new();
    let id = env.add_task("wrap up");
    env.run_ok(&["task", "start", &id]);
    env.run_ok(&["timer", "toggle", &id]);

    let v = env.run_ok(&["task", "done", &id]);
    assert_eq!(v["data"]["task"]["is_timer_running"], false);
    assert!(v["data"]["task"]["elapsed_ms"].as_i64().unwrap() >= 0);
}

#[test]
fn timer_watch_takes_a_bounded_snapshot() {
    let env = TestEnv::new();
    let id = env.add_task("watched");

    env.cmd()
        .args(["timer", "watch", &id, "--seconds", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Watching"));

    let v = env.run_ok(&["timer", "watch", &id]);
    assert_eq!(v["data"]["task"]["total_ms"], 0, "watch never mutates");
}

// ─── events, calendar, briefing ────────────────────────────────────

#[test]
fn event_add_list_remove() {
    let env = TestEnv::new();
    let v = env.run_ok(&["event", "add", "dentist", "--date", "2026-09-01"]);
    let id = v["data"]["event"]["id"].as_str().unwrap().to_string();
    assert_eq!(v["data"]["event"]["is_urgent"], false);

    env.run_ok(&["event", "add", "deadline", "--date", "2026-09-02", "--urgent"]);

    let v = env.run_ok(&["event", "list", "--on", "2026-09-01"]);
    let events = v["data"]["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["title"], "dentist");

    env.run_ok(&["event", "rm", &id]);
    let v = env.run_ok(&["event", "list"]);
    assert_eq!(v["data"]["events"].as_array().unwrap().len(), 1);
}

#[test]
fn event_rejects_a_malformed_date() {
    let env = TestEnv::new();
    let v = env.run_err(&["event", "add", "bad", "--date", "tomorrow"]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

#[test]
fn briefing_prefers_the_urgent_event_today() {
    let env = TestEnv::new();
    let today = today_string();
    env.run_ok(&["event", "add", "calm one", "--date", &today]);
    env.run_ok(&["event", "add", "urgent one", "--date", &today, "--urgent"]);
    env.add_task("pending thing");

    let v = env.run_ok(&["dashboard"]);
    assert_eq!(v["data"]["pending"], 1);
    assert_eq!(v["data"]["highlight"]["event"]["title"], "urgent one");
    assert_eq!(v["data"]["highlight"]["when"], "today");
}

#[test]
fn briefing_highlight_is_null_without_near_events() {
    let env = TestEnv::new();
    env.run_ok(&["event", "add", "far away", "--date", "2030-01-01", "--urgent"]);

    let v = env.run_ok(&["dashboard"]);
    assert!(v["data"]["highlight"].is_null());
}

#[test]
fn calendar_grid_spans_whole_weeks() {
    let env = TestEnv::new();
    let v = env.run_ok(&["calendar", "--month", "2026-08"]);
    let days = v["data"]["days"].as_array().unwrap();
    assert_eq!(days.len() % 7, 0);
    assert!(days.iter().any(|d| d["date"] == "2026-08-01"));
    assert!(days.iter().any(|d| d["date"] == "2026-08-31"));

    let v = env.run_err(&["calendar", "--month", "2026-13"]);
    assert_eq!(v["error"]["code"], "VALIDATION_ERROR");
}

// ─── notes ─────────────────────────────────────────────────────────

#[test]
fn notes_edit_append_show_clear() {
    let env = TestEnv::new();

    env.cmd()
        .args(["note", "edit"])
        .write_stdin("draft one\n")
        .assert()
        .success();

    let v = env.run_ok(&["note", "show"]);
    assert_eq!(v["data"]["notes"], "draft one\n");

    env.run_ok(&["note", "append", "draft two"]);
    let v = env.run_ok(&["note", "show"]);
    assert_eq!(v["data"]["notes"], "draft one\ndraft two\n");

    env.run_ok(&["note", "clear"]);
    let v = env.run_ok(&["note", "show"]);
    assert_eq!(v["data"]["notes"], "");
}

// ─── persistence faults ────────────────────────────────────────────

#[test]
fn malformed_tasks_blob_is_dropped_and_scoped_to_its_key() {
    let env = TestEnv::new();
    env.add_task("will be lost");
    env.run_ok(&["event", "add", "survives", "--date", "2026-09-01"]);

    env.db()
        .execute(
            "UPDATE store SET value = '{definitely not json' WHERE key = 'tasks'",
            [],
        )
        .expect("corrupt tasks blob");

    let v = env.run_ok(&["task", "list"]);
    assert_eq!(v["data"]["todo"].as_array().unwrap().len(), 0);

    let v = env.run_ok(&["event", "list"]);
    assert_eq!(v["data"]["events"].as_array().unwrap().len(), 1);
}

// ─── achievements ──────────────────────────────────────────────────

#[test]
fn achievements_tier_progresses_from_rookie_to_bronze() {
    let env = TestEnv::new();
    let v = env.run_ok(&["achievements"]);
    assert_eq!(v["data"]["achievements"]["tier"], "Rookie");
    assert_eq!(v["data"]["achievements"]["done_count"], 0);
    assert_eq!(v["data"]["achievements"]["total_hours"], 0.0);

    let id = env.add_task("first win");
    env.run_ok(&["task", "done", &id]);

    let v = env.run_ok(&["achievements"]);
    assert_eq!(v["data"]["achievements"]["tier"], "Bronze");
    assert_eq!(v["data"]["achievements"]["done_count"], 1);
}
