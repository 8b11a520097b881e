use crate::models::{Task, TaskStatus};

/// Result of a status transition.
///
/// `celebrate` is set when the task newly entered `Done`; the caller may
/// fire a one-shot visual effect, which has no state impact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub previous: TaskStatus,
    pub celebrate: bool,
}

/// In-memory task collection behind the board screens.
///
/// The board never reads the clock; every time-dependent operation takes
/// `now_ms` from the caller. Operations on unknown ids are silent no-ops
/// (`None` / `false`), never errors.
#[derive(Debug, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Insert a new `Todo` task at the front of the collection.
    /// Whitespace-only text is a no-op; callers validate first, the board
    /// still refuses rather than storing an empty card.
    pub fn create(&mut self, id: String, text: &str, now_ms: i64) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.tasks.insert(0, Task::new(id, text.to_string(), now_ms));
        self.tasks.first()
    }

    pub fn rename(&mut self, id: &str, text: &str) -> bool {
        match self.find_mut(id) {
            Some(t) => {
                t.text = text.trim().to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Move a task to `new_status`. Any status is reachable from any other.
    ///
    /// - first entry into `InProgress` stamps `started_at`; re-entry keeps
    ///   the original stamp
    /// - every entry into `Done` overwrites `completed_at` and closes any
    ///   open timer segment
    /// - leaving `InProgress` for a non-`Done` status also closes the timer
    pub fn transition(
        &mut self,
        id: &str,
        new_status: TaskStatus,
        now_ms: i64,
    ) -> Option<TransitionOutcome> {
        let task = self.find_mut(id)?;
        let previous = task.status;

        if new_status == TaskStatus::InProgress && previous != TaskStatus::InProgress {
            task.started_at = task.started_at.or(Some(now_ms));
        }

        let mut celebrate = false;
        if new_status == TaskStatus::Done {
            task.completed_at = Some(now_ms);
            close_segment(task, now_ms);
            celebrate = previous != TaskStatus::Done;
        } else if previous == TaskStatus::InProgress && new_status != TaskStatus::InProgress {
            close_segment(task, now_ms);
        }

        task.status = new_status;
        Some(TransitionOutcome {
            previous,
            celebrate,
        })
    }

    /// Start or pause the focus timer. Returns the new running state.
    pub fn toggle_timer(&mut self, id: &str, now_ms: i64) -> Option<bool> {
        let task = self.find_mut(id)?;
        if task.is_timer_running {
            close_segment(task, now_ms);
        } else {
            task.is_timer_running = true;
            task.last_timer_start = Some(now_ms);
        }
        Some(task.is_timer_running)
    }

    /// Zero the accumulated time and stop the timer, whatever the status.
    pub fn reset_timer(&mut self, id: &str) -> bool {
        match self.find_mut(id) {
            Some(t) => {
                t.elapsed_ms = 0;
                t.is_timer_running = false;
                t.last_timer_start = None;
                true
            }
            None => false,
        }
    }

    pub fn todo_count(&self) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Todo)
            .count()
    }

    /// `Todo` tasks, most recently created first.
    pub fn todo_view(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Todo)
            .collect();
        view.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        view
    }

    /// `InProgress` tasks, most recently started first.
    pub fn in_progress_view(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::InProgress)
            .collect();
        view.sort_by(|a, b| b.started_at.unwrap_or(0).cmp(&a.started_at.unwrap_or(0)));
        view
    }

    /// `Done` tasks, most recently completed first.
    pub fn done_view(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done)
            .collect();
        view.sort_by(|a, b| {
            b.completed_at
                .unwrap_or(0)
                .cmp(&a.completed_at.unwrap_or(0))
        });
        view
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}

/// Fold the open segment, if any, into `elapsed_ms` and stop the timer.
/// A clock that went backwards contributes zero, keeping `elapsed_ms`
/// non-decreasing.
fn close_segment(task: &mut Task, now_ms: i64) {
    if let Some(started) = task.last_timer_start.take() {
        task.elapsed_ms += (now_ms - started).max(0);
    }
    task.is_timer_running = false;
}
