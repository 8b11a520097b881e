use clap::{Parser, Subcommand};

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "flowdeck",
    version = VERSION,
    about = "Personal productivity dashboard: task board, focus timer, calendar, notes",
    after_help = "\
NOTE:
  State lives in a per-user data directory (override with FLOWDECK_DATA_DIR).
  The store is created on first use; there is nothing to initialize.
  Task and event references accept any unique id prefix.

EXIT CODES:
  0  Success (including \"nothing matched that reference\")
  1  Error (storage, validation, ambiguous reference)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Daily briefing: pending count, highlighted event, quick focus
    Dashboard,

    /// Task board management
    #[command(subcommand)]
    Task(TaskCommands),

    /// Per-task focus timer
    #[command(subcommand)]
    Timer(TimerCommands),

    /// Calendar events
    #[command(subcommand)]
    Event(EventCommands),

    /// Month view with event markers
    Calendar {
        /// Month to show as YYYY-MM (defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },

    /// Notes scratchpad
    #[command(subcommand)]
    Note(NoteCommands),

    /// Completed-task count, total focus hours, badge tier
    Achievements,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task to the What to Do column
    Add {
        /// Task text (must not be blank)
        text: String,
    },
    /// Show the whole board, or one column
    List {
        /// Only this column: todo | in_progress | done
        #[arg(long)]
        status: Option<String>,
    },
    /// Show task details
    Show { id: String },
    /// Replace the task text
    Edit {
        id: String,
        /// New text (must not be blank)
        text: String,
    },
    /// Delete a task
    Rm { id: String },
    /// Move a task to Work in Progress
    Start { id: String },
    /// Move a task to Achievements
    Done { id: String },
    /// Move a task back to What to Do
    Todo { id: String },
}

#[derive(Subcommand)]
pub enum TimerCommands {
    /// Start the timer if stopped, pause it if running
    Toggle { id: String },
    /// Zero the accumulated time and stop the timer
    Reset { id: String },
    /// Redraw the projected total every second (read-only)
    Watch {
        id: String,
        /// Stop after this many ticks instead of running until interrupted
        #[arg(long)]
        seconds: Option<u64>,
    },
}

#[derive(Subcommand)]
pub enum EventCommands {
    /// Add a calendar event
    Add {
        title: String,
        /// Calendar date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Flag the event as urgent
        #[arg(long)]
        urgent: bool,
    },
    /// List events, optionally only those on one date
    List {
        /// Only events on this date (YYYY-MM-DD)
        #[arg(long)]
        on: Option<String>,
    },
    /// Delete an event
    Rm { id: String },
}

#[derive(Subcommand)]
pub enum NoteCommands {
    /// Print the scratchpad
    Show,
    /// Replace the scratchpad with text read from stdin
    Edit,
    /// Append a line to the scratchpad
    Append { text: String },
    /// Empty the scratchpad
    Clear,
}
