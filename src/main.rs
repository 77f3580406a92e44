use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use bujo::api::{ApiClient, ShareTask};
use bujo::config::Config;
use bujo::effects::Env;
use bujo::features::admin::AdminIntent;
use bujo::features::notes::NoteIntent;
use bujo::features::tasks::TaskIntent;
use bujo::logging::init_tracing;
use bujo::model::Role;
use bujo::navigation::{Navigation, RouteLog};
use bujo::notify::ConsoleNotifier;
use bujo::store::{AppIntent, AppState, Runtime};

#[derive(Debug, Parser)]
#[command(name = "bujo", version, about = "Tasks, notes and roles from the command line")]
struct Cli {
    /// Config file (defaults to ~/.config/bujo/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override api.base_url from the config file.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the tasks of a project.
    Tasks {
        #[arg(long)]
        project: i64,
    },
    /// List one page of completed tasks.
    CompletedTasks {
        #[arg(long)]
        project: i64,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    /// Show a single task.
    Task { id: i64 },
    DeleteTask { id: i64 },
    CompleteTask { id: i64 },
    /// Move a task to another project.
    MoveTask {
        id: i64,
        #[arg(long)]
        to: i64,
    },
    /// Share a task with a user or through a public link.
    ShareTask {
        id: i64,
        #[arg(long, conflicts_with = "link")]
        user: Option<String>,
        #[arg(long)]
        link: bool,
        /// Link lifetime in days.
        #[arg(long, requires = "link")]
        ttl: Option<u32>,
    },
    /// List the notes of a project.
    Notes {
        #[arg(long)]
        project: i64,
    },
    /// Delete a note and its sub notes.
    DeleteNote { id: i64 },
    /// List users holding a role.
    Users {
        #[arg(long, default_value = "ADMIN")]
        role: Role,
    },
    SetRole { username: String, role: Role },
}

/// Which part of the session to print once everything settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Tasks,
    Notes,
    Admin,
    Route,
    Nothing,
}

impl Command {
    fn into_intent(self, config: &Config, navigation: Navigation) -> (AppIntent, View) {
        match self {
            Command::Tasks { project } => (
                TaskIntent::UpdateTasks {
                    project_id: project,
                }
                .into(),
                View::Tasks,
            ),
            Command::CompletedTasks { project, page } => (
                TaskIntent::UpdateCompletedTasks {
                    project_id: project,
                    page_no: page,
                    page_size: config.tasks.completed_page_size,
                }
                .into(),
                View::Tasks,
            ),
            Command::Task { id } => (TaskIntent::Get { task_id: id }.into(), View::Tasks),
            Command::DeleteTask { id } => (TaskIntent::Delete { task_id: id }.into(), View::Tasks),
            Command::CompleteTask { id } => (
                TaskIntent::Complete {
                    task_id: id,
                    date_time: None,
                }
                .into(),
                View::Nothing,
            ),
            Command::MoveTask { id, to } => (
                TaskIntent::Move {
                    task_id: id,
                    target_project: to,
                    navigation,
                }
                .into(),
                View::Route,
            ),
            Command::ShareTask { id, user, link, ttl } => (
                TaskIntent::Share {
                    task_id: id,
                    share: ShareTask {
                        target_user: user,
                        target_group: None,
                        generate_link: link,
                        ttl,
                    },
                }
                .into(),
                View::Tasks,
            ),
            Command::Notes { project } => (
                NoteIntent::UpdateNotes {
                    project_id: project,
                }
                .into(),
                View::Notes,
            ),
            Command::DeleteNote { id } => (NoteIntent::Delete { note_id: id }.into(), View::Notes),
            Command::Users { role } => (AdminIntent::GetUsersByRole { role }.into(), View::Admin),
            Command::SetRole { username, role } => {
                (AdminIntent::SetRole { username, role }.into(), View::Nothing)
            }
        }
    }
}

fn render(view: View, state: &AppState, routes: &RouteLog) -> anyhow::Result<Option<String>> {
    let rendered = match view {
        View::Tasks => Some(serde_json::to_string_pretty(&state.tasks)?),
        View::Notes => Some(serde_json::to_string_pretty(&state.notes)?),
        View::Admin => Some(serde_json::to_string_pretty(&state.admin)?),
        View::Route => routes.last(),
        View::Nothing => None,
    };
    Ok(rendered)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let api = Arc::new(ApiClient::new(&config.api).context("failed to build API client")?);
    let routes = Arc::new(RouteLog::new());
    let runtime = Runtime::start(Env::new(api, Arc::new(ConsoleNotifier)));

    let (intent, view) = cli
        .command
        .into_intent(&config, Navigation::new(routes.clone()));
    runtime.dispatch(intent);

    let interrupted = tokio::select! {
        _ = runtime.settled() => false,
        _ = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        runtime.shutdown();
        anyhow::bail!("interrupted before the request finished");
    }

    if let Some(output) = render(view, &runtime.store().state(), &routes)? {
        println!("{}", output);
    }
    runtime.shutdown();
    Ok(())
}
