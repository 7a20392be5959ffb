use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use task_lists::manager::{TaskError, TaskListManager, TaskListing};
use task_lists::task::{Status, TaskPatch};

#[derive(Parser, Debug)]
#[command(name = "task-lists", about = "Manage tasks across named, file-backed lists")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Name of the task
        name: String,
        /// Task description
        description: String,
        /// Task list name
        #[arg(long)]
        list: Option<String>,
    },
    /// List tasks
    List {
        /// Filter by status code
        #[arg(long, value_parser = ["1", "2", "3"])]
        status: Option<String>,
        /// Task list name
        #[arg(long)]
        list: Option<String>,
    },
    /// Update task status
    Update {
        /// Task ID to update
        task_id: u32,
        /// New status code
        #[arg(value_parser = ["1", "2", "3"])]
        status: String,
        /// Task list name
        #[arg(long)]
        list: Option<String>,
    },
    /// Edit a task's name or description
    Edit {
        /// Task ID to edit
        task_id: u32,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// Task list name
        #[arg(long)]
        list: Option<String>,
    },
    /// Remove a task
    Remove {
        /// Task ID to remove
        task_id: u32,
        /// Task list name
        #[arg(long)]
        list: Option<String>,
    },
    /// List all available task lists
    Lists,
    /// Create a new task list
    NewList {
        /// List name
        name: String,
    },
    /// Delete a task list
    DeleteList {
        /// List name
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut manager = TaskListManager::open(".")?;

    match cli.command {
        Commands::Add {
            name,
            description,
            list,
        } => {
            if !switch_if_requested(&mut manager, list)? {
                return Ok(());
            }
            manager.add_task(name, description)?;
            println!("{}", "✅ Task added.".green());
        }
        Commands::List { status, list } => {
            if !switch_if_requested(&mut manager, list)? {
                return Ok(());
            }
            let filter = status.as_deref().and_then(Status::from_code);
            let listing = manager.listing(Local::now().date_naive(), filter);
            print_listing(&manager, &listing);
        }
        Commands::Update {
            task_id,
            status,
            list,
        } => {
            if !switch_if_requested(&mut manager, list)? {
                return Ok(());
            }
            match manager.update_status(task_id, &status) {
                Ok(task) => println!(
                    "{}",
                    format!("'{}' Status updated to: {}", task.name, task.status).yellow()
                ),
                Err(TaskError::TaskNotFound(_)) => {
                    println!("{}", "❌ Task with the given ID not found!".red());
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Edit {
            task_id,
            name,
            description,
            list,
        } => {
            if !switch_if_requested(&mut manager, list)? {
                return Ok(());
            }
            let patch = TaskPatch { name, description };
            if patch.is_empty() {
                println!("{}", "Nothing to change: pass --name and/or --description.".yellow());
                return Ok(());
            }
            match manager.edit_task(task_id, &patch) {
                Ok(task) => println!("{}", format!("✅ Task '{}' updated.", task.name).green()),
                Err(TaskError::TaskNotFound(_)) => {
                    println!("{}", "❌ Task with the given ID not found!".red());
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Remove { task_id, list } => {
            if !switch_if_requested(&mut manager, list)? {
                return Ok(());
            }
            match manager.remove_task(task_id) {
                Ok(task) => println!(
                    "{}",
                    format!("✅ Task '{}' has been removed.", task.name).green()
                ),
                Err(TaskError::TaskNotFound(_)) => {
                    println!("{}", "❌ Invalid task number.".red());
                }
                Err(err) => return Err(err.into()),
            }
        }
        Commands::Lists => {
            let lists = manager.available_lists()?;
            if lists.is_empty() {
                println!("{}", "❌ No available task lists.".red());
            } else {
                println!("{}", "📋 Available task lists:".cyan());
                for name in lists {
                    println!("- {name}");
                }
            }
        }
        Commands::NewList { name } => {
            manager.create_list(&name)?;
            println!("{}", format!("✅ Created new list: {name}").green());
        }
        Commands::DeleteList { name } => match manager.delete_list(&name) {
            Ok(fell_back) => {
                println!("{}", format!("✅ List '{name}' has been deleted.").green());
                if fell_back {
                    println!("{}", "📋 Switched to the default task list.".yellow());
                }
            }
            Err(TaskError::ListNotFound(name)) => {
                println!("{}", format!("❌ List '{name}' does not exist.").red());
            }
            Err(err) => return Err(err.into()),
        },
    }

    Ok(())
}

/// Switches to the requested list before running the command. A missing list
/// prints the not-found message and aborts the command without side effects.
fn switch_if_requested(manager: &mut TaskListManager, list: Option<String>) -> Result<bool> {
    let Some(name) = list else {
        return Ok(true);
    };
    match manager.switch_to(&name) {
        Ok(()) => Ok(true),
        Err(TaskError::ListNotFound(name)) => {
            println!("{}", format!("❌ List '{name}' does not exist.").red());
            Ok(false)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_listing(manager: &TaskListManager, listing: &TaskListing) {
    if manager.store().is_empty() {
        println!("{}", "❌ No available tasks.".red());
        return;
    }

    if listing.active.is_empty() {
        println!("{}", "❌ No active tasks.".red());
    } else {
        println!("{}", "✅ Active tasks:".green());
        for task in &listing.active {
            let line = format!(
                "[{}] - {} - {} - Status: {}",
                task.id, task.name, task.description, task.status
            );
            let colored_line = match task.status {
                Status::Started => line.yellow(),
                Status::Paused => line.red(),
                Status::Completed => line.green(),
            };
            println!("{colored_line}");
        }
    }

    if !listing.outdated.is_empty() {
        println!();
        println!("{}", "⌛ Outdated tasks:".yellow());
        for (task, overdue_days) in &listing.outdated {
            println!(
                "{}",
                format!(
                    "[{}] - {} - {} - Status: {} (outdated by {} days)",
                    task.id, task.name, task.description, task.status, overdue_days
                )
                .yellow()
            );
        }
    }
}
