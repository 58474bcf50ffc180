//! task-manager - CLI entry point
//!
//! `task-manager demo` (default) walks through the task operations against the
//! configured store; `task-manager serve` starts the HTTP task API.

use task_manager::{api, config::Config, Priority, TaskController, TaskStatistics, TaskUpdate};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_manager=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    info!(
        "Loaded configuration: store={:?}, api_url={}",
        config.store_type, config.api_url
    );

    match std::env::args().nth(1).as_deref() {
        Some("serve") => api::serve(config).await,
        Some("demo") | None => demo(&config).await,
        Some(other) => anyhow::bail!("Unknown command '{}' (expected 'demo' or 'serve')", other),
    }
}

async fn demo(config: &Config) -> anyhow::Result<()> {
    println!("=== Task Manager ===\n");

    let controller = TaskController::from_config(config)?;

    println!("Creating tasks...");
    let first = controller
        .create_task(
            "Complete project documentation",
            "Write comprehensive documentation for the project",
            Priority::High,
        )
        .await?;
    println!("Created: {:?}", first);

    let second = controller
        .create_task(
            "Review code changes",
            "Review all pending code changes",
            Priority::Medium,
        )
        .await?;
    println!("Created: {:?}", second);

    let third = controller
        .create_task(
            "Urgent: Fix critical bug",
            "Fix the critical bug in production",
            Priority::High,
        )
        .await?;
    println!("Created: {:?}", third);

    println!("\nAll tasks:");
    for task in controller.get_all_tasks().await? {
        println!(
            "  - {} (Priority: {}, Completed: {})",
            task.title, task.priority, task.completed
        );
    }

    println!("\nTask Statistics:");
    print_statistics(&controller.get_statistics().await?);

    println!("\nHigh priority tasks:");
    for task in controller.get_tasks_by_priority(Priority::High).await? {
        println!("  - {}", task.title);
    }

    println!("\nUpdating task {}...", first.id);
    let update = TaskUpdate::new()
        .with_title("Complete project documentation (Updated)")
        .with_completed(true);
    let updated = controller.update_task(first.id, &update).await?;
    println!("Updated: {:?}", updated);

    println!("\nFinal Statistics:");
    print_statistics(&controller.get_statistics().await?);

    println!("\n=== Done ===");
    Ok(())
}

fn print_statistics(stats: &TaskStatistics) {
    println!("  Total: {}", stats.total_tasks);
    println!("  Completed: {}", stats.completed_tasks);
    println!("  Pending: {}", stats.pending_tasks);
    match stats.factorial_total {
        Some(value) => println!("  Factorial Total: {}", value),
        None => println!("  Factorial Total: (overflow)"),
    }
}
