//! Dashboard command: counts, progress and deadlines

use anyhow::Result;

use super::app::today;
use super::output::Output;
use crate::query::Stats;
use crate::service::Notice;
use crate::storage::Workspace;

pub fn stats(workspace: &Workspace, output: &Output) -> Result<()> {
    let today = today();
    let tracker = workspace.tracker(today)?;
    let board = tracker.board();
    let stats = Stats::compute(&board.tasks, today);

    if output.is_json() {
        output.data(&serde_json::json!({
            "stats": stats,
            "subjects": board.subjects.len(),
            "theme": tracker.theme(),
        }));
        return Ok(());
    }

    println!("Tasks");
    println!("  Total:        {}", stats.total);
    println!("  Completed:    {}", stats.completed);
    println!("  Pending:      {}", stats.pending);
    println!("  Upcoming:     {}", stats.upcoming);
    println!("  Overdue:      {}", stats.overdue);
    println!("  Productivity: {}%", stats.productivity);
    output.blank();

    println!(
        "Today's progress: {}/{} ({}%)",
        stats.today.completed, stats.today.total, stats.today.percent
    );
    output.blank();

    println!("Upcoming deadlines");
    if stats.deadlines.is_empty() {
        println!("  No upcoming deadlines");
    } else {
        for deadline in &stats.deadlines {
            println!(
                "  {:<6} {:<10} {}",
                deadline.task_id.to_string(),
                deadline.label,
                deadline.title
            );
        }
    }

    if let Some(reminder) = Notice::overdue_reminder(stats.overdue) {
        output.blank();
        output.notify(&reminder);
    }

    Ok(())
}
