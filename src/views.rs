//! Text Views
//!
//! Renders tasks, the current pair and recorded preferences for the terminal.

use crate::generator::Task;
use crate::session::{CompletionView, PairView};
use crate::store::Record;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

const PROGRESS_WIDTH: usize = 30;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Generated tasks as a table.
pub fn format_tasks_text(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks generated.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Pair", "A", "B", "A group", "B group"]);
    for task in tasks {
        table.add_row(vec![
            task.id.to_string(),
            task.item_a.display().to_string(),
            task.item_b.display().to_string(),
            task.metadata.a_group.clone(),
            task.metadata.b_group.clone(),
        ]);
    }
    table.to_string()
}

/// Recorded preferences as a table, in store order.
pub fn format_records_table(records: &[Record]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Pair", "A", "B", "Choice", "Recorded at"]);
    for record in records {
        table.add_row(vec![
            record.task_id().to_string(),
            record.item_a.display().to_string(),
            record.item_b.display().to_string(),
            record.choice.to_string(),
            record.recorded_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }
    table.to_string()
}

/// The pair currently on screen.
pub fn format_pair_view(view: &PairView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format_section_heading(&format!("Pair {} of {}", view.position + 1, view.total))
    ));
    out.push_str(&format!("{}\n\n", progress_bar(view.progress)));
    out.push_str(&format!("  Video A: {}\n", view.task.item_a.display()));
    out.push_str(&format!("  Video B: {}\n\n", view.task.item_b.display()));
    out.push_str(&format!(
        "  Groups: A={} B={}\n",
        view.task.metadata.a_group, view.task.metadata.b_group
    ));
    let selected = view
        .selection
        .map(|c| c.to_string())
        .unwrap_or_else(|| "None".to_string());
    out.push_str(&format!(
        "  Your current selection: {}\n",
        selected.green().bold()
    ));
    if view.needs_selection {
        out.push_str(&format!(
            "  {}\n",
            "Please select a preference to continue".yellow()
        ));
    }
    out
}

/// End-of-session summary.
pub fn format_completion_view(view: &CompletionView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("You've completed all pairs!")
    ));
    if view.records.is_empty() {
        out.push_str("No preferences recorded yet.\n");
    } else {
        out.push_str(&format!("{}\n", format_records_table(&view.records)));
    }
    out.push_str(&format!("Saved to {}\n", view.document.display()));
    out
}

fn progress_bar(progress: f64) -> String {
    let clamped = progress.clamp(0.0, 1.0);
    let filled = (clamped * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_WIDTH - filled),
        (clamped * 100.0).round() as u32
    )
}
