//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tododemo_core` linkage.
//! - Walk one create/edit/delete round through the navigator.
//! - Keep output deterministic apart from generated task ids.

use tododemo_core::{InMemoryTaskRepository, NavResult, Navigator};

fn main() {
    println!("tododemo_core ping={}", tododemo_core::ping());
    println!("tododemo_core version={}", tododemo_core::core_version());

    let mut nav = Navigator::with_defaults();
    print_tasks("seeded", &nav);

    if let Err(err) = walkthrough(&mut nav) {
        eprintln!("walkthrough failed: {err}");
        std::process::exit(1);
    }
    print_tasks("after walkthrough", &nav);
}

fn walkthrough(nav: &mut Navigator<InMemoryTaskRepository>) -> NavResult<()> {
    nav.create_new()?;
    nav.update_draft_title("Water plants")?;
    nav.save()?;

    let tasks = nav.tasks();
    if let Some(first) = tasks.first() {
        nav.toggle_completed(first.id)?;
    }
    if let Some(second) = tasks.get(1) {
        nav.select_task(second.id)?;
        nav.delete()?;
    }
    println!("state={}", nav.state().name());
    Ok(())
}

fn print_tasks(label: &str, nav: &Navigator<InMemoryTaskRepository>) {
    println!("{label}:");
    for task in nav.tasks() {
        let mark = if task.completed { "x" } else { " " };
        println!("  [{mark}] {} {}", task.id, task.title);
    }
}
