//! Terminal rendering of the core's read-side projections.

use chrono::NaiveDateTime;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use todue_core::{
    filter,
    format::{self, DueDisplay},
    Filter, Todo,
};

pub fn print_list(todos: &[Todo], filter_mode: Filter, now: NaiveDateTime) {
    if todos.is_empty() {
        println!("No todos yet.");
        return;
    }
    println!("My Todos ({} active)", filter::active_count(todos));
    let visible = filter::apply(todos, filter_mode);
    if visible.is_empty() {
        println!("No {} todos found", filter_mode.label());
        return;
    }
    for todo in visible {
        print_line(todo, now);
    }
}

pub fn print_line(todo: &Todo, now: NaiveDateTime) {
    let styled = std::io::stdout().is_terminal();
    let check = if todo.completed { "[x]" } else { "[ ]" };
    let title = if todo.completed && styled {
        todo.title.strikethrough().to_string()
    } else {
        todo.title.clone()
    };
    println!("{} {} {}{}", todo.id, check, title, due_suffix(todo, now, styled));
}

pub fn print_detail(todo: &Todo, now: NaiveDateTime) {
    println!("{}", todo.title);
    println!("  id:      {}", todo.id);
    println!(
        "  status:  {}",
        if todo.completed { "completed" } else { "active" }
    );
    println!("  created: {}", todo.created_at);
    match format::due_display(todo.due_date.as_ref(), todo.completed, now) {
        DueDisplay::None => {}
        DueDisplay::Invalid => println!("  due:     {}", format::INVALID_DUE),
        DueDisplay::Scheduled { text, overdue } => {
            println!("  due:     {text}{}", if overdue { " (Overdue)" } else { "" });
        }
    }
}

fn due_suffix(todo: &Todo, now: NaiveDateTime, styled: bool) -> String {
    match format::due_display(todo.due_date.as_ref(), todo.completed, now) {
        DueDisplay::None => String::new(),
        DueDisplay::Invalid => format!("  due {}", format::INVALID_DUE),
        DueDisplay::Scheduled { text, overdue } => {
            let mut rendered = format!("  due {text}");
            if overdue {
                rendered.push_str(" (Overdue)");
            }
            if styled {
                rendered = if overdue {
                    rendered.red().to_string()
                } else {
                    rendered.dimmed().to_string()
                };
            }
            rendered
        }
    }
}
