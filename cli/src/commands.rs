use anyhow::{anyhow, Result};
use chrono::{Local, Utc};
use todue_core::{schedule, ApiError, Clock, EditDraft, TodoStore};

use crate::args::{Cli, Command};
use crate::transport::UreqTransport;
use crate::views;

pub fn run(cli: Cli) -> Result<()> {
    let transport = UreqTransport::new();
    let mut store = TodoStore::new(&cli.url);

    match cli.command {
        Command::List { filter } => {
            store.load(&transport)?;
            views::print_list(store.todos(), filter.into(), clock().local);
        }
        Command::Add { title, date, time } => {
            let date = date
                .map(|raw| {
                    schedule::parse_date(&raw)
                        .ok_or_else(|| anyhow!("not a date (expected YYYY-MM-DD): {raw}"))
                })
                .transpose()?;
            let time = time
                .map(|raw| {
                    schedule::parse_time(&raw)
                        .ok_or_else(|| anyhow!("not a time (expected HH:MM): {raw}"))
                })
                .transpose()?;
            let now = clock();
            match store.add(&transport, &title, date, time, now)? {
                Some(todo) => views::print_line(todo, now.local),
                None => println!("Nothing to add: the title is empty."),
            }
        }
        Command::Show { id } => {
            let todo = store.fetch(&transport, id)?;
            views::print_detail(&todo, clock().local);
        }
        Command::Toggle { id } => {
            store.load(&transport)?;
            let todo = store.toggle(&transport, id)?;
            views::print_line(todo, clock().local);
        }
        Command::Edit {
            id,
            title,
            date,
            time,
            clear_due,
        } => {
            store.load(&transport)?;
            let current = store.get(id).ok_or(ApiError::NotFound)?;
            let mut draft = EditDraft::from_todo(current);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(date) = date {
                draft.due_date = date;
            }
            if let Some(time) = time {
                draft.due_time = time;
            }
            if clear_due {
                draft.due_date.clear();
                draft.due_time.clear();
            }
            let patch = draft.submit()?;
            let todo = store.update(&transport, id, &patch)?;
            views::print_line(todo, clock().local);
        }
        Command::Rm { id } => {
            store.remove(&transport, id)?;
            println!("Deleted {id}.");
        }
    }
    Ok(())
}

fn clock() -> Clock {
    Clock {
        utc: Utc::now(),
        local: Local::now().naive_local(),
    }
}
