use std::cell::Cell;
use std::fs::File;
use std::rc::Rc;
use std::time::Duration;

use formkit::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("checkbox.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut theme = Theme::default();
    if let Ok(label) = std::env::var("FORMKIT_LABEL_COLOR") {
        if let Err(e) = theme.set("label", &label) {
            log::warn!("ignoring FORMKIT_LABEL_COLOR: {}", e);
        }
    }

    let items = form(&theme);
    let focused = Rc::new(Cell::new(0usize));
    let quit = Rc::new(Cell::new(false));

    for (index, item) in items.iter().enumerate() {
        let focused = focused.clone();
        let quit = quit.clone();
        let count = items.len();
        item.set_finished_func(move |key| match key {
            Key::Tab => focused.set((index + 1) % count),
            Key::BackTab => focused.set((index + count - 1) % count),
            _ => quit.set(true),
        });

        let label = item.label();
        item.set_changed_func(move |checked| log::info!("{} -> {}", label, checked));
    }

    let mut term = Terminal::new()?;

    while !quit.get() {
        for (index, item) in items.iter().enumerate() {
            if index == focused.get() {
                item.focus();
            } else {
                item.blur();
            }
        }

        term.draw(|buf| {
            for item in &items {
                item.draw(buf);
            }
        })?;

        for event in term.poll(Some(Duration::from_millis(250)))? {
            items[focused.get()].handle_key(&event);
        }
    }

    drop(term);
    for item in &items {
        println!("{}: {}", item.label(), item.is_checked());
    }
    Ok(())
}

fn form(theme: &Theme) -> Vec<Checkbox> {
    let labels = ["Accept terms ", "Subscribe to newsletter ", "Remember me "];

    let mut items: Vec<Checkbox> = labels
        .iter()
        .zip(0u16..)
        .map(|(label, row)| {
            let item = Checkbox::themed(theme);
            item.set_label(*label).set_rect(Rect::new(2, 1 + row * 2, 40, 1));
            item
        })
        .collect();

    let boxed = Checkbox::themed(theme);
    boxed
        .set_label("Dark mode ")
        .set_border(Border::Rounded)
        .set_title("Display")
        .set_rect(Rect::new(2, 7, 30, 3));
    items.push(boxed);

    items
}
