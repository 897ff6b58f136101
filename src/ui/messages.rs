//! User-facing notifications (the terminal counterpart of toasts).
//! Info, success and warning go to stdout; errors go to stderr.

use ansi_term::{Colour, Style};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn badge(self) -> (Colour, &'static str) {
        match self {
            Level::Info => (Colour::Blue, "ℹ️"),
            Level::Success => (Colour::Green, "✅"),
            Level::Warning => (Colour::Yellow, "⚠️"),
            Level::Error => (Colour::Red, "❌"),
        }
    }
}

fn notify(level: Level, msg: &dyn fmt::Display) {
    let (colour, icon) = level.badge();
    let line = format!("{} {msg}", colour.bold().paint(icon));
    match level {
        Level::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    notify(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    notify(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    notify(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    notify(Level::Error, &msg);
}

/// Field-level annotations for a rejected form (HTTP 422).
pub fn field_errors(fields: &BTreeMap<String, Vec<String>>) {
    let name = Colour::Red.normal();
    for (field, messages) in fields {
        for m in messages {
            eprintln!("   {}: {m}", name.paint(field.as_str()));
        }
    }
}

pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", Style::new().bold().fg(Colour::Blue).paint(format!("== {msg} ==")));
}
