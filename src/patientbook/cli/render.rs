//! Terminal output: patient cards, feedback lines, help.
//!
//! Cards are built as plain data by [`patient_card`] and only turned into
//! coloured text at the edge, so the layout can be tested without a terminal.

use chrono::{Local, NaiveDate};
use colored::Colorize;
use patientbook::commands::{help, CmdMessage, MessageLevel};
use patientbook::error::BookError;
use patientbook::model::Patient;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INDENT: &str = "     ";

/// Everything a list row shows about one patient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientCard {
    pub index: usize,
    pub name: String,
    pub tags: Vec<String>,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub last_visit: Option<String>,
    pub remark: Option<String>,
}

pub fn patient_card(index: usize, patient: &Patient) -> PatientCard {
    let last_visit = patient.last_visit();
    let last_visit = (!last_visit.is_empty()).then(|| match last_visit.as_date() {
        Some(date) => format!("{} ({})", last_visit, visited_ago(date, Local::now().date_naive())),
        None => last_visit.to_string(),
    });
    let remark = patient.remark();

    PatientCard {
        index,
        name: patient.name().to_string(),
        tags: patient.tags().iter().map(|t| t.to_string()).collect(),
        phone: patient.phone().to_string(),
        email: patient.email().to_string(),
        address: patient.address().to_string(),
        last_visit,
        remark: (!remark.is_empty()).then(|| remark.to_string()),
    }
}

fn visited_ago(date: NaiveDate, today: NaiveDate) -> String {
    let days = today.signed_duration_since(date).num_days();
    match days {
        d if d < 0 => "upcoming".to_string(),
        0 => "today".to_string(),
        d => {
            let secs = u64::try_from(d).unwrap_or_default() * 24 * 60 * 60;
            Formatter::new().convert(std::time::Duration::from_secs(secs))
        }
    }
}

/// Plain-text lines of a card, each at most `width` columns wide.
pub fn card_lines(card: &PatientCard, width: usize) -> Vec<String> {
    let tags: String = card.tags.iter().map(|t| format!("[{}]", t)).collect();
    let head = if tags.is_empty() {
        format!("{:>3}. {}", card.index, card.name)
    } else {
        format!("{:>3}. {} {}", card.index, card.name, tags)
    };

    let mut lines = vec![
        head,
        format!("{}{} · {}", INDENT, card.phone, card.email),
        format!("{}{}", INDENT, card.address),
    ];
    if let Some(visit) = &card.last_visit {
        lines.push(format!("{}Last visit: {}", INDENT, visit));
    }
    if let Some(remark) = &card.remark {
        lines.push(format!("{}Remark: {}", INDENT, remark));
    }
    lines
        .iter()
        .map(|line| truncate_to_width(line, width))
        .collect()
}

pub fn print_list(patients: &[&Patient], width: usize) {
    if patients.is_empty() {
        println!("{}", "No persons to show.".dimmed());
        return;
    }
    for (i, patient) in patients.iter().enumerate() {
        let card = patient_card(i + 1, patient);
        for (n, line) in card_lines(&card, width).into_iter().enumerate() {
            if n == 0 {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_error(error: &BookError) {
    print_messages(&[error_message(error)]);
}

/// Mistakes in what the user typed are warnings; anything else is an error.
fn error_message(error: &BookError) -> CmdMessage {
    if error.is_user_error() {
        CmdMessage::warning(error.to_string())
    } else {
        CmdMessage::error(error.to_string())
    }
}

pub fn print_help() {
    for usage in help::usages() {
        println!("{}\n", usage);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
