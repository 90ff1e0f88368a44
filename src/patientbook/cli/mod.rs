//! # Terminal Client
//!
//! A line-oriented read-eval-print loop over [`BookApi`]. One line of stdin is
//! one command. The visible patient list is re-printed from a book
//! subscription whenever it changes, so commands themselves never decide when
//! to show the list.
//!
//! The prompt is only printed when a person is at the terminal, which keeps
//! piped sessions (and the integration tests) free of prompt noise.

mod render;
mod setup;

use clap::Parser;
use patientbook::api::BookApi;
use patientbook::config::{default_config_dir, BookConfig};
use patientbook::error::Result;
use patientbook::logging;
use patientbook::sample::sample_patients;
use patientbook::store::memory::InMemoryStore;
use setup::Cli;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => default_config_dir()?,
    };
    let config = BookConfig::load(&config_dir)?;

    let filter = if cli.verbose {
        "debug"
    } else {
        config.log_filter.as_str()
    };
    let _logging = logging::init(filter);
    debug!(config_dir = %config_dir.display(), "config loaded");

    if !console::colors_enabled() {
        colored::control::set_override(false);
    }

    let store = if cli.empty || !config.load_sample_data {
        InMemoryStore::new()
    } else {
        InMemoryStore::with_patients(sample_patients()?)
    };
    let mut api = BookApi::new(store)?;

    let width = config.list_width;
    render::print_list(&api.book().filtered(), width);
    let _subscription = api.subscribe(move |view| render::print_list(view, width));

    repl(&mut api, &config.prompt)?;
    info!(saves = api.store().save_count(), "session ended");
    Ok(())
}

fn repl(api: &mut BookApi<InMemoryStore>, prompt: &str) -> Result<()> {
    let interactive = console::user_attended();
    let mut input = io::stdin().lock();
    let mut buf = Vec::new();

    loop {
        if interactive {
            print!("{}", prompt);
            io::stdout().flush()?;
        }
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = decode_line(&buf);

        match api.execute(&line) {
            Ok(result) => {
                render::print_messages(&result.messages);
                if result.show_help {
                    render::print_help();
                }
                if result.exit {
                    break;
                }
            }
            Err(e) => render::print_error(&e),
        }
    }
    Ok(())
}

/// Bytes that are not UTF-8 become U+FFFD instead of ending the session.
fn decode_line(buf: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(decode_line(b"list\n"), "list\n");
        assert_eq!(
            decode_line(b"lastvisit 1 lv/\xff\xfe\n"),
            "lastvisit 1 lv/\u{fffd}\u{fffd}\n"
        );
    }
}
