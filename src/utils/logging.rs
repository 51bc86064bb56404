// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored console formatting

use crate::models::{CheckStatus, ValidationResult};
use colored::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `RUST_LOG` wins over the verbose flag when set.
pub fn init_logger(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(verbose)
        .with_line_number(verbose)
        .compact()
        .with_ansi(colored_output)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();

    colored::control::set_override(colored_output);
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

pub fn format_warning(msg: &str) -> String {
    format!("{} {}", "⚠".yellow().bold(), msg.yellow())
}

pub fn format_info(msg: &str) -> String {
    format!("{} {}", "ℹ".blue().bold(), msg)
}

pub fn format_step(step: usize, total: usize, msg: &str) -> String {
    format!("{} {}", format!("[{}/{}]", step, total).cyan().bold(), msg)
}

pub fn format_check(status: CheckStatus, msg: &str) -> String {
    match status {
        CheckStatus::Good => format_success(msg),
        CheckStatus::Warning => format_warning(msg),
        CheckStatus::Error => format_error(msg),
    }
}

/// Check line for a validation result, with its guidance dimmed on a second
/// line when `with_detail` is set and the result carries any.
pub fn format_finding(result: &ValidationResult, with_detail: bool) -> String {
    let line = format_check(
        result.status,
        &format!("{}: {}", result.check_name, result.message),
    );
    if with_detail && !result.detail.is_empty() {
        format!("{}\n      {}", line, result.detail.dimmed())
    } else {
        line
    }
}

/// Green from 80, yellow from 50, red below.
pub fn format_score(score: u8) -> String {
    let text = format!("{}%", score);
    match score {
        80.. => text.green().bold().to_string(),
        50..=79 => text.yellow().bold().to_string(),
        _ => text.red().bold().to_string(),
    }
}
