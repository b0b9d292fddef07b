//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! ordering and renumbering issues.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=list=debug` - row sequence changes only
//! - `RUST_LOG=ranklist::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/ranklist/logs/ranklist.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::LOG_FILE_PREFIX;
use crate::model::{RankedList, RowId};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The file layer always
/// logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the row sequence for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    pub order: Vec<RowId>,
    pub labels: Vec<String>,
    pub next_position: usize,
}

impl ListSnapshot {
    pub fn from_list(list: &RankedList) -> Self {
        Self {
            order: list.ids(),
            labels: list.labels().into_iter().map(str::to_string).collect(),
            next_position: list.next_position(),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &ListSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.order.len() != other.order.len() {
            changes.push(format!(
                "row count: {} → {}",
                self.order.len(),
                other.order.len()
            ));
        } else if self.order != other.order {
            let moved = self
                .order
                .iter()
                .zip(&other.order)
                .filter(|(a, b)| a != b)
                .count();
            changes.push(format!("reordered ({} slots changed)", moved));
        }

        if self.labels != other.labels && self.order.len() == other.order.len() {
            changes.push("labels rewritten".to_string());
        }

        if self.next_position != other.next_position {
            changes.push(format!(
                "next position: {} → {}",
                self.next_position, other.next_position
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
