//! Plain-text rendering of the dashboard.

use std::fmt::Write;
use std::time::Duration;
use time::UtcOffset;
use time::macros::format_description;
use wevt_core::dashboard::DashboardState;
use wevt_sdk::objects::{Event, Severity};

const RULE: &str = "------------------------------------------------------------";

/// Render the whole view: header, controls, cards or the empty state.
///
/// Event times are shown at `offset`.
pub fn render(state: &DashboardState, interval: Duration, offset: UtcOffset) -> String {
    let mut out = String::new();
    let visible = state.visible_events();

    let _ = writeln!(out, "World Events Agent");
    let _ = writeln!(out, "Real-time monitoring of global events and news");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", controls(state, interval, visible.len()));
    let _ = writeln!(out, "{RULE}");

    if visible.is_empty() {
        if !state.loading {
            let _ = writeln!(out, "No events found");
            let _ = writeln!(out, "Try refreshing or changing the filter");
        }
        return out;
    }

    for event in visible {
        out.push_str(&card(event, offset));
        let _ = writeln!(out, "{RULE}");
    }
    out
}

fn controls(state: &DashboardState, interval: Duration, visible: usize) -> String {
    let refresh = if state.loading {
        "[Loading...]"
    } else {
        "[Refresh Events]"
    };
    let auto = if state.auto_refresh { "on" } else { "off" };
    format!(
        "{refresh}  auto-refresh ({}s): {auto}  category: {}  {visible} events found",
        interval.as_secs(),
        state.filter,
    )
}

/// Selectable categories, marking the active one.
pub fn render_categories(state: &DashboardState) -> String {
    state
        .category_options()
        .iter()
        .map(|option| {
            let selected = option.value().eq_ignore_ascii_case(state.filter.value());
            let marker = if selected { "*" } else { " " };
            format!("{marker} {} ({})", option, option.value())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "!!! HIGH",
        Severity::Medium => "!!  MEDIUM",
        Severity::Low => "!   LOW",
    }
}

fn card(event: &Event, offset: UtcOffset) -> String {
    let clock = format_description!("[hour]:[minute]:[second]");
    let local = event.timestamp.to_offset(offset);
    let mut at = local.format(&clock).unwrap_or_else(|_| local.to_string());
    if offset.is_utc() {
        at.push_str(" UTC");
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  [{}]",
        severity_marker(event.severity),
        event.category
    );
    let _ = writeln!(out, "{}", event.title);
    let _ = writeln!(out, "  {}", event.description);
    let _ = writeln!(out, "  Region: {}  |  {}", event.region, at);
    let _ = writeln!(out, "  Source: {}", event.source);
    out
}
