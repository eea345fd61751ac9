//! Client-side category filtering.

use std::fmt;
use wevt_sdk::objects::{Category, Event};

/// Selected category filter.
///
/// `Named` keeps the raw string; matching is case-insensitive against the
/// event's category name, so a name no event carries simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub const ALL_KEYWORD: &'static str = "all";

    /// Parse user input. `"all"` (any case) selects everything.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case(Self::ALL_KEYWORD) {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(input.to_string())
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => event.category.as_str().eq_ignore_ascii_case(name),
        }
    }

    /// Value as it would be submitted from the selector.
    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_KEYWORD,
            CategoryFilter::Named(name) => name,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Named(category.as_str().to_string())
    }
}

impl fmt::Display for CategoryFilter {
    /// Selector label.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All Categories"),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

/// Events matching `filter`, in list order.
pub fn filter_events<'a>(events: &'a [Event], filter: &CategoryFilter) -> Vec<&'a Event> {
    events.iter().filter(|e| filter.matches(e)).collect()
}

/// Selector options: `All`, then each distinct category in order of first
/// appearance in `events`.
pub fn category_options(events: &[Event]) -> Vec<CategoryFilter> {
    let mut seen: Vec<Category> = Vec::with_capacity(Category::ALL.len());
    for event in events {
        if !seen.contains(&event.category) {
            seen.push(event.category);
        }
    }
    std::iter::once(CategoryFilter::All)
        .chain(seen.into_iter().map(CategoryFilter::from))
        .collect()
}
