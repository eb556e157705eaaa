//! Feed presentation rules.
//!
//! Pure helpers applied to already-fetched project lists: ordering, funding
//! progress, free-text matching and role-specific calls to action.

use serde::Serialize;

use crate::types::{ProjectStatus, UserRole};

/// Number of tags shown on a feed card.
pub const MAX_CARD_TAGS: usize = 3;

/// Upper bound for the progress bar.
pub const MAX_PROGRESS_PERCENT: f64 = 100.0;

/// The primary action a role is offered on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallToAction {
    Review,
    Invest,
    ViewDetails,
}

/// Stable sort that moves featured items to the front.
///
/// Items with equal featured-ness keep their original relative order.
pub fn sort_featured_first<T>(items: &mut [T], is_featured: impl Fn(&T) -> bool) {
    items.sort_by_key(|item| !is_featured(item));
}

/// Raw funding ratio in percent. Zero when the goal is zero or negative.
pub fn funding_percentage(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 || !goal.is_finite() {
        return 0.0;
    }
    current / goal * 100.0
}

/// Funding percentage clamped to `[0, 100]` for the progress bar.
pub fn progress_percentage(current: f64, goal: f64) -> f64 {
    funding_percentage(current, goal).clamp(0.0, MAX_PROGRESS_PERCENT)
}

/// Which action button a role gets for a project in a given status.
///
/// Analysts review pending work, investors back anything past pending, and
/// students can always open the details view.
pub fn call_to_action(role: UserRole, status: ProjectStatus) -> Option<CallToAction> {
    match role {
        UserRole::Analyst if status == ProjectStatus::Pending => Some(CallToAction::Review),
        UserRole::Investor if status != ProjectStatus::Pending => Some(CallToAction::Invest),
        UserRole::Student => Some(CallToAction::ViewDetails),
        _ => None,
    }
}

/// Analysts and investors see the analyst metrics panel.
pub fn shows_analyst_metrics(role: UserRole) -> bool {
    matches!(role, UserRole::Analyst | UserRole::Investor)
}

/// Case-insensitive substring match of `query` against any haystack.
///
/// A blank query matches everything.
pub fn matches_query<'a>(query: &str, haystacks: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .into_iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

/// The first [`MAX_CARD_TAGS`] tags.
pub fn display_tags(tags: &[String]) -> &[String] {
    &tags[..tags.len().min(MAX_CARD_TAGS)]
}
