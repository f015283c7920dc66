use crate::domain::models::HealthStatus;

/// Color token for a status dot. The theme decides what each token looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Green,
    Yellow,
    Red,
    /// Fallback for statuses outside the known set.
    Neutral,
}

#[must_use]
pub fn status_color(status: &HealthStatus) -> StatusColor {
    match status {
        HealthStatus::Healthy => StatusColor::Green,
        HealthStatus::Warning => StatusColor::Yellow,
        HealthStatus::Critical => StatusColor::Red,
        HealthStatus::Unrecognized(_) => StatusColor::Neutral,
    }
}
