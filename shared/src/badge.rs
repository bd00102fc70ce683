#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeStyle {
    Success,
    Warning,
    Danger,
    #[default]
    Neutral,
}

impl BadgeStyle {
    /// Case-insensitive status mapping; unknown or missing statuses are neutral.
    pub fn for_status(status: Option<&str>) -> Self {
        match status.map(|s| s.trim().to_lowercase()).as_deref() {
            Some("paid") => BadgeStyle::Success,
            Some("partial") => BadgeStyle::Warning,
            Some("overdue") => BadgeStyle::Danger,
            _ => BadgeStyle::Neutral,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeStyle::Success => "badge bg-success",
            BadgeStyle::Warning => "badge bg-warning text-dark",
            BadgeStyle::Danger => "badge bg-danger",
            BadgeStyle::Neutral => "badge bg-secondary",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BadgeStyle::Success => "var(--color-success)",
            BadgeStyle::Warning => "var(--color-warning)",
            BadgeStyle::Danger => "var(--color-error)",
            BadgeStyle::Neutral => "var(--fg-muted)",
        }
    }
}
