//! The four card panels in their fixed left-to-right order.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Panel {
    #[default]
    Main,
    Bio,
    Info,
    Discography,
}

/// Direction of a one-step move along the panel strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards discography (revealed by swiping left).
    Forward,
    /// Towards main (revealed by swiping right).
    Backward,
}

pub const PANELS: [Panel; 4] = [Panel::Main, Panel::Bio, Panel::Info, Panel::Discography];

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::Bio => 1,
            Self::Info => 2,
            Self::Discography => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        PANELS.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Neighbour in `direction`, saturating at either end of the strip.
    pub fn step(self, direction: Direction) -> Self {
        let neighbour = match direction {
            Direction::Forward => self.next(),
            Direction::Backward => self.previous(),
        };
        neighbour.unwrap_or(self)
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Bio => "bio",
            Self::Info => "info",
            Self::Discography => "discography",
        }
    }

    /// Text shown on the tab button.
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Bio => "Bio",
            Self::Info => "Downloads",
            Self::Discography => "Discography",
        }
    }

    /// Name reported to telemetry.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Main => "Main",
            Self::Bio => "Bio",
            Self::Info => "Info",
            Self::Discography => "Discography",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "main" => Some(Self::Main),
            "bio" => Some(Self::Bio),
            "info" | "downloads" => Some(Self::Info),
            "discography" => Some(Self::Discography),
            _ => None,
        }
    }

    /// Which horizontal drags may move this panel.
    pub fn accepts_drag(self, diff: f64) -> bool {
        match self {
            Self::Main => diff < 0.0,
            Self::Bio | Self::Info => diff != 0.0,
            Self::Discography => diff > 0.0,
        }
    }

    /// Max-width classes for the card container while this panel is active.
    pub fn container_class(self) -> &'static str {
        match self {
            Self::Bio => "sm:max-w-[1200px] sm:w-[90vw]",
            Self::Info => "sm:max-w-[600px]",
            Self::Main | Self::Discography => "max-w-[458px]",
        }
    }
}

impl std::fmt::Display for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_fixed() {
        assert!(Panel::Main < Panel::Bio);
        assert!(Panel::Bio < Panel::Info);
        assert!(Panel::Info < Panel::Discography);
        for (index, panel) in PANELS.iter().enumerate() {
            assert_eq!(panel.index(), index);
            assert_eq!(Panel::from_index(index), Some(*panel));
        }
        assert_eq!(Panel::from_index(4), None);
    }

    #[test]
    fn step_saturates_at_both_ends() {
        assert_eq!(Panel::Main.step(Direction::Backward), Panel::Main);
        assert_eq!(Panel::Main.step(Direction::Forward), Panel::Bio);
        assert_eq!(Panel::Info.step(Direction::Forward), Panel::Discography);
        assert_eq!(Panel::Discography.step(Direction::Forward), Panel::Discography);
        assert_eq!(Panel::Discography.step(Direction::Backward), Panel::Info);
    }

    #[test]
    fn drag_acceptance_models_a_linear_strip() {
        assert!(Panel::Main.accepts_drag(-20.0));
        assert!(!Panel::Main.accepts_drag(20.0));
        assert!(Panel::Bio.accepts_drag(20.0) && Panel::Bio.accepts_drag(-20.0));
        assert!(Panel::Info.accepts_drag(20.0) && Panel::Info.accepts_drag(-20.0));
        assert!(Panel::Discography.accepts_drag(20.0));
        assert!(!Panel::Discography.accepts_drag(-20.0));
    }

    #[test]
    fn keys_round_trip() {
        for panel in PANELS {
            assert_eq!(Panel::from_key(panel.key()), Some(panel));
        }
        assert_eq!(Panel::from_key("Downloads"), Some(Panel::Info));
        assert_eq!(Panel::from_key("settings"), None);
    }
}
