//! Tab view model shared by the input progress indicator and the
//! dashboard content switch. Pure selection state, no side effects.

/// The five fixed dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Personas,
    Messaging,
    Channels,
    Calendar,
    Budget,
}

impl Tab {
    /// Display order, used for the numbered progress indicator.
    pub const ALL: [Tab; 5] = [
        Tab::Personas,
        Tab::Messaging,
        Tab::Channels,
        Tab::Calendar,
        Tab::Budget,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tab::Personas => "personas",
            Tab::Messaging => "messaging",
            Tab::Channels => "channels",
            Tab::Calendar => "calendar",
            Tab::Budget => "budget",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Personas => "Personas",
            Tab::Messaging => "Messaging/Copy",
            Tab::Channels => "Channel Ranking",
            Tab::Calendar => "Content Calendar",
            Tab::Budget => "Budget/KPIs",
        }
    }

    /// 1-based position in the display order.
    #[must_use]
    pub fn ordinal(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0) + 1
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

/// Single-select tab state; defaults to the personas section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }
}
