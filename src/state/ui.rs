//! Local UI chrome state (dark mode, active records tab).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs available on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordTab {
    /// Summary of the newest records across all categories.
    #[default]
    Overview,
    Vaccines,
    Medications,
    Allergies,
    Vitals,
    Labs,
}

impl RecordTab {
    /// Tab strip order and labels.
    pub const ALL: [(RecordTab, &'static str); 6] = [
        (RecordTab::Overview, "Overview"),
        (RecordTab::Vaccines, "Vaccines"),
        (RecordTab::Medications, "Medications"),
        (RecordTab::Allergies, "Allergies"),
        (RecordTab::Vitals, "Vitals"),
        (RecordTab::Labs, "Lab results"),
    ];
}

/// UI state for presentation concerns that outlive a single page render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub record_tab: RecordTab,
}
