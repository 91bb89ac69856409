use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_tab_is_overview() {
    assert_eq!(UiState::default().record_tab, RecordTab::Overview);
    assert_eq!(RecordTab::default(), RecordTab::Overview);
}

#[test]
fn tab_strip_lists_every_tab_once() {
    let tabs: Vec<RecordTab> = RecordTab::ALL.iter().map(|(tab, _)| *tab).collect();
    for (i, a) in tabs.iter().enumerate() {
        for (j, b) in tabs.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
    assert_eq!(tabs.len(), 6);
}
