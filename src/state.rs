//! Transient view state for one app run. Four independent slots with total
//! setters; nothing here is validated or persisted.

use crate::sections::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub section: Section,
    /// Overlay menu flag; only honored below the compact width breakpoint.
    pub menu_open: bool,
    pub view_mode: ViewMode,
    /// Day-of-month shown highlighted in the schedule strip. Unchecked; an
    /// out-of-range value simply highlights no button.
    pub selected_day: u8,
}

impl ViewState {
    pub fn new(section: Section, today: u8) -> Self {
        Self {
            section,
            menu_open: false,
            view_mode: ViewMode::Grid,
            selected_day: today,
        }
    }

    /// Selecting a section closes the overlay menu. No other side effect.
    pub fn select_section(&mut self, section: Section) {
        self.section = section;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn select_day(&mut self, day: u8) {
        self.selected_day = day;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> ViewState {
        ViewState::new(Section::Schedule, 15)
    }

    #[test]
    fn defaults_are_schedule_grid_closed_menu() {
        let state = fresh();
        assert_eq!(state.section, Section::Schedule);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert!(!state.menu_open);
        assert_eq!(state.selected_day, 15);
    }

    #[test]
    fn selecting_a_section_closes_the_menu_and_nothing_else() {
        let mut state = fresh();
        state.toggle_menu();
        state.select_day(22);
        state.set_view_mode(ViewMode::List);
        assert!(state.menu_open);

        state.select_section(Section::Forum);

        assert_eq!(state.section, Section::Forum);
        assert!(!state.menu_open);
        // the other slots are untouched
        assert_eq!(state.selected_day, 22);
        assert_eq!(state.view_mode, ViewMode::List);
    }

    #[test]
    fn day_setter_is_total() {
        let mut state = fresh();
        state.select_day(0);
        assert_eq!(state.selected_day, 0);
        state.select_day(31);
        assert_eq!(state.selected_day, 31);
        state.select_day(200);
        assert_eq!(state.selected_day, 200);
    }
}
