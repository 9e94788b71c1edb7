//! Open/closed state of the settings overlay and its page dimmer.

use crate::view::View;

/// Ids of the overlay elements that are shown and hidden together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelElements {
    pub panel: String,
    pub dimmer: String,
    pub open_control: String,
    pub close_control: String,
}

impl Default for PanelElements {
    fn default() -> Self {
        Self {
            panel: "settings_screen".to_owned(),
            dimmer: "cover".to_owned(),
            open_control: "settings_toggle".to_owned(),
            close_control: "cancel_button".to_owned(),
        }
    }
}

pub struct PanelState<V: View> {
    is_open: bool,
    elements: PanelElements,
    view: V,
}

impl<V: View> PanelState<V> {
    /// Starts closed.
    pub fn new(elements: PanelElements, view: V) -> Self {
        Self {
            is_open: false,
            elements,
            view,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn elements(&self) -> &PanelElements {
        &self.elements
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.is_open);
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    /// Push the current visibility to both elements.
    pub fn render(&mut self) {
        self.view.set_visible(&self.elements.panel, self.is_open);
        self.view.set_visible(&self.elements.dimmer, self.is_open);
    }

    fn set_open(&mut self, open: bool) {
        self.is_open = open;
        self.render();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ViewState;

    fn panel() -> PanelState<ViewState> {
        PanelState::new(PanelElements::default(), ViewState::new())
    }

    fn assert_lockstep(p: &PanelState<ViewState>) {
        let panel_visible = p.view.is_visible("settings_screen");
        let dimmer_visible = p.view.is_visible("cover");
        assert_eq!(panel_visible, Some(p.is_open()));
        assert_eq!(panel_visible, dimmer_visible);
    }

    #[test]
    fn starts_closed() {
        assert!(!panel().is_open());
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut p = panel();
        p.toggle();
        assert!(p.is_open());
        assert_lockstep(&p);
        p.toggle();
        assert!(!p.is_open());
        assert_lockstep(&p);
    }

    #[test]
    fn open_and_close_are_idempotent() {
        let mut p = panel();
        p.open();
        p.open();
        assert!(p.is_open());
        assert_lockstep(&p);
        p.close();
        p.close();
        assert!(!p.is_open());
        assert_lockstep(&p);
    }

    #[test]
    fn render_without_change_shows_closed() {
        let mut p = panel();
        p.render();
        assert_lockstep(&p);
        assert_eq!(p.view.is_visible("cover"), Some(false));
    }
}
