//! Render interface between the panel core and whatever displays it.
//!
//! The core never touches the DOM. It writes element state through [`View`],
//! and the front-end renders from a [`ViewState`] snapshot.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The three things the core can ask the view layer to do.
pub trait View {
    /// Show or hide an element.
    fn set_visible(&mut self, element: &str, visible: bool);
    /// Move a slider handle to an integer position.
    fn set_slider(&mut self, element: &str, position: u8);
    /// Replace an element's text.
    fn set_text(&mut self, element: &str, text: &str);
}

// Channels and the panel state each own a handle to the same view.
impl<V: View> View for Rc<RefCell<V>> {
    fn set_visible(&mut self, element: &str, visible: bool) {
        self.borrow_mut().set_visible(element, visible);
    }

    fn set_slider(&mut self, element: &str, position: u8) {
        self.borrow_mut().set_slider(element, position);
    }

    fn set_text(&mut self, element: &str, text: &str) {
        self.borrow_mut().set_text(element, text);
    }
}

/// Last value written to each element, keyed by element id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    visible: HashMap<String, bool>,
    sliders: HashMap<String, u8>,
    texts: HashMap<String, String>,
}

pub type SharedView = Rc<RefCell<ViewState>>;

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty view ready to be handed to `initialize_panel`.
    pub fn shared() -> SharedView {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn is_visible(&self, element: &str) -> Option<bool> {
        self.visible.get(element).copied()
    }

    pub fn slider(&self, element: &str) -> Option<u8> {
        self.sliders.get(element).copied()
    }

    pub fn text(&self, element: &str) -> Option<&str> {
        self.texts.get(element).map(String::as_str)
    }
}

impl View for ViewState {
    fn set_visible(&mut self, element: &str, visible: bool) {
        self.visible.insert(element.to_owned(), visible);
    }

    fn set_slider(&mut self, element: &str, position: u8) {
        self.sliders.insert(element.to_owned(), position);
    }

    fn set_text(&mut self, element: &str, text: &str) {
        self.texts.insert(element.to_owned(), text.to_owned());
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_elements_read_back_as_none() {
        let view = ViewState::new();
        assert_eq!(view.is_visible("cover"), None);
        assert_eq!(view.slider("master_volume"), None);
        assert_eq!(view.text("master_volume_value"), None);
    }

    #[test]
    fn shared_handle_writes_through() {
        let view = ViewState::shared();
        let mut handle = view.clone();
        handle.set_text("sfx_volume_value", "12");
        handle.set_slider("sfx_volume", 12);
        handle.set_visible("cover", true);

        let state = view.borrow();
        assert_eq!(state.text("sfx_volume_value"), Some("12"));
        assert_eq!(state.slider("sfx_volume"), Some(12));
        assert_eq!(state.is_visible("cover"), Some(true));
    }

    #[test]
    fn later_writes_replace_earlier_ones() {
        let mut view = ViewState::new();
        view.set_text("bgm_volume_value", "50");
        view.set_text("bgm_volume_value", "51");
        assert_eq!(view.text("bgm_volume_value"), Some("51"));
    }
}
