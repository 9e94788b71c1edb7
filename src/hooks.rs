use log::warn;
use settings_panel::{
    initialize_panel, ChannelId, PanelEvent, PanelOptions, SettingsElements, SharedView,
    ViewState,
};
use yew::prelude::*;

/// Snapshot of the panel for one render, plus the callbacks that feed input back in.
#[derive(Clone)]
pub struct SettingsPanelHandle {
    /// Element ids the panel is bound to.
    pub elements: SettingsElements,
    /// What the core last rendered, keyed by element id.
    pub view: ViewState,
    /// Click on an element, reported by its id.
    pub on_click: Callback<String>,
    /// Slider drag: channel and raw slider position.
    pub on_drag: Callback<(ChannelId, f64)>,
}

/// Helper to bump the render version and trigger a re-render
fn update_render_version(render_version: &UseStateHandle<usize>) {
    render_version.set(render_version.wrapping_add(1));
}

/// Custom hook owning the settings panel for the lifetime of the component.
///
/// The panel is built once with `initialize_panel` and kept in a mutable ref;
/// it writes into a shared `ViewState`, and each handled event bumps a render
/// version so the component re-renders from the updated view.
#[hook]
pub fn use_settings_panel(elements: SettingsElements, options: PanelOptions) -> SettingsPanelHandle {
    let view: SharedView = use_mut_ref(ViewState::new);
    let panel = {
        let view = view.clone();
        let elements = elements.clone();
        use_mut_ref(move || initialize_panel(elements, options, view))
    };
    let render_version = use_state(|| 0usize);

    let on_click = {
        let panel = panel.clone();
        let render_version = render_version.clone();
        Callback::from(move |element: String| {
            let result = panel.borrow_mut().click(&element);
            match result {
                Ok(()) => update_render_version(&render_version),
                Err(err) => warn!("Ignoring click: {}", err),
            }
        })
    };

    let on_drag = {
        let panel = panel.clone();
        let render_version = render_version.clone();
        Callback::from(move |(channel, position): (ChannelId, f64)| {
            panel
                .borrow_mut()
                .dispatch(PanelEvent::Drag { channel, position });
            update_render_version(&render_version);
        })
    };

    let snapshot = view.borrow().clone();
    SettingsPanelHandle {
        elements,
        view: snapshot,
        on_click,
        on_drag,
    }
}
