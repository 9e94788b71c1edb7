//! Browser entry point: loads panel options from the page, owns the panel
//! through `use_settings_panel`, and lays out the overlay components.

use log::{debug, warn};
use settings_panel::config::{DEFAULT_VOLUME, OPTIONS_ELEMENT_ID};
use settings_panel::{ChannelId, PanelOptions, SettingsElements};
use yew::prelude::*;

mod components;
mod hooks;

use components::{Dimmer, SettingsButton, SettingsOverlay, VolumeRow};
use hooks::use_settings_panel;

/// Read panel options from the JSON `<script>` block embedded in the page.
///
/// A missing block means defaults; a malformed one is logged and also falls
/// back to defaults.
fn read_page_options() -> PanelOptions {
    let Some(element) = gloo_utils::document().get_element_by_id(OPTIONS_ELEMENT_ID) else {
        debug!("No #{} element on the page, using default options", OPTIONS_ELEMENT_ID);
        return PanelOptions::default();
    };
    let json = element.text_content().unwrap_or_default();
    PanelOptions::from_json(&json).unwrap_or_else(|err| {
        warn!("{}; using default options", err);
        PanelOptions::default()
    })
}

/// Primary application component: the settings button, dimmer and overlay.
#[function_component(App)]
fn app() -> Html {
    let options = use_memo((), |_| read_page_options());
    let settings = use_settings_panel(SettingsElements::default(), *options);
    let view = &settings.view;
    let els = &settings.elements;

    let panel_visible = view.is_visible(&els.panel.panel).unwrap_or(false);
    let dimmer_visible = view.is_visible(&els.panel.dimmer).unwrap_or(false);

    html! {
        <div class="settings-app">
            <Dimmer element={els.panel.dimmer.clone()} visible={dimmer_visible} />
            <SettingsOverlay
                element={els.panel.panel.clone()}
                close_element={els.panel.close_control.clone()}
                visible={panel_visible}
                on_click={settings.on_click.clone()}
            >
                { for ChannelId::ALL.iter().map(|&id| {
                    let ch = els.channel(id);
                    html! {
                        <VolumeRow
                            key={id.as_str()}
                            channel={id}
                            elements={ch.clone()}
                            position={view.slider(&ch.slider).unwrap_or(DEFAULT_VOLUME)}
                            readout={AttrValue::from(view.text(&ch.readout).unwrap_or_default().to_owned())}
                            on_click={settings.on_click.clone()}
                            on_drag={settings.on_drag.clone()}
                        />
                    }
                }) }
            </SettingsOverlay>
            <SettingsButton
                element={els.panel.open_control.clone()}
                on_click={settings.on_click.clone()}
            />
        </div>
    }
}

/// Entry point: installs the panic hook and console logger, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();
    yew::Renderer::<App>::new().render();
}
