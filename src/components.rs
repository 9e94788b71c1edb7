//! Pure Yew view components for the settings overlay.
//!
//! These components hold no state of their own; they render whatever the
//! panel core last wrote into the view and report input back through callbacks.

use log::warn;
use settings_panel::config::{MAX_VOLUME, MIN_VOLUME, VOLUME_STEP};
use settings_panel::{ChannelElements, ChannelId};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Build an `onclick` callback that reports the clicked element id.
fn click_reporter(on_click: &Callback<String>, element: &str) -> Callback<MouseEvent> {
    let on_click = on_click.clone();
    let element = element.to_owned();
    Callback::from(move |_: MouseEvent| on_click.emit(element.clone()))
}

/// Button that opens the settings overlay.
#[derive(Properties, PartialEq)]
pub struct SettingsButtonProps {
    pub element: String,
    pub on_click: Callback<String>,
}

#[function_component(SettingsButton)]
pub fn settings_button(props: &SettingsButtonProps) -> Html {
    html! {
        <div class="settingsbtn">
            <button id={props.element.clone()}
                class="settings_toggle"
                onclick={click_reporter(&props.on_click, &props.element)}
            >
                { "Settings" }
            </button>
        </div>
    }
}

/// Full-page overlay shown behind the open panel.
#[derive(Properties, PartialEq)]
pub struct DimmerProps {
    pub element: String,
    pub visible: bool,
}

#[function_component(Dimmer)]
pub fn dimmer(props: &DimmerProps) -> Html {
    html! {
        <div id={props.element.clone()} class="cover" hidden={!props.visible}></div>
    }
}

/// The settings box itself, with its close button and the channel rows as children.
#[derive(Properties, PartialEq)]
pub struct SettingsOverlayProps {
    pub element: String,
    pub close_element: String,
    pub visible: bool,
    pub on_click: Callback<String>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(SettingsOverlay)]
pub fn settings_overlay(props: &SettingsOverlayProps) -> Html {
    html! {
        <div id={props.element.clone()} class="settings_screen" hidden={!props.visible}>
            <button id={props.close_element.clone()}
                class="cancel_button"
                aria-label="Close settings"
                onclick={click_reporter(&props.on_click, &props.close_element)}
            >
                { "×" }
            </button>
            <div class="settings">
                { props.children.clone() }
            </div>
        </div>
    }
}

/// One channel: label, minus button, slider, plus button and readout.
#[derive(Properties, PartialEq)]
pub struct VolumeRowProps {
    pub channel: ChannelId,
    pub elements: ChannelElements,
    pub position: u8,
    pub readout: AttrValue,
    pub on_click: Callback<String>,
    pub on_drag: Callback<(ChannelId, f64)>,
}

#[function_component(VolumeRow)]
pub fn volume_row(props: &VolumeRowProps) -> Html {
    let els = &props.elements;

    let oninput = {
        let on_drag = props.on_drag.clone();
        let channel = props.channel;
        Callback::from(move |e: InputEvent| {
            let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            else {
                warn!("Slider event for {} had no input target", channel);
                return;
            };
            match input.value().parse::<f64>() {
                Ok(position) => on_drag.emit((channel, position)),
                Err(_) => warn!("Ignoring non-numeric slider value {:?} for {}", input.value(), channel),
            }
        })
    };

    html! {
        <div class="form-group volume-row">
            <label for={els.slider.clone()}>{ props.channel.label() }</label>
            <div class="slider-with-value">
                <button id={els.decrement.clone()}
                    class="plusminusbtn"
                    aria-label={format!("Decrease {}", props.channel.label())}
                    onclick={click_reporter(&props.on_click, &els.decrement)}
                >
                    { "-" }
                </button>
                <input type="range"
                    id={els.slider.clone()}
                    min={MIN_VOLUME.to_string()}
                    max={MAX_VOLUME.to_string()}
                    step={VOLUME_STEP.to_string()}
                    value={props.position.to_string()}
                    {oninput}
                />
                <button id={els.increment.clone()}
                    class="plusminusbtn"
                    aria-label={format!("Increase {}", props.channel.label())}
                    onclick={click_reporter(&props.on_click, &els.increment)}
                >
                    { "+" }
                </button>
                <span id={els.readout.clone()} class="slider_value">{ props.readout.clone() }</span>
            </div>
        </div>
    }
}
