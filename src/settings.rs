//! The settings panel as a whole: three channels and the overlay state,
//! built once at startup and driven by input events from the page.

use log::{debug, info};

use crate::channel::{ChannelElements, ChannelId, VolumeChannel};
use crate::config::{PanelOptions, TriggerMode};
use crate::error::PanelError;
use crate::panel::{PanelElements, PanelState};
use crate::view::View;

/// Every element id the panel binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsElements {
    pub panel: PanelElements,
    pub channels: [ChannelElements; 3],
}

impl Default for SettingsElements {
    fn default() -> Self {
        Self {
            panel: PanelElements::default(),
            channels: ChannelId::ALL.map(ChannelElements::for_channel),
        }
    }
}

impl SettingsElements {
    pub fn channel(&self, id: ChannelId) -> &ChannelElements {
        &self.channels[id.index()]
    }
}

/// A clickable control on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Open,
    Close,
    Increment(ChannelId),
    Decrement(ChannelId),
}

/// One discrete input from the view layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    Click(Control),
    Drag { channel: ChannelId, position: f64 },
}

pub struct SettingsPanel<V: View> {
    channels: [VolumeChannel<V>; 3],
    panel: PanelState<V>,
    options: PanelOptions,
}

/// Build the panel, render its initial state, and hand back the owner of all
/// channel and overlay state.
pub fn initialize_panel<V: View + Clone>(
    elements: SettingsElements,
    options: PanelOptions,
    view: V,
) -> SettingsPanel<V> {
    let SettingsElements { panel, channels } = elements;
    let [master, sfx, bgm] = channels;
    let make = |id, els| VolumeChannel::new(id, els, options.readout_sync, view.clone());

    let mut settings = SettingsPanel {
        channels: [
            make(ChannelId::Master, master),
            make(ChannelId::Sfx, sfx),
            make(ChannelId::Bgm, bgm),
        ],
        panel: PanelState::new(panel, view),
        options,
    };
    settings.render();

    info!(
        "Settings panel initialized ({:?} readout, {:?} triggers)",
        options.readout_sync, options.trigger_mode
    );
    settings
}

impl<V: View> SettingsPanel<V> {
    pub fn channel(&self, id: ChannelId) -> &VolumeChannel<V> {
        &self.channels[id.index()]
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Re-render every bound element from the current state.
    pub fn render(&mut self) {
        for channel in &mut self.channels {
            channel.render();
        }
        self.panel.render();
    }

    /// Route one input event to the channel or overlay that owns it.
    pub fn dispatch(&mut self, event: PanelEvent) {
        debug!("Dispatching {:?}", event);
        match event {
            PanelEvent::Click(Control::Open) => match self.options.trigger_mode {
                TriggerMode::Explicit => self.panel.open(),
                TriggerMode::Toggle => self.panel.toggle(),
            },
            PanelEvent::Click(Control::Close) => match self.options.trigger_mode {
                TriggerMode::Explicit => self.panel.close(),
                TriggerMode::Toggle => self.panel.toggle(),
            },
            PanelEvent::Click(Control::Increment(id)) => self.channels[id.index()].increment(),
            PanelEvent::Click(Control::Decrement(id)) => self.channels[id.index()].decrement(),
            PanelEvent::Drag { channel, position } => {
                self.channels[channel.index()].set_from_drag(position)
            }
        }
    }

    /// Resolve a clicked element id to the control it is bound to.
    pub fn control_for(&self, element: &str) -> Result<Control, PanelError> {
        let panel = self.panel.elements();
        if element == panel.open_control {
            return Ok(Control::Open);
        }
        if element == panel.close_control {
            return Ok(Control::Close);
        }
        self.channels
            .iter()
            .find_map(|ch| {
                let els = ch.elements();
                if element == els.increment {
                    Some(Control::Increment(ch.id()))
                } else if element == els.decrement {
                    Some(Control::Decrement(ch.id()))
                } else {
                    None
                }
            })
            .ok_or_else(|| PanelError::UnknownControl(element.to_owned()))
    }

    /// Handle a click reported by element id.
    pub fn click(&mut self, element: &str) -> Result<(), PanelError> {
        let control = self.control_for(element)?;
        self.dispatch(PanelEvent::Click(control));
        Ok(())
    }
}
