//! State model for the audio settings overlay: three bounded volume channels
//! and the open/closed state of the panel and its dimmer.
//!
//! The core renders through the [`view::View`] trait and never touches the DOM,
//! so everything here runs and tests natively. The Yew front-end lives in the
//! binary target.

pub mod channel;
pub mod config;
pub mod error;
pub mod panel;
pub mod settings;
pub mod view;
pub mod volume;

pub use channel::{ChannelElements, ChannelId, VolumeChannel};
pub use config::{PanelOptions, ReadoutSync, TriggerMode};
pub use error::PanelError;
pub use panel::{PanelElements, PanelState};
pub use settings::{initialize_panel, Control, PanelEvent, SettingsElements, SettingsPanel};
pub use view::{SharedView, View, ViewState};
pub use volume::Volume;
