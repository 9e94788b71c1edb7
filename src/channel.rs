//! Volume channels: one bounded value per audio bus, with its bound elements.

use std::fmt;

use crate::config::{ReadoutSync, VOLUME_STEP};
use crate::view::View;
use crate::volume::Volume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelId {
    Master,
    Sfx,
    Bgm,
}

impl ChannelId {
    pub const ALL: [ChannelId; 3] = [ChannelId::Master, ChannelId::Sfx, ChannelId::Bgm];

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelId::Master => "master",
            ChannelId::Sfx => "sfx",
            ChannelId::Bgm => "bgm",
        }
    }

    /// Human readable label shown next to the slider.
    pub fn label(self) -> &'static str {
        match self {
            ChannelId::Master => "Master Volume",
            ChannelId::Sfx => "Sound Effects",
            ChannelId::Bgm => "Background Music",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ChannelId::Master => 0,
            ChannelId::Sfx => 1,
            ChannelId::Bgm => 2,
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ids of the page elements a channel reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelElements {
    pub slider: String,
    pub readout: String,
    pub increment: String,
    pub decrement: String,
}

impl ChannelElements {
    /// The element ids used by the settings page.
    pub fn for_channel(id: ChannelId) -> Self {
        let (prefix, short) = match id {
            ChannelId::Master => ("master", "mastervol"),
            ChannelId::Sfx => ("sfx", "sfxvol"),
            ChannelId::Bgm => ("bgm", "bgmvol"),
        };
        Self {
            slider: format!("{}_volume", prefix),
            readout: format!("{}_volume_value", prefix),
            increment: format!("plus_{}", short),
            decrement: format!("minus_{}", short),
        }
    }
}

/// A single volume control.
///
/// Owns its value and its render handle. Every mutation renders exactly one
/// readout, this channel's own.
pub struct VolumeChannel<V: View> {
    id: ChannelId,
    value: Volume,
    step: u8,
    elements: ChannelElements,
    readout_sync: ReadoutSync,
    view: V,
}

impl<V: View> VolumeChannel<V> {
    pub fn new(id: ChannelId, elements: ChannelElements, readout_sync: ReadoutSync, view: V) -> Self {
        Self {
            id,
            value: Volume::default(),
            step: VOLUME_STEP,
            elements,
            readout_sync,
            view,
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn value(&self) -> Volume {
        self.value
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn elements(&self) -> &ChannelElements {
        &self.elements
    }

    /// Push the slider position and readout for the current value.
    pub fn render(&mut self) {
        self.view.set_slider(&self.elements.slider, self.value.get());
        self.render_readout(self.value);
    }

    /// Apply a continuous drag position. The slider is rendered back at the
    /// stored integer so a controlled input follows the value.
    pub fn set_from_drag(&mut self, position: f64) {
        if let Some(volume) = Volume::from_position(position) {
            self.value = volume;
        }
        self.render();
    }

    pub fn increment(&mut self) {
        self.step_by(self.step as i32);
    }

    pub fn decrement(&mut self) {
        self.step_by(-(self.step as i32));
    }

    fn step_by(&mut self, delta: i32) {
        let previous = self.value;
        self.value = previous.offset(delta);
        self.view.set_slider(&self.elements.slider, self.value.get());

        let shown = match self.readout_sync {
            ReadoutSync::AfterUpdate => self.value,
            ReadoutSync::BeforeUpdate => previous,
        };
        self.render_readout(shown);
    }

    fn render_readout(&mut self, shown: Volume) {
        self.view.set_text(&self.elements.readout, &shown.to_string());
    }
}

impl<V: View> fmt::Debug for VolumeChannel<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VolumeChannel")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("step", &self.step)
            .field("readout_sync", &self.readout_sync)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::recording::{RecordingView, Write};

    fn channel(sync: ReadoutSync) -> VolumeChannel<RecordingView> {
        VolumeChannel::new(
            ChannelId::Master,
            ChannelElements::for_channel(ChannelId::Master),
            sync,
            RecordingView::default(),
        )
    }

    fn set_to(ch: &mut VolumeChannel<RecordingView>, value: f64) {
        ch.set_from_drag(value);
        ch.view.writes.clear();
    }

    #[test]
    fn default_element_ids_match_page() {
        let els = ChannelElements::for_channel(ChannelId::Sfx);
        assert_eq!(els.slider, "sfx_volume");
        assert_eq!(els.readout, "sfx_volume_value");
        assert_eq!(els.increment, "plus_sfxvol");
        assert_eq!(els.decrement, "minus_sfxvol");
    }

    #[test]
    fn starts_at_fifty_with_step_one() {
        let ch = channel(ReadoutSync::AfterUpdate);
        assert_eq!(ch.value().get(), 50);
        assert_eq!(ch.step(), 1);
    }

    #[test]
    fn drag_rounds_and_clamps() {
        let mut ch = channel(ReadoutSync::AfterUpdate);
        for (input, expected) in [(50.4, 50), (50.6, 51), (-5.0, 0), (105.0, 100)] {
            ch.set_from_drag(input);
            assert_eq!(ch.value().get(), expected, "drag to {}", input);
        }
    }

    #[test]
    fn drag_snaps_slider_and_renders_readout() {
        let mut ch = channel(ReadoutSync::AfterUpdate);
        ch.set_from_drag(80.2);
        assert_eq!(
            ch.view.writes,
            vec![
                Write::Slider("master_volume".into(), 80),
                Write::Text("master_volume_value".into(), "80".into()),
            ]
        );
    }

    #[test]
    fn drag_with_nan_keeps_value() {
        let mut ch = channel(ReadoutSync::AfterUpdate);
        set_to(&mut ch, 30.0);
        ch.set_from_drag(f64::NAN);
        assert_eq!(ch.value().get(), 30);
        assert_eq!(ch.view.texts_for("master_volume_value"), vec!["30"]);
        assert_eq!(ch.view.writes[0], Write::Slider("master_volume".into(), 30));
    }

    #[test]
    fn increment_three_times_then_back() {
        let mut ch = channel(ReadoutSync::AfterUpdate);
        for _ in 0..3 {
            ch.increment();
        }
        assert_eq!(ch.value().get(), 53);
        for _ in 0..3 {
            ch.decrement();
        }
        assert_eq!(ch.value().get(), 50);
    }

    #[test]
    fn increment_at_max_stays_at_max() {
        let mut ch = channel(ReadoutSync::AfterUpdate);
        set_to(&mut ch, 100.0);
        ch.increment();
        assert_eq!(ch.value().get(), 100);
        assert_eq!(
            ch.view.writes,
            vec![
                Write::Slider("master_volume".into(), 100),
                Write::Text("master_volume_value".into(), "100".into()),
            ]
        );
    }

    #[test]
    fn decrement_at_min_stays_at_min() {
        let mut ch = channel(ReadoutSync::AfterUpdate);
        set_to(&mut ch, 0.0);
        ch.decrement();
        assert_eq!(ch.value().get(), 0);
    }

    // Fixed variant: readout always matches the stored value.
    #[test]
    fn after_update_readout_matches_value() {
        let mut ch = channel(ReadoutSync::AfterUpdate);
        ch.increment();
        ch.increment();
        ch.decrement();
        assert_eq!(ch.view.texts_for("master_volume_value"), vec!["51", "52", "51"]);
        assert_eq!(ch.value().get(), 51);
    }

    // Reproduced variant: button clicks show the value from before the click.
    #[test]
    fn before_update_readout_lags_one_step() {
        let mut ch = channel(ReadoutSync::BeforeUpdate);
        ch.increment();
        assert_eq!(ch.value().get(), 51);
        assert_eq!(ch.view.texts_for("master_volume_value"), vec!["50"]);

        ch.increment();
        assert_eq!(ch.view.texts_for("master_volume_value"), vec!["50", "51"]);

        // A drag still shows the dragged value.
        ch.set_from_drag(70.0);
        assert_eq!(ch.view.texts_for("master_volume_value").last(), Some(&"70"));
    }

    #[test]
    fn before_update_lag_vanishes_at_the_bound() {
        let mut ch = channel(ReadoutSync::BeforeUpdate);
        set_to(&mut ch, 100.0);
        ch.increment();
        assert_eq!(ch.view.texts_for("master_volume_value"), vec!["100"]);
    }

    #[test]
    fn render_pushes_slider_and_readout() {
        let mut ch = channel(ReadoutSync::AfterUpdate);
        ch.render();
        assert_eq!(
            ch.view.writes,
            vec![
                Write::Slider("master_volume".into(), 50),
                Write::Text("master_volume_value".into(), "50".into()),
            ]
        );
    }

    #[test]
    fn value_stays_in_range_for_mixed_sequences() {
        let mut ch = channel(ReadoutSync::AfterUpdate);
        let drags = [250.0, -1.0, 99.5, 0.49, 42.0];
        for round in 0..400 {
            match round % 5 {
                0 | 1 => ch.increment(),
                2 => ch.decrement(),
                3 => ch.set_from_drag(drags[round % drags.len()]),
                _ => {
                    for _ in 0..(round % 7) {
                        ch.decrement();
                    }
                }
            }
            assert!(ch.value() >= Volume::MIN && ch.value() <= Volume::MAX);
        }
    }
}
