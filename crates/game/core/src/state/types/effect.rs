use super::Position;

/// Audio cue that accompanies an effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundCue {
    /// Opaque asset key understood by the audio collaborator.
    pub asset: String,
    /// Playback volume, 0 to 100.
    pub volume_percent: u8,
}

/// What the renderer should play for an effect.
///
/// Both fields are asset keys; the core never resolves them. A key that the
/// renderer cannot find only affects presentation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectPayload {
    pub animation: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sound: Option<SoundCue>,
}

impl EffectPayload {
    pub const HIT_ANIMATION: &'static str = "slash";
    pub const HIT_SOUND: &'static str = "/assets/ninja-adventure/sounds/game/hit.wav";
    pub const HIT_VOLUME_PERCENT: u8 = 25;

    pub fn new(animation: impl Into<String>) -> Self {
        Self {
            animation: animation.into(),
            sound: None,
        }
    }

    #[must_use]
    pub fn with_sound(mut self, asset: impl Into<String>, volume_percent: u8) -> Self {
        self.sound = Some(SoundCue {
            asset: asset.into(),
            volume_percent: volume_percent.min(100),
        });
        self
    }

    /// Slash animation with the hit sound, used when an attack lands.
    pub fn hit() -> Self {
        Self::new(Self::HIT_ANIMATION).with_sound(Self::HIT_SOUND, Self::HIT_VOLUME_PERCENT)
    }
}

impl Default for EffectPayload {
    fn default() -> Self {
        Self::hit()
    }
}

/// The single transient effect slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectState {
    pub position: Position,
    pub playing: bool,
    pub payload: EffectPayload,
}

impl EffectState {
    pub fn playing(position: Position, payload: EffectPayload) -> Self {
        Self {
            position,
            playing: true,
            payload,
        }
    }
}
