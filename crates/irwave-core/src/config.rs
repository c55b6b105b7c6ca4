//! Generation parameters.

use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, EncodeResult};
use crate::protocol::FRAME_GAP_US;

/// Timing compensation factor matching the playback drift observed on
/// common consumer sound cards. Off by default; see
/// [`GeneratorConfig::timing_compensation`].
pub const PLAYBACK_COMPENSATION: f64 = 1.035;

/// Pulse duty cycle used when none is configured, stereo differential mode.
const STEREO_DUTY: f64 = 0.7;
/// Pulse duty cycle used when none is configured, mono modes.
const MONO_DUTY: f64 = 0.5;

/// How timing segments are rendered into audio channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modulation {
    /// Anti-phase square carrier on left and right. Wiring an IR diode
    /// across the two channels doubles the drive voltage.
    #[default]
    StereoDifferential,
    /// Single-channel unipolar square carrier.
    MonoSquare,
    /// Single-channel rectified sine carrier.
    MonoSine,
}

impl Modulation {
    /// Returns true when rendering produces two channels.
    pub fn is_stereo(self) -> bool {
        matches!(self, Modulation::StereoDifferential)
    }

    /// Pulse duty cycle used when the config does not set one.
    pub(crate) fn default_duty(self) -> f64 {
        match self {
            Modulation::StereoDifferential => STEREO_DUTY,
            Modulation::MonoSquare | Modulation::MonoSine => MONO_DUTY,
        }
    }
}

/// Parameters controlling carrier synthesis and signal assembly.
///
/// A config value is immutable for the duration of a generation call;
/// changing the carrier means building a new config, never mutating one a
/// concurrent call might see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Carrier frequency in Hz.
    #[serde(default = "default_carrier_hz")]
    pub carrier_hz: f64,
    /// Output sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Channel layout and carrier shape.
    #[serde(default)]
    pub modulation: Modulation,
    /// Pulse duty cycle in (0, 1). `None` selects the per-mode default
    /// (0.7 stereo differential, 0.5 mono square). The rectified sine
    /// carrier has no duty cycle and ignores this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_cycle: Option<f64>,
    /// Peak sample amplitude in (0, 1].
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Multiplier applied to every segment duration before sampling.
    /// 1.0 renders nominal protocol timing; [`PLAYBACK_COMPENSATION`]
    /// pre-stretches the signal for sound cards that play slightly fast.
    #[serde(default = "default_timing_compensation")]
    pub timing_compensation: f64,
    /// Number of full frames to transmit.
    #[serde(default = "default_repeat_count")]
    pub repeat_count: u32,
    /// Silence between repeated frames, in microseconds.
    #[serde(default = "default_frame_gap_us")]
    pub frame_gap_us: f64,
}

fn default_carrier_hz() -> f64 {
    38_000.0
}

fn default_sample_rate() -> u32 {
    192_000
}

fn default_amplitude() -> f64 {
    0.85
}

fn default_timing_compensation() -> f64 {
    1.0
}

fn default_repeat_count() -> u32 {
    1
}

fn default_frame_gap_us() -> f64 {
    FRAME_GAP_US
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            carrier_hz: default_carrier_hz(),
            sample_rate: default_sample_rate(),
            modulation: Modulation::default(),
            duty_cycle: None,
            amplitude: default_amplitude(),
            timing_compensation: default_timing_compensation(),
            repeat_count: default_repeat_count(),
            frame_gap_us: default_frame_gap_us(),
        }
    }
}

impl GeneratorConfig {
    /// Checks every field, failing on the first invalid value.
    ///
    /// Runs before any buffer is allocated so a bad config never produces
    /// partial output. A carrier above the Nyquist limit passes validation;
    /// the rendered samples simply cannot represent it.
    pub fn validate(&self) -> EncodeResult<()> {
        if self.sample_rate == 0 {
            return Err(EncodeError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.carrier_hz.is_finite() || self.carrier_hz <= 0.0 {
            return Err(EncodeError::InvalidCarrierFrequency {
                freq: self.carrier_hz,
            });
        }
        if let Some(duty) = self.duty_cycle {
            if !duty.is_finite() || duty <= 0.0 || duty >= 1.0 {
                return Err(EncodeError::InvalidDutyCycle { duty });
            }
        }
        if !self.amplitude.is_finite() || self.amplitude <= 0.0 || self.amplitude > 1.0 {
            return Err(EncodeError::InvalidAmplitude {
                amplitude: self.amplitude,
            });
        }
        if !self.timing_compensation.is_finite() || self.timing_compensation <= 0.0 {
            return Err(EncodeError::InvalidTimingCompensation {
                factor: self.timing_compensation,
            });
        }
        if self.repeat_count < 1 {
            return Err(EncodeError::InvalidRepeatCount {
                count: self.repeat_count,
            });
        }
        if !self.frame_gap_us.is_finite() || self.frame_gap_us <= 0.0 {
            return Err(EncodeError::InvalidFrameGap {
                gap_us: self.frame_gap_us,
            });
        }
        Ok(())
    }

    /// The pulse duty cycle the renderer will use.
    pub fn effective_duty(&self) -> f64 {
        self.duty_cycle
            .unwrap_or_else(|| self.modulation.default_duty())
    }

    /// Carrier period in samples at the configured rate.
    pub(crate) fn carrier_period_samples(&self) -> f64 {
        f64::from(self.sample_rate) / self.carrier_hz
    }
}
