use log::{debug, trace};

use crate::error::Result;
use crate::key::{KeyEvent, codes};
use crate::traits::InputSource;

/// Controller-side view of the simulator keyboard.
///
/// Holds no state of its own: the sampling period lives in the source and
/// each read polls it afresh.
#[derive(Debug)]
pub struct Keyboard<S: InputSource> {
    source: S,
}

/// Sampling configuration applied when a [`Keyboard`] is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyboardBuilder {
    sampling_period: Option<i32>,
}

impl KeyboardBuilder {
    /// Samples every `period_ms` instead of every simulation step.
    pub fn sampling_period(mut self, period_ms: i32) -> Self {
        self.sampling_period = Some(period_ms);
        self
    }

    pub fn build<S: InputSource>(self, mut source: S) -> Keyboard<S> {
        let period = match self.sampling_period {
            Some(p) => p,
            None => source.default_step_length(),
        };
        debug!("enabling keyboard sampling every {period} ms");
        source.enable(period);
        Keyboard { source }
    }
}

impl<S: InputSource> Keyboard<S> {
    /// Enables sampling at the simulation step length.
    pub fn new(source: S) -> Self {
        KeyboardBuilder::default().build(source)
    }

    pub fn with_sampling_period(source: S, period_ms: i32) -> Self {
        KeyboardBuilder::default()
            .sampling_period(period_ms)
            .build(source)
    }

    pub fn sampling_period(&self) -> i32 {
        self.source.sampling_period()
    }

    /// Re-enables sampling at `period_ms`; non-positive disables it.
    pub fn set_sampling_period(&mut self, period_ms: i32) {
        debug!("keyboard sampling period set to {period_ms} ms");
        self.source.enable(period_ms);
    }

    pub fn disable(&mut self) {
        debug!("disabling keyboard sampling");
        self.source.disable();
    }

    /// Polls the source once and returns the raw code unmodified.
    pub fn key_code(&mut self) -> i32 {
        let raw = self.source.poll_raw_key_code();
        trace!("polled raw key code {raw:#x}");
        raw
    }

    /// Polls the source once and returns the key label, e.g. `shift-page up`.
    pub fn key(&mut self) -> Result<String> {
        let raw = self.key_code();
        KeyEvent::from_raw(raw).map(|event| event.to_string())
    }

    /// Polls the source once and returns the structured event.
    ///
    /// `Ok(None)` means no key is held.
    pub fn key_event(&mut self) -> Result<Option<KeyEvent>> {
        match self.key_code() {
            codes::NO_KEY => Ok(None),
            raw => KeyEvent::from_raw(raw).map(Some),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
