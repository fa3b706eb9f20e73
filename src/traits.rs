/// The simulator side of the keyboard device.
///
/// Hosts implement this over their controller handle; tests use a fake.
/// Every call is a direct read or write of the simulator's latest state and
/// returns immediately.
pub trait InputSource {
    /// Enables periodic sampling. A non-positive period disables it.
    fn enable(&mut self, period_ms: i32);

    fn disable(&mut self) {
        self.enable(0);
    }

    /// Current sampling period in milliseconds; 0 when disabled.
    fn sampling_period(&self) -> i32;

    /// Latest sampled raw code, or [`codes::NO_KEY`](crate::codes::NO_KEY).
    fn poll_raw_key_code(&mut self) -> i32;

    /// Basic simulation step length in milliseconds.
    fn default_step_length(&self) -> i32;
}

impl<S: InputSource + ?Sized> InputSource for &mut S {
    fn enable(&mut self, period_ms: i32) {
        (**self).enable(period_ms);
    }

    fn disable(&mut self) {
        (**self).disable();
    }

    fn sampling_period(&self) -> i32 {
        (**self).sampling_period()
    }

    fn poll_raw_key_code(&mut self) -> i32 {
        (**self).poll_raw_key_code()
    }

    fn default_step_length(&self) -> i32 {
        (**self).default_step_length()
    }
}

impl<S: InputSource + ?Sized> InputSource for Box<S> {
    fn enable(&mut self, period_ms: i32) {
        (**self).enable(period_ms);
    }

    fn disable(&mut self) {
        (**self).disable();
    }

    fn sampling_period(&self) -> i32 {
        (**self).sampling_period()
    }

    fn poll_raw_key_code(&mut self) -> i32 {
        (**self).poll_raw_key_code()
    }

    fn default_step_length(&self) -> i32 {
        (**self).default_step_length()
    }
}
