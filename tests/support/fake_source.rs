use std::cell::Cell;
use std::collections::VecDeque;

use robot_keyboard::InputSource;
use robot_keyboard::codes;

/// Records every call and replays queued raw codes; once the queue is
/// drained each poll returns `NO_KEY`.
#[derive(Default, Debug, Clone)]
pub struct FakeInputSource {
    pub step_length: i32,
    pub period: i32,
    pub enable_calls: Vec<i32>,
    pub polls: usize,
    pub step_queries: Cell<usize>,
    queue: VecDeque<i32>,
}

impl FakeInputSource {
    pub fn new(step_length: i32) -> Self {
        Self {
            step_length,
            ..Self::default()
        }
    }

    pub fn push(&mut self, raw: i32) {
        self.queue.push_back(raw);
    }

    pub fn with_codes(step_length: i32, raws: &[i32]) -> Self {
        let mut source = Self::new(step_length);
        source.queue.extend(raws.iter().copied());
        source
    }
}

impl InputSource for FakeInputSource {
    fn enable(&mut self, period_ms: i32) {
        self.enable_calls.push(period_ms);
        self.period = period_ms.max(0);
    }

    fn sampling_period(&self) -> i32 {
        self.period
    }

    fn poll_raw_key_code(&mut self) -> i32 {
        self.polls += 1;
        self.queue.pop_front().unwrap_or(codes::NO_KEY)
    }

    fn default_step_length(&self) -> i32 {
        self.step_queries.set(self.step_queries.get() + 1);
        self.step_length
    }
}
