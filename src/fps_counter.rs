use std::collections::VecDeque;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

pub struct FpsCounter {
    frames: VecDeque<Instant>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::default(),
        }
    }

    pub fn tick(&mut self) -> usize {
        let now = Instant::now();
        self.frames.push_back(now);

        while let Some(frame) = self.frames.front() {
            if now.duration_since(*frame) > WINDOW {
                self.frames.pop_front();
            } else {
                break;
            }
        }

        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_accumulate_within_the_window() {
        let mut counter = FpsCounter::new();

        assert_eq!(counter.tick(), 1);
        assert_eq!(counter.tick(), 2);
        assert_eq!(counter.tick(), 3);
    }
}
