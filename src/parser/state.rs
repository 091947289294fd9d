use crate::segments::Segment;

/// Scanner state: the segment being scanned and where its capture started in
/// the working buffer (`None` until the segment's first character is taken).
///
/// The scanner only moves forward through `Segment` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub segment: Segment,
    pub start: Option<usize>,
}

impl State {
    pub fn new() -> Self {
        Self {
            segment: Segment::Scheme,
            start: None,
        }
    }

    /// Switch to `segment` with nothing captured yet
    pub fn enter(&mut self, segment: Segment) {
        debug_assert!(
            segment >= self.segment,
            "scanner moved backwards from {} to {}",
            self.segment,
            segment
        );
        self.segment = segment;
        self.start = None;
    }

    /// Capture start of the current segment, if it is in `segment`
    pub fn start_of(&self, segment: Segment) -> Option<usize> {
        if self.segment == segment {
            self.start
        } else {
            None
        }
    }
}

/// What the scan loop does after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}
