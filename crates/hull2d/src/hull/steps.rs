//! Step recording and replay.
//!
//! - `StepRecorder`: append-only, owned by exactly one algorithm run.
//! - `StepLog`: the frozen log handed out with the result; read-only.
//! - `Playback`: explicit cursor a presenter keeps as its own state.

use crate::geom2::Point;

/// What the algorithm did when the snapshot was taken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Gift wrapping committed `candidate` as the next hull vertex.
    Commit,
    /// Angular sweep pushed `candidate` onto the stack.
    Push,
    /// Angular sweep popped the stack top while testing `candidate`.
    Pop,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Commit => "commit",
            StepKind::Push => "push",
            StepKind::Pop => "pop",
        }
    }
}

/// Snapshot of one construction step, for animation only.
#[derive(Clone, Debug, PartialEq)]
pub struct HullStep {
    pub kind: StepKind,
    /// Partial hull at the moment of the step (gift wrapping: committed
    /// vertices; angular sweep: stack contents after the operation).
    pub hull: Vec<Point>,
    /// Point under test or being added.
    pub candidate: Point,
}

/// Immutable, ordered sequence of steps from one run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepLog {
    steps: Vec<HullStep>,
}

impl StepLog {
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    #[inline]
    pub fn get(&self, i: usize) -> Option<&HullStep> {
        self.steps.get(i)
    }
    #[inline]
    pub fn as_slice(&self) -> &[HullStep] {
        &self.steps
    }
    pub fn iter(&self) -> std::slice::Iter<'_, HullStep> {
        self.steps.iter()
    }
    pub fn count_kind(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a StepLog {
    type Item = &'a HullStep;
    type IntoIter = std::slice::Iter<'a, HullStep>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Append-only recorder; created empty for every run and frozen at the end.
#[derive(Debug, Default)]
pub(crate) struct StepRecorder {
    steps: Vec<HullStep>,
}

impl StepRecorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, kind: StepKind, hull: &[Point], candidate: Point) {
        self.steps.push(HullStep {
            kind,
            hull: hull.to_vec(),
            candidate,
        });
    }

    pub(crate) fn finish(self) -> StepLog {
        StepLog { steps: self.steps }
    }
}

/// What a presenter should draw for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame<'a> {
    Step(&'a HullStep),
    /// Playback is past the last step: draw the final (closed) hull.
    Final(&'a [Point]),
}

/// Playback cursor over a finished run.
///
/// Frames `0..steps.len()` are the recorded steps in order; frame
/// `steps.len()` is the final hull. The cursor is plain data owned by the
/// caller, so several views can replay the same result independently.
#[derive(Clone, Copy, Debug)]
pub struct Playback<'a> {
    steps: &'a StepLog,
    hull: &'a [Point],
    frame: usize,
}

impl<'a> Playback<'a> {
    pub(crate) fn new(steps: &'a StepLog, hull: &'a [Point]) -> Self {
        Self {
            steps,
            hull,
            frame: 0,
        }
    }

    #[inline]
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Number of frames including the final-hull frame.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.steps.len() + 1
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.frame >= self.steps.len()
    }

    pub fn current(&self) -> Frame<'a> {
        match self.steps.get(self.frame) {
            Some(step) => Frame::Step(step),
            None => Frame::Final(self.hull),
        }
    }

    /// Move one frame forward; `false` once the final frame is showing.
    pub fn advance(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.frame += 1;
        true
    }

    /// Move one frame back; `false` at the first frame.
    pub fn back(&mut self) -> bool {
        if self.frame == 0 {
            return false;
        }
        self.frame -= 1;
        true
    }

    /// Jump straight to the final hull.
    pub fn skip_to_end(&mut self) {
        self.frame = self.steps.len();
    }

    pub fn rewind(&mut self) {
        self.frame = 0;
    }

    /// Clamped to the final frame.
    pub fn seek(&mut self, frame: usize) {
        self.frame = frame.min(self.steps.len());
    }
}

impl<'a> Iterator for Playback<'a> {
    type Item = Frame<'a>;

    /// Yields every remaining frame, the final hull last.
    fn next(&mut self) -> Option<Frame<'a>> {
        if self.frame > self.steps.len() {
            return None;
        }
        let out = self.current();
        self.frame += 1;
        Some(out)
    }
}
