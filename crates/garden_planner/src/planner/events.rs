//! Event types and sinks for observing planning and commit passes.
//!
//! Events are advisory diagnostics. They are emitted by
//! [`crate::planner::hex::plan_hex_grid`], [`crate::planner::commit::commit_placements`]
//! and the [`crate::planner::gardener::Gardener`] entry points that take a sink.
use glam::Vec2;

use crate::planner::commit::CommitReport;
use crate::planner::config::PlannerMode;
use crate::planner::gardener::PlanStrategy;
use crate::planner::Placement;
use crate::species::Species;

/// Describes events emitted while planning or committing.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum PlanEvent {
    /// Emitted when a planning pass starts.
    PlanStarted {
        /// Mode of the planner.
        mode: PlannerMode,
        /// Number of varieties to place.
        variety_count: usize,
        /// Garden width.
        width: f32,
        /// Garden height.
        height: f32,
    },

    /// A grid cell was skipped because its due species has no varieties left.
    CellSkipped {
        row: usize,
        position: Vec2,
        species: Species,
    },

    /// The scratch garden refused a candidate. The variety stays available.
    CellRejected {
        row: usize,
        position: Vec2,
        variety: String,
    },

    /// A placement was added to the plan.
    PlacementPlanned { placement: Placement },

    /// The grid plan failed and the random scatter was used instead.
    FallbackEngaged {
        /// Why the grid was abandoned.
        reason: String,
    },

    /// Emitted when a planning pass finishes.
    PlanFinished {
        strategy: PlanStrategy,
        placements: usize,
    },

    /// The real garden refused a planned placement.
    CommitRejected { placement: Placement },

    /// Emitted after every planned placement was submitted.
    CommitFinished { report: CommitReport },
}

/// Discriminant of [`PlanEvent`], used for sink filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanEventKind {
    PlanStarted,
    CellSkipped,
    CellRejected,
    PlacementPlanned,
    FallbackEngaged,
    PlanFinished,
    CommitRejected,
    CommitFinished,
}

impl PlanEvent {
    pub fn kind(&self) -> PlanEventKind {
        match self {
            PlanEvent::PlanStarted { .. } => PlanEventKind::PlanStarted,
            PlanEvent::CellSkipped { .. } => PlanEventKind::CellSkipped,
            PlanEvent::CellRejected { .. } => PlanEventKind::CellRejected,
            PlanEvent::PlacementPlanned { .. } => PlanEventKind::PlacementPlanned,
            PlanEvent::FallbackEngaged { .. } => PlanEventKind::FallbackEngaged,
            PlanEvent::PlanFinished { .. } => PlanEventKind::PlanFinished,
            PlanEvent::CommitRejected { .. } => PlanEventKind::CommitRejected,
            PlanEvent::CommitFinished { .. } => PlanEventKind::CommitFinished,
        }
    }
}

/// A generic event sink that accepts [`PlanEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PlanEvent);

    /// Whether events of `kind` should be built and sent at all.
    fn wants(&self, _kind: PlanEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PlanEvent) {}

    #[inline]
    fn wants(&self, _kind: PlanEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PlanEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PlanEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PlanEvent),
{
    #[inline]
    fn send(&mut self, event: PlanEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PlanEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<PlanEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[PlanEvent] {
        &self.events
    }

    /// Number of collected events of `kind`.
    pub fn count(&self, kind: PlanEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PlanEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: PlanEvent) {
        let kind = event.kind();
        let targets: Vec<usize> = (0..self.sinks.len())
            .filter(|&i| self.sinks[i].wants(kind))
            .collect();
        let Some((&last, rest)) = targets.split_last() else {
            return;
        };
        for &i in rest {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last].send(event);
    }

    fn wants(&self, kind: PlanEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
