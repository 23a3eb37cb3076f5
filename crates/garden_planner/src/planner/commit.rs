//! Submitting a plan to the real garden.
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::garden::{Garden, PlantId};
use crate::planner::events::{EventSink, PlanEvent, PlanEventKind};
use crate::planner::Placement;

/// Outcome of committing a plan.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommitReport {
    /// Ids handed out by the garden, in plan order.
    pub planted: Vec<PlantId>,
    /// Placements the garden refused.
    pub rejected: Vec<Placement>,
}

impl CommitReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placements submitted.
    pub fn attempted(&self) -> usize {
        self.planted.len() + self.rejected.len()
    }
}

/// Submit each placement to `garden` in order.
///
/// A refusal is recorded and reported; later placements are still submitted and
/// earlier ones are kept.
pub fn commit_placements<G: Garden + ?Sized>(
    garden: &mut G,
    placements: &[Placement],
    sink: &mut dyn EventSink,
) -> CommitReport {
    let mut report = CommitReport::new();

    for placement in placements {
        match garden.add_plant(&placement.variety, placement.position) {
            Some(id) => report.planted.push(id),
            None => {
                warn!(
                    "Failed to plant {} at {}.",
                    placement.variety.name, placement.position
                );
                if sink.wants(PlanEventKind::CommitRejected) {
                    sink.send(PlanEvent::CommitRejected {
                        placement: placement.clone(),
                    });
                }
                report.rejected.push(placement.clone());
            }
        }
    }

    debug!(
        "Committed {} of {} placements.",
        report.planted.len(),
        report.attempted()
    );
    if sink.wants(PlanEventKind::CommitFinished) {
        sink.send(PlanEvent::CommitFinished {
            report: report.clone(),
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::garden::Plot;
    use crate::planner::events::VecSink;
    use crate::species::Species;
    use crate::variety::PlantVariety;

    fn placement(name: &str, x: f32, y: f32) -> Placement {
        Placement::new(PlantVariety::new(name, Species::Begonia), Vec2::new(x, y))
    }

    #[test]
    fn rejections_do_not_stop_the_batch() {
        let mut garden = Plot::new(3.0, 3.0);
        let plan = vec![
            placement("a", 0.0, 0.0),
            placement("b", 0.5, 0.0),
            placement("c", 9.0, 0.0),
            placement("d", 2.0, 2.0),
        ];
        let mut sink = VecSink::new();
        let report = commit_placements(&mut garden, &plan, &mut sink);

        assert_eq!(report.planted, vec![PlantId(0), PlantId(1)]);
        let rejected: Vec<_> = report.rejected.iter().map(|p| p.variety.name.as_str()).collect();
        assert_eq!(rejected, vec!["b", "c"]);
        assert_eq!(report.attempted(), 4);
        assert_eq!(garden.len(), 2);
        assert_eq!(sink.count(PlanEventKind::CommitRejected), 2);
        assert_eq!(sink.count(PlanEventKind::CommitFinished), 1);
    }

    #[test]
    fn empty_plan_commits_nothing() {
        let mut garden = Plot::new(1.0, 1.0);
        let report = commit_placements(&mut garden, &[], &mut ());
        assert_eq!(report, CommitReport::new());
        assert!(garden.is_empty());
    }
}
