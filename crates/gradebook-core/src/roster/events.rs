use crate::score::{Student, StudentId};

/// A change applied to a roster.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterEvent {
    Added(Student),
    Removed(Student),
    GradeChanged {
        id: StudentId,
        previous: f64,
        current: f64,
    },
}

/// Receives roster changes after they are applied.
///
/// Observers run synchronously inside the mutating call and only see
/// mutations that succeeded.
pub trait RosterObserver {
    fn on_event(&mut self, event: &RosterEvent);
}

impl<F> RosterObserver for F
where
    F: FnMut(&RosterEvent),
{
    fn on_event(&mut self, event: &RosterEvent) {
        self(event)
    }
}
