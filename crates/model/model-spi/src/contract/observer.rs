//! Progress reporting for iterative fits

/// Snapshot emitted after every solver iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationEvent {
    /// Zero-based iteration index
    pub iteration: usize,
    /// Cost after this iteration's parameter update
    pub cost: f64,
}

/// Receives [`IterationEvent`]s from an iterative solver
///
/// Any `FnMut(&IterationEvent)` closure is an observer.
pub trait FitObserver {
    fn on_iteration(&mut self, event: &IterationEvent);
}

impl<F> FitObserver for F
where
    F: FnMut(&IterationEvent),
{
    fn on_iteration(&mut self, event: &IterationEvent) {
        self(event)
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FitObserver for NoopObserver {
    fn on_iteration(&mut self, _event: &IterationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_observer_collects_costs() {
        let mut costs = Vec::new();
        {
            let mut observer = |event: &IterationEvent| costs.push(event.cost);
            observer.on_iteration(&IterationEvent {
                iteration: 0,
                cost: 2.0,
            });
            observer.on_iteration(&IterationEvent {
                iteration: 1,
                cost: 1.0,
            });
        }
        assert_eq!(costs, vec![2.0, 1.0]);
    }

    #[test]
    fn test_noop_observer_as_dyn() {
        let mut observer = NoopObserver;
        let dyn_observer: &mut dyn FitObserver = &mut observer;
        dyn_observer.on_iteration(&IterationEvent {
            iteration: 0,
            cost: 0.0,
        });
    }
}
