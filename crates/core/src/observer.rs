/// Receives driver events and decides how a run should proceed.
///
/// Observers let callers monitor or steer a simulation loop without changing
/// its API, enabling logging, plotting, or early stopping.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// loop-specific action and `None` lets the loop continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<O: Observer<u32, Action>>(mut observer: O, events: &[u32]) -> Option<u32> {
        events
            .iter()
            .find(|event| observer.observe(*event) == Some(Action::Stop))
            .copied()
    }

    #[test]
    fn closure_can_request_an_action() {
        let stopped_at = drive(|event: &u32| (*event >= 3).then_some(Action::Stop), &[1, 2, 3, 4]);
        assert_eq!(stopped_at, Some(3));
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }
}
