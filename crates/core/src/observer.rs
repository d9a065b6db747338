/// Receives solver events and decides how the search should proceed.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and `()` is a no-op observer
/// that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
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
    struct Halt;

    fn drive<Obs: Observer<u64, Halt>>(mut observer: Obs, events: &[u64]) -> Option<usize> {
        events
            .iter()
            .position(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_observer_sees_every_event_until_it_acts() {
        let mut seen = Vec::new();
        let observer = |event: &u64| {
            seen.push(*event);
            (*event >= 5).then_some(Halt)
        };

        assert_eq!(drive(observer, &[1, 5, 9]), Some(1));
        assert_eq!(seen, vec![1, 5]);
    }
}
