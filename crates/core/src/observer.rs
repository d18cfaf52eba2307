/// Watches a running solver and can steer it.
///
/// A solver hands each iteration's event to its observer. Returning `None`
/// lets the solver carry on; `Some(action)` requests a solver-specific action
/// such as stopping early. Observers are how callers log progress, enforce a
/// wall-clock budget, or plot intermediate points without the solver knowing.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the no-op
/// observer used by the `*_unobserved` solver entry points.
pub trait Observer<E, A> {
    /// Receives one solver event and optionally returns an action.
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
