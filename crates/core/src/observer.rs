/// Watches an iterative root computation one update at a time.
///
/// A solver hands each new iterate to [`Observer::observe`] as an event of
/// type `E` before deciding whether it has converged. Returning `Some(action)`
/// steers the solver with one of its own actions `A`, such as stopping at the
/// current iterate.
pub trait Observer<E, A> {
    /// Inspects one update and optionally steers the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Closures observe by being called with each event.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// The unit observer lets every computation run untouched.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
