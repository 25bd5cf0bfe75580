use std::sync::Arc;

/// Contributes nothing to the selection set and always decodes to the same
/// value.
pub struct Pure<A> {
    pub(super) make_value: Arc<dyn Fn() -> A + Send + Sync>,
}
impl<A> Pure<A> {
    pub(super) fn new(value: A) -> Self
    where
        A: Clone + Send + Sync + 'static,
    {
        Self {
            make_value: Arc::new(move || value.clone()),
        }
    }

    pub fn value(&self) -> A {
        (self.make_value)()
    }
}
impl<A> std::clone::Clone for Pure<A> {
    fn clone(&self) -> Self {
        Self {
            make_value: Arc::clone(&self.make_value),
        }
    }
}
impl<A> std::fmt::Debug for Pure<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pure").finish_non_exhaustive()
    }
}
