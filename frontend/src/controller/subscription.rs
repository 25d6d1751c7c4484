use std::fmt;

/// Handle to a browser registration (event listener, observer).
///
/// The teardown closure runs exactly once: on `dispose`, or on drop if the
/// handle was never disposed.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting() -> (Rc<Cell<u32>>, Subscription) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        (calls, sub)
    }

    #[test]
    fn dispose_runs_teardown_once() {
        let (calls, sub) = counting();
        assert_eq!(calls.get(), 0);
        sub.dispose();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn drop_releases_undisposed_handle() {
        let (calls, sub) = counting();
        drop(sub);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn effect_teardown_disposes_once() {
        let (calls, sub) = counting();
        let sub = Some(sub);
        let destructor = move || {
            if let Some(sub) = sub {
                sub.dispose();
            }
        };
        assert_eq!(calls.get(), 0);
        destructor();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn debug_reports_state() {
        let (_calls, sub) = counting();
        assert_eq!(format!("{:?}", sub), "Subscription { active: true }");
    }
}
