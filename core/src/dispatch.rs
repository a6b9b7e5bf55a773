//! The host main-queue model for deferred decoration work.
//!
//! The decoration layer runs synchronously on the host toolkit's UI
//! thread. A few features need to run after the current pass — custom
//! stack spacing is only meaningful once the decorated view is arranged
//! in its parent — and submit a task here instead. The host drains the
//! queue once per turn of its event loop; tests call [`drain`] directly.
//!
//! Tasks have no cancellation handle. A task whose referenced views are
//! gone by the time it runs is expected to check liveness itself and do
//! nothing.

use std::cell::RefCell;
use std::collections::VecDeque;

use tracing::trace;

thread_local! {
    static QUEUE: RefCell<VecDeque<Box<dyn FnOnce()>>> = RefCell::new(VecDeque::new());
}

/// Submits a task to run on the next drain of the main queue.
pub fn defer(task: impl FnOnce() + 'static) {
    QUEUE.with(|queue| {
        let mut queue = queue.borrow_mut();
        queue.push_back(Box::new(task));
        trace!(pending = queue.len(), "deferred task enqueued");
    });
}

/// Runs every pending task in submission order and returns how many ran.
///
/// Tasks submitted while draining are run in the same drain.
pub fn drain() -> usize {
    let mut ran = 0;
    loop {
        let next = QUEUE.with(|queue| queue.borrow_mut().pop_front());
        let Some(task) = next else { break };
        task();
        ran += 1;
    }
    if ran > 0 {
        trace!(ran, "main queue drained");
    }
    ran
}

/// Returns the number of tasks currently queued.
#[must_use]
pub fn pending() -> usize {
    QUEUE.with(|queue| queue.borrow().len())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn tasks_run_in_submission_order() {
        drain();
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let order = order.clone();
            defer(move || order.borrow_mut().push(i));
        }
        assert_eq!(pending(), 3);
        assert_eq!(drain(), 3);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
        assert_eq!(pending(), 0);
    }

    #[test]
    fn tasks_queued_while_draining_also_run() {
        drain();
        let hits = Rc::new(RefCell::new(0));
        let inner = hits.clone();
        defer(move || {
            let again = inner.clone();
            defer(move || *again.borrow_mut() += 10);
            *inner.borrow_mut() += 1;
        });
        assert_eq!(drain(), 2);
        assert_eq!(*hits.borrow(), 11);
    }
}
