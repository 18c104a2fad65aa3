// prose-core-client/prose-blocking
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::domain::presentation::services::{UiDispatcher, UiJob};

/// Runs jobs right away. Only suitable when all work already happens on the UI thread.
#[derive(Default)]
pub struct InlineUiDispatcher {}

impl UiDispatcher for InlineUiDispatcher {
    fn dispatch(&self, job: UiJob) {
        job()
    }
}

/// Collects jobs until the owner of the UI thread runs them via `drain`.
#[derive(Default)]
pub struct QueuedUiDispatcher {
    jobs: Mutex<VecDeque<UiJob>>,
}

impl QueuedUiDispatcher {
    /// Runs all queued jobs in the order they were dispatched, including jobs that are
    /// dispatched while draining. Returns the number of jobs that ran.
    pub fn drain(&self) -> usize {
        let mut count = 0;

        loop {
            // The lock must be released before running the job since it may dispatch again.
            let Some(job) = self.jobs.lock().pop_front() else {
                return count;
            };
            job();
            count += 1;
        }
    }

    pub fn pending_jobs(&self) -> usize {
        self.jobs.lock().len()
    }
}

impl UiDispatcher for QueuedUiDispatcher {
    fn dispatch(&self, job: UiJob) {
        self.jobs.lock().push_back(job)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_queued_dispatcher_runs_jobs_on_drain() {
        let dispatcher = Arc::new(QueuedUiDispatcher::default());
        let counter = Arc::new(AtomicU32::new(0));

        for _ in 0..2 {
            let counter = counter.clone();
            dispatcher.dispatch(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        }

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert_eq!(dispatcher.pending_jobs(), 2);
        assert_eq!(dispatcher.drain(), 2);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
        assert_eq!(dispatcher.pending_jobs(), 0);
    }
}
