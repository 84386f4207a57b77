//! Single-shot deferred work, drained by the host between the current
//! event and the next paint.

/// Work scheduled for the next-paint gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredTask {
    /// Clear a window's inline placement so implicit centering resumes.
    ResetPlacement(String),
    /// Hand keyboard focus to the designated content pane.
    FocusContentPane(String),
}

/// Queue of single-shot tasks. The host drains it via `Desk::run_deferred`
/// after the current handler returns and before the next paint; the
/// ordering is the contract, not any particular timing.
#[derive(Debug, Default)]
pub struct NextPaint {
    queue: Vec<DeferredTask>,
}

impl NextPaint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task unless an identical one is already pending.
    pub fn schedule(&mut self, task: DeferredTask) {
        if !self.queue.contains(&task) {
            self.queue.push(task);
        }
    }

    /// Drain pending tasks in scheduling order.
    pub fn take(&mut self) -> Vec<DeferredTask> {
        std::mem::take(&mut self.queue)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
