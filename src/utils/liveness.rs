use leptos::logging::log;
use leptos::on_cleanup;
use std::cell::Cell;
use std::rc::Rc;

/// Tracks whether the component that created it is still mounted.
/// Async work checks this before writing to signals the component owned.
#[derive(Clone, Debug)]
pub struct Liveness {
    alive: Rc<Cell<bool>>,
}

impl Default for Liveness {
    fn default() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }
}

impl Liveness {
    /// Creates a flag that the current reactive owner clears on cleanup.
    pub fn track() -> Self {
        let liveness = Self::default();
        let on_teardown = liveness.clone();
        on_cleanup(move || on_teardown.mark_dead());
        liveness
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn mark_dead(&self) {
        self.alive.set(false);
    }

    /// Runs `f` only while the owner is mounted; otherwise logs and returns None.
    pub fn run_if_alive<F, R>(&self, log_context: &str, f: F) -> Option<R>
    where
        F: FnOnce() -> R,
    {
        if self.is_alive() {
            Some(f())
        } else {
            log!("[OWNER] Skipped after teardown: {}", log_context);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_while_alive() {
        let liveness = Liveness::default();
        assert_eq!(liveness.run_if_alive("test", || 7), Some(7));
    }

    #[test]
    fn clones_share_the_flag() {
        let liveness = Liveness::default();
        let held_by_task = liveness.clone();
        liveness.mark_dead();

        let mut ran = false;
        assert_eq!(held_by_task.run_if_alive("late response", || ran = true), None);
        assert!(!ran);
        assert!(!held_by_task.is_alive());
    }
}
