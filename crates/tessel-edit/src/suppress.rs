//! Nestable suppression of editor callbacks.
//!
//! One user action can cascade into several secondary updates (owner list
//! refresh, selection re-validation). Presentation widgets report those
//! updates back through the editor's `on_*` callbacks; while a
//! [`SuppressionGuard`] is alive the editor ignores them.

use std::cell::Cell;
use std::rc::Rc;

/// Shared nesting counter. Cloning yields another handle to the same
/// counter.
#[derive(Clone, Debug, Default)]
pub struct Suppression {
    depth: Rc<Cell<u32>>,
}

impl Suppression {
    /// A fresh counter at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a suppression scope. The scope ends when the guard drops.
    pub fn enter(&self) -> SuppressionGuard {
        self.depth.set(self.depth.get() + 1);
        SuppressionGuard {
            depth: Rc::clone(&self.depth),
        }
    }

    /// Returns `true` while at least one guard is alive.
    pub fn is_active(&self) -> bool {
        self.depth.get() > 0
    }

    /// Current nesting depth.
    pub fn depth(&self) -> u32 {
        self.depth.get()
    }
}

/// Keeps a [`Suppression`] scope open; releases it on drop, including
/// during unwinding and early `?` returns.
#[must_use = "the scope ends as soon as the guard is dropped"]
#[derive(Debug)]
pub struct SuppressionGuard {
    depth: Rc<Cell<u32>>,
}

impl Drop for SuppressionGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}
