//! Undo/redo and gesture transactions
//!
//! A modal gesture runs between [`SceneState::begin_gesture`] and either
//! [`SceneState::commit_gesture`] or [`SceneState::abort_gesture`]. While it is open,
//! mutations do not record undo steps; committing records the pre-gesture scene as a
//! single step.

use super::SceneState;

impl SceneState {
    /// Record an undo step for a direct mutation (no-op inside a gesture)
    pub(crate) fn record_step(&mut self) {
        if self.gesture_snapshot.is_some() {
            return;
        }
        self.save_undo();
        self.redo_stack.clear();
    }

    /// Run several mutations as a single undo step
    pub(crate) fn batch<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        if self.in_gesture() {
            return f(self);
        }
        self.begin_gesture();
        let out = f(self);
        self.commit_gesture();
        out
    }

    /// Open a gesture: remember the scene so the whole gesture undoes as one step
    pub fn begin_gesture(&mut self) {
        if self.gesture_snapshot.is_none() {
            self.gesture_snapshot = Some(self.scene.clone());
        }
    }

    pub fn in_gesture(&self) -> bool {
        self.gesture_snapshot.is_some()
    }

    /// Close the gesture, recording one undo step if the scene changed
    pub fn commit_gesture(&mut self) {
        let Some(before) = self.gesture_snapshot.take() else {
            return;
        };
        if before == self.scene {
            return;
        }
        self.undo_stack.push(before);
        if self.undo_stack.len() > super::UNDO_LIMIT {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Close the gesture without recording anything, restoring the pre-gesture scene
    /// (materials created for a preview go with it)
    pub fn abort_gesture(&mut self) {
        if let Some(before) = self.gesture_snapshot.take() {
            if before != self.scene {
                self.scene = before;
                self.version += 1;
            }
        }
    }

    /// Undo last change
    pub fn undo(&mut self) {
        if self.in_gesture() {
            return;
        }
        if let Some(prev) = self.undo_stack.pop() {
            self.redo_stack.push(self.scene.clone());
            self.scene = prev;
            self.version += 1;
        }
    }

    /// Redo last undone change
    pub fn redo(&mut self) {
        if self.in_gesture() {
            return;
        }
        if let Some(next) = self.redo_stack.pop() {
            self.undo_stack.push(self.scene.clone());
            self.scene = next;
            self.version += 1;
        }
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
