//! Undo/redo as an explicit command stack.
//!
//! Every document mutation made through the engine is recorded as a
//! [`Command`] carrying enough state to invert it. `undo` applies the inverse
//! of the command under the cursor, `redo` re-applies it. Recording a new
//! command discards anything that could still be redone.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::camera::Point;
use crate::doc::{CanvasItem, ItemId, ItemStore};

/// A reversible document mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `item` was inserted at stacking position `index`.
    Add { index: usize, item: CanvasItem },
    /// `item` was removed from stacking position `index`.
    Remove { index: usize, item: CanvasItem },
    /// Item `id` moved from `from` to `to` (top-left corners).
    Move { id: ItemId, from: Point, to: Point },
}

impl Command {
    /// Apply the command's forward effect to `doc`.
    ///
    /// A removal refreshes the stored item from the document, so edits made
    /// since the command was recorded come back on the next revert.
    pub fn apply(&mut self, doc: &mut ItemStore) {
        match self {
            Self::Add { index, item } => doc.insert_at(*index, item.clone()),
            Self::Remove { item, .. } => {
                if let Some((_, current)) = doc.remove(&item.id) {
                    *item = current;
                }
            }
            Self::Move { id, to, .. } => {
                doc.move_to(id, to.x, to.y);
            }
        }
    }

    /// Apply the inverse of the command to `doc`. Reverting an add keeps the
    /// item as it was at removal time for the matching re-apply.
    pub fn revert(&mut self, doc: &mut ItemStore) {
        match self {
            Self::Add { item, .. } => {
                if let Some((_, current)) = doc.remove(&item.id) {
                    *item = current;
                }
            }
            Self::Remove { index, item } => doc.insert_at(*index, item.clone()),
            Self::Move { id, from, .. } => {
                doc.move_to(id, from.x, from.y);
            }
        }
    }

    /// Id of the item the command touches.
    #[must_use]
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::Add { item, .. } | Self::Remove { item, .. } => item.id,
            Self::Move { id, .. } => *id,
        }
    }
}

/// Bounded linear history with a cursor.
#[derive(Debug, Clone)]
pub struct History {
    commands: Vec<Command>,
    cursor: usize,
    limit: usize,
}

impl History {
    /// Create an empty history keeping at most `limit` commands.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { commands: Vec::new(), cursor: 0, limit: limit.max(1) }
    }

    /// Whether an undo operation is currently possible.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether a redo operation is currently possible.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Number of commands that can be undone.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursor
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursor == 0
    }

    /// Record a command that has already been applied.
    pub fn record(&mut self, command: Command) {
        self.commands.truncate(self.cursor);
        self.commands.push(command);
        if self.commands.len() > self.limit {
            let overflow = self.commands.len() - self.limit;
            self.commands.drain(..overflow);
        }
        self.cursor = self.commands.len();
    }

    /// Revert the latest command. Returns it, or `None` when there is nothing to undo.
    pub fn undo(&mut self, doc: &mut ItemStore) -> Option<&Command> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        let command = &mut self.commands[self.cursor];
        command.revert(doc);
        Some(&*command)
    }

    /// Re-apply the next undone command. Returns it, or `None` when there is nothing to redo.
    pub fn redo(&mut self, doc: &mut ItemStore) -> Option<&Command> {
        if !self.can_redo() {
            return None;
        }
        let command = &mut self.commands[self.cursor];
        command.apply(doc);
        self.cursor += 1;
        Some(&*command)
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(crate::consts::HISTORY_LIMIT)
    }
}
