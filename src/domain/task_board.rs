//! Task Board - Kanban Columns by Status

use super::entities::Task;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Server-defined task status; also the board's column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::ToDo, Self::InProgress, Self::Completed];

    fn column(self) -> usize {
        match self {
            Self::ToDo => 0,
            Self::InProgress => 1,
            Self::Completed => 2,
        }
    }
}

/// A card position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSlot {
    pub status: TaskStatus,
    pub index: usize,
}

impl BoardSlot {
    pub fn new(status: TaskStatus, index: usize) -> Self {
        Self { status, index }
    }
}

/// Tasks grouped into one column per status, preserving server order
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    columns: [Vec<Task>; 3],
}

impl TaskBoard {
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.columns[task.status.column()].push(task);
        }
        board
    }

    pub fn column(&self, status: TaskStatus) -> &[Task] {
        &self.columns[status.column()]
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move a card after a drop
    ///
    /// A drop on the card's own slot is a no-op. Moving across columns updates
    /// the card's status. Returns the moved task.
    pub fn move_task(&mut self, from: BoardSlot, to: BoardSlot) -> Result<&Task> {
        let source_len = self.column(from.status).len();
        if from.index >= source_len {
            return Err(Error::Invalid {
                message: format!(
                    "No task at {:?}[{}] (column has {source_len})",
                    from.status, from.index
                ),
            });
        }

        // Destination may be one past the end (drop below the last card)
        let dest_len = if from.status == to.status {
            source_len - 1
        } else {
            self.column(to.status).len()
        };
        if to.index > dest_len {
            return Err(Error::Invalid {
                message: format!(
                    "Drop index {} out of range for {:?} (max {dest_len})",
                    to.index, to.status
                ),
            });
        }

        let mut task = self.columns[from.status.column()].remove(from.index);
        task.status = to.status;
        let column = &mut self.columns[to.status.column()];
        column.insert(to.index, task);
        tracing::debug!(?from, ?to, "Moved task card");
        Ok(&column[to.index])
    }
}
