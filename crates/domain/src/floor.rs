//! Floor — rooms plus the grid that places them relative to each other.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{HomeDashError, ValidationError};
use crate::id::RoomIndex;
use crate::room::Room;

/// Layout grid: rows of cells, each empty or holding a room index.
pub type Grid = Vec<Vec<Option<RoomIndex>>>;

/// A floor of the house.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FloorRepr")]
pub struct Floor {
    pub name: String,
    rooms: Vec<Room>,
    grid: Grid,
}

impl Floor {
    /// Create a builder for constructing a [`Floor`].
    #[must_use]
    pub fn builder() -> FloorBuilder {
        FloorBuilder::default()
    }

    /// Check domain invariants: a non-empty name, every grid cell pointing to
    /// an existing room, and no room placed twice.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDashError::Validation`] describing the first violation.
    pub fn validate(&self) -> Result<(), HomeDashError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let mut seen = HashSet::new();
        for (row, col, index) in self.cells() {
            if index.get() >= self.rooms.len() {
                return Err(ValidationError::GridIndexOutOfRange {
                    row,
                    col,
                    index: index.get(),
                    rooms: self.rooms.len(),
                }
                .into());
            }
            if !seen.insert(index) {
                return Err(ValidationError::DuplicateGridRoom { index: index.get() }.into());
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn rooms_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.iter_mut()
    }

    #[must_use]
    pub fn room(&self, index: RoomIndex) -> Option<&Room> {
        self.rooms.get(index.get())
    }

    pub fn room_mut(&mut self, index: RoomIndex) -> Option<&mut Room> {
        self.rooms.get_mut(index.get())
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Occupied grid cells as `(row, col, room)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, RoomIndex)> + '_ {
        self.grid.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|index| (row, col, index)))
        })
    }
}

/// Step-by-step builder for [`Floor`].
#[derive(Debug, Default)]
pub struct FloorBuilder {
    name: Option<String>,
    rooms: Vec<Room>,
    grid: Option<Grid>,
}

impl FloorBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Set the layout grid from raw room positions.
    #[must_use]
    pub fn grid(mut self, rows: Vec<Vec<Option<usize>>>) -> Self {
        self.grid = Some(
            rows.into_iter()
                .map(|row| row.into_iter().map(|cell| cell.map(RoomIndex::new)).collect())
                .collect(),
        );
        self
    }

    /// Consume the builder, validate, and return a [`Floor`].
    ///
    /// Without an explicit grid, rooms are packed two per row in insertion
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDashError::Validation`] if the name is missing or the
    /// grid breaks an invariant.
    pub fn build(self) -> Result<Floor, HomeDashError> {
        let grid = self.grid.unwrap_or_else(|| packed_grid(self.rooms.len(), 2));
        let floor = Floor {
            name: self.name.unwrap_or_default(),
            rooms: self.rooms,
            grid,
        };
        floor.validate()?;
        Ok(floor)
    }
}

#[derive(Deserialize)]
struct FloorRepr {
    name: String,
    rooms: Vec<Room>,
    grid: Grid,
}

impl TryFrom<FloorRepr> for Floor {
    type Error = HomeDashError;

    fn try_from(repr: FloorRepr) -> Result<Self, Self::Error> {
        let floor = Self {
            name: repr.name,
            rooms: repr.rooms,
            grid: repr.grid,
        };
        floor.validate()?;
        Ok(floor)
    }
}

fn packed_grid(rooms: usize, columns: usize) -> Grid {
    (0..rooms)
        .collect::<Vec<_>>()
        .chunks(columns)
        .map(|chunk| {
            let mut row: Vec<_> = chunk.iter().map(|&i| Some(RoomIndex::new(i))).collect();
            row.resize(columns, None);
            row
        })
        .collect()
}
