use crate::geometry::GridTriangle;

/// Partial assignment held in pre-sized slots, one per cell
///
/// Slots are allocated once; pushing writes the next slot and popping only
/// moves the depth back, so backtracking never reallocates.
#[derive(Debug, Clone)]
pub struct PlacementStack {
    slots: Vec<GridTriangle>,
    depth: usize,
}

impl PlacementStack {
    /// Create a stack with room for `capacity` triangles
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![GridTriangle::default(); capacity],
            depth: 0,
        }
    }

    /// Place `triangle` in the next slot
    ///
    /// Returns false, leaving the stack unchanged, when every slot is taken.
    pub fn push(&mut self, triangle: GridTriangle) -> bool {
        let Some(slot) = self.slots.get_mut(self.depth) else {
            return false;
        };
        *slot = triangle;
        self.depth += 1;
        true
    }

    /// Remove and return the most recent triangle
    pub fn pop(&mut self) -> Option<GridTriangle> {
        let top = self.depth.checked_sub(1)?;
        self.depth = top;
        self.slots.get(top).copied()
    }

    /// Triangles placed so far, in cell order
    pub fn placed(&self) -> &[GridTriangle] {
        self.slots.get(..self.depth).unwrap_or(&[])
    }

    /// Number of triangles placed
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether every slot is filled
    pub fn is_full(&self) -> bool {
        self.depth == self.slots.len()
    }

    /// Forget every placement
    pub const fn clear(&mut self) {
        self.depth = 0;
    }
}
