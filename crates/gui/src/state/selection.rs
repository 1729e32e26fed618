use shared::ObjectId;

/// Last-selected object.
///
/// Set when a drag starts and deliberately kept after the drag ends, so the
/// arrow keys keep rotating whatever was dragged last.
#[derive(Default, Debug)]
pub struct SelectionState {
    selected: Option<ObjectId>,
}

impl SelectionState {
    /// Currently selected object
    pub fn primary(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    /// Check if an object is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Select a single object (replaces previous selection)
    pub fn select(&mut self, id: ObjectId) {
        self.selected = Some(id);
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}
