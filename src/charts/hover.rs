/// Which category, if any, the pointer is currently over.
///
/// Owned by a single chart instance. The pie chart shares one value between
/// its slices and its legend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    index: Option<usize>,
}

impl HoverState {
    pub const fn none() -> Self {
        Self { index: None }
    }

    pub const fn at(index: usize) -> Self {
        Self { index: Some(index) }
    }

    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.index == Some(index)
    }

    pub fn enter(&mut self, index: usize) {
        self.index = Some(index);
    }

    pub fn leave(&mut self) {
        self.index = None;
    }

    /// Drops an index that does not address one of `len` categories.
    pub fn within(self, len: usize) -> Self {
        Self {
            index: self.index.filter(|i| *i < len),
        }
    }
}
