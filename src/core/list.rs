//! # Scrollable List
//!
//! A windowed view over an ordered set of items. Pure state: no rendering,
//! no I/O. The driver feeds it navigation events and reads back the visible
//! window, which then goes into a table or grid.
//!
//! ```text
//! items:   0  1  2  3  4
//!                [2  3  4]   offset = 2, page_size = 3
//!                       ^    cursor = 4
//! ```
//!
//! Invariants after every operation:
//!
//! - `cursor < len` when there are items
//! - `offset <= cursor < offset + page_size`
//! - `offset <= len.saturating_sub(page_size)`
//!
//! Navigation stops at either end; there is no wraparound.
//!
//! The list can be driven imperatively (`down()`, `up()`) or through the
//! [`update`] reducer for event-driven UIs:
//!
//! ```text
//! List + ListEvent  →  update()  →  List
//! ```

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<T> {
    items: Vec<T>,
    cursor: usize,
    offset: usize,
    page_size: usize,
}

/// Everything that can happen to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent<T> {
    Down,
    Up,
    SetItems(Vec<T>),
}

impl<T> List<T> {
    /// An empty list showing `page_size` items at a time (at least one).
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            offset: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replace the items and go back to the top.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor = 0;
        self.offset = 0;
    }

    /// Move the cursor down one item, scrolling if it leaves the window.
    pub fn down(&mut self) {
        if self.cursor + 1 >= self.items.len() {
            return;
        }
        self.cursor += 1;
        if self.cursor >= self.offset + self.page_size {
            self.offset += 1;
        }
    }

    /// Move the cursor up one item, scrolling if it leaves the window.
    pub fn up(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        if self.cursor < self.offset {
            self.offset -= 1;
        }
    }

    pub fn apply(&mut self, event: ListEvent<T>) {
        match event {
            ListEvent::Down => self.down(),
            ListEvent::Up => self.up(),
            ListEvent::SetItems(items) => self.set_items(items),
        }
    }

    /// The items currently in the window. Empty when there are no items.
    pub fn visible(&self) -> &[T] {
        if self.items.is_empty() {
            return &[];
        }
        let end = (self.offset + self.page_size).min(self.items.len());
        &self.items[self.offset..end]
    }

    /// The item under the cursor.
    pub fn selected(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    pub fn is_selected(&self, index: usize) -> bool {
        !self.items.is_empty() && index == self.cursor
    }

    /// Convert an index into [`visible`](Self::visible) to an absolute one.
    pub fn rel_to_abs(&self, index: usize) -> usize {
        self.offset + index
    }

    /// Position of the cursor inside the visible window.
    pub fn selected_in_window(&self) -> Option<usize> {
        (!self.items.is_empty()).then(|| self.cursor - self.offset)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reducer form of [`List::apply`].
pub fn update<T>(mut list: List<T>, event: ListEvent<T>) -> List<T> {
    list.apply(event);
    list
}
