use crate::model::{FilterMode, ItemId, Projection, TodoList};

use super::list_ops;
use super::sink::PresentationSink;

/// Owns the authoritative list and the sink it renders to.
///
/// Every mutating method applies its change and then recomputes the
/// projection and renders it, including when the change was a no-op.
pub struct Store<S: PresentationSink> {
    list: TodoList,
    sink: S,
}

impl<S: PresentationSink> Store<S> {
    /// Create a store over an empty list and render it once.
    pub fn new(filter: FilterMode, sink: S) -> Self {
        let mut store = Store {
            list: TodoList::with_filter(filter),
            sink,
        };
        store.render();
        store
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn filter(&self) -> FilterMode {
        self.list.filter
    }

    pub fn projection(&self) -> Projection {
        self.list.project()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn add_item(&mut self, raw_text: &str) -> Option<ItemId> {
        let added = list_ops::add_item(&mut self.list, raw_text);
        match added {
            Some(id) => tracing::debug!(%id, len = self.list.len(), "item added"),
            None => tracing::trace!("blank item ignored"),
        }
        self.render();
        added
    }

    pub fn toggle_item(&mut self, id: ItemId) -> bool {
        let toggled = list_ops::toggle_item(&mut self.list, id);
        if toggled {
            tracing::debug!(%id, "item toggled");
        } else {
            tracing::debug!(%id, "toggle for unknown item ignored");
        }
        self.render();
        toggled
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        list_ops::set_filter(&mut self.list, mode);
        tracing::debug!(filter = %mode, "filter changed");
        self.render();
    }

    pub fn clear_completed(&mut self) -> usize {
        let removed = list_ops::clear_completed(&mut self.list);
        tracing::debug!(removed, len = self.list.len(), "completed items cleared");
        self.render();
        removed
    }

    fn render(&mut self) {
        let projection = self.list.project();
        tracing::trace!(
            visible = projection.len(),
            remaining = projection.remaining,
            "render"
        );
        self.sink.render(&projection);
    }
}
