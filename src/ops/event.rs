use crate::model::{FilterMode, ItemId};

use super::sink::PresentationSink;
use super::store::Store;

/// Inbound triggers from an input source (key handler or script)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    SubmitItem(String),
    SelectItem(ItemId),
    SelectFilter(FilterMode),
    ClearCompleted,
    /// Cosmetic only; never reaches the store
    ToggleTheme,
}

/// What the shell still has to do after a dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The store handled the event and re-rendered
    Handled,
    /// The shell owns the theme; flip it
    ToggleTheme,
}

/// Route one input event to its store operation.
pub fn dispatch<S: PresentationSink>(store: &mut Store<S>, event: InputEvent) -> Dispatch {
    match event {
        InputEvent::SubmitItem(text) => {
            store.add_item(&text);
        }
        InputEvent::SelectItem(id) => {
            store.toggle_item(id);
        }
        InputEvent::SelectFilter(mode) => store.set_filter(mode),
        InputEvent::ClearCompleted => {
            store.clear_completed();
        }
        InputEvent::ToggleTheme => return Dispatch::ToggleTheme,
    }
    Dispatch::Handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::sink::Snapshot;

    #[test]
    fn each_event_maps_to_one_operation() {
        let mut store = Store::new(FilterMode::All, Snapshot::default());

        assert_eq!(
            dispatch(&mut store, InputEvent::SubmitItem("a".into())),
            Dispatch::Handled
        );
        assert_eq!(store.list().len(), 1);

        let id = store.list().items[0].id;
        dispatch(&mut store, InputEvent::SelectItem(id));
        assert!(store.list().items[0].completed);

        dispatch(&mut store, InputEvent::SelectFilter(FilterMode::Active));
        assert_eq!(store.filter(), FilterMode::Active);
        assert!(store.sink().current.is_empty());

        dispatch(&mut store, InputEvent::ClearCompleted);
        assert!(store.list().is_empty());
    }

    #[test]
    fn toggle_theme_leaves_store_alone() {
        let mut store = Store::new(FilterMode::All, Snapshot::default());
        let renders = store.sink().renders;
        assert_eq!(
            dispatch(&mut store, InputEvent::ToggleTheme),
            Dispatch::ToggleTheme
        );
        assert_eq!(store.sink().renders, renders);
    }
}
