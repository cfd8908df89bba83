use crate::model::{FilterMode, Item, ItemId, TodoList};

/// Append a new incomplete item. Blank text (after trimming) is ignored
/// and leaves the list untouched.
pub fn add_item(list: &mut TodoList, raw_text: &str) -> Option<ItemId> {
    let text = raw_text.trim();
    if text.is_empty() {
        return None;
    }
    let id = list.allocate_id();
    list.items.push(Item::new(id, text.to_string()));
    Some(id)
}

/// Flip the completed flag of the item with the given id.
/// Returns false (and changes nothing) if no such item exists.
pub fn toggle_item(list: &mut TodoList, id: ItemId) -> bool {
    match list.items.iter_mut().find(|item| item.id == id) {
        Some(item) => {
            item.completed = !item.completed;
            true
        }
        None => false,
    }
}

pub fn set_filter(list: &mut TodoList, mode: FilterMode) {
    list.filter = mode;
}

/// Remove every completed item, keeping the survivors in order.
/// Returns how many were removed.
pub fn clear_completed(list: &mut TodoList) -> usize {
    let before = list.items.len();
    list.items.retain(|item| !item.completed);
    before - list.items.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn texts(list: &TodoList) -> Vec<(&str, bool)> {
        list.items
            .iter()
            .map(|i| (i.text.as_str(), i.completed))
            .collect()
    }

    #[test]
    fn add_trims_and_appends() {
        let mut list = TodoList::new();
        let id = add_item(&mut list, "  buy milk \n").unwrap();
        assert_eq!(texts(&list), vec![("buy milk", false)]);
        assert_eq!(list.get(id).map(|i| i.text.as_str()), Some("buy milk"));
    }

    #[test]
    fn add_blank_is_silent_noop() {
        let mut list = TodoList::new();
        assert_eq!(add_item(&mut list, ""), None);
        assert_eq!(add_item(&mut list, "   "), None);
        assert_eq!(add_item(&mut list, "\t\n"), None);
        assert!(list.is_empty());
    }

    #[test]
    fn duplicate_text_toggles_independently() {
        let mut list = TodoList::new();
        let first = add_item(&mut list, "same").unwrap();
        let second = add_item(&mut list, "same").unwrap();
        assert_ne!(first, second);

        assert!(toggle_item(&mut list, second));
        assert_eq!(texts(&list), vec![("same", false), ("same", true)]);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut list = TodoList::new();
        add_item(&mut list, "a");
        assert!(!toggle_item(&mut list, ItemId(99)));
        assert_eq!(texts(&list), vec![("a", false)]);
    }

    #[test]
    fn toggle_twice_restores() {
        let mut list = TodoList::new();
        let id = add_item(&mut list, "a").unwrap();
        toggle_item(&mut list, id);
        toggle_item(&mut list, id);
        assert_eq!(texts(&list), vec![("a", false)]);
    }

    #[test]
    fn ids_not_reused_after_clear() {
        let mut list = TodoList::new();
        let a = add_item(&mut list, "a").unwrap();
        toggle_item(&mut list, a);
        clear_completed(&mut list);
        let b = add_item(&mut list, "b").unwrap();
        assert_ne!(a, b);
        // The stale id no longer resolves
        assert!(!toggle_item(&mut list, a));
    }

    #[test]
    fn reference_scenario() {
        let mut list = TodoList::new();
        add_item(&mut list, "write docs");
        add_item(&mut list, "  ");
        let second = add_item(&mut list, "test code").unwrap();
        assert_eq!(texts(&list), vec![("write docs", false), ("test code", false)]);

        toggle_item(&mut list, second);
        assert_eq!(texts(&list), vec![("write docs", false), ("test code", true)]);

        set_filter(&mut list, FilterMode::Completed);
        let projection = list.project();
        let visible: Vec<(&str, bool)> = projection
            .items
            .iter()
            .map(|i| (i.text.as_str(), i.completed))
            .collect();
        assert_eq!(visible, vec![("test code", true)]);
        assert_eq!(projection.remaining, 0);

        assert_eq!(clear_completed(&mut list), 1);
        assert_eq!(texts(&list), vec![("write docs", false)]);
    }

    /// One step of a random session
    #[derive(Debug, Clone)]
    enum Step {
        Add(String),
        Toggle(usize),
        Filter(FilterMode),
        Clear,
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            "[ a-z]{0,6}".prop_map(Step::Add),
            (0usize..8).prop_map(Step::Toggle),
            prop_oneof![
                Just(FilterMode::All),
                Just(FilterMode::Active),
                Just(FilterMode::Completed)
            ]
            .prop_map(Step::Filter),
            Just(Step::Clear),
        ]
    }

    fn apply(list: &mut TodoList, step: &Step) {
        match step {
            Step::Add(text) => {
                add_item(list, text);
            }
            Step::Toggle(pos) => {
                if let Some(id) = list.items.get(*pos).map(|i| i.id) {
                    toggle_item(list, id);
                }
            }
            Step::Filter(mode) => set_filter(list, *mode),
            Step::Clear => {
                clear_completed(list);
            }
        }
    }

    proptest! {
        #[test]
        fn length_counts_non_blank_adds(inputs in prop::collection::vec("[ a-z]{0,5}", 0..20)) {
            let mut list = TodoList::new();
            for text in &inputs {
                add_item(&mut list, text);
            }
            let expected = inputs.iter().filter(|t| !t.trim().is_empty()).count();
            prop_assert_eq!(list.len(), expected);
        }

        #[test]
        fn projection_respects_filter(steps in prop::collection::vec(step(), 0..30)) {
            let mut list = TodoList::new();
            for s in &steps {
                apply(&mut list, s);
            }
            set_filter(&mut list, FilterMode::Active);
            prop_assert!(list.project().items.iter().all(|i| !i.completed));
            set_filter(&mut list, FilterMode::Completed);
            prop_assert!(list.project().items.iter().all(|i| i.completed));
            set_filter(&mut list, FilterMode::All);
            prop_assert_eq!(list.project().len(), list.len());
        }

        #[test]
        fn toggle_flips_exactly_one(steps in prop::collection::vec(step(), 1..30), pick in 0usize..30) {
            let mut list = TodoList::new();
            for s in &steps {
                apply(&mut list, s);
            }
            prop_assume!(!list.is_empty());
            let index = pick % list.len();
            let before = list.items.clone();
            prop_assert!(toggle_item(&mut list, before[index].id));
            prop_assert_eq!(list.len(), before.len());
            for (i, (old, new)) in before.iter().zip(&list.items).enumerate() {
                prop_assert_eq!(&old.text, &new.text);
                if i == index {
                    prop_assert_eq!(old.completed, !new.completed);
                } else {
                    prop_assert_eq!(old.completed, new.completed);
                }
            }
        }

        #[test]
        fn clear_completed_keeps_survivors_in_order(steps in prop::collection::vec(step(), 0..30)) {
            let mut list = TodoList::new();
            for s in &steps {
                apply(&mut list, s);
            }
            let expected: Vec<Item> = list.items.iter().filter(|i| !i.completed).cloned().collect();
            let completed = list.len() - expected.len();
            prop_assert_eq!(clear_completed(&mut list), completed);
            prop_assert_eq!(&list.items, &expected);
            prop_assert_eq!(clear_completed(&mut list), 0);
            prop_assert_eq!(&list.items, &expected);
        }
    }
}
