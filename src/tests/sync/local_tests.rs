use super::*;
use crate::model::TodoItem;

fn seq(items: &[(&str, bool)]) -> Arc<Items<TodoItem>> {
    Arc::new(
        items
            .iter()
            .map(|(title, is_done)| {
                Arc::new(TodoItem {
                    title: title.to_string(),
                    is_done: *is_done,
                })
            })
            .collect(),
    )
}

fn titles(items: &[Arc<TodoItem>]) -> Vec<&str> {
    items.iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn append_adds_at_end_and_shares_prior_elements() {
    let input = seq(&[("a", false), ("b", true)]);
    let out = append(&input, TodoItem::new("c"));

    assert!(!Arc::ptr_eq(&input, &out));
    assert_eq!(out.len(), input.len() + 1);
    assert_eq!(titles(&out), vec!["a", "b", "c"]);
    assert_eq!(*out[2], TodoItem::new("c"));
    for i in 0..input.len() {
        assert!(Arc::ptr_eq(&input[i], &out[i]));
    }
    assert_eq!(input.len(), 2, "input is not modified");
}

#[test]
fn toggle_inverts_only_the_target() {
    let input = seq(&[("a", false), ("b", true), ("c", false)]);
    for i in 0..input.len() {
        let out = toggle(&input, i);
        assert!(!Arc::ptr_eq(&input, &out));
        assert_eq!(out.len(), input.len());
        assert_eq!(out[i].is_done, !input[i].is_done);
        assert_eq!(out[i].title, input[i].title);
        assert!(!Arc::ptr_eq(&input[i], &out[i]));
        for j in (0..input.len()).filter(|j| *j != i) {
            assert!(Arc::ptr_eq(&input[j], &out[j]));
        }
    }
}

#[test]
fn remove_excises_index_preserving_order() {
    let input = seq(&[("a", false), ("b", false), ("c", true)]);
    for i in 0..input.len() {
        let out = remove(&input, i);
        assert!(!Arc::ptr_eq(&input, &out));
        assert_eq!(out.len(), input.len() - 1);

        let mut expected = titles(&input);
        expected.remove(i);
        assert_eq!(titles(&out), expected);
    }
}

#[test]
fn out_of_range_edits_still_return_fresh_sequences() {
    let input = seq(&[("a", false)]);

    let toggled = toggle(&input, 5);
    assert!(!Arc::ptr_eq(&input, &toggled));
    assert!(Arc::ptr_eq(&input[0], &toggled[0]));

    let removed = remove(&input, 5);
    assert!(!Arc::ptr_eq(&input, &removed));
    assert_eq!(titles(&removed), vec!["a"]);
}

#[test]
fn empty_sequence_edits() {
    let input: Arc<Items<TodoItem>> = Arc::new(Vec::new());
    assert!(remove(&input, 0).is_empty());
    assert!(toggle(&input, 0).is_empty());
    assert_eq!(append(&input, TodoItem::new("x")).len(), 1);
}

#[test]
fn local_list_walkthrough() {
    let list = LocalList::new([TodoItem::new("123"), TodoItem::new("44444")]);
    assert!(list.state().gate().is_ready());

    let s0 = list.state().snapshot();
    assert!(list.append(TodoItem::new("x")));
    let s1 = list.state().snapshot();
    assert!(!s1.same_identity(&s0));
    assert_eq!(list.len(), 3);
    assert_eq!(list.items()[2].title, "x");

    assert!(list.toggle(1));
    let s2 = list.state().snapshot();
    let (before, after) = (s1.get().cloned().unwrap(), s2.get().cloned().unwrap());
    assert!(after[1].is_done);
    assert!(Arc::ptr_eq(&before[0], &after[0]));
    assert!(Arc::ptr_eq(&before[2], &after[2]));

    assert!(list.remove(0));
    let items = list.items();
    assert_eq!(titles(&items), vec!["44444", "x"]);
    assert!(items[0].is_done);
    assert!(!items[1].is_done);
    assert_eq!(list.state().revision(), 3);
}

#[test]
fn stale_index_after_remove_hits_the_shifted_item() {
    let list = LocalList::new([TodoItem::new("a"), TodoItem::new("b"), TodoItem::new("c")]);
    list.remove(0);
    // Index 1 now names "c"; callers must read indices from the current snapshot.
    list.toggle(1);
    let items = list.items();
    assert_eq!(titles(&items), vec!["b", "c"]);
    assert!(!items[0].is_done);
    assert!(items[1].is_done);
}

#[test]
fn deactivated_list_ignores_edits() {
    let list = LocalList::new([TodoItem::new("a")]);
    list.state().deactivate();
    assert!(!list.append(TodoItem::new("b")));
    assert_eq!(list.len(), 1);
}
