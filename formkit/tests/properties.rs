use formkit::{
    Extra, FormDefinition, FormItem, FormItemPatch, FormItemType, FormStore, MemoryStore,
    RecordStore, StoredFormRecord, next_id,
};
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = FormItemType> {
    prop::sample::select(FormItemType::ALL.to_vec())
}

fn arb_extra() -> impl Strategy<Value = Option<Extra>> {
    prop::option::of(
        (".{0,12}", 1i64..200).prop_map(|(options, max)| {
            Extra::new()
                .with("optionsText", options)
                .with("placeholder.maxLength", max)
        }),
    )
}

fn arb_patch() -> impl Strategy<Value = FormItemPatch> {
    (
        prop::option::of(".{0,16}"),
        prop::option::of(arb_kind()),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
        arb_extra(),
    )
        .prop_map(|(name, kind, visible, required, extra)| FormItemPatch {
            name,
            kind,
            visible,
            required,
            extra,
        })
}

fn arb_item() -> impl Strategy<Value = FormItem> {
    arb_patch().prop_map(FormItem::from_patch)
}

fn arb_form() -> impl Strategy<Value = FormDefinition> {
    (".{0,16}", prop::collection::vec(arb_item(), 0..8))
        .prop_map(|(name, items)| FormDefinition { name, items })
}

proptest! {
    /// Every base field ends up either as given or as its default.
    #[test]
    fn prop_from_patch_fills_defaults(patch in arb_patch()) {
        let item = FormItem::from_patch(patch.clone());

        prop_assert_eq!(&item.name, patch.name.as_deref().unwrap_or(""));
        prop_assert_eq!(item.kind, patch.kind.unwrap_or(FormItemType::SingleLineText));
        prop_assert_eq!(item.visible, patch.visible.unwrap_or(true));
        prop_assert_eq!(item.required, patch.required.unwrap_or(true));
        prop_assert_eq!(item.extra, patch.extra);
    }

    /// Patching an item that is then removed has no visible effect.
    #[test]
    fn prop_update_then_remove_equals_remove(
        form in arb_form(),
        patch in arb_patch(),
        seed in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!form.is_empty());
        let index = seed.index(form.len());

        let patched_then_removed = form
            .update_item(index, patch)
            .unwrap()
            .remove_item(index)
            .unwrap();
        let removed = form.remove_item(index).unwrap();
        prop_assert_eq!(patched_then_removed, removed);
    }

    /// Adding appends exactly one item at the end.
    #[test]
    fn prop_add_item_is_right_append(form in arb_form(), item in arb_item()) {
        let next = form.add_item(item.clone());

        prop_assert_eq!(next.len(), form.len() + 1);
        prop_assert_eq!(&next.items[..form.len()], form.items());
        prop_assert_eq!(next.items.last(), Some(&item));
        prop_assert_eq!(&next.name, &form.name);
    }

    /// A definition survives the storage format unchanged.
    #[test]
    fn prop_json_round_trip(form in arb_form()) {
        let text = serde_json::to_string(&form).unwrap();
        let back: FormDefinition = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(back, form);
    }

    /// New ids are one past the largest existing id.
    #[test]
    fn prop_next_id_follows_max(ids in prop::collection::vec(1u64..10_000, 0..10)) {
        let records: Vec<_> = ids
            .iter()
            .map(|&id| StoredFormRecord::new(id, FormDefinition::new("r")))
            .collect();
        let expected = ids.iter().max().map_or(1, |max| max + 1);
        prop_assert_eq!(next_id(&records).unwrap(), expected);
    }

    /// Saving n forms into an empty store yields ids 1..=n in order.
    #[test]
    fn prop_saves_are_numbered_in_order(forms in prop::collection::vec(arb_form(), 1..6)) {
        let store = RecordStore::new(MemoryStore::new());
        for (n, form) in forms.iter().enumerate() {
            prop_assert_eq!(store.save(form).unwrap(), n as u64 + 1);
        }
        let stored: Vec<_> = store.load().unwrap().into_iter().map(|r| r.definition).collect();
        prop_assert_eq!(stored, forms);
    }
}
