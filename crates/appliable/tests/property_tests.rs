//! Property Tests
//!
//! Copy isolation, chaining, shared visibility and bulk ordering over
//! generated inputs.
//!
use appliable::prelude::*;
use appliable_test_utils::{
    item_values, items, object_values, shared_object, shared_objects, CallLog, Item,
};
use proptest::prelude::*;
use std::rc::Rc;

proptest! {
    #[test]
    fn prop_applying_leaves_original_unchanged(start in any::<i32>(), next in any::<i32>()) {
        let item = Item::new(start);

        let copy = item.applying(|i| i.value = next);

        prop_assert_eq!(item.value, start);
        prop_assert_eq!(copy.value, next);
    }

    #[test]
    fn prop_apply_matches_direct_mutation(start in -1000i32..1000, delta in -1000i32..1000) {
        let mut via_apply = Item::new(start);
        let mut direct = Item::new(start);

        via_apply.apply(|i| i.value = i.value * 2 + delta);
        direct.value = direct.value * 2 + delta;

        prop_assert_eq!(via_apply, direct);
    }

    #[test]
    fn prop_chained_applying_equals_sequential_on_one_copy(
        start in -1000i32..1000,
        add in -1000i32..1000,
        mul in -10i32..10,
    ) {
        let item = Item::new(start);

        let chained = item.applying(|i| i.value += add).applying(|i| i.value *= mul);
        let mut single = item.clone();
        single.value += add;
        single.value *= mul;

        prop_assert_eq!(chained, single);
        prop_assert_eq!(item.value, start);
    }

    #[test]
    fn prop_object_apply_visible_through_every_handle(start in any::<i32>(), next in any::<i32>()) {
        let r1 = shared_object(start);
        let r2 = Rc::clone(&r1);

        let returned = r1.apply(|o| o.borrow_mut().value = next);

        prop_assert!(std::ptr::eq(returned, &r1));
        prop_assert_eq!(r2.borrow().value, next);
    }

    #[test]
    fn prop_bulk_invokes_closure_once_per_element_in_order(
        values in proptest::collection::vec(-1000i32..1000, 0..32),
    ) {
        let value_log = CallLog::new();
        let mut array = items(&values);
        array.apply_each(|i| value_log.record(i.value));

        let copy_log = CallLog::new();
        let copy = array.applying_each(|i| copy_log.record(i.value));

        let object_log = CallLog::new();
        let objects = shared_objects(&values);
        objects.apply_each(|o| object_log.record(o.borrow().value));

        prop_assert_eq!(value_log.calls(), values.clone());
        prop_assert_eq!(copy_log.calls(), values.clone());
        prop_assert_eq!(item_values(&copy), values.clone());
        prop_assert_eq!(object_log.calls(), values.clone());
        prop_assert_eq!(object_values(&objects), values);
    }

    #[test]
    fn prop_bulk_failure_stops_at_failing_index(
        values in proptest::collection::vec(-1000i32..1000, 1..32),
        fail_seed in any::<usize>(),
    ) {
        let fail_at = fail_seed % values.len();
        let original = items(&values);
        let mut in_place = original.clone();
        let log = CallLog::new();

        let result = in_place.try_apply_each(|i| {
            log.record(i.value);
            if log.count() == fail_at + 1 {
                return Err(fail_at);
            }
            i.value += 1;
            Ok(())
        });
        let copy_log = CallLog::new();
        let copied = original.try_applying_each(|i| {
            copy_log.record(i.value);
            if copy_log.count() == fail_at + 1 {
                return Err(fail_at);
            }
            i.value += 1;
            Ok(())
        });

        prop_assert_eq!(result, Err(fail_at));
        prop_assert_eq!(log.count(), fail_at + 1);
        let expected: Vec<i32> = values
            .iter()
            .enumerate()
            .map(|(index, value)| if index < fail_at { value + 1 } else { *value })
            .collect();
        prop_assert_eq!(item_values(&in_place), expected);
        prop_assert_eq!(copied, Err(fail_at));
        prop_assert_eq!(copy_log.calls(), values[..=fail_at].to_vec());
        prop_assert_eq!(item_values(&original), values);
    }
}
