use std::{cell::Cell, collections::HashSet};

use hetero::prelude::*;

/// Run the same tests against both layouts.
macro_rules! for_each_layout {
    ($($body:item)*) => {
        mod flat_layout {
            #[allow(unused_imports)]
            use super::*;
            #[allow(dead_code)]
            type Tuple<T> = Flat<T>;
            $($body)*
        }

        mod nested_layout {
            #[allow(unused_imports)]
            use super::*;
            #[allow(dead_code)]
            type Tuple<T> = Nested<T>;
            $($body)*
        }
    };
}

for_each_layout! {
    #[test]
    fn external_writes_show_through_a_reference_element() {
        let a = Cell::new(1);
        let tuple = Tuple::new((1, &a, 2.0));

        assert_eq!(*tuple.get::<0>(), 1);
        assert_eq!(tuple.get::<1>().get(), 1);
        assert_eq!(*tuple.get::<2>(), 2.0);

        a.set(2);
        assert_eq!(tuple.get::<1>().get(), 2);
    }

    #[test]
    fn setting_one_element_leaves_the_others() {
        let mut a = 1;
        let mut tuple = Tuple::new((1, &mut a, 2.0));

        *tuple.get_mut::<2>() = 3.0;

        assert_eq!(*tuple.get::<0>(), 1);
        assert_eq!(**tuple.get::<1>(), 1);
        assert_eq!(*tuple.get::<2>(), 3.0);
    }

    #[test]
    fn writes_through_a_mutable_reference_element_reach_the_original() {
        let mut a = 1;
        let mut tuple = Tuple::new((0u8, &mut a));
        **tuple.get_mut::<1>() = 6;
        drop(tuple);
        assert_eq!(a, 6);
    }

    #[test]
    fn unpacking_mutably_writes_into_the_tuple() {
        let mut b = 2;
        let mut tuple = Tuple::new((4, &mut b, 4.0));

        let (x, y, z) = tuple.unpack_mut();
        *x = 5;
        **y = 6;
        *z = 7.0;

        assert_eq!(*tuple.get::<0>(), 5);
        assert_eq!(**tuple.get::<1>(), 6);
        assert_eq!(*tuple.get::<2>(), 7.0);
        drop(tuple);
        assert_eq!(b, 6);
    }

    #[test]
    fn unpacking_a_copy_only_shares_reference_elements() {
        let b = Cell::new(6);
        let tuple = Tuple::new((5, &b, 7.0));

        let (mut x, y, mut z) = tuple.clone().unpack();
        x = 0;
        y.set(8);
        z = 0.0;
        assert_eq!((x, z), (0, 0.0));

        assert_eq!(*tuple.get::<0>(), 5);
        assert_eq!(tuple.get::<1>().get(), 8);
        assert_eq!(*tuple.get::<2>(), 7.0);
    }

    #[test]
    fn read_only_and_owned_elements_side_by_side() {
        let d = 2;
        let mut e = 0;
        let mut tuple = Tuple::new((1, &d, &mut e));

        assert_eq!(**tuple.get::<1>(), 2);
        **tuple.get_mut::<2>() = 3;
        assert_eq!(**tuple.get::<2>(), 3);

        let (x, y, z) = tuple.unpack_ref();
        assert_eq!((*x, **y, **z), (1, 2, 3));
    }

    #[test]
    fn a_read_only_element_can_be_rebound() {
        let (first, second) = (1, 2);
        let mut tuple = Tuple::new((&first,));
        *tuple.get_mut::<0>() = &second;
        assert_eq!(**tuple.get::<0>(), 2);
    }

    #[test]
    fn transferable_elements_move_in_and_out() {
        let tuple = Tuple::new((String::from("moved"), vec![1, 2, 3]));
        assert_eq!(tuple.take::<1>(), vec![1, 2, 3]);
    }

    #[test]
    fn set_swaps_in_a_new_element() {
        let mut tuple = Tuple::new((1u8, String::from("old")));
        let old = tuple.set::<1>(String::from("new"));
        assert_eq!(old, "old");
        assert_eq!(tuple.into_inner(), (1, String::from("new")));
    }

    #[test]
    fn elements_of_one_type_at_many_positions() {
        let tuple = Tuple::new((1, 2, 3, 4));
        assert_eq!(tuple.unpack_ref(), (&1, &2, &3, &4));
        assert_eq!(tuple.size(), 4);
    }

    #[test]
    fn construction_converts_each_value() {
        let tuple: Tuple<(f64, i64, String)> = Tuple::from_values((2i32, 3u8, "four"));
        assert_eq!(tuple.unpack(), (2.0, 3, String::from("four")));
    }

    #[test]
    fn the_empty_tuple() {
        let tuple = Tuple::new(());
        assert_eq!(tuple.size(), 0);
        let () = tuple.into_inner();
    }

    #[test]
    fn clones_are_independent() {
        let mut original = Tuple::new((1, String::from("one")));
        let copy = original.clone();
        *original.get_mut::<0>() = 2;
        assert_eq!(*copy.get::<0>(), 1);
        assert_ne!(original, copy);
    }

    #[test]
    fn equal_tuples_hash_alike() {
        let mut seen = HashSet::new();
        assert!(seen.insert(Tuple::new((1u8, "one"))));
        assert!(!seen.insert(Tuple::new((1u8, "one"))));
        assert!(seen.insert(Tuple::new((2u8, "one"))));
        assert_eq!(seen.len(), 2);
    }
}

#[test]
fn both_layouts_unpack_alike() {
    let mut b = 2;
    let mut c = 2;
    let flat = flat![1u8, &mut b, "three", 4.0f32];
    let nested = nested![1u8, &mut c, "three", 4.0f32];

    assert_eq!(flat.unpack_ref(), nested.unpack_ref());
    assert_eq!(*flat.get::<2>(), *nested.get::<2>());
    assert_eq!(flat.size(), nested.size());
}

#[test]
fn converting_between_layouts_keeps_every_element() {
    let flat = Flat::new((1u8, 'b', "c"));
    let nested: Nested<_> = flat.into();
    assert_eq!(nested.unpack_ref(), (&1, &'b', &"c"));

    let flat: Flat<_> = Flat::from(nested);
    assert_eq!(flat.into_inner(), (1, 'b', "c"));
}

#[test]
fn native_tuples_convert_into_either_layout() {
    let flat: Flat<(u8, bool)> = (1, true).into();
    let nested: Nested<(u8, bool)> = (1, true).into();
    assert_eq!(flat.into_inner(), nested.into_inner());
}

#[test]
fn arity_is_a_constant() {
    assert_eq!(<Flat<(u8, u16, u32)> as Layout>::ARITY, 3);
    assert_eq!(<Nested<(u8, u16, u32)> as Layout>::ARITY, 3);
    assert_eq!(<Flat<()> as Layout>::ARITY, 0);
}

#[test]
fn largest_supported_arity() {
    let tuple = Nested::new((0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15));
    assert_eq!(*tuple.get::<15>(), 15);
    let tuple = Flat::new((0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15));
    assert_eq!(*tuple.get::<15>(), 15);
}
