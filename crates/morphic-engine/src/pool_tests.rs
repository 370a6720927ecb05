use morphic_core::{AccessorDescriptor, TypeTag};

use crate::AccessorPool;
use crate::test_utils::{FromRecordOne, InvocationLog, PATRICK_ID};

#[test]
fn enumerates_in_declaration_order() {
    let log = InvocationLog::default();
    let source = FromRecordOne::new(PATRICK_ID, "Patrick", "Henderson", &log);
    let pool = AccessorPool::enumerate(&source);

    assert_eq!(pool.names(), ["id", "firstName", "surName"]);
    assert_eq!(pool.len(), 3);
    assert_eq!(pool.capacity(), 3);
    assert_eq!(pool.get(0).unwrap().value_type(), TypeTag::of::<u128>());
    assert!(log.calls().is_empty(), "enumeration must not invoke accessors");
}

#[test]
fn accessors_named_like_trait_methods_are_kept() {
    let pool = AccessorPool::from_accessors(vec![
        AccessorDescriptor::new("hash", || String::from("9f2c1e")),
        AccessorDescriptor::new("fmt", || String::from("yaml")),
        AccessorDescriptor::new("eq", || true),
        AccessorDescriptor::new("age", || 3_u8),
    ]);
    assert_eq!(pool.names(), ["hash", "fmt", "eq", "age"]);
    assert_eq!(pool.position_of_type(TypeTag::of::<String>()), Some(0));
}

#[test]
fn layout_covers_the_untouched_pool() {
    let mut pool = AccessorPool::from_accessors(vec![
        AccessorDescriptor::new("name", || String::from("n")),
        AccessorDescriptor::new("count", || 7_u64),
    ]);
    let layout = pool.layout();
    assert_eq!(
        layout,
        [
            (Box::<str>::from("name"), TypeTag::of::<String>()),
            (Box::<str>::from("count"), TypeTag::of::<u64>()),
        ]
    );
    assert!(pool.has_layout(&layout));
    assert!(!pool.has_layout(&layout[..1]));

    pool.take(1).unwrap();
    assert!(!pool.has_layout(&layout), "a partly bound pool matches no layout");
}

#[test]
fn take_shrinks_pool_monotonically() {
    let mut pool = AccessorPool::from_accessors(vec![
        AccessorDescriptor::new("a", || 1_i32),
        AccessorDescriptor::new("b", || 2_i32),
    ]);

    let a = pool.take(0).unwrap();
    assert_eq!(a.invoke().downcast::<i32>().unwrap(), 1);
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.capacity(), 2);
    assert!(!pool.is_available(0));
    assert!(pool.take(0).is_none(), "taken accessors never come back");
    assert_eq!(pool.position_of_type(TypeTag::of::<i32>()), Some(1));

    pool.take(1).unwrap();
    assert!(pool.is_empty());
    assert_eq!(pool.position_of_type(TypeTag::of::<i32>()), None);
    assert!(pool.take(7).is_none());
}

#[test]
fn position_respects_order_and_predicate() {
    let pool = AccessorPool::from_accessors(vec![
        AccessorDescriptor::new("firstName", || String::from("Patrick")),
        AccessorDescriptor::new("age", || 40_u8),
        AccessorDescriptor::new("surName", || String::from("Henderson")),
    ]);
    assert_eq!(pool.position_of_type(TypeTag::of::<String>()), Some(0));
    assert_eq!(pool.position(|a| a.name() == "surName"), Some(2));
    assert_eq!(pool.position(|a| a.name() == "id"), None);
}
