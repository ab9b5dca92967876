use log::LevelFilter;
use ordered_collections::avl_tree::AvlSet;
use ordered_collections::{Error, GraphvizExport, Set};
use simplelog::{Config, TestLogger};

const SCRAMBLED_KEYS: [u32; 10] = [5, 3, 8, 1, 0, 2, 4, 6, 7, 9];

fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn avl_height_bound(len: usize) -> i32 {
    (1.44 * ((len + 2) as f64).log2()).ceil() as i32 - 1
}

#[test]
fn int_test_insertion_order_does_not_affect_contents() {
    init_logging();
    let ascending: AvlSet<u32> = (0..10).collect();
    let scrambled: AvlSet<u32> = SCRAMBLED_KEYS.iter().cloned().collect();

    assert_eq!(ascending.to_string(), "{0, 1, 2, 3, 4, 5, 6, 7, 8, 9}");
    assert_eq!(scrambled.to_string(), "{0, 1, 2, 3, 4, 5, 6, 7, 8, 9}");
    assert_eq!(scrambled.to_vec(), (0..10).collect::<Vec<u32>>());
}

#[test]
fn int_test_remove_scenario() {
    init_logging();
    let mut set: AvlSet<u32> = SCRAMBLED_KEYS.iter().cloned().collect();

    for key in &[1, 0, 7, 5] {
        assert!(set.remove(key));
    }

    assert_eq!(set.to_string(), "{2, 3, 4, 6, 8, 9}");
    assert_eq!(set.len(), 6);
    assert!(set.height() <= avl_height_bound(set.len()));
}

#[test]
fn int_test_rotation_scenario_height_bound() {
    init_logging();
    let mut set = AvlSet::new();

    for key in &[10, 9, 8, 13, 12, 11, 15, 14, 16] {
        assert!(set.insert(*key));
        assert!(
            set.height() <= avl_height_bound(set.len()),
            "height {} exceeds bound for {} keys",
            set.height(),
            set.len(),
        );
    }
    assert_eq!(set.height(), 3);
}

#[test]
fn int_test_rotation_scenario_graphviz() {
    init_logging();
    let set: AvlSet<u32> = vec![10, 9, 8, 13, 12, 11, 15, 14, 16].into_iter().collect();

    let expected = "digraph G {\n\
                    graph [ dpi = 70 ]\n\
                    nodesep=0.3;\n\
                    ranksep=0.2;\n\
                    margin=0.1;\n\
                    node [shape=circle];\n\
                    edge [arrowsize=0.8];\n\
                    node1 [label=\"10\"];\n\
                    node1 -> node2;\n\
                    node2 [label=\"9\"];\n\
                    node2 -> node4;\n\
                    node4 [label=\"8\"];\n\
                    node1 -> node3;\n\
                    node3 [label=\"14\"];\n\
                    node3 -> node6;\n\
                    node6 [label=\"12\"];\n\
                    node6 -> node12;\n\
                    node12 [label=\"11\"];\n\
                    node6 -> node13;\n\
                    node13 [label=\"13\"];\n\
                    node3 -> node7;\n\
                    node7 [label=\"15\"];\n\
                    node7 -> node15;\n\
                    node15 [label=\"16\"];\n\
                    }";
    assert_eq!(set.graphviz().unwrap(), expected);
}

#[test]
fn int_test_idempotent_insert() {
    init_logging();
    let mut once = AvlSet::new();
    let mut twice = AvlSet::new();
    for key in &SCRAMBLED_KEYS {
        once.insert(*key);
        twice.insert(*key);
        twice.insert(*key);
    }

    assert_eq!(once.len(), twice.len());
    assert_eq!(once.graphviz().unwrap(), twice.graphviz().unwrap());
}

#[test]
fn int_test_empty_boundary() {
    init_logging();
    let mut set: AvlSet<u32> = AvlSet::new();

    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert_eq!(set.to_string(), "{}");
    assert!(!set.remove(&42));
    assert_eq!(set.to_vec(), Vec::<u32>::new());
    assert_eq!(set.iter().next(), None);
}

#[test]
fn int_test_absent_arguments_leave_set_unchanged() {
    init_logging();
    let mut set: AvlSet<u32> = SCRAMBLED_KEYS.iter().cloned().collect();
    let before = set.graphviz().unwrap();

    let err = Set::add(&mut set, None).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        Set::remove(&mut set, None),
        Err(Error::InvalidArgument { operation: "remove" }),
    );
    assert_eq!(
        Set::contains(&set, None),
        Err(Error::InvalidArgument { operation: "contains" }),
    );

    assert_eq!(Set::size(&set), 10);
    assert_eq!(set.graphviz().unwrap(), before);
}

#[test]
fn int_test_ascending_inserts_stay_logarithmic() {
    let mut set = AvlSet::new();
    for key in 0..100_000u32 {
        set.insert(key);
    }

    assert_eq!(set.len(), 100_000);
    assert!(set.height() <= avl_height_bound(set.len()));

    for key in (0..100_000u32).filter(|key| key % 3 != 0) {
        assert!(set.remove(&key));
    }

    assert_eq!(set.len(), 33_334);
    assert!(set.height() <= avl_height_bound(set.len()));
    assert_eq!(set.min(), Some(&0));
    assert_eq!(set.max(), Some(&99_999));
}
