//! Integration tests for composing sections into one flat list.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use separated_list::adapter::{
    AdapterSignals, ArrayAdapter, DataSetObserver, FlatPosition, ItemData, LayoutId, ListAdapter,
    RowTemplate, SeparatedListAdapter, SlotId, ViewContainer,
};
use separated_list::{AdapterError, AdapterResult};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("separated_list=trace,separated_list_core=trace")
        .with_test_writer()
        .try_init();
}

/// A host that records which layout each view came from and what text was
/// bound into which slot.
#[derive(Default)]
struct RecordingHost {
    inflated: Vec<LayoutId>,
}

#[derive(Debug, Clone, PartialEq)]
struct View {
    layout: LayoutId,
    bound: Vec<(SlotId, String)>,
}

impl ViewContainer for RecordingHost {
    type View = View;

    fn inflate(&mut self, layout: LayoutId) -> View {
        self.inflated.push(layout);
        View {
            layout,
            bound: Vec::new(),
        }
    }

    fn bind_text(&mut self, view: &mut View, slot: SlotId, text: &str) -> AdapterResult<()> {
        view.bound.push((slot, text.to_string()));
        Ok(())
    }
}

const ROW: RowTemplate = RowTemplate::new(LayoutId(10));
const HEADER: LayoutId = LayoutId(20);

fn section(items: &[&str]) -> Arc<ArrayAdapter<String>> {
    Arc::new(ArrayAdapter::new(
        ROW,
        items.iter().map(|s| s.to_string()).collect(),
    ))
}

/// Builds a list from `(name, size)` pairs, naming items `<name><k>`.
fn build(sizes: &[(&str, usize)]) -> SeparatedListAdapter<RecordingHost> {
    let list = SeparatedListAdapter::new(HEADER);
    for &(name, size) in sizes {
        let items: Vec<String> = (0..size).map(|k| format!("{name}{k}")).collect();
        list.add_section(name, Arc::new(ArrayAdapter::new(ROW, items)))
            .unwrap();
    }
    list
}

fn configurations() -> Vec<Vec<(&'static str, usize)>> {
    vec![
        vec![],
        vec![("A", 0)],
        vec![("A", 1)],
        vec![("A", 2), ("B", 0), ("C", 1)],
        vec![("A", 0), ("B", 0), ("C", 0)],
        vec![("A", 3), ("B", 1), ("C", 0), ("D", 4)],
        vec![("A", 0), ("B", 5), ("C", 0), ("D", 0), ("E", 2)],
    ]
}

#[test]
fn test_count_is_sum_of_non_empty_spans() {
    init_logging();
    for sizes in configurations() {
        let list = build(&sizes);
        let expected: usize = sizes
            .iter()
            .filter(|(_, size)| *size > 0)
            .map(|(_, size)| size + 1)
            .sum();
        assert_eq!(list.count(), expected, "sizes {sizes:?}");
    }
}

#[test]
fn test_every_position_has_exactly_one_covering_section() {
    for sizes in configurations() {
        let list = build(&sizes);
        let mut header_offset = 0;

        for (ordinal, &(name, size)) in sizes.iter().enumerate() {
            if size == 0 {
                assert_eq!(list.position_for_section(ordinal), None);
                continue;
            }

            assert_eq!(list.position_for_section(ordinal), Some(header_offset));
            assert_eq!(
                list.locate(header_offset),
                Some(FlatPosition::Header { section: ordinal })
            );
            assert_eq!(list.item(header_offset), ItemData::from(name));

            for k in 0..size {
                let position = header_offset + 1 + k;
                assert_eq!(
                    list.locate(position),
                    Some(FlatPosition::Item {
                        section: ordinal,
                        index: k
                    })
                );
                assert_eq!(list.item(position), ItemData::from(format!("{name}{k}")));
            }

            header_offset += size + 1;
        }

        assert_eq!(header_offset, list.count());
        assert_eq!(list.locate(list.count()), None);
    }
}

#[test]
fn test_headers_have_type_zero_and_items_are_offset() {
    for sizes in configurations() {
        let list = build(&sizes);
        let mut prior_types = 0;
        let mut position = 0;

        for &(_, size) in &sizes {
            if size > 0 {
                assert_eq!(list.item_view_type(position), Some(0));
                for k in 0..size {
                    let view_type = list.item_view_type(position + 1 + k).unwrap();
                    assert!(view_type >= prior_types + 1);
                    assert!(view_type < list.view_type_count());
                }
                position += size + 1;
            }
            prior_types += 1;
        }

        assert_eq!(list.view_type_count(), 1 + sizes.len());
        assert_eq!(list.item_view_type(list.count()), None);
    }
}

#[test]
fn test_headers_and_out_of_range_are_disabled() {
    for sizes in configurations() {
        let list = build(&sizes);
        for position in 0..list.count() {
            assert_eq!(list.is_enabled(position), !list.is_header(position));
        }
        assert!(!list.is_enabled(list.count()));
        assert!(!list.is_enabled(list.count() + 7));
        assert!(!list.are_all_items_enabled());
    }
}

#[test]
fn test_empty_section_leaves_count_unchanged() {
    let list = build(&[("A", 2)]);
    let before = list.count();
    list.add_section("Nothing", section(&[])).unwrap();
    assert_eq!(list.count(), before);
    assert_eq!(list.view_type_count(), 3);
}

#[test]
fn test_scenario_a2_b0_c1() {
    let list = build(&[("A", 2), ("B", 0), ("C", 1)]);
    assert_eq!(list.count(), 5);

    let items: Vec<ItemData> = (0..list.count()).map(|position| list.item(position)).collect();
    assert_eq!(
        items,
        vec![
            ItemData::from("A"),
            ItemData::from("A0"),
            ItemData::from("A1"),
            ItemData::from("C"),
            ItemData::from("C0"),
        ]
    );

    let ids: Vec<_> = (0..list.count()).map(|position| list.item_id(position)).collect();
    assert_eq!(ids, vec![Some(0), Some(0), Some(1), Some(0), Some(0)]);
    assert_eq!(list.item_id(5), None);
}

#[test]
fn test_single_empty_section() {
    let list = SeparatedListAdapter::<RecordingHost>::new(HEADER);
    list.add_section("Only", section(&[])).unwrap();
    assert_eq!(list.count(), 0);
    assert_eq!(list.view_type_count(), 2);
    assert!(list.item(0).is_none());
}

#[test]
fn test_renders_headers_and_rows_through_the_host() {
    init_logging();
    let list = SeparatedListAdapter::<RecordingHost>::with_text_slot(HEADER, SlotId(3));
    list.add_section("Fruit", section(&["apple"])).unwrap();

    let mut host = RecordingHost::default();
    let header = list.view_for_item(0, None, &mut host).unwrap().unwrap();
    assert_eq!(header.layout, HEADER);
    assert_eq!(header.bound, vec![(SlotId(3), "Fruit".to_string())]);

    let row = list.view_for_item(1, None, &mut host).unwrap().unwrap();
    assert_eq!(row.layout, ROW.layout);
    assert_eq!(row.bound, vec![(SlotId::TEXT, "apple".to_string())]);

    assert_eq!(host.inflated, vec![HEADER, ROW.layout]);
    assert!(list.view_for_item(2, None, &mut host).unwrap().is_none());
    assert_eq!(host.inflated.len(), 2);
}

#[test]
fn test_recycled_views_are_passed_through() {
    let list = build(&[("A", 1)]);
    let mut host = RecordingHost::default();

    let first = list.view_for_item(0, None, &mut host).unwrap().unwrap();
    let again = list.view_for_item(0, Some(first), &mut host).unwrap().unwrap();

    assert_eq!(host.inflated.len(), 1);
    assert_eq!(again.bound.len(), 2);
}

#[test]
fn test_template_loaded_from_toml() {
    let template = RowTemplate::from_toml_str("layout = 20\ntext_slot = 6\n").unwrap();
    let list = SeparatedListAdapter::<RecordingHost>::with_template(template);
    assert_eq!(list.header_template().text_slot, SlotId(6));

    let err = RowTemplate::from_toml_str("layout = \"wide\"").unwrap_err();
    assert!(matches!(err, AdapterError::InvalidTemplate(_)));
}

#[test]
fn test_child_change_produces_exactly_one_parent_change() {
    init_logging();
    let fruit = section(&["apple"]);
    let list = SeparatedListAdapter::<RecordingHost>::new(HEADER);
    list.add_section("Fruit", fruit.clone()).unwrap();
    list.add_section("Bread", section(&["rye"])).unwrap();

    let changes = Arc::new(AtomicUsize::new(0));
    let recv = changes.clone();
    list.signals().changed.connect(move |_| {
        recv.fetch_add(1, Ordering::SeqCst);
    });

    fruit.notify_changed();
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    fruit.notify_changed();
    assert_eq!(changes.load(Ordering::SeqCst), 2);
}

#[derive(Default)]
struct Log {
    events: Mutex<Vec<String>>,
}

impl DataSetObserver for Log {
    fn on_changed(&self) {
        self.events.lock().push("changed".to_string());
    }

    fn on_invalidated(&self) {
        self.events.lock().push("invalidated".to_string());
    }
}

#[test]
fn test_observers_see_forwarded_notifications() {
    let fruit = section(&["apple"]);
    let list = SeparatedListAdapter::<RecordingHost>::new(HEADER);
    list.add_section("Fruit", fruit.clone()).unwrap();

    let log = Arc::new(Log::default());
    let registration = list.signals().register_observer(log.clone());

    fruit.push("pear".to_string());
    fruit.notify_invalidated();
    assert_eq!(*log.events.lock(), vec!["changed", "invalidated"]);

    assert!(list.signals().unregister_observer(registration));
    fruit.notify_changed();
    assert_eq!(log.events.lock().len(), 2);
}

#[test]
fn test_nested_separated_lists_compose() {
    let inner = Arc::new(build(&[("X", 1), ("Y", 1)]));
    let outer = SeparatedListAdapter::<RecordingHost>::new(HEADER);
    outer.add_section("Inner", inner.clone()).unwrap();
    outer.add_section("Tail", section(&["t"])).unwrap();

    // [Inner, X, X0, Y, Y0, Tail, t]
    assert_eq!(outer.count(), 7);
    assert_eq!(outer.item(1), ItemData::from("X"));
    assert!(!outer.is_enabled(1));
    assert_eq!(outer.item(4), ItemData::from("Y0"));
    assert_eq!(outer.item_view_type(1), Some(1));
    assert_eq!(outer.view_type_count(), 1 + 3 + 1);

    let changes = Arc::new(AtomicUsize::new(0));
    let recv = changes.clone();
    outer.signals().changed.connect(move |_| {
        recv.fetch_add(1, Ordering::SeqCst);
    });
    inner.signals().notify_changed();
    assert_eq!(changes.load(Ordering::SeqCst), 1);
}

/// A child that emits through the shared signal type directly.
struct Silent {
    signals: AdapterSignals,
}

impl ListAdapter<RecordingHost> for Silent {
    fn count(&self) -> usize {
        0
    }

    fn item(&self, _position: usize) -> ItemData {
        ItemData::None
    }

    fn item_id(&self, _position: usize) -> Option<i64> {
        None
    }

    fn view_for_item(
        &self,
        _position: usize,
        _recycled: Option<View>,
        _container: &mut RecordingHost,
    ) -> AdapterResult<Option<View>> {
        Ok(None)
    }

    fn signals(&self) -> &AdapterSignals {
        &self.signals
    }
}

#[test]
fn test_empty_children_still_forward() {
    let silent = Arc::new(Silent {
        signals: AdapterSignals::new(),
    });
    let list = SeparatedListAdapter::<RecordingHost>::new(HEADER);
    list.add_section("Silent", silent.clone()).unwrap();

    let invalidations = Arc::new(AtomicUsize::new(0));
    let recv = invalidations.clone();
    list.signals().invalidated.connect(move |_| {
        recv.fetch_add(1, Ordering::SeqCst);
    });

    silent.signals.notify_invalidated();
    assert_eq!(invalidations.load(Ordering::SeqCst), 1);
    assert_eq!(list.count(), 0);
}
