use crate::*;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Row {
    id: u32,
    height: u32,
}

impl Keyed for Row {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

/// Even rows are 30px, odd rows 100px.
fn alternating_rows(n: u32) -> Vec<Row> {
    (0..n)
        .map(|id| Row {
            id,
            height: if id % 2 == 0 { 30 } else { 100 },
        })
        .collect()
}

fn uniform_rows(n: u32, height: u32) -> Vec<Row> {
    (0..n).map(|id| Row { id, height }).collect()
}

fn measure_all(list: &mut VirtualList<Row, u32>) {
    let rows: Vec<(u32, u32)> = list.items().iter().map(|r| (r.id, r.height)).collect();
    for (id, height) in rows {
        list.record_height(id, height);
    }
    list.commit_heights();
}

fn measured_uniform_list(n: u32, height: u32, viewport: u32) -> VirtualList<Row, u32> {
    let mut list = VirtualList::new(
        ListOptions::keyed(viewport, height),
        uniform_rows(n, height),
    );
    measure_all(&mut list);
    list
}

fn prefix_sum(heights: &[u32], count: usize) -> u64 {
    heights[..count].iter().map(|&h| h as u64).sum()
}

// ----- window -----

#[test]
fn window_at_top_uses_estimates() {
    let list = VirtualList::new(ListOptions::keyed(500, 30), alternating_rows(100));
    let r = list.range();
    assert!(r.virtualized);
    assert_eq!(r.start_index, 0);
    assert_eq!(r.offset, 0);
    // Item 16 is the first whose bottom (17 * 30) passes 500; one trailing item follows.
    assert_eq!(r.last_index(), Some(17));
    assert_eq!(r.total_height, 100 * 30);
}

#[test]
fn window_with_real_heights_starts_at_largest_prefix_below_scroll_top() {
    let mut list = VirtualList::new(ListOptions::keyed(500, 30), alternating_rows(100));
    measure_all(&mut list);
    assert_eq!(list.range().total_height, 50 * 30 + 50 * 100);

    assert!(list.set_scroll_top(1000));
    let r = list.range();

    let heights: Vec<u32> = list.items().iter().map(|r| r.height).collect();
    let expected_start = (0..=heights.len())
        .filter(|&n| prefix_sum(&heights, n) <= 1000)
        .max()
        .unwrap();
    assert_eq!(r.start_index, expected_start);
    assert_eq!(r.start_index, 15);
    assert_eq!(r.offset, 940);
    assert_eq!(r.offset, prefix_sum(&heights, r.start_index));
    // Item 23 crosses 1500; one trailing item follows.
    assert_eq!(r.last_index(), Some(24));
}

#[test]
fn trailing_buffer_is_tunable_and_capped_at_last_item() {
    let mut list = measured_uniform_list(100, 10, 95);
    assert_eq!(list.range().last_index(), Some(10));

    list.update_options(|o| o.trailing_buffer = 0);
    assert_eq!(list.range().last_index(), Some(9));

    list.update_options(|o| o.trailing_buffer = 3);
    assert_eq!(list.range().last_index(), Some(12));

    list.set_scroll_top(u64::MAX);
    assert_eq!(list.range().last_index(), Some(99));
}

#[test]
fn window_is_full_range_when_content_fits() {
    // 10 * 40 = 400 <= 500
    let mut list = VirtualList::new(ListOptions::keyed(500, 40), uniform_rows(10, 40));
    list.set_natural_height(400);

    let r = list.range();
    assert!(!r.virtualized);
    assert_eq!((r.start_index, r.end_index), (0, 10));
    assert_eq!(r.offset, 0);
    assert_eq!(r.total_height, 400);

    let g = list.scrollbar_geometry();
    assert!(!g.is_scrollable());
    assert_eq!(list.max_scroll(), 0);
}

#[test]
fn window_is_full_range_when_virtualization_is_off_or_unconfigured() {
    let list = VirtualList::new(
        ListOptions::keyed(500, 30).with_virtual(false),
        alternating_rows(100),
    );
    assert!(!list.is_virtual());
    assert_eq!(list.range().indexes(), 0..100);
    assert!(!list.uses_scrollbar());

    let list = VirtualList::new(ListOptions::keyed(0, 30), alternating_rows(100));
    assert!(!list.is_virtual());
    assert_eq!(list.range().len(), 100);

    let list = VirtualList::new(ListOptions::keyed(500, 0), alternating_rows(100));
    assert!(!list.is_virtual());
}

#[test]
fn empty_list_yields_empty_range() {
    let mut list = VirtualList::new(ListOptions::keyed(500, 30), Vec::<Row>::new());
    let r = list.range();
    assert!(r.is_empty());
    assert_eq!(r.last_index(), None);
    assert!(list.visible_items().is_empty());
    assert_eq!(list.scrollbar_geometry().thumb_size(), 0);
    assert_eq!(list.scroll_to_index(3, Align::Top, 0), None);
}

#[test]
fn calculator_recomputes_only_on_trigger_changes() {
    let mut list = measured_uniform_list(100, 20, 200);
    let before = list.calculator().recomputes();
    let range = list.range();

    // Not part of the trigger set.
    list.set_sizing(SizingMode::MaxHeight);
    list.begin_drag();
    list.end_drag();
    assert!(!list.set_scroll_top(0));
    assert_eq!(list.calculator().recomputes(), before);
    assert_eq!(list.range(), range);

    list.set_scroll_top(100);
    assert_eq!(list.calculator().recomputes(), before + 1);

    // Re-measuring with identical values does not bump the version.
    measure_all(&mut list);
    assert_eq!(list.calculator().recomputes(), before + 1);

    list.set_viewport_height(300);
    assert_eq!(list.calculator().recomputes(), before + 2);
}

#[test]
fn compute_window_is_idempotent() {
    let items: Vec<usize> = (0..50).collect();
    let mut heights = HeightCache::new();
    for i in (0..50).step_by(3) {
        heights.set(i, 17 + i as u32);
    }
    heights.commit();
    let config = WindowConfig {
        viewport_height: 120,
        item_height: 12,
        virtual_enabled: true,
        trailing_buffer: 1,
    };
    let a = compute_window(&items, |i| *i, 333, &config, &heights, 0);
    let b = compute_window(&items, |i| *i, 333, &config, &heights, 0);
    assert_eq!(a, b);

    let mut calc = WindowCalculator::new();
    let inputs = WindowInputs {
        scroll_top: 333,
        data_revision: 0,
        count: items.len(),
        heights_version: heights.version(),
        viewport_height: 120,
        virtualized: true,
        natural_height: None,
    };
    let first = calc.window(inputs, || a);
    let second = calc.window(inputs, || unreachable!("inputs did not change"));
    assert_eq!(first, second);
    assert_eq!(calc.recomputes(), 1);
}

#[test]
fn window_covers_every_intersecting_item_randomized() {
    let mut rng = Lcg::new(0x5eed_1234);
    for _ in 0..300 {
        let count = rng.gen_range_usize(1, 200);
        let estimate = rng.gen_range_u32(1, 80);
        let viewport = rng.gen_range_u32(1, 600);
        let config = WindowConfig {
            viewport_height: viewport,
            item_height: estimate,
            virtual_enabled: true,
            trailing_buffer: rng.gen_range_usize(0, 3),
        };
        if !config.is_virtual(count) {
            continue;
        }

        let items: Vec<usize> = (0..count).collect();
        let mut cache = HeightCache::new();
        let mut heights = Vec::with_capacity(count);
        for i in 0..count {
            if rng.gen_bool() {
                let h = rng.gen_range_u32(1, 200);
                cache.set(i, h);
                heights.push(h);
            } else {
                heights.push(estimate);
            }
        }
        cache.commit();

        let total = prefix_sum(&heights, count);
        let max_scroll = total.saturating_sub(viewport as u64);
        let scroll_top = rng.gen_range_u64(0, max_scroll + 1);
        let r = compute_window(&items, |i| *i, scroll_top, &config, &cache, 0);

        assert_eq!(r.total_height, total);
        assert_eq!(r.offset, prefix_sum(&heights, r.start_index));
        assert!(r.start_index < r.end_index && r.end_index <= count);

        let view_end = scroll_top + viewport as u64;
        for i in 0..count {
            let top = prefix_sum(&heights, i);
            let bottom = top + heights[i] as u64;
            if bottom > scroll_top && top < view_end {
                assert!(
                    r.contains(i),
                    "item {i} [{top}, {bottom}) intersects [{scroll_top}, {view_end}) but range is {r:?}"
                );
            }
        }
    }
}

#[test]
fn window_is_monotonic_in_scroll_top() {
    let mut list = measured_uniform_list(200, 25, 400);
    let max = list.max_scroll();
    let mut prev = list.range();
    let mut top = 0u64;
    while top <= max {
        list.set_scroll_top(top);
        let r = list.range();
        assert!(r.start_index >= prev.start_index);
        assert!(r.end_index >= prev.end_index);
        prev = r;
        top += 7;
    }
}

// ----- height cache -----

#[test]
fn height_cache_bumps_version_once_per_batch() {
    let mut cache = HeightCache::<&str>::new();
    assert_eq!(cache.version(), 0);
    assert!(!cache.commit());

    assert!(cache.set("a", 10));
    assert!(cache.set("b", 20));
    assert!(cache.set("a", 11));
    assert!(cache.is_dirty());
    assert!(cache.commit());
    assert_eq!(cache.version(), 1);

    // No-op writes and removals of missing keys leave the cache clean.
    assert!(!cache.set("a", 11));
    assert!(!cache.remove(&"zzz"));
    assert!(!cache.is_dirty());
    assert!(!cache.commit());
    assert_eq!(cache.version(), 1);

    assert!(cache.remove(&"b"));
    assert!(cache.commit());
    assert_eq!(cache.version(), 2);
    assert_eq!(cache.get(&"b"), None);
    assert_eq!(cache.height_or(&"b", 7), 7);
    assert_eq!(cache.height_or(&"a", 7), 11);
}

#[test]
fn height_cache_export_import_roundtrip() {
    let mut cache = HeightCache::<u32>::new();
    cache.set(1, 10);
    cache.set(2, 20);
    cache.commit();

    let mut entries = cache.export();
    entries.sort();
    assert_eq!(entries, vec![(1, 10), (2, 20)]);

    let mut restored = HeightCache::<u32>::new();
    restored.import(entries);
    assert!(restored.commit());
    assert_eq!(restored.len(), 2);
    assert_eq!(restored.get(&2), Some(20));

    restored.clear();
    assert!(restored.commit());
    assert!(restored.is_empty());
}

#[test]
fn list_heights_follow_keys_across_reorder() {
    let mut list = VirtualList::new(ListOptions::keyed(100, 10), uniform_rows(30, 10));
    list.record_height(0, 50);
    assert!(list.commit_heights());
    assert_eq!(list.item_placement(1).unwrap().top, 50);

    list.update_items(|items| items.reverse());
    let last = list.item_placement(29).unwrap();
    assert!(last.measured);
    assert_eq!(last.height, 50);
    assert_eq!(last.top, 29 * 10);
}

#[test]
fn list_export_import_heights() {
    let mut list = VirtualList::new(ListOptions::keyed(300, 30), alternating_rows(100));
    measure_all(&mut list);
    let saved = list.export_heights();
    assert_eq!(saved.len(), 100);

    let mut fresh = VirtualList::new(ListOptions::keyed(300, 30), alternating_rows(100));
    fresh.import_heights(saved);
    assert_eq!(fresh.range().total_height, 6500);

    fresh.reset_heights();
    assert_eq!(fresh.range().total_height, 3000);
}

// ----- scroll controller -----

#[test]
fn negative_delta_at_top_passes_through() {
    let mut list = measured_uniform_list(100, 30, 300);
    assert_eq!(list.scroll_top(), 0);

    let outcome = list.apply_delta(-40);
    assert_eq!(outcome, DeltaOutcome::PassThrough);
    assert!(outcome.is_pass_through());
    assert_eq!(list.scroll_top(), 0);

    assert_eq!(list.apply_delta(40), DeltaOutcome::Consumed);
    assert_eq!(list.scroll_top(), 40);

    // Past the start from a non-edge position: clamped, not passed through.
    assert_eq!(list.apply_delta(-100), DeltaOutcome::Consumed);
    assert_eq!(list.scroll_top(), 0);
}

#[test]
fn positive_delta_at_bottom_passes_through() {
    let mut list = measured_uniform_list(100, 30, 300);
    assert_eq!(list.apply_delta(1_000_000), DeltaOutcome::Consumed);
    assert_eq!(list.scroll_top(), 2700);
    assert_eq!(list.scroll_top(), list.max_scroll());

    assert_eq!(list.apply_delta(5), DeltaOutcome::PassThrough);
    assert_eq!(list.scroll_top(), 2700);
    assert_eq!(list.apply_delta(-5), DeltaOutcome::Consumed);
}

#[test]
fn queued_deltas_combine_until_flushed() {
    let mut list = measured_uniform_list(100, 30, 300);
    assert_eq!(list.queue_delta(10), DeltaOutcome::Consumed);
    assert_eq!(list.queue_delta(15), DeltaOutcome::Consumed);
    assert!(list.has_queued_delta());
    assert_eq!(list.scroll_top(), 0);

    assert!(list.flush_queued_delta());
    assert_eq!(list.scroll_top(), 25);
    assert!(!list.has_queued_delta());
    assert!(!list.flush_queued_delta());

    list.set_scroll_top(0);
    assert_eq!(list.queue_delta(-3), DeltaOutcome::PassThrough);
    assert!(!list.has_queued_delta());
}

#[test]
fn queued_delta_moves_the_edge_for_later_deltas() {
    let mut list = measured_uniform_list(100, 30, 300);
    assert_eq!(list.queue_delta(100), DeltaOutcome::Consumed);
    // The queue already leaves the top, so scrolling back up is not at an edge.
    assert_eq!(list.queue_delta(-30), DeltaOutcome::Consumed);
    assert!(list.flush_queued_delta());
    assert_eq!(list.scroll_top(), 70);

    // Queued back to the top: further upward deltas pass through.
    assert_eq!(list.queue_delta(-70), DeltaOutcome::Consumed);
    assert_eq!(list.queue_delta(-5), DeltaOutcome::PassThrough);
    assert!(list.flush_queued_delta());
    assert_eq!(list.scroll_top(), 0);

    list.set_scroll_top(2600);
    assert_eq!(list.queue_delta(500), DeltaOutcome::Consumed);
    assert_eq!(list.queue_delta(1), DeltaOutcome::PassThrough);
    assert_eq!(list.queue_delta(-200), DeltaOutcome::Consumed);
    assert!(list.flush_queued_delta());
    assert_eq!(list.scroll_top(), 2700);
}

#[test]
fn thumb_drag_maps_track_offset_to_content() {
    // H=500, N=100, T=5500 -> thumb 50, track 450, content 5000.
    let mut list = measured_uniform_list(100, 55, 500);
    let g = list.scrollbar_geometry();
    assert_eq!(g.thumb_size(), 50);
    assert_eq!(g.track_range(), 450);
    assert_eq!(g.content_range(), 5000);

    list.begin_drag();
    assert_eq!(list.phase(), ScrollPhase::Dragging);
    assert!(list.drag_thumb_to(225.0));
    assert_eq!(list.scroll_top(), 2500);

    assert!(list.drag_thumb_to(450.0));
    assert_eq!(list.scroll_top(), 5000);

    // Past the end of the track: clamped.
    assert!(!list.drag_thumb_to(900.0));
    assert_eq!(list.scroll_top(), 5000);

    list.end_drag();
    assert_eq!(list.phase(), ScrollPhase::Idle);
}

#[test]
fn scroll_to_aligns_measured_items() {
    let mut list = measured_uniform_list(100, 30, 300);

    assert_eq!(list.scroll_to_index(50, Align::Top, 0), Some(1500));
    assert_eq!(list.scroll_to_index(50, Align::Bottom, 0), Some(1230));

    // Item 45 spans [1350, 1380), inside [1230, 1530): no move.
    assert_eq!(list.scroll_to_index(45, Align::Auto, 0), Some(1230));
    // Below the viewport: bottom-align.
    assert_eq!(list.scroll_to_index(60, Align::Auto, 0), Some(1530));
    // Above the viewport: top-align.
    assert_eq!(list.scroll_to_index(10, Align::Auto, 0), Some(300));

    assert_eq!(list.scroll_to_index(50, Align::Top, -10), Some(1490));
    assert_eq!(list.scroll_to_index(50, Align::Top, 12), Some(1512));

    // Out of range clamps to the last item, then to max_scroll.
    assert_eq!(list.scroll_to_index(500, Align::Top, 0), Some(2700));
    assert_eq!(list.phase(), ScrollPhase::Idle);
    assert!(list.pending_scroll().is_none());
}

#[test]
fn scroll_to_key_resolves_to_index() {
    let mut list = measured_uniform_list(100, 30, 300);
    assert_eq!(list.scroll_to_key(20, Align::Top, 0), Some(600));
    assert_eq!(list.scroll_to_key(12345, Align::Top, 0), None);
    assert_eq!(list.scroll_top(), 600);
}

#[test]
fn scroll_to_unmeasured_item_corrects_after_measurement() {
    let mut list = VirtualList::new(ListOptions::keyed(500, 30), alternating_rows(100));

    // Estimated top of item 40 is 40 * 30.
    assert_eq!(list.scroll_to_index(40, Align::Top, 0), Some(1200));
    assert_eq!(list.phase(), ScrollPhase::Animating);
    assert_eq!(list.pending_scroll().map(|p| p.index), Some(40));

    measure_all(&mut list);

    // Real top: 20 pairs of (30 + 100).
    assert_eq!(list.scroll_top(), 2600);
    assert_eq!(list.phase(), ScrollPhase::Idle);
    assert!(list.pending_scroll().is_none());
    assert!(list.range().contains(40));
}

#[test]
fn new_scroll_to_supersedes_pending_one() {
    let mut list = VirtualList::new(ListOptions::keyed(500, 30), alternating_rows(100));
    list.scroll_to_index(40, Align::Top, 0);
    list.scroll_to_key(60, Align::Bottom, 0);
    let pending = list.pending_scroll().unwrap();
    assert_eq!(pending.target, ScrollTarget::Key(60));
    assert_eq!(pending.index, 60);
    assert_eq!(pending.align, Align::Bottom);

    measure_all(&mut list);
    let item = list.item_placement(60).unwrap();
    assert_eq!(list.scroll_top(), item.bottom() - 500);
    assert_eq!(list.phase(), ScrollPhase::Idle);
}

#[test]
fn user_input_cancels_pending_scroll_to() {
    let mut list = VirtualList::new(ListOptions::keyed(500, 30), alternating_rows(100));
    list.scroll_to_index(40, Align::Top, 0);
    assert_eq!(list.phase(), ScrollPhase::Animating);

    let _ = list.apply_delta(10);
    assert_eq!(list.phase(), ScrollPhase::Idle);
    assert!(list.pending_scroll().is_none());

    list.scroll_to_index(40, Align::Top, 0);
    list.begin_drag();
    assert_eq!(list.phase(), ScrollPhase::Dragging);
    assert!(list.pending_scroll().is_none());
}

#[test]
fn scroll_to_gives_up_after_attempt_budget() {
    let mut list = VirtualList::new(
        ListOptions::keyed(500, 30).with_scroll_to_attempts(2),
        alternating_rows(100),
    );
    list.scroll_to_index(40, Align::Top, 0);

    assert!(!list.settle_scroll());
    assert_eq!(list.phase(), ScrollPhase::Animating);
    assert_eq!(list.pending_scroll().map(|p| p.attempts_left), Some(1));

    assert!(!list.settle_scroll());
    assert_eq!(list.phase(), ScrollPhase::Idle);
    assert!(list.pending_scroll().is_none());
}

#[test]
fn pending_scroll_to_is_dropped_when_key_disappears() {
    let mut list = VirtualList::new(ListOptions::keyed(500, 30), alternating_rows(100));
    list.scroll_to_key(70, Align::Top, 0);
    assert_eq!(list.phase(), ScrollPhase::Animating);

    list.update_items(|items| items.retain(|r| r.id != 70));
    assert!(!list.settle_scroll());
    assert_eq!(list.phase(), ScrollPhase::Idle);
}

#[test]
fn external_scroll_is_accepted_and_clamped() {
    let mut list = measured_uniform_list(100, 30, 300);
    assert!(!list.on_external_scroll(0));
    assert!(list.on_external_scroll(120));
    assert_eq!(list.scroll_top(), 120);
    assert!(list.on_external_scroll(999_999));
    assert_eq!(list.scroll_top(), 2700);
}

#[test]
fn shrinking_data_reclamps_scroll_position() {
    let mut list = measured_uniform_list(100, 30, 300);
    list.set_scroll_top(2700);
    list.set_items(uniform_rows(20, 30));
    assert_eq!(list.max_scroll(), 300);
    assert_eq!(list.scroll_top(), 300);
    assert!(list.range().contains(19));
}

#[test]
fn round_trip_scroll_to_lands_in_range_randomized() {
    let mut rng = Lcg::new(42);
    for _ in 0..40 {
        let n = rng.gen_range_u64(20, 300) as u32;
        let rows: Vec<Row> = (0..n)
            .map(|id| Row {
                id,
                height: rng.gen_range_u32(5, 120),
            })
            .collect();
        let mut list = VirtualList::new(ListOptions::keyed(400, 40), rows);
        let index = rng.gen_range_usize(0, n as usize);
        let align = match rng.gen_range_u64(0, 3) {
            0 => Align::Top,
            1 => Align::Bottom,
            _ => Align::Auto,
        };
        list.scroll_to_index(index, align, 0);
        measure_all(&mut list);
        list.settle_scroll();

        if list.is_virtual() {
            assert!(list.range().contains(index), "index {index} not in {:?}", list.range());
        }
        assert_ne!(list.phase(), ScrollPhase::Animating);
    }
}

// ----- notifications & host snapshots -----

#[test]
fn visible_change_fires_once_per_window_change() {
    let calls: Arc<Mutex<Vec<(usize, usize)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let options = ListOptions::<Row, u32>::keyed(300, 30).with_on_visible_change(Some(
        move |visible: &[Row], full: &[Row]| {
            sink.lock().unwrap().push((visible.len(), full.len()));
        },
    ));
    let mut list = VirtualList::new(options, uniform_rows(100, 30));
    assert_eq!(calls.lock().unwrap().len(), 1);

    list.set_scroll_top(0);
    list.set_sizing(SizingMode::MaxHeight);
    assert_eq!(calls.lock().unwrap().len(), 1);

    list.set_scroll_top(600);
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1], (list.range().len(), 100));
}

#[test]
fn batch_update_recomputes_once() {
    let mut list = measured_uniform_list(100, 30, 300);
    let before = list.calculator().recomputes();
    list.batch_update(|l| {
        l.set_scroll_top(300);
        l.set_scroll_top(600);
        l.set_viewport_height(200);
    });
    assert_eq!(list.calculator().recomputes(), before + 1);
    assert_eq!(list.scroll_top(), 600);
    assert!(list.range().contains(20));
}

#[test]
fn visible_items_stay_in_bounds_when_data_shrinks_mid_batch() {
    let mut list = measured_uniform_list(100, 30, 300);
    list.set_scroll_top(2700);
    list.batch_update(|l| {
        l.set_items(uniform_rows(5, 30));
        assert!(l.visible_items().is_empty());
        let mut seen = 0;
        l.for_each_visible(|_| seen += 1);
        assert_eq!(seen, 0);
    });
    assert_eq!(list.scroll_top(), 0);
    assert_eq!(list.visible_items().len(), 5);
}

#[test]
fn for_each_visible_reports_index_item_and_key() {
    let mut list = measured_uniform_list(100, 30, 300);
    list.set_scroll_top(900);
    let mut seen = Vec::new();
    list.for_each_visible(|v| {
        assert_eq!(v.item.id, v.key);
        seen.push(v.index);
    });
    assert_eq!(seen.first(), Some(&list.range().start_index));
    assert_eq!(seen.len(), list.range().len());
}

#[test]
fn container_layout_follows_sizing_and_drag() {
    let mut list = measured_uniform_list(100, 30, 300);
    let layout = list.container_layout();
    assert_eq!(layout.height, Some(300));
    assert_eq!(layout.max_height, None);
    assert!(layout.overflow_hidden);
    assert!(!layout.pointer_events_disabled);
    assert_eq!(layout.filler_height, 3000);

    // Touch drags leave item pointer events alone.
    list.begin_drag();
    assert_eq!(list.phase(), ScrollPhase::Dragging);
    assert!(!list.container_layout().pointer_events_disabled);
    list.end_drag();

    list.set_sizing(SizingMode::MaxHeight);
    list.begin_thumb_drag();
    let layout = list.container_layout();
    assert_eq!(layout.height, None);
    assert_eq!(layout.max_height, Some(300));
    assert!(layout.pointer_events_disabled);
    list.end_drag();
    assert!(!list.is_thumb_dragging());
    assert!(!list.container_layout().pointer_events_disabled);

    list.set_virtual_enabled(false);
    assert!(!list.container_layout().overflow_hidden);
}

#[test]
fn frame_state_roundtrip() {
    let mut list = measured_uniform_list(100, 30, 300);
    list.set_scroll_top(450);
    let state = list.frame_state();
    assert_eq!(state.viewport.height, 300);
    assert_eq!(state.scroll.scroll_top, 450);

    let mut restored = measured_uniform_list(100, 30, 100);
    restored.restore_frame_state(state);
    assert_eq!(restored.scroll_top(), 450);
    assert_eq!(restored.range(), list.range());
}

// ----- scrollbar geometry -----

#[test]
fn thumb_size_scenarios() {
    assert_eq!(ScrollbarGeometry::new(500, 5000, 0, 100).thumb_size(), 50);
    // Lower bound.
    assert_eq!(ScrollbarGeometry::new(500, 5000, 0, 10_000).thumb_size(), MIN_THUMB_SIZE);
    // Upper bound: half the viewport.
    assert_eq!(ScrollbarGeometry::new(500, 5000, 0, 5).thumb_size(), 250);
    // A short viewport caps below the minimum.
    assert_eq!(ScrollbarGeometry::new(30, 5000, 0, 100).thumb_size(), 15);
    // Flooring.
    assert_eq!(ScrollbarGeometry::new(500, 5000, 0, 99).thumb_size(), 50);
    assert_eq!(ScrollbarGeometry::new(500, 5000, 0, 0).thumb_size(), 0);
}

#[test]
fn thumb_position_and_inverse() {
    let g = ScrollbarGeometry::new(500, 5500, 2500, 100);
    assert_eq!(g.thumb_position(), 225.0);
    assert_eq!(g.scroll_top_for_thumb(225.0), 2500);
    assert_eq!(g.scroll_top_for_thumb(450.0), 5000);
    // 5000 / 450 = 11.1 -> rounded up.
    assert_eq!(g.scroll_top_for_thumb(1.0), 12);
    assert_eq!(g.scroll_top_for_thumb(-4.0), 0);

    let at_top = ScrollbarGeometry { scroll_top: 0, ..g };
    assert_eq!(at_top.thumb_position(), 0.0);
}

#[test]
fn thumb_position_stays_on_track_past_the_end() {
    // A position the list has not re-clamped yet (content just shrank).
    let g = ScrollbarGeometry::new(500, 5500, 9000, 100);
    assert_eq!(g.thumb_position(), 450.0);
}

#[test]
fn geometry_degenerate_inputs_yield_zero() {
    let no_overflow = ScrollbarGeometry::new(500, 400, 10, 10);
    assert!(!no_overflow.is_scrollable());
    assert_eq!(no_overflow.content_range(), 0);
    assert_eq!(no_overflow.thumb_position(), 0.0);

    let no_track = ScrollbarGeometry::new(0, 400, 10, 10);
    assert_eq!(no_track.track_range(), 0);
    assert_eq!(no_track.scroll_top_for_thumb(30.0), 0);
}
