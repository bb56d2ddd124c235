// Example: scroll to an item whose height is not known yet.
use virtual_list::{Align, ListOptions, ScrollPhase, VirtualList};

fn main() {
    let items: Vec<u32> = (0..1_000).collect();
    let mut list = VirtualList::new(ListOptions::new(300, 24, |id: &u32| *id), items);

    let first = list.scroll_to_key(700, Align::Top, 0);
    println!("scroll_to_key(700): {first:?} phase={:?}", list.phase());

    // Simulate the renderer measuring what is now on screen (rows are really 40px).
    while list.phase() == ScrollPhase::Animating {
        let keys: Vec<u32> = list.visible_items().to_vec();
        for key in keys {
            list.record_height(key, 40);
        }
        if !list.commit_heights() {
            list.settle_scroll();
        }
        println!(
            "after measurement: scroll_top={} phase={:?} range={:?}",
            list.scroll_top(),
            list.phase(),
            list.range()
        );
    }

    // Auto alignment leaves a fully visible item alone.
    let before = list.scroll_top();
    list.scroll_to_index(701, Align::Auto, 0);
    println!("scroll_to_index(701, Auto): moved={}", list.scroll_top() != before);
}
