// Example: feed measured heights back and watch the window correct itself.
use virtual_list::{ListOptions, VirtualList};

fn main() {
    let items: Vec<u32> = (0..100).collect();
    let mut list = VirtualList::new(ListOptions::new(500, 30, |id: &u32| *id), items);
    println!(
        "estimated: total={} range={:?}",
        list.range().total_height,
        list.range()
    );

    // The renderer measured every item: even rows 30px, odd rows 100px.
    for id in 0..100u32 {
        list.record_height(id, if id % 2 == 0 { 30 } else { 100 });
    }
    // One commit, one recompute.
    list.commit_heights();
    println!(
        "measured: total={} version={}",
        list.range().total_height,
        list.heights().version()
    );

    list.set_scroll_top(1000);
    let r = list.range();
    println!(
        "scroll_top=1000: start={} end={} offset={}",
        r.start_index, r.end_index, r.offset
    );

    let g = list.scrollbar_geometry();
    println!(
        "scrollbar: thumb={} position={:.1} track={}",
        g.thumb_size(),
        g.thumb_position(),
        g.track_range()
    );
}
