// Example: window a long list and scroll through it.
use virtual_list::{DeltaOutcome, Keyed, ListOptions, VirtualList};

#[derive(Clone, Debug)]
struct Message {
    id: u64,
    text: String,
}

impl Keyed for Message {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

fn main() {
    let messages: Vec<Message> = (0..10_000)
        .map(|id| Message {
            id,
            text: format!("message #{id}"),
        })
        .collect();

    // 400px viewport, rows estimated at 20px until measured.
    let mut list = VirtualList::new(ListOptions::keyed(400, 20), messages);
    println!("range={:?}", list.range());

    // A wheel tick.
    let outcome = list.apply_delta(1_000);
    println!(
        "apply_delta(1000): {outcome:?} scroll_top={} range={:?}",
        list.scroll_top(),
        list.range()
    );

    list.for_each_visible(|row| {
        if row.index == list.range().start_index {
            println!("first rendered: #{} {:?}", row.index, row.item.text);
        }
    });

    // Scrolling up past the top is left to an outer scroll region.
    list.set_scroll_top(0);
    if list.apply_delta(-50) == DeltaOutcome::PassThrough {
        println!("at the top: delta passed through");
    }

    let layout = list.container_layout();
    println!(
        "container: height={:?} filler={} offset={}",
        layout.height, layout.filler_height, layout.content_offset
    );
}
