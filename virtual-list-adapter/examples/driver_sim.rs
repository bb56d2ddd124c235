// Example: drive a list through mount/measure frames without a UI.
use virtual_list::{Align, ListOptions};
use virtual_list_adapter::{ListDriver, ManualScheduler};

fn rendered_height(id: &u32) -> Option<u32> {
    Some(20 + (id % 5) * 10)
}

fn render(driver: &mut ListDriver<u32, u32, u32, ManualScheduler>) {
    let visible: Vec<u32> = driver.list().visible_items().to_vec();
    let stale: Vec<u32> = driver
        .mounted()
        .iter()
        .map(|(k, _)| *k)
        .filter(|k| !visible.contains(k))
        .collect();
    for key in stale {
        driver.unmount(&key);
    }
    for key in visible {
        if !driver.mounted().contains(&key) {
            driver.mount(key, key);
        }
    }
}

fn pump(driver: &mut ListDriver<u32, u32, u32, ManualScheduler>, now_ms: u64) {
    loop {
        render(driver);
        if !driver.scheduler_mut().take_request() {
            break;
        }
        let report = driver.on_frame(now_ms, rendered_height);
        println!(
            "frame@{now_ms}: {report:?} scroll_top={} range={:?}",
            driver.list().scroll_top(),
            driver.list().range()
        );
        if let Some(top) = driver.take_scroll_instruction() {
            println!("  host: set native scrollTop={top}");
        }
    }
}

fn main() {
    let options = ListOptions::new(300, 25, |id: &u32| *id).with_evict_unmounted_heights(false);
    let mut driver = ListDriver::new(options, (0..500).collect(), ManualScheduler::new());
    pump(&mut driver, 0);

    // Two wheel ticks in the same frame.
    let _ = driver.on_wheel(120);
    let _ = driver.on_wheel(80);
    pump(&mut driver, 16);

    driver.scroll_to_index(250, Align::Top, 32);
    pump(&mut driver, 32);

    // Drag the scrollbar thumb 40px down.
    let grab = driver.scrollbar_state().thumb_position;
    driver.on_thumb_pointer_down(grab, 48);
    driver.on_thumb_pointer_move(grab + 40.0, 64);
    driver.on_thumb_pointer_up(80);
    pump(&mut driver, 80);
    println!("scrollbar: {:?}", driver.scrollbar_state());

    driver.tick(80 + 2_000);
    println!("after idle: visible={}", driver.scrollbar_state().visible);
}
