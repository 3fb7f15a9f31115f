// Example: re-measuring after item sizes change.
use std::sync::{Arc, Mutex};

use lazy_virtualizer::{Invalidation, ListOptions, VariableSizeList};

fn main() {
    let heights = Arc::new(Mutex::new(vec![24u32; 100]));

    let options = ListOptions::new(100, {
        let heights = Arc::clone(&heights);
        move |i| heights.lock().map(|h| h[i]).unwrap_or(24)
    })
    .with_on_invalidate(Some(|inv: Invalidation| {
        // A renderer would drop its per-item style cache here.
        println!("invalidated from {} (rerender={})", inv.index, inv.force_rerender);
    }));
    let mut list = VariableSizeList::new(options);

    println!("offset(50)={}", list.item_offset(50));

    // Row 10 expands.
    if let Ok(mut h) = heights.lock() {
        h[10] = 200;
    }
    list.invalidate_from(10, true);
    println!("offset(50)={}", list.item_offset(50));
}
