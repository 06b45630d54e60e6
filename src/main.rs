//! Page-Window demo CLI (for testing purposes only)
//! The main interface is the library and its WASM bindings.

use page_window::{ConfigError, Paginator};

fn main() -> Result<(), ConfigError> {
    println!("Page-Window Pagination Core");
    println!("===========================");
    println!();

    let mut paginator = Paginator::with_items(1237, 12)?;
    paginator.set_max_visible_pages(5)?;
    paginator.set_edge_pages(2)?;
    paginator.set_middle_pages(1)?;
    paginator.set_middle_page_gap(10)?;

    for page in [1, 6, 52, 104] {
        paginator.go_to_page(page);
        let range = paginator.current_range();
        println!(
            "page {:>3}: {}  (items {})",
            page,
            paginator.strip(),
            range.map_or_else(|| "-".to_string(), |r| format!("{}-{}", r.start, r.end))
        );
    }

    println!();
    println!("To use from JavaScript:");
    println!("  wasm-pack build --target web");
    Ok(())
}
