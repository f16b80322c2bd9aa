use catalog::Catalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/wiki_movie_plots_deduped.csv".to_string());

    println!("Loading movie catalog from {}...\n", path);

    let start = Instant::now();
    let catalog = Catalog::load_csv(Path::new(&path)).expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
    println!(
        "\nPerformance: {:.0} records/second",
        catalog.len() as f64 / elapsed.as_secs_f64()
    );
}
