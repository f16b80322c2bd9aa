use anyhow::{anyhow, Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use similarity::{NeighborTable, Recommendation, Recommender};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Width of the similarity bar, in glyphs.
const BAR_WIDTH: usize = 20;

/// PlotPicks - Movie Recommendations from Plot Similarity
#[derive(Parser)]
#[command(name = "plot-picks")]
#[command(about = "Get movie recommendations based on your favorite movie", long_about = None)]
struct Cli {
    /// Path to the movie catalog CSV
    #[arg(long, default_value = "data/wiki_movie_plots_deduped.csv")]
    catalog: PathBuf,

    /// Path to the precomputed similarity model (JSON)
    #[arg(long, default_value = "data/movie_top_k.json")]
    model: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to the given title
    Recommend {
        /// Exact title of a movie you like
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "10")]
        top_k: usize,
    },

    /// Show catalog details for a movie
    Info {
        /// Exact movie title to display
        #[arg(long)]
        title: String,
    },

    /// Search for movies by title
    Search {
        /// Movie title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load both artifacts in parallel (this may take a moment)
    println!(
        "Loading catalog from {} and model from {}...",
        cli.catalog.display(),
        cli.model.display()
    );
    let start = Instant::now();
    let (catalog, table) = rayon::join(
        || Catalog::load_csv(&cli.catalog),
        || NeighborTable::from_json_file(&cli.model),
    );
    let catalog = Arc::new(catalog.context("Failed to load movie catalog")?);
    let table = table.context("Failed to load similarity model")?;

    let recommender = Recommender::new(Arc::clone(&catalog), table)
        .context("Catalog and similarity model do not match")?;
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend { title, top_k } => handle_recommend(&recommender, &title, top_k),
        Commands::Info { title } => handle_info(&catalog, &title),
        Commands::Search { title } => handle_search(&catalog, &title),
    }
}

/// Handle the 'recommend' command
fn handle_recommend(recommender: &Recommender, title: &str, top_k: usize) -> Result<()> {
    // Membership is the caller's contract: check before invoking the core
    if recommender.catalog().find_title(title).is_none() {
        println!(
            "{}",
            "Movie not found. Please select a valid movie from the list.".red()
        );
        std::process::exit(1);
    }

    let recommendations = recommender
        .recommend(title, top_k)
        .context("Failed to compute recommendations")?;

    print_recommendations(title, &recommendations);
    Ok(())
}

/// Handle the 'info' command
fn handle_info(catalog: &Catalog, title: &str) -> Result<()> {
    let record = catalog
        .find_title(title)
        .and_then(|index| catalog.get(index))
        .ok_or_else(|| anyhow!("Movie {:?} not found in catalog", title))?;

    println!(
        "{}",
        format!("{} ({})", record.title, record.release_year)
            .bold()
            .blue()
    );
    println!("{}Origin/Ethnicity: {}", "• ".green(), record.origin);
    println!("{}Director: {}", "• ".green(), record.director);
    println!(
        "{}Cast: {}",
        "• ".green(),
        record.cast.as_deref().unwrap_or("N/A")
    );
    println!("{}Genre: {}", "• ".green(), record.genre);
    println!("{}Wiki Page: {}", "• ".green(), record.wiki_page);
    println!("{}Plot: {}", "• ".cyan(), record.plot);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, title: &str) -> Result<()> {
    let needle = title.to_lowercase();

    // (match class, index): exact matches first, then catalog order
    let mut matches: Vec<(usize, usize)> = Vec::new();
    for (index, record) in catalog.iter().enumerate() {
        let haystack = record.title.to_lowercase();
        if haystack == needle {
            matches.push((0, index));
        } else if haystack.contains(&needle) {
            matches.push((1, index));
        }
    }
    matches.sort_unstable();

    println!(
        "{}",
        format!("Search results for '{}':", title).bold().blue()
    );
    for &(_, index) in matches.iter().take(20) {
        if let Some(record) = catalog.get(index) {
            println!(
                "{:>6}: {} ({}) [{}]",
                index, record.title, record.release_year, record.genre
            );
        }
    }
    if matches.is_empty() {
        println!("No titles matched.");
    }
    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(source_title: &str, recommendations: &[Recommendation]) {
    println!(
        "{}",
        format!("Movies similar to {}:", source_title).bold().blue()
    );

    if recommendations.is_empty() {
        println!("No neighbors recorded for this movie.");
        return;
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        let percent = rec.score * 100.0;
        println!(
            "{}. {:<50} {} {:>3.0}%",
            format!("{:>2}", rank + 1).green(),
            rec.title,
            render_bar(percent, BAR_WIDTH),
            percent
        );
    }
}

/// Fixed-domain `[0, 100]` similarity bar.
///
/// Display clips to the domain; the printed numeric value and the scores
/// returned by the recommender are never clamped.
fn render_bar(percent: f32, width: usize) -> String {
    let clipped = percent.clamp(0.0, 100.0);
    let filled = ((clipped / 100.0) * width as f32).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}
