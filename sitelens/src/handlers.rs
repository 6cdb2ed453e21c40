use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sitelens_core::build::{BuildOptions, GraphBuilder};
use sitelens_core::export;
use sitelens_core::model::{Entry, SiteGraph};
use sitelens_explore::{
    DisplayMode, ExploreRequest, GraphIndex, ScaleOptions, explore, root_candidates,
};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

// Helper functions for the build handler

/// Load entries from a JSON file: an array of `{"url", "images"}`
/// objects (`images` optional).
pub fn load_entries_from_file(path: &PathBuf) -> Result<Vec<Entry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read entries file {}", path.display()))?;

    let entries: Vec<Entry> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse entries file {}", path.display()))?;

    if entries.is_empty() {
        bail!("no entries found in {}", path.display());
    }

    Ok(entries)
}

/// Colored per-kind node/edge counts for a built graph.
pub fn summarize_graph(graph: &SiteGraph) -> String {
    let mut summary = String::new();
    summary.push_str(&format!(
        "  {} {} nodes\n",
        "•".blue(),
        graph.nodes.len().to_string().bright_white()
    ));
    for (kind, count) in graph.node_kind_counts() {
        summary.push_str(&format!("      {:<14} {}\n", kind, count));
    }
    summary.push_str(&format!(
        "  {} {} edges\n",
        "•".blue(),
        graph.edges.len().to_string().bright_white()
    ));
    for (kind, count) in graph.edge_kind_counts() {
        summary.push_str(&format!("      {:<14} {}\n", kind, count));
    }
    summary
}

pub fn handle_build(args: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let input = args.get_one::<PathBuf>("input").unwrap();
    let output = args.get_one::<PathBuf>("output").unwrap();
    let max_images = *args.get_one::<usize>("max-images").unwrap();
    let max_related = *args.get_one::<usize>("max-related").unwrap();
    let cross_link = !args.get_flag("no-cross-links");

    let entries = match load_entries_from_file(input) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("✗ {:#}", e);
            std::process::exit(1);
        }
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!("Building graph from {} entries...", entries.len()));

    let graph = GraphBuilder::with_options(BuildOptions {
        max_images_per_page: max_images,
        max_related_per_page: max_related,
        cross_link,
    })
    .build(&entries);

    if let Err(e) = export::validate(&graph) {
        spinner.finish_and_clear();
        eprintln!("✗ built graph failed validation: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = export::write_document(&graph, output) {
        spinner.finish_and_clear();
        eprintln!("✗ failed to write graph document: {}", e);
        std::process::exit(1);
    }

    spinner.finish_and_clear();

    println!("\n{} Graph built\n", "✓".green().bold());
    print!("{}", summarize_graph(&graph));
    println!(
        "\n{} Written to {}",
        "✓".green().bold(),
        output.display().to_string().bright_white()
    );
}

pub fn handle_roots(args: &ArgMatches) {
    let path = args.get_one::<PathBuf>("graph").unwrap();

    let graph = match export::read_document(path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("✗ failed to load graph document: {}", e);
            std::process::exit(1);
        }
    };

    let candidates = root_candidates(&graph);
    if candidates.is_empty() {
        println!("No root candidates found.");
        return;
    }

    println!("\n{} root candidates:\n", candidates.len());
    for candidate in candidates {
        println!(
            "  {} {}",
            candidate.id.bright_white(),
            candidate.label.cyan()
        );
    }
    println!();
}

pub fn handle_explore(args: &ArgMatches) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let path = args.get_one::<PathBuf>("graph").unwrap();
    let root_id = args.get_one::<String>("root").unwrap();
    let depth = *args.get_one::<usize>("depth").unwrap();
    let mode_str = args.get_one::<String>("mode").unwrap();
    let output = args.get_one::<PathBuf>("output");

    let mode = match DisplayMode::from_str(mode_str) {
        Some(mode) => mode,
        None => {
            eprintln!("✗ unknown display mode '{}'", mode_str);
            std::process::exit(1);
        }
    };

    let graph = match export::read_document(path) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("✗ failed to load graph document: {}", e);
            std::process::exit(1);
        }
    };

    let index = match GraphIndex::new(&graph) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("✗ failed to index graph: {}", e);
            std::process::exit(1);
        }
    };

    let request = ExploreRequest {
        root_id: root_id.clone(),
        max_depth: depth,
        mode,
    };

    let view = match explore(&index, &request, &ScaleOptions::default()) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let in_view = view.nodes.values().filter(|n| n.depth.is_some()).count();
    eprintln!(
        "{} {} of {} nodes within {} hops of {}",
        "✓".green().bold(),
        in_view,
        graph.nodes.len(),
        view.max_depth,
        root_id.bright_white()
    );

    let json = match serde_json::to_string_pretty(&view) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("✗ failed to serialize view: {}", e);
            std::process::exit(1);
        }
    };

    match output {
        Some(out_path) => {
            if let Err(e) = fs::write(out_path, json) {
                eprintln!("✗ failed to write view document: {}", e);
                std::process::exit(1);
            }
            eprintln!(
                "{} View written to {}",
                "✓".green().bold(),
                out_path.display().to_string().bright_white()
            );
        }
        None => println!("{}", json),
    }
}
