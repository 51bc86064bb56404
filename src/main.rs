// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::*;
use listing_lens::utils::logging::{
    format_error, format_finding, format_info, format_score, format_step, format_success,
    format_warning,
};
use listing_lens::{
    BatchProcessor, Config, ContentNormalizer, JsonExporter, LensError, ListingClient,
    ListingRecord, NormalizedListing, OperationTimer, Platform, PlatformSchema, ProgressTracker,
    TracingObserver, Validator, pipeline::describe_limit, pipeline::requirements,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "listing_lens")]
#[command(version)]
#[command(
    about = "Normalize and validate generated marketplace listings",
    long_about = None
)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize one record file and print the result as JSON
    Normalize {
        file: PathBuf,

        /// Target platform; defaults to the record's own `platform` field
        #[arg(short = 'P', long)]
        platform: Option<Platform>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Run the optimization checks and limit checks for one record file
    Validate {
        file: PathBuf,

        #[arg(short = 'P', long)]
        platform: Option<Platform>,
    },

    /// Normalize every record under a directory and export the results
    Batch {
        dir: PathBuf,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,

        /// Platform for records that do not declare one
        #[arg(short = 'P', long, default_value = "amazon")]
        platform: Platform,
    },

    /// Fetch a generated listing from the backend and summarize it
    Fetch {
        id: String,

        #[arg(short = 'P', long)]
        platform: Option<Platform>,

        /// Keep polling image generation status until it settles
        #[arg(long)]
        watch_images: bool,
    },

    /// Show content limits and requirements for a platform
    Limits { platform: Platform },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    listing_lens::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    match cli.command {
        Commands::Normalize {
            file,
            platform,
            pretty,
        } => {
            cmd_normalize(&config, &file, platform, pretty)?;
        }
        Commands::Validate { file, platform } => {
            cmd_validate(&file, platform)?;
        }
        Commands::Batch {
            dir,
            output,
            pretty,
            platform,
        } => {
            cmd_batch(&config, &dir, output, pretty, platform, cli.color).await?;
        }
        Commands::Fetch {
            id,
            platform,
            watch_images,
        } => {
            cmd_fetch(&config, &id, platform, watch_images).await?;
        }
        Commands::Limits { platform } => {
            cmd_limits(platform);
        }
    }

    Ok(())
}

fn load_record(file: &Path) -> Result<ListingRecord> {
    Validator::validate_file_path(file)?;
    Validator::validate_json_extension(file)?;
    ListingRecord::load(file).with_context(|| format!("Failed to read record {}", file.display()))
}

fn resolve_platform(record: &ListingRecord, requested: Option<Platform>) -> Platform {
    requested.or_else(|| record.platform()).unwrap_or_else(|| {
        info!("Record declares no platform, using Amazon");
        Platform::Amazon
    })
}

fn cmd_normalize(
    config: &Config,
    file: &Path,
    platform: Option<Platform>,
    pretty: bool,
) -> Result<()> {
    let record = load_record(file)?;
    let platform = resolve_platform(&record, platform);
    let listing = ContentNormalizer::new().normalize(&record, platform);

    let output = if pretty || config.output.pretty {
        serde_json::to_string_pretty(&listing)?
    } else {
        serde_json::to_string(&listing)?
    };
    println!("{}", output);

    Ok(())
}

fn cmd_validate(file: &Path, platform: Option<Platform>) -> Result<()> {
    let record = load_record(file)?;
    let platform = resolve_platform(&record, platform);
    let listing = ContentNormalizer::new().normalize(&record, platform);

    println!(
        "\n{} listing optimization score: {}\n",
        platform.display_name().bold(),
        format_score(listing.score)
    );

    for result in &listing.validation {
        println!("  {}", format_finding(result, false));
    }

    if listing.limit_findings.is_empty() {
        println!("\n{}", format_success("All fields within platform limits"));
    } else {
        println!("\nPlatform limits:");
        for finding in &listing.limit_findings {
            println!("  {}", format_finding(finding, true));
        }
    }
    println!();

    Ok(())
}

async fn cmd_batch(
    config: &Config,
    dir: &Path,
    output: Option<PathBuf>,
    pretty: bool,
    fallback: Platform,
    color: bool,
) -> Result<()> {
    let timer = OperationTimer::new("batch normalization");

    println!("{}", format_step(1, 3, "Scanning for record files"));
    let processor = BatchProcessor::new(config.batch.clone());
    let files = processor.scan(dir).context("Failed to scan record directory")?;

    if files.is_empty() {
        println!("{}", format_warning("No record files found"));
        return Ok(());
    }

    println!(
        "{}",
        format_step(2, 3, &format!("Normalizing {} records", files.len()))
    );
    let progress = ProgressTracker::with_color(files.len(), color);
    let outcome = processor.run(files, fallback, &progress).await;
    progress.finish();

    for (path, reason) in &outcome.failures {
        println!(
            "  {}",
            format_error(&format!("{}: {}", path.display(), reason))
        );
    }

    println!("{}", format_step(3, 3, "Exporting results"));
    let output_dir = output.unwrap_or_else(|| config.output.export_dir.clone());
    let exporter = JsonExporter::new(&output_dir, pretty || config.output.pretty)?;
    let manifest = exporter
        .export_all(dir, &outcome.items)
        .context("Failed to export normalized listings")?;

    let metrics = timer.finish_with_count(outcome.items.len());
    let stats = &outcome.stats;

    println!(
        "\n{}",
        format_success(&format!(
            "Exported {} listings to {}",
            manifest.total_documents,
            output_dir.display()
        ))
    );
    println!(
        "{}",
        format_info(&format!(
            "Average score {:.1}%, {} issues, {} failed, {:.1}% success ({:.1} records/sec)",
            manifest.average_score,
            stats.issues_found,
            stats.records_failed,
            stats.success_rate(),
            metrics.throughput
        ))
    );

    Ok(())
}

async fn cmd_fetch(
    config: &Config,
    id: &str,
    platform: Option<Platform>,
    watch_images: bool,
) -> Result<()> {
    let client = ListingClient::new(config.client.clone(), Arc::new(TracingObserver))?;

    let record = match client.fetch_listing(id).await {
        Ok(record) => record,
        Err(e) => {
            warn!("Failed to fetch listing {}: {}", id, e);
            println!(
                "{}",
                format_warning("Backend unavailable, showing placeholder listing")
            );
            ListingRecord::placeholder()
        }
    };

    let platform = resolve_platform(&record, platform);
    let listing = ContentNormalizer::new().normalize(&record, platform);
    print_listing(&listing, &config.output.placeholder);

    if watch_images {
        watch_image_generation(&client, id).await?;
    }

    Ok(())
}

async fn watch_image_generation(client: &ListingClient, id: &str) -> Result<()> {
    let (cancel_tx, cancel_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = cancel_tx.send(true);
        }
    });

    println!("\n{}", "Image generation".bold());
    let result = client
        .poll_images(id, cancel_rx, |report| {
            let summary = &report.summary;
            println!(
                "  {} {}/{} completed, {} in progress, {} failed",
                format!("[{:>3}%]", report.progress_percent()).cyan(),
                summary.completed,
                summary.total,
                summary.in_progress,
                summary.failed
            );
        })
        .await;

    match result {
        Ok(report) => {
            for image in &report.images {
                let line = format!(
                    "{}: {}",
                    image.image_type,
                    image
                        .image_url
                        .as_deref()
                        .or(image.error_message.as_deref())
                        .unwrap_or("-")
                );
                let formatted = if image.status.is_terminal() && image.image_url.is_some() {
                    format_success(&line)
                } else if image.error_message.is_some() {
                    format_error(&line)
                } else {
                    format_warning(&line)
                };
                println!("  {}", formatted);
            }
            Ok(())
        }
        Err(LensError::Cancelled) => {
            println!("{}", format_warning("Stopped watching image generation"));
            Ok(())
        }
        Err(e) => Err(e).context("Failed to poll image generation status"),
    }
}

fn print_listing(listing: &NormalizedListing, placeholder: &str) {
    println!(
        "\n{} ({})  score {}",
        Validator::display_or(&listing.title, placeholder).bold(),
        listing.platform.display_name(),
        format_score(listing.score)
    );

    println!("\n{}", "Bullet points".bold());
    if listing.bullets.is_empty() {
        println!("  {}", placeholder.dimmed());
    }
    for bullet in &listing.bullets {
        match &bullet.label {
            Some(label) => println!("  • {} {}", label.bold(), bullet.body),
            None => println!("  • {}", bullet.body),
        }
    }

    println!("\n{}", "Description".bold());
    println!(
        "  {}",
        Validator::truncate_text(Validator::display_or(&listing.description, placeholder), 300)
    );

    println!("\n{}", "Keywords".bold());
    println!(
        "  short-tail: {}",
        join_or(&listing.keywords.short_tail, placeholder)
    );
    println!(
        "  long-tail:  {}",
        join_or(&listing.keywords.long_tail, placeholder)
    );
    if !listing.tags.is_empty() {
        println!("  tags:       {}", listing.tags.join(" "));
    }

    for (name, section) in &listing.sections {
        println!("\n{}", name.replace('_', " ").bold());
        let text = section.display_text();
        println!(
            "  {}",
            Validator::truncate_text(Validator::display_or(&text, placeholder), 300)
        );
    }

    println!("\n{}", "Checks".bold());
    for result in listing.validation.iter().chain(&listing.limit_findings) {
        println!("  {}", format_finding(result, false));
    }
}

fn join_or(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.dimmed().to_string()
    } else {
        items.join(", ")
    }
}

fn cmd_limits(platform: Platform) {
    let schema = PlatformSchema::for_platform(platform);

    println!("\n{} content limits\n", platform.display_name().bold());
    for limit in schema.limits {
        println!("  {:<22} {}", limit.label, describe_limit(limit));
    }

    println!("\n{}\n", "Requirements".bold());
    for (field, requirement) in requirements(platform) {
        println!("  {:<22} {}", field, requirement);
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_platform_names() {
        let cli = Cli::try_parse_from(["listing_lens", "validate", "r.json", "-P", "tiktok_shop"])
            .unwrap();
        match cli.command {
            Commands::Validate { platform, .. } => assert_eq!(platform, Some(Platform::Tiktok)),
            _ => panic!("expected validate"),
        }

        assert!(Cli::try_parse_from(["listing_lens", "limits", "ebay"]).is_err());
    }
}
