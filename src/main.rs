use clap::Parser;
use std::path::PathBuf;
use wallpaper_manifest::config::{self, ConfigError, DecodePolicy, ManifestConfig};
use wallpaper_manifest::imaging::RustBackend;
use wallpaper_manifest::{output, pipeline};

#[derive(Parser)]
#[command(name = "wallpaper-manifest")]
#[command(about = "Write a JSON manifest of the images in a directory")]
#[command(long_about = "\
Write a JSON manifest of the images in a directory

Lists every entry directly under the source directory (dotfiles skipped) and
writes one record per entry to the output file:

  [
    {
      \"filename\": \"aurora.jpg\",
      \"size\": \"3.41\",
      \"width\": 3840,
      \"height\": 2160
    }
  ]

Size is in megabytes with two decimals. Width and height are read from the
header of .jpg, .png and .gif files; everything else gets 0.

With no arguments, scans ./static/wallpapers and writes ./static/files.json.
Run 'wallpaper-manifest --print-config' for a documented config file.")]
#[command(version)]
struct Cli {
    /// Directory to scan [default: ./static/wallpapers]
    #[arg(long)]
    source: Option<PathBuf>,

    /// Manifest file to write [default: ./static/files.json]
    #[arg(long)]
    output: Option<PathBuf>,

    /// TOML config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Record undecodable images as 0x0 instead of aborting
    #[arg(long)]
    lenient: bool,

    /// List every record before the confirmation line
    #[arg(long, short)]
    verbose: bool,

    /// Print a stock config file with all options documented
    #[arg(long)]
    print_config: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let manifest_config = resolve_config(cli)?;
    init_thread_pool(&manifest_config.processing);

    let records = pipeline::run(&manifest_config, &RustBackend::new())?;

    if cli.verbose {
        output::print_records(&records);
    }
    output::print_success(&manifest_config.output_path, &records);

    Ok(())
}

/// Layer stock defaults, the optional config file, then CLI flags.
fn resolve_config(cli: &Cli) -> Result<ManifestConfig, ConfigError> {
    let mut resolved = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => ManifestConfig::default(),
    };
    if let Some(source) = &cli.source {
        resolved.source_dir = source.clone();
    }
    if let Some(output) = &cli.output {
        resolved.output_path = output.clone();
    }
    if cli.lenient {
        resolved.on_decode_error = DecodePolicy::Zero;
    }
    resolved.validate()?;
    Ok(resolved)
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores — user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
