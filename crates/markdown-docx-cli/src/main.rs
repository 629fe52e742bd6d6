use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_docx_config::{CodeConfig, Config};
use markdown_docx_engine::{
    BatchJob, BatchReport, CodeStyle, FileOutcome, FileReport, Font, Indent, RenderOptions,
    run_batch,
};
use std::path::{Path, PathBuf};

/// Batch-convert Markdown manuals into Word documents.
#[derive(Debug, Parser)]
#[command(name = "markdown-docx", version, about)]
struct Cli {
    /// Files to convert, relative to the source directory (overrides the configured list)
    files: Vec<String>,

    /// Config file to use instead of ~/.config/markdown-docx/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory the Markdown files are read from
    #[arg(long, value_name = "DIR")]
    source_dir: Option<PathBuf>,

    /// Directory the .docx files are written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Don't open the output directory when done
    #[arg(long)]
    no_open: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    save_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let config = apply_overrides(&cli, load_config(&cli)?);
    if cli.save_config {
        return save_config(&cli, &config);
    }

    let job = BatchJob {
        files: config
            .resolve_files()
            .context("Failed to resolve the file list")?,
        source_dir: config.source_dir.clone(),
        output_dir: config.output_dir.clone(),
    };
    let options = render_options(&config.code);

    println!("Converting Markdown files to DOCX...");
    println!("Output directory: {}", job.output_dir.display());
    println!("\nConverting {} files...", job.files.len());

    let report = run_batch(&job, &options, |file| println!("  {}", status_line(file)))
        .with_context(|| {
            format!(
                "Failed to prepare output directory {}",
                job.output_dir.display()
            )
        })?;

    print_summary(&report);

    if report.success_count() > 0 && config.open_output_dir {
        open_output_dir(&report.output_dir);
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => match Config::load_from_path(path)? {
            Some(config) => {
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            None if cli.save_config => Ok(Config::default()),
            None => bail!("Config file not found: {}", path.display()),
        },
        None => {
            let config = Config::load()?;
            if config.is_some() {
                log::info!("Loaded config from {}", Config::config_path().display());
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn save_config(cli: &Cli, config: &Config) -> Result<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let saved = match &cli.config {
        Some(explicit) => config.save_to_path(explicit),
        None => config.save(),
    };
    saved.with_context(|| format!("Failed to write config to {}", path.display()))?;

    println!("Saved config to {}", path.display());
    Ok(())
}

/// Command-line flags win over the config file.
fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if let Some(dir) = &cli.source_dir {
        config.source_dir = dir.clone();
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir = dir.clone();
    }
    if !cli.files.is_empty() {
        config.files = cli.files.clone();
    }
    if cli.no_open {
        config.open_output_dir = false;
    }
    config
}

fn render_options(code: &CodeConfig) -> RenderOptions {
    RenderOptions {
        code: CodeStyle {
            font: Font {
                name: code.font.clone(),
                size_pt: code.size_pt,
            },
            indent: Indent(code.indent_inches),
        },
    }
}

fn status_line(file: &FileReport) -> String {
    let output_name = file
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match &file.outcome {
        FileOutcome::Converted(converted) => format!(
            "✅ Converted: {} ({})",
            output_name,
            format_kb(converted.bytes.unwrap_or_default())
        ),
        FileOutcome::Missing => format!("⚠️  File not found: {}", file.input.display()),
        FileOutcome::Failed(e) => format!("❌ Error converting {}: {e}", file.name),
        FileOutcome::NotCreated => format!("❌ Error: {output_name} was not created"),
    }
}

fn format_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

fn print_summary(report: &BatchReport) {
    println!("\nConversion summary:");
    println!("  ✅ Succeeded: {}", report.success_count());
    println!("  ❌ Errors: {}", report.error_count());
    println!("  📁 Files saved in: {}", report.output_dir.display());

    if report.success_count() > 0 {
        println!("\n🎉 Conversion complete! The .docx files are ready for Microsoft Word");
    } else {
        println!("\n⚠️  No files could be converted");
    }
}

fn open_output_dir(dir: &Path) {
    match open::that(dir) {
        Ok(()) => println!("📂 Opened output directory"),
        Err(e) => {
            log::warn!("Could not open {}: {e}", dir.display());
            println!("📂 Output directory: {}", dir.display());
        }
    }
}
