//! Command-line front end for tintsmith.
//!
//! ```bash
//! # CSS custom properties for a brand color, dark mode
//! tintsmith generate '#6366F1' --mode dark
//!
//! # Tailwind config from a preset, following the OS light/dark setting
//! tintsmith generate emerald --format tailwind
//!
//! # Colored token table
//! tintsmith preview sky --mode light
//! ```

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use tracing::Level;

use tintsmith::{
    export, generate_tokens, preview, theme_name, ExportFormat, Mode, Preset, EXPORT_FORMATS,
    PRESETS,
};

#[derive(Parser)]
#[command(name = "tintsmith")]
#[command(version)]
#[command(about = "Derive UI color tokens from a single brand color")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log derivation and export steps to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Light,
    Dark,
    /// Follow the operating system setting
    Auto,
}

impl ModeArg {
    fn resolve(self) -> Mode {
        match self {
            ModeArg::Light => Mode::Light,
            ModeArg::Dark => Mode::Dark,
            ModeArg::Auto => Mode::detect(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Derive tokens and print them in an export format
    Generate {
        /// Base color as #RRGGBB, or a preset name
        color: String,

        #[arg(long, short, value_enum, default_value = "auto")]
        mode: ModeArg,

        /// Export format id (see `tintsmith formats`)
        #[arg(long, short, default_value = ExportFormat::default().id())]
        format: String,

        /// Display name embedded in the output (defaults to a generated name)
        #[arg(long, short)]
        name: Option<String>,
    },

    /// Print the derived tokens as a grouped table
    Preview {
        /// Base color as #RRGGBB, or a preset name
        color: String,

        #[arg(long, short, value_enum, default_value = "auto")]
        mode: ModeArg,

        /// Disable colored swatches
        #[arg(long)]
        no_color: bool,
    },

    /// List export formats
    Formats,

    /// List preset base colors
    Presets,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate {
            color,
            mode,
            format,
            name,
        } => cmd_generate(&color, mode.resolve(), &format, name),
        Commands::Preview {
            color,
            mode,
            no_color,
        } => cmd_preview(&color, mode.resolve(), !no_color),
        Commands::Formats => cmd_formats(),
        Commands::Presets => cmd_presets(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {:#}", style("error").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_generate(color: &str, mode: Mode, format: &str, name: Option<String>) -> Result<()> {
    let color = Preset::resolve(color);
    let tokens = generate_tokens(color, mode)?;
    let name = name.unwrap_or_else(|| theme_name(color, mode));
    let text = export::serialize(format, tokens.iter(), &name)
        .with_context(|| format!("exporting '{}' as {}", name, format))?;
    println!("{}", text);
    Ok(())
}

fn cmd_preview(color: &str, mode: Mode, use_color: bool) -> Result<()> {
    let color = Preset::resolve(color);
    let tokens = generate_tokens(color, mode)?;
    println!("{}\n", style(theme_name(color, mode)).bold().force_styling(use_color));
    print!("{}", preview::render_token_table(&tokens, use_color));
    Ok(())
}

fn cmd_formats() -> Result<()> {
    for descriptor in &EXPORT_FORMATS {
        println!(
            "{:<14} {:<16} {:<5} {}",
            descriptor.id, descriptor.label, descriptor.language, descriptor.description
        );
    }
    Ok(())
}

fn cmd_presets() -> Result<()> {
    for preset in PRESETS {
        println!("{:<8} {}", preset.name, preset.color);
    }
    Ok(())
}
