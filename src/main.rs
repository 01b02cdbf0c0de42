//! qrgen CLI
//!
//! Usage:
//!   qrgen --data <TEXT> [--out <PATH>] [--format png|svg] [OPTIONS]
//!
//! Without --data (or with --gui) the tool runs interactively, prompting for
//! the payload on the terminal or reading it from piped stdin.
//!
//! Exit codes: 0 on success, 2 when the required rendering backend is
//! missing, 1 for any other generation or save failure.

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use qrgen::{
    ColorScheme, GenerateError, GenerateOptions, GenerationConfig, RenderError, RenderStrategy,
    generate_to_file,
};

#[derive(Parser)]
#[command(name = "qrgen")]
#[command(version)]
#[command(about = "Generate QR codes as PNG or SVG")]
struct Cli {
    /// Text or URL to encode (interactive mode if omitted)
    #[arg(long)]
    data: Option<String>,

    /// Output path; the extension is reconciled with the chosen format
    #[arg(long)]
    out: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Error-correction level
    #[arg(long, default_value = "M")]
    error: String,

    /// Pixels per module
    #[arg(long = "box", default_value_t = 10)]
    box_size: i64,

    /// Quiet-zone border width, in modules
    #[arg(long, default_value_t = 4)]
    border: i64,

    /// SVG drawing method
    #[arg(long = "svg-method", value_enum, default_value_t = SvgMethod::Path)]
    svg_method: SvgMethod,

    /// Color scheme file (TOML with `dark` and `light` keys)
    #[arg(long)]
    style: Option<PathBuf>,

    /// Force interactive mode even when --data is given
    #[arg(long)]
    gui: bool,

    /// Suppress console output
    #[arg(long)]
    quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Png,
    Svg,
}

#[derive(Clone, Copy, ValueEnum)]
enum SvgMethod {
    Path,
    Basic,
    Fragment,
}

fn main() {
    let cli = Cli::parse();

    let payload = match &cli.data {
        Some(data) if !cli.gui => data.clone(),
        _ => read_payload_interactive(),
    };

    let colors = match &cli.style {
        Some(path) => match ColorScheme::from_file(path) {
            Ok(scheme) => scheme,
            Err(e) => {
                eprintln!("Error loading color scheme '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => ColorScheme::default(),
    };

    let config = match GenerationConfig::validate(&cli.error, cli.box_size, cli.border) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let strategy = match cli.format {
        Format::Png => RenderStrategy::Raster,
        Format::Svg => match cli.svg_method {
            SvgMethod::Path => RenderStrategy::VectorPath,
            SvgMethod::Basic => RenderStrategy::VectorBasic,
            SvgMethod::Fragment => RenderStrategy::VectorFragment,
        },
    };

    let out = cli.out.clone().unwrap_or_else(|| {
        let ext = match cli.format {
            Format::Png => "png",
            Format::Svg => "svg",
        };
        PathBuf::from(format!("qr_output.{}", ext))
    });

    let options = GenerateOptions::new()
        .with_config(config)
        .with_strategy(strategy)
        .with_colors(colors);

    match generate_to_file(&payload, &options, &out) {
        Ok(saved) => {
            if !cli.quiet {
                println!("Saved: {}", saved.display());
            }
        }
        Err(GenerateError::Render(RenderError::BackendUnavailable(strategy))) => {
            eprintln!("Error: no rendering backend available for {} output", strategy);
            process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Prompt for a payload on the terminal, or drain piped stdin
fn read_payload_interactive() -> String {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        eprint!("Data/URL to encode: ");
        let _ = io::stderr().flush();
        let mut line = String::new();
        if let Err(e) = stdin.read_line(&mut line) {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
        line.trim_end_matches(['\r', '\n']).to_string()
    } else {
        let mut buffer = String::new();
        if let Err(e) = stdin.lock().read_to_string(&mut buffer) {
            eprintln!("Error reading from stdin: {}", e);
            process::exit(1);
        }
        buffer.trim_end().to_string()
    }
}
