//! snipshot command-line interface

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use snipshot::{create_code_image, CaptureConfig, Snippet, Viewport};

/// Render a code snippet into a styled PNG card and copy the markup to the
/// clipboard.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source file to render; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Language label; auto-detected when omitted
    #[arg(short, long)]
    language: Option<String>,

    /// Output image path
    #[arg(short, long, default_value = "code_snippet.png")]
    output: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Navigation timeout in milliseconds
    #[arg(long, default_value_t = 30000)]
    timeout_ms: u64,

    /// Skip copying the markup to the clipboard
    #[arg(long)]
    no_copy: bool,

    /// Print the outcome summary as JSON
    #[arg(long)]
    json: bool,
}

fn read_code(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read stdin")?;
            Ok(code)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let code = read_code(args.input.as_ref())?;
    let snippet = match args.language {
        Some(language) => Snippet::with_language(code, language),
        None => Snippet::new(code),
    };

    let config = CaptureConfig {
        viewport: Viewport {
            width: args.width,
            height: args.height,
        },
        timeout_ms: args.timeout_ms,
        copy_to_clipboard: !args.no_copy,
        ..Default::default()
    };

    let outcome = create_code_image(&snippet, &args.output, &config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!(
            "Rendered {} snippet to {}",
            outcome.language,
            outcome.image_path.display()
        );
        if outcome.copied_to_clipboard {
            println!("The markup has been copied to your clipboard.");
        }
    }

    Ok(())
}
