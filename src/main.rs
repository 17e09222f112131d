use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use htmltag::{write_file_with, Node, RawValue, RenderConfig, Result};

#[derive(Parser)]
#[command(author, version, about = "Render a single HTML element", long_about = None)]
struct Args {
    /// Tag name
    name: String,

    /// Attribute as KEY=VALUE; VALUE "true"/"false" is treated as a boolean
    #[arg(short, long = "attr", value_name = "KEY=VALUE")]
    attrs: Vec<String>,

    /// Valueless attribute (e.g. disabled)
    #[arg(short, long = "flag", value_name = "KEY")]
    flags: Vec<String>,

    /// Text child, appended in order
    #[arg(short, long = "text", value_name = "TEXT")]
    texts: Vec<String>,

    /// Escape HTML special characters in text and attribute values
    #[arg(short, long)]
    escape: bool,

    /// Output file path
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let mut node = Node::try_new(args.name)?;
    for attr in &args.attrs {
        let (key, value) = split_attr(attr);
        node.set_attr(key, value);
    }
    for flag in &args.flags {
        node.set_attr(flag, true);
    }
    node.add(args.texts);
    debug!(tag = node.name(), attributes = node.attributes().len(), "built node");

    let config = if args.escape {
        RenderConfig::escaped()
    } else {
        RenderConfig::default()
    };

    if let Some(output_path) = args.output {
        info!("Writing {}", output_path.display());
        write_file_with(&output_path, &node, &config)?;
    } else {
        println!("{}", node.render_with(&config));
    }

    Ok(())
}

/// `KEY=VALUE` → text or boolean value, bare `KEY` → empty text
fn split_attr(raw: &str) -> (&str, RawValue) {
    match raw.split_once('=') {
        Some((key, "true")) => (key, RawValue::Bool(true)),
        Some((key, "false")) => (key, RawValue::Bool(false)),
        Some((key, value)) => (key, RawValue::from(value)),
        None => (raw, RawValue::from("")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_attr() {
        assert_eq!(split_attr("href=/go"), ("href", RawValue::from("/go")));
        assert_eq!(split_attr("disabled=true"), ("disabled", RawValue::Bool(true)));
        assert_eq!(split_attr("hidden=false"), ("hidden", RawValue::Bool(false)));
        assert_eq!(split_attr("q=a=b"), ("q", RawValue::from("a=b")));
        assert_eq!(split_attr("alt"), ("alt", RawValue::from("")));
    }
}
