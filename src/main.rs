use anyhow::{Context, Result};
use clap::Parser;

use masked_input::cli::{render_caret, CliArgs};
use masked_input::config::InputConfig;
use masked_input::host::{FormattedInput, MemoryHost, TextHost};

fn main() -> Result<()> {
    masked_input::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => InputConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => InputConfig::load(),
    };

    let startup = args.into_config(&config).map_err(anyhow::Error::msg)?;
    let field = startup
        .field
        .build()
        .with_context(|| format!("invalid field '{}'", startup.field.label))?;

    tracing::info!(
        label = startup.field.label.as_str(),
        kind = %field.kind(),
        keys = startup.keys.len(),
        "driving field"
    );

    let json = startup.json;
    let notify = |message: &str| eprintln!("! {}", message);
    let emit = move |canonical: &str, numeric: f64, formatted: &str, valid: bool, error: &str| {
        if json {
            let line = serde_json::json!({
                "canonical": canonical,
                "numeric": numeric,
                "formatted": formatted,
                "valid": valid,
                "error_message": error,
            });
            println!("{}", line);
        } else {
            println!(
                "{:<20} canonical={:<12} numeric={:<14} valid={:<5} {}",
                format!("{:?}", formatted),
                canonical,
                numeric,
                valid,
                error
            );
        }
    };

    let mut input = FormattedInput::from_field(field, MemoryHost::new(), notify, emit);
    for key in startup.keys {
        input.press(key);
    }

    if !json {
        let host = input.host();
        println!("field: {}", render_caret(&host.text(), host.cursor()));
    }

    Ok(())
}
