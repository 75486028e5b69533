//! Static preview of the paper map layout.
//!
//! Reads widget options as JSON (from the file given as the first argument,
//! or stdin when absent or `-`) and prints a standalone HTML page with the
//! same structure the web front-end generates, transforms inlined.

use std::io::Read;

use anyhow::Context;
use map_core::{plan, PaperConfig, PaperOptions};

mod html;

fn read_options(path: Option<&str>) -> anyhow::Result<Option<PaperOptions>> {
    let text = match path {
        Some(p) if p != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("read options from {p}"))?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read options from stdin")?;
            buf
        }
    };
    if text.trim().is_empty() {
        return Ok(None);
    }
    let options = serde_json::from_str(&text).context("invalid paper map options")?;
    Ok(Some(options))
}

fn run() -> anyhow::Result<()> {
    let path = std::env::args().nth(1);
    let options = read_options(path.as_deref())?;
    let mut config = PaperConfig::from_options(options.as_ref())?;
    let geometry = config.apply_geometry();
    log::info!(
        "[preview] panes={} height={:.2}px offset={:.4}px",
        config.pieces.amount,
        geometry.height,
        geometry.offset
    );
    let plan = plan(&config);
    log::info!(
        "[preview] compensation={:.4}px container='{}'",
        plan.compensation,
        plan.container
    );
    print!("{}", html::render_html(&config, &plan));
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("preview failed: {:#}", e);
        std::process::exit(1);
    }
}
