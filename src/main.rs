use anyhow::Context;
use basesum::config::{AppConfig, OutputFormat};
use basesum::summarize::{build_summarizer, Summary};
use basesum::{logging, SummarizeError};
use std::io::Read;

fn read_input(cfg: &AppConfig) -> Result<String, SummarizeError> {
    match cfg.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .map_err(|e| SummarizeError::Input(format!("could not read {}: {e}", path.display()))),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| SummarizeError::Input(format!("could not read stdin: {e}")))?;
            Ok(buf)
        }
    }
}

fn render(summary: &Summary, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => summary.texts().join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "sentences": summary.sentences,
            "requested": summary.requested,
            "corpus_size": summary.corpus_size,
            "average_tokens": summary.average_tokens(),
        }))?,
    })
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cfg = AppConfig::from_env_and_args();
    if let Err(e) = cfg.validate() {
        tracing::error!(config_error=%e, "invalid config");
        anyhow::bail!(e);
    }

    let opts = cfg.summarizer_options()?;
    let summarizer = build_summarizer(&opts).context("building summarizer")?;
    let text = read_input(&cfg)?;

    tracing::info!(
        backend=?opts.backend,
        num_sentences=cfg.num_sentences,
        input_bytes=text.len(),
        "summarizing"
    );
    let summary = summarizer
        .summarize(&text, cfg.num_sentences)
        .context("summarization failed")?;

    let out = render(&summary, cfg.format)?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}
