use anyhow::{Context, Result};
use chapterize::config::IndexConfig;
use chapterize::parser::ChapterParser;
use chapterize::{timecode, xml};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "chapterize")]
#[command(version, about = "Converts track listing text into chapter XML for mkvpropedit")]
#[command(
    long_about = "Converts lines of text containing chapter information into XML readable by mkvpropedit."
)]
struct Cli {
    /// Text file where each line has a chapter name and start time
    inputfile: PathBuf,

    /// XML file to be written to
    outputfile: PathBuf,

    /// Timestamp of the end of the final chapter, usually the length of the track
    #[arg(short = 'e', long = "endtime", value_name = "TIME")]
    endtime: String,

    /// Use a premade indexing configuration (overrides -i)
    #[arg(short = 'c', long = "config", value_name = "PRESET")]
    config: Option<String>,

    /// Indices of the elements on each line (integers, negatives count from
    /// the end; titleend may be 'none' for "to end of line")
    #[arg(
        short = 'i',
        long = "indices",
        num_args = 3,
        value_names = ["TIMESTAMP", "TITLESTART", "TITLEEND"],
        allow_negative_numbers = true
    )]
    indices: Option<Vec<String>>,

    /// Enable debug printing
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

/// A preset takes precedence over explicit indices; one of the two is
/// required (automatic configuration generation is not supported).
fn resolve_config(cli: &Cli) -> Result<IndexConfig> {
    if let Some(name) = &cli.config {
        return Ok(IndexConfig::preset(name)?);
    }
    if let Some(indices) = &cli.indices {
        return Ok(IndexConfig::from_indices(
            &indices[0],
            &indices[1],
            &indices[2],
        )?);
    }
    anyhow::bail!("No indexing configuration specified; use -i or -c")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);

    if !cli.inputfile.exists() {
        anyhow::bail!("Input file not found: {}", cli.inputfile.display());
    }

    let config = resolve_config(&cli)?;
    timecode::validate(&cli.endtime).context("Invalid end time argument")?;

    info!("Input:    {}", cli.inputfile.display());
    info!("Output:   {}", cli.outputfile.display());
    info!("End time: {}", cli.endtime);
    debug!("Indexing: {:?}", config);

    let text = std::fs::read_to_string(&cli.inputfile)
        .with_context(|| format!("Failed to read {}", cli.inputfile.display()))?;

    let parser = ChapterParser::new(
        text.lines().map(str::to_string),
        config,
        cli.endtime.clone(),
    );

    let mut chapters = Vec::new();
    for record in parser {
        let chapter = record?;
        debug!(
            "processing chapter {}, start={}, end={}",
            chapter.title, chapter.time_start, chapter.time_end
        );
        chapters.push(chapter);
    }

    let xml_bytes = xml::render(&chapters)?;
    debug!(
        "writing {} bytes to {}",
        xml_bytes.len(),
        cli.outputfile.display()
    );
    xml::write_file(&cli.outputfile, &xml_bytes)
        .with_context(|| format!("Failed to write {}", cli.outputfile.display()))?;

    info!(
        "Wrote {} chapters to {}",
        chapters.len(),
        cli.outputfile.display()
    );

    Ok(())
}
