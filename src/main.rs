use anyhow::{anyhow, Context, Result};
use clap::Parser;
use gridbox::io::layout_schema::GridLayout;
use gridbox::io::parsed_layout::read_layout;
use gridbox::io::report::{describe_locations, render_grid, summarize};
use log::{error, info, trace, warn};
use mimalloc::MiMalloc;
use owo_colors::OwoColorize;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, LevelPadding, SharedLogger,
    TermLogger, TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Loads a grid layout and reports its contents")]
struct Cli {
    /// The `.toml` layout file to load.
    #[clap(value_parser)]
    layout: Option<PathBuf>,

    /// Also write the log to this file.
    #[clap(long, value_parser)]
    log_file: Option<PathBuf>,

    /// Print an example layout file and exit.
    #[clap(long)]
    template: bool,

    /// Only report warnings and errors.
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse_from(wild::args_os());

    init_log(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", format!("{:?}", e).bright_red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.template {
        print!("{}", GridLayout::template().to_toml()?);
        return Ok(());
    }

    let path = cli
        .layout
        .as_deref()
        .with_context(|| anyhow!("No layout file was provided, see --help"))?;

    report_layout(path)
}

fn report_layout(path: &Path) -> Result<()> {
    info!(":: Loading Layout ::");

    let layout = read_layout(path)?;
    let grid = layout.build()?;

    info!("{}", summarize(grid.as_ref()).bold());

    match render_grid(grid.as_ref()) {
        Some(rendered) => {
            for line in rendered.lines() {
                info!("{}", line.green());
            }
        }
        None => warn!("Grid is too large to draw, listing item locations only"),
    }

    info!(":: Item Locations ::");
    info!("{}", describe_locations(grid.item_locations()));

    if layout.queries.is_empty() {
        trace!("Layout has no neighbor queries");
        return Ok(());
    }

    info!(":: Neighbor Queries ::");
    for query in layout.queries.iter() {
        match query.run(grid.as_ref()) {
            Ok(neighbors) => info!(
                "{:?} neighbors of ({}, {}): {}",
                query.neighbors,
                query.row,
                query.col,
                describe_locations(neighbors.into_iter()).bold()
            ),
            Err(e) => error!(
                "{}",
                format!(
                    "Query at ({}, {}) failed due to: {:?}",
                    query.row, query.col, e
                )
                .bright_red()
            ),
        }
    }

    Ok(())
}

fn init_log(cli: &Cli) {
    let config = ConfigBuilder::default()
        .set_time_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_level_padding(LevelPadding::Right)
        .build();

    let term_level = if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    match cli.log_file.as_ref().map(|path| (path, File::create(path))) {
        Some((path, Ok(file))) => {
            loggers.push(WriteLogger::new(LevelFilter::Trace, config, file));
            CombinedLogger::init(loggers).expect("safe");
            trace!("Log contents will be saved to {}", path.to_string_lossy());
        }
        Some((path, Err(e))) => {
            CombinedLogger::init(loggers).expect("safe");
            error!(
                "Failed to create log file at {} due to: {}",
                path.to_string_lossy(),
                e
            );
        }
        None => CombinedLogger::init(loggers).expect("safe"),
    }
}
