use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use packviz::io::export::export;
use packviz::io::import::solution_to_records;
use packviz::io::svg::bin_to_svg;
use packviz_cli::config::VizConfig;
use packviz_cli::io::cli::{Cli, InputFormat};
use packviz_cli::{io, visualize};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            VizConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("Successfully parsed VizConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).with_context(|| {
            format!("could not create output folder: {:?}", args.output_folder)
        })?;
    }

    let ext_records = match args.format {
        InputFormat::Records => io::read_records(&args.input_file)?.records,
        InputFormat::Solution => solution_to_records(&io::read_solution(&args.input_file)?),
    };

    let aggregation = visualize(&ext_records, &config);

    {
        let json_path = args.output_folder.join(format!("viz_{input_file_stem}.json"));
        io::write_json(&export(&aggregation), &json_path)?;
    }

    {
        for bin_paths in &aggregation.bins {
            let svg_path = args
                .output_folder
                .join(format!("viz_{input_file_stem}_{}.svg", bin_paths.bin));
            let svg = bin_to_svg(bin_paths, config.svg_draw_options, input_file_stem);
            io::write_svg(&svg, &svg_path)?;
        }
    }

    Ok(())
}
