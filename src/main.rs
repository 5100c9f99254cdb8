// SPDX-License-Identifier: MPL-2.0
use flipbook::app::{self, paths, Flags};
use flipbook::config::{self, Config, DEFAULT_SPREAD_COUNT};
use flipbook::tools::{check, compress, format_mib, renumber, split};
use std::error::Error;
use std::path::PathBuf;
use std::process;

const HELP: &str = "\
flipbook: page-flip book viewer

USAGE:
  flipbook [OPTIONS] [BOOK_DIR]
  flipbook check [OPTIONS] [BOOK_DIR]
  flipbook split <INPUT_DIR> <OUTPUT_DIR> [--spreads N]
  flipbook compress <INPUT_DIR> <OUTPUT_DIR> [--max-width PX] [--quality Q] [--replace]
  flipbook renumber [OPTIONS] [PAGES_DIR]

OPTIONS:
  --lang LANG         Interface language (e.g. en-US, fr)
  --config-dir DIR    Directory holding settings.toml
  --pages N           Number of pages including the cover
  -h, --help          Print this help

Log verbosity is controlled by RUST_LOG (default: warn).
";

type CliResult = Result<(), Box<dyn Error>>;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return;
    }

    let outcome = match args.subcommand() {
        Ok(Some(command)) => match command.as_str() {
            "check" => run_check(args),
            "split" => run_split(args),
            "compress" => run_compress(args),
            "renumber" => run_renumber(args),
            // Not a subcommand: the first free argument is the book directory.
            _ => run_viewer(args, Some(PathBuf::from(command))),
        },
        Ok(None) => run_viewer(args, None),
        Err(err) => Err(err.into()),
    };

    if let Err(err) = outcome {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn warn_unused(args: pico_args::Arguments) {
    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unused arguments: {rest:?}");
    }
}

/// Loads settings and applies the book overrides shared by viewer-style commands.
fn book_config(args: &mut pico_args::Arguments) -> Result<Config, Box<dyn Error>> {
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let total_pages: Option<usize> = args.opt_value_from_str("--pages")?;
    paths::init_cli_override(config_dir);

    let (mut config, warning) = config::load();
    if let Some(key) = warning {
        log::warn!("{key}");
    }
    if let Some(dir) = args.opt_free_from_str::<PathBuf>()? {
        config.book.directory = Some(dir);
    }
    if total_pages.is_some() {
        config.book.total_pages = total_pages;
    }
    Ok(config)
}

fn run_viewer(mut args: pico_args::Arguments, book_dir: Option<PathBuf>) -> CliResult {
    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let total_pages: Option<usize> = args.opt_value_from_str("--pages")?;
    let book_dir = match book_dir {
        Some(dir) => Some(dir),
        None => args.opt_free_from_str()?,
    };
    warn_unused(args);

    app::run(Flags {
        lang,
        config_dir,
        book_dir,
        total_pages,
    })?;
    Ok(())
}

fn run_check(mut args: pico_args::Arguments) -> CliResult {
    let config = book_config(&mut args)?;
    warn_unused(args);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(check::check_book(&config))?;
    println!("{report}");
    Ok(())
}

fn run_split(mut args: pico_args::Arguments) -> CliResult {
    let spreads: usize = args
        .opt_value_from_str("--spreads")?
        .unwrap_or(DEFAULT_SPREAD_COUNT);
    let input: PathBuf = args.free_from_str()?;
    let output: PathBuf = args.free_from_str()?;
    warn_unused(args);

    let report = split::split_spreads(&input, &output, spreads)?;
    for missing in &report.missing {
        println!("missing: {}", missing.display());
    }
    println!(
        "wrote {} pages to {}",
        report.written.len(),
        output.display()
    );
    Ok(())
}

fn run_compress(mut args: pico_args::Arguments) -> CliResult {
    let defaults = compress::CompressOptions::default();
    let options = compress::CompressOptions {
        max_width: args
            .opt_value_from_str("--max-width")?
            .unwrap_or(defaults.max_width),
        quality: args
            .opt_value_from_str("--quality")?
            .unwrap_or(defaults.quality),
        replace: args.contains("--replace"),
    };
    let input: PathBuf = args.free_from_str()?;
    let output: PathBuf = args.free_from_str()?;
    warn_unused(args);

    let report = compress::compress_dir(&input, &output, &options)?;
    for file in &report.files {
        println!("{file}");
    }
    println!(
        "total: {} -> {} ({:.1}% saved)",
        format_mib(report.original_bytes()),
        format_mib(report.compressed_bytes()),
        report.saved_percent()
    );
    if let Some(backup) = &report.backup {
        println!("originals backed up to {}", backup.display());
    }
    Ok(())
}

fn run_renumber(mut args: pico_args::Arguments) -> CliResult {
    let config = book_config(&mut args)?;
    warn_unused(args);

    let outcome = renumber::remove_blank_first_page(&config.book.path_rule())?;
    println!("{outcome}");
    Ok(())
}
