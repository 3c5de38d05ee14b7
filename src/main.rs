use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    env,
    path::{Path, PathBuf},
};

use azkar_content::{
    build_out::BuildOut, cache::ParseCache, collection::loader::load_registry,
    content::block_parser::ClassifyOptions,
};

struct Args {
    collections_path: String,
    output_path: Option<String>,
    keep_blank_lines: bool,
    pretty: bool,
    verbose: bool,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optflag("b", "keep-blank-lines", "emit spacer blocks for blank lines");
    opts.optflag("p", "pretty", "pretty-print JSON output");
    opts.optflag("v", "verbose", "log loaded collections and cache statistics");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        let brief = "Usage: azkar-content [options] <collections-path> [output-dir]";
        print!("{}", opts.usage(brief));
        return Ok(None);
    }

    let collections_path = matches
        .free
        .first()
        .context("path to collections (directory, .zip or .json) is required")?
        .clone();
    let output_path = matches.free.get(1).cloned();

    Ok(Some(Args {
        collections_path,
        output_path,
        keep_blank_lines: matches.opt_present("b"),
        pretty: matches.opt_present("p"),
        verbose: matches.opt_present("v"),
    }))
}

fn main() -> Result<()> {
    let Some(args) = get_args()? else {
        return Ok(());
    };

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let collections_path = PathBuf::from(&args.collections_path);

    let out = if let Some(output_path) = &args.output_path {
        BuildOut::init_file(Path::new(output_path), args.pretty)
            .with_context(|| format!("Failed to output directory: {}", &output_path))?
    } else {
        BuildOut::Null
    };

    println!("Loading collections...");

    let registry = load_registry(&collections_path).with_context(|| {
        format!(
            "Failed to load collections: {}",
            collections_path.display()
        )
    })?;

    println!("Finished.");

    println!("Processing collections...");

    let mut cache = ParseCache::new(ClassifyOptions {
        keep_blank_lines: args.keep_blank_lines,
    });
    let pb = create_progress_bar(registry.len() as u64);
    out.save_registry(&registry, &mut cache, pb)?;

    println!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#-");

    let pb = ProgressBar::new(len);
    pb.set_style(style);
    pb
}
