use clap::CommandFactory;
use clap::Parser;
use colored::*;
use env_logger::{Builder, Env, Target};
use hashseek::cli::{Cli, Commands};
use hashseek::config::Config;
use hashseek::error::{HashseekError, Result as HashseekResult};
use hashseek::{
    Alphabet, HashAlgorithm, Hasher, Metrics, OutputFormat, ProgressReporter, SearchConfig,
    SearchEngine, SearchOutcome, SearchReport,
};
use is_terminal::IsTerminal;
use log::{info, warn};
use std::fs;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Instant;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = setup_logging(&cli) {
        eprintln!("{} {e}", "error:".red().bold());
        return ExitCode::from(2);
    }

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> HashseekResult<ExitCode> {
    let start_time = Instant::now();
    let config = Config::load().unwrap_or_default();

    match &cli.command {
        Commands::Search {
            target,
            kind,
            hash,
            alphabet,
            prefix,
            max_len,
            copy,
            output_format,
            stats,
            no_progress,
        } => {
            let alphabet = alphabet.as_deref().unwrap_or(&config.search.alphabet);
            let max_len = max_len.or(config.search.max_len);
            let search_config = SearchConfig::build(target, *kind, alphabet, prefix, max_len)?;
            info!(
                "Searching for {} target {} ({}, alphabet \"{}\")",
                kind, target, hash, search_config.alphabet
            );

            let metrics = Arc::new(Metrics::new());
            let hasher = Hasher::new(*hash, &search_config.alphabet);
            let mut engine = SearchEngine::new(hasher, Arc::clone(&metrics));

            let cancel = engine.cancel_flag();
            ctrlc::set_handler(move || {
                warn!("Interrupt received, stopping search");
                cancel.store(true, Ordering::SeqCst);
            })
            .map_err(|e| HashseekError::Other(e.to_string()))?;

            let show_progress =
                !*no_progress && config.display.progress && std::io::stderr().is_terminal();
            let progress = show_progress.then(|| Arc::new(ProgressReporter::new()));
            if let Some(reporter) = progress.clone() {
                engine.set_observer(move |generated, candidate| {
                    reporter.update(generated, candidate)
                });
            }

            let outcome = engine.run(&search_config)?;
            if let Some(reporter) = &progress {
                reporter.finish();
            }

            let report = SearchReport::new(
                &search_config,
                *hash,
                &outcome,
                metrics.candidates_generated.get(),
                start_time.elapsed(),
            );
            print!("{}", report.render(*output_format)?);
            if matches!(output_format, &OutputFormat::Json) {
                println!();
            }

            if let SearchOutcome::Found { candidate, .. } = &outcome {
                if *copy {
                    let mut clipboard =
                        arboard::Clipboard::new().map_err(HashseekError::Clipboard)?;
                    clipboard
                        .set_text(candidate.clone())
                        .map_err(HashseekError::Clipboard)?;
                    println!("{}", "Result copied to clipboard!".green());
                }
            }

            if *stats {
                eprintln!("\n{}", metrics.gather());
            }

            info!(
                "Search finished. Total elapsed time: {:.2?}",
                start_time.elapsed()
            );
            Ok(match outcome {
                SearchOutcome::Found { .. } => ExitCode::SUCCESS,
                SearchOutcome::Exhausted => ExitCode::from(1),
                SearchOutcome::Cancelled => ExitCode::from(130),
            })
        }

        Commands::Digest {
            input,
            hash,
            alphabet,
        } => {
            let alphabet =
                Alphabet::parse(alphabet.as_deref().unwrap_or(&config.search.alphabet))?;
            if *hash == HashAlgorithm::Poly37
                && !input.chars().all(|c| alphabet.contains(c))
            {
                warn!("Input contains characters outside the alphabet; they are ignored by poly37");
            }
            let hasher = Hasher::new(*hash, &alphabet);
            println!("{}", hasher.digest(input));
            Ok(ExitCode::SUCCESS)
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "hashseek", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn setup_logging(cli: &Cli) -> HashseekResult<()> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                fs::create_dir_all(parent_dir).map_err(HashseekError::Io)?;
            }
        }
        let log_file = fs::File::create(log_path).map_err(HashseekError::Io)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| HashseekError::Other(e.to_string()))?;
    Ok(())
}
