// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::process::ExitCode;

use pipekit::sink::{EventSink, StdoutSink};
use pipekit::testing::{load_records, sample_users};
use pipekit::varargs::{first_of_first, min_of, VarArgs};
use pipekit::{
    collect_names, collect_sorted_unique_by_age, count_frequencies, count_frequencies_manual,
    join_names, laziness, matched_at_least_parallel, matched_at_least_sequential,
    matched_at_least_shared, max_by_age_per_name, partition_by_age_over, records_by_name,
    sum_ages_by_name, FanOutConfig, PipelineError, Record,
};

mod cli;
use cli::display::{agreement_badge, dim, error, label, row, section_bot, section_top};
use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode, PipelineError> {
    match command {
        Commands::Collect {
            input,
            delimiter,
            threshold,
        } => run_collect(input.as_deref(), &delimiter, threshold),
        Commands::Frequencies { words } => Ok(run_frequencies(&words)),
        Commands::Laziness => {
            let delivered = laziness::replay(&StdoutSink);
            log::info!("laziness replay delivered {} elements", delivered);
            Ok(ExitCode::SUCCESS)
        }
        Commands::FanOut {
            count,
            threshold,
            threads,
            min_len,
            config,
            shared,
        } => {
            let mut fan_out = match config {
                Some(path) => FanOutConfig::from_json_file(&path)?,
                None => FanOutConfig::default(),
            };
            if let Some(threads) = threads {
                fan_out = fan_out.with_threads(threads);
            }
            if let Some(min_len) = min_len {
                fan_out = fan_out.with_min_len(min_len);
            }
            run_fan_out(count, threshold, &fan_out, shared)
        }
        Commands::Min { first, rest } => {
            println!("{}", min_of(first, &rest));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Varargs => run_varargs(),
    }
}

fn run_collect(
    input: Option<&Path>,
    delimiter: &str,
    threshold: u32,
) -> Result<ExitCode, PipelineError> {
    let records = match input {
        Some(path) => load_records(path)?,
        None => sample_users(),
    };
    log::info!("collecting over {} records", records.len());

    section_top("RECORDS");
    for record in &records {
        row(&record.to_string());
    }

    section_top("COLLECTORS");
    row(&format!("{} {:?}", label("names:"), collect_names(&records)));
    row(&format!(
        "{} {}",
        label("joined:"),
        join_names(&records, delimiter)
    ));
    let unique: Vec<String> = collect_sorted_unique_by_age(&records)
        .iter()
        .map(Record::to_string)
        .collect();
    row(&format!("{} {}", label("unique by age:"), unique.join(" ")));

    let sums: BTreeMap<String, u64> = sum_ages_by_name(&records).into_iter().collect();
    row(&format!("{} {:?}", label("age sums:"), sums));

    let oldest: BTreeMap<String, Record> = max_by_age_per_name(&records).into_iter().collect();
    for (name, record) in &oldest {
        row(&format!("{} {} -> {}", label("oldest:"), name, record));
    }

    let (at_or_under, over) = partition_by_age_over(&records, threshold);
    row(&format!(
        "{} {:?}",
        label(&format!("age <= {}:", threshold)),
        collect_names(&at_or_under)
    ));
    row(&format!(
        "{} {:?}",
        label(&format!("age > {}:", threshold)),
        collect_names(&over)
    ));

    match records_by_name(&records) {
        Ok(by_name) => row(&format!("{} {} names", label("by name:"), by_name.len())),
        Err(e) => row(&format!("{} {}", label("by name:"), dim(&e.to_string()))),
    }
    section_bot();
    Ok(ExitCode::SUCCESS)
}

fn run_frequencies(words: &[String]) -> ExitCode {
    let declarative: BTreeMap<String, u64> = count_frequencies(words).into_iter().collect();
    let manual: BTreeMap<String, u64> = count_frequencies_manual(words).into_iter().collect();
    let agree = declarative == manual;

    section_top("FREQUENCIES");
    for (word, count) in &declarative {
        row(&format!("{:<20} {}", word, count));
    }
    row(&format!("{} manual count {}", dim("---"), agreement_badge(agree)));
    section_bot();

    if agree {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_fan_out(
    count: i64,
    threshold: i64,
    config: &FanOutConfig,
    shared: bool,
) -> Result<ExitCode, PipelineError> {
    let items: Vec<i64> = (0..count).collect();
    let sequential = matched_at_least_sequential(&items, threshold);

    let parallel = if shared {
        matched_at_least_shared(&items, threshold, config, &StdoutSink)?
    } else {
        matched_at_least_parallel(&items, threshold, config)?
    };

    let expected: BTreeSet<i64> = sequential.iter().copied().collect();
    let actual: BTreeSet<i64> = parallel.iter().copied().collect();
    let agree = expected == actual && sequential.len() == parallel.len();

    section_top("FAN-OUT");
    row(&format!("{} {}", label("sequential matches:"), sequential.len()));
    row(&format!("{} {}", label("parallel matches:"), parallel.len()));
    row(&format!("{} {}", label("same set:"), agreement_badge(agree)));
    section_bot();

    Ok(if agree {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_varargs() -> Result<ExitCode, PipelineError> {
    let strings = VarArgs::new(vec![vec!["hello".to_string()], vec!["world".to_string()]]);
    StdoutSink.record(format!("stored {} lists of strings", strings.len()));
    match first_of_first(strings) {
        Ok(first) => {
            StdoutSink.record(format!("read back {:?}", first));
            Ok(ExitCode::SUCCESS)
        }
        // The late failure is the point of this demonstration.
        Err(e @ PipelineError::TypeMismatch { .. }) => {
            StdoutSink.record(format!("read failed after a successful store: {}", e));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(e),
    }
}
