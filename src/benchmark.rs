//! Benchmark driver comparing the brute-force last-occurrence matcher
//! against the stride-stepping heuristic on deterministic noise input.
//!
//! Prints formatted result lines to stdout, mirrors each line onto a
//! debug trace channel on stderr, and finishes with a JSON summary.

use serde::Serialize;
use std::hint::black_box;
use substep_search::baselines::BruteForceSearcher;
use substep_search::harness::{run_passes, PassStats};
use substep_search::noise::{scramble, seeded_keyspace_string};
use substep_search::substep::SubstepSearcher;
use substep_search::SubstringSearcher;
use tracing::debug;

const NOISE_LEN: usize = 1024 * 5;
const NOISE_SEED: u64 = 1024;
const SCRAMBLE_KEY: u8 = 128;
const NEEDLE_LEN: usize = 64;
const PASSES: u32 = 32;
const SAMPLES: u32 = 512;

#[derive(Serialize)]
struct ScenarioReport {
    scenario: String,
    brute_force: PassStats,
    substep: PassStats,
    rel_millis_pct: i64,
    rel_ticks_pct: i64,
}

#[derive(Serialize)]
struct RunSummary {
    scenarios: Vec<ScenarioReport>,
}

/// Write one report line to the console and the trace channel.
fn write_line(line: &str) {
    debug!(target: "bench", "{line}");
    println!("{line}");
}

fn rel_pct(brute_mean: f64, substep_mean: f64) -> i64 {
    ((1.0 - substep_mean / brute_mean) * 100.0) as i64
}

fn run_scenario(
    name: &str,
    haystack: &[u8],
    brute_needle: &[u8],
    substep_needle: &[u8],
) -> ScenarioReport {
    write_line(&format!("\n[{name} search START]\n"));

    let brute = run_passes(
        || {
            black_box(BruteForceSearcher.find(black_box(haystack), black_box(brute_needle)));
        },
        PASSES,
        SAMPLES,
    );
    write_line(&format!(
        "\n[Overall A] Mean: {:.2} ms ({:.0} t)\n",
        brute.mean_millis, brute.mean_ticks
    ));

    let substep = run_passes(
        || {
            black_box(SubstepSearcher.find(black_box(haystack), black_box(substep_needle)));
        },
        PASSES,
        SAMPLES,
    );
    write_line(&format!(
        "\n[Overall B] Mean: {:.2} ms ({:.0} t)\n",
        substep.mean_millis, substep.mean_ticks
    ));

    write_line(&format!("\n[{name} search END]"));

    let rel_millis_pct = rel_pct(brute.mean_millis, substep.mean_millis);
    let rel_ticks_pct = rel_pct(brute.mean_ticks, substep.mean_ticks);
    write_line(&format!("[Results] Rel: {rel_millis_pct}% ms ({rel_ticks_pct}% t)\n"));

    ScenarioReport {
        scenario: name.to_string(),
        brute_force: brute,
        substep,
        rel_millis_pct,
        rel_ticks_pct,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let input = seeded_keyspace_string(NOISE_LEN, NOISE_SEED);
    let noise = scramble(&input, SCRAMBLE_KEY);

    let needle_start = &noise[..NEEDLE_LEN];
    let mid = noise.len() / 2 - NEEDLE_LEN / 2;
    let needle_middle = &noise[mid..mid + NEEDLE_LEN];
    let needle_end = &noise[noise.len() - NEEDLE_LEN..];

    // The origin scenario hands each algorithm the needle adverse to its
    // traversal direction: the brute force scans right to left and gets
    // the start needle, the substep scans left to right and gets the end
    // needle. The middle scenario gives both the same needle.
    let origin = run_scenario("Origin", &noise, needle_start, needle_end);
    let middle = run_scenario("Middle", &noise, needle_middle, needle_middle);

    let summary = RunSummary {
        scenarios: vec![origin, middle],
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize summary: {err}"),
    }
}
