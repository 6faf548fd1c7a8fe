use std::env;
use std::time::Instant;

use knapsack_dp::utils::{total_value, total_weight};
use knapsack_dp::{Item, Solver, SolverBuilder, Specification, Strategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("knapsack_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Knapsack Probe: scaling and correctness of both memo strategies");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("  • Correctness: results match brute force up to {} items", options.verify_limit);
    eprintln!("  • wall_s: wall-clock time in seconds");
    eprintln!("  • rss_delta_kib: resident memory delta in KiB");
    eprintln!("  • status: 'passed' = matches baseline, 'not_checked' = too large to verify");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Dense tabulation, growing item count...");
    measurements.extend(run_items_sweep(&options, &mut sys, Strategy::Dense));
    eprintln!();

    eprintln!("[2/3] Lazy memoization, growing item count...");
    measurements.extend(run_items_sweep(&options, &mut sys, Strategy::Lazy));
    eprintln!();

    eprintln!("[3/3] Lazy memoization, sparse weights and huge capacity...");
    measurements.extend(run_sparse_capacity(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("knapsack_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 16usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_verify_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_verify_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin knapsack_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum item count to verify by brute force, at most 24 (default: 16)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin knapsack_probe
  cargo run --release --bin knapsack_probe -- --format table --verify-limit 20
"
        );
    }
}

fn parse_verify_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(limit) if limit <= 24 => Ok(limit),
        Ok(_) => Err("verify limit above 24 items makes brute force impractical".to_string()),
        Err(_) => Err("verify limit must be a non-negative integer".to_string()),
    }
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn run_items_sweep(options: &Options, sys: &mut System, strategy: Strategy) -> Vec<Measurement> {
    const SIZES: &[(usize, i64)] = &[
        (8, 40),
        (12, 60),
        (16, 80),
        (20, 100),
        (64, 1_000),
        (128, 5_000),
        (256, 10_000),
        (512, 20_000),
    ];
    let scenario = strategy.as_str();
    let solver = SolverBuilder::new().with_strategy(strategy).build();
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &(n, capacity))| {
            eprint!("      [{}/{}] n={} capacity={}... ", idx + 1, total, n, capacity);
            let spec = deterministic_spec(n, capacity, (capacity / 4).max(1));
            let m = measure(scenario, format!("n={n},cap={capacity}"), sys, || {
                check(&solver, &spec, n <= options.verify_limit)
            });
            report(&m);
            m
        })
        .collect()
}

fn run_sparse_capacity(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[8, 16, 20];
    let solver = Solver::new();
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &n)| {
            let capacity = 1_i64 << 40;
            eprint!("      [{}/{}] n={} capacity=2^40... ", idx + 1, total, n);
            let spec = deterministic_spec(n, capacity, capacity / 4);
            let m = measure("lazy_sparse", format!("n={n},cap=2^40"), sys, || {
                check(&solver, &spec, n <= options.verify_limit)
            });
            report(&m);
            m
        })
        .collect()
}

fn report(m: &Measurement) {
    eprintln!(
        "{} time={:.3}s, status={}",
        m.verification_status.icon(),
        m.wall_s,
        m.verification_status.label()
    );
}

fn check(
    solver: &Solver,
    spec: &Specification<u64>,
    verify: bool,
) -> (VerificationStatus, Option<String>) {
    let solution = match solver.solve(spec) {
        Ok(solution) => solution,
        Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
    };
    let best = solution.max_value();
    let chosen = solution.select();
    if total_weight(&chosen) > spec.capacity || total_value(&chosen) != best {
        return (
            VerificationStatus::Failed,
            Some(format!(
                "selection weight {} value {} does not realize {best}",
                total_weight(&chosen),
                total_value(&chosen)
            )),
        );
    }
    if !verify {
        return (VerificationStatus::NotChecked, None);
    }
    let baseline = brute_force(&spec.items, spec.capacity);
    if baseline == best {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {baseline}, got {best}")),
        )
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Test Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    eprintln!("  Total tests: {}", measurements.len());
    eprintln!("  ✓ Passed: {passed}");
    eprintln!("  ✗ Failed: {failed}");
    eprintln!(
        "  ○ Not checked (n > {}): {not_checked}",
        options.verify_limit
    );

    if failed > 0 {
        eprintln!();
        eprintln!("Failed Tests:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},\"{}\",{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Reproducible instance: weights in `1..=max_weight`, values loosely
/// correlated with weight so the optimum is not trivially greedy.
fn deterministic_spec(n: usize, capacity: i64, max_weight: i64) -> Specification<u64> {
    let mut state = 0x9e37_79b9_7f4a_7c15u64 ^ n as u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let items = (0..n)
        .map(|_| {
            let weight = 1 + (next() % max_weight as u64) as i64;
            let value = weight as u64 / 2 + next() % 100;
            Item::new(weight, value)
        })
        .collect();
    Specification::new(capacity, items)
}

fn brute_force(items: &[Item<u64>], capacity: i64) -> u64 {
    let n = items.len();
    let mut best = 0;
    for mask in 0u32..(1u32 << n) {
        let mut weight = 0i64;
        let mut value = 0u64;
        for (i, item) in items.iter().enumerate() {
            if mask & (1 << i) != 0 {
                weight += item.weight;
                value += item.value;
            }
        }
        if weight <= capacity && value > best {
            best = value;
        }
    }
    best
}
