//! Command line interface for the Monte Carlo position sizing optimizer.
use anyhow::Result;
use clap::{Parser, Subcommand};
use prettytable::{Table, format, row};
use sizer_domain::enums::SelectionCriterion;
use sizer_domain::value_objects::position_size::PositionSize;
use sizer_optimization::grid::SizeGrid;
use sizer_optimization::sweep::SweepOptimizer;
use sizer_simulation::comparative::ComparisonRunner;
use sizer_simulation::state::SimulationParameters;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "sizer")]
#[command(about = "Monte Carlo position sizing optimizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep a grid of position sizes and pick the best per criterion
    Optimize {
        /// Probability that a single trade wins
        #[arg(short, long, default_value_t = 0.57)]
        win_rate: f64,

        /// Win multiple relative to the amount risked
        #[arg(short, long, default_value_t = 1.0)]
        risk_reward: f64,

        /// Trades per run
        #[arg(short, long, default_value_t = 500)]
        trades: usize,

        /// Starting capital
        #[arg(short, long, default_value_t = 10_000.0)]
        capital: f64,

        /// Monte Carlo runs per candidate size
        #[arg(short = 'm', long, default_value_t = 500)]
        runs: usize,

        /// First candidate size, percent of capital
        #[arg(long, default_value_t = 1.0)]
        grid_start: f64,

        /// Last candidate size, percent of capital
        #[arg(long, default_value_t = 40.0)]
        grid_stop: f64,

        /// Grid step, percent of capital
        #[arg(long, default_value_t = 0.5)]
        grid_step: f64,

        /// Base RNG seed for a reproducible sweep
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Replay identical trade sequences across a handful of sizes
    Compare {
        /// Probability that a single trade wins
        #[arg(short, long, default_value_t = 0.57)]
        win_rate: f64,

        /// Win multiple relative to the amount risked
        #[arg(short, long, default_value_t = 1.0)]
        risk_reward: f64,

        /// Trades per run
        #[arg(short, long, default_value_t = 500)]
        trades: usize,

        /// Starting capital
        #[arg(short, long, default_value_t = 10_000.0)]
        capital: f64,

        /// Shared Monte Carlo runs
        #[arg(short = 'm', long, default_value_t = 100)]
        runs: usize,

        /// Position sizes to compare, percent of capital
        #[arg(long, value_delimiter = ',', default_value = "1,3,5,10,15,20,35")]
        sizes: Vec<f64>,

        /// RNG seed for a reproducible comparison
        #[arg(short, long)]
        seed: Option<u64>,

        /// Emit per-size statistics and trajectories as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so the --json reports on stdout stay parseable.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Optimize {
            win_rate,
            risk_reward,
            trades,
            capital,
            runs,
            grid_start,
            grid_stop,
            grid_step,
            seed,
            json,
        } => {
            let params = SimulationParameters::new(*win_rate, *risk_reward)
                .with_trades(*trades)
                .with_initial_capital(*capital)
                .with_runs(*runs);
            let grid = SizeGrid::new(*grid_start, *grid_stop, *grid_step);
            let mut optimizer = SweepOptimizer::new(params, grid);
            if let Some(seed) = seed {
                optimizer = optimizer.with_seed(*seed);
            }

            if !*json {
                println!(
                    "🚀 Sweeping position sizes {:.1}%..{:.1}% in {:.1}% steps...",
                    grid_start, grid_stop, grid_step
                );
            }
            let started = Instant::now();
            let report = optimizer.run()?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!(
                "✅ Evaluated {} candidate sizes in {:.2}s",
                report.table.len(),
                started.elapsed().as_secs_f64()
            );

            println!("\n📊 Sweep Results");
            println!("Win Probability: {:.1}%", win_rate * 100.0);
            println!("Risk/Reward:     1:{:.2}", risk_reward);
            println!("Trades per Run:  {}", trades);
            println!("Runs per Size:   {}", runs);
            println!("Initial Capital: ${:.2}", capital);

            let best_geo = report
                .optimization
                .selection_for(SelectionCriterion::GeometricMeanReturn)
                .map(|s| s.size.fraction());
            let selected: Vec<f64> = report
                .optimization
                .selections
                .iter()
                .filter_map(|s| s.selection.as_ref().map(|stats| stats.size.fraction()))
                .collect();

            // Whole-percent rows plus every selected size keep the table short.
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BOX_CHARS);
            table.set_titles(row![
                "Size",
                "Geo Ret %",
                "Median Ret %",
                "Mean Ret %",
                "Avg MaxDD %",
                "Profitable %",
                "Ruined %"
            ]);
            for stats in &report.table {
                let pct = stats.size.percent();
                let is_whole = (pct - pct.round()).abs() < 1e-9;
                let is_selected = selected
                    .iter()
                    .any(|&f| (f - stats.size.fraction()).abs() < 1e-12);
                if !is_whole && !is_selected {
                    continue;
                }
                let size_label = if Some(stats.size.fraction()) == best_geo {
                    format!("{:.1}% ⭐", pct)
                } else {
                    format!("{:.1}%", pct)
                };
                table.add_row(row![
                    size_label,
                    r->format!("{:.1}", stats.geometric_mean_return_pct),
                    r->format!("{:.1}", stats.median_return_pct),
                    r->format!("{:.1}", stats.mean_return_pct),
                    r->format!("{:.1}", stats.mean_max_drawdown_pct),
                    r->format!("{:.1}", stats.profitability_rate * 100.0),
                    r->format!("{:.1}", stats.ruin_probability * 100.0)
                ]);
            }
            table.printstd();

            println!("\n🏆 Optimal Position Size per Criterion");
            for selection in &report.optimization.selections {
                match &selection.selection {
                    Some(stats) => println!(
                        "  ✅ {:<32} {:>5.1}%",
                        selection.criterion.label(),
                        stats.size.percent()
                    ),
                    None => println!(
                        "  ❌ {:<32} none found",
                        selection.criterion.label()
                    ),
                }
            }

            if let Some(best) = report
                .optimization
                .selection_for(SelectionCriterion::GeometricMeanReturn)
            {
                println!("\n📌 Metrics at {:.1}% (best geometric growth)", best.size.percent());
                println!("Geometric Return: {:>8.1}%", best.geometric_mean_return_pct);
                println!("Median Return:    {:>8.1}%", best.median_return_pct);
                println!("Avg Max Drawdown: {:>8.1}%", best.mean_max_drawdown_pct);
                println!("Profitable Runs:  {:>8.1}%", best.profitability_rate * 100.0);
                println!("Ruined Runs:      {:>8.1}%", best.ruin_probability * 100.0);
            }
        }
        Commands::Compare {
            win_rate,
            risk_reward,
            trades,
            capital,
            runs,
            sizes,
            seed,
            json,
        } => {
            let params = SimulationParameters::new(*win_rate, *risk_reward)
                .with_trades(*trades)
                .with_initial_capital(*capital)
                .with_runs(*runs);
            let candidates: Vec<PositionSize> =
                sizes.iter().map(|&pct| PositionSize::from_percent(pct)).collect();
            let mut runner = ComparisonRunner::new(params, candidates);
            if let Some(seed) = seed {
                runner = runner.with_seed(*seed);
            }

            if !*json {
                println!(
                    "🎲 Replaying {} shared trade sequences across {} position sizes...",
                    runs,
                    sizes.len()
                );
            }
            let started = Instant::now();
            let report = runner.run()?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!(
                "✅ Simulated {} runs in {:.2}s",
                runs,
                started.elapsed().as_secs_f64()
            );

            println!("\n📊 Results Summary");
            println!("Win Probability: {:.1}%", win_rate * 100.0);
            println!("Risk/Reward:     1:{:.2}", risk_reward);
            println!("Trades per Run:  {}", trades);
            println!("Initial Capital: ${:.2}", capital);

            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BOX_CHARS);
            table.set_titles(row![
                "Size",
                "Mean Final $",
                "Median Final $",
                "Mean Ret %",
                "Profitable %",
                "Ruined %"
            ]);
            for entry in &report.entries {
                let stats = &entry.stats;
                table.add_row(row![
                    format!("{:.1}%", stats.size.percent()),
                    r->format!("{:.0}", stats.mean_final_capital),
                    r->format!("{:.0}", stats.median_final_capital),
                    r->format!("{:.1}", stats.mean_return_pct),
                    r->format!("{:.1}", stats.profitability_rate * 100.0),
                    r->format!("{:.1}", stats.ruin_probability * 100.0)
                ]);
            }
            table.printstd();

            println!("\n🔍 Detailed Statistics");
            for entry in &report.entries {
                let stats = &entry.stats;
                println!("\n{:.1}% Position Size:", stats.size.percent());
                println!("  Min Final Capital:    ${:>12.2}", stats.min_final_capital);
                println!("  Max Final Capital:    ${:>12.2}", stats.max_final_capital);
                println!(
                    "  Std Dev of Final:     ${:>12.2}",
                    stats.return_std_dev_pct / 100.0 * capital
                );
                if let Some(median_run) = entry.median_trajectory() {
                    println!(
                        "  Median-Run Final:     ${:>12.2}",
                        median_run.final_capital()
                    );
                }
            }
        }
    }

    Ok(())
}
