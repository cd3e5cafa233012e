//! crossing — agents crossing a randomly obstructed 20×20 grid.
//!
//! Agents enter on the left and right edges and head for the opposite side,
//! so they meet head-on in the middle and have to evade each other.  Walls
//! and hazards are scattered at random (spawn cells stay clear).  Every
//! move, evasion, arrival and death is written to
//! `output/crossing/events.csv`.
//!
//! Set `RUST_LOG=debug` to watch individual evasions.

use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use gn_agent::AgentStatus;
use gn_core::{Cell, NavConfig, SimRng};
use gn_grid::{BfsOracle, Grid, ScatterSpec};
use gn_sim::{CoordinatorBuilder, TickReport};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64 = 42;
const MAX_FRAMES: u64 = 3_000; // ~100 s of simulated time at 33 ms/frame
const OUTPUT_DIR: &str = "output/crossing";

// ── Scenario CSV ──────────────────────────────────────────────────────────────

// One row per agent.  Pairs of rows cross the same band of the grid in
// opposite directions.
const SCENARIO_CSV: &str = "\
start_row,start_col,goal_row,goal_col\n\
2,0,2,19\n\
2,19,2,0\n\
6,0,6,19\n\
6,19,6,0\n\
10,0,10,19\n\
10,19,10,0\n\
14,0,14,19\n\
14,19,14,0\n\
18,0,18,19\n\
18,19,18,0\n\
";

#[derive(Deserialize)]
struct CrossingRecord {
    start_row: i32,
    start_col: i32,
    goal_row:  i32,
    goal_col:  i32,
}

impl CrossingRecord {
    fn start(&self) -> Cell {
        Cell::new(self.start_row, self.start_col)
    }

    fn goal(&self) -> Cell {
        Cell::new(self.goal_row, self.goal_col)
    }
}

// ── Event log ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct EventRow {
    time_ms: u64,
    agent:   u32,
    event:   &'static str,
    row:     i32,
    col:     i32,
}

fn event_rows(report: &TickReport) -> Vec<EventRow> {
    let t = report.now.0;
    let mut rows = Vec::new();
    for m in &report.moves {
        rows.push(EventRow { time_ms: t, agent: m.agent.0, event: "move", row: m.to.row, col: m.to.col });
    }
    for e in &report.evasions {
        let event = if e.waypoint.is_some() { "evade" } else { "stuck" };
        rows.push(EventRow { time_ms: t, agent: e.agent.0, event, row: e.cell.row, col: e.cell.col });
    }
    for d in &report.damage {
        rows.push(EventRow { time_ms: t, agent: d.agent.0, event: "damage", row: d.cell.row, col: d.cell.col });
    }
    for &a in &report.arrivals {
        rows.push(EventRow { time_ms: t, agent: a.0, event: "arrive", row: -1, col: -1 });
    }
    for &a in &report.deaths {
        rows.push(EventRow { time_ms: t, agent: a.0, event: "die", row: -1, col: -1 });
    }
    rows
}

// ── Map printout ──────────────────────────────────────────────────────────────

fn print_map(grid: &Grid, starts: &HashSet<Cell>, goals: &HashSet<Cell>) {
    let r = grid.resolution() as i32;
    for row in 0..r {
        let line: String = (0..r)
            .map(|col| {
                let cell = Cell::new(row, col);
                match grid.obstacle(cell) {
                    Some(o) if o.is_wall() => '#',
                    Some(_) => '~',
                    None if starts.contains(&cell) => 'S',
                    None if goals.contains(&cell) => 'G',
                    None => '.',
                }
            })
            .collect();
        println!("  {line}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    println!("=== crossing — rust_gridnav coordinator ===");

    // 1. Configuration.
    let config = NavConfig { seed: SEED, ..NavConfig::default() };
    config.validate()?;
    println!(
        "Grid: {0}×{0} {1}  |  Health: {2}  |  Delays: {3:?} ms  |  Seed: {4}",
        config.resolution, config.geometry, config.initial_health, config.move_delays_ms, config.seed
    );

    // 2. Load the scenario.
    let mut reader = csv::Reader::from_reader(Cursor::new(SCENARIO_CSV));
    let records: Vec<CrossingRecord> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .context("parsing scenario CSV")?;
    let starts: HashSet<Cell> = records.iter().map(CrossingRecord::start).collect();
    let goals: HashSet<Cell> = records.iter().map(CrossingRecord::goal).collect();
    let reserved: Vec<Cell> = starts.iter().chain(goals.iter()).copied().collect();

    // 3. Scatter walls and hazards, keeping spawn cells clear.
    let mut rng = SimRng::new(config.seed);
    let mut grid = Grid::from_config(&config)?;
    let (walls, hazards) = grid.scatter(&ScatterSpec::default(), &reserved, &mut rng);
    println!("Obstacles: {walls} walls, {hazards} hazards");
    print_map(&grid, &starts, &goals);
    println!();

    // 4. Build the coordinator and spawn routed agents.
    let mut coord = CoordinatorBuilder::new(config.clone(), BfsOracle)
        .grid(grid)
        .rng(rng.child(1))
        .build()?;

    for rec in &records {
        match coord.spawn_routed(rec.start(), rec.goal()) {
            Ok(id) => {
                let steps = coord.agent(id).map_or(0, |a| a.path.len());
                println!("  {id}: {} → {} ({steps} steps)", rec.start(), rec.goal());
            }
            Err(e) => println!("  skipped {} → {}: {e}", rec.start(), rec.goal()),
        }
    }
    let spawned = coord.active_count();
    println!();

    // 5. Run.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = csv::Writer::from_path(Path::new(OUTPUT_DIR).join("events.csv"))?;

    let mut clock = config.make_clock();
    let (mut arrivals, mut deaths, mut evasions, mut moves) = (0, 0, 0, 0);
    let t0 = Instant::now();
    while coord.active_count() > 0 && clock.frame < MAX_FRAMES {
        let report = coord.advance_simulation(clock.advance());
        for row in event_rows(&report) {
            writer.serialize(row)?;
        }
        moves += report.moves.len();
        evasions += report.evasions.len();
        arrivals += report.arrivals.len();
        deaths += report.deaths.len();
    }
    writer.flush()?;
    let elapsed = t0.elapsed();

    // 6. Summary.
    println!(
        "Finished at {} in {:.3} s wall time",
        clock,
        elapsed.as_secs_f64()
    );
    println!("  spawned  : {spawned}");
    println!("  arrived  : {arrivals}");
    println!("  died     : {deaths}");
    println!("  moves    : {moves}");
    println!("  evasions : {evasions}");
    println!("  events   : {OUTPUT_DIR}/events.csv");

    if coord.active_count() > 0 {
        println!();
        println!("{:<10} {:<10} {:<10} {:<8}", "Agent", "Cell", "Goal", "Status");
        println!("{}", "-".repeat(40));
        for a in coord.agents() {
            let status = match a.status {
                AgentStatus::Waiting => "stranded",
                _ => "en route",
            };
            println!(
                "{:<10} {:<10} {:<10} {:<8}",
                a.id.to_string(),
                a.cell.to_string(),
                a.goal.to_string(),
                status
            );
        }
    }

    Ok(())
}
