//! warehouse — headless demo for the warenav simulation core.
//!
//! Scatters box entities across a synthetic warehouse, runs both detection
//! models side by side while the robot navigates to whatever the active model
//! reports, then prints per-model accuracy/latency tables and the final pose.
//! A rendering front end would drive `Sim::tick` from its frame callback
//! instead of the fixed loop used here.

use anyhow::Result;

use wn_core::{EntityId, EntitySnapshot, GridCoord, ModelKind, SimConfig, SimRng, Tick, WorldPoint};
use wn_detect::DetectionResult;
use wn_grid::{AStarPlanner, Path};
use wn_sim::{SimBuilder, SimObserver, StaticWarehouse};

// ── Constants ─────────────────────────────────────────────────────────────────

const GRID_SIZE:                usize = 20;
const BOX_COUNT:                usize = 12;
const SEED:                     u64   = 42;
const TICK_DURATION_SECS:       f32   = 1.0 / 60.0; // 60 Hz driver
const TOTAL_TICKS:              u64   = 3_600;      // one simulated minute
const DETECTION_INTERVAL_TICKS: u64   = 30;         // detection at 2 Hz

// ── Warehouse population ──────────────────────────────────────────────────────

/// Scatter boxes on the warehouse floor with randomized rotation and scale.
/// The center cell is kept clear for the robot's starting position.
fn scatter_boxes(rng: &mut SimRng) -> Vec<EntitySnapshot> {
    let center = GridCoord::new(GRID_SIZE as i32 / 2, 0, GRID_SIZE as i32 / 2);
    let mut boxes = Vec::with_capacity(BOX_COUNT);
    while boxes.len() < BOX_COUNT {
        let cell = GridCoord::new(
            rng.gen_range(0..GRID_SIZE as i32),
            0,
            rng.gen_range(0..GRID_SIZE as i32),
        );
        if cell == center || boxes.iter().any(|b: &EntitySnapshot| b.position.to_cell() == cell) {
            continue;
        }
        boxes.push(EntitySnapshot::new(
            EntityId(boxes.len() as u32),
            WorldPoint::cell_center(cell),
            rng.gen_range(0.0..360.0),
            rng.gen_range(0.5..1.5),
        ));
    }
    boxes
}

// ── Observer: accumulate per-model timing and plan counts ─────────────────────

#[derive(Default)]
struct DemoObserver {
    passes:            u64,
    plans:             u64,
    baseline_time_ms:  f64,
    qina_time_ms:      f64,
    baseline_detected: u64,
    qina_detected:     u64,
}

impl SimObserver for DemoObserver {
    fn on_detection(&mut self, _tick: Tick, kind: ModelKind, result: &DetectionResult) {
        match kind {
            ModelKind::Baseline => {
                self.passes += 1;
                self.baseline_time_ms += result.process_time_ms;
                self.baseline_detected += result.detections.len() as u64;
            }
            ModelKind::Qina => {
                self.qina_time_ms += result.process_time_ms;
                self.qina_detected += result.detections.len() as u64;
            }
        }
    }

    fn on_plan(&mut self, _tick: Tick, _path: &Path) {
        self.plans += 1;
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== warehouse — warenav simulation core ===");
    println!("Grid: {GRID_SIZE}³  |  Boxes: {BOX_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. Populate the warehouse.
    let mut rng = SimRng::new(SEED);
    let boxes = scatter_boxes(&mut rng);
    let warehouse = StaticWarehouse::new(GRID_SIZE, boxes);

    // 2. Sim config.
    let config = SimConfig {
        tick_duration_secs:       TICK_DURATION_SECS,
        total_ticks:              TOTAL_TICKS,
        seed:                     SEED,
        detection_interval_ticks: DETECTION_INTERVAL_TICKS,
    };
    println!(
        "Sim: {} ticks at {:.1} Hz, detection every {} ticks",
        TOTAL_TICKS,
        1.0 / TICK_DURATION_SECS,
        DETECTION_INTERVAL_TICKS
    );
    println!();

    // 3. Build and run — Baseline drives the first half, QINA the second.
    let mut sim = SimBuilder::new(config, warehouse, AStarPlanner).build()?;
    let mut obs = DemoObserver::default();

    sim.run_ticks(TOTAL_TICKS / 2, &mut obs)?;
    sim.set_active(ModelKind::Qina);
    sim.run_ticks(TOTAL_TICKS / 2, &mut obs)?;

    // 4. Per-model summary.
    println!("{:<10} {:>10} {:>10} {:>12} {:>14}", "Model", "Evaluated", "Detected", "Miss rate", "Avg time");
    println!("{}", "-".repeat(60));
    for kind in ModelKind::ALL {
        let stats = sim.stats(kind);
        let (detected, time_ms) = match kind {
            ModelKind::Baseline => (obs.baseline_detected, obs.baseline_time_ms),
            ModelKind::Qina     => (obs.qina_detected, obs.qina_time_ms),
        };
        println!(
            "{:<10} {:>10} {:>10} {:>11.1}% {:>11.3} ms",
            kind.as_str(),
            stats.total_evaluated,
            detected,
            stats.miss_rate_pct(),
            time_ms / obs.passes.max(1) as f64,
        );
    }
    println!();

    // 5. Final robot state.
    let pose = sim.pose();
    println!("Detection passes : {}", obs.passes);
    println!("Plans issued     : {}", obs.plans);
    println!("Final position   : {}", pose.position);
    println!("Final heading    : {:.2} rad", pose.heading);
    println!("Moving           : {}", if pose.moving { "yes" } else { "no" });

    Ok(())
}
