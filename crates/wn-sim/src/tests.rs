//! Integration tests for wn-sim.
//!
//! Deterministic profile overrides (no noise, no systematic miss) replace the
//! stock stochastic profiles wherever a test needs guaranteed outcomes.

use wn_core::{EntityId, EntitySnapshot, GridCoord, ModelKind, SimConfig, Tick, WorldPoint};
use wn_detect::{DetectionResult, DetectorProfile};
use wn_grid::{AStarPlanner, Path};

use crate::{NoopObserver, SimBuilder, SimObserver, StaticWarehouse};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64, detection_interval_ticks: u64) -> SimConfig {
    SimConfig {
        tick_duration_secs: 0.1,
        total_ticks,
        seed: 42,
        detection_interval_ticks,
    }
}

/// Profile with no stochastic terms — detects every sensable entity.
fn certain() -> DetectorProfile {
    DetectorProfile {
        threshold:       0.0,
        rot_penalty:     0.0,
        scale_penalty:   0.0,
        noise_ceiling:   0.0,
        systematic_miss: 0.0,
        time_scale:      1.0,
    }
}

/// Profile whose threshold no score can reach — detects nothing.
fn hopeless() -> DetectorProfile {
    DetectorProfile { threshold: 2.0, ..certain() }
}

fn box_at(id: u32, x: i32, z: i32) -> EntitySnapshot {
    EntitySnapshot::new(
        EntityId(id),
        WorldPoint::cell_center(GridCoord::new(x, 0, z)),
        0.0,
        1.0,
    )
}

fn single_box_warehouse() -> StaticWarehouse {
    StaticWarehouse::new(8, vec![box_at(0, 2, 2)])
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let sim = SimBuilder::new(test_config(10, 1), single_box_warehouse(), AStarPlanner)
            .build()
            .unwrap();
        assert!(sim.is_running());
        assert_eq!(sim.active(), ModelKind::Baseline);
        // Default start: center floor cell of the 8³ grid.
        assert_eq!(sim.pose().position, WorldPoint::cell_center(GridCoord::new(4, 0, 4)));
    }

    #[test]
    fn zero_detection_interval_errors() {
        let result = SimBuilder::new(test_config(10, 0), single_box_warehouse(), AStarPlanner)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_rates_error() {
        let result = SimBuilder::new(test_config(10, 1), single_box_warehouse(), AStarPlanner)
            .speed(0.0)
            .build();
        assert!(result.is_err());

        let result = SimBuilder::new(test_config(10, 1), single_box_warehouse(), AStarPlanner)
            .rotation_speed(-1.0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn non_positive_tick_duration_errors() {
        let mut config = test_config(10, 1);
        config.tick_duration_secs = 0.0;
        let result = SimBuilder::new(config, single_box_warehouse(), AStarPlanner).build();
        assert!(result.is_err());
    }

    #[test]
    fn out_of_bounds_initial_position_errors() {
        let result = SimBuilder::new(test_config(10, 1), single_box_warehouse(), AStarPlanner)
            .initial_position(WorldPoint::new(100.0, 0.5, 0.5))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn empty_warehouse_errors() {
        let warehouse = StaticWarehouse::new(0, vec![]);
        let result = SimBuilder::new(test_config(10, 1), warehouse, AStarPlanner).build();
        assert!(result.is_err());
    }

    #[test]
    fn invalid_profile_override_errors() {
        let bad = DetectorProfile { rot_penalty: -1.0, ..certain() };
        let result = SimBuilder::new(test_config(10, 1), single_box_warehouse(), AStarPlanner)
            .baseline_profile(bad)
            .build();
        assert!(result.is_err());
    }
}

// ── Driver behavior ───────────────────────────────────────────────────────────

#[cfg(test)]
mod driver_tests {
    use super::*;

    #[test]
    fn detection_of_idle_robot_issues_plan() {
        let mut sim = SimBuilder::new(test_config(10, 1), single_box_warehouse(), AStarPlanner)
            .baseline_profile(certain())
            .qina_profile(certain())
            .build()
            .unwrap();

        sim.tick(0.1, &mut NoopObserver).unwrap();

        assert_eq!(sim.detections().len(), 1);
        assert!(sim.pose().moving, "idle robot + detection must start a plan");
        assert!(!sim.pose().waypoints.is_empty());
    }

    #[test]
    fn motion_runs_before_detection_within_a_tick() {
        // Start west of the box, facing +x: the path's first waypoint lies
        // straight ahead, so no alignment ticks delay the translation.
        let mut sim = SimBuilder::new(test_config(10, 1), single_box_warehouse(), AStarPlanner)
            .baseline_profile(certain())
            .qina_profile(certain())
            .initial_position(WorldPoint::cell_center(GridCoord::new(0, 0, 2)))
            .build()
            .unwrap();

        let start = sim.pose().position;

        // Tick 1: the plan is issued after the motion phase, so the robot
        // cannot have moved yet.
        sim.tick(0.1, &mut NoopObserver).unwrap();
        assert_eq!(sim.pose().position, start);
        assert!(sim.pose().moving);

        // Tick 2: the motion phase consumes the path issued last tick.
        sim.tick(0.1, &mut NoopObserver).unwrap();
        assert_ne!(sim.pose().position, start);
    }

    #[test]
    fn paused_sim_is_inert() {
        let mut sim = SimBuilder::new(test_config(10, 1), single_box_warehouse(), AStarPlanner)
            .baseline_profile(certain())
            .qina_profile(certain())
            .build()
            .unwrap();

        sim.set_running(false);
        sim.run_ticks(5, &mut NoopObserver).unwrap();

        assert_eq!(sim.clock.current_tick, Tick(0), "paused ticks must not advance the clock");
        assert!(sim.detections().is_empty());
        assert_eq!(sim.stats(ModelKind::Baseline).total_evaluated, 0);
    }

    #[test]
    fn both_models_evaluate_every_pass() {
        let mut sim = SimBuilder::new(test_config(10, 1), single_box_warehouse(), AStarPlanner)
            .baseline_profile(hopeless())
            .qina_profile(certain())
            .build()
            .unwrap();

        sim.run_ticks(3, &mut NoopObserver).unwrap();

        // Three passes over one entity each, for both models regardless of
        // which is active.
        assert_eq!(sim.stats(ModelKind::Baseline).total_evaluated, 3);
        assert_eq!(sim.stats(ModelKind::Qina).total_evaluated, 3);
        assert_eq!(sim.stats(ModelKind::Baseline).total_missed, 3);
        assert_eq!(sim.stats(ModelKind::Qina).total_missed, 0);
    }

    #[test]
    fn active_model_selects_navigation_source() {
        // Baseline sees nothing, QINA sees the box.  With Baseline active the
        // robot stays idle; switching to QINA starts navigation.
        let mut sim = SimBuilder::new(test_config(10, 1), single_box_warehouse(), AStarPlanner)
            .baseline_profile(hopeless())
            .qina_profile(certain())
            .build()
            .unwrap();

        sim.tick(0.1, &mut NoopObserver).unwrap();
        assert!(sim.detections().is_empty());
        assert!(!sim.pose().moving);

        sim.set_active(ModelKind::Qina);
        sim.tick(0.1, &mut NoopObserver).unwrap();
        assert_eq!(sim.detections().len(), 1);
        assert!(sim.pose().moving);
    }

    #[test]
    fn detection_interval_respected() {
        struct CountDetections(usize);
        impl SimObserver for CountDetections {
            fn on_detection(&mut self, _t: Tick, _k: ModelKind, _r: &DetectionResult) {
                self.0 += 1;
            }
        }

        let mut sim = SimBuilder::new(test_config(10, 5), single_box_warehouse(), AStarPlanner)
            .baseline_profile(certain())
            .qina_profile(certain())
            .build()
            .unwrap();

        let mut obs = CountDetections(0);
        sim.run_ticks(10, &mut obs).unwrap();

        // Passes at ticks 0 and 5, two models each.
        assert_eq!(obs.0, 4);
        assert_eq!(sim.stats(ModelKind::Baseline).total_evaluated, 2);
    }

    #[test]
    fn unreachable_goal_keeps_robot_idle() {
        // The robot's start cell is walled in by boxes; the first detection
        // is a distant box.  Planning yields an empty path, which must not
        // transition the robot into moving.
        // Default start for a 10-grid is the center floor cell (5, 0, 5).
        let start = GridCoord::new(5, 0, 5);
        let mut entities = vec![box_at(0, 7, 7)];
        for (i, n) in start.planar_neighbors().enumerate() {
            entities.push(box_at(1 + i as u32, n.x, n.z));
        }
        let warehouse = StaticWarehouse::new(10, entities);

        let mut sim = SimBuilder::new(test_config(10, 1), warehouse, AStarPlanner)
            .baseline_profile(certain())
            .qina_profile(certain())
            .build()
            .unwrap();

        sim.run_ticks(3, &mut NoopObserver).unwrap();
        assert!(!sim.pose().moving);
        assert!(!sim.detections().is_empty(), "detection still happens");
    }

    #[test]
    fn enclosed_detection_is_skipped() {
        // First entity's cell has no free planar neighbor — no approach cell,
        // so no plan is issued.
        let target = GridCoord::new(2, 0, 2);
        let mut entities = vec![box_at(0, target.x, target.z)];
        for (i, n) in target.planar_neighbors().enumerate() {
            entities.push(box_at(1 + i as u32, n.x, n.z));
        }
        let warehouse = StaticWarehouse::new(10, entities);

        let mut sim = SimBuilder::new(test_config(10, 1), warehouse, AStarPlanner)
            .baseline_profile(certain())
            .qina_profile(certain())
            .build()
            .unwrap();

        sim.tick(0.1, &mut NoopObserver).unwrap();
        assert!(!sim.pose().moving);
    }

    #[test]
    fn reset_restores_pose_and_zeroes_stats() {
        let mut sim = SimBuilder::new(test_config(50, 1), single_box_warehouse(), AStarPlanner)
            .baseline_profile(hopeless())
            .qina_profile(certain())
            .active(ModelKind::Qina)
            .build()
            .unwrap();

        sim.run_ticks(10, &mut NoopObserver).unwrap();
        assert!(sim.stats(ModelKind::Baseline).total_missed > 0);

        let home = WorldPoint::cell_center(GridCoord::new(1, 0, 1));
        sim.reset(home);

        assert_eq!(sim.pose().position, home);
        assert!(!sim.pose().moving);
        assert!(sim.detections().is_empty());
        assert_eq!(sim.stats(ModelKind::Baseline).total_evaluated, 0);
        assert_eq!(sim.stats(ModelKind::Qina).total_evaluated, 0);

        // Immediately ticking after reset holds the reset position through
        // the motion phase (no stale path survives).
        sim.tick(0.1, &mut NoopObserver).unwrap();
        assert_eq!(sim.pose().position, home);
    }

    #[test]
    fn robot_reaches_approach_cell_and_settles() {
        // Full loop: detect, plan, drive, arrive.  The approach cell is the
        // +x neighbor of the box (first traversable in neighbor order), and
        // once the robot stands on it further passes plan start == goal →
        // empty path → robot stays settled.
        let mut sim = SimBuilder::new(test_config(600, 1), single_box_warehouse(), AStarPlanner)
            .baseline_profile(certain())
            .qina_profile(certain())
            .build()
            .unwrap();

        sim.run_ticks(600, &mut NoopObserver).unwrap();

        let approach = GridCoord::new(3, 0, 2); // +x neighbor of the box at (2,0,2)
        assert!(!sim.pose().moving);
        assert_eq!(sim.pose().position, WorldPoint::cell_center(approach));
        assert!(sim.grid().is_occupied(GridCoord::new(2, 0, 2)));
    }

    #[test]
    fn observer_sees_plan_and_idle_transition() {
        struct Recorder {
            plans: Vec<Path>,
            last_moving: bool,
        }
        impl SimObserver for Recorder {
            fn on_plan(&mut self, _t: Tick, path: &Path) {
                self.plans.push(path.clone());
            }
            fn on_tick_end(&mut self, _t: Tick, moving: bool) {
                self.last_moving = moving;
            }
        }

        let mut sim = SimBuilder::new(test_config(600, 1), single_box_warehouse(), AStarPlanner)
            .baseline_profile(certain())
            .qina_profile(certain())
            .build()
            .unwrap();

        let mut obs = Recorder { plans: Vec::new(), last_moving: true };
        sim.run_ticks(600, &mut obs).unwrap();

        assert_eq!(obs.plans.len(), 1, "one plan carries the robot all the way");
        assert_eq!(obs.plans[0].goal(), Some(GridCoord::new(3, 0, 2)));
        assert!(!obs.last_moving, "observer sees the idle transition");
    }

    #[test]
    fn run_completes_and_reports_end() {
        struct EndFlag(Option<Tick>);
        impl SimObserver for EndFlag {
            fn on_sim_end(&mut self, t: Tick) {
                self.0 = Some(t);
            }
        }

        let mut sim = SimBuilder::new(test_config(25, 5), single_box_warehouse(), AStarPlanner)
            .build()
            .unwrap();

        let mut obs = EndFlag(None);
        sim.run(&mut obs).unwrap();
        assert_eq!(sim.clock.current_tick, Tick(25));
        assert_eq!(obs.0, Some(Tick(25)));
    }

    #[test]
    fn same_seed_same_run() {
        let build = || {
            SimBuilder::new(test_config(50, 2), single_box_warehouse(), AStarPlanner)
                .build()
                .unwrap()
        };
        let mut a = build();
        let mut b = build();
        a.run_ticks(50, &mut NoopObserver).unwrap();
        b.run_ticks(50, &mut NoopObserver).unwrap();

        assert_eq!(a.pose().position, b.pose().position);
        assert_eq!(a.stats(ModelKind::Baseline), b.stats(ModelKind::Baseline));
        assert_eq!(a.stats(ModelKind::Qina), b.stats(ModelKind::Qina));
    }
}
