//! Property tests for the gameplay loop invariants

use hoppy_bunny::consts::{FIXED_DT, MAX_ANGULAR_SPEED, MAX_RISE_SPEED};
use hoppy_bunny::degrees_to_radians;
use hoppy_bunny::sim::{GameState, RunPhase, Tier, contact, tick};
use hoppy_bunny::Tuning;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

proptest! {
    #[test]
    fn rise_speed_never_exceeds_cap(vy in -5000.0f32..5000.0, dt in 0.001f32..0.1) {
        let tuning = Tuning::classic();
        let mut state = GameState::new(&tuning);
        state.hero.vel.y = vy;
        tick(&mut state, &tuning, dt, &mut Pcg32::seed_from_u64(0));
        prop_assert!(state.hero.vel.y <= MAX_RISE_SPEED);
    }

    #[test]
    fn rotation_and_spin_stay_bounded(
        rotation in -10.0f32..10.0,
        spin in -100.0f32..100.0,
        since_touch in 0.0f32..1.0,
        dt in 0.001f32..0.1,
    ) {
        let tuning = Tuning::classic();
        let mut state = GameState::new(&tuning);
        state.hero.rotation = rotation;
        state.hero.angular_vel = spin;
        state.since_touch = since_touch;
        tick(&mut state, &tuning, dt, &mut Pcg32::seed_from_u64(0));

        prop_assert!(state.hero.rotation >= degrees_to_radians(-90.0));
        prop_assert!(state.hero.rotation <= degrees_to_radians(30.0));
        prop_assert!(state.hero.angular_vel.abs() <= MAX_ANGULAR_SPEED);
    }

    #[test]
    fn tier_is_a_function_of_score(score in 0u32..10_000) {
        let expected = if score < 5 {
            Tier::Easy
        } else if score < 10 {
            Tier::Medium
        } else {
            Tier::Hard
        };
        prop_assert_eq!(Tier::for_score(score), expected);
    }

    #[test]
    fn score_counts_goals_until_crash(hits in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut state = GameState::new(&Tuning::leveled());
        let mut expected = 0u32;
        let mut crashed = false;

        for is_goal in hits {
            let before = state.score;
            let tag = if is_goal { "goal" } else { "obstacle" };
            contact(&mut state, Some("hero"), Some(tag));

            prop_assert!(state.score >= before);
            if !crashed {
                if is_goal {
                    expected += 1;
                } else {
                    crashed = true;
                }
            }
            prop_assert_eq!(state.score, expected);
        }
        prop_assert_eq!(state.phase == RunPhase::GameOver, crashed);
    }

    #[test]
    fn due_spawn_adds_exactly_one_in_band(seed in any::<u64>(), leveled in any::<bool>()) {
        let tuning = if leveled { Tuning::leveled() } else { Tuning::classic() };
        let mut state = GameState::new(&tuning);
        state.spawn_timer = tuning.obstacles.spawn_interval - FIXED_DT / 2.0;

        tick(&mut state, &tuning, FIXED_DT, &mut Pcg32::seed_from_u64(seed));

        prop_assert_eq!(state.obstacle_layer.obstacles.len(), 1);
        prop_assert_eq!(state.spawn_timer, 0.0);
        let obstacle = state.obstacle_layer.obstacles[0];
        prop_assert!((18.0..=166.0).contains(&obstacle.y));
        let x = state.obstacle_layer.scene_x(&obstacle);
        prop_assert!((x - tuning.obstacles.spawn_x).abs() < 1e-3);
    }

    #[test]
    fn game_over_frames_change_nothing(dt in 0.0f32..1.0, frames in 1usize..20) {
        let tuning = Tuning::leveled();
        let mut state = GameState::new(&tuning);
        state.score = 11;
        contact(&mut state, Some("hero"), Some("ceiling"));

        let before = serde_json::to_string(&state).unwrap();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..frames {
            prop_assert!(tick(&mut state, &tuning, dt, &mut rng).is_empty());
        }
        prop_assert_eq!(before, serde_json::to_string(&state).unwrap());
    }
}
