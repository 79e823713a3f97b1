// Integration tests for the sorting visualizer

use rand::rngs::StdRng;
use rand::SeedableRng;
use sortty::algorithms::{Algorithm, Operation, SortStep};
use sortty::array::{generate, is_permutation_of, is_sorted, ArrayState};
use sortty::config::Settings;
use sortty::constants::{DELAY_MAX, DELAY_MIN, SIZE_MAX, SIZE_MIN, VALUE_MAX, VALUE_MIN};
use sortty::session::{RunState, Session};
use std::time::{Duration, Instant};

fn settings(algorithm: Algorithm, size: usize, delay: f64) -> Settings {
    Settings {
        algorithm,
        size,
        delay,
        seed: Some(2024),
        ..Settings::default()
    }
}

/// Tick the session at `interval` until it goes idle, returning how many steps were taken
fn drive(session: &mut Session, interval: Duration) -> usize {
    let mut now = Instant::now();
    let mut steps = 0;
    while session.is_running() {
        if session.tick(now) {
            steps += 1;
        }
        now += interval;
    }
    steps
}

#[test]
fn test_every_algorithm_sorts_random_arrays() {
    let mut rng = StdRng::seed_from_u64(77);

    for _ in 0..20 {
        let input = generate(rand::Rng::gen_range(&mut rng, SIZE_MIN..=SIZE_MAX), &mut rng);
        for algorithm in Algorithm::ALL {
            let mut values = input.clone();
            algorithm
                .engine(values.len())
                .run_to_completion(&mut values);

            assert!(is_sorted(&values), "{} failed on {:?}", algorithm, input);
            assert!(is_permutation_of(&input, &values));
        }
    }
}

#[test]
fn test_bubble_scenario_through_session() {
    let mut session = Session::with_values(
        &settings(Algorithm::Bubble, 4, DELAY_MIN),
        vec![5, 3, 8, 1],
    );
    assert!(session.on_start());

    let t0 = Instant::now();
    session.tick(t0);
    assert_eq!(session.frame().values, vec![3, 5, 8, 1]);
    assert_eq!(session.frame().highlights.indices(), &[0, 1]);

    session.tick(t0 + Duration::from_secs(1));
    assert_eq!(session.frame().values, vec![3, 5, 8, 1]);
    assert_eq!(session.frame().highlights.indices(), &[1, 2]);

    session.tick(t0 + Duration::from_secs(2));
    assert_eq!(session.frame().values, vec![3, 5, 1, 8]);
    assert_eq!(session.frame().highlights.indices(), &[2, 3]);

    drive(&mut session, Duration::from_secs(1));
    assert_eq!(session.frame().values, vec![1, 3, 5, 8]);
    assert_eq!(session.run_state(), RunState::Idle);
}

#[test]
fn test_quick_scenario_two_elements() {
    let mut values = vec![2, 1];
    let steps = Algorithm::Quick.engine(2).run_to_completion(&mut values);

    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].op, Operation::Swap(0, 1));
    assert_eq!(values, vec![1, 2]);
}

#[test]
fn test_merge_scenario() {
    let mut values = vec![4, 2, 5, 1];
    let mut engine = Algorithm::Merge.engine(values.len());

    for _ in 0..4 {
        engine.step(&mut values);
    }
    assert_eq!(values, vec![2, 4, 1, 5]);

    engine.run_to_completion(&mut values);
    assert_eq!(values, vec![1, 2, 4, 5]);
}

#[test]
fn test_reset_twice_gives_independent_arrays() {
    let mut session = Session::new(&settings(Algorithm::Bubble, 40, 0.1));

    session.on_reset();
    let first = session.frame().values.clone();
    session.on_reset();
    let second = session.frame().values.clone();

    for values in [&first, &second] {
        assert_eq!(values.len(), 40);
        assert!(values.iter().all(|v| (VALUE_MIN..=VALUE_MAX).contains(v)));
    }
    assert_ne!(first, second);
}

#[test]
fn test_size_and_delay_boundaries_step_every_mutation() {
    for size in [SIZE_MIN, SIZE_MAX] {
        for delay in [DELAY_MIN, DELAY_MAX] {
            for algorithm in Algorithm::ALL {
                let mut session = Session::new(&settings(algorithm, size, delay));
                let before = session.frame().values.clone();

                // Reference run: how many steps the algorithm needs on this input
                let mut reference = before.clone();
                let expected = algorithm
                    .engine(size)
                    .run_to_completion(&mut reference)
                    .len();

                session.on_start();
                // Ticks at a fifth of the delay: most ticks must do nothing
                let steps = drive(&mut session, Duration::from_secs_f64(delay / 5.0));

                assert_eq!(steps, expected, "{} size {} delay {}", algorithm, size, delay);
                assert_eq!(session.frame().values, reference);
                assert!(is_permutation_of(&before, &session.frame().values));
            }
        }
    }
}

#[test]
fn test_start_while_running_is_ignored() {
    let mut session = Session::new(&settings(Algorithm::Selection, 30, 0.1));
    assert!(session.on_start());
    session.tick(Instant::now());

    let frame = session.frame().clone();
    assert!(!session.on_start());
    assert!(session.is_running());
    assert_eq!(session.frame(), &frame);
    assert_eq!(session.algorithm_running(), Some(Algorithm::Selection));
}

#[test]
fn test_highlights_stay_in_bounds_through_session() {
    for algorithm in Algorithm::ALL {
        let mut session = Session::new(&settings(algorithm, 33, DELAY_MIN));
        session.on_start();

        let mut now = Instant::now();
        while session.is_running() {
            session.tick(now);
            let frame: &ArrayState = session.frame();
            assert!(frame.highlights.in_bounds(frame.len()));
            now += Duration::from_millis(20);
        }
    }
}

#[test]
fn test_paused_session_can_rewind_to_start() {
    let mut session = Session::new(&settings(Algorithm::Insertion, 20, DELAY_MIN));
    let start = session.frame().values.clone();
    session.on_start();

    let mut now = Instant::now();
    for _ in 0..15 {
        session.tick(now);
        now += Duration::from_millis(20);
    }
    session.toggle_pause();

    while session.step_backward() {}
    assert_eq!(session.history_position(), 0);
    assert_eq!(session.frame().values, start);

    // resuming replays recorded frames, then finishes normally
    session.toggle_pause();
    drive(&mut session, Duration::from_millis(20));
    assert!(is_sorted(&session.frame().values));
}
