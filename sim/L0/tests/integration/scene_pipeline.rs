//! Multi-frame scene runs through the umbrella prelude.

use sim_physics::prelude::*;
use sim_scene::bird::names;

use crate::test_utils::{FRAME_DT, assert_transform_near};

fn small_scene() -> SceneConfig {
    SceneConfig {
        cloth: HangingClothConfig::default().with_samples(8),
        fountain: FountainConfig::default().with_max_particles(30),
        ..Default::default()
    }
}

fn run(runner: &mut SceneRunner, frames: u32) {
    for k in 0..frames {
        if k % 45 == 0 {
            runner.flap();
        }
        runner.frame(FRAME_DT).unwrap();
    }
}

#[test]
fn identical_configs_produce_identical_runs() {
    let mut a = SceneRunner::new(&small_scene()).unwrap();
    let mut b = SceneRunner::new(&small_scene()).unwrap();

    run(&mut a, 240);
    run(&mut b, 240);

    assert_eq!(a.fountain().particles(), b.fountain().particles());
    assert_eq!(a.cloth().state(), b.cloth().state());
    for node in a.bird_hierarchy().iter() {
        assert_eq!(
            node.global(),
            b.bird_hierarchy().global(node.name()).unwrap()
        );
    }
}

#[test]
fn bird_globals_compose_locals_after_animation() {
    let mut runner = SceneRunner::new(&small_scene()).unwrap();
    run(&mut runner, 90);
    let h = runner.bird_hierarchy();

    let body = *h.local(names::BODY).unwrap();
    let up_right = *h.local(names::UP_RIGHT_WING).unwrap();
    let low_right = *h.local(names::LOW_RIGHT_WING).unwrap();
    let head = *h.local(names::HEAD).unwrap();
    let nose = *h.local(names::NOSE).unwrap();

    assert_transform_near(
        h.global(names::LOW_RIGHT_WING).unwrap(),
        &body.compose(&up_right).compose(&low_right),
    );
    assert_transform_near(
        h.global(names::NOSE).unwrap(),
        &body.compose(&head).compose(&nose),
    );
    assert_eq!(h.parent_of(names::TUBE_TOP).unwrap(), Some(names::TUBE));
    assert_eq!(h.parent_of(names::TUBE).unwrap(), None);
}

#[test]
fn tube_scrolls_each_frame() {
    let mut runner = SceneRunner::new(&small_scene()).unwrap();
    runner.frame(FRAME_DT).unwrap();
    let x0 = runner.bird_hierarchy().local(names::TUBE).unwrap().translation.x;

    for _ in 0..10 {
        runner.frame(FRAME_DT).unwrap();
    }

    let x1 = runner.bird_hierarchy().local(names::TUBE).unwrap().translation.x;
    assert!((x0 - x1 - 10.0 * 0.03).abs() < 1e-9);
}

#[test]
fn fountain_and_cloth_stay_finite() {
    let mut runner = SceneRunner::new(&small_scene()).unwrap();
    for _ in 0..600 {
        let report = runner.frame(FRAME_DT).unwrap();
        assert!(report.cloth.is_some_and(|outcome| !outcome.is_diverged()));
    }

    assert_eq!(runner.fountain().particles().len(), 30);
    assert!(runner.fountain().particles().iter().all(Particle::is_finite));
    assert!(runner.cloth().state().is_finite());
    assert!(runner.cloth().ensure_stable().is_ok());
}

#[test]
fn invalid_timestep_rejected_without_advancing() {
    let mut runner = SceneRunner::new(&small_scene()).unwrap();
    runner.frame(FRAME_DT).unwrap();

    for dt in [-FRAME_DT, f64::NAN, f64::INFINITY] {
        let err = runner.frame(dt).unwrap_err();
        assert!(matches!(err, SceneError::Sim(_)), "dt = {dt}");
    }

    assert_eq!(runner.clock().frames(), 1);
    assert_eq!(runner.cloth().simulation().steps(), 1);
}
