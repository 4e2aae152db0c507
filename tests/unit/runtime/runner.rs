use super::*;
use crate::collab::graphics::SceneRecorder;
use crate::compiler::{Compiler, FrameGlobals, NoiseField, ScriptCompiler};
use rand::SeedableRng;
use rand::rngs::StdRng;

struct Harness {
    graphics: SceneRecorder,
    globals: FrameGlobals,
    rng: StdRng,
    noise: NoiseField,
    do_once: Vec<usize>,
}

impl Harness {
    fn new() -> Self {
        Self {
            graphics: SceneRecorder::new(),
            globals: FrameGlobals::default(),
            rng: StdRng::seed_from_u64(1),
            noise: NoiseField::new(),
            do_once: Vec::new(),
        }
    }

    fn tick(&mut self, runner: &mut ProgramRunner) -> TickOutcome {
        runner.tick(&mut RunContext {
            graphics: &mut self.graphics,
            globals: &mut self.globals,
            rng: &mut self.rng,
            noise: &mut self.noise,
            do_once: &mut self.do_once,
        })
    }
}

fn compile(src: &str) -> CompiledRoutine {
    ScriptCompiler.compile(src).unwrap()
}

#[test]
fn no_routine_is_idle() {
    let mut h = Harness::new();
    assert_eq!(h.tick(&mut ProgramRunner::new()), TickOutcome::Idle);
}

#[test]
fn promotion_happens_on_exactly_the_fifth_success() {
    let mut h = Harness::new();
    let mut runner = ProgramRunner::new();
    let r = compile("box");
    runner.set_routine(r.clone());
    for i in 1..=4 {
        assert!(matches!(
            h.tick(&mut runner),
            TickOutcome::Ran {
                became_stable: false,
                ..
            }
        ));
        assert!(runner.stable().is_none(), "promoted early at {i}");
    }
    assert!(matches!(
        h.tick(&mut runner),
        TickOutcome::Ran {
            became_stable: true,
            ..
        }
    ));
    assert_eq!(runner.stable(), Some(&r));
    // later successes do not promote again
    assert!(matches!(
        h.tick(&mut runner),
        TickOutcome::Ran {
            became_stable: false,
            ..
        }
    ));
}

#[test]
fn failure_reverts_to_the_stable_routine() {
    let mut h = Harness::new();
    let mut runner = ProgramRunner::new();
    let good = compile("box");
    runner.set_routine(good.clone());
    for _ in 0..STABILITY_THRESHOLD {
        h.tick(&mut runner);
    }

    let bad = compile("wobble()");
    runner.set_routine(bad);
    assert_eq!(runner.consecutive_successes(), 0);
    let TickOutcome::Failed(failure) = h.tick(&mut runner) else {
        panic!("expected a failure");
    };
    assert_eq!(failure.message, "wobble is not a function");

    runner.revert_to_stable();
    assert_eq!(runner.active(), Some(&good));
    assert_eq!(runner.consecutive_successes(), 0);
    assert!(matches!(h.tick(&mut runner), TickOutcome::Ran { .. }));
}

#[test]
fn failure_without_stable_routine_leaves_nothing_active() {
    let mut h = Harness::new();
    let mut runner = ProgramRunner::new();
    runner.set_routine(compile("wobble()"));
    assert!(matches!(h.tick(&mut runner), TickOutcome::Failed(_)));
    runner.revert_to_stable();
    assert!(runner.active().is_none());
    assert_eq!(h.tick(&mut runner), TickOutcome::Idle);
}

#[test]
fn clear_forgets_active_and_stable() {
    let mut h = Harness::new();
    let mut runner = ProgramRunner::new();
    runner.set_routine(compile("box"));
    for _ in 0..STABILITY_THRESHOLD {
        h.tick(&mut runner);
    }
    runner.clear();
    assert!(runner.active().is_none());
    assert!(runner.stable().is_none());
    assert_eq!(runner.consecutive_successes(), 0);
}

#[test]
fn executed_do_once_lines_are_reported() {
    let mut h = Harness::new();
    let mut runner = ProgramRunner::new();
    runner.set_routine(compile(";addDoOnce(2); repeat 1 -> box\nif false ->\n\t;addDoOnce(5)"));
    assert_eq!(
        h.tick(&mut runner),
        TickOutcome::Ran {
            became_stable: false,
            do_once: vec![2]
        }
    );
    assert!(h.do_once.is_empty());
}
