use super::*;
use crate::collab::{InMemoryRenderer, ManualClock, ManualFrameClock};
use crate::compiler::{CompiledRoutine, Compiler, ScriptCompiler};
use crate::runtime::runner::STABILITY_THRESHOLD;
use std::cell::RefCell;
use std::rc::Rc;

struct Rig {
    scheduler: FrameScheduler,
    runner: ProgramRunner,
    events: EventBus,
    seen: Rc<RefCell<Vec<LiveEvent>>>,
    clock: ManualClock,
    frames: ManualFrameClock,
    renderer: InMemoryRenderer,
}

impl Rig {
    fn new() -> Self {
        let clock = ManualClock::new(1000.0);
        let frames = ManualFrameClock::new();
        let renderer = InMemoryRenderer::new();
        let collab = Collaborators::default()
            .with_clock(clock.clone())
            .with_frame_clock(frames.clone())
            .with_renderer(renderer.clone());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut events = EventBus::new();
        let sink = seen.clone();
        events.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        Self {
            scheduler: FrameScheduler::new(collab, FrameRate::AsFastAsPossible, Some(3)),
            runner: ProgramRunner::new(),
            events,
            seen,
            clock,
            frames,
            renderer,
        }
    }

    fn install(&mut self, src: &str) -> CompiledRoutine {
        let r = ScriptCompiler.compile(src).unwrap();
        self.runner.set_routine(r.clone());
        r
    }

    fn tick(&mut self) -> TickReport {
        self.scheduler
            .tick(&mut self.runner, &mut self.events, &mut NoBookkeeping)
            .unwrap()
    }

    fn event_names(&self) -> Vec<&'static str> {
        self.seen.borrow().iter().map(LiveEvent::name).collect()
    }
}

#[test]
fn successful_ticks_render_and_advance_the_frame() {
    let mut rig = Rig::new();
    rig.install(";repeat 3 ->\n\t;box");
    rig.scheduler.start();
    assert_eq!(rig.scheduler.state(), LoopState::Running);

    assert_eq!(rig.tick(), TickReport::Rendered(FrameIndex(0)));
    rig.clock.advance(16.0);
    assert_eq!(rig.tick(), TickReport::Rendered(FrameIndex(1)));

    let fs = rig.scheduler.frame_state();
    assert_eq!(fs.frame, FrameIndex(2));
    assert_eq!(fs.elapsed_ms, 16.0);
    assert_eq!(rig.renderer.frames(), vec![FrameIndex(0), FrameIndex(1)]);
    assert_eq!(rig.renderer.last().unwrap().1.draws.len(), 3);
    // start plus one arm per tick with an active routine
    assert_eq!(rig.frames.scheduled(), 3);
}

#[test]
fn time_reads_elapsed_milliseconds_since_frame_zero() {
    let mut rig = Rig::new();
    rig.install("if time >= 100 -> box");
    rig.scheduler.start();
    rig.tick();
    assert!(rig.scheduler.scene().draws.is_empty());
    rig.clock.advance(150.0);
    rig.tick();
    assert_eq!(rig.scheduler.scene().draws.len(), 1);
}

#[test]
fn promotion_is_announced_once() {
    let mut rig = Rig::new();
    rig.install("box");
    rig.scheduler.start();
    for _ in 0..STABILITY_THRESHOLD + 2 {
        rig.tick();
    }
    assert_eq!(rig.event_names(), vec!["livecodelab-running-stably"]);
}

#[test]
fn runtime_failure_skips_rendering_and_falls_back() {
    let mut rig = Rig::new();
    let good = rig.install("box");
    rig.scheduler.start();
    for _ in 0..STABILITY_THRESHOLD {
        rig.tick();
    }
    let rendered = rig.renderer.frame_count();

    rig.install(";box\n;wobble 1");
    let report = rig.tick();
    assert!(matches!(report, TickReport::RuntimeError(ref f) if f.message == "wobble is not a function"));
    assert_eq!(rig.renderer.frame_count(), rendered);
    assert_eq!(rig.runner.active(), Some(&good));
    assert_eq!(
        rig.seen.borrow().last(),
        Some(&LiveEvent::RuntimeErrorThrown("wobble is not a function".into()))
    );

    // the frame index did not move for the failed tick
    let before = rig.scheduler.frame_state().frame;
    assert!(matches!(rig.tick(), TickReport::Rendered(f) if f == before));
}

#[test]
fn no_routine_dozes_with_frame_zero() {
    let mut rig = Rig::new();
    rig.install("box");
    rig.scheduler.start();
    rig.tick();
    rig.tick();
    rig.runner.clear();
    let armed = rig.frames.scheduled();

    assert_eq!(rig.tick(), TickReport::Dozed);
    assert_eq!(rig.scheduler.state(), LoopState::Idle);
    assert_eq!(rig.scheduler.frame_state().frame, FrameIndex::ZERO);
    assert_eq!(rig.renderer.dozes(), 1);
    // dozing does not arm another tick
    assert_eq!(rig.frames.scheduled(), armed);
    // the idle scene is still rendered
    assert_eq!(rig.renderer.frames().last(), Some(&FrameIndex::ZERO));
}

#[test]
fn frame_assignment_is_applied_after_the_run() {
    let mut rig = Rig::new();
    rig.install("if frame == 2 -> frame = 10");
    rig.scheduler.start();
    rig.tick();
    rig.tick();
    rig.clock.advance(40.0);
    assert_eq!(rig.tick(), TickReport::Rendered(FrameIndex(10)));
    assert_eq!(rig.scheduler.frame_state().frame, FrameIndex(11));

    // assigning frame 0 restarts the time base
    rig.install("frame = 0");
    rig.clock.advance(500.0);
    rig.tick();
    rig.clock.advance(20.0);
    rig.tick();
    assert_eq!(rig.scheduler.frame_state().elapsed_ms, 20.0);
}

#[test]
fn wake_only_restarts_an_idle_loop() {
    let mut rig = Rig::new();
    assert!(rig.scheduler.wake());
    assert_eq!(rig.scheduler.state(), LoopState::Running);
    assert!(!rig.scheduler.wake());
    rig.scheduler.stop();
    assert!(!rig.scheduler.wait_for_tick());
}

struct Recorder(Vec<Vec<usize>>);

impl Bookkeeping for Recorder {
    fn do_once_executed(&mut self, runner: &mut ProgramRunner, _: &mut EventBus, lines: &[usize]) {
        self.0.push(lines.to_vec());
        runner.set_routine(ScriptCompiler.compile("ball").unwrap());
    }
}

#[test]
fn do_once_bookkeeping_runs_after_a_successful_tick() {
    let mut rig = Rig::new();
    rig.install(";addDoOnce(0); repeat 1 -> box");
    rig.scheduler.start();
    let mut rec = Recorder(Vec::new());
    rig.scheduler
        .tick(&mut rig.runner, &mut rig.events, &mut rec)
        .unwrap();
    assert_eq!(rec.0, vec![vec![0]]);
    rig.scheduler
        .tick(&mut rig.runner, &mut rig.events, &mut rec)
        .unwrap();
    assert_eq!(rec.0.len(), 1);
}
