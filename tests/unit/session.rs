use super::*;
use crate::collab::{InMemoryRenderer, ManualClock, ManualFrameClock};
use crate::foundation::core::FrameIndex;
use crate::runtime::STABILITY_THRESHOLD;
use std::cell::RefCell;
use std::rc::Rc;

struct Rig {
    session: LiveSession,
    editor: BufferEditor,
    clock: ManualClock,
    renderer: InMemoryRenderer,
    seen: Rc<RefCell<Vec<LiveEvent>>>,
}

fn rig() -> Rig {
    let clock = ManualClock::new(0.0);
    let renderer = InMemoryRenderer::new();
    let editor = BufferEditor::default();
    let collab = Collaborators::default()
        .with_clock(clock.clone())
        .with_frame_clock(ManualFrameClock::new())
        .with_renderer(renderer.clone());
    let opts = SessionOpts {
        seed: Some(11),
        ..SessionOpts::default()
    };
    let mut session = LiveSession::new(opts, collab, Box::new(editor.clone())).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    session.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    Rig {
        session,
        editor,
        clock,
        renderer,
        seen,
    }
}

impl Rig {
    fn names(&self) -> Vec<&'static str> {
        self.seen.borrow().iter().map(LiveEvent::name).collect()
    }

    fn frame(&mut self) -> TickReport {
        self.session.run_frame().unwrap().expect("tick armed")
    }
}

#[test]
fn first_source_wakes_the_loop() {
    let mut r = rig();
    assert_eq!(r.session.loop_state(), LoopState::Idle);
    assert!(r.session.update_source("box").is_installed());
    assert_eq!(r.session.loop_state(), LoopState::Running);
    assert_eq!(r.names(), vec!["livecodelab-waking-up", "clear-error"]);

    assert_eq!(r.frame(), TickReport::Rendered(FrameIndex(0)));
    r.session.update_source("ball");
    assert_eq!(r.names().iter().filter(|n| **n == "livecodelab-waking-up").count(), 1);
}

#[test]
fn compile_errors_keep_the_previous_routine() {
    let mut r = rig();
    r.session.update_source("box");
    let before = r.session.runner().active().cloned();
    let update = r.session.update_source("box(");
    assert!(matches!(update, SourceUpdate::Rejected(LiveError::Syntax(_))));
    assert_eq!(r.session.runner().active().cloned(), before);
    assert_eq!(
        r.seen.borrow().last(),
        Some(&LiveEvent::CompileTimeErrorThrown("Unbalanced ()".into()))
    );
    assert_eq!(r.session.source(), "box(");
}

#[test]
fn empty_source_dozes_on_the_next_tick() {
    let mut r = rig();
    r.session.update_source("box");
    r.frame();
    r.frame();
    assert!(matches!(r.session.update_source(""), SourceUpdate::Cleared));
    assert_eq!(r.frame(), TickReport::Dozed);
    assert_eq!(r.session.loop_state(), LoopState::Idle);
    assert_eq!(r.session.scheduler().frame_state().frame, FrameIndex::ZERO);
    assert_eq!(r.session.run_frame().unwrap(), None);
}

#[test]
fn do_once_runs_once_and_is_ticked_in_the_editor() {
    let mut r = rig();
    r.session.load_program("doOnce -> ball\nbox");
    r.frame();
    assert_eq!(r.renderer.last().unwrap().1.draws.len(), 2);
    assert_eq!(r.session.source(), "✓doOnce -> ball\nbox");
    assert_eq!(r.editor.value(), "✓doOnce -> ball\nbox");
    assert!(r.names().contains(&"code-updated-by-livecodelab"));

    r.frame();
    assert_eq!(r.renderer.last().unwrap().1.draws.len(), 1);
}

#[test]
fn persistent_runtime_failure_without_fallback_goes_idle() {
    let mut r = rig();
    r.session.update_source("wobble");
    assert!(matches!(r.frame(), TickReport::RuntimeError(_)));
    assert_eq!(r.renderer.frame_count(), 0);
    assert_eq!(r.frame(), TickReport::Dozed);
    assert_eq!(r.session.loop_state(), LoopState::Idle);
}

#[test]
fn failure_falls_back_to_the_stable_routine() {
    let mut r = rig();
    r.session.update_source("box");
    for _ in 0..STABILITY_THRESHOLD {
        r.frame();
    }
    r.session.update_source("box\nwobble");
    assert!(matches!(r.frame(), TickReport::RuntimeError(_)));
    assert!(matches!(r.frame(), TickReport::Rendered(_)));
    assert_eq!(r.renderer.last().unwrap().1.draws.len(), 1);
}

#[test]
fn autocoder_seeds_an_empty_editor_and_mutates_on_schedule() {
    let mut r = rig();
    assert!(r.session.toggle_autocoder(None));
    assert_eq!(r.editor.value(), crate::autocoder::DEFAULT_SEED_PROGRAM);
    assert_eq!(r.seen.borrow().last(), Some(&LiveEvent::AutocoderButtonPressed(true)));
    assert!(r.session.runner().active().is_some());

    assert!(!r.session.poll_autocoder());
    r.clock.advance(999.0);
    assert!(!r.session.poll_autocoder());
    r.clock.advance(1.0);
    r.session.poll_autocoder();
    assert!(r.names().contains(&"autocoderbutton-flash"));
    assert_eq!(r.session.source(), r.editor.value());

    assert!(!r.session.toggle_autocoder(None));
    r.clock.advance(5000.0);
    assert!(!r.session.poll_autocoder());
}

#[test]
fn autocoder_keeps_existing_editor_text() {
    let mut r = rig();
    r.editor.clone().set_value("ball");
    r.session.toggle_autocoder(Some(true));
    assert_eq!(r.editor.value(), "ball");
    assert!(r.session.autocode_now());
    assert_eq!(r.editor.value(), "box");
}

#[test]
fn options_parse_from_json() {
    let opts = SessionOpts::from_json_str(r#"{"frame_rate":{"fixed":30},"seed":4}"#).unwrap();
    assert_eq!(opts.frame_rate, FrameRate::Fixed(30));
    assert_eq!(opts.seed, Some(4));
    assert_eq!(SessionOpts::from_json_str("{}").unwrap(), SessionOpts::default());
    assert!(matches!(
        SessionOpts::from_json_str("{\"seed\":\"x\"}"),
        Err(LiveError::Other(_))
    ));
}
