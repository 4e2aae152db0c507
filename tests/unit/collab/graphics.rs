use super::*;

fn run(rec: &mut SceneRecorder, name: &'static str, args: &[Value]) {
    rec.command(CommandCall {
        name,
        args,
        time_ms: 0.0,
    })
    .unwrap();
}

fn nums(v: &[f64]) -> Vec<Value> {
    v.iter().copied().map(Value::Num).collect()
}

#[test]
fn shape_sizes_expand_from_short_argument_lists() {
    let mut rec = SceneRecorder::new();
    run(&mut rec, "box", &[]);
    run(&mut rec, "box", &nums(&[2.0]));
    run(&mut rec, "rect", &nums(&[2.0, 3.0]));
    run(&mut rec, "peg", &nums(&[1.0, 2.0, 3.0]));
    let sizes: Vec<_> = rec.scene().draws.iter().map(|d| d.size).collect();
    assert_eq!(
        sizes,
        vec![
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 2.0],
            [2.0, 3.0, 1.0],
            [1.0, 2.0, 3.0]
        ]
    );
}

#[test]
fn push_and_pop_restore_the_world_matrix() {
    let mut rec = SceneRecorder::new();
    run(&mut rec, "pushMatrix", &[]);
    run(&mut rec, "move", &nums(&[1.0, 2.0, 3.0]));
    run(&mut rec, "box", &[]);
    run(&mut rec, "popMatrix", &[]);
    run(&mut rec, "box", &[]);
    // empty stack falls back to identity
    run(&mut rec, "popMatrix", &[]);
    run(&mut rec, "ball", &[]);

    let draws = &rec.scene().draws;
    assert_eq!(draws[0].transform, Mat4::translation(1.0, 2.0, 3.0));
    assert_eq!(draws[1].transform, Mat4::IDENTITY);
    assert_eq!(draws[2].transform, Mat4::IDENTITY);
    assert_eq!(draws[2].detail, Some(Scene::DEFAULT_BALL_DETAIL));
}

#[test]
fn shapes_without_fill_or_stroke_are_skipped() {
    let mut rec = SceneRecorder::new();
    run(&mut rec, "noFill", &[]);
    run(&mut rec, "box", &[]);
    assert!(rec.scene().draws.is_empty());

    run(&mut rec, "stroke", &[Value::Colour(Rgba8::rgb(255, 0, 0))]);
    run(&mut rec, "strokeSize", &nums(&[-3.0]));
    run(&mut rec, "line", &[]);
    let d = &rec.scene().draws[0];
    assert_eq!(d.fill, None);
    assert_eq!(d.stroke, Some(Rgba8::rgb(255, 0, 0)));
    assert_eq!(d.stroke_size, 0.0);
}

#[test]
fn scene_settings_are_clamped() {
    let mut rec = SceneRecorder::new();
    run(&mut rec, "ballDetail", &nums(&[100.0]));
    run(&mut rec, "bpm", &nums(&[400.0]));
    run(
        &mut rec,
        "play",
        &[Value::Str("thump".into()), Value::Str("x - x -".into())],
    );
    run(&mut rec, "animationStyle", &[Value::Str("paintOver".into())]);
    let scene = rec.scene();
    assert_eq!(scene.ball_detail, 30);
    assert_eq!(scene.bpm, Some(125.0));
    assert_eq!(scene.sound_cues[0].pattern, "x-x-");
    assert_eq!(scene.animation_style, AnimationStyle::PaintOver);
}

#[test]
fn reset_frame_clears_scene_and_style() {
    let mut rec = SceneRecorder::new();
    run(&mut rec, "noFill", &[]);
    run(&mut rec, "background", &nums(&[10.0]));
    rec.reset_frame();
    assert_eq!(rec.scene(), &Scene::default());
    run(&mut rec, "box", &[]);
    assert_eq!(rec.scene().draws[0].fill, Some(Rgba8::WHITE));
}

#[test]
fn bad_arguments_fail_the_command() {
    let mut rec = SceneRecorder::new();
    let err = rec
        .command(CommandCall {
            name: "box",
            args: &[Value::Str("big".into())],
            time_ms: 0.0,
        })
        .unwrap_err();
    assert!(err.message.starts_with("box:"), "{}", err.message);

    let err = rec
        .command(CommandCall {
            name: "animationStyle",
            args: &[Value::Str("sideways".into())],
            time_ms: 0.0,
        })
        .unwrap_err();
    assert!(err.message.contains("sideways"));
}

#[test]
fn rotate_without_arguments_follows_time() {
    let mut rec = SceneRecorder::new();
    rec.command(CommandCall {
        name: "rotate",
        args: &[],
        time_ms: 2000.0,
    })
    .unwrap();
    run(&mut rec, "box", &[]);
    assert_eq!(rec.scene().draws[0].transform, Mat4::rotation(2.0, 2.0, 2.0));
}
