use super::*;

fn line_count(s: &str) -> usize {
    s.split('\n').count()
}

#[test]
fn ticked_block_header_becomes_if_false() {
    let src = "rotate\n✓doOnce ->\n\tbackground 255\n✓doOnce -> ball\nbox";
    let out = remove_ticked_do_once(src).unwrap();
    assert_eq!(
        out,
        "rotate\nif false ->\n\tbackground 255\n//doOnce -> ball\nbox"
    );
}

#[test]
fn syntax_check_strips_comments_but_keeps_lines() {
    let src = "box // a box\n/* two\nlines */ball\nplay \"x//y\", 'a'";
    let out = check_syntax(src).unwrap();
    assert_eq!(out, "box \n\nball\nplay \"x//y\", 'a'");
    assert_eq!(line_count(&out), line_count(src));
}

#[test]
fn syntax_check_names_the_first_unbalanced_delimiter() {
    let msg = |src: &str| check_syntax(src).unwrap_err().user_message();
    assert_eq!(msg("box("), "Unbalanced ()");
    assert_eq!(msg("box {"), "Unbalanced {}");
    assert_eq!(msg("box ]"), "Unbalanced []");
    assert_eq!(msg("play \"beat"), "Missing \"");
    assert_eq!(msg("play 'beat ("), "Missing '");
    // brackets inside strings and comments do not count
    assert!(check_syntax("play \"(\" // )").is_ok());
}

#[test]
fn postfix_forms_become_prefix() {
    let out = adjust_postfix_notation("60 bpm\nred fill\nblue stroke\nblack background").unwrap();
    assert_eq!(out, "bpm 60\nfill red\nstroke blue\nbackground black");
}

#[test]
fn times_loops_become_repeat() {
    let out = desugar_times("5 times ->\n\t3 times -> box").unwrap();
    assert_eq!(out, ";repeat 5 ->\n\t;repeat 3 -> box");
}

#[test]
fn do_once_is_instrumented_with_its_line() {
    let src = "rotate\ndoOnce -> ball\ndoOnce ->\n\tbackground 255\nbox";
    let out = instrument_do_once(src).unwrap();
    assert_eq!(
        out,
        "rotate\n;addDoOnce(1); repeat 1 -> ball\nrepeat 1 ->\n\t;addDoOnce(2); background 255\nbox"
    );
}

#[test]
fn do_once_header_with_trailing_spaces_is_a_block() {
    let out = instrument_do_once("doOnce ->  \n  box").unwrap();
    assert_eq!(out, "repeat 1 ->\n  ;addDoOnce(0); box");
}

#[test]
fn calling_draw_is_rejected() {
    let err = reject_draw_calls("box\n draw()").unwrap_err();
    assert_eq!(err.user_message(), "You can't call draw()");
    assert!(reject_draw_calls("redraw(1)").is_ok());
}

#[test]
fn lone_words_become_calls() {
    let out = normalize_barewords("box\n\tnoFill ; ball\nrepeat 1 -> peg\nelse\nbox 1\nplay \"a;b\"").unwrap();
    assert_eq!(
        out,
        "box()\n\tnoFill() ; ball()\nrepeat 1 -> peg()\nelse\nbox 1\nplay \"a;b\""
    );
}

#[test]
fn commands_with_arguments_start_new_statements() {
    let out = separate_commands("scale 2\n\trotate 1 box 2\nplay \"move it\", \"x\"\nx_box 1").unwrap();
    assert_eq!(
        out,
        "scale 2\n\t;rotate 1 ;box 2\n;play \"move it\", \"x\"\nx_box 1"
    );
}

#[test]
fn builtins_are_not_separated() {
    let out = separate_commands("x = 1\nrotate sin time").unwrap();
    assert_eq!(out, "x = 1\n;rotate sin time");
    let out = separate_commands("x = noise time\nbox 1 noiseSeed 3").unwrap();
    assert_eq!(out, "x = noise time\n;box 1 ;noiseSeed 3");
}

#[test]
fn marking_is_idempotent() {
    let src = "doOnce -> ball\n  doOnce ->\n    box\nrotate";
    let once = mark_do_once_lines(src, &[0, 1]);
    assert_eq!(once, "✓doOnce -> ball\n  ✓doOnce ->\n    box\nrotate");
    assert_eq!(mark_do_once_lines(&once, &[0, 1]), once);
    // lines without a doOnce header or out of range are ignored
    assert_eq!(mark_do_once_lines(src, &[3, 99]), src);
}

#[test]
fn every_pass_preserves_line_count() {
    let src = "// header\n60 bpm\ndoOnce ->\n\tred fill\n/* a\nb */\n5 times -> box\n✓doOnce -> ball\nnoStroke";
    let mut code = src.to_owned();
    for (name, pass) in PASSES {
        code = pass(&code).unwrap();
        assert_eq!(line_count(&code), line_count(src), "pass {name}");
    }
}
