use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn mesh_mutation_is_an_involution() {
    let mut rng = rng();
    let boxed = Token::new(TokenKind::Mesh, "box");
    let once = mutate(&boxed, &mut rng);
    assert_eq!(once.text, "ball");
    assert_eq!(mutate(&once, &mut rng), boxed);

    assert_eq!(mutate(&Token::new(TokenKind::Mesh, "line"), &mut rng).text, "rect");
    assert_eq!(mutate(&Token::new(TokenKind::Mesh, "rect"), &mut rng).text, "line");
}

#[test]
fn unpaired_mesh_is_inert() {
    let peg = Token::new(TokenKind::Mesh, "peg");
    assert!(!peg.is_mutable());
    assert_eq!(mutate(&peg, &mut rng()), peg);
}

#[test]
fn number_mutation_stays_within_proportional_band() {
    let mut rng = rng();
    let t = Token::new(TokenKind::Num, "10");
    for _ in 0..200 {
        let m = mutate(&t, &mut rng);
        let v: f64 = m.text.parse().unwrap();
        assert!((0.0..=20.0).contains(&v), "{v}");
        let (_, frac) = m.text.split_once('.').unwrap();
        assert_eq!(frac.len(), 2);
    }
}

#[test]
fn zero_is_nudged_before_jitter() {
    let mut rng = rng();
    let m = mutate(&Token::new(TokenKind::Num, "0"), &mut rng);
    let v: f64 = m.text.parse().unwrap();
    assert!((0.0..=0.2).contains(&v));
}

#[test]
fn iteration_count_moves_by_one_and_keeps_layout() {
    let mut rng = rng();
    let t = Token::new(TokenKind::Iteration, "12  times ->");
    for _ in 0..50 {
        let m = mutate(&t, &mut rng);
        assert!(m.text == "13  times ->" || m.text == "11  times ->", "{}", m.text);
    }
    let zero = Token::new(TokenKind::Iteration, "0 times ->");
    assert_eq!(mutate(&zero, &mut rng).text, "1 times ->");
}

#[test]
fn colour_mutation_always_changes_the_name() {
    let mut rng = rng();
    let t = Token::new(TokenKind::Colour, "red");
    for _ in 0..100 {
        let m = mutate(&t, &mut rng);
        assert_ne!(m.text, "red");
        assert!(palette::is_colour_name(&m.text));
    }
}

#[test]
fn inert_kinds_do_not_change() {
    let t = Token::new(TokenKind::Translation, "rotate");
    assert!(!t.is_mutable());
    assert_eq!(mutate(&t, &mut rng()), t);
}
