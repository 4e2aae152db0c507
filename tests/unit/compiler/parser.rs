use super::*;

fn call_names(stmts: &[Stmt]) -> Vec<String> {
    stmts
        .iter()
        .filter_map(|s| match s {
            Stmt::Expr(Expr::Call { func, .. }) => Some(func.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn implicit_calls_take_comma_separated_arguments() {
    let prog = parse_program("rotate 0,1,time/5000").unwrap();
    match &prog[..] {
        [Stmt::Expr(Expr::Call { func, args, .. })] => {
            assert_eq!(func, "rotate");
            assert_eq!(args.len(), 3);
            assert!(matches!(args[2], Expr::Binary { op: BinaryOp::Div, .. }));
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn semicolons_separate_statements_on_one_line() {
    let prog = parse_program(";scale 2 ;box; ;ball()").unwrap();
    assert_eq!(call_names(&prog), vec!["scale", "box", "ball"]);
}

#[test]
fn repeat_with_indented_block() {
    let prog = parse_program(";repeat 3 ->\n\t;box\n\t;ball 1\nline").unwrap();
    assert_eq!(prog.len(), 2);
    match &prog[0] {
        Stmt::Repeat { count, body } => {
            assert_eq!(*count, Expr::Lit(Lit::Num(3.0)));
            assert_eq!(call_names(body), vec!["box", "ball"]);
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn repeat_with_inline_body_takes_the_rest_of_the_line() {
    let prog = parse_program(";addDoOnce(0); repeat 1 -> box; ball\npeg").unwrap();
    assert_eq!(prog.len(), 3);
    match &prog[1] {
        Stmt::Repeat { body, .. } => assert_eq!(call_names(body), vec!["box", "ball"]),
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn else_if_chains_attach_to_the_first_if() {
    let src = "if a > 1 -> box\nelse if a > 0\n\tball\nelse -> peg";
    let prog = parse_program(src).unwrap();
    assert_eq!(prog.len(), 1);
    let Stmt::If { else_body, .. } = &prog[0] else {
        panic!("expected if");
    };
    let Some([Stmt::If { then_body, else_body, .. }]) = else_body.as_deref() else {
        panic!("expected else-if");
    };
    assert_eq!(call_names(then_body), vec!["ball"]);
    assert_eq!(call_names(else_body.as_deref().unwrap()), vec!["peg"]);
}

#[test]
fn dangling_else_is_an_error() {
    let err = parse_program("box\nelse -> ball").unwrap_err();
    assert_eq!(err.line, 2);
}

#[test]
fn adjacent_parenthesis_is_a_call_and_spaced_one_an_argument() {
    let prog = parse_program("x = color(1,2,3)\nbox (1+2)*3").unwrap();
    match &prog[0] {
        Stmt::Assign { value: Expr::Call { func, args, .. }, .. } => {
            assert_eq!(func, "color");
            assert_eq!(args.len(), 3);
        }
        other => panic!("unexpected ast: {other:?}"),
    }
    match &prog[1] {
        Stmt::Expr(Expr::Call { func, args, .. }) => {
            assert_eq!(func, "box");
            assert!(matches!(args[..], [Expr::Binary { op: BinaryOp::Mul, .. }]));
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn minus_binds_as_argument_only_when_glued() {
    let prog = parse_program("move -1\nx = y -1\nz = y - 1").unwrap();
    assert!(matches!(
        &prog[0],
        Stmt::Expr(Expr::Call { args, .. }) if matches!(args[..], [Expr::Unary { op: UnaryOp::Neg, .. }])
    ));
    for stmt in &prog[1..] {
        assert!(matches!(
            stmt,
            Stmt::Assign { value: Expr::Binary { op: BinaryOp::Sub, .. }, .. }
        ));
    }
}

#[test]
fn nested_implicit_call_is_greedy() {
    let prog = parse_program("rotate sin time, 2").unwrap();
    match &prog[0] {
        Stmt::Expr(Expr::Call { func, args, .. }) => {
            assert_eq!(func, "rotate");
            assert!(matches!(&args[..], [Expr::Call { func, args, .. }] if func == "sin" && args.len() == 2));
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn word_operators_and_compound_assignment() {
    let prog = parse_program("x += 1\nif not x and true or false -> box").unwrap();
    assert!(matches!(prog[0], Stmt::Assign { op: AssignOp::Add, .. }));
    assert!(matches!(
        &prog[1],
        Stmt::If { cond: Expr::Binary { op: BinaryOp::Or, .. }, .. }
    ));
}

#[test]
fn bare_command_is_a_zero_argument_call() {
    let prog = parse_program("noStroke\nx").unwrap();
    assert_eq!(call_names(&prog), vec!["noStroke"]);
    assert!(matches!(&prog[1], Stmt::Expr(Expr::Ident { name, .. }) if name == "x"));
}

#[test]
fn unbalanced_call_reports_position() {
    let err = parse_program("box(1,\nball").unwrap_err();
    assert!(err.message.contains("expected"), "{}", err.message);
}

#[test]
fn postfix_step_is_a_compound_assignment() {
    let prog = parse_program("count = 0\n;repeat 3 ->\n\tcount++\n\tbox count\ncount--").unwrap();
    assert_eq!(prog.len(), 3);
    let Stmt::Repeat { body, .. } = &prog[1] else {
        panic!("expected repeat");
    };
    assert!(matches!(
        &body[0],
        Stmt::Assign { target, op: AssignOp::Add, value: Expr::Lit(Lit::Num(v)), .. }
            if target == "count" && *v == 1.0
    ));
    assert!(matches!(&prog[2], Stmt::Assign { op: AssignOp::Sub, .. }));
    assert!(parse_program("if++").is_err());
}
