use super::*;
use crate::compiler::CompileError;
use crate::foundation::error::LiveError;
use std::cell::RefCell;
use std::rc::Rc;

/// Records what it was asked to compile and delegates to the script compiler.
struct Spy {
    seen: Rc<RefCell<Vec<String>>>,
}

impl Compiler for Spy {
    fn compile(&self, text: &str) -> Result<CompiledRoutine, CompileError> {
        self.seen.borrow_mut().push(text.to_owned());
        ScriptCompiler.compile(text)
    }
}

fn spy() -> (SourceTransformer, Rc<RefCell<Vec<String>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let t = SourceTransformer::new(Box::new(Spy { seen: seen.clone() }));
    (t, seen)
}

#[test]
fn empty_source_is_a_noop_without_compiling() {
    let (t, seen) = spy();
    let out = t.transform("").unwrap();
    assert!(matches!(&out, Transformed::Empty(r) if r.is_noop()));
    assert!(seen.borrow().is_empty());
}

#[test]
fn times_loop_reaches_the_compiler_as_repeat() {
    let (t, seen) = spy();
    let out = t.transform("3 times ->\n\tbox").unwrap();
    assert!(matches!(out, Transformed::Routine(_)));
    assert_eq!(seen.borrow()[0], ";repeat 3 ->\n\tbox()");
}

#[test]
fn unbalanced_parenthesis_never_reaches_the_compiler() {
    let (t, seen) = spy();
    let err = t.transform("box(").unwrap_err();
    assert!(matches!(&err, LiveError::Syntax(m) if m == "Unbalanced ()"));
    assert!(seen.borrow().is_empty());
}

#[test]
fn compiler_errors_pass_through_as_compile_errors() {
    let t = SourceTransformer::default();
    let err = t.transform("box 1 2").unwrap_err();
    assert!(matches!(err, LiveError::Compile(_)), "{err}");
}

#[test]
fn transformation_is_deterministic() {
    let src = "rotate time/1000\n5 times ->\n\tred fill\n\tbox 0.5\ndoOnce -> ball";
    assert_eq!(transform_source(src).unwrap(), transform_source(src).unwrap());
}

#[test]
fn default_transformer_compiles_a_full_sketch() {
    let src = "// a sketch\nsimpleGradient fuchsia,color(100,200,200),yellow\nscale 2.1\n5 times ->\n\trotate 0,1,time/5000\n\tbox 0.1,0.1,0.1\n\tmove 0,0.1,0.1\n\t3 times ->\n\t\trotate 0,1,1\n\t\tbox 0.01,0.01,1";
    let out = SourceTransformer::default().transform(src).unwrap();
    assert!(!out.routine().is_noop());
}
