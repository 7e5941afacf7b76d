use super::*;
use crate::errors::EvalErrorKind;
use crate::types::names;
use pretty_assertions::assert_eq;

fn int_binding() -> Binding {
    Binding::Type(BasicType::int())
}

#[test]
fn lookup_walks_to_root() {
    let root = Environment::new();
    root.declare_variable("x", int_binding());
    let grandchild = root.child().child();
    assert_eq!(grandchild.find_variable("x").unwrap().ty(), BasicType::int());
}

#[test]
fn declarations_stay_in_current_node() {
    let root = Environment::new();
    let child = root.child();
    child.declare_variable("x", int_binding());
    assert!(child.lookup_variable("x").is_some());
    assert!(root.lookup_variable("x").is_none());
}

#[test]
fn inner_declaration_shadows_outer() {
    let root = Environment::new();
    root.declare_variable("x", int_binding());
    let child = root.child();
    child.declare_variable("x", Binding::Type(BasicType::bool()));
    assert_eq!(child.find_variable("x").unwrap().ty(), BasicType::bool());
    assert_eq!(root.find_variable("x").unwrap().ty(), BasicType::int());
}

#[test]
fn redeclaration_overwrites_in_same_node() {
    let root = Environment::new();
    root.declare_variable("x", int_binding());
    root.declare_variable("x", Binding::Type(BasicType::string()));
    assert_eq!(root.find_variable("x").unwrap().ty(), BasicType::string());
}

#[test]
fn missing_names_report_the_identifier() {
    let env = Environment::new().child();
    let err = env.find_variable("z").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "z".to_string()
        }
    );

    let err = env.find_type("Foo").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedType {
            name: "Foo".to_string()
        }
    );

    let sig = Signature::function("f", [names::INT]);
    let err = env.find_function(&sig).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedFunction {
            signature: "f Int".to_string()
        }
    );
}

#[test]
fn functions_are_keyed_by_full_signature() {
    let root = Environment::new();
    root.declare_function(
        Signature::function("f", [names::INT]),
        Overload::native(names::INT, |env, _| Value::int(env, 1)),
    );
    let child = root.child();
    assert!(child
        .lookup_function(&Signature::function("f", [names::INT]))
        .is_some());
    assert!(child
        .lookup_function(&Signature::function("f", [names::FLOAT]))
        .is_none());
    assert!(child
        .lookup_function(&Signature::function("f", Vec::<String>::new()))
        .is_none());
}

#[test]
fn types_resolve_through_parents() {
    let root = Environment::new();
    root.declare_type("Point", Rc::new(TypeDetail::new("Point")));
    let child = root.child();
    assert_eq!(child.find_type("Point").unwrap().name(), "Point");
    assert_eq!(
        BasicType::new("Point").resolve(&child).unwrap().name(),
        "Point"
    );
}

#[test]
fn child_is_a_distinct_node() {
    let root = Environment::new();
    let child = root.child();
    assert!(!child.same_scope(&root));
    assert!(child.clone().same_scope(&child));
}

#[test]
fn clones_share_the_node() {
    let root = Environment::new();
    let alias = root.clone();
    alias.declare_variable("late", int_binding());
    assert!(root.lookup_variable("late").is_some());
}
