use super::*;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

#[test]
fn test_display_free_function() {
    let sig = Signature::function("print", ["Int"]);
    assert_eq!(sig.to_string(), "print Int");
}

#[test]
fn test_display_operator_forms() {
    assert_eq!(
        Signature::binary_method(BinaryOp::Add, "Int").to_string(),
        "operator+ this Int"
    );
    assert_eq!(
        Signature::binary_function(BinaryOp::Add, "Int", "Float").to_string(),
        "operator+ Int Float"
    );
    assert_eq!(
        Signature::unary_method(UnaryOp::Neg).to_string(),
        "operator- this"
    );
    assert_eq!(
        Signature::unary_function(UnaryOp::Not, "Bool").to_string(),
        "operator! Bool"
    );
}

#[test]
fn test_constructor() {
    let init = Signature::default_constructor();
    assert_eq!(init.to_string(), "init this");
    assert_eq!(init, Signature::constructor(Vec::<String>::new()));
    assert_ne!(init, Signature::constructor(["String"]));
    assert_ne!(init, Signature::function("init", Vec::<String>::new()));
}

#[test]
fn test_receiver_is_part_of_identity() {
    // "f this Int" and "f Int Int"-style keys must never collide, even though
    // the receiver occupies an argument slot in both.
    let method = Signature::method("f", ["Int"]);
    let function = Signature::function("f", ["this", "Int"]);
    assert_ne!(method, function);
    assert_eq!(method.params(), ["Int"]);
}

#[test]
fn test_param_boundaries_are_structural() {
    // A flat string key would render both as "f A B"; the structured key keeps
    // type names intact.
    let two = Signature::function("f", ["A", "B"]);
    let one = Signature::function("f", ["A B"]);
    assert_ne!(two, one);
}

#[test]
fn test_hash_set_lookup() {
    let mut set = HashSet::new();
    set.insert(Signature::function("print", ["Int"]));
    assert!(set.contains(&Signature::function("print", ["Int"])));
    assert!(!set.contains(&Signature::function("print", ["Float"])));
}
