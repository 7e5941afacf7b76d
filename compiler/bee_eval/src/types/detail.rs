//! Type descriptors and inheritance-aware lookup.

use std::fmt;
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};

use bee_ir::Signature;

use super::{BasicType, Payload, Value};
use crate::callable::Overload;
use crate::environment::Environment;
use crate::errors::{ambiguous_method, EvalResult};

/// A declared attribute.
///
/// The check pass records only the type; the execute pass also stores the
/// default value every new instance starts with.
#[derive(Clone, Debug)]
pub struct Attribute {
    pub ty: BasicType,
    pub default: Option<Value>,
}

impl Attribute {
    pub fn declared(ty: BasicType) -> Self {
        Attribute { ty, default: None }
    }

    pub fn with_default(ty: BasicType, default: Value) -> Self {
        Attribute {
            ty,
            default: Some(default),
        }
    }
}

/// A method found through the inheritance graph.
#[derive(Clone, Debug)]
pub struct MethodEntry {
    /// Ancestor declaring the method; `None` for the type's own methods.
    pub inherited_from: Option<Rc<TypeDetail>>,
    pub overload: Overload,
}

/// A nominal type: name, parents, attributes and methods.
pub struct TypeDetail {
    name: String,
    primitive: bool,
    parents: Vec<Rc<TypeDetail>>,
    attrs: FxHashMap<String, Attribute>,
    methods: FxHashMap<Signature, Overload>,
}

impl TypeDetail {
    pub fn new(name: impl Into<String>) -> Self {
        TypeDetail {
            name: name.into(),
            primitive: false,
            parents: Vec::new(),
            attrs: FxHashMap::default(),
            methods: FxHashMap::default(),
        }
    }

    /// A builtin type whose values carry a native payload instead of an
    /// attribute map. Primitive types cannot be inherited from.
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDetail {
            primitive: true,
            ..TypeDetail::new(name)
        }
    }

    pub fn is_primitive(&self) -> bool {
        self.primitive
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn basic_type(&self) -> BasicType {
        BasicType::new(&self.name)
    }

    pub fn parents(&self) -> &[Rc<TypeDetail>] {
        &self.parents
    }

    /// Append a parent; later parents override earlier ones for attributes.
    pub fn add_parent(&mut self, parent: Rc<TypeDetail>) {
        self.parents.push(parent);
    }

    pub fn define_attr(&mut self, name: impl Into<String>, attr: Attribute) {
        self.attrs.insert(name.into(), attr);
    }

    pub fn define_method(&mut self, signature: Signature, overload: Overload) {
        self.methods.insert(signature, overload);
    }

    /// A method from this type's own table, ignoring parents.
    pub fn own_method(&self, signature: &Signature) -> Option<&Overload> {
        self.methods.get(signature)
    }

    /// Resolve a method through the inheritance graph.
    ///
    /// The own table wins. Otherwise parents are searched depth-first in
    /// declaration order, each type visited once. Two parents resolving the
    /// signature to different owning types is an error.
    pub fn find_method(&self, signature: &Signature) -> EvalResult<Option<MethodEntry>> {
        if let Some(overload) = self.methods.get(signature) {
            return Ok(Some(MethodEntry {
                inherited_from: None,
                overload: overload.clone(),
            }));
        }
        let mut visited = FxHashSet::default();
        visited.insert(self.name.clone());
        Ok(self
            .inherited_method(signature, &mut visited)?
            .map(|(owner, overload)| MethodEntry {
                inherited_from: Some(owner),
                overload,
            }))
    }

    fn inherited_method(
        &self,
        signature: &Signature,
        visited: &mut FxHashSet<String>,
    ) -> EvalResult<Option<(Rc<TypeDetail>, Overload)>> {
        let mut found: Option<(Rc<TypeDetail>, Overload)> = None;
        for parent in &self.parents {
            if !visited.insert(parent.name.clone()) {
                continue;
            }
            let hit = match parent.methods.get(signature) {
                Some(overload) => Some((Rc::clone(parent), overload.clone())),
                None => parent.inherited_method(signature, visited)?,
            };
            let Some((owner, overload)) = hit else {
                continue;
            };
            match &found {
                Some((first, _)) if first.name != owner.name => {
                    return Err(ambiguous_method(&self.name, signature, &first.name, &owner.name));
                }
                Some(_) => {}
                None => found = Some((owner, overload)),
            }
        }
        Ok(found)
    }

    /// Declared type of an attribute, own or inherited.
    pub fn attr_type(&self, name: &str) -> Option<BasicType> {
        if let Some(attr) = self.attrs.get(name) {
            return Some(attr.ty.clone());
        }
        self.parents
            .iter()
            .rev()
            .find_map(|parent| parent.attr_type(name))
    }

    /// Default attribute values, parents first so the most derived
    /// declaration wins. Each call returns fresh copies.
    pub fn get_attrs(&self) -> FxHashMap<String, Value> {
        let mut merged = FxHashMap::default();
        for parent in &self.parents {
            merged.extend(parent.get_attrs());
        }
        for (name, attr) in &self.attrs {
            if let Some(default) = &attr.default {
                merged.insert(name.clone(), default.clone());
            }
        }
        merged
    }

    /// A value holding the merged default attributes, without running any
    /// constructor.
    pub fn blank(self: &Rc<Self>) -> Value {
        Value::new(Rc::clone(self), Payload::Object(self.get_attrs()))
    }

    /// Create a default instance.
    ///
    /// When this type's own table has `init this`, it runs on the blank
    /// instance and its result is returned. Constructors are not inherited.
    pub fn instantiate(self: &Rc<Self>, env: &Environment) -> EvalResult<Value> {
        let value = self.blank();
        match self.methods.get(&Signature::default_constructor()) {
            Some(init) => init.invoke(env, vec![value]),
            None => Ok(value),
        }
    }
}

impl fmt::Debug for TypeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDetail")
            .field("name", &self.name)
            .field("primitive", &self.primitive)
            .field(
                "parents",
                &self.parents.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field("attrs", &self.attrs.keys().collect::<Vec<_>>())
            .field("methods", &self.methods.len())
            .finish()
    }
}
