//! Member scans: fields, methods, and constructors.
//!
//! Members are not scoped to their enclosing declaration. The scans walk
//! the whole unit's text and attach every match to the unit's member
//! target (its first declared entity); in a multi-type unit the members of
//! later types are misattributed to the first. That is the accepted
//! precision trade-off of scanning without a grammar.

use plumage_core::{
    model::{Constructor, Field, Method, Parameter, TypeEntity, Visibility},
    typename,
};

use crate::patterns;

/// Scan the whole unit text and attach all member-shaped matches to `target`.
pub(crate) fn attach_members(text: &str, target: &mut TypeEntity) {
    for caps in patterns::FIELD.captures_iter(text) {
        let visibility = Visibility::from_modifiers(&caps["mods"]);
        let type_ref = typename::strip_generics(&caps["type"]);
        let name = caps["name"].to_string();
        target.push_field(Field::new(visibility, type_ref, name));
    }

    for caps in patterns::METHOD.captures_iter(text) {
        let name = &caps["name"];
        if name == target.name() {
            // constructor-shaped, handled below
            continue;
        }
        let visibility = Visibility::from_modifiers(&caps["mods"]);
        let return_type = typename::strip_generics(&caps["ret"]);
        let parameters = parse_parameters(&caps["params"]);
        target.push_method(Method::new(
            visibility,
            return_type,
            name.to_string(),
            parameters,
        ));
    }

    for caps in patterns::CONSTRUCTOR.captures_iter(text) {
        let name = &caps["name"];
        if name != target.name() {
            continue;
        }
        let visibility = Visibility::from_modifiers(&caps["mods"]);
        let parameters = parse_parameters(&caps["params"]);
        target.push_constructor(Constructor::new(visibility, name.to_string(), parameters));
    }
}

/// Parse a raw parameter list by naive comma splitting.
///
/// Annotation tokens are stripped from each chunk, then the last two
/// whitespace-separated tokens are taken as (type, name). A single-token
/// chunk becomes a parameter named `arg`. This does not handle a parameter
/// type containing a comma, such as a multi-argument generic; the chunks
/// on either side of that comma are read as two malformed parameters.
pub(crate) fn parse_parameters(params: &str) -> Vec<Parameter> {
    let params = params.trim();
    if params.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for chunk in params.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let stripped = patterns::ANNOTATION.replace_all(chunk, "");
        let tokens: Vec<&str> = stripped.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [only] => out.push(Parameter::new(
                typename::strip_generics(only),
                "arg".to_string(),
            )),
            [.., ptype, pname] => out.push(Parameter::new(
                typename::strip_generics(ptype),
                (*pname).to_string(),
            )),
        }
    }
    out
}
