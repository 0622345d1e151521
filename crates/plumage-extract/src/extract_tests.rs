//! Unit tests for the extraction pipeline.
//!
//! These exercise whole-unit extraction: namespace detection, declaration
//! scanning, member attribution, and the documented imprecision on
//! multi-type units.

use plumage_core::model::{TypeKind, Visibility};
use proptest::prelude::*;

use crate::extract_unit;

const POINT: &str = r#"
package geom;

public class Point {
    private double x;
    private double y;
    protected static int instances = 0;
    String label;

    public Point(double x, double y) {
        this.x = x;
        this.y = y;
    }

    public double distanceTo(Point other) {
        return 0.0;
    }

    private void reset() {
    }
}
"#;

#[test]
fn test_extracts_namespace_and_name() {
    let entities = extract_unit(POINT);
    assert_eq!(entities.len(), 1);

    let point = &entities[0];
    assert_eq!(point.kind(), TypeKind::Class);
    assert_eq!(point.name(), "Point");
    assert_eq!(point.namespace(), "geom");
    assert_eq!(point.qualified_name(), "geom.Point");
}

#[test]
fn test_missing_package_means_root_namespace() {
    let entities = extract_unit("class Floater {\n}\n");
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].namespace(), "");
    assert_eq!(entities[0].qualified_name(), "Floater");
}

#[test]
fn test_only_first_package_declaration_counts() {
    let text = "package first;\npackage second;\nclass A {}\n";
    let entities = extract_unit(text);
    assert_eq!(entities[0].namespace(), "first");
}

#[test]
fn test_extracts_fields_with_visibility() {
    let entities = extract_unit(POINT);
    let fields = entities[0].fields();

    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0].name(), "x");
    assert_eq!(fields[0].visibility(), Visibility::Private);
    assert_eq!(fields[0].type_ref(), "double");
    assert_eq!(fields[2].name(), "instances");
    assert_eq!(fields[2].visibility(), Visibility::Protected);
    // no modifier at all renders as package visibility
    assert_eq!(fields[3].name(), "label");
    assert_eq!(fields[3].visibility(), Visibility::Package);
}

#[test]
fn test_constructor_is_not_a_method() {
    let entities = extract_unit(POINT);
    let entity = &entities[0];

    let method_names: Vec<&str> = entity.methods().iter().map(|m| m.name()).collect();
    assert_eq!(method_names, vec!["distanceTo", "reset"]);

    assert_eq!(entity.constructors().len(), 1);
    let ctor = &entity.constructors()[0];
    assert_eq!(ctor.name(), "Point");
    assert_eq!(ctor.visibility(), Visibility::Public);
    assert_eq!(ctor.parameters().len(), 2);
    assert_eq!(ctor.parameters()[0].type_ref(), "double");
    assert_eq!(ctor.parameters()[0].name(), "x");
}

#[test]
fn test_method_metadata() {
    let entities = extract_unit(POINT);
    let distance = &entities[0].methods()[0];

    assert_eq!(distance.visibility(), Visibility::Public);
    assert_eq!(distance.return_type(), "double");
    assert_eq!(distance.parameters().len(), 1);
    assert_eq!(distance.parameters()[0].type_ref(), "Point");
    assert_eq!(distance.parameters()[0].name(), "other");
}

#[test]
fn test_extends_and_implements() {
    let text = r#"
package app;
public class Child extends Base implements Runnable, app.io.Closeable {
}
"#;
    let entities = extract_unit(text);
    let child = &entities[0];

    assert_eq!(child.extends(), Some("Base"));
    assert_eq!(child.implements(), &["Runnable", "app.io.Closeable"]);
}

#[test]
fn test_interface_and_enum_kinds() {
    let text = r#"
package app;
public interface Service {
}
enum Status {
}
"#;
    let entities = extract_unit(text);
    assert_eq!(entities.len(), 2);
    assert_eq!(entities[0].kind(), TypeKind::Interface);
    assert_eq!(entities[0].name(), "Service");
    assert_eq!(entities[1].kind(), TypeKind::Enum);
    assert_eq!(entities[1].name(), "Status");
}

#[test]
fn test_multi_type_unit_attaches_members_to_first() {
    let text = r#"
package app;
class First {
    private int mine;
}
class Second {
    private int notMine;
}
"#;
    let entities = extract_unit(text);
    assert_eq!(entities.len(), 2);

    // Both fields land on the first entity; the second gets none.
    let names: Vec<&str> = entities[0].fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["mine", "notMine"]);
    assert!(entities[1].fields().is_empty());
}

#[test]
fn test_commented_out_declarations_are_ignored() {
    let text = r#"
package app;
// class Ghost {
/* class Phantom {
       private int spooky;
   } */
class Real {
    private int present; // private int absent;
}
"#;
    let entities = extract_unit(text);
    assert_eq!(entities.len(), 1);
    assert_eq!(entities[0].name(), "Real");

    let names: Vec<&str> = entities[0].fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["present"]);
}

#[test]
fn test_generics_are_stripped_from_member_types() {
    let text = r#"
package app;
class Holder {
    private List<Item> items;

    public Map<Item> index(Set<Item> keys) {
        return null;
    }
}
"#;
    let entities = extract_unit(text);
    let holder = &entities[0];

    assert_eq!(holder.fields()[0].type_ref(), "List");
    assert_eq!(holder.methods()[0].return_type(), "Map");
    assert_eq!(holder.methods()[0].parameters()[0].type_ref(), "Set");
}

#[test]
fn test_array_markers_survive_extraction() {
    let text = "class Buf {\n    private byte[] data;\n}\n";
    let entities = extract_unit(text);
    assert_eq!(entities[0].fields()[0].type_ref(), "byte[]");
}

#[test]
fn test_empty_and_unmatched_input() {
    assert!(extract_unit("").is_empty());
    assert!(extract_unit("not java at all { ; } (").is_empty());
    assert!(extract_unit("package lonely.namespace;\n").is_empty());
}

#[test]
fn test_extraction_is_idempotent() {
    let first = extract_unit(POINT);
    let second = extract_unit(POINT);
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn extraction_never_panics(input in ".{0,256}") {
        let _ = extract_unit(&input);
    }

    #[test]
    fn extraction_is_pure(input in ".{0,128}") {
        prop_assert_eq!(extract_unit(&input), extract_unit(&input));
    }
}
