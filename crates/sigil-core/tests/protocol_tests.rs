//! # Protocol Tests
//!
//! End-to-end coverage of the enumeration protocol: declaration, ordering,
//! identity, display, navigation, membership, lookup, and the registry and
//! macro surfaces, using the canonical Colour / CarBrand / TrafficLight
//! scenarios.

use sigil_core::{
    Declaration, EnumType, MemberSet, OrderPolicy, Registry, SigilError, Value, declare_enums,
};

declare_enums! {
    pub enum Colour { red, blue, green, yellow }
    pub enum CarBrand { Ford = 1, Toyota = 3, Mitsubishi = 2 }
    pub enum TrafficLight { red, amber, green }
}

// =============================================================================
// DECLARATION ORDER
// =============================================================================

#[test]
fn unvalued_enums_iterate_in_declaration_order() {
    let names: Vec<_> = Colour::ty().iter().map(|m| m.name().to_string()).collect();
    assert_eq!(names, vec!["red", "blue", "green", "yellow"]);
    assert_eq!(Colour::ty().len(), 4);
    assert_eq!(Colour::ty().order_policy(), OrderPolicy::Declaration);
}

#[test]
fn valued_enums_iterate_ascending_by_value() {
    let names: Vec<_> = CarBrand::ty().iter().map(|m| m.name().to_string()).collect();
    assert_eq!(names, vec!["Ford", "Mitsubishi", "Toyota"]);
    assert_eq!(CarBrand::ty().order_policy(), OrderPolicy::ByValue);
}

#[test]
fn iteration_yields_every_member_exactly_once() {
    let mut count = 0;
    for member in Colour::ty() {
        assert_eq!(member.ty(), Colour::ty());
        count += 1;
    }
    assert_eq!(count, Colour::ty().len());
}

// =============================================================================
// IDENTITY
// =============================================================================

#[test]
fn members_are_singletons() {
    assert_eq!(Colour::red(), Colour::red());
    assert_eq!(
        Colour::red(),
        Colour::ty().member("red").expect("declared member")
    );
    assert_ne!(Colour::red(), Colour::blue());
}

#[test]
fn members_of_different_enums_never_compare_equal() {
    // Colour.red and TrafficLight.red share a name and nothing else.
    assert_ne!(Colour::red(), TrafficLight::red());
    assert_ne!(Colour::green(), TrafficLight::green());
    assert_ne!(Colour::ty(), TrafficLight::ty());
}

#[test]
fn identically_declared_types_stay_distinct() {
    let a = EnumType::new(Declaration::parse("Twin", "x, y").expect("parse")).expect("construct");
    let b = EnumType::new(Declaration::parse("Twin", "x, y").expect("parse")).expect("construct");
    assert_ne!(a, b);
    assert_ne!(a.member("x").expect("member"), b.member("x").expect("member"));
}

// =============================================================================
// DISPLAY
// =============================================================================

#[test]
fn display_omits_implicit_values() {
    assert_eq!(Colour::red().to_string(), "Colour.red");
    assert_eq!(TrafficLight::amber().to_string(), "TrafficLight.amber");
}

#[test]
fn display_includes_explicit_values() {
    assert_eq!(CarBrand::Ford().to_string(), "CarBrand.Ford(value=1)");
    assert_eq!(
        CarBrand::Mitsubishi().to_string(),
        "CarBrand.Mitsubishi(value=2)"
    );
}

// =============================================================================
// SUCCESSOR NAVIGATION
// =============================================================================

#[test]
fn successor_follows_resolved_order() {
    assert_eq!(TrafficLight::red().successor(), Some(TrafficLight::amber()));
    assert_eq!(
        TrafficLight::amber().successor(),
        Some(TrafficLight::green())
    );
    assert_eq!(TrafficLight::green().successor(), None);

    // Under value ordering the successor follows values, not declaration.
    assert_eq!(CarBrand::Ford().successor(), Some(CarBrand::Mitsubishi()));
    assert_eq!(CarBrand::Mitsubishi().successor(), Some(CarBrand::Toyota()));
}

// =============================================================================
// LOOKUP
// =============================================================================

#[test]
fn subscript_style_lookup_matches_accessors() {
    let red = Colour::ty().member("red").expect("declared member");
    assert_eq!(red, Colour::red());
}

#[test]
fn lookup_miss_is_a_recoverable_error() {
    let err = Colour::ty().member("nonexistent");
    assert!(matches!(
        err,
        Err(SigilError::MemberNotFound { type_name, name })
            if type_name == "Colour" && name == "nonexistent"
    ));
}

// =============================================================================
// MEMBERSHIP
// =============================================================================

#[test]
fn membership_uses_type_scoped_equality() {
    let blue_or_red = Colour::blue() | Colour::red();
    assert!(blue_or_red.contains(&Colour::red()));

    let blue_or_green = Colour::blue() | Colour::green();
    assert!(!blue_or_green.contains(&Colour::red()));

    // Same member name, different enum: not a member.
    assert!(!blue_or_red.contains(&TrafficLight::red()));
}

#[test]
fn membership_works_against_plain_collections_too() {
    let pair = [Colour::blue(), Colour::red()];
    assert!(pair.contains(&Colour::red()));
    assert!(!pair.contains(&Colour::green()));
}

#[test]
fn disjunctions_compose() {
    let warm = Colour::red() | Colour::yellow();
    let cool = Colour::blue() | Colour::green();
    let all: MemberSet = warm | cool;
    assert_eq!(all.len(), 4);
    assert_eq!(
        all.to_string(),
        "Colour.red | Colour.yellow | Colour.blue | Colour.green"
    );
}

// =============================================================================
// CONSTRUCTION FAILURES
// =============================================================================

#[test]
fn duplicate_names_fail_construction() {
    let result = EnumType::new(Declaration::new("Colour").member("red").member("red"));
    assert!(matches!(result, Err(SigilError::DuplicateName(name)) if name == "red"));
}

#[test]
fn duplicate_values_fail_construction_under_value_ordering() {
    let result = EnumType::new(
        Declaration::new("Priority")
            .member_with_value("low", 1)
            .member_with_value("lowest", 1),
    );
    assert!(matches!(
        result,
        Err(SigilError::DuplicateValue(Value::Int(1)))
    ));
}

#[test]
fn empty_declarations_fail_construction() {
    let result = EnumType::new(Declaration::new("Nothing"));
    assert!(matches!(result, Err(SigilError::EmptyDeclaration)));
}

#[test]
fn partial_values_fall_back_to_declaration_order() {
    let ty = EnumType::new(
        Declaration::new("Mixed")
            .member_with_value("c", 3)
            .member("a")
            .member_with_value("b", 3),
    )
    .expect("construct");

    // One missing value disables value ordering entirely, so the shared
    // value 3 is no longer ambiguous.
    assert_eq!(ty.order_policy(), OrderPolicy::Declaration);
    let names: Vec<_> = ty.iter().map(|m| m.name().to_string()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

// =============================================================================
// TEXT DECLARATIONS
// =============================================================================

#[test]
fn textual_and_builder_declarations_construct_equivalent_types() {
    let parsed =
        EnumType::new(Declaration::parse("Colour", "red,\nblue,\ngreen,\nyellow").expect("parse"))
            .expect("construct");

    let built: Vec<_> = Colour::ty().iter().map(|m| m.name().to_string()).collect();
    let texted: Vec<_> = parsed.iter().map(|m| m.name().to_string()).collect();
    assert_eq!(built, texted);
}

#[test]
fn textual_assignments_carry_values() {
    let ty = EnumType::new(
        Declaration::parse("CarBrand", "Ford = 1, Toyota = 3, Mitsubishi = 2").expect("parse"),
    )
    .expect("construct");

    let names: Vec<_> = ty.iter().map(|m| m.name().to_string()).collect();
    assert_eq!(names, vec!["Ford", "Mitsubishi", "Toyota"]);
    assert_eq!(
        ty.member("Toyota").expect("member").value(),
        Some(&Value::Int(3))
    );
}

// =============================================================================
// REGISTRY
// =============================================================================

#[test]
fn registry_defines_once_and_serves_lookups() {
    let registry = Registry::new();
    registry
        .define(Declaration::parse("Season", "spring, summer, autumn, winter").expect("parse"))
        .expect("define");

    let summer = registry.lookup("Season", "summer").expect("lookup");
    assert_eq!(summer.to_string(), "Season.summer");

    assert!(matches!(
        registry.define(Declaration::new("Season").member("dry")),
        Err(SigilError::AlreadyDefined(_))
    ));
    assert!(matches!(
        registry.lookup("Climate", "dry"),
        Err(SigilError::TypeNotFound(_))
    ));
}

// =============================================================================
// SERDE
// =============================================================================

#[test]
fn declarations_round_trip_through_json() {
    let decl = Declaration::new("CarBrand")
        .member_with_value("Ford", 1)
        .member_with_value("Toyota", 3)
        .member_with_value("Mitsubishi", 2);

    let json = serde_json::to_string(&decl).expect("serialize");
    let back: Declaration = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decl, back);

    let ty = EnumType::new(back).expect("construct");
    let names: Vec<_> = ty.iter().map(|m| m.name().to_string()).collect();
    assert_eq!(names, vec!["Ford", "Mitsubishi", "Toyota"]);
}
