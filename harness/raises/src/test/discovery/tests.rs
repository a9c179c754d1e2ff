use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use raises_fault::{ARITHMETIC, BOUNDS, NULL};

fn ok() -> UnitResult {
    Ok(())
}

fn names(registry: &Registry) -> Vec<&str> {
    registry.iter().map(TestUnit::name).collect()
}

#[test]
fn test_discover_empty_target() {
    let Ok(registry) = discover(Target::new("empty")) else {
        panic!("empty target failed discovery");
    };
    assert!(registry.is_empty());
    assert_eq!(registry.target(), "empty");
}

#[test]
fn test_untagged_candidates_are_excluded() {
    let target = Target::new("t")
        .with(Candidate::new("helper", ok))
        .with(Candidate::new("tagged", ok).expect_fault(ARITHMETIC))
        .with(Candidate::new("another_helper", ok));

    let Ok(registry) = discover(target) else {
        panic!("discovery failed");
    };
    assert_eq!(names(&registry), vec!["tagged"]);
}

#[test]
fn test_discovery_preserves_order() {
    let target = Target::new("t")
        .with(Candidate::new("c", ok).expect_fault(NULL))
        .with(Candidate::new("a", ok).expect_fault(NULL))
        .with(Candidate::new("b", ok).expect_fault(NULL));

    let Ok(registry) = discover(target) else {
        panic!("discovery failed");
    };
    assert_eq!(names(&registry), vec!["c", "a", "b"]);
}

#[test]
fn test_repeated_declarations_keep_order() {
    let target = Target::new("t").with(
        Candidate::new("multi", ok)
            .expect_fault(BOUNDS)
            .expect_fault(NULL)
            .expect_any(&[ARITHMETIC]),
    );

    let Ok(registry) = discover(target) else {
        panic!("discovery failed");
    };
    let unit = registry.get("multi");
    assert_eq!(
        unit.map(|u| u.expectations().kinds()),
        Some(&[BOUNDS, NULL, ARITHMETIC][..])
    );
}

#[test]
fn test_duplicate_tagged_names_are_rejected() {
    let target = Target::new("t")
        .with(Candidate::new("same", ok).expect_fault(NULL))
        .with(Candidate::new("same", ok).expect_fault(BOUNDS));

    assert_eq!(
        discover(target).map(|r| r.len()),
        Err(RegistryError::DuplicateUnit {
            name: "same".to_string()
        })
    );
}

#[test]
fn test_untagged_duplicates_are_ignored() {
    let target = Target::new("t")
        .with(Candidate::new("same", ok))
        .with(Candidate::new("same", ok).expect_fault(BOUNDS));

    assert_eq!(discover(target).map(|r| r.len()), Ok(1));
}

#[test]
fn test_malformed_candidates_are_still_discovered() {
    let target = Target::new("t")
        .with(Candidate::parameterized("takes_args", 2).expect_fault(NULL))
        .with(Candidate::unbound("no_body").expect_fault(NULL))
        .with(Candidate::unbound("untagged_no_body"));

    let Ok(registry) = discover(target) else {
        panic!("discovery failed");
    };
    assert_eq!(names(&registry), vec!["takes_args", "no_body"]);
    assert!(matches!(
        registry.get("takes_args").map(TestUnit::invocable),
        Some(Invocable::Parameterized { arity: 2 })
    ));
}

#[test]
fn test_discovery_never_invokes_bodies() {
    let target = Target::new("t").with(
        Candidate::new("explodes", || panic!("body ran during discovery"))
            .expect_fault(ARITHMETIC),
    );
    assert_eq!(discover(target).map(|r| r.len()), Ok(1));
}

#[test]
fn test_target_push_and_candidates() {
    let mut target = Target::new("t");
    target.push(Candidate::new("x", ok).expect_fault(NULL));
    assert_eq!(target.name(), "t");
    assert_eq!(target.candidates().len(), 1);
    assert!(target.candidates()[0].is_tagged());
    assert_eq!(target.candidates()[0].declared(), &[NULL]);
}

proptest! {
    #[test]
    fn registry_size_counts_tagged_candidates(declarations in prop::collection::vec(0usize..4, 0..24)) {
        let mut target = Target::new("generated");
        for (i, count) in declarations.iter().enumerate() {
            let mut candidate = Candidate::new(format!("unit_{i}"), ok);
            for _ in 0..*count {
                candidate = candidate.expect_fault(BOUNDS);
            }
            target.push(candidate);
        }

        let tagged = declarations.iter().filter(|&&n| n > 0).count();
        let registry = discover(target);
        prop_assert_eq!(registry.map(|r| r.len()), Ok(tagged));
    }
}
