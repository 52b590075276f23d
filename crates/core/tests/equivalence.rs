use review_core::model::CodeLocation;
use review_core::verdicts::{CodeEquivalenceRelation, Judgment, VerdictError};

fn loc(file: &str, start: usize, end: usize) -> CodeLocation {
    CodeLocation::new(file, start, end).expect("valid location")
}

#[test]
fn reflexivity() {
    let r = CodeEquivalenceRelation::new();
    let location = loc("file1.s", 75, 130);
    assert_eq!(r.verdict(&location, &location), Judgment::Accept);
}

#[test]
fn symmetry_of_acceptance() {
    let mut r = CodeEquivalenceRelation::new();
    let location1 = loc("file1.s", 0, 100);
    let location2 = loc("file2.s", 100, 200);
    r.accept(&location1, &location2).expect("accept");
    assert_eq!(r.verdict(&location1, &location2), Judgment::Accept);
    assert_eq!(r.verdict(&location2, &location1), Judgment::Accept);
}

#[test]
fn symmetry_of_rejection() {
    let mut r = CodeEquivalenceRelation::new();
    let location1 = loc("myfile.s", 123, 456);
    let location2 = loc("theirfile.s", 789, 1012);
    r.reject(&location1, &location2).expect("reject");
    assert_eq!(r.verdict(&location1, &location2), Judgment::Reject);
    assert_eq!(r.verdict(&location2, &location1), Judgment::Reject);
}

#[test]
fn transitivity_accept_accept() {
    let mut r = CodeEquivalenceRelation::new();
    let a = loc("A.s", 0, 50);
    let b = loc("B.s", 0, 50);
    let c = loc("C.s", 0, 50);
    r.accept(&a, &b).expect("accept");
    r.accept(&b, &c).expect("accept");
    assert_eq!(r.verdict(&a, &c), Judgment::Accept);
}

#[test]
fn transitivity_accept_reject() {
    let mut r = CodeEquivalenceRelation::new();
    let a = loc("A.s", 5, 50);
    let b = loc("B.s", 10, 55);
    let c = loc("C.s", 15, 60);
    r.accept(&a, &b).expect("accept");
    r.reject(&b, &c).expect("reject");
    assert_eq!(r.verdict(&a, &c), Judgment::Reject);
}

#[test]
fn rejection_does_not_compose() {
    let mut r = CodeEquivalenceRelation::new();
    let a = loc("A.s", 5, 50);
    let b = loc("B.s", 10, 55);
    let c = loc("C.s", 15, 60);
    r.reject(&a, &b).expect("reject");
    r.reject(&b, &c).expect("reject");
    assert_eq!(r.verdict(&a, &c), Judgment::Unknown);
}

#[test]
fn merging_two_classes_accepts_all_members() {
    let mut r = CodeEquivalenceRelation::new();
    let l1 = loc("file1.s", 0, 42);
    let l2 = loc("file2.s", 0, 42);
    let l3 = loc("file3.s", 0, 42);
    let l4 = loc("file4.s", 0, 42);

    r.accept(&l1, &l2).expect("accept");
    r.accept(&l3, &l4).expect("accept");
    r.accept(&l1, &l3).expect("accept");

    assert_eq!(r.verdict(&l1, &l3), Judgment::Accept);
    assert_eq!(r.verdict(&l1, &l4), Judgment::Accept);
    assert_eq!(r.verdict(&l2, &l3), Judgment::Accept);
    assert_eq!(r.verdict(&l2, &l4), Judgment::Accept);
    assert_eq!(r.verdict(&l3, &l4), Judgment::Accept);
}

#[test]
fn rejection_between_merged_classes_covers_all_members() {
    let mut r = CodeEquivalenceRelation::new();
    let l1 = loc("file1.s", 0, 42);
    let l2 = loc("file2.s", 0, 42);
    let l3 = loc("file3.s", 0, 42);
    let l4 = loc("file4.s", 0, 42);

    r.accept(&l1, &l2).expect("accept");
    r.accept(&l3, &l4).expect("accept");
    r.reject(&l1, &l3).expect("reject");

    assert_eq!(r.verdict(&l1, &l2), Judgment::Accept);
    assert_eq!(r.verdict(&l3, &l4), Judgment::Accept);
    assert_eq!(r.verdict(&l1, &l3), Judgment::Reject);
    assert_eq!(r.verdict(&l1, &l4), Judgment::Reject);
    assert_eq!(r.verdict(&l2, &l3), Judgment::Reject);
    assert_eq!(r.verdict(&l2, &l4), Judgment::Reject);
}

#[test]
fn duplicate_accepts_are_noops() {
    let mut r = CodeEquivalenceRelation::new();
    let l1 = loc("file1.s", 0, 42);
    let l2 = loc("file2.s", 0, 42);
    let l3 = loc("file3.s", 0, 42);

    r.accept(&l1, &l2).expect("accept");
    r.accept(&l1, &l3).expect("accept");
    r.accept(&l2, &l3).expect("accept");

    assert_eq!(r.verdict(&l1, &l2), Judgment::Accept);
    assert_eq!(r.verdict(&l1, &l3), Judgment::Accept);
    assert_eq!(r.verdict(&l2, &l3), Judgment::Accept);
}

#[test]
fn unclassified_location_reads_unknown() {
    let mut r = CodeEquivalenceRelation::new();
    let l1 = loc("file1.s", 0, 42);
    let l2 = loc("file2.s", 0, 42);
    let l3 = loc("file3.s", 0, 42);

    r.accept(&l1, &l2).expect("accept");

    assert_eq!(r.verdict(&l1, &l3), Judgment::Unknown);
}

#[test]
fn contradiction_accept_then_reject() {
    let mut r = CodeEquivalenceRelation::new();
    let l1 = loc("student1.s", 500, 573);
    let l2 = loc("student2.s", 943, 1024);
    let l3 = loc("student3.s", 1000, 1100);
    r.accept(&l1, &l2).expect("accept");
    r.accept(&l2, &l3).expect("accept");

    assert_eq!(r.reject(&l1, &l2), Err(VerdictError::ContradictoryVerdict));
    assert_eq!(r.reject(&l1, &l3), Err(VerdictError::ContradictoryVerdict));
    assert_eq!(r.reject(&l2, &l3), Err(VerdictError::ContradictoryVerdict));
}

#[test]
fn contradiction_reject_then_accept() {
    let mut r = CodeEquivalenceRelation::new();
    let l1 = loc("student1.s", 500, 573);
    let l2 = loc("student2.s", 943, 1024);
    let l3 = loc("student3.s", 1000, 1100);
    r.accept(&l1, &l2).expect("accept");
    r.reject(&l2, &l3).expect("reject");

    assert_eq!(r.accept(&l1, &l3), Err(VerdictError::ContradictoryVerdict));
    assert_eq!(r.accept(&l2, &l3), Err(VerdictError::ContradictoryVerdict));
}

#[test]
fn failed_call_leaves_relation_unchanged() {
    let mut r = CodeEquivalenceRelation::new();
    let a = loc("a.s", 0, 10);
    let b = loc("b.s", 0, 10);
    let c = loc("c.s", 0, 10);
    r.accept(&a, &b).expect("accept");
    r.accept(&b, &c).expect("accept");

    let before = r.clone();
    assert_eq!(r.reject(&a, &c), Err(VerdictError::ContradictoryVerdict));
    assert_eq!(r, before);
    assert_eq!(r.verdict(&a, &c), Judgment::Accept);
}

#[test]
fn rejecting_a_location_against_itself_is_contradictory() {
    let mut r = CodeEquivalenceRelation::new();
    let a = loc("a.s", 0, 10);

    let before = r.clone();
    assert_eq!(r.reject(&a, &a), Err(VerdictError::ContradictoryVerdict));
    // The failed call must not have allocated a class id.
    assert_eq!(r, before);
}

#[test]
fn distinctness_survives_class_merges() {
    let mut r = CodeEquivalenceRelation::new();
    let a = loc("a.s", 0, 10);
    let b = loc("b.s", 0, 10);
    let c = loc("c.s", 0, 10);
    let d = loc("d.s", 0, 10);
    let e = loc("e.s", 0, 10);

    r.accept(&a, &b).expect("accept");
    r.reject(&a, &c).expect("reject");
    r.accept(&d, &e).expect("accept");
    // Merges c's class with d's; the a/c distinctness fact must follow.
    r.accept(&c, &d).expect("accept");

    assert_eq!(r.verdict(&a, &c), Judgment::Reject);
    assert_eq!(r.verdict(&a, &d), Judgment::Reject);
    assert_eq!(r.verdict(&b, &e), Judgment::Reject);
}

#[test]
fn invalid_locations_are_rejected_without_mutation() {
    let mut r = CodeEquivalenceRelation::new();
    let good = loc("good.s", 0, 10);
    let bad = CodeLocation { file: String::new(), start_byte: 0, end_byte: 10 };

    assert!(matches!(r.accept(&good, &bad), Err(VerdictError::InvalidLocation(_))));
    assert!(matches!(r.reject(&bad, &good), Err(VerdictError::InvalidLocation(_))));
    assert_eq!(r, CodeEquivalenceRelation::new());
}

#[test]
fn serialize_then_deserialize_round_trips() {
    let mut r = CodeEquivalenceRelation::new();
    let l1 = loc("student1.s", 500, 573);
    let l2 = loc("student2.s", 943, 1024);
    let l3 = loc("student3.s", 1000, 1100);
    r.accept(&l1, &l2).expect("accept");
    r.reject(&l2, &l3).expect("reject");

    let serialized = r.serialize().expect("serialize");
    let deserialized = CodeEquivalenceRelation::deserialize(&serialized).expect("deserialize");
    assert_eq!(deserialized, r);
}

#[test]
fn deserializing_empty_input_yields_a_fresh_relation() {
    let empty = CodeEquivalenceRelation::deserialize("").expect("empty input");
    assert_eq!(empty, CodeEquivalenceRelation::new());
    let blank = CodeEquivalenceRelation::deserialize("  \n").expect("whitespace input");
    assert_eq!(blank, CodeEquivalenceRelation::new());
}
