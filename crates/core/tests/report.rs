use review_core::model::CodeLocation;
use review_core::report::{count_verdicts, filter_matches, Report, ReportError};
use review_core::verdicts::{Verdict, VerdictMap};

const SAMPLE: &str = r#"{
    "project_pairs": [
        {
            "project1": "alice",
            "project2": "bob",
            "matches": [
                {
                    "project_1_location": { "file": "main.c", "span": { "start": 40, "end": 90 } },
                    "project_2_location": { "file": "main.c", "span": { "start": 10, "end": 60 } }
                },
                {
                    "project_1_location": { "file": "main.c", "span": { "start": 0, "end": 30 } },
                    "project_2_location": { "file": "util.c", "span": { "start": 5, "end": 35 } }
                }
            ]
        },
        {
            "project1": "carol",
            "project2": "dave",
            "matches": [
                {
                    "project_1_location": { "file": "a.py", "span": { "start": 0, "end": 20 } },
                    "project_2_location": { "file": "b.py", "span": { "start": 0, "end": 20 } }
                },
                {
                    "project_1_location": { "file": "a.py", "span": { "start": 30, "end": 55 } },
                    "project_2_location": { "file": "b.py", "span": { "start": 25, "end": 50 } }
                },
                {
                    "project_1_location": { "file": "c.py", "span": { "start": 0, "end": 10 } },
                    "project_2_location": { "file": "d.py", "span": { "start": 0, "end": 10 } }
                }
            ]
        }
    ],
    "warnings": [
        { "warn_type": "Tokenize", "file": "eve/readme.md", "message": "Unsupported file type." }
    ]
}"#;

#[test]
fn parses_and_sorts_a_report() {
    let report = Report::from_str(SAMPLE).expect("parse");

    // Pairs come out sorted by descending match count.
    assert_eq!(report.project_pairs.len(), 2);
    assert_eq!(report.project_pairs[0].project1, "carol");
    assert_eq!(report.project_pairs[0].total_num_matches, 3);
    assert_eq!(report.project_pairs[1].project1, "alice");

    // Matches within a pair are sorted by location order.
    let alice_bob = &report.project_pairs[1];
    assert_eq!(alice_bob.matches[0].location1.start_byte, 0);
    assert_eq!(alice_bob.matches[1].location1.start_byte, 40);

    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].warn_type, "Tokenize");
}

#[test]
fn missing_warnings_field_defaults_to_empty() {
    let report = Report::from_str(r#"{ "project_pairs": [] }"#).expect("parse");
    assert!(report.project_pairs.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn invalid_location_fails_with_indices() {
    let bad = r#"{
        "project_pairs": [
            {
                "project1": "a",
                "project2": "b",
                "matches": [
                    {
                        "project_1_location": { "file": "x.c", "span": { "start": 10, "end": 10 } },
                        "project_2_location": { "file": "y.c", "span": { "start": 0, "end": 5 } }
                    }
                ]
            }
        ]
    }"#;
    match Report::from_str(bad) {
        Err(ReportError::Location { pair_index, match_index, project, .. }) => {
            assert_eq!(pair_index, 0);
            assert_eq!(match_index, 0);
            assert_eq!(project, 1);
        }
        other => panic!("expected location error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(Report::from_str("not json"), Err(ReportError::Json(_))));
}

#[test]
fn verdict_counts_track_the_store() {
    let report = Report::from_str(SAMPLE).expect("parse");
    let pair = &report.project_pairs[0]; // carol/dave, 3 matches
    let mut verdicts = VerdictMap::new();

    let m0 = &pair.matches[0];
    let m1 = &pair.matches[1];
    verdicts.set_verdict(&m0.location1, &m0.location2, Verdict::Plagiarism).expect("set");
    verdicts.set_verdict(&m1.location1, &m1.location2, Verdict::NoPlagiarism).expect("set");

    let counts = count_verdicts(pair, &verdicts);
    assert_eq!(counts.plagiarism, 1);
    assert_eq!(counts.no_plagiarism, 1);
    assert_eq!(counts.potential_plagiarism, 0);
    assert_eq!(counts.no_verdict, 1);
}

#[test]
fn filtering_drops_judged_matches_and_empty_pairs() {
    let report = Report::from_str(SAMPLE).expect("parse");
    let mut verdicts = VerdictMap::new();

    // Judge every match of the alice/bob pair.
    for m in &report.project_pairs[1].matches {
        verdicts.set_verdict(&m.location1, &m.location2, Verdict::NoPlagiarism).expect("set");
    }

    // Show only matches without a verdict: alice/bob disappears entirely.
    let filtered = filter_matches(&report.project_pairs, &verdicts, &[None]);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].project1, "carol");
    assert_eq!(filtered[0].matches.len(), 3);
    assert_eq!(filtered[0].total_num_matches, 3);

    // Show only no-plagiarism: just alice/bob, with the original total kept.
    let filtered = filter_matches(&report.project_pairs, &verdicts, &[Some(Verdict::NoPlagiarism)]);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].project1, "alice");
    assert_eq!(filtered[0].matches.len(), 2);
    assert_eq!(filtered[0].total_num_matches, 2);
}

#[test]
fn locations_order_by_file_then_span() {
    let a = CodeLocation::new("a.c", 5, 10).expect("valid");
    let b = CodeLocation::new("a.c", 5, 20).expect("valid");
    let c = CodeLocation::new("b.c", 0, 1).expect("valid");
    assert!(a < b);
    assert!(b < c);
}
