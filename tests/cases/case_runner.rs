#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::case_loader::{Case, CaseEntry, CaseFailure, CaseResult, load_cases};
/// Case runner
///
/// Runs the JSON cases against `EndpointLocation::parse`
use endpoint_location::EndpointLocation;

fn check(
    failures: &mut Vec<CaseFailure>,
    case_num: usize,
    case: &Case,
    field: &str,
    expected: Option<&String>,
    actual: &str,
) -> bool {
    match expected {
        Some(expected) if expected != actual => {
            failures.push(CaseFailure {
                case_num,
                input: case.input.clone(),
                field: field.to_string(),
                expected: expected.clone(),
                actual: actual.to_string(),
            });
            false
        }
        _ => true,
    }
}

pub fn run_cases(entries: Vec<CaseEntry>) -> CaseResult {
    let mut result = CaseResult::default();
    let mut case_num = 0;

    for entry in entries {
        let CaseEntry::Case(case) = entry else {
            continue;
        };
        case_num += 1;

        let location = match (EndpointLocation::parse(&case.input), &case.failure) {
            (Ok(location), None) => location,
            (Err(err), Some(field)) if err.field() == field => {
                result.passed += 1;
                continue;
            }
            (outcome, expected) => {
                result.failed += 1;
                result.failures.push(CaseFailure {
                    case_num,
                    input: case.input.clone(),
                    field: "parsing".to_string(),
                    expected: expected.clone().unwrap_or_else(|| "success".to_string()),
                    actual: match outcome {
                        Ok(_) => "success".to_string(),
                        Err(err) => err.field().to_string(),
                    },
                });
                continue;
            }
        };

        let failures = &mut result.failures;
        let checks = [
            check(failures, case_num, &case, "href", case.href.as_ref(), &location.href()),
            check(failures, case_num, &case, "protocol", case.protocol.as_ref(), location.protocol()),
            check(failures, case_num, &case, "host", case.host.as_ref(), &location.host()),
            check(failures, case_num, &case, "hostname", case.hostname.as_ref(), location.hostname()),
            check(failures, case_num, &case, "port", case.port.as_ref(), location.port()),
            check(failures, case_num, &case, "pathname", case.pathname.as_ref(), location.pathname()),
            check(failures, case_num, &case, "search", case.search.as_ref(), &location.search()),
            check(failures, case_num, &case, "hash", case.hash.as_ref(), location.hash()),
        ];

        if checks.iter().all(|&ok| ok) {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_endpoint_cases() {
    let result = run_cases(load_cases());
    for failure in &result.failures {
        eprintln!(
            "case #{} {:?}: {} expected {:?}, got {:?}",
            failure.case_num, failure.input, failure.field, failure.expected, failure.actual
        );
    }
    assert!(result.passed > 0, "no cases ran");
    assert_eq!(result.failed, 0, "{}", result.summary());
}

#[test]
fn test_cases_round_trip_href() {
    for entry in load_cases() {
        let CaseEntry::Case(case) = entry else {
            continue;
        };
        let Some(href) = case.href else {
            continue;
        };
        let reparsed = EndpointLocation::parse(&href).unwrap();
        assert_eq!(reparsed.href(), href, "href of {:?} is not stable", case.input);
    }
}
