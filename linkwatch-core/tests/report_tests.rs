// Tests for report rendering and exit signaling

use linkwatch_core::model::{DeadLink, RunOutcome};
use linkwatch_core::report::{ExitSignal, Reporter, ReporterKind};
use std::path::PathBuf;

fn record(file: &str, link: &str, whitelisted: bool) -> DeadLink {
    DeadLink::new(PathBuf::from(file), link.to_string(), whitelisted)
}

fn sample_outcome() -> RunOutcome {
    RunOutcome {
        whitelisted: vec![record("b.md", "http://dead2.example/", true)],
        flagged: vec![record("a.md", "http://dead.example/", false)],
    }
}

// ============================================================================
// Reporter selection
// ============================================================================

#[test]
fn test_reporter_kind_from_str_console() {
    assert_eq!(ReporterKind::from_str("console"), Some(ReporterKind::Console));
}

#[test]
fn test_reporter_kind_from_str_teamcity() {
    assert_eq!(
        ReporterKind::from_str("teamcity"),
        Some(ReporterKind::TeamCity)
    );
}

#[test]
fn test_reporter_kind_from_str_case_insensitive() {
    assert_eq!(
        ReporterKind::from_str("TeamCity"),
        Some(ReporterKind::TeamCity)
    );
    assert_eq!(ReporterKind::from_str("CONSOLE"), Some(ReporterKind::Console));
}

#[test]
fn test_reporter_kind_from_str_unknown() {
    assert_eq!(ReporterKind::from_str("junit"), None);
}

// ============================================================================
// Exit signaling
// ============================================================================

#[test]
fn test_exit_signal_clean_run() {
    let outcome = RunOutcome::default();

    let signal = ExitSignal::from_outcome(&outcome);

    assert_eq!(signal, ExitSignal::Clean);
    assert_eq!(signal.code(), 0);
}

#[test]
fn test_exit_signal_whitelisted_only_is_clean() {
    let outcome = RunOutcome {
        whitelisted: vec![record("b.md", "http://dead2.example/", true)],
        flagged: vec![],
    };

    assert_eq!(ExitSignal::from_outcome(&outcome), ExitSignal::Clean);
}

#[test]
fn test_exit_signal_flagged_fails_build() {
    let signal = ExitSignal::from_outcome(&sample_outcome());

    assert_eq!(signal, ExitSignal::BuildFailure);
    assert_eq!(signal.code(), 1);
}

// ============================================================================
// Console reporter
// ============================================================================

#[test]
fn test_console_render_frames_both_sets() {
    let reporter = ReporterKind::Console.build();

    let rendered = reporter.render(&sample_outcome());

    let warn_line = rendered.lines().find(|l| l.starts_with("WARN:")).unwrap();
    assert!(warn_line.contains("could not be reached but is whitelisted."));
    assert!(warn_line.contains("http://dead2.example/"));
    assert!(warn_line.contains("b.md"));

    let error_line = rendered.lines().find(|l| l.starts_with("ERROR:")).unwrap();
    assert!(error_line.contains("could not be reached."));
    assert!(error_line.contains("http://dead.example/"));
    assert!(error_line.contains("a.md"));
}

#[test]
fn test_console_render_one_line_per_record() {
    let outcome = RunOutcome {
        whitelisted: vec![
            record("a.md", "http://one.example/", true),
            record("b.md", "http://two.example/", true),
        ],
        flagged: vec![record("c.md", "http://three.example/", false)],
    };

    let rendered = ReporterKind::Console.build().render(&outcome);

    assert_eq!(rendered.lines().count(), 3);
}

#[test]
fn test_console_render_clean_outcome_is_silent() {
    let rendered = ReporterKind::Console.build().render(&RunOutcome::default());

    assert!(rendered.is_empty());
}

// ============================================================================
// TeamCity reporter
// ============================================================================

#[test]
fn test_teamcity_declares_types_before_inspections() {
    let rendered = ReporterKind::TeamCity.build().render(&sample_outcome());
    let lines: Vec<&str> = rendered.lines().collect();

    let last_type_decl = lines
        .iter()
        .rposition(|l| l.starts_with("##teamcity[inspectionType"))
        .unwrap();
    let first_inspection = lines
        .iter()
        .position(|l| l.starts_with("##teamcity[inspection "))
        .unwrap();

    assert!(last_type_decl < first_inspection);
}

#[test]
fn test_teamcity_declares_both_types_even_when_clean() {
    let rendered = ReporterKind::TeamCity.build().render(&RunOutcome::default());

    assert!(rendered.contains("id='LINK001'"));
    assert!(rendered.contains("id='LINK002'"));
    assert!(rendered.contains("name='no-dead-links'"));
    assert!(rendered.contains("name='no-whitelisted-dead-links'"));
    assert!(rendered.contains("category='Document issues'"));
}

#[test]
fn test_teamcity_severity_per_classification() {
    let rendered = ReporterKind::TeamCity.build().render(&sample_outcome());

    assert!(rendered.contains(
        "##teamcity[inspection typeId='LINK002' \
         message='Whitelisted dead link: http://dead2.example/' file='b.md' SEVERITY='INFO']"
    ));
    assert!(rendered.contains(
        "##teamcity[inspection typeId='LINK001' \
         message='Dead link: http://dead.example/' file='a.md' SEVERITY='ERROR']"
    ));
}

#[test]
fn test_teamcity_build_problem_comes_last() {
    let rendered = ReporterKind::TeamCity.build().render(&sample_outcome());
    let last_line = rendered.lines().last().unwrap();

    assert_eq!(
        last_line,
        "##teamcity[buildProblem description='Dead links detected.']"
    );
}

#[test]
fn test_teamcity_no_build_problem_when_clean() {
    let outcome = RunOutcome {
        whitelisted: vec![record("b.md", "http://dead2.example/", true)],
        flagged: vec![],
    };

    let rendered = ReporterKind::TeamCity.build().render(&outcome);

    assert!(!rendered.contains("buildProblem"));
    assert!(rendered.contains("SEVERITY='INFO'"));
}

#[test]
fn test_teamcity_escapes_attribute_values() {
    let outcome = RunOutcome {
        whitelisted: vec![],
        flagged: vec![record(
            "notes/it's [draft].md",
            "http://dead.example/a|b",
            false,
        )],
    };

    let rendered = ReporterKind::TeamCity.build().render(&outcome);

    assert!(rendered.contains("message='Dead link: http://dead.example/a||b'"));
    assert!(rendered.contains("file='notes/it|'s |[draft|].md'"));
}

#[test]
fn test_teamcity_scenario_message_counts() {
    let rendered = ReporterKind::TeamCity.build().render(&sample_outcome());

    let errors = rendered.matches("SEVERITY='ERROR'").count();
    let infos = rendered.matches("SEVERITY='INFO'").count();
    let problems = rendered.matches("buildProblem").count();

    assert_eq!(errors, 1);
    assert_eq!(infos, 1);
    assert_eq!(problems, 1);
}
