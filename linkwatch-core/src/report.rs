// Report rendering for classified scan outcomes

use crate::model::RunOutcome;
use colored::Colorize;

/// Inspection type for dead links that block the build.
const DEAD_LINK_TYPE_ID: &str = "LINK001";
/// Inspection type for dead links exempted by the allow-list.
const WHITELISTED_TYPE_ID: &str = "LINK002";

/// Whether the run should fail the surrounding build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Clean,
    BuildFailure,
}

impl ExitSignal {
    pub fn from_outcome(outcome: &RunOutcome) -> Self {
        if outcome.is_clean() {
            ExitSignal::Clean
        } else {
            ExitSignal::BuildFailure
        }
    }

    pub fn code(self) -> i32 {
        match self {
            ExitSignal::Clean => 0,
            ExitSignal::BuildFailure => 1,
        }
    }
}

/// Output surface selected once at startup and fixed for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReporterKind {
    Console,
    TeamCity,
}

impl ReporterKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "console" => Some(ReporterKind::Console),
            "teamcity" => Some(ReporterKind::TeamCity),
            _ => None,
        }
    }

    pub fn build(self) -> Box<dyn Reporter> {
        match self {
            ReporterKind::Console => Box::new(ConsoleReporter),
            ReporterKind::TeamCity => Box::new(TeamCityReporter),
        }
    }
}

pub trait Reporter {
    /// Render the full report for an outcome.
    fn render(&self, outcome: &RunOutcome) -> String;

    /// Emit the report and signal whether the build should fail. Whitelisted
    /// dead links are informational for every reporter; only flagged records
    /// fail the build.
    fn report(&self, outcome: &RunOutcome) -> ExitSignal {
        print!("{}", self.render(outcome));
        ExitSignal::from_outcome(outcome)
    }
}

/// Human-readable output: one line per dead link, WARN framing for
/// whitelisted records, ERROR framing for flagged ones.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn render(&self, outcome: &RunOutcome) -> String {
        let mut out = String::new();

        for record in &outcome.whitelisted {
            out.push_str(&format!(
                "WARN: '{}' in file '{}' could not be reached but is whitelisted.\n",
                record.link.yellow(),
                record.file.display().to_string().green()
            ));
        }

        for record in &outcome.flagged {
            out.push_str(&format!(
                "ERROR: '{}' in file '{}' could not be reached.\n",
                record.link.red(),
                record.file.display().to_string().blue()
            ));
        }

        out
    }
}

/// TeamCity service-message output.
///
/// Protocol ordering: inspection types must be declared before any inspection
/// referencing them, and the buildProblem marker comes after all inspections.
pub struct TeamCityReporter;

impl Reporter for TeamCityReporter {
    fn render(&self, outcome: &RunOutcome) -> String {
        let mut out = String::new();

        push_inspection_type(
            &mut out,
            DEAD_LINK_TYPE_ID,
            "no-dead-links",
            "Reports links that were not reachable.",
        );
        push_inspection_type(
            &mut out,
            WHITELISTED_TYPE_ID,
            "no-whitelisted-dead-links",
            "Reports links that were on a whitelist. These are links that we know may not \
             be reachable by an automated build tool. This inspection is just meant as a \
             informational message.",
        );

        for record in &outcome.whitelisted {
            push_inspection(
                &mut out,
                WHITELISTED_TYPE_ID,
                &format!("Whitelisted dead link: {}", record.link),
                &record.file.display().to_string(),
                "INFO",
            );
        }

        for record in &outcome.flagged {
            push_inspection(
                &mut out,
                DEAD_LINK_TYPE_ID,
                &format!("Dead link: {}", record.link),
                &record.file.display().to_string(),
                "ERROR",
            );
        }

        if !outcome.is_clean() {
            out.push_str(&format!(
                "##teamcity[buildProblem description='{}']\n",
                escape("Dead links detected.")
            ));
        }

        out
    }
}

fn push_inspection_type(out: &mut String, id: &str, name: &str, description: &str) {
    out.push_str(&format!(
        "##teamcity[inspectionType id='{}' name='{}' description='{}' category='{}']\n",
        escape(id),
        escape(name),
        escape(description),
        escape("Document issues")
    ));
}

fn push_inspection(out: &mut String, type_id: &str, message: &str, file: &str, severity: &str) {
    out.push_str(&format!(
        "##teamcity[inspection typeId='{}' message='{}' file='{}' SEVERITY='{}']\n",
        escape(type_id),
        escape(message),
        escape(file),
        severity
    ));
}

/// TeamCity service-message attribute escaping.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '|' => out.push_str("||"),
            '\'' => out.push_str("|'"),
            '[' => out.push_str("|["),
            ']' => out.push_str("|]"),
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_protocol_characters() {
        assert_eq!(escape("a|b"), "a||b");
        assert_eq!(escape("it's"), "it|'s");
        assert_eq!(escape("[x]"), "|[x|]");
        assert_eq!(escape("a\nb\rc"), "a|nb|rc");
        assert_eq!(escape("plain"), "plain");
    }
}
