use crate::error_formatter::format_error;
use crate::formatter::Formatter;
use proofer::{Formula, NumberedFact, ProofResult, Reply, Session};
use serde::Serialize;

/// Lines starting with this are skipped when replaying a script
const COMMENT: char = '#';

/// One non-blank script line and what the session made of it
pub struct Step {
    pub line: usize,
    pub input: String,
    pub outcome: ProofResult<Reply>,
}

/// Feed `script` to `session` line by line.
///
/// Stops after `exit`, and after the first failing line when `strict` is set.
pub fn replay(session: &mut Session, script: &str, strict: bool) -> Vec<Step> {
    let mut steps = Vec::new();
    for (number, text) in script.lines().enumerate() {
        let input = text.trim();
        if input.is_empty() || input.starts_with(COMMENT) {
            continue;
        }

        let outcome = session.handle(input);
        let stop = match &outcome {
            Ok(reply) => reply.is_exit(),
            Err(_) => strict,
        };
        steps.push(Step {
            line: number + 1,
            input: input.to_string(),
            outcome,
        });
        if stop {
            break;
        }
    }
    steps
}

pub fn first_failure(steps: &[Step]) -> Option<&Step> {
    steps.iter().find(|step| step.outcome.is_err())
}

/// Human-readable transcript, each input echoed before its reply
pub fn transcript(steps: &[Step], source_id: &str, proven: bool, color: bool) -> String {
    let formatter = Formatter::default();
    let mut output = String::new();
    for step in steps {
        output.push_str(&format!("> {}\n", step.input));
        match &step.outcome {
            Ok(reply) => output.push_str(&formatter.format_reply(reply)),
            Err(err) => {
                let id = format!("{}:{}", source_id, step.line);
                output.push_str(&format_error(err, &id, &step.input, color));
                output.push('\n');
            }
        }
    }
    output.push_str(formatter.format_verdict(proven));
    output.push('\n');
    output
}

#[derive(Serialize)]
struct StepRecord<'a> {
    line: usize,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply: Option<&'a Reply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
pub struct CheckReport<'a> {
    steps: Vec<StepRecord<'a>>,
    facts: Vec<NumberedFact>,
    conclusion: Option<Formula>,
    proven: bool,
}

pub fn report<'a>(session: &Session, steps: &'a [Step]) -> CheckReport<'a> {
    let listing = session.listing();
    CheckReport {
        steps: steps
            .iter()
            .map(|step| StepRecord {
                line: step.line,
                input: &step.input,
                reply: step.outcome.as_ref().ok(),
                error: step.outcome.as_ref().err().map(ToString::to_string),
            })
            .collect(),
        facts: listing.facts,
        conclusion: session.facts().conclusion().cloned(),
        proven: session.facts().is_proven(),
    }
}
