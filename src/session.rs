//! Interactive console flow: ask for a topic, brainstorm, print.

use crate::generator::IdeaGenerator;
use crate::provider::TextGenerator;
use crate::Error;
use std::fmt;
use std::io::{self, BufRead, Write};

pub const TOPIC_PROMPT: &str = "Enter the topic you want creative ideas for: ";
pub const NO_TOPIC_NOTICE: &str = "No topic entered.";
pub const CONFIG_HINT: &str =
    "Please ensure WATSONX_API_KEY and WATSONX_PROJECT_ID environment variables are set.";
pub const SERVICE_HINT: &str =
    "Please check your credentials, project ID, model ID availability, and network connection.";

/// What a session ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user entered nothing; the service was not called.
    NoTopic,
    /// Ideas returned by the model.
    Ideas(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoTopic => write!(f, "{NO_TOPIC_NOTICE}"),
            Outcome::Ideas(ideas) => write!(f, "\n✨ Here are some ideas:\n{ideas}"),
        }
    }
}

/// Read one line of input, dropping only the line terminator.
pub fn read_topic<R: BufRead>(mut input: R) -> Result<String, Error> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Run one prompt/brainstorm/print cycle.
///
/// The generator is called at most once, and never for an empty topic.
pub async fn run_session<P, R, W>(
    generator: &IdeaGenerator<P>,
    input: R,
    mut output: W,
) -> Result<Outcome, Error>
where
    P: TextGenerator,
    R: BufRead,
    W: Write,
{
    write!(output, "{TOPIC_PROMPT}")?;
    output.flush()?;

    let topic = read_topic(input)?;
    let outcome = if topic.is_empty() {
        Outcome::NoTopic
    } else {
        writeln!(output, "\n🧠 Thinking about '{topic}'...")?;
        output.flush()?;
        Outcome::Ideas(generator.generate_ideas(&topic).await?)
    };

    writeln!(output, "{outcome}")?;
    Ok(outcome)
}

/// Print a user-facing report for `error`, with a hint on how to fix it.
pub fn report_error<W: Write>(error: &Error, mut output: W) -> io::Result<()> {
    match error {
        Error::MissingConfiguration { .. } => {
            writeln!(output, "Error: {error}")?;
            writeln!(output, "{CONFIG_HINT}")
        }
        Error::ServiceCall(_) => {
            writeln!(output, "An error occurred during API call or processing: {error}")?;
            writeln!(output, "{SERVICE_HINT}")
        }
        Error::Console(_) => writeln!(output, "Error: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_topic_strips_line_ending_only() {
        assert_eq!(read_topic(Cursor::new("  tea  \n")).unwrap(), "  tea  ");
        assert_eq!(read_topic(Cursor::new("tea\r\n")).unwrap(), "tea");
        assert_eq!(read_topic(Cursor::new("tea")).unwrap(), "tea");
        assert_eq!(read_topic(Cursor::new("")).unwrap(), "");
    }

    #[test]
    fn test_read_topic_takes_first_line() {
        assert_eq!(read_topic(Cursor::new("first\nsecond\n")).unwrap(), "first");
    }

    #[test]
    fn test_report_missing_configuration() {
        let mut output = Vec::new();
        report_error(&Error::missing("WATSONX_PROJECT_ID"), &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Error: Missing environment variable: WATSONX_PROJECT_ID\n\
             Please ensure WATSONX_API_KEY and WATSONX_PROJECT_ID environment variables are set.\n"
        );
    }

    #[test]
    fn test_report_service_call() {
        let mut output = Vec::new();
        report_error(&Error::service("Text generation failed (401 Unauthorized)"), &mut output)
            .unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "An error occurred during API call or processing: Text generation failed (401 Unauthorized)\n\
             Please check your credentials, project ID, model ID availability, and network connection.\n"
        );
    }

    #[test]
    fn test_report_console() {
        let error = Error::Console(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        let mut output = Vec::new();
        report_error(&error, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Error: Console I/O failed: pipe closed\n"
        );
    }

    struct Unreachable;

    #[async_trait::async_trait]
    impl TextGenerator for Unreachable {
        async fn generate_text(
            &self,
            _request: &crate::GenerationRequest,
        ) -> Result<String, Error> {
            panic!("no generation expected")
        }
    }

    #[tokio::test]
    async fn test_end_of_input_is_treated_as_no_topic() {
        let generator = IdeaGenerator::new(Unreachable, "p");
        let mut output = Vec::new();
        let outcome = run_session(&generator, Cursor::new(""), &mut output)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::NoTopic);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter the topic you want creative ideas for: No topic entered.\n"
        );
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::NoTopic.to_string(), "No topic entered.");
        assert_eq!(
            Outcome::Ideas("1. a".to_string()).to_string(),
            "\n✨ Here are some ideas:\n1. a"
        );
    }
}
