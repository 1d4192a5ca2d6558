//! Human-readable rendering of finished research jobs and chat answers.

use std::io::Write;

use caesar_client::{ResearchObject, ResearchResult};

use crate::output::Output;

/// Numbered source list, e.g. `  [1] Title - https://...`.
pub fn write_sources<W: Write>(out: &mut Output<W>, results: &[ResearchResult]) -> anyhow::Result<()> {
    if results.is_empty() {
        return Ok(());
    }
    out.line("\nSources:")?;
    for result in results {
        out.line(format_args!(
            "  [{}] {} - {}",
            result.citation_index, result.title, result.url
        ))?;
    }
    Ok(())
}

/// Status line, answer text, and sources of a completed job.
pub fn write_research_summary<W: Write>(
    out: &mut Output<W>,
    job: &ResearchObject,
) -> anyhow::Result<()> {
    let mut header = format!("Research {} {}", job.id, job.status);
    if job.running_time > 0 {
        header.push_str(&format!(" in {}s", job.running_time));
    }
    if job.reasoning_loops_consumed > 0 {
        header.push_str(&format!(
            " ({} reasoning loop{})",
            job.reasoning_loops_consumed,
            if job.reasoning_loops_consumed == 1 { "" } else { "s" }
        ));
    }
    out.line(header)?;
    out.line("")?;

    let content = job
        .transformed_content
        .as_deref()
        .or(job.content.as_deref())
        .filter(|c| !c.trim().is_empty());
    out.line(content.unwrap_or("(no content returned)"))?;

    write_sources(out, &job.results)
}

#[cfg(test)]
mod tests {
    use caesar_client::{ResearchObject, ResearchResult};
    use pretty_assertions::assert_eq;

    use super::write_research_summary;
    use crate::cli::OutputFormat;
    use crate::output::Output;

    fn job() -> ResearchObject {
        serde_json::from_value(serde_json::json!({
            "id": "r1",
            "status": "completed",
            "content": "Heat pumps move heat [1].",
            "running_time": 42,
            "reasoning_loops_consumed": 2
        }))
        .expect("fixture decodes")
    }

    #[test]
    fn summary_with_sources() {
        let mut job = job();
        job.results.push(ResearchResult {
            id: "s1".into(),
            title: "DOE guide".into(),
            url: "https://energy.gov/hp".into(),
            citation_index: 1,
        });

        let mut out = Output::new(Vec::new(), OutputFormat::Json);
        write_research_summary(&mut out, &job).expect("render");
        let text = String::from_utf8(out.into_inner()).expect("utf8");

        assert_eq!(
            text,
            "Research r1 completed in 42s (2 reasoning loops)\n\n\
             Heat pumps move heat [1].\n\n\
             Sources:\n  [1] DOE guide - https://energy.gov/hp\n"
        );
    }

    #[test]
    fn transformed_content_wins() {
        let mut job = job();
        job.transformed_content = Some("Formatted answer".into());

        let mut out = Output::new(Vec::new(), OutputFormat::Json);
        write_research_summary(&mut out, &job).expect("render");
        let text = String::from_utf8(out.into_inner()).expect("utf8");

        assert!(text.contains("Formatted answer"));
        assert!(!text.contains("Heat pumps"));
        assert!(!text.contains("Sources:"));
    }
}
