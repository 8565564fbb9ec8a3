use anyhow::Context;
use rehumanizer::models::{EducationLevel, HumanizeRequest, PipelineType};
use rehumanizer::{init_logging, Humanizer};
use std::io::Read;

fn parse_arg_value(args: &[String], key: &str) -> Option<String> {
    args.iter()
        .position(|a| a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn has_flag(args: &[String], key: &str) -> bool {
    args.iter().any(|a| a == key)
}

const SAMPLE_TEXT: &str =
    "The artificial intelligence system demonstrates remarkable capabilities in natural language processing and text generation.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if has_flag(&args, "--help") {
        eprintln!(
            "Usage:\n  humanize_text [--text <text>] [--level <education_level>] [--pipeline <type>] [--no-paranoid] [--no-writehuman] [--demo]\n\nReads text from --text, stdin, or uses the built-in sample with --demo.\nEducation levels: elementary, middle_school, high_school, undergraduate, masters, phd\nPipeline types: comprehensive, standard, quick, advanced"
        );
        return Ok(());
    }

    init_logging();

    let text = if let Some(t) = parse_arg_value(&args, "--text") {
        t
    } else if has_flag(&args, "--demo") {
        SAMPLE_TEXT.to_string()
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read text from stdin")?;
        buf
    };

    let mut request = HumanizeRequest::new(text);
    if let Some(level) = parse_arg_value(&args, "--level") {
        request.education_level = EducationLevel::from_str(&level);
    }
    if let Some(pipeline) = parse_arg_value(&args, "--pipeline") {
        request.pipeline_type = PipelineType::from_str(&pipeline);
    }
    request.paranoid_mode = !has_flag(&args, "--no-paranoid");
    request.writehuman_mode = !has_flag(&args, "--no-writehuman");

    let humanizer = Humanizer::new();
    let result = humanizer
        .humanize(&request)
        .await
        .context("humanization failed")?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
