//! Generate command handler.

use super::{ContentArgs, PLAN_NOT_SAVED, open_studio};
use captionstudio::{
    StudioSettings,
    render::{render_entry, render_entry_json},
};
use std::process::ExitCode;

/// Handles the generate command.
///
/// Rejections and generation failures are reported to the user with
/// their fixed wording and a failing exit code; the detail is in the log.
#[tracing::instrument(skip_all, fields(tone = %content.tone, platform = %content.platform))]
pub async fn handle_generate_command(
    settings: &StudioSettings,
    topic: String,
    content: ContentArgs,
    json: bool,
) -> anyhow::Result<ExitCode> {
    let (mut studio, store) = open_studio(settings)?;
    let params = content.to_params(topic).map_err(anyhow::Error::msg)?;

    let rendered = studio.generate(params).await.map(|entry| {
        if json {
            render_entry_json(entry)
        } else {
            Ok(render_entry(entry, chrono::Utc::now()))
        }
    });
    let output = match rendered {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Generate command failed");
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    // Output is printed even when the plan state cannot be saved
    let printed = output.map(|text| println!("{}", text));
    if !store.save_or_warn(studio.plan()) {
        eprintln!("{}", PLAN_NOT_SAVED);
    }
    printed?;
    Ok(ExitCode::SUCCESS)
}
