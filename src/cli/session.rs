use std::io::Write;

use crate::error::Result;
use crate::renamer::{RenameReport, RenameRequest, SequentialRenamer};

use super::context::CliContext;
use super::entry::Field;

/// How a session ended when nothing went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The user entered the cancel sentinel or declined to continue.
    Cancelled,
    Completed(RenameReport),
}

/// Collect folder, base and extension, confirm, then run the rename pass.
pub async fn execute(ctx: &mut CliContext, out: &mut dyn Write) -> Result<SessionOutcome> {
    writeln!(
        out,
        "(enter {} to cancel at any time)",
        ctx.settings().cancel_sentinel
    )?;

    let Some(folder) = ask(ctx, Field::Folder, out).await? else {
        return cancelled(out);
    };
    let Some(base) = ask(ctx, Field::Base, out).await? else {
        return cancelled(out);
    };
    let Some(ext) = ask(ctx, Field::Extension, out).await? else {
        return cancelled(out);
    };
    let request = RenameRequest::new(folder, base, ext);

    writeln!(out, "folder: {}", request.folder)?;
    writeln!(
        out,
        "new name scheme: {}",
        request.destination_name(ctx.settings().start_index)
    )?;

    if !confirm(ctx, out).await? {
        return cancelled(out);
    }

    let report = SequentialRenamer::new(ctx.client(), ctx.settings())
        .run(&request, out)
        .await?;
    writeln!(
        out,
        "renamed {} file(s), skipped {}",
        report.renamed.len(),
        report.skipped.len()
    )?;
    Ok(SessionOutcome::Completed(report))
}

/// `None` when the prompted answer is the cancel sentinel. Preset values are
/// taken as given.
async fn ask(ctx: &mut CliContext, field: Field, out: &mut dyn Write) -> Result<Option<String>> {
    if let Some(preset) = ctx.preset(field) {
        return Ok(Some(preset.to_string()));
    }

    let answer = ctx
        .prompt_mut()
        .input(field.label(), field.flag(), out)
        .await?;
    if ctx.settings().is_cancel(&answer) {
        log::debug!("cancel sentinel entered at '{}'", field.label());
        Ok(None)
    } else {
        Ok(Some(answer))
    }
}

async fn confirm(ctx: &mut CliContext, out: &mut dyn Write) -> Result<bool> {
    let answer = match ctx.preset(Field::Confirm) {
        Some(preset) => preset.to_string(),
        None => {
            ctx.prompt_mut()
                .input(Field::Confirm.label(), Field::Confirm.flag(), out)
                .await?
        }
    };
    Ok(answer.to_lowercase() == "y")
}

fn cancelled(out: &mut dyn Write) -> Result<SessionOutcome> {
    writeln!(out, "cancelled")?;
    Ok(SessionOutcome::Cancelled)
}
