//! The sequential rename pass over one folder.

use std::ffi::OsStr;
use std::io::Write;

use log::{debug, info};

use crate::config::RenameSettings;
use crate::error::{Error, Result};
use crate::storage::StorageClient;
use crate::storage::utils::path::{build_entry_path, display_path};

/// The three answers collected before a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    pub folder: String,
    pub base: String,
    pub ext: String,
}

impl RenameRequest {
    pub fn new(
        folder: impl Into<String>,
        base: impl Into<String>,
        ext: impl Into<String>,
    ) -> Self {
        Self {
            folder: folder.into(),
            base: base.into(),
            ext: ext.into(),
        }
    }

    /// Plain suffix match on the raw bytes of the entry name: `"pg"` matches
    /// `"image.jpg"`, and names that are not valid UTF-8 still match.
    pub fn matches(&self, name: impl AsRef<OsStr>) -> bool {
        name.as_ref()
            .as_encoded_bytes()
            .ends_with(self.ext.as_bytes())
    }

    /// `{base}{index}.{ext}`
    pub fn destination_name(&self, index: u64) -> String {
        format!("{}{}.{}", self.base, index, self.ext)
    }
}

/// What a completed pass did, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub renamed: Vec<(String, String)>,
    pub skipped: Vec<String>,
    /// The index the next match would have received.
    pub next_index: u64,
}

pub struct SequentialRenamer<'a> {
    client: &'a StorageClient,
    start_index: u64,
    sort_entries: bool,
}

impl<'a> SequentialRenamer<'a> {
    pub fn new(client: &'a StorageClient, settings: &RenameSettings) -> Self {
        Self {
            client,
            start_index: settings.start_index,
            sort_entries: settings.sort_entries,
        }
    }

    /// Rename every matching entry of the folder, writing skip diagnostics to
    /// `out`.
    ///
    /// Aborts on the first storage failure. A destination that already exists
    /// and is not the source itself is never overwritten; entries renamed
    /// before the failure stay renamed.
    pub async fn run(&self, request: &RenameRequest, out: &mut dyn Write) -> Result<RenameReport> {
        let mut entries = self.client.list_entries(&request.folder).await?;
        if self.sort_entries {
            entries.sort();
        }

        let matching = entries.iter().filter(|name| request.matches(name)).count();
        ensure_index_room(self.start_index, matching)?;

        let mut report = RenameReport {
            next_index: self.start_index,
            ..Default::default()
        };

        for name in entries {
            let src = build_entry_path(&request.folder, &name);
            if !request.matches(&name) {
                writeln!(
                    out,
                    "error: original file does not end with {} extension!",
                    request.ext
                )?;
                writeln!(out, "{}", src.display())?;
                writeln!(out, "skipping")?;
                report.skipped.push(display_path(&src));
                continue;
            }

            let dest_name = request.destination_name(report.next_index);
            let dst = build_entry_path(&request.folder, &dest_name);
            report.next_index += 1;

            if src != dst && self.client.exists(&dst).await? {
                return Err(Error::RenameTargetExists {
                    src_path: display_path(&src),
                    dest_path: display_path(&dst),
                });
            }

            debug!("renaming {} -> {}", src.display(), dst.display());
            self.client.rename(&src, &dst).await?;
            report.renamed.push((display_path(&src), display_path(&dst)));
        }

        info!(
            "renamed {} entries in {}, skipped {}",
            report.renamed.len(),
            request.folder,
            report.skipped.len()
        );
        Ok(report)
    }
}

/// Every one of `matching` entries, plus the reported next index, must fit
/// in the counter.
fn ensure_index_room(start_index: u64, matching: usize) -> Result<()> {
    u64::try_from(matching)
        .ok()
        .and_then(|count| start_index.checked_add(count))
        .map(|_| ())
        .ok_or_else(|| Error::InvalidArgument {
            message: format!(
                "start index {start_index} leaves no room for {matching} sequential names"
            ),
        })
}
