use anyhow::Context;
use std::path::Path;

use crate::cli::{
    utils::{output_error, output_success},
    OutputFormat,
};
use crate::hotel::{validate, HotelDraft};

pub fn handle(file: &Path, output_format: OutputFormat) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
    let draft: HotelDraft =
        serde_json::from_str(&raw).with_context(|| format!("{} is not a hotel draft", file.display()))?;

    match validate(&draft) {
        Ok(()) => output_success(
            &output_format,
            &format!("'{}' is a valid hotel listing", draft.title),
            None,
        ),
        Err(errors) => {
            output_error(&output_format, &errors.to_string(), Some(serde_json::to_value(&errors)?))?;
            anyhow::bail!("validation failed")
        }
    }
}
