// validation.rs - Input path selection and usage reporting

use crate::data::Column;
use anyhow::{bail, Result};
use std::path::PathBuf;
use tracing::debug;

fn quoted_headers<'a, I: IntoIterator<Item = &'a Column>>(columns: I) -> String {
    columns
        .into_iter()
        .map(|c| format!("\"{}\"", c.header()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Usage text printed when no input file was given, naming the columns in effect
pub fn usage(suffix: &str, columns: &[Column]) -> String {
    let (required, optional): (Vec<&Column>, Vec<&Column>) =
        columns.iter().partition(|c| Column::REQUIRED.contains(*c));

    let mut text = format!(
        "Usage: userhist [--sort] [--config FILE] <export{suffix}>...\n\
         Each file needs a header row with at least the columns {}.",
        quoted_headers(required)
    );
    if !optional.is_empty() {
        text.push_str(&format!(
            "\nOptional columns {} are read when present.",
            quoted_headers(optional)
        ));
    }
    text.push_str(&format!("\nArguments not ending in {suffix} are ignored."));
    text
}

/// Keep arguments that end with the input suffix, in argument order.
///
/// Fails with the usage text when nothing usable is left.
pub fn select_inputs<S: AsRef<str>>(
    args: &[S],
    suffix: &str,
    columns: &[Column],
) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        if arg.ends_with(suffix) {
            inputs.push(PathBuf::from(arg));
        } else {
            debug!("Ignoring argument without {} suffix: {}", suffix, arg);
        }
    }

    if inputs.is_empty() {
        bail!("{}", usage(suffix, columns));
    }
    Ok(inputs)
}
