use log::{debug, warn};

use crate::errors::DirectiveError;
use crate::manifest_model::{GroupHandle, ManifestModel};
use crate::media::{Media, MediaGroup};
use crate::media_interval::MediaInterval;

// @module: Command-line directive dispatch

/// Applies a directive sequence to the model, left to right.
///
/// The grammar is the flag-plus-option-list style of the original tool:
/// `-mg`/`-m`/`-mi` each consume one comma-separated `key=value` list and
/// append to (or fill) the model, `-o` consumes the output filename, `-v`
/// prints the version and keeps going, `-h`/`-?` (or an empty sequence)
/// request usage. Unrecognized directives are skipped. `-m` with no group
/// started yet is dropped with a warning.
pub fn apply(args: &[String], model: &mut ManifestModel) -> Result<(), DirectiveError> {
    if args.is_empty() {
        return Err(DirectiveError::UsageRequested);
    }

    let mut current_group: Option<GroupHandle> = None;
    let mut tokens = args.iter();
    while let Some(token) = tokens.next() {
        match token.as_str() {
            "-mg" => {
                let options = next_value(&mut tokens, token)?;
                let handle = model.add_media_group();
                apply_group_options(options, model.media_group_mut(handle));
                current_group = Some(handle);
            }
            "-m" => {
                let options = next_value(&mut tokens, token)?;
                match current_group {
                    Some(handle) => {
                        let media = model.media_group_mut(handle).add_media();
                        apply_media_options(options, media);
                    }
                    // Lenient by inherited behavior: the directive is dropped
                    None => warn!("ignoring -m directive, no media group started yet"),
                }
            }
            "-mi" => {
                let options = next_value(&mut tokens, token)?;
                let handle = model.add_media_interval();
                apply_interval_options(options, model.media_interval_mut(handle));
            }
            "-o" => {
                let filename = next_value(&mut tokens, token)?;
                model.set_output_filename(filename);
            }
            "-v" => println!("version: {}", env!("CARGO_PKG_VERSION")),
            "-h" | "-?" => return Err(DirectiveError::UsageRequested),
            other => debug!("skipping unrecognized directive '{}'", other),
        }
    }

    Ok(())
}

/// The value operand of a directive, or the usage error for a bare flag
fn next_value<'a, I>(tokens: &mut I, directive: &str) -> Result<&'a str, DirectiveError>
where
    I: Iterator<Item = &'a String>,
{
    tokens
        .next()
        .map(String::as_str)
        .ok_or_else(|| DirectiveError::MissingValue {
            directive: directive.to_string(),
        })
}

/// Splits a comma-separated option list into `(key, value)` pairs.
/// An option without `=` yields an empty value; empty options yield nothing
/// a consumer recognizes and fall through harmlessly.
fn key_values(option_list: &str) -> impl Iterator<Item = (&str, &str)> {
    option_list
        .split(',')
        .map(|option| option.split_once('=').unwrap_or((option, "")))
}

fn apply_group_options(option_list: &str, group: &mut MediaGroup) {
    for (key, value) in key_values(option_list) {
        match key {
            "id" => group.set_id(value),
            "lang" => group.set_lang(value),
            _ => {}
        }
    }
}

fn apply_media_options(option_list: &str, media: &mut Media) {
    for (key, value) in key_values(option_list) {
        match key {
            "id" => media.set_id(value),
            "file" => media.set_file(value),
            _ => {}
        }
    }
}

fn apply_interval_options(option_list: &str, interval: &mut MediaInterval) {
    for (key, value) in key_values(option_list) {
        match key {
            "id" => interval.set_id(value),
            "start" => interval.set_start(parse_seconds(key, value)),
            "duration" => interval.set_duration(parse_seconds(key, value)),
            "groups" => {
                for group_id in split_group_refs(value) {
                    interval.add_group_reference(group_id);
                }
            }
            _ => {}
        }
    }
}

/// Lenient float parsing matching the original stream-extraction semantics:
/// the longest valid leading float wins, anything else falls back to 0.0
fn parse_seconds(key: &str, value: &str) -> f64 {
    let trimmed = value.trim_start();
    for end in (1..=trimmed.len()).rev() {
        if !trimmed.is_char_boundary(end) {
            continue;
        }
        if let Ok(seconds) = trimmed[..end].parse::<f64>() {
            if end < trimmed.len() {
                warn!(
                    "option {}={} has trailing garbage, using {}",
                    key, value, seconds
                );
            }
            return seconds;
        }
    }
    warn!("option {}={} is not a number, using 0", key, value);
    0.0
}

/// Splits a colon-separated group reference list.
/// An empty list yields nothing; a trailing separator is tolerated; interior
/// empty segments are preserved (and will fail reference resolution later).
fn split_group_refs(value: &str) -> Vec<&str> {
    if value.is_empty() {
        return Vec::new();
    }
    let value = value.strip_suffix(':').unwrap_or(value);
    value.split(':').collect()
}
