//! Block grammar shared by both response resources.
//!
//! A resource is a sequence of blocks of non-blank lines, separated by a
//! single blank line. Two or more consecutive blank lines are rejected.

use std::collections::HashMap;
use std::iter::Enumerate;
use std::vec::IntoIter;

use crate::error::ResponderError;

/// Keyword -> response text.
pub type ResponseMap = HashMap<String, String>;

/// Iterator over the blocks of a resource. Stops after the first error.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`.
pub struct Blocks<'a> {
    name: &'a str,
    lines: Enumerate<IntoIter<&'a str>>,
    blank_run: usize,
    failed: bool,
}

impl<'a> Blocks<'a> {
    pub fn new(name: &'a str, text: &'a str) -> Self {
        Self {
            name,
            lines: split_lines(text).into_iter().enumerate(),
            blank_run: 0,
            failed: false,
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Result<Vec<&'a str>, ResponderError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let mut block = Vec::new();
        for (i, line) in self.lines.by_ref() {
            if line.trim().is_empty() {
                self.blank_run += 1;
                if self.blank_run >= 2 {
                    self.failed = true;
                    return Some(Err(ResponderError::MalformedInput {
                        name: self.name.to_owned(),
                        line: i + 1,
                    }));
                }
                if !block.is_empty() {
                    return Some(Ok(block));
                }
            } else {
                self.blank_run = 0;
                block.push(line);
            }
        }
        if block.is_empty() {
            None
        } else {
            Some(Ok(block))
        }
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = text.split('\n').collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }
    segments
        .into_iter()
        .flat_map(|segment| segment.strip_suffix('\r').unwrap_or(segment).split('\r'))
        .collect()
}

/// Trims a key and strips its double quotes: ` "hello"` -> `hello`.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().replace('"', "")
}

/// Adds every keyed block of `text` to `map` and returns the number of blocks
/// committed. On error, blocks committed before the offending line stay in `map`.
pub fn fill_response_map(map: &mut ResponseMap, name: &str, text: &str) -> Result<usize, ResponderError> {
    let mut committed = 0;
    for block in Blocks::new(name, text) {
        let block = block?;
        let Some((key_line, response_lines)) = block.split_first() else {
            continue;
        };
        if response_lines.is_empty() {
            log::warn!("Skipping keys {:?} in {} without a response", key_line, name);
            continue;
        }
        let response = response_lines.join("\n");
        for key in key_line.split(',').map(normalize_key) {
            if key.is_empty() {
                log::debug!("Skipping empty key in {:?}", key_line);
                continue;
            }
            map.insert(key, response.clone());
        }
        committed += 1;
    }
    Ok(committed)
}

/// Appends every block of `text` to `responses`, in order. On error, the
/// blocks read before the offending line stay in `responses`.
pub fn fill_default_responses(
    responses: &mut Vec<String>,
    name: &str,
    text: &str,
) -> Result<usize, ResponderError> {
    let before = responses.len();
    for block in Blocks::new(name, text) {
        responses.push(block?.join("\n"));
    }
    Ok(responses.len() - before)
}
