//! Resolving the list of things to show from arguments and stdin.

use std::io::BufRead;

use crate::fetch::find_urls;

/// Inputs for one run, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputList {
    pub names: Vec<String>,
    /// Whether the names were read from standard input.
    pub from_stdin: bool,
    /// Number of inputs as given, before any URL extraction.
    given: usize,
}

impl InputList {
    pub fn new(names: Vec<String>, from_stdin: bool) -> Self {
        let given = names.len();
        Self {
            names,
            from_stdin,
            given,
        }
    }

    /// Use `images` as given, or read one name per line from `stdin` when
    /// there are none or the first is `-`. Blank lines are skipped.
    pub fn collect<R: BufRead>(images: &[String], stdin: R) -> std::io::Result<Self> {
        if !reads_stdin(images) {
            return Ok(Self::new(images.to_vec(), false));
        }
        let mut names = Vec::new();
        for line in stdin.lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                names.push(trimmed.to_string());
            }
        }
        log::debug!("read {} inputs from stdin", names.len());
        Ok(Self::new(names, true))
    }

    /// Replace every name with the http(s) URLs found in it.
    ///
    /// The header rule still counts the original inputs.
    pub fn into_urls(self) -> Self {
        let names = self
            .names
            .iter()
            .flat_map(|name| find_urls(name))
            .map(str::to_string)
            .collect();
        Self { names, ..self }
    }

    /// Whether each image's name is printed before it.
    ///
    /// Names are hidden with `nofn` or when exactly one input was given as
    /// an argument.
    pub fn show_headers(&self, nofn: bool) -> bool {
        !nofn && (self.from_stdin || self.given != 1)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Whether the image list has to come from standard input.
pub fn reads_stdin(images: &[String]) -> bool {
    images.first().map_or(true, |first| first == "-")
}
