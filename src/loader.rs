//! Resolving the `source` argument to stylesheet text.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::error::{ExtractError, Result};
use crate::options::Source;

/// Returns the stylesheet text `source` refers to.
pub fn load(source: &str, kind: Source) -> Result<Cow<'_, str>> {
    match kind {
        Source::Content => Ok(Cow::Borrowed(source)),
        Source::File => {
            let path = Path::new(source);
            log::debug!("reading stylesheet from {}", path.display());
            let text = fs::read_to_string(path).map_err(|source| ExtractError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Cow::Owned(text))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_borrowed() {
        assert!(matches!(load(":root {}", Source::Content), Ok(Cow::Borrowed(":root {}"))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load("/definitely/not/here.css", Source::File).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.css"));
    }
}
