use std::path::Path;

use crate::{
    core::ParseWarning,
    issues::{Issue, ParseAmbiguousIssue},
};

pub fn parse_warnings_to_issues(path: &Path, warnings: &[ParseWarning]) -> Vec<Issue> {
    let file_path = path.to_string_lossy();
    warnings
        .iter()
        .map(|w| {
            Issue::ParseAmbiguous(ParseAmbiguousIssue {
                file_path: file_path.to_string(),
                line: w.line,
                text: w.text.clone(),
            })
        })
        .collect()
}
