//! Form normalization
//!
//! Turns raw form state into a transmittable [`GenerationRequest`]: free
//! text is tokenized, the select-all sentinel is expanded against the
//! concrete option catalogs, and the disliked-name snapshot is attached.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{ClientError, ClientResult};
use crate::types::FormValues;
use shared::{GenerationRequest, SELECT_ALL};

/// Preset meanings offered by the form
pub const COMMON_MEANINGS: [&str; 8] = [
    "智慧聪颖",
    "品德高尚",
    "健康平安",
    "前程似锦",
    "坚韧不拔",
    "温文尔雅",
    "积极进取",
    "天赋卓越",
];

/// Preset cultural sources offered by the form
pub const CULTURAL_SOURCES: [&str; 6] = [
    "四书五经",
    "诗经楚辞",
    "唐诗宋词",
    "历史典故",
    "道德经",
    "佛经禅语",
];

/// Split a free-text avoid field into tokens.
///
/// Commas, full-width commas and spaces all act as separators; tokens are
/// trimmed and empties dropped.
pub fn split_free_text(input: &str) -> Vec<String> {
    input
        .split([',', '，', ' '])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expand the select-all sentinel against a concrete option catalog.
///
/// With the sentinel present the whole catalog is selected, followed by any
/// custom entries the user added; the sentinel itself never survives.
pub fn expand_select_all(selected: &[String], catalog: &[&str]) -> Vec<String> {
    let has_sentinel = selected.iter().any(|value| value == SELECT_ALL);

    if !has_sentinel {
        return selected
            .iter()
            .filter(|value| *value != SELECT_ALL)
            .cloned()
            .collect();
    }

    let mut expanded: Vec<String> = catalog.iter().map(|option| option.to_string()).collect();
    for value in selected {
        if value != SELECT_ALL && !expanded.contains(value) {
            expanded.push(value.clone());
        }
    }
    expanded
}

/// Build the serialized request for one submission.
///
/// The disliked snapshot is attached as an exclusion hint; it is never a
/// removal signal.
pub fn build_request(
    form: &FormValues,
    disliked: &BTreeSet<String>,
) -> ClientResult<GenerationRequest> {
    let meanings = expand_select_all(&form.meanings, &COMMON_MEANINGS);
    let cultural_source = expand_select_all(&form.cultural_source, &CULTURAL_SOURCES);

    if meanings.is_empty() {
        return Err(ClientError::InvalidForm {
            message: "请至少选择一个寓意".to_string(),
        });
    }
    if cultural_source.is_empty() {
        return Err(ClientError::InvalidForm {
            message: "请至少选择一个文化来源".to_string(),
        });
    }

    let request = GenerationRequest {
        gender: form.gender,
        meanings,
        cultural_source,
        avoid_characters: split_free_text(&form.avoid_characters),
        avoid_sounds: split_free_text(&form.avoid_sounds),
        count: form.count,
        name_length: form.name_length,
        disliked_names: disliked.iter().cloned().collect(),
    };
    request.validate()?;

    Ok(request)
}

/// Read extra meanings from a newline-delimited text file.
///
/// Each non-blank trimmed line is one meaning token.
pub fn import_meanings(path: &Path) -> ClientResult<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| ClientError::FileImport {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Merge imported meanings into the form's current selection.
pub fn merge_meanings(form: &mut FormValues, imported: Vec<String>) {
    form.meanings.retain(|value| value != SELECT_ALL);
    for meaning in imported {
        if !form.meanings.contains(&meaning) {
            form.meanings.push(meaning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_free_text_handles_mixed_separators() {
        assert_eq!(split_free_text(" 张,李 ，  王"), vec!["张", "李", "王"]);
    }

    #[test]
    fn test_split_free_text_drops_empty_tokens() {
        assert!(split_free_text("").is_empty());
        assert!(split_free_text(" ,，  ,").is_empty());
    }

    #[test]
    fn test_expand_select_all_yields_whole_catalog() {
        let selected = vec![SELECT_ALL.to_string()];
        let expanded = expand_select_all(&selected, &COMMON_MEANINGS);

        assert_eq!(expanded.len(), COMMON_MEANINGS.len());
        assert!(expanded.iter().all(|value| value != SELECT_ALL));
    }

    #[test]
    fn test_expand_select_all_keeps_custom_entries() {
        let selected = vec![SELECT_ALL.to_string(), "自定义寓意".to_string()];
        let expanded = expand_select_all(&selected, &COMMON_MEANINGS);

        assert_eq!(expanded.len(), COMMON_MEANINGS.len() + 1);
        assert_eq!(expanded.last().unwrap(), "自定义寓意");
    }

    #[test]
    fn test_expand_without_sentinel_is_passthrough() {
        let selected = vec!["品德高尚".to_string(), "自定义".to_string()];
        let expanded = expand_select_all(&selected, &COMMON_MEANINGS);
        assert_eq!(expanded, selected);
    }

    #[test]
    fn test_build_request_strips_sentinel_and_attaches_disliked() {
        let form = FormValues {
            meanings: vec![SELECT_ALL.to_string()],
            cultural_source: vec!["道德经".to_string()],
            avoid_characters: "张, 李".to_string(),
            ..FormValues::default()
        };
        let disliked: BTreeSet<String> = ["思远".to_string()].into();

        let request = build_request(&form, &disliked).unwrap();

        assert_eq!(request.meanings.len(), COMMON_MEANINGS.len());
        assert!(request.meanings.iter().all(|m| m != SELECT_ALL));
        assert_eq!(request.cultural_source, vec!["道德经"]);
        assert_eq!(request.avoid_characters, vec!["张", "李"]);
        assert_eq!(request.disliked_names, vec!["思远"]);
    }

    #[test]
    fn test_build_request_requires_selections() {
        let form = FormValues {
            cultural_source: vec!["道德经".to_string()],
            ..FormValues::default()
        };
        assert!(build_request(&form, &BTreeSet::new()).is_err());

        let form = FormValues {
            meanings: vec!["品德高尚".to_string()],
            ..FormValues::default()
        };
        assert!(build_request(&form, &BTreeSet::new()).is_err());
    }

    #[test]
    fn test_import_meanings_reads_non_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "志存高远").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  光明磊落  ").unwrap();
        file.flush().unwrap();

        let imported = import_meanings(file.path()).unwrap();
        assert_eq!(imported, vec!["志存高远", "光明磊落"]);
    }

    #[test]
    fn test_import_meanings_reports_missing_file() {
        let error = import_meanings(Path::new("/nonexistent/meanings.txt")).unwrap_err();
        assert!(matches!(error, ClientError::FileImport { .. }));
    }

    #[test]
    fn test_merge_meanings_drops_sentinel_and_duplicates() {
        let mut form = FormValues {
            meanings: vec![SELECT_ALL.to_string(), "品德高尚".to_string()],
            ..FormValues::default()
        };

        merge_meanings(&mut form, vec!["志存高远".to_string(), "品德高尚".to_string()]);

        assert_eq!(form.meanings, vec!["品德高尚", "志存高远"]);
    }
}
