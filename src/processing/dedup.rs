//! Duplicate elimination for a line-aligned bilingual corpus.
//!
//! Operates on two files (L1 and L2) where line n of one is the translation
//! of line n of the other. A line pair is a duplicate if the same L1 string
//! appears on two lines and the L2 strings on those same lines are also
//! equal to each other. If the L1 side repeats but the L2 side holds two
//! different translations, the pair is kept.
//!
//! Every member of a duplicate group is dropped, on both sides, so the
//! files stay line-aligned.
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::error::Error;

/// Outcome of a deduplication run.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DedupReport {
    /// line pairs in the input files.
    pub lines: usize,
    /// line pairs removed as duplicates.
    pub removed: usize,
    pub output_l1: PathBuf,
    pub output_l2: PathBuf,
}

/// group lines by content, keeping only strings occurring more than once.
/// Line ids are 1-based.
fn duplicate_sets(lines: &[String]) -> HashMap<&str, HashSet<usize>> {
    let mut by_string: HashMap<&str, HashSet<usize>> = HashMap::new();
    for (idx, line) in lines.iter().enumerate() {
        by_string.entry(line.as_str()).or_default().insert(idx + 1);
    }
    by_string.retain(|_, ids| ids.len() > 1);
    by_string
}

/// Find ids (1-based) of line pairs duplicated on both sides.
///
/// For each set of L1 lines holding the same string, a pair is deleted if at
/// least one other line of the set carries the same L2 string. The result
/// does not depend on iteration order: deletions are unions of
/// intersections between L1 and L2 duplicate sets.
pub fn parallel_duplicates(l1: &[String], l2: &[String]) -> HashSet<usize> {
    let l1_sets = duplicate_sets(l1);
    let l2_sets = duplicate_sets(l2);

    // line id -> the set of l2 lines sharing its string
    let mut l2_by_id: HashMap<usize, &HashSet<usize>> = HashMap::new();
    for ids in l2_sets.values() {
        for id in ids {
            l2_by_id.insert(*id, ids);
        }
    }

    let mut to_delete = HashSet::new();
    for ids in l1_sets.values() {
        for id in ids {
            if let Some(l2_ids) = l2_by_id.get(id) {
                let intersection: HashSet<usize> =
                    ids.intersection(l2_ids).copied().collect();
                if intersection.len() > 1 {
                    to_delete.extend(&intersection);
                }
                // the whole l1 set is covered, no further id can add anything
                if intersection.is_superset(ids) {
                    break;
                }
            }
        }
    }
    to_delete
}

/// `corpus.en` -> `corpus.dupl_rem.en`
fn output_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => path.with_extension(format!("dupl_rem.{}", ext)),
        None => {
            let mut p = path.as_os_str().to_owned();
            p.push(".dupl_rem");
            PathBuf::from(p)
        }
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(String::from)
        .collect())
}

fn write_kept(lines: &[String], path: &Path, delete: &HashSet<usize>) -> Result<(), Error> {
    let mut out = String::new();
    for (idx, line) in lines.iter().enumerate() {
        if !delete.contains(&(idx + 1)) {
            out.push_str(line);
            out.push('\n');
        }
    }
    fs::write(path, out)?;
    Ok(())
}

/// Deduplicate a pair of line-aligned files, writing `.dupl_rem.` siblings.
pub fn dedup(l1: &Path, l2: &Path) -> Result<DedupReport, Error> {
    info!("eliminating duplicate pairs from {:?} / {:?}", l1, l2);

    let l1_lines = read_lines(l1)?;
    let l2_lines = read_lines(l2)?;
    if l1_lines.len() != l2_lines.len() {
        return Err(Error::Custom(format!(
            "files are not line-aligned: {} lines vs {}",
            l1_lines.len(),
            l2_lines.len()
        )));
    }

    let to_delete = parallel_duplicates(&l1_lines, &l2_lines);

    let output_l1 = output_path(l1);
    let output_l2 = output_path(l2);
    write_kept(&l1_lines, &output_l1, &to_delete)?;
    write_kept(&l2_lines, &output_l2, &to_delete)?;

    info!(
        "removed {} duplicate pairs out of {}",
        to_delete.len(),
        l1_lines.len()
    );
    Ok(DedupReport {
        lines: l1_lines.len(),
        removed: to_delete.len(),
        output_l1,
        output_l2,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::{Path, PathBuf};

    use super::{dedup, output_path, parallel_duplicates};

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_pair_duplicates_removed_entirely() {
        let l1 = lines(&["a", "b", "a", "c"]);
        let l2 = lines(&["x", "y", "x", "z"]);

        // lines 1 and 3 repeat on both sides: both go
        let deleted = parallel_duplicates(&l1, &l2);
        assert_eq!(deleted, HashSet::from([1, 3]));
    }

    #[test]
    fn test_different_translations_kept() {
        // same l1 string twice, but translated differently: keep both pairs
        let l1 = lines(&["a", "b", "a"]);
        let l2 = lines(&["x", "y", "z"]);

        assert!(parallel_duplicates(&l1, &l2).is_empty());
    }

    #[test]
    fn test_l2_only_duplicates_kept() {
        let l1 = lines(&["a", "b", "c"]);
        let l2 = lines(&["x", "x", "x"]);

        assert!(parallel_duplicates(&l1, &l2).is_empty());
    }

    #[test]
    fn test_partial_intersection() {
        // "a" on lines 1, 3, 5; l2 matches only on lines 3 and 5
        let l1 = lines(&["a", "b", "a", "c", "a"]);
        let l2 = lines(&["x", "y", "w", "z", "w"]);

        let deleted = parallel_duplicates(&l1, &l2);
        assert_eq!(deleted, HashSet::from([3, 5]));
    }

    #[test]
    fn test_independent_groups() {
        let l1 = lines(&["a", "a", "b", "b", "c"]);
        let l2 = lines(&["x", "x", "y", "y", "z"]);

        let deleted = parallel_duplicates(&l1, &l2);
        assert_eq!(deleted, HashSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("dir/corpus.en")),
            PathBuf::from("dir/corpus.dupl_rem.en")
        );
        assert_eq!(
            output_path(Path::new("corpus")),
            PathBuf::from("corpus.dupl_rem")
        );
    }

    #[test]
    fn test_dedup_files() {
        let dir = tempfile::tempdir().unwrap();
        let l1 = dir.path().join("corpus.de");
        let l2 = dir.path().join("corpus.en");
        std::fs::write(&l1, "Hallo\nWelt\nHallo\nTschüss\n").unwrap();
        std::fs::write(&l2, "Hello\nWorld\nHello\nBye\n").unwrap();

        let report = dedup(&l1, &l2).unwrap();
        assert_eq!(report.lines, 4);
        assert_eq!(report.removed, 2);
        assert_eq!(report.output_l1, dir.path().join("corpus.dupl_rem.de"));

        let kept_l1 = std::fs::read_to_string(&report.output_l1).unwrap();
        let kept_l2 = std::fs::read_to_string(&report.output_l2).unwrap();
        assert_eq!(kept_l1, "Welt\nTschüss\n");
        assert_eq!(kept_l2, "World\nBye\n");
    }

    #[test]
    fn test_dedup_misaligned_files() {
        let dir = tempfile::tempdir().unwrap();
        let l1 = dir.path().join("corpus.de");
        let l2 = dir.path().join("corpus.en");
        std::fs::write(&l1, "eins\nzwei\n").unwrap();
        std::fs::write(&l2, "one\n").unwrap();

        assert!(dedup(&l1, &l2).is_err());
    }
}
