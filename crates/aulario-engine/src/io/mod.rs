use crate::models::course::Course;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Course file not found: {0}")]
    NotFound(PathBuf),
    #[error("Invalid courses directory: {0}")]
    InvalidCoursesDir(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read and parse one course JSON file.
pub fn load_course(path: &Path) -> Result<Course, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every `.json` course file in the catalog directory, sorted by file
/// name so the catalog order is stable across platforms.
pub fn load_catalog(courses_root: &Path) -> Result<Vec<Course>, IoError> {
    if !courses_root.is_dir() {
        return Err(IoError::InvalidCoursesDir(
            courses_root.display().to_string(),
        ));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(courses_root)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    paths.iter().map(|path| load_course(path)).collect()
}

/// Check that a path is usable as a courses directory.
pub fn validate_courses_dir(path: &Path) -> Result<(), IoError> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(IoError::InvalidCoursesDir(path.display().to_string()))
    }
}
