//! Catalog search over loaded courses.

use crate::models::course::Course;
use crate::text::normalize;

/// Filter courses by a free-text query, accent- and case-insensitively.
///
/// A course matches when the normalized query appears as a substring of its
/// normalized title or description. An empty (or whitespace-only) query
/// matches everything.
pub fn filter_courses<'a>(courses: &'a [Course], query: &str) -> Vec<&'a Course> {
    let needle = normalize(query.trim());
    if needle.is_empty() {
        return courses.iter().collect();
    }
    courses
        .iter()
        .filter(|course| {
            normalize(&course.title).contains(&needle)
                || normalize(&course.description).contains(&needle)
        })
        .collect()
}
