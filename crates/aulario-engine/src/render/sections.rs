use crate::models::block::ContentBlock;

/// A titled group of consecutive blocks subordinate to one top-level heading.
///
/// Derived from the flat block sequence on every render; never persisted.
/// The leading section has an empty title when content appears before the
/// first top-level heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub blocks: Vec<ContentBlock>,
}

impl Section {
    fn anonymous() -> Self {
        Section {
            title: String::new(),
            blocks: Vec::new(),
        }
    }
}

/// Partition a flat block sequence into titled sections.
///
/// Top-level headings are consumed as section titles; sub-headings (see
/// [`is_subheading`]) and all other blocks are appended to the current
/// section, with an anonymous section created on demand for leading content.
///
/// Only partitions, never mutates or drops: concatenating every section's
/// blocks, re-inserting each non-empty title as its heading block, yields
/// the input sequence exactly.
pub fn sectionize(blocks: &[ContentBlock]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Heading { text } if !is_subheading(text) => {
                sections.push(Section {
                    title: text.clone(),
                    blocks: Vec::new(),
                });
            }
            _ => {
                if sections.is_empty() {
                    sections.push(Section::anonymous());
                }
                // Current section is always the last pushed
                sections.last_mut().unwrap().blocks.push(block.clone());
            }
        }
    }

    sections
}

/// Classify heading text as a sub-heading.
///
/// Two patterns qualify:
/// - text begins with `<digits>.<digits>` — a non-empty ASCII digit run, one
///   `.`, another non-empty digit run ("4.2", "40.5", "4.2 Algo"; not
///   "Tema 4").
/// - "ejercicio" (case-insensitive) followed by at least one whitespace
///   character and then an ASCII digit ("Ejercicio 1"; not "Ejercicios").
pub fn is_subheading(text: &str) -> bool {
    starts_numeric_dot_numeric(text) || is_exercise_heading(text)
}

fn starts_numeric_dot_numeric(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == 0 || i >= bytes.len() || bytes[i] != b'.' {
        return false;
    }
    let dot = i;
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i > dot + 1
}

fn is_exercise_heading(text: &str) -> bool {
    const WORD: &str = "ejercicio";

    let lower = text.to_lowercase();
    let Some(rest) = lower.strip_prefix(WORD) else {
        return false;
    };
    let trimmed = rest.trim_start();
    // Must consume at least one whitespace char before the digit
    trimmed.len() < rest.len() && trimmed.starts_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn heading(text: &str) -> ContentBlock {
        ContentBlock::Heading {
            text: text.to_string(),
        }
    }

    fn para(text: &str) -> ContentBlock {
        ContentBlock::Paragraph {
            text: text.to_string(),
        }
    }

    #[rstest]
    #[case("4.2", true)]
    #[case("40.5", true)]
    #[case("4.2 Something", true)]
    #[case("4.2.1", true)]
    #[case("4.", false)]
    #[case(".5", false)]
    #[case("Tema 4", false)]
    #[case("Ejercicio 1", true)]
    #[case("EJERCICIO 3", true)]
    #[case("Ejercicio 1 · Hola mundo", true)]
    #[case("Ejercicios", false)]
    #[case("Ejercicio final", false)]
    #[case("", false)]
    fn subheading_classification(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_subheading(text), expected, "{text:?}");
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert_eq!(sectionize(&[]), vec![]);
    }

    #[test]
    fn top_level_heading_opens_titled_section() {
        let sections = sectionize(&[heading("Tema 4"), para("hola")]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Tema 4");
        assert_eq!(sections[0].blocks, vec![para("hola")]);
    }

    #[test]
    fn leading_content_goes_into_anonymous_section() {
        let sections = sectionize(&[para("intro"), heading("Tema 1"), para("cuerpo")]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "");
        assert_eq!(sections[0].blocks, vec![para("intro")]);
        assert_eq!(sections[1].title, "Tema 1");
        assert_eq!(sections[1].blocks, vec![para("cuerpo")]);
    }

    #[test]
    fn subheading_stays_inside_current_section() {
        let sections = sectionize(&[heading("Tema 4"), heading("4.2"), para("detalle")]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Tema 4");
        assert_eq!(sections[0].blocks, vec![heading("4.2"), para("detalle")]);
    }

    #[test]
    fn leading_subheading_creates_anonymous_section() {
        let sections = sectionize(&[heading("Ejercicio 1"), para("haz algo")]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "");
        assert_eq!(
            sections[0].blocks,
            vec![heading("Ejercicio 1"), para("haz algo")]
        );
    }

    #[test]
    fn consecutive_top_level_headings_leave_empty_sections() {
        let sections = sectionize(&[heading("Tema 1"), heading("Tema 2"), para("x")]);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "Tema 1");
        assert!(sections[0].blocks.is_empty());
        assert_eq!(sections[1].title, "Tema 2");
    }

    /// Concatenating the sections (titles re-inserted as headings) must
    /// reproduce the input sequence exactly.
    #[test]
    fn partition_property() {
        let input = vec![
            para("intro"),
            heading("Tema 1"),
            para("a"),
            heading("4.2"),
            ContentBlock::Code {
                text: "x = 1".to_string(),
            },
            heading("Tema 2"),
            ContentBlock::Unknown,
            heading("Ejercicio 2"),
            para("b"),
        ];
        let sections = sectionize(&input);

        let mut rebuilt = Vec::new();
        for section in &sections {
            if !section.title.is_empty() {
                rebuilt.push(heading(&section.title));
            }
            rebuilt.extend(section.blocks.iter().cloned());
        }
        assert_eq!(rebuilt, input);
    }
}
