use serde::Serialize;

/// One run of prose, either plain text or an inline code span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineSegment {
    Text(String),
    Code(String),
}

/// Split prose on backticks into alternating plain/code segments.
///
/// Chunks at even split positions are plain, odd positions are code. There
/// is no escaping and no nesting; an unmatched trailing backtick leaves a
/// dangling odd chunk which degrades to plain text rather than erroring.
/// Empty chunks (adjacent backticks, or a leading/trailing backtick) emit
/// no segment.
pub fn render_inline(text: &str) -> Vec<InlineSegment> {
    let chunks: Vec<&str> = text.split('`').collect();
    let dangling_code = chunks.len() % 2 == 0;

    let mut segments = Vec::new();
    for (i, chunk) in chunks.iter().enumerate() {
        if chunk.is_empty() {
            continue;
        }
        let is_code = i % 2 == 1 && !(dangling_code && i == chunks.len() - 1);
        segments.push(if is_code {
            InlineSegment::Code(chunk.to_string())
        } else {
            InlineSegment::Text(chunk.to_string())
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> InlineSegment {
        InlineSegment::Text(s.to_string())
    }

    fn code(s: &str) -> InlineSegment {
        InlineSegment::Code(s.to_string())
    }

    #[test]
    fn plain_text_only() {
        assert_eq!(render_inline("hola mundo"), vec![text("hola mundo")]);
    }

    #[test]
    fn code_span_in_the_middle() {
        assert_eq!(
            render_inline("usa `IDLE` y guarda"),
            vec![text("usa "), code("IDLE"), text(" y guarda")]
        );
    }

    #[test]
    fn leading_code_span() {
        assert_eq!(
            render_inline("`print` imprime"),
            vec![code("print"), text(" imprime")]
        );
    }

    #[test]
    fn multiple_code_spans() {
        assert_eq!(
            render_inline("`a` y `b`"),
            vec![code("a"), text(" y "), code("b")]
        );
    }

    #[test]
    fn unmatched_trailing_backtick_degrades_to_plain() {
        assert_eq!(
            render_inline("abre `IDLE y sigue"),
            vec![text("abre "), text("IDLE y sigue")]
        );
    }

    #[test]
    fn adjacent_backticks_emit_nothing() {
        assert_eq!(render_inline("a``b"), vec![text("a"), text("b")]);
    }

    #[test]
    fn empty_string() {
        assert_eq!(render_inline(""), vec![]);
    }

    #[test]
    fn lone_backtick() {
        assert_eq!(render_inline("`"), vec![]);
    }
}
