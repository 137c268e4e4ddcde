//! The `(highlight)` inline markup convention.
//!
//! Text fields may wrap a substring in parentheses to have it rendered with
//! the gradient treatment: `"Dra. (Adrielle Benhossi)"` renders "Dra. " as
//! plain text and "Adrielle Benhossi" highlighted. The transformation is a
//! pure scan; unmatched delimiters render literally.

/// One run of text, either plain or highlighted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Segment {
            text: text.into(),
            highlighted: false,
        }
    }

    fn highlighted(text: &str) -> Self {
        Segment {
            text: text.into(),
            highlighted: true,
        }
    }
}

/// Splits `input` into an ordered sequence of plain/highlighted segments.
///
/// Each `(` pairs with the next `)`; nesting is not a thing in this
/// convention. A `(` with no closing `)` is kept as literal text.
pub fn highlight_segments(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = input;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open + 1..].find(')') else {
            break;
        };
        let before = &rest[..open];
        if !before.is_empty() {
            segments.push(Segment::plain(before));
        }
        let inner = &rest[open + 1..open + 1 + close];
        if !inner.is_empty() {
            segments.push(Segment::highlighted(inner));
        }
        rest = &rest[open + 1 + close + 1..];
    }

    if !rest.is_empty() {
        segments.push(Segment::plain(rest));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn name_with_highlighted_surname() {
        assert_eq!(
            highlight_segments("Dra. (Adrielle Benhossi)"),
            vec![
                Segment::plain("Dra. "),
                Segment::highlighted("Adrielle Benhossi"),
            ]
        );
    }

    #[test]
    fn plain_text_is_a_single_segment() {
        assert_eq!(
            highlight_segments("Psicóloga Clínica"),
            vec![Segment::plain("Psicóloga Clínica")]
        );
    }

    #[test]
    fn empty_input_yields_no_segments() {
        assert_eq!(highlight_segments(""), Vec::new());
    }

    #[test]
    fn multiple_pairs_stay_ordered() {
        assert_eq!(
            highlight_segments("Minhas (especialidades) e (abordagens)"),
            vec![
                Segment::plain("Minhas "),
                Segment::highlighted("especialidades"),
                Segment::plain(" e "),
                Segment::highlighted("abordagens"),
            ]
        );
    }

    #[test]
    fn unmatched_open_paren_renders_literally() {
        assert_eq!(
            highlight_segments("CRP (08/123456"),
            vec![Segment::plain("CRP (08/123456")]
        );
    }

    #[test]
    fn empty_pair_is_dropped() {
        assert_eq!(highlight_segments("antes () depois"), vec![
            Segment::plain("antes "),
            Segment::plain(" depois"),
        ]);
    }

    #[test]
    fn fully_highlighted_text() {
        assert_eq!(
            highlight_segments("(Bem-estar)"),
            vec![Segment::highlighted("Bem-estar")]
        );
    }
}
