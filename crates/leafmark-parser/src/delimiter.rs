//! Delimiter splitting.
//!
//! Splitting on a delimiter alternates between being outside and inside a
//! styled span. A run must start and end outside, so a balanced run always
//! splits into an odd number of fragments:
//!
//! ```text
//! "This is a **bold** text"  --"**"-->  ["This is a ", "bold", " text"]
//!                                         outside      inside  outside
//! ```

use leafmark_core::{LeafmarkError, Result, RunKind, TextRun};
use log::trace;

/// Split every plain run on `delimiter`, styling the enclosed text as `kind`.
///
/// Non-plain runs pass through untouched, so calls for different delimiters
/// can be chained without re-splitting styled text. Plain fragments that come
/// out empty are dropped; fragments of the target kind are always kept. A
/// plain run without the delimiter is returned as-is.
///
/// An empty delimiter splits nothing and returns the input unchanged.
///
/// Fails with [`LeafmarkError::UnbalancedDelimiter`] when a run holds an odd
/// number of delimiters.
pub fn split_delimiter(runs: &[TextRun], delimiter: &str, kind: RunKind) -> Result<Vec<TextRun>> {
    if delimiter.is_empty() {
        return Ok(runs.to_vec());
    }

    let mut out = Vec::with_capacity(runs.len());
    for run in runs {
        if !run.is_plain() {
            out.push(run.clone());
            continue;
        }

        let fragments: Vec<&str> = run.text().split(delimiter).collect();
        if fragments.len() == 1 {
            out.push(run.clone());
            continue;
        }
        if fragments.len() % 2 == 0 {
            return Err(LeafmarkError::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: run.text().to_string(),
            });
        }

        trace!(
            "split {:?} on {:?} into {} fragments",
            run.text(),
            delimiter,
            fragments.len()
        );

        for (i, fragment) in fragments.into_iter().enumerate() {
            if i % 2 == 1 {
                out.push(TextRun::new(fragment, kind));
            } else if !fragment.is_empty() {
                out.push(TextRun::plain(fragment));
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold(text: &str) -> TextRun {
        TextRun::new(text, RunKind::Bold)
    }

    #[test]
    fn test_split_bold() {
        let runs = [TextRun::plain("This is a **bold** text")];
        assert_eq!(
            split_delimiter(&runs, "**", RunKind::Bold).unwrap(),
            vec![
                TextRun::plain("This is a "),
                bold("bold"),
                TextRun::plain(" text"),
            ]
        );
    }

    #[test]
    fn test_split_italic_and_code() {
        let italic = split_delimiter(&[TextRun::plain("This is a _italic_ text")], "_", RunKind::Italic)
            .unwrap();
        assert_eq!(italic[1], TextRun::new("italic", RunKind::Italic));

        let code = split_delimiter(&[TextRun::plain("This is a `code` text")], "`", RunKind::Code)
            .unwrap();
        assert_eq!(code[1], TextRun::new("code", RunKind::Code));
        assert_eq!(code.len(), 3);
    }

    #[test]
    fn test_leading_delimiter_drops_empty_plain() {
        let runs = [TextRun::plain("*This should* be italic")];
        assert_eq!(
            split_delimiter(&runs, "*", RunKind::Italic).unwrap(),
            vec![
                TextRun::new("This should", RunKind::Italic),
                TextRun::plain(" be italic"),
            ]
        );
    }

    #[test]
    fn test_trailing_delimiter_drops_empty_plain() {
        let runs = [TextRun::plain("This should be `code`")];
        assert_eq!(
            split_delimiter(&runs, "`", RunKind::Code).unwrap(),
            vec![
                TextRun::plain("This should be "),
                TextRun::new("code", RunKind::Code),
            ]
        );
    }

    #[test]
    fn test_multiple_spans_same_delimiter() {
        let runs = [TextRun::plain("This __should__ have __two__ bold words")];
        assert_eq!(
            split_delimiter(&runs, "__", RunKind::Bold).unwrap(),
            vec![
                TextRun::plain("This "),
                bold("should"),
                TextRun::plain(" have "),
                bold("two"),
                TextRun::plain(" bold words"),
            ]
        );
    }

    #[test]
    fn test_single_character_span_kept() {
        let runs = [TextRun::plain("a*b*c")];
        assert_eq!(
            split_delimiter(&runs, "*", RunKind::Italic).unwrap(),
            vec![
                TextRun::plain("a"),
                TextRun::new("b", RunKind::Italic),
                TextRun::plain("c"),
            ]
        );
    }

    #[test]
    fn test_empty_span_kept() {
        let runs = [TextRun::plain("a****b")];
        assert_eq!(
            split_delimiter(&runs, "**", RunKind::Bold).unwrap(),
            vec![TextRun::plain("a"), bold(""), TextRun::plain("b")]
        );
    }

    #[test]
    fn test_whole_run_styled() {
        let runs = [TextRun::plain("**all**")];
        assert_eq!(split_delimiter(&runs, "**", RunKind::Bold).unwrap(), vec![bold("all")]);
    }

    #[test]
    fn test_unbalanced_single() {
        let err = split_delimiter(&[TextRun::plain("a **b")], "**", RunKind::Bold).unwrap_err();
        match err {
            LeafmarkError::UnbalancedDelimiter { delimiter, text } => {
                assert_eq!(delimiter, "**");
                assert_eq!(text, "a **b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unbalanced_three_occurrences() {
        let runs = [TextRun::plain("This **is **invalid** markdown syntax")];
        assert!(matches!(
            split_delimiter(&runs, "**", RunKind::Bold),
            Err(LeafmarkError::UnbalancedDelimiter { .. })
        ));
    }

    #[test]
    fn test_unbalanced_names_offending_run() {
        let runs = [TextRun::plain("fine **here**"), TextRun::plain("broken ** here")];
        match split_delimiter(&runs, "**", RunKind::Bold) {
            Err(LeafmarkError::UnbalancedDelimiter { text, .. }) => assert_eq!(text, "broken ** here"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_no_delimiter_unchanged() {
        let runs = [TextRun::plain("nothing to see"), TextRun::plain("")];
        assert_eq!(split_delimiter(&runs, "**", RunKind::Bold).unwrap(), runs.to_vec());
    }

    #[test]
    fn test_empty_delimiter_short_circuits() {
        let runs = [TextRun::plain(""), TextRun::plain("a **b")];
        assert_eq!(split_delimiter(&runs, "", RunKind::Plain).unwrap(), runs.to_vec());
    }

    #[test]
    fn test_empty_input() {
        assert!(split_delimiter(&[], "**", RunKind::Bold).unwrap().is_empty());
    }

    #[test]
    fn test_styled_runs_pass_through() {
        let runs = [
            TextRun::new("**not split**", RunKind::Code),
            TextRun::link("a **b", "https://x.test"),
            TextRun::plain("x **y** z"),
        ];
        assert_eq!(
            split_delimiter(&runs, "**", RunKind::Bold).unwrap(),
            vec![
                TextRun::new("**not split**", RunKind::Code),
                TextRun::link("a **b", "https://x.test"),
                TextRun::plain("x "),
                bold("y"),
                TextRun::plain(" z"),
            ]
        );
    }

    #[test]
    fn test_order_preserved_across_runs() {
        let runs = [TextRun::plain("_a_ b"), TextRun::plain("c _d_")];
        let kinds: Vec<_> = split_delimiter(&runs, "_", RunKind::Italic)
            .unwrap()
            .into_iter()
            .map(|r| (r.text().to_string(), r.kind()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ("a".to_string(), RunKind::Italic),
                (" b".to_string(), RunKind::Plain),
                ("c ".to_string(), RunKind::Plain),
                ("d".to_string(), RunKind::Italic),
            ]
        );
    }

    #[test]
    fn test_chained_delimiters() {
        let runs = [TextRun::plain("**bold** and _italic_")];
        let runs = split_delimiter(&runs, "**", RunKind::Bold).unwrap();
        let runs = split_delimiter(&runs, "_", RunKind::Italic).unwrap();
        assert_eq!(
            runs,
            vec![
                bold("bold"),
                TextRun::plain(" and "),
                TextRun::new("italic", RunKind::Italic),
            ]
        );
    }

    #[test]
    fn test_input_not_mutated() {
        let runs = vec![TextRun::plain("a **b** c")];
        let before = runs.clone();
        let _ = split_delimiter(&runs, "**", RunKind::Bold).unwrap();
        assert_eq!(runs, before);
    }

    #[test]
    fn test_unicode_text() {
        let runs = [TextRun::plain("héllo **wörld** 🌍")];
        assert_eq!(
            split_delimiter(&runs, "**", RunKind::Bold).unwrap(),
            vec![TextRun::plain("héllo "), bold("wörld"), TextRun::plain(" 🌍")]
        );
    }
}
