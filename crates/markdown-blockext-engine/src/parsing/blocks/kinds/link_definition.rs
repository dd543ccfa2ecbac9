use crate::parsing::blocks::classify::LineClass;
use crate::parsing::blocks::content::ContentView;
use crate::parsing::blocks::types::{BlockKind, NewBlock};
use crate::parsing::references::{LinkDestination, LinkReference};

/// A parsed `[label]: destination "title"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefinitionSig {
    pub label: String,
    pub destination: String,
    pub title: Option<String>,
}

pub struct LinkDefinition;

impl LinkDefinition {
    /// `rest` is the line text after its indent. The whole line must be the
    /// definition; anything left over makes it a paragraph line.
    pub fn parse(rest: &str) -> Option<LinkDefinitionSig> {
        let rest = rest.strip_prefix('[')?;
        let close = rest.find(']')?;
        let label = &rest[..close];
        if label.trim().is_empty() || label.contains('[') {
            return None;
        }

        let rest = rest[close + 1..].strip_prefix(':')?.trim_start();
        let (destination, rest) = match rest.strip_prefix('<') {
            Some(inner) => {
                let end = inner.find('>')?;
                (&inner[..end], &inner[end + 1..])
            }
            None => {
                let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
                if end == 0 {
                    return None;
                }
                (&rest[..end], &rest[end..])
            }
        };

        let title_part = rest.trim();
        let title = if title_part.is_empty() {
            None
        } else {
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            let closer = match title_part.chars().next()? {
                '"' => '"',
                '\'' => '\'',
                '(' => ')',
                _ => return None,
            };
            let inner = title_part[1..].strip_suffix(closer)?;
            Some(inner.to_string())
        };

        Some(LinkDefinitionSig {
            label: label.to_string(),
            destination: destination.to_string(),
            title,
        })
    }

    pub fn reference(sig: &LinkDefinitionSig) -> LinkReference {
        LinkReference {
            label: sig.label.clone(),
            destination: LinkDestination::Url(sig.destination.clone()),
            title: sig.title.clone(),
        }
    }

    pub fn block(line: &LineClass, sig: &LinkDefinitionSig) -> NewBlock {
        NewBlock {
            kind: BlockKind::LinkDefinition {
                label: sig.label.clone(),
                destination: sig.destination.clone(),
                title: sig.title.clone(),
            },
            span: line.line,
            line: line.number,
            column: line.content_start,
            content: ContentView::Contiguous(line.span_of(line.content_start, line.text.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sig(label: &str, destination: &str, title: Option<&str>) -> LinkDefinitionSig {
        LinkDefinitionSig {
            label: label.to_string(),
            destination: destination.to_string(),
            title: title.map(str::to_string),
        }
    }

    #[rstest]
    #[case("[intro]: /docs/intro", Some(sig("intro", "/docs/intro", None)))]
    #[case("[Intro]:   <a b>", Some(sig("Intro", "a b", None)))]
    #[case(r#"[x]: https://e.com "Home""#, Some(sig("x", "https://e.com", Some("Home"))))]
    #[case("[x]: /y 'single'", Some(sig("x", "/y", Some("single"))))]
    #[case("[x]: /y (paren)", Some(sig("x", "/y", Some("paren"))))]
    #[case("[x]: /y trailing", None)]
    #[case("[x]:", None)]
    #[case("[]: /y", None)]
    #[case("[x] /y", None)]
    #[case(r#"[x]: /y "open"#, None)]
    fn parses_definitions(#[case] line: &str, #[case] expected: Option<LinkDefinitionSig>) {
        assert_eq!(LinkDefinition::parse(line), expected);
    }
}
