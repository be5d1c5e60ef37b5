//! Declaration walker for raw stylesheet text.
//!
//! Tokenizing and block structure come from `cssparser`, so comments, strings,
//! `url(...)` values and escapes follow CSS Syntax. The walker only records
//! `name: value` declarations; selectors, at-rule preludes and invalid
//! constructs are skipped. Declarations inside nested blocks (`@media`,
//! `@supports`, nested style rules) are reported in document order.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, StyleSheetParser, Token,
};

use super::StylesheetEvent;

/// Pushes one `Property` event per declaration it is handed.
struct DeclarationCollector<'e> {
    events: &'e mut Vec<StylesheetEvent>,
}

impl DeclarationCollector<'_> {
    fn walk_block(&mut self, input: &mut Parser<'_, '_>) {
        for item in RuleBodyParser::new(input, self) {
            if let Err((error, slice)) = item {
                log_skipped(&error, slice);
            }
        }
    }
}

fn log_skipped(error: &ParseError<'_, ()>, slice: &str) {
    log::trace!(
        "Skipping invalid CSS at {}:{}: {:?}",
        error.location.line + 1,
        error.location.column,
        slice
    );
}

// Consumes the rest of the input; reports whether a `{}` block was seen
fn consume_rest(input: &mut Parser<'_, '_>) -> bool {
    let mut saw_block = false;
    while let Ok(token) = input.next() {
        if matches!(token, Token::CurlyBracketBlock) {
            saw_block = true;
        }
    }
    saw_block
}

impl<'i> DeclarationParser<'i> for DeclarationCollector<'_> {
    type Declaration = ();
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
        declaration_start: &ParserState,
    ) -> Result<(), ParseError<'i, ()>> {
        let start = input.position();
        // `a:hover { ... }` is a nested rule, not a declaration
        if consume_rest(input) {
            return Err(input.new_custom_error(()));
        }

        let location = declaration_start.source_location();
        self.events.push(StylesheetEvent::Property {
            name: name.to_string(),
            value: input.slice_from(start).trim().to_string(),
            line: location.line as usize + 1,
            col: location.column as usize,
        });
        Ok(())
    }
}

impl<'i> QualifiedRuleParser<'i> for DeclarationCollector<'_> {
    type Prelude = ();
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(&mut self, input: &mut Parser<'i, 't>) -> Result<(), ParseError<'i, ()>> {
        consume_rest(input);
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: (),
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<(), ParseError<'i, ()>> {
        self.walk_block(input);
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for DeclarationCollector<'_> {
    type Prelude = ();
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<(), ParseError<'i, ()>> {
        consume_rest(input);
        Ok(())
    }

    fn rule_without_block(&mut self, _prelude: (), _start: &ParserState) -> Result<(), ()> {
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: (),
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<(), ParseError<'i, ()>> {
        self.walk_block(input);
        Ok(())
    }
}

impl<'i> RuleBodyItemParser<'i, (), ()> for DeclarationCollector<'_> {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        true
    }
}

/// Turns stylesheet text into the event stream rules listen to.
///
/// The stream always starts with `StartStylesheet` and ends with
/// `EndStylesheet`, even for empty or unbalanced input. Positions are 1-based
/// and point at the property name.
pub fn stylesheet_events(css: &str) -> Vec<StylesheetEvent> {
    let mut events = vec![StylesheetEvent::StartStylesheet];

    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut collector = DeclarationCollector {
        events: &mut events,
    };
    for item in StyleSheetParser::new(&mut parser, &mut collector) {
        if let Err((error, slice)) = item {
            log_skipped(&error, slice);
        }
    }

    events.push(StylesheetEvent::EndStylesheet);
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property_names(css: &str) -> Vec<String> {
        stylesheet_events(css)
            .into_iter()
            .filter_map(|event| match event {
                StylesheetEvent::Property { name, .. } => Some(name),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_stylesheet_has_start_and_end() {
        assert_eq!(
            stylesheet_events(""),
            vec![
                StylesheetEvent::StartStylesheet,
                StylesheetEvent::EndStylesheet
            ]
        );
    }

    #[test]
    fn test_declarations_with_positions() {
        let events = stylesheet_events("a {\n  color: red;\n  -ms-touch-action: none\n}");
        assert_eq!(
            events[1],
            StylesheetEvent::Property {
                name: "color".to_string(),
                value: "red".to_string(),
                line: 2,
                col: 3,
            }
        );
        assert_eq!(
            events[2],
            StylesheetEvent::Property {
                name: "-ms-touch-action".to_string(),
                value: "none".to_string(),
                line: 3,
                col: 3,
            }
        );
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_selectors_with_colons_are_not_declarations() {
        assert_eq!(
            property_names("a:hover, li:nth-child(2) { color: blue; }"),
            vec!["color"]
        );
    }

    #[test]
    fn test_nested_at_rule_blocks() {
        let css = "@media (max-width: 600px) { .pane { -ms-scroll-snap-type: mandatory; } }";
        assert_eq!(property_names(css), vec!["-ms-scroll-snap-type"]);
    }

    #[test]
    fn test_nested_style_rule_with_pseudo_class() {
        let css = ".card { color: red; a:hover { -ms-touch-action: none; } }";
        assert_eq!(property_names(css), vec!["color", "-ms-touch-action"]);
    }

    #[test]
    fn test_comments_are_skipped() {
        let css = "/* -ms-touch-action: none; */ a { /* zoom: 1; */ margin: 0; }";
        assert_eq!(property_names(css), vec!["margin"]);
    }

    #[test]
    fn test_comment_opener_inside_unquoted_url() {
        let css = ".a { background: url(//cdn.example.com/sprites/*.png); }\n.b { -ms-touch-action: none; }";
        let events = stylesheet_events(css);
        assert_eq!(
            events[1],
            StylesheetEvent::Property {
                name: "background".to_string(),
                value: "url(//cdn.example.com/sprites/*.png)".to_string(),
                line: 1,
                col: 6,
            }
        );
        assert_eq!(property_names(css), vec!["background", "-ms-touch-action"]);
    }

    #[test]
    fn test_quoted_semicolons_do_not_split() {
        let events = stylesheet_events(r#"a::after { content: "a;b}"; color: red }"#);
        assert_eq!(
            events[1],
            StylesheetEvent::Property {
                name: "content".to_string(),
                value: "\"a;b}\"".to_string(),
                line: 1,
                col: 12,
            }
        );
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_top_level_statements_ignored() {
        assert_eq!(
            property_names("@import url(\"x.css\");\n@charset \"utf-8\";"),
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_unclosed_block_is_closed_at_eof() {
        let events = stylesheet_events("a { color: red");
        assert_eq!(events.last(), Some(&StylesheetEvent::EndStylesheet));
        assert_eq!(property_names("a { color: red"), vec!["color"]);
    }
}
