//! CSS selector support for the in-memory DOM.
//!
//! Parsing and matching go through the `selectors` crate; this module only supplies the
//! `SelectorImpl` plumbing. Pseudo-classes other than the tree-structural ones the crate
//! handles itself (`:first-child`, `:nth-child()`, `:empty`, `:root`, ...) and all
//! pseudo-elements are rejected at parse time.

use cssparser::{ParserInput, ToCss};
use selectors::matching::{
    IgnoreNthChildForInvalidation, MatchingContext, MatchingMode, NeedsSelectorFlags, QuirksMode,
};
use selectors::parser::{ParseRelative, SelectorImpl, SelectorParseErrorKind};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Invalid selector '{selector}' at {line}:{column}: {reason}")]
    Invalid {
        selector: String,
        reason: String,
        line: u32,
        column: u32,
    },
}

impl SelectorError {
    fn from_parse_error(
        selector: &str,
        err: cssparser::ParseError<'_, SelectorParseErrorKind<'_>>,
    ) -> Self {
        SelectorError::Invalid {
            selector: selector.to_string(),
            reason: format!("{:?}", err.kind),
            line: err.location.line,
            column: err.location.column,
        }
    }
}

/// String type used for every selector atom (identifiers, names, namespace URLs, values).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CssString(pub String);

impl From<&str> for CssString {
    fn from(s: &str) -> Self {
        CssString(s.to_string())
    }
}

impl std::ops::Deref for CssString {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for CssString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for CssString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl ToCss for CssString {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_str(&self.0)
    }
}

impl precomputed_hash::PrecomputedHash for CssString {
    fn precomputed_hash(&self) -> u32 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomSelectorImpl;

impl SelectorImpl for DomSelectorImpl {
    type ExtraMatchingData<'a> = ();
    type AttrValue = CssString;
    type Identifier = CssString;
    type LocalName = CssString;
    type NamespacePrefix = CssString;
    type NamespaceUrl = CssString;
    type BorrowedLocalName = str;
    type BorrowedNamespaceUrl = str;

    type NonTSPseudoClass = PseudoClass;
    type PseudoElement = PseudoElement;
}

/// No state pseudo-class is parsed, so this type has no values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoClass {}

impl selectors::parser::NonTSPseudoClass for PseudoClass {
    type Impl = DomSelectorImpl;

    fn is_active_or_hover(&self) -> bool {
        match *self {}
    }

    fn is_user_action_state(&self) -> bool {
        match *self {}
    }
}

impl ToCss for PseudoClass {
    fn to_css<W>(&self, _dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match *self {}
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoElement {}

impl selectors::parser::PseudoElement for PseudoElement {
    type Impl = DomSelectorImpl;
}

impl ToCss for PseudoElement {
    fn to_css<W>(&self, _dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        match *self {}
    }
}

struct DomSelectorParser;

impl<'i> selectors::parser::Parser<'i> for DomSelectorParser {
    type Impl = DomSelectorImpl;
    type Error = SelectorParseErrorKind<'i>;
}

/// A parsed selector list (`a, b > c`).
#[derive(Debug, Clone)]
pub struct SelectorList(selectors::parser::SelectorList<DomSelectorImpl>);

impl SelectorList {
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let mut input = ParserInput::new(selector);
        let mut parser = cssparser::Parser::new(&mut input);
        selectors::parser::SelectorList::parse(&DomSelectorParser, &mut parser, ParseRelative::No)
            .map(SelectorList)
            .map_err(|err| SelectorError::from_parse_error(selector, err))
    }

    pub fn matches<E>(&self, element: &E) -> bool
    where
        E: selectors::Element<Impl = DomSelectorImpl>,
    {
        let mut nth_index_cache = Default::default();
        let mut context = MatchingContext::new(
            MatchingMode::Normal,
            None,
            &mut nth_index_cache,
            QuirksMode::NoQuirks,
            NeedsSelectorFlags::No,
            IgnoreNthChildForInvalidation::No,
        );
        selectors::matching::matches_selector_list(&self.0, element, &mut context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lists_and_combinators() {
        let inputs = [
            "span",
            "*",
            ".mySpan",
            "#s1",
            "div > p span",
            "em, [title='x, y']",
            "li:first-child",
        ];
        for sel in inputs {
            assert!(SelectorList::parse(sel).is_ok(), "{sel}");
        }
    }

    #[test]
    fn rejects_state_pseudo_classes_and_pseudo_elements() {
        for sel in ["a:hover", "p::before", "", "a,", "a >"] {
            let err = SelectorList::parse(sel).unwrap_err();
            let SelectorError::Invalid { selector, .. } = &err;
            assert_eq!(selector, sel);
        }
    }

    #[test]
    fn error_reports_location() {
        let err = SelectorList::parse("div\n  a:hover").unwrap_err();
        assert!(err.to_string().starts_with("Invalid selector 'div\n  a:hover' at "));
    }
}
