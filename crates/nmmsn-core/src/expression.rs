//! Name-element expressions.
//!
//! An expression is either empty or an odd-length alternation
//! `term, operator, term, ..., term`. Terms are bilingual labels and
//! operators are AND or OR, so `root | 根 and rhizome | 根茎 or leaf | 叶`
//! reads "(root and rhizome) or leaf". AND binds tighter than OR: the maximal
//! AND-only runs between ORs are called clauses.
//!
//! Expressions are immutable; every transformation returns a new value.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use nmmsn_model::{
    InvalidElement, Malformation, NamingError, NeeItem, Operator, Result, Side, Term,
};
use nmmsn_normalization::{
    CharPolicy, capitalize, collapse_whitespace, filter_chars, remove_whitespace,
};
use tracing::trace;

use crate::relation::{Relation, RelationKind};

/// Separator between the two labels of a term in the text form.
pub const FIELD_SEPARATOR: char = '|';

/// One element of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Term(Term),
    Operator(Operator),
}

impl Element {
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Element::Term(term) => Some(term),
            Element::Operator(_) => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Element::Operator(operator) => Some(*operator),
            Element::Term(_) => None,
        }
    }

    fn to_item(&self) -> NeeItem {
        match self {
            Element::Term(term) => NeeItem::from(term),
            Element::Operator(operator) => NeeItem::from(*operator),
        }
    }
}

/// A validated name-element expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Expression {
    elements: Vec<Element>,
}

impl Expression {
    /// Parses wire items.
    ///
    /// Terms with a blank label are dropped before the alternation rules are
    /// checked, so `[["a", "甲"], "or", ["", "乙"]]` fails as malformed.
    pub fn parse(items: &[NeeItem]) -> Result<Self> {
        let mut elements = Vec::with_capacity(items.len());
        for item in items {
            match item {
                NeeItem::Term(labels) => {
                    let [primary, localized] = labels.as_slice() else {
                        return Err(NamingError::InvalidElement(InvalidElement::TermArity));
                    };
                    match Term::new(primary, localized) {
                        Some(term) => elements.push(Element::Term(term)),
                        None => trace!(?labels, "dropping term with a blank label"),
                    }
                }
                NeeItem::Operator(word) => {
                    let operator = word
                        .parse::<Operator>()
                        .map_err(|_| NamingError::InvalidElement(InvalidElement::UnknownOperator))?;
                    elements.push(Element::Operator(operator));
                }
            }
        }
        Self::from_elements(elements)
    }

    /// Parses the text form, e.g. `a | 甲 and b | 乙 or c | 丙`.
    ///
    /// The words `and` and `or` (any case, whitespace delimited) are
    /// operators. Every other segment is split on `|` into the two labels of
    /// a term; a segment without `|` is kept as a bare word and therefore
    /// rejected as an unknown operator.
    pub fn parse_text(text: &str) -> Result<Self> {
        let mut items = Vec::new();
        let mut segment: Vec<&str> = Vec::new();
        for word in text.split_whitespace() {
            if word.parse::<Operator>().is_ok() {
                flush_segment(&mut segment, &mut items);
                items.push(NeeItem::Operator(word.to_string()));
            } else {
                segment.push(word);
            }
        }
        flush_segment(&mut segment, &mut items);
        Self::parse(&items)
    }

    /// Builds an expression from elements, checking the alternation rules.
    pub fn from_elements(elements: Vec<Element>) -> Result<Self> {
        validate_alternation(&elements)?;
        Ok(Self { elements })
    }

    /// Joins terms with a single operator.
    pub fn joined(terms: impl IntoIterator<Item = Term>, operator: Operator) -> Self {
        let mut elements = Vec::new();
        for term in terms {
            if !elements.is_empty() {
                elements.push(Element::Operator(operator));
            }
            elements.push(Element::Term(term));
        }
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn require_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(NamingError::EmptyExpression);
        }
        Ok(())
    }

    /// Fails when both AND and OR occur.
    pub fn require_single_operator_kind(&self) -> Result<()> {
        if self.operators().len() > 1 {
            return Err(NamingError::MixedOperators);
        }
        Ok(())
    }

    /// Fails unless the distinct terms form a one-to-one relation. An empty
    /// expression passes.
    pub fn require_bijective_terms(&self) -> Result<()> {
        match self.relation()?.kind() {
            RelationKind::None | RelationKind::OneToOne => Ok(()),
            _ => Err(NamingError::NonBijectiveTerms),
        }
    }

    /// Canonical ordering.
    ///
    /// Clauses are sorted by the `side` label of their first term and
    /// duplicate clauses are removed. Unless `preserve_and_order` is set,
    /// the terms inside each clause are deduplicated and sorted too.
    #[must_use]
    pub fn canonicalize(&self, side: Side, preserve_and_order: bool) -> Self {
        let by_side = |a: &Term, b: &Term| a.side(side).cmp(b.side(side)).then_with(|| a.cmp(b));
        let mut clauses = self.clauses();
        if !preserve_and_order {
            for clause in &mut clauses {
                clause.sort_by(|a, b| by_side(a, b));
                clause.dedup();
            }
        }
        clauses.sort_by(|a, b| match (a.first(), b.first()) {
            (Some(x), Some(y)) => by_side(x, y).then_with(|| a.cmp(b)),
            _ => a.cmp(b),
        });
        clauses.dedup();
        Self::from_clauses(clauses)
    }

    /// Lowercases both labels of every term.
    #[must_use]
    pub fn to_lowercase(&self) -> Self {
        let elements = self
            .elements
            .iter()
            .map(|element| match element {
                Element::Term(term) => Element::Term(term.to_lowercase()),
                Element::Operator(operator) => Element::Operator(*operator),
            })
            .collect();
        Self { elements }
    }

    /// Renders both sides as space-separated words.
    ///
    /// Each label is whitespace-collapsed, then optionally capitalized and
    /// hyphenated. Operators render as `and` / `or`. The localized words are
    /// reversed when `reverse_localized` is set.
    pub fn render(
        &self,
        capitalize: bool,
        hyphenate: bool,
        reverse_localized: bool,
    ) -> (String, String) {
        let (primary, mut localized) = self.rendered_words(capitalize, hyphenate);
        if reverse_localized {
            localized.reverse();
        }
        (primary.join(" "), localized.join(" "))
    }

    /// Renders a name fragment in both languages.
    ///
    /// The primary side is capitalized and hyphenated with operators as
    /// words. The localized side uses `与` for AND (nothing when
    /// `drop_and_word` is set) and `或` for OR, with all spaces removed.
    /// Both sides keep only letters, hyphens and spaces.
    pub fn render_bilingual(
        &self,
        reverse_localized: bool,
        drop_and_word: bool,
    ) -> (String, String) {
        let (primary, _) = self.render(true, true, reverse_localized);
        let primary = filter_chars(&primary, CharPolicy::AlphabeticHyphenSpace, "");

        let mut localized: Vec<String> = self
            .elements
            .iter()
            .map(|element| match element {
                Element::Term(term) => render_label(term.localized(), true, true),
                Element::Operator(Operator::And) if drop_and_word => String::new(),
                Element::Operator(operator) => operator.glyph().to_string(),
            })
            .collect();
        if reverse_localized {
            localized.reverse();
        }
        let localized = filter_chars(&localized.join(" "), CharPolicy::AlphabeticHyphenSpace, "");
        (primary, remove_whitespace(&localized))
    }

    /// The distinct term pairs.
    pub fn relation(&self) -> Result<Relation> {
        Relation::new(self.terms().map(|term| (term.primary(), term.localized())))
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.elements.iter().filter_map(Element::as_term)
    }

    pub fn term_count(&self) -> usize {
        self.terms().count()
    }

    pub fn first_operator(&self) -> Option<Operator> {
        self.elements.iter().find_map(Element::as_operator)
    }

    /// The distinct operators.
    pub fn operators(&self) -> BTreeSet<Operator> {
        self.elements.iter().filter_map(Element::as_operator).collect()
    }

    /// The two parallel word sequences, one per language, with operators as
    /// words.
    pub fn sides(&self) -> (Vec<String>, Vec<String>) {
        self.elements
            .iter()
            .map(|element| match element {
                Element::Term(term) => (term.primary().to_string(), term.localized().to_string()),
                Element::Operator(operator) => {
                    (operator.as_str().to_string(), operator.as_str().to_string())
                }
            })
            .unzip()
    }

    /// Localized label per primary label.
    ///
    /// Primary labels are whitespace-collapsed. Only meaningful for a
    /// bijective expression; with duplicates the last term wins.
    pub fn localized_by_primary(&self) -> BTreeMap<String, String> {
        self.terms()
            .map(|term| (collapse_whitespace(term.primary()), term.localized().to_string()))
            .collect()
    }

    /// The wire form.
    pub fn to_items(&self) -> Vec<NeeItem> {
        self.elements.iter().map(Element::to_item).collect()
    }

    fn clauses(&self) -> Vec<Vec<Term>> {
        let mut clauses = vec![Vec::new()];
        for element in &self.elements {
            match element {
                Element::Term(term) => {
                    if let Some(clause) = clauses.last_mut() {
                        clause.push(term.clone());
                    }
                }
                Element::Operator(Operator::Or) => clauses.push(Vec::new()),
                Element::Operator(Operator::And) => {}
            }
        }
        clauses.retain(|clause| !clause.is_empty());
        clauses
    }

    fn from_clauses(clauses: Vec<Vec<Term>>) -> Self {
        let mut elements = Vec::new();
        for clause in clauses {
            if !elements.is_empty() {
                elements.push(Element::Operator(Operator::Or));
            }
            let mut first = true;
            for term in clause {
                if !first {
                    elements.push(Element::Operator(Operator::And));
                }
                elements.push(Element::Term(term));
                first = false;
            }
        }
        Self { elements }
    }

    fn rendered_words(&self, capitalize: bool, hyphenate: bool) -> (Vec<String>, Vec<String>) {
        self.elements
            .iter()
            .map(|element| match element {
                Element::Term(term) => (
                    render_label(term.primary(), capitalize, hyphenate),
                    render_label(term.localized(), capitalize, hyphenate),
                ),
                Element::Operator(operator) => {
                    (operator.as_str().to_string(), operator.as_str().to_string())
                }
            })
            .unzip()
    }
}

impl TryFrom<&[NeeItem]> for Expression {
    type Error = NamingError;

    fn try_from(items: &[NeeItem]) -> Result<Self> {
        Self::parse(items)
    }
}

/// Text form: `primary | localized` terms separated by operator words.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<String> = self
            .elements
            .iter()
            .map(|element| match element {
                Element::Term(term) => {
                    format!("{} {FIELD_SEPARATOR} {}", term.primary(), term.localized())
                }
                Element::Operator(operator) => operator.to_string(),
            })
            .collect();
        f.write_str(&collapse_whitespace(&words.join(" ")))
    }
}

fn render_label(label: &str, capitalized: bool, hyphenate: bool) -> String {
    let mut label = collapse_whitespace(label);
    if capitalized {
        label = capitalize(&label);
    }
    if hyphenate {
        label = label.replace(' ', "-");
    }
    label
}

fn flush_segment(segment: &mut Vec<&str>, items: &mut Vec<NeeItem>) {
    if segment.is_empty() {
        return;
    }
    let text = segment.join(" ");
    segment.clear();
    if text.contains(FIELD_SEPARATOR) {
        let labels = text
            .split(FIELD_SEPARATOR)
            .map(|label| label.trim().to_string())
            .collect();
        items.push(NeeItem::Term(labels));
    } else {
        items.push(NeeItem::Operator(text));
    }
}

fn validate_alternation(elements: &[Element]) -> Result<()> {
    let (Some(first), Some(last)) = (elements.first(), elements.last()) else {
        return Ok(());
    };
    if matches!(first, Element::Operator(_)) || matches!(last, Element::Operator(_)) {
        return Err(NamingError::MalformedExpression(Malformation::OperatorAtBoundary));
    }
    if elements.len() % 2 == 0 {
        return Err(NamingError::MalformedExpression(Malformation::EvenLength));
    }
    let alternates = elements.iter().enumerate().all(|(index, element)| {
        matches!(
            (index % 2, element),
            (0, Element::Term(_)) | (1, Element::Operator(_))
        )
    });
    if !alternates {
        return Err(NamingError::MalformedExpression(Malformation::BrokenAlternation));
    }
    Ok(())
}
