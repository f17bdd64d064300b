use crate::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoState {
    Hover,
    Active,
}

impl PseudoState {
    pub fn as_str(self) -> &'static str {
        match self {
            PseudoState::Hover => "hover",
            PseudoState::Active => "active",
        }
    }

    /// The CSS pseudo-class this state stands for (`:hover`, `:active`).
    pub fn pseudo_class(self) -> &'static str {
        match self {
            PseudoState::Hover => ":hover",
            PseudoState::Active => ":active",
        }
    }
}

/// Forces a document's elements into a pointer state that normally needs live interaction.
///
/// Both operations are synchronous and infallible: a selector that cannot be applied leaves the
/// document as it was.
pub trait PseudoStateSimulator<D: Document + ?Sized> {
    fn fake_hover(&self, document: &mut D, selector: &str);
    fn fake_active(&self, document: &mut D, selector: &str);
}

/// Simulates pseudo-states with marker classes.
///
/// The first element matching the selector, and every ancestor of it, receives the class
/// `{prefix}{state}` (e.g. `htmlsvghover`), and `:hover`/`:active` in the document's
/// stylesheets are rewritten to that class selector. When nothing matches, or the selector is
/// invalid, the document is left as it was.
#[derive(Debug, Clone)]
pub struct ClassNameSimulator {
    pub class_prefix: String,
}

impl Default for ClassNameSimulator {
    fn default() -> Self {
        Self {
            class_prefix: "htmlsvg".to_string(),
        }
    }
}

impl ClassNameSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn class_name(&self, state: PseudoState) -> String {
        format!("{}{}", self.class_prefix, state.as_str())
    }

    pub fn simulate<D: Document + ?Sized>(
        &self,
        document: &mut D,
        selector: &str,
        state: PseudoState,
    ) {
        let class_name = self.class_name(state);
        match document.query_selector(selector) {
            Ok(Some(node)) => {
                let mut cur = Some(node);
                while let Some(el) = cur {
                    document.add_class(el, &class_name);
                    cur = document.parent_element(el);
                }
            }
            Ok(None) => {
                tracing::debug!(selector, state = state.as_str(), "no element matches selector");
                return;
            }
            Err(err) => {
                tracing::warn!(
                    selector,
                    state = state.as_str(),
                    error = %err,
                    "ignoring invalid selector"
                );
                return;
            }
        }
        document.rewrite_stylesheets(state.pseudo_class(), &format!(".{class_name}"));
    }
}

impl<D: Document + ?Sized> PseudoStateSimulator<D> for ClassNameSimulator {
    fn fake_hover(&self, document: &mut D, selector: &str) {
        self.simulate(document, selector, PseudoState::Hover);
    }

    fn fake_active(&self, document: &mut D, selector: &str) {
        self.simulate(document, selector, PseudoState::Active);
    }
}
