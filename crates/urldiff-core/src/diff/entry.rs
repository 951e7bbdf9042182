//! Diff entries and their textual rendering.

/// Marker characters used for rendered values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerStyle {
    /// `<` / `>`, like classic `diff`.
    #[default]
    Classic,
    /// `-` / `+`, like unified `diff`.
    Unified,
}

impl MarkerStyle {
    fn left_marker(self) -> char {
        match self {
            MarkerStyle::Classic => '<',
            MarkerStyle::Unified => '-',
        }
    }

    fn right_marker(self) -> char {
        match self {
            MarkerStyle::Classic => '>',
            MarkerStyle::Unified => '+',
        }
    }
}

/// Classification of a single divergence between two URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffKind {
    /// The name only appears in the left URL.
    LeftOnly,
    /// The name only appears in the right URL.
    RightOnly,
    /// The name appears in both URLs with different values.
    BothDiffer,
}

/// One divergence: a parameter name (or `"Hostname"`), the value on each
/// side where present, and its [`DiffKind`].
///
/// Invariant: `LeftOnly` entries carry only a left value, `RightOnly`
/// entries only a right value, `BothDiffer` entries both. The per-kind
/// constructors uphold this; [`DiffEntry::from_parts`] repairs violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    name: String,
    left_value: Option<String>,
    right_value: Option<String>,
    kind: DiffKind,
}

impl DiffEntry {
    pub(crate) fn left_only(name: impl Into<String>, left: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left_value: Some(left.into()),
            right_value: None,
            kind: DiffKind::LeftOnly,
        }
    }

    pub(crate) fn right_only(name: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left_value: None,
            right_value: Some(right.into()),
            kind: DiffKind::RightOnly,
        }
    }

    pub(crate) fn both_differ(
        name: impl Into<String>,
        left: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            left_value: Some(left.into()),
            right_value: Some(right.into()),
            kind: DiffKind::BothDiffer,
        }
    }

    /// Assembles an entry from raw optional sides.
    ///
    /// A kind that does not match the values present is a programming
    /// error; the anomaly is logged and the kind coerced to `BothDiffer`
    /// instead of panicking. Rendering then shows whichever sides exist.
    pub fn from_parts(
        name: impl Into<String>,
        left_value: Option<String>,
        right_value: Option<String>,
        kind: DiffKind,
    ) -> Self {
        let name = name.into();
        let consistent = match kind {
            DiffKind::LeftOnly => left_value.is_some() && right_value.is_none(),
            DiffKind::RightOnly => left_value.is_none() && right_value.is_some(),
            DiffKind::BothDiffer => left_value.is_some() && right_value.is_some(),
        };
        let kind = if consistent {
            kind
        } else {
            tracing::error!(
                "diff entry {:?}: kind {:?} inconsistent with its values, treating as BothDiffer",
                name,
                kind
            );
            DiffKind::BothDiffer
        };
        Self {
            name,
            left_value,
            right_value,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left_value(&self) -> Option<&str> {
        self.left_value.as_deref()
    }

    pub fn right_value(&self) -> Option<&str> {
        self.right_value.as_deref()
    }

    pub fn kind(&self) -> DiffKind {
        self.kind
    }

    /// Renders the entry: its name, then one marker line per side the kind
    /// includes.
    pub fn render(&self, style: MarkerStyle) -> String {
        let mut out = self.name.clone();
        if matches!(self.kind, DiffKind::LeftOnly | DiffKind::BothDiffer) {
            if let Some(left) = &self.left_value {
                out.push_str(&format!("\n{} {}", style.left_marker(), left));
            }
        }
        if matches!(self.kind, DiffKind::RightOnly | DiffKind::BothDiffer) {
            if let Some(right) = &self.right_value {
                out.push_str(&format!("\n{} {}", style.right_marker(), right));
            }
        }
        out
    }
}
