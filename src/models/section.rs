//! Page sections and navigation highlight decisions.

/// A page section as laid out right now.
///
/// Built from live layout on every recompute and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSection {
    pub id: String,
    /// Offset of the section's top edge from the document top.
    pub top: f64,
    pub height: f64,
}

impl NavSection {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Whether `position` lies within `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Outcome of an active-link recompute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkHighlight {
    /// No section matched; link flags keep their previous values.
    Unchanged,
    /// Clear every link, then mark the one pointing at this section id.
    Activate(String),
}

impl LinkHighlight {
    /// The fragment href (`#id`) a link must carry to become active.
    pub fn href(&self) -> Option<String> {
        match self {
            Self::Unchanged => None,
            Self::Activate(id) => Some(format!("#{}", id)),
        }
    }
}
