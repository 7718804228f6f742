/// Case-insensitive substring match on gene annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationFilter {
    needle: Option<String>,
}

impl AnnotationFilter {
    /// Blank text disables the filter. Otherwise the text is matched as
    /// typed, surrounding whitespace included.
    pub fn new(text: &str) -> Self {
        if text.trim().is_empty() {
            Self { needle: None }
        } else {
            Self {
                needle: Some(text.to_lowercase()),
            }
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    pub fn text(&self) -> Option<&str> {
        self.needle.as_deref()
    }

    /// An inactive filter matches nothing, so no gene gets highlighted.
    pub fn matches(&self, annotation: &str) -> bool {
        match &self.needle {
            Some(needle) => annotation.to_lowercase().contains(needle.as_str()),
            None => false,
        }
    }
}
