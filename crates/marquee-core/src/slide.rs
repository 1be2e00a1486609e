use crate::length::Length;

/// One authored item of the strip
///
/// The content is opaque to the engine. Identity is the item's position in
/// the sequence it was supplied in.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideItem<C> {
    content: C,
    width: Option<Length>,
}

impl<C> SlideItem<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            width: None,
        }
    }

    /// Declare the item's own width (ignored once placed in a slider)
    pub fn with_width(mut self, width: Length) -> Self {
        self.width = Some(width);
        self
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn declared_width(&self) -> Option<Length> {
        self.width
    }

    /// Width the item renders at inside a slider configured with `slider_width`
    #[inline]
    pub fn effective_width(&self, slider_width: Length) -> Length {
        slider_width
    }
}

impl<C> From<C> for SlideItem<C> {
    fn from(content: C) -> Self {
        Self::new(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_width_wins() {
        let item = SlideItem::new("logo").with_width(Length::px(50.0));
        assert_eq!(item.declared_width(), Some(Length::px(50.0)));
        assert_eq!(item.effective_width(Length::px(120.0)), Length::px(120.0));
    }
}
