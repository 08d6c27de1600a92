use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// The scrollable container the controller positions.
pub trait ScrollSurface {
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&mut self, offset: f64);
    /// Offset of the section at `index`, or `None` when no such child exists.
    fn section_offset(&self, index: usize) -> Option<f64>;
}

/// A snap container in the live document. Each direct child is a section.
pub struct DomSurface {
    container: HtmlElement,
}

impl DomSurface {
    pub fn new(container: HtmlElement) -> Self {
        Self { container }
    }
}

impl ScrollSurface for DomSurface {
    fn scroll_top(&self) -> f64 {
        self.container.scroll_top() as f64
    }

    fn set_scroll_top(&mut self, offset: f64) {
        self.container.set_scroll_top(offset.round() as i32);
    }

    fn section_offset(&self, index: usize) -> Option<f64> {
        let child = self.container.children().item(index as u32)?;
        let child = child.dyn_into::<HtmlElement>().ok()?;
        Some(child.offset_top() as f64)
    }
}

/// In-memory surface with evenly stacked sections.
#[cfg(test)]
pub struct FakeSurface {
    pub offset: f64,
    pub sections: Vec<f64>,
    pub writes: Vec<f64>,
}

#[cfg(test)]
impl FakeSurface {
    pub fn stacked(count: usize, viewport: f64) -> Self {
        Self {
            offset: 0.0,
            sections: (0..count).map(|i| i as f64 * viewport).collect(),
            writes: Vec::new(),
        }
    }
}

#[cfg(test)]
impl ScrollSurface for FakeSurface {
    fn scroll_top(&self) -> f64 {
        self.offset
    }

    fn set_scroll_top(&mut self, offset: f64) {
        self.offset = offset;
        self.writes.push(offset);
    }

    fn section_offset(&self, index: usize) -> Option<f64> {
        self.sections.get(index).copied()
    }
}
