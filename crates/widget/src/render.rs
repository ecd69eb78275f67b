//! Render-sink contract and a string-building reference sink.

/// Ordered sink for emitting an element tree.
///
/// The widget drives this in document order: open an element, attach
/// its attributes and listeners, emit children or text content, close
/// it. Hosts adapt this onto their own rendering machinery.
pub trait RenderSink {
    /// Opens a child element of the current element.
    fn open_element(&mut self, name: &str);

    /// Attaches an attribute to the most recently opened element.
    ///
    /// Only valid between [`open_element`](Self::open_element) and the
    /// first content or close call for that element.
    fn attribute(&mut self, name: &str, value: &str);

    /// Declares an event listener on the most recently opened element.
    fn listener(&mut self, event: &str);

    /// Emits text content inside the current element.
    fn content(&mut self, text: &str);

    /// Closes the current element.
    fn close_element(&mut self);
}

/// String-building sink producing HTML markup.
///
/// Listeners carry no markup representation; they are recorded so
/// hosts and tests can verify the wiring the widget requested.
#[derive(Clone, Debug, Default)]
pub struct HtmlSink {
    out: String,
    stack: Vec<String>,
    listeners: Vec<String>,
    in_open_tag: bool,
}

impl HtmlSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event listeners declared so far, in declaration order.
    pub fn listeners(&self) -> &[String] {
        &self.listeners
    }

    /// Finishes the sink and returns the accumulated markup.
    pub fn into_html(mut self) -> String {
        self.seal_open_tag();
        self.out
    }

    fn seal_open_tag(&mut self) {
        if self.in_open_tag {
            self.out.push('>');
            self.in_open_tag = false;
        }
    }
}

impl RenderSink for HtmlSink {
    fn open_element(&mut self, name: &str) {
        self.seal_open_tag();
        self.out.push('<');
        self.out.push_str(name);
        self.stack.push(name.to_string());
        self.in_open_tag = true;
    }

    fn attribute(&mut self, name: &str, value: &str) {
        if !self.in_open_tag {
            return;
        }
        self.out.push(' ');
        self.out.push_str(name);
        self.out.push_str("=\"");
        self.out.push_str(&escape(value));
        self.out.push('"');
    }

    fn listener(&mut self, event: &str) {
        self.listeners.push(event.to_string());
    }

    fn content(&mut self, text: &str) {
        self.seal_open_tag();
        self.out.push_str(&escape(text));
    }

    fn close_element(&mut self) {
        self.seal_open_tag();
        if let Some(name) = self.stack.pop() {
            self.out.push_str("</");
            self.out.push_str(&name);
            self.out.push('>');
        }
    }
}

/// Escapes text for both attribute-value and content positions.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_markup_in_document_order() {
        let mut sink = HtmlSink::new();
        sink.open_element("select");
        sink.attribute("class", "valid");
        sink.open_element("option");
        sink.attribute("value", "Red");
        sink.content("0 : Red");
        sink.close_element();
        sink.close_element();
        assert_eq!(
            sink.into_html(),
            r#"<select class="valid"><option value="Red">0 : Red</option></select>"#
        );
    }

    #[test]
    fn records_listeners_without_emitting_markup() {
        let mut sink = HtmlSink::new();
        sink.open_element("select");
        sink.listener("change");
        sink.close_element();
        assert_eq!(sink.listeners(), ["change"]);
        assert_eq!(sink.into_html(), "<select></select>");
    }

    #[test]
    fn escapes_attribute_values_and_content() {
        let mut sink = HtmlSink::new();
        sink.open_element("option");
        sink.attribute("value", "a\"b");
        sink.content("1 < 2 & 3");
        sink.close_element();
        assert_eq!(
            sink.into_html(),
            r#"<option value="a&quot;b">1 &lt; 2 &amp; 3</option>"#
        );
    }

    #[test]
    fn attributes_after_content_are_ignored() {
        let mut sink = HtmlSink::new();
        sink.open_element("option");
        sink.content("text");
        sink.attribute("value", "late");
        sink.close_element();
        assert_eq!(sink.into_html(), "<option>text</option>");
    }
}
