use std::io::{self, Write};

use crate::model::Projection;

/// Receives every recomputed projection. A render replaces whatever the
/// sink showed before; sinks never diff against the previous call.
pub trait PresentationSink {
    fn render(&mut self, projection: &Projection);
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn render(&mut self, projection: &Projection) {
        (**self).render(projection);
    }
}

/// Keeps the last projection it was given.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub current: Projection,
    /// Number of renders received so far
    pub renders: usize,
}

impl PresentationSink for Snapshot {
    fn render(&mut self, projection: &Projection) {
        self.current = projection.clone();
        self.renders += 1;
    }
}

/// Writes each projection as plain text lines followed by the count.
///
/// A render cannot fail. Write failures are logged and the most recent one
/// is held until `take_error`.
pub struct TextSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        TextSink { out, error: None }
    }

    /// Last write failure since the previous call, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn format_projection(projection: &Projection) -> String {
    let mut text = String::new();
    for item in &projection.items {
        text.push_str(item.marker());
        text.push(' ');
        text.push_str(&item.text);
        text.push('\n');
    }
    text.push_str(&projection.items_left_label());
    text.push('\n');
    text
}

impl<W: Write> PresentationSink for TextSink<W> {
    fn render(&mut self, projection: &Projection) {
        if let Err(e) = self.out.write_all(format_projection(projection).as_bytes()) {
            tracing::warn!(error = %e, "text render failed");
            self.error = Some(e);
        }
    }
}

/// Writes one JSON object per render, newline-delimited.
pub struct JsonSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        JsonSink { out, error: None }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationSink for JsonSink<W> {
    fn render(&mut self, projection: &Projection) {
        let result = serde_json::to_writer(&mut self.out, projection)
            .map_err(io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = result {
            tracing::warn!(error = %e, "json render failed");
            self.error = Some(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FilterMode, Item, ItemId};
    use pretty_assertions::assert_eq;

    fn sample() -> Projection {
        let mut done = Item::new(ItemId(1), "walk dog".into());
        done.completed = true;
        Projection::new(
            vec![Item::new(ItemId(0), "buy milk".into()), done],
            FilterMode::All,
        )
    }

    #[test]
    fn text_sink_lines() {
        let mut sink = TextSink::new(Vec::new());
        sink.render(&sample());
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "[ ] buy milk\n[x] walk dog\n1 items left\n");
    }

    #[test]
    fn text_sink_empty() {
        let mut sink = TextSink::new(Vec::new());
        sink.render(&Projection::default());
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "0 items left\n");
    }

    #[test]
    fn json_sink_one_object_per_render() {
        let mut sink = JsonSink::new(Vec::new());
        sink.render(&sample());
        sink.render(&Projection::default());
        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["remaining"], 1);
        assert_eq!(first["items"][1]["text"], "walk dog");
        assert_eq!(first["items"][1]["completed"], true);
        assert_eq!(lines[1], r#"{"items":[],"remaining":0}"#);
    }

    struct Full;

    impl Write for Full {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_kept_until_taken() {
        let mut text = TextSink::new(Full);
        text.render(&sample());
        assert!(text.take_error().is_some());
        assert!(text.take_error().is_none());

        let mut json = JsonSink::new(Full);
        json.render(&sample());
        assert!(json.take_error().is_some());
    }

    #[test]
    fn successful_render_has_no_error() {
        let mut sink = TextSink::new(Vec::new());
        sink.render(&sample());
        assert!(sink.take_error().is_none());
    }

    #[test]
    fn snapshot_replaces_previous() {
        let mut sink = Snapshot::default();
        sink.render(&sample());
        sink.render(&Projection::default());
        assert!(sink.current.is_empty());
        assert_eq!(sink.renders, 2);
    }
}
