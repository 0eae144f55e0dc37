//! Standalone HTML page with every slider position precomputed.
//!
//! The page loads plotly.js from its CDN and swaps figures client-side when
//! the range input moves, so no server is involved.

use std::io::Write;

use serde::Serialize;

use crate::constants::PAGE_TITLE;
use crate::control::{ChargeSlider, SliderMark};
use crate::demo::PotentialDemo;
use crate::errors::PotentialError;
use crate::math::Scalar;
use crate::scene::Scene;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Scene and label for one slider position.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    /// Slider position.
    pub value: Scalar,
    /// Label text.
    pub label: String,
    /// Figure for this position.
    pub figure: Scene,
}

/// Everything the page renders.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    /// Page heading.
    pub title: String,
    /// Slider domain.
    pub slider: ChargeSlider,
    /// Ticks under the slider.
    pub marks: Vec<SliderMark>,
    /// One frame per slider position.
    pub frames: Vec<Frame>,
}

impl Page {
    /// Precomputes every slider position of `demo`.
    #[must_use]
    pub fn from_demo(demo: &mut PotentialDemo) -> Self {
        let slider = *demo.slider();
        let frames = demo
            .precompute()
            .into_iter()
            .map(|(value, label, figure)| Frame { value, label, figure })
            .collect();
        Self { title: PAGE_TITLE.to_owned(), slider, marks: slider.marks(), frames }
    }

    /// Index of the frame closest to the slider's default position.
    #[must_use]
    pub fn default_frame(&self) -> usize {
        self.frames
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (a.value - self.slider.default).abs();
                let db = (b.value - self.slider.default).abs();
                da.total_cmp(&db)
            })
            .map_or(0, |(i, _)| i)
    }
}

/// Writes `page` as a self-contained HTML document.
pub fn write_html_page<W: Write>(mut w: W, page: &Page) -> Result<(), PotentialError> {
    let frames = serde_json::to_string(&page.frames)?.replace("</", "<\\/");
    let marks = serde_json::to_string(&page.marks)?.replace("</", "<\\/");
    let initial = page.default_frame();
    let initial_label = page.frames.get(initial).map_or("", |f| f.label.as_str());
    let title = escape_html(&page.title);

    writeln!(w, "<!DOCTYPE html>")?;
    writeln!(w, "<html lang=\"ja\">")?;
    writeln!(w, "<head>")?;
    writeln!(w, "<meta charset=\"utf-8\">")?;
    writeln!(w, "<title>{title}</title>")?;
    writeln!(w, "<script src=\"{PLOTLY_CDN}\"></script>")?;
    writeln!(w, "</head>")?;
    writeln!(
        w,
        "<body><div style=\"width:80%;display:inline-block;padding-left:50px;padding-right:50px;box-sizing:border-box\">"
    )?;
    writeln!(w, "<h1>{title}</h1>")?;
    writeln!(w, "<div id=\"graph\"></div>")?;
    writeln!(w, "<div id=\"label\">{}</div>", escape_html(initial_label))?;
    writeln!(
        w,
        "<input id=\"slider\" type=\"range\" min=\"0\" max=\"{}\" step=\"1\" value=\"{initial}\" style=\"width:100%\" list=\"marks\">",
        page.frames.len().saturating_sub(1)
    )?;
    writeln!(w, "<datalist id=\"marks\"></datalist>")?;
    writeln!(w, "</div>")?;
    writeln!(w, "<script>")?;
    writeln!(w, "const frames = {frames};")?;
    writeln!(w, "const marks = {marks};")?;
    writeln!(w, "const list = document.getElementById('marks');")?;
    writeln!(
        w,
        "marks.forEach((m, i) => {{ const o = document.createElement('option'); o.value = i; o.label = m.label; list.appendChild(o); }});"
    )?;
    writeln!(w, "function show(i) {{")?;
    writeln!(w, "  const f = frames[i];")?;
    writeln!(w, "  Plotly.react('graph', f.figure.data, f.figure.layout);")?;
    writeln!(w, "  document.getElementById('label').textContent = f.label;")?;
    writeln!(w, "}}")?;
    writeln!(
        w,
        "document.getElementById('slider').addEventListener('input', e => show(Number(e.target.value)));"
    )?;
    writeln!(w, "show({initial});")?;
    writeln!(w, "</script>")?;
    writeln!(w, "</body>")?;
    writeln!(w, "</html>")?;
    Ok(())
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
