//! Plotly figure JSON.

use std::io::Write;

use crate::errors::PotentialError;
use crate::scene::Scene;

/// Serializes `scene` to a compact JSON string.
pub fn figure_json(scene: &Scene) -> Result<String, PotentialError> {
    Ok(serde_json::to_string(scene)?)
}

/// Writes `scene` as JSON, pretty-printed when `pretty` is set.
pub fn write_figure_json<W: Write>(mut w: W, scene: &Scene, pretty: bool) -> Result<(), PotentialError> {
    if pretty {
        serde_json::to_writer_pretty(&mut w, scene)?;
    } else {
        serde_json::to_writer(&mut w, scene)?;
    }
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::PotentialDemo;

    #[test]
    fn written_figure_parses_back() {
        let scene = PotentialDemo::default().on_slider_change(1.1);
        let mut buf = Vec::new();
        write_figure_json(&mut buf, &scene, false).unwrap();
        let parsed: Scene = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.data.len(), scene.data.len());
        assert_eq!(parsed.layout, scene.layout);
        assert_eq!(figure_json(&scene).unwrap().trim(), String::from_utf8(buf).unwrap().trim());
    }
}
