//! 3D scene construction for localization results
//!
//! Pure presentation: consumes an estimated position together with the
//! array geometry and produces an embeddable scatter scene. The renderer
//! never alters or re-derives the position it is given.

use crate::core::types::{Point3, SensorArray};
use serde::{Deserialize, Serialize};

/// Marker styling for one scatter trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size: u8,
    pub color: String,
}

/// One scatter trace in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterTrace {
    #[serde(rename = "type")]
    pub trace_type: String,
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    pub mode: String,
    pub marker: MarkerStyle,
}

impl ScatterTrace {
    fn markers(name: &str, points: &[Point3], size: u8, color: &str) -> Self {
        Self {
            trace_type: "scatter3d".to_string(),
            name: name.to_string(),
            x: points.iter().map(|p| p.x).collect(),
            y: points.iter().map(|p| p.y).collect(),
            z: points.iter().map(|p| p.z).collect(),
            mode: "markers".to_string(),
            marker: MarkerStyle {
                size,
                color: color.to_string(),
            },
        }
    }
}

/// Axis titles and aspect settings for the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub xaxis_title: String,
    pub yaxis_title: String,
    pub zaxis_title: String,
    pub aspect_mode: String,
}

impl Default for SceneLayout {
    fn default() -> Self {
        Self {
            xaxis_title: "X (m)".to_string(),
            yaxis_title: "Y (m)".to_string(),
            zaxis_title: "Z (m)".to_string(),
            aspect_mode: "cube".to_string(),
        }
    }
}

/// Embeddable 3D scatter scene: sensor markers plus the estimated source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene3d {
    pub traces: Vec<ScatterTrace>,
    pub layout: SceneLayout,
}

impl Scene3d {
    /// Serialize the scene as a JSON document
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Emit a self-contained HTML fragment rendering the scene with
    /// plotly.js from its CDN
    pub fn to_html(&self) -> Result<String, serde_json::Error> {
        let data = serde_json::to_string(&self.traces)?;
        let layout = serde_json::json!({
            "scene": {
                "xaxis": { "title": self.layout.xaxis_title },
                "yaxis": { "title": self.layout.yaxis_title },
                "zaxis": { "title": self.layout.zaxis_title },
                "aspectmode": self.layout.aspect_mode,
            }
        });
        Ok(format!(
            "<div id=\"localization-scene\"></div>\n\
             <script src=\"https://cdn.plot.ly/plotly-2.35.2.min.js\"></script>\n\
             <script>Plotly.newPlot(\"localization-scene\", {data}, {layout});</script>\n"
        ))
    }
}

/// Build the scatter scene for one localization result.
///
/// Sensors render as small blue markers, the estimated source as a
/// larger red marker; axes are labeled in meters with a cubic aspect
/// ratio so distances read true in all three directions.
pub fn render(position: &Point3, array: &SensorArray) -> Scene3d {
    Scene3d {
        traces: vec![
            ScatterTrace::markers("Sensors", array.positions(), 5, "blue"),
            ScatterTrace::markers("Estimated source", &[*position], 8, "red"),
        ],
        layout: SceneLayout::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_array() -> SensorArray {
        SensorArray::new(vec![
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(-5.0, 8.66, 0.0),
            Point3::new(-5.0, -8.66, 0.0),
            Point3::new(0.0, 0.0, 6.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_scene_structure() {
        let position = Point3::new(1.0, 2.0, 3.0);
        let scene = render(&position, &demo_array());

        assert_eq!(scene.traces.len(), 2);
        let sensors = &scene.traces[0];
        assert_eq!(sensors.name, "Sensors");
        assert_eq!(sensors.x.len(), 4);
        assert_eq!(sensors.mode, "markers");
        assert_eq!(sensors.marker.color, "blue");

        let source = &scene.traces[1];
        assert_eq!(source.name, "Estimated source");
        assert_eq!(source.x.len(), 1);
        assert_eq!(source.marker.color, "red");
        assert!(source.marker.size > sensors.marker.size);
    }

    #[test]
    fn test_position_passes_through_unchanged() {
        let position = Point3::new(-7.25, 0.125, 42.0);
        let scene = render(&position, &demo_array());

        let source = &scene.traces[1];
        assert_eq!(source.x, vec![-7.25]);
        assert_eq!(source.y, vec![0.125]);
        assert_eq!(source.z, vec![42.0]);
    }

    #[test]
    fn test_layout_defaults() {
        let scene = render(&Point3::new(0.0, 0.0, 1.0), &demo_array());
        assert_eq!(scene.layout.xaxis_title, "X (m)");
        assert_eq!(scene.layout.yaxis_title, "Y (m)");
        assert_eq!(scene.layout.zaxis_title, "Z (m)");
        assert_eq!(scene.layout.aspect_mode, "cube");
    }

    #[test]
    fn test_json_output() {
        let scene = render(&Point3::new(0.0, 0.0, 1.0), &demo_array());
        let json = scene.to_json().unwrap();
        assert!(json.contains("\"type\":\"scatter3d\""));
        assert!(json.contains("\"Estimated source\""));
    }

    #[test]
    fn test_html_output() {
        let scene = render(&Point3::new(0.0, 0.0, 1.0), &demo_array());
        let html = scene.to_html().unwrap();
        assert!(html.contains("<div id=\"localization-scene\">"));
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains("\"aspectmode\":\"cube\""));
    }
}
