use eframe::egui::Color32;
use palette::Srgb;
use palette::named;

// ---------------------------------------------------------------------------
// Marker size
// ---------------------------------------------------------------------------

/// Marker radius in screen points: twice the magnitude, never below 4.
pub fn marker_radius(magnitude: f64) -> f32 {
    (magnitude * 2.0).max(4.0) as f32
}

// ---------------------------------------------------------------------------
// Magnitude banding: magnitude → fill / stroke colour
// ---------------------------------------------------------------------------

/// Colour bands for map markers.
///
/// `Minor` and `Moderate` line up with the histogram's lower bins and
/// `Strong` + `Major` together cover its `4+` bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagnitudeBand {
    Minor,
    Moderate,
    Strong,
    Major,
}

impl MagnitudeBand {
    pub const ALL: [MagnitudeBand; 4] = [
        MagnitudeBand::Minor,
        MagnitudeBand::Moderate,
        MagnitudeBand::Strong,
        MagnitudeBand::Major,
    ];

    pub fn for_magnitude(magnitude: f64) -> Self {
        if magnitude >= 6.0 {
            MagnitudeBand::Major
        } else if magnitude >= 4.0 {
            MagnitudeBand::Strong
        } else if magnitude >= 2.0 {
            MagnitudeBand::Moderate
        } else {
            MagnitudeBand::Minor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MagnitudeBand::Minor => "< 2",
            MagnitudeBand::Moderate => "2 – 3.9",
            MagnitudeBand::Strong => "4 – 5.9",
            MagnitudeBand::Major => "≥ 6",
        }
    }

    pub fn fill(self) -> Color32 {
        to_color32(match self {
            MagnitudeBand::Minor => named::GREEN,
            MagnitudeBand::Moderate => named::ORANGE,
            MagnitudeBand::Strong => named::RED,
            MagnitudeBand::Major => named::PURPLE,
        })
    }

    pub fn stroke(self) -> Color32 {
        to_color32(match self {
            MagnitudeBand::Minor => named::DARKGREEN,
            MagnitudeBand::Moderate => named::DARKORANGE,
            MagnitudeBand::Strong => named::DARKRED,
            MagnitudeBand::Major => named::INDIGO,
        })
    }

    /// Return the legend entries (band label → fill colour) for the UI.
    pub fn legend_entries() -> Vec<(&'static str, Color32)> {
        Self::ALL.iter().map(|b| (b.label(), b.fill())).collect()
    }
}

fn to_color32(c: Srgb<u8>) -> Color32 {
    Color32::from_rgb(c.red, c.green, c.blue)
}
