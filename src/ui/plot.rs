use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, MarkerShape, Plot, PlotBounds, Points};

use crate::color::{MagnitudeBand, marker_radius};
use crate::data::model::{FilterResult, HistogramBin, MapFocus};

// ---------------------------------------------------------------------------
// Earthquake map (central panel)
// ---------------------------------------------------------------------------

/// Visible lon/lat window for a focus: the whole 360° of longitude at zoom 1,
/// halved per zoom level; latitude span is half the longitude span.
pub fn focus_bounds(focus: &MapFocus) -> PlotBounds {
    let half_lon = 360.0 / 2f64.powi(i32::from(focus.zoom_level));
    let half_lat = half_lon / 2.0;
    let c = focus.center;
    PlotBounds::from_min_max(
        [c.longitude - half_lon, c.latitude - half_lat],
        [c.longitude + half_lon, c.latitude + half_lat],
    )
}

fn same_view(a: &MapFocus, b: &MapFocus) -> bool {
    a.center == b.center && a.zoom_level == b.zoom_level
}

/// Render filtered events as magnitude-scaled markers on a lon/lat plane.
///
/// `applied_focus` remembers the last focus pushed into the plot so user
/// panning survives until the focus itself changes.
pub fn quake_map(ui: &mut Ui, result: &FilterResult, applied_focus: &mut Option<MapFocus>) {
    let focus = &result.focus;
    let needs_reset = !matches!(applied_focus, Some(prev) if same_view(prev, focus));

    Plot::new("quake_map")
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(|name, value| {
            let coords = format!("lat {:.2}, lon {:.2}", value.y, value.x);
            if name.is_empty() {
                coords
            } else {
                format!("{name}\n{coords}")
            }
        })
        .show(ui, |plot_ui| {
            if needs_reset {
                plot_ui.set_plot_bounds(focus_bounds(focus));
            }

            for ev in &result.filtered_events {
                let band = MagnitudeBand::for_magnitude(ev.magnitude);
                let radius = marker_radius(ev.magnitude);
                let point = vec![[ev.longitude, ev.latitude]];
                let name = format!(
                    "M{:.1} {}",
                    ev.magnitude,
                    ev.place.as_deref().unwrap_or("Unknown location")
                );

                // Stroke ring underneath, fill on top.
                plot_ui.points(
                    Points::new(point.clone())
                        .shape(MarkerShape::Circle)
                        .radius(radius)
                        .filled(true)
                        .color(band.stroke())
                        .name(&name),
                );
                plot_ui.points(
                    Points::new(point)
                        .shape(MarkerShape::Circle)
                        .radius((radius - 1.5).max(1.0))
                        .filled(true)
                        .color(band.fill().gamma_multiply(0.8))
                        .name(&name),
                );
            }
        });

    if needs_reset {
        *applied_focus = Some(focus.clone());
    }
}

// ---------------------------------------------------------------------------
// Magnitude histogram (side panel)
// ---------------------------------------------------------------------------

/// Bar chart of the magnitude bins, one bar per bin in bin order.
pub fn magnitude_histogram(ui: &mut Ui, bins: &[HistogramBin]) {
    let labels: Vec<String> = bins.iter().map(|b| b.label.clone()).collect();

    let bars: Vec<Bar> = bins
        .iter()
        .enumerate()
        .map(|(i, bin)| {
            Bar::new(i as f64, bin.count as f64)
                .name(&bin.label)
                .width(0.7)
                .fill(MagnitudeBand::for_magnitude(bin.lower_bound).fill())
        })
        .collect();

    Plot::new("magnitude_histogram")
        .height(160.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .show_x(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Events"));
        });
}
