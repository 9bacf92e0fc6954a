//! Infinite background scrolling
//!
//! A layer slides left; any tile that has fully left the viewport jumps to
//! the right end of the strip.

use super::state::ScrollLayer;

/// Advance a layer by `speed * dt` and recycle tiles off the left edge
pub fn scroll_layer(layer: &mut ScrollLayer, dt: f32) {
    layer.offset_x -= layer.speed * dt;

    for i in 0..layer.tiles.len() {
        let tile = layer.tiles[i];
        let right_edge = layer.scene_x(&tile) + tile.width / 2.0;
        if right_edge <= 0.0 {
            let strip_end = strip_right_edge(layer);
            layer.tiles[i].x = strip_end + tile.width / 2.0;
        }
    }
}

/// Right edge of the rightmost tile (layer space)
fn strip_right_edge(layer: &ScrollLayer) -> f32 {
    layer
        .tiles
        .iter()
        .map(|t| t.x + t.width / 2.0)
        .fold(f32::NEG_INFINITY, f32::max)
}

/// Scene-space span `[left, right]` covered by the layer's tiles
pub fn coverage(layer: &ScrollLayer) -> (f32, f32) {
    let left = layer
        .tiles
        .iter()
        .map(|t| layer.scene_x(t) - t.width / 2.0)
        .fold(f32::INFINITY, f32::min);
    (left, layer.offset_x + strip_right_edge(layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FIXED_DT;
    use crate::tuning::LayerTuning;

    fn ground() -> ScrollLayer {
        ScrollLayer::new(&LayerTuning::new("ground", 160.0, 200.0, 2, 20.0))
    }

    #[test]
    fn test_layer_moves_left() {
        let mut layer = ground();
        scroll_layer(&mut layer, FIXED_DT);
        assert!((layer.offset_x + 160.0 * FIXED_DT).abs() < 1e-5);
    }

    #[test]
    fn test_tile_recycles_to_right_end() {
        let mut layer = ground();
        // First tile spans [0, 200] at start; push it just past the edge
        layer.offset_x = -200.0;
        scroll_layer(&mut layer, 0.0);
        let mut xs: Vec<f32> = layer.tiles.iter().map(|t| t.x).collect();
        xs.sort_by(f32::total_cmp);
        assert_eq!(xs, vec![300.0, 500.0]);
    }

    #[test]
    fn test_no_gap_after_many_frames() {
        let viewport = 180.0;
        let mut layer = ground();
        for _ in 0..10_000 {
            scroll_layer(&mut layer, FIXED_DT);
            let (left, right) = coverage(&layer);
            assert!(left <= 0.01, "gap at left edge: {left}");
            assert!(right >= viewport, "gap at right edge: {right}");
        }
    }
}
