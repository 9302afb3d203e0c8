/// The scrolling backdrop — three stacked tile layers looped without a seam.
///
/// Layers scroll downward together.  Whenever a layer's top coordinate
/// passes one full tile height it is re-anchored one tile behind the
/// current tail, so the tops always stay exactly one tile apart and the
/// viewport is covered at every tick.

use crate::config::{BACKGROUND_ASSET_COUNT, BACKGROUND_HEIGHT};

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundLayer {
    /// Index into the host's fixed artwork rotation.
    pub asset: usize,
    /// World-space top edge of this layer's tile.
    pub top: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Backdrop {
    pub layers: [BackgroundLayer; 3],
}

impl Backdrop {
    /// Initial layout: asset 0 covering the viewport, 1 and 2 queued above.
    pub fn new() -> Self {
        let mut bd = Backdrop {
            layers: [
                BackgroundLayer { asset: 0, top: 0.0 },
                BackgroundLayer { asset: 0, top: 0.0 },
                BackgroundLayer { asset: 0, top: 0.0 },
            ],
        };
        bd.relayout(0);
        bd
    }

    /// Stack the three layers from scratch, `base` being the visible asset.
    fn relayout(&mut self, base: usize) {
        for (i, layer) in self.layers.iter_mut().enumerate() {
            layer.asset = (base + i) % BACKGROUND_ASSET_COUNT;
            layer.top = -(i as f32) * BACKGROUND_HEIGHT;
        }
    }

    /// Scroll all layers down by `dy` world units, re-anchoring any layer
    /// that has moved one full tile past the viewport origin.
    pub fn advance(&mut self, dy: f32) {
        for layer in &mut self.layers {
            layer.top += dy;
        }
        for i in 0..self.layers.len() {
            if self.layers[i].top >= BACKGROUND_HEIGHT {
                let tail = self
                    .layers
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(_, l)| l.top)
                    .fold(f32::INFINITY, f32::min);
                self.layers[i].top = tail - BACKGROUND_HEIGHT;
            }
        }
    }

    /// Index of the layer whose tile currently contains the viewport origin.
    pub fn current(&self) -> usize {
        self.layers
            .iter()
            .position(|l| l.top <= 0.0 && l.top + BACKGROUND_HEIGHT > 0.0)
            .unwrap_or(0)
    }

    /// Level transition: swap the visible artwork for the next one in the
    /// rotation and restart the scroll from a clean layout.
    pub fn rotate(&mut self) {
        let next = (self.layers[self.current()].asset + 1) % BACKGROUND_ASSET_COUNT;
        self.relayout(next);
    }

    /// Respawn: back to the initial layout.
    pub fn reset(&mut self) {
        self.relayout(0);
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Backdrop::new()
    }
}
