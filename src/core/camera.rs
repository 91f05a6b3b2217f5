//! 2D-Kamera für Pan und Zoom über der Map.

use glam::Vec2;

/// 2D-Kamera mit Pan und Zoom.
///
/// Der Zoom ist ein uniformer, nicht rotierter Faktor; alle
/// Pixel→Welt-Umrechnungen (insbesondere der Highlight-Radius) setzen
/// diese Annahme voraus.
#[derive(Debug, Clone, Copy)]
pub struct Camera2D {
    /// Position der Kamera in Welt-Koordinaten
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Sichtbare Welt-Halbbreite bei Zoom 1.0 (Map-Einheiten).
    pub const BASE_WORLD_EXTENT: f32 = 4096.0;
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.05;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 64.0;

    /// Erstellt eine neue Kamera.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt.
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Verschiebt die Kamera (Pan).
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level.
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Konvertiert Screen-Koordinaten zu Welt-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let ndc = (screen_pos / screen_size) * 2.0 - Vec2::ONE;
        let aspect = screen_size.x / screen_size.y;
        Vec2::new(
            ndc.x * Self::BASE_WORLD_EXTENT * aspect / self.zoom,
            ndc.y * Self::BASE_WORLD_EXTENT / self.zoom,
        ) + self.position
    }

    /// Umrechnungsfaktor von Screen-Pixeln zu Welt-Einheiten.
    pub fn world_per_pixel(&self, viewport_height: f32) -> f32 {
        2.0 * Self::BASE_WORLD_EXTENT / (self.zoom * viewport_height.max(1.0))
    }

    /// Highlight-/Pick-Radius in Welt-Einheiten.
    ///
    /// Konvertiert den Pixel-Radius anhand von Zoom und Viewport-Höhe,
    /// sodass das Trefferfenster am Bildschirm konstant bleibt: beim
    /// Hineinzoomen schrumpft der Welt-Radius entsprechend.
    pub fn pick_radius_world(&self, viewport_height: f32, pick_radius_px: f32) -> f32 {
        pick_radius_px * self.world_per_pixel(viewport_height)
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn camera_copies_by_value() {
        let mut camera = Camera2D::new();
        let snapshot = camera;

        camera.zoom_by(4.0);
        camera.look_at(Vec2::new(100.0, 100.0));

        assert_eq!(snapshot.zoom, 1.0);
        assert_eq!(snapshot.position, Vec2::ZERO);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = Camera2D::new();
        camera.zoom_by(0.0001);
        assert_eq!(camera.zoom, Camera2D::ZOOM_MIN);
        camera.zoom_by(1.0e9);
        assert_eq!(camera.zoom, Camera2D::ZOOM_MAX);
    }

    #[test]
    fn pick_radius_shrinks_when_zooming_in() {
        let mut camera = Camera2D::new();
        let far = camera.pick_radius_world(768.0, 20.0);
        camera.zoom_by(4.0);
        let near = camera.pick_radius_world(768.0, 20.0);

        assert_abs_diff_eq!(far / near, 4.0, epsilon = 1e-4);
    }

    #[test]
    fn screen_center_maps_to_camera_position() {
        let mut camera = Camera2D::new();
        camera.look_at(Vec2::new(512.0, -256.0));

        let world = camera.screen_to_world(Vec2::new(640.0, 384.0), Vec2::new(1280.0, 768.0));
        assert_abs_diff_eq!(world.x, 512.0, epsilon = 1e-3);
        assert_abs_diff_eq!(world.y, -256.0, epsilon = 1e-3);
    }
}
