use tessel_terrain::{CoordinateMapper, TileCoord};

/// Fixed isometric camera centered on a tile.
///
/// Screen axes: +ne goes up-right, +se goes down-right. A tile is
/// `tile_width` pixels wide and half as tall.
pub struct IsoCamera {
    pub center: TileCoord,
    pub tile_width: f32,
    pub window_width: i32,
    pub window_height: i32,
}

impl IsoCamera {
    pub fn new(center: TileCoord, tile_width: f32, window_width: i32, window_height: i32) -> Self {
        Self {
            center,
            tile_width: tile_width.max(1.0),
            window_width,
            window_height,
        }
    }
}

impl CoordinateMapper for IsoCamera {
    fn window_to_tile(&self, x: i32, y: i32) -> TileCoord {
        let half_w = self.tile_width / 2.0;
        let half_h = self.tile_width / 4.0;
        let a = (x - self.window_width / 2) as f32 / half_w;
        let b = (y - self.window_height / 2) as f32 / half_h;
        let ne = ((a - b) / 2.0).floor() as i32;
        let se = ((a + b) / 2.0).floor() as i32;
        TileCoord::new(self.center.ne + ne, self.center.se + se)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessel_terrain::WindowSize;

    #[test]
    fn window_center_maps_to_camera_tile() {
        let cam = IsoCamera::new(TileCoord::new(7, -3), 64.0, 640, 480);
        assert_eq!(cam.window_to_tile(320, 240), TileCoord::new(7, -3));
    }

    #[test]
    fn axes_follow_screen_directions() {
        let cam = IsoCamera::new(TileCoord::new(0, 0), 64.0, 640, 480);
        // Centers of the tiles up-right and down-right of the origin tile.
        assert_eq!(cam.window_to_tile(320 + 64, 240 - 16), TileCoord::new(1, 0));
        assert_eq!(cam.window_to_tile(320 + 64, 240 + 16), TileCoord::new(0, 1));
    }

    #[test]
    fn corners_enclose_the_center() {
        let cam = IsoCamera::new(TileCoord::new(0, 0), 64.0, 640, 480);
        let (min, max) = cam
            .screen_corners(WindowSize {
                width: 640,
                height: 480,
            })
            .bounding_rhombus();
        assert!(min.ne < 0 && min.se < 0);
        assert!(max.ne > 0 && max.se > 0);
    }
}
