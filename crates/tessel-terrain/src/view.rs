use tessel_coord::TileCoord;

/// Tile positions under the four window corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenCorners {
    pub top_left: TileCoord,
    pub top_right: TileCoord,
    pub bottom_right: TileCoord,
    pub bottom_left: TileCoord,
}

impl ScreenCorners {
    /// Corners of the tile rhombus enclosing the screen: lowest and highest
    /// (ne, se) that can be visible.
    ///
    /// ```text
    ///            x
    ///          .   .
    ///   tl   o=======o  tr
    ///      . = screen  = .
    ///  min x =         =   x max
    ///      . =         = .
    ///   bl   o=======o  br
    ///          .   .
    ///            x
    /// ```
    pub fn bounding_rhombus(&self) -> (TileCoord, TileCoord) {
        let min = TileCoord::new(self.bottom_left.ne, self.top_left.se);
        let max = TileCoord::new(self.top_right.ne, self.bottom_right.se);
        (min, max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

/// Window pixel to ground tile projection, owned by the camera.
pub trait CoordinateMapper {
    fn window_to_tile(&self, x: i32, y: i32) -> TileCoord;

    fn screen_corners(&self, size: WindowSize) -> ScreenCorners {
        ScreenCorners {
            top_left: self.window_to_tile(0, 0),
            top_right: self.window_to_tile(size.width, 0),
            bottom_right: self.window_to_tile(size.width, size.height),
            bottom_left: self.window_to_tile(0, size.height),
        }
    }
}
