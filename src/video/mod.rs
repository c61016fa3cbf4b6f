// This file is part of render-surface.
// Copyright (c) 2016-2019 Sebastian Jastrzebski. All rights reserved.
// Licensed under the GPLv3. See LICENSE file in the project root for full license text.

mod geometry;
mod palette;
mod render_surface;
mod surface;

pub use self::geometry::Geometry;
pub use self::palette::{pack_rgb, Palette};
pub use self::render_surface::RenderSurface;
pub use self::surface::{row_padding, Surface};
