// SPDX-License-Identifier: MPL-2.0
//! The drawable surface shown by the viewer: exactly one smoothly filtered image.

use crate::media::ImageData;
use iced::widget::image::FilterMethod;

/// The single visual element placed on the surface.
#[derive(Debug, Clone)]
pub struct ImageElement {
    data: ImageData,
}

impl ImageElement {
    #[must_use]
    pub fn data(&self) -> &ImageData {
        &self.data
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.data.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.data.height
    }

    /// Interpolation used when the element is scaled. Always smooth.
    #[must_use]
    pub fn filter_method(&self) -> FilterMethod {
        FilterMethod::Linear
    }
}

/// Holds the image element for the lifetime of the viewer; never replaced.
#[derive(Debug, Clone)]
pub struct Surface {
    element: ImageElement,
}

impl Surface {
    #[must_use]
    pub fn new(data: ImageData) -> Self {
        Self {
            element: ImageElement { data },
        }
    }

    #[must_use]
    pub fn element(&self) -> &ImageElement {
        &self.element
    }
}
