//! The selection result and the provider seam that produces it.

use crate::core::{error::Result, options::SelectOptions};
use serde::{Deserialize, Serialize};

/// A completed (or cancelled) region selection
///
/// `id` is the selected window, or `0` for a freeform rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub cancelled: bool,
}

impl Selection {
    pub fn new(x: f32, y: f32, w: f32, h: f32, id: u64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            id,
            cancelled: false,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            ..Default::default()
        }
    }
}

/// Something that can ask the user for a region
///
/// Implementations may block for as long as the user takes. The options are
/// handed over by value; a provider is asked at most once per run.
pub trait SelectionProvider {
    fn select(&mut self, options: SelectOptions) -> Result<Selection>;
}
