//! Interaction shim around one summoned card: flip state, guarded rendering and PNG export.

use std::time::Duration;

use crate::assets::face_image::FaceImage;
use crate::deck::card::CardDescriptor;
use crate::deck::colors::CardColors;
use crate::encode::png::{encode_png, suggested_file_name};
use crate::forge::summon::Summoned;
use crate::foundation::error::TarotResult;
use crate::render::back::render_back;
use crate::render::backend::FrameRGBA;
use crate::render::cpu::CpuRasterizer;
use crate::render::face::{FaceInputs, render_face};
use crate::render::guard::{guarded, placeholder_scene, short_message};
use crate::render::plan::CardScene;
use crate::sigil::collaborators::CardDesigner;
use crate::sigil::model::{CardDesign, SigilData};

/// Time after a card's creation during which the headline reads "Revealing...".
pub const REVEAL_DELAY_MS: u64 = 1000;

/// A card on screen.
pub struct CardView {
    card: CardDescriptor,
    sigil: Option<SigilData>,
    colors: CardColors,
    design: CardDesign,
    imagery: String,
    face_image: Option<FaceImage>,
    flipped: bool,
    raster: CpuRasterizer,
    last_frame: Option<FrameRGBA>,
    last_face: Option<FrameRGBA>,
    face_drawn_with_image: bool,
}

impl std::fmt::Debug for CardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardView")
            .field("card", &self.card.name)
            .field("flipped", &self.flipped)
            .field("rendered", &self.last_frame.is_some())
            .finish_non_exhaustive()
    }
}

impl CardView {
    /// View over a summoned card; decorations come from `designer`.
    pub fn new(summoned: Summoned, designer: &dyn CardDesigner, raster: CpuRasterizer) -> Self {
        let Summoned {
            card,
            sigil,
            colors,
            face_image,
            ..
        } = summoned;
        let design = designer.design_for(&card, &card.intention, Some(&sigil), &card.variant);
        let imagery = designer.imagery_for(&card);
        Self {
            card,
            sigil: Some(sigil),
            colors,
            design,
            imagery,
            face_image,
            flipped: false,
            raster,
            last_frame: None,
            last_face: None,
            face_drawn_with_image: false,
        }
    }

    /// Card shown.
    pub fn card(&self) -> &CardDescriptor {
        &self.card
    }

    /// Sigil shown on the face.
    pub fn sigil(&self) -> Option<&SigilData> {
        self.sigil.as_ref()
    }

    /// Resolved colors.
    pub fn colors(&self) -> CardColors {
        self.colors
    }

    /// Whether the back is showing.
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Turn the card over; returns the new flip state.
    pub fn toggle_flip(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }

    /// Display list for the current side, or the placeholder if composition fails.
    pub fn scene(&mut self) -> CardScene {
        if self.flipped {
            return render_back(&self.card, self.colors);
        }
        let inputs = FaceInputs {
            card: &self.card,
            sigil: self.sigil.as_ref(),
            colors: self.colors,
            design: &self.design,
            imagery: &self.imagery,
            face_image: self.face_image.as_ref().and_then(FaceImage::get),
        };
        let raster = &mut self.raster;
        guarded(|| render_face(&inputs, raster))
    }

    /// Render the current side. Failures inside the pass yield the placeholder raster.
    pub fn render(&mut self) -> TarotResult<&FrameRGBA> {
        let with_image = !self.flipped && self.ready_image();
        let scene = self.scene();
        let frame = match self.raster.rasterize(&scene) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::error!(error = %e, "card rasterization failed; drawing placeholder");
                self.raster.rasterize(&placeholder_scene(short_message(&e)))?
            }
        };

        if !self.flipped {
            self.last_face = Some(frame.clone());
            self.face_drawn_with_image = with_image;
        }
        Ok(&*self.last_frame.insert(frame))
    }

    /// Block for at most `timeout` until the face image settles. Returns whether pixels are ready.
    pub fn wait_for_face_image(&self, timeout: Duration) -> bool {
        self.face_image
            .as_ref()
            .is_some_and(|img| img.wait(timeout).is_some())
    }

    /// Most recent raster of either side.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }

    /// Whether the displayed raster is stale: nothing drawn yet, or the face image finished
    /// decoding after the last face pass.
    pub fn needs_redraw(&self) -> bool {
        match &self.last_frame {
            None => true,
            Some(_) => !self.flipped && self.ready_image() && !self.face_drawn_with_image,
        }
    }

    /// PNG of the last face-up raster; `None` before the face was rendered or while flipped.
    pub fn export_png(&self) -> TarotResult<Option<Vec<u8>>> {
        if self.flipped {
            return Ok(None);
        }
        self.last_face.as_ref().map(encode_png).transpose()
    }

    /// Download name for an export made at `now_ms`.
    pub fn suggested_file_name(&self, now_ms: u64) -> String {
        suggested_file_name(&self.card.name, now_ms)
    }

    /// Caption above the card at `now_ms`.
    pub fn headline(&self, now_ms: u64) -> String {
        if self.flipped {
            "Card Back".to_owned()
        } else if now_ms < self.card.timestamp_ms.saturating_add(REVEAL_DELAY_MS) {
            "Revealing...".to_owned()
        } else {
            self.card.name.clone()
        }
    }

    fn ready_image(&self) -> bool {
        self.face_image
            .as_ref()
            .is_some_and(|img| img.get().is_some())
    }
}

#[cfg(test)]
#[path = "../tests/unit/view/view.rs"]
mod tests;
