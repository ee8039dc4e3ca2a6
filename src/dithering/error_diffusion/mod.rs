use std::sync::mpsc::{Receiver, SyncSender, sync_channel};

use image::{GenericImageView, Rgb, Rgba};
use itertools::Itertools;

use crate::{
    error::{DitherflowError, Result},
    palette::PalettedImage,
    utils::rect::Rect,
};

pub mod kernels;

pub(crate) mod error_buffer;

pub use error_buffer::PixelError;
pub use kernels::{DiffusionKernel, KernelType};

use error_buffer::ErrorBuffer;

/// Damping applied to the accumulated error before it biases a pixel.
/// Acts as a low-pass filter keeping the running error from snowballing.
const ERROR_DAMPING: f32 = 0.75;

/// Find the palette entry closest to `pix` once the damped accumulated error
/// has been folded in.
///
/// Returns the index of the chosen entry, the residual error left over by the
/// choice and the winning Manhattan distance. Ties resolve to the earliest
/// palette index. Pure function of its inputs; an empty palette is an error.
pub fn find_color(
    err: PixelError,
    pix: Rgba<u8>,
    palette: &[Rgb<u8>],
) -> Result<(usize, PixelError, u32)> {
    let damped = [
        (err.r * ERROR_DAMPING) as i32,
        (err.g * ERROR_DAMPING) as i32,
        (err.b * ERROR_DAMPING) as i32,
    ];

    let Rgba([r, g, b, _]) = pix;
    // working values are signed and may leave the 0..=255 channel range
    let want = [
        r as i32 + damped[0],
        g as i32 + damped[1],
        b as i32 + damped[2],
    ];

    let distance_to = |color: &Rgb<u8>| -> u32 {
        color
            .0
            .iter()
            .zip(want)
            .map(|(&channel, target)| (target - channel as i32).unsigned_abs())
            .sum()
    };

    // position_min_by_key keeps the first of equally distant entries
    let index = palette
        .iter()
        .position_min_by_key(|color| distance_to(color))
        .ok_or(DitherflowError::EmptyPalette)?;

    let Rgb(chosen) = palette[index];
    let residual = PixelError::new(
        (want[0] - chosen[0] as i32) as f32,
        (want[1] - chosen[1] as i32) as f32,
        (want[2] - chosen[2] as i32) as f32,
    );

    Ok((index, residual, distance_to(&palette[index])))
}

/// Distribute a residual into the buffer cells the kernel targets.
///
/// `shift` is the kernel alignment; targets falling outside the buffer lose
/// their share of the residual.
pub(crate) fn diffuse(
    err: &mut ErrorBuffer,
    kernel: &DiffusionKernel,
    shift: i32,
    x: i32,
    y: i32,
    residual: PixelError,
) {
    for (i, row) in kernel.rows().iter().enumerate() {
        for (j, &weight) in row.iter().enumerate() {
            let (tx, ty) = (x + j as i32 + shift, y + i as i32);
            err.set_error(tx, ty, err.error_at(tx, ty) + residual * weight);
        }
    }
}

/// Error diffusion dithering engine.
///
/// Holds the kernel and the animation handoff configured at construction.
/// Per-draw state lives inside [`Ditherer::draw`], so one engine can be
/// reused across images.
#[derive(Debug)]
pub struct Ditherer {
    kernel: DiffusionKernel,
    nb_frames: u32,
    animation: Option<SyncSender<PalettedImage>>,
}

impl Ditherer {
    /// Prepare a dithering engine with no animation output.
    pub fn new(kernel: DiffusionKernel) -> Self {
        Self {
            kernel,
            nb_frames: 1,
            animation: None,
        }
    }

    /// Prepare a dithering engine that hands off `nb_frames` snapshots of the
    /// in-progress image over the returned channel.
    ///
    /// The handoff is a rendezvous: [`Ditherer::draw`] blocks on every frame
    /// until the receiver takes it, so a consumer loop must be running
    /// concurrently with the draw. Dropping the receiver early makes the draw
    /// fail with [`DitherflowError::AnimationClosed`] instead of blocking
    /// forever.
    pub fn with_animation(
        kernel: DiffusionKernel,
        nb_frames: u32,
    ) -> (Self, Receiver<PalettedImage>) {
        let (sender, receiver) = sync_channel(0);
        (
            Self {
                kernel,
                nb_frames: nb_frames.max(1),
                animation: Some(sender),
            },
            receiver,
        )
    }

    /// Apply the error diffusion algorithm to `rect`, reading source pixels
    /// from `src` and writing palette indices into `dst`.
    ///
    /// `rect` must be contained in the bounds of both surfaces. The scan is
    /// row-major and strictly sequential: every pixel depends on error
    /// diffused from earlier pixels of the same pass.
    pub fn draw(
        &self,
        dst: &mut PalettedImage,
        rect: Rect,
        src: &impl GenericImageView<Pixel = Rgba<u8>>,
    ) -> Result {
        if !dst.bounds().contains_rect(&rect) {
            return Err(DitherflowError::RegionOutOfBounds {
                region: rect,
                bounds: dst.bounds(),
            });
        }
        let (src_width, src_height) = src.dimensions();
        let src_bounds = Rect::from_size(src_width, src_height);
        if !src_bounds.contains_rect(&rect) {
            return Err(DitherflowError::RegionOutOfBounds {
                region: rect,
                bounds: src_bounds,
            });
        }

        let mut err = ErrorBuffer::new(rect);
        let shift = self.kernel.alignment();
        // zero when nb_frames exceeds the pixel count: no frames are emitted
        let pix_per_frame = rect.dx() * rect.dy() / self.nb_frames as i32;

        for y in rect.min_y..rect.max_y {
            for x in rect.min_x..rect.max_x {
                // pick the closest color
                let (index, residual, _) =
                    find_color(err.error_at(x, y), src.get_pixel(x as u32, y as u32), dst.palette())?;
                dst.set_index(x as u32, y as u32, index as u8);

                if self.nb_frames > 1
                    && pix_per_frame > 0
                    && x != 0
                    && y != 0
                    && (y * rect.dy() + x) % pix_per_frame == 0
                {
                    self.emit_frame(dst)?;
                }

                // the residual only feeds the diffusion pass; it is never
                // read back at its own coordinate
                diffuse(&mut err, &self.kernel, shift, x, y, residual);
            }
        }

        Ok(())
    }

    fn emit_frame(&self, dst: &PalettedImage) -> Result {
        if let Some(animation) = &self.animation {
            animation
                .send(dst.clone())
                .map_err(|_| DitherflowError::AnimationClosed)?;
        }
        Ok(())
    }
}
