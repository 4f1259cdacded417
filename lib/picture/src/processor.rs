//! File-to-file operations behind the command line.
//!
//! Each operation loads its inputs, builds a new picture and saves it. Inputs are
//! never written to. `flip`, `blend` and `blur` have no defined behaviour yet and
//! fail with [`PictureError::NotImplemented`].

use crate::{
    Effect, ImageEffect, Picture, PictureError, PictureResult, transform_effect::RotateConfig,
};
use std::path::Path;

fn apply_file(
    effect: ImageEffect,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> PictureResult<()> {
    let (input, output) = (input.as_ref(), output.as_ref());
    log::info!("{:?}: {} -> {}", effect, input.display(), output.display());

    let picture = Picture::load(input)?;
    let result = effect.apply(&picture)?;
    result.save(output)?;

    log::info!(
        "wrote {} ({}x{})",
        output.display(),
        result.width(),
        result.height()
    );
    Ok(())
}

pub fn invert(input: impl AsRef<Path>, output: impl AsRef<Path>) -> PictureResult<()> {
    apply_file(ImageEffect::Invert, input, output)
}

pub fn grayscale(input: impl AsRef<Path>, output: impl AsRef<Path>) -> PictureResult<()> {
    apply_file(ImageEffect::Grayscale, input, output)
}

pub fn rotate(
    degrees: i32,
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> PictureResult<()> {
    apply_file(
        ImageEffect::Rotate(RotateConfig::new().with_degrees(degrees)),
        input,
        output,
    )
}

pub fn flip(axis: char, input: impl AsRef<Path>, output: impl AsRef<Path>) -> PictureResult<()> {
    log::warn!(
        "flip `{axis}` {} -> {}: not implemented",
        input.as_ref().display(),
        output.as_ref().display()
    );
    Err(PictureError::NotImplemented("flip"))
}

pub fn blend<P: AsRef<Path>>(inputs: &[P], output: impl AsRef<Path>) -> PictureResult<()> {
    log::warn!(
        "blend {} input(s) -> {}: not implemented",
        inputs.len(),
        output.as_ref().display()
    );
    Err(PictureError::NotImplemented("blend"))
}

pub fn blur(input: impl AsRef<Path>, output: impl AsRef<Path>) -> PictureResult<()> {
    log::warn!(
        "blur {} -> {}: not implemented",
        input.as_ref().display(),
        output.as_ref().display()
    );
    Err(PictureError::NotImplemented("blur"))
}
