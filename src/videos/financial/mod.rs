//! "FinancialVerificationVideo": 90 seconds on checking market data against official reports.

mod closing;
mod compare;
mod comparison;
mod correction;
mod data;
mod excel;
mod extraction;
mod intro;
mod number;
mod table;

use crate::{
    composition::model::Composition,
    foundation::core::{Canvas, Fps},
    foundation::error::FramecastResult,
    timeline::{sequencer::Sequencer, window::TimelineWindow},
    videos::background::{Background, BackgroundStyle},
};

pub use closing::ClosingScene;
pub use compare::CompareScene;
pub use correction::CorrectionScene;
pub use excel::ExcelScene;
pub use extraction::ExtractionScene;
pub use intro::IntroScene;

/// Registry id.
pub const ID: &str = "FinancialVerificationVideo";
/// Total length at 30 fps.
pub const DURATION_IN_FRAMES: u64 = 2700;

/// Build the composition with its six scenes over the shared background.
pub fn composition() -> FramecastResult<Composition> {
    use data::{PREMOUNT, SCENE_TIMING};

    let fps = Fps::new(30, 1)?;
    let canvas = Canvas {
        width: 1920,
        height: 1080,
    };
    let window = |i: usize| -> FramecastResult<TimelineWindow> {
        let (from, len) = SCENE_TIMING[i];
        Ok(TimelineWindow::new(from, len)?.with_premount(PREMOUNT))
    };
    let len = |i: usize| SCENE_TIMING[i].1;

    let background = Background::new(
        DURATION_IN_FRAMES,
        BackgroundStyle {
            grid_opacity: (0.025, 0.065),
            bottom_line: true,
        },
    )?;
    let sequencer = Sequencer::new()
        .with_background(background)
        .scene("introduction", window(0)?, IntroScene::new(fps, len(0))?)
        .scene("excel-data", window(1)?, ExcelScene::new(fps, len(1))?)
        .scene("pdf-extraction", window(2)?, ExtractionScene::new(fps, len(2))?)
        .scene("comparison", window(3)?, CompareScene::new(fps, len(3))?)
        .scene("correction", window(4)?, CorrectionScene::new(fps, len(4))?)
        .scene("final", window(5)?, ClosingScene::new(fps)?);

    Composition::new(ID, canvas, fps, DURATION_IN_FRAMES, sequencer)
}

#[cfg(test)]
#[path = "../../../tests/unit/videos/financial/mod.rs"]
mod tests;
