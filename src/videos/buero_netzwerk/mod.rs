//! "BueroNetzwerk": a 20 second walkthrough of a small office network.

mod data;
mod inventory;
mod issues;
mod title;
mod topology;

use crate::{
    composition::model::Composition,
    foundation::core::{Canvas, Fps},
    foundation::error::FramecastResult,
    timeline::{sequencer::Sequencer, window::TimelineWindow},
    videos::background::{Background, BackgroundStyle},
};

pub use inventory::InventoryScene;
pub use issues::IssuesScene;
pub use title::TitleScene;
pub use topology::TopologyScene;

/// Registry id.
pub const ID: &str = "BueroNetzwerk";
/// Total length at 30 fps.
pub const DURATION_IN_FRAMES: u64 = 600;

/// Build the composition with its four scenes over the shared background.
pub fn composition() -> FramecastResult<Composition> {
    let fps = Fps::new(30, 1)?;
    let canvas = Canvas {
        width: 1920,
        height: 1080,
    };
    let secs = |s: u64| s * 30;

    let background = Background::new(
        DURATION_IN_FRAMES,
        BackgroundStyle {
            grid_opacity: (0.02, 0.06),
            bottom_line: false,
        },
    )?;
    let sequencer = Sequencer::new()
        .with_background(background)
        .scene(
            "title",
            TimelineWindow::new(0, secs(5))?.with_premount(10),
            TitleScene::new(fps, secs(5))?,
        )
        .scene(
            "topology",
            TimelineWindow::new(secs(5), secs(7))?.with_premount(15),
            TopologyScene::new(fps, secs(7))?,
        )
        .scene(
            "inventory",
            TimelineWindow::new(secs(12), secs(5))?.with_premount(15),
            InventoryScene::new(fps, secs(5))?,
        )
        .scene(
            "issues",
            TimelineWindow::new(secs(17), secs(3))?.with_premount(15),
            IssuesScene::new(fps, secs(3))?,
        );

    Composition::new(ID, canvas, fps, DURATION_IN_FRAMES, sequencer)
}

#[cfg(test)]
#[path = "../../../tests/unit/videos/buero_netzwerk.rs"]
mod tests;
