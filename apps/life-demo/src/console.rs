//! Terminal sink: prints each generation, records it, and reports progress
//! back to `main` over a channel.

use crossbeam_channel::Sender;

use life_core::{Generation, Grid};
use life_engine::GameSink;
use life_output::{OutputWriter, RecordingSink};

/// Progress reported to the main thread.
#[derive(Copy, Clone, Debug)]
pub enum Progress {
    Changed(Generation),
    Ended(Generation),
}

pub struct ConsoleSink<W: OutputWriter> {
    pub recorder: RecordingSink<W>,
    progress:     Sender<Progress>,
}

impl<W: OutputWriter> ConsoleSink<W> {
    pub fn new(recorder: RecordingSink<W>, progress: Sender<Progress>) -> Self {
        Self { recorder, progress }
    }
}

impl<W: OutputWriter> GameSink for ConsoleSink<W> {
    fn on_grid_changed(&self, generation: Generation, grid: &Grid) {
        println!("── {generation}  live={} ──", grid.live_count());
        print!("{grid}");
        self.recorder.on_grid_changed(generation, grid);
        // main may already have given up waiting
        let _ = self.progress.send(Progress::Changed(generation));
    }

    fn on_game_ended(&self, generation: Generation, grid: &Grid) {
        println!("── {generation}  fixed point, live={} ──", grid.live_count());
        self.recorder.on_game_ended(generation, grid);
        let _ = self.progress.send(Progress::Ended(generation));
    }
}
