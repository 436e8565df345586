//! Command-line interface for rendering preset knot layouts to PNG files

use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

use crate::algorithm::layout::KnotLayout;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_OUTPUT_DIR, DEFAULT_ROWS, DEFAULT_STROKE_WIDTH, DEFAULT_UNIT_LENGTH,
    KnotParams, OUTPUT_EXTENSION, OUTPUT_SUFFIX, ViewParams,
};
use crate::io::error::Result;
use crate::io::image::export_layout_as_png;
use crate::io::presets::Preset;
use crate::io::progress::ProgressManager;

#[derive(Parser)]
#[command(name = "knotwork")]
#[command(author, version, about = "Render Celtic knotwork layouts as PNG images")]
/// Command-line arguments for the knot renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Presets to render (all presets when omitted)
    #[arg(value_name = "PRESET", value_enum)]
    pub presets: Vec<Preset>,

    /// Directory receiving the rendered images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Primary anchor rows of the plain preset
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Primary anchor columns of the plain preset
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Pixels per grid unit
    #[arg(short, long, default_value_t = DEFAULT_UNIT_LENGTH)]
    pub unit: u32,

    /// Stroke width of the weave in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_STROKE_WIDTH)]
    pub stroke: u32,

    /// Draw the authored block boundaries as guide lines
    #[arg(short, long)]
    pub guides: bool,

    /// Draw primary and secondary anchor markers
    #[arg(short, long)]
    pub markers: bool,

    /// Draw hard pixel edges instead of smoothed ones
    #[arg(long)]
    pub aliased: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render even if the output already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Presets selected on the command line, defaulting to all of them
    pub fn selected_presets(&self) -> Vec<Preset> {
        if self.presets.is_empty() {
            Preset::ALL.to_vec()
        } else {
            self.presets.clone()
        }
    }

    /// Knot size for the plain preset
    pub const fn knot_params(&self) -> KnotParams {
        KnotParams {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Rendering parameters derived from the flags
    pub fn view_params(&self) -> ViewParams {
        ViewParams {
            unit_length: self.unit,
            stroke_width: self.stroke,
            draw_guides: self.guides,
            draw_markers: self.markers,
            anti_alias: !self.aliased,
            ..ViewParams::default()
        }
    }

    /// Output path for a preset
    pub fn output_path(&self, preset: Preset) -> PathBuf {
        self.output
            .join(format!("{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}", preset.name()))
    }
}

/// Renders the selected presets with progress tracking
pub struct RenderProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RenderProcessor {
    /// Create a new render processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render every selected preset
    ///
    /// Returns the paths written, in preset order.
    ///
    /// # Errors
    ///
    /// Returns the first layout, parameter or export error; any error aborts the
    /// remaining renders.
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let view = self.cli.view_params();
        view.validate()?;

        let presets = self.collect_presets();
        let mut written = Vec::with_capacity(presets.len());

        if presets.is_empty() {
            return Ok(written);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(presets.len());
        }

        for (index, preset) in presets.iter().enumerate() {
            written.push(self.process_preset(*preset, index, &view)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn collect_presets(&self) -> Vec<Preset> {
        self.cli
            .selected_presets()
            .into_iter()
            .filter(|preset| {
                let path = self.cli.output_path(*preset);
                let keep = self.should_process(&path);
                if !keep {
                    warn!(preset = preset.name(), path = %path.display(), "output exists, skipping");
                }
                keep
            })
            .collect()
    }

    fn should_process(&self, output_path: &Path) -> bool {
        !self.cli.skip_existing() || !output_path.exists()
    }

    fn process_preset(&mut self, preset: Preset, index: usize, view: &ViewParams) -> Result<PathBuf> {
        let start = Instant::now();
        if let Some(ref pm) = self.progress_manager {
            pm.start_item(index, preset.name());
        }

        let grid = preset.build(&self.cli.knot_params())?;
        let layout = KnotLayout::new(grid)?;
        let output_path = self.cli.output_path(preset);
        export_layout_as_png(&layout, view, &output_path)?;

        info!(
            preset = preset.name(),
            width = layout.composite_width(),
            height = layout.composite_height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            path = %output_path.display(),
            "rendered knot layout"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_item(index, &output_path.display().to_string());
        }

        Ok(output_path)
    }
}
