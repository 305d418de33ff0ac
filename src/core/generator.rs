use crate::core::lines::{RecordLines, SampledLines};
use crate::core::sampling::draw_indices;
use crate::domain::model::{GeneratorConfig, RenderSummary, DATA_MARKER};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PageError, Result};
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Renders pages from a template and a data file.
pub struct PageGenerator<C: ConfigProvider = GeneratorConfig> {
    config: C,
}

impl<C: ConfigProvider> PageGenerator<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Every record of the data file, in file order.
    pub fn emit_all(&self) -> Result<RecordLines> {
        RecordLines::open(self.config.data_path())
    }

    /// `k` records chosen uniformly at random, in file order.
    pub fn emit_sample(&self, k: usize) -> Result<SampledLines> {
        self.emit_sample_with(k, &mut rand::thread_rng())
    }

    pub fn emit_sample_with<R: Rng + ?Sized>(&self, k: usize, rng: &mut R) -> Result<SampledLines> {
        let indices = draw_indices(rng, self.config.record_count(), k)?;
        tracing::debug!(
            "Sampling {} of {} records from {}",
            k,
            self.config.record_count(),
            self.config.data_path().display()
        );
        let lines = RecordLines::open(self.config.data_path())?;
        Ok(SampledLines::new(lines, indices))
    }

    /// Writes the template to `output`, replacing every marker line with the
    /// data records (all of them, or a sample of `sample` records).
    ///
    /// The output is truncated first and left partially written on failure.
    /// The sample size is only checked when a marker line is reached.
    pub fn render(&self, output: &Path, sample: Option<usize>) -> Result<RenderSummary> {
        self.render_with(output, sample, &mut rand::thread_rng())
    }

    pub fn render_with<R: Rng + ?Sized>(
        &self,
        output: &Path,
        sample: Option<usize>,
        rng: &mut R,
    ) -> Result<RenderSummary> {
        let template = RecordLines::open(self.config.template_path())?;
        let file = File::create(output).map_err(|source| write_failure(output, source))?;
        let mut writer = BufWriter::new(file);
        let mut summary = RenderSummary::default();

        for line in template {
            let line = line?;
            if !line.contains(DATA_MARKER) {
                write_line(&mut writer, output, &line)?;
                summary.template_lines += 1;
                continue;
            }

            summary.markers += 1;
            let written = match sample {
                None => copy_records(self.emit_all()?, &mut writer, output)?,
                Some(k) => copy_records(self.emit_sample_with(k, &mut *rng)?, &mut writer, output)?,
            };
            tracing::debug!("Expanded marker #{} with {} records", summary.markers, written);
            summary.records += written;
        }

        writer
            .flush()
            .map_err(|source| write_failure(output, source))?;

        if summary.markers == 0 {
            tracing::warn!(
                "⚠️ No '{}' marker in {}; copied template unchanged",
                DATA_MARKER,
                self.config.template_path().display()
            );
        }
        tracing::debug!("Rendered {}: {:?}", output.display(), summary);
        Ok(summary)
    }

    /// Number of lines actually present in the data file.
    pub fn count_records(&self) -> Result<usize> {
        self.emit_all()?.try_fold(0, |count, line| line.map(|_| count + 1))
    }
}

fn copy_records<I, W>(records: I, writer: &mut W, output: &Path) -> Result<usize>
where
    I: Iterator<Item = Result<String>>,
    W: Write,
{
    let mut written = 0;
    for record in records {
        write_line(writer, output, &record?)?;
        written += 1;
    }
    Ok(written)
}

fn write_line<W: Write>(writer: &mut W, output: &Path, line: &str) -> Result<()> {
    writer
        .write_all(line.as_bytes())
        .map_err(|source| write_failure(output, source))
}

fn write_failure(output: &Path, source: std::io::Error) -> PageError {
    PageError::WriteFailure {
        path: output.to_path_buf(),
        source,
    }
}
