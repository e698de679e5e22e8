//! Plot rendering
//!
//! Renders waveforms, magnitude spectra and the contact surname chart to
//! PNG files through the plotters bitmap backend. Nothing here feeds back
//! into the pipeline; plots are write-only diagnostics.

use crate::audio::Signal;
use crate::contacts::ContactBook;
use crate::error::{Result, SpectraError};
use crate::spectral::{bin_frequencies, center, forward};
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;
use std::path::Path;

const PLOT_SIZE: (u32, u32) = (1200, 400);

fn plot_error(path: &Path, details: impl ToString) -> SpectraError {
    SpectraError::PlotError {
        path: path.display().to_string(),
        details: details.to_string(),
    }
}

/// Render the time-domain waveform of a signal
pub fn plot_waveform<P: AsRef<Path>>(signal: &Signal, path: P, title: &str) -> Result<()> {
    let path = path.as_ref();
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_error(path, e))?;

    let amplitude = signal
        .samples()
        .iter()
        .fold(0.0_f64, |acc, s| acc.max(s.abs()))
        .max(1e-6)
        * 1.05;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..signal.duration(), -amplitude..amplitude)
        .map_err(|e| plot_error(path, e))?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Amplitude")
        .draw()
        .map_err(|e| plot_error(path, e))?;

    let sample_rate = signal.sample_rate() as f64;
    chart
        .draw_series(LineSeries::new(
            signal
                .samples()
                .iter()
                .enumerate()
                .map(|(i, &s)| (i as f64 / sample_rate, s)),
            &BLUE,
        ))
        .map_err(|e| plot_error(path, e))?;

    root.present().map_err(|e| plot_error(path, e))?;
    Ok(())
}

/// Render the magnitude spectrum over the signed frequency axis
pub fn plot_spectrum<P: AsRef<Path>>(signal: &Signal, path: P, title: &str) -> Result<()> {
    let path = path.as_ref();

    let magnitudes: Vec<f64> = forward(signal).iter().map(|bin| bin.norm()).collect();
    let freqs = bin_frequencies(magnitudes.len(), signal.sample_rate());

    // Centered order keeps the trace contiguous from -Nyquist to +Nyquist
    let magnitudes = center(&magnitudes);
    let freqs = center(&freqs);

    let max_magnitude = magnitudes.iter().fold(0.0_f64, |acc, &m| acc.max(m)).max(1e-6);
    let f_min = freqs.first().copied().unwrap_or(0.0);
    // Keep the axis non-degenerate for single-bin spectra
    let f_max = freqs.last().copied().unwrap_or(1.0).max(f_min + 1.0);

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_error(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(f_min..f_max, 0.0..max_magnitude * 1.05)
        .map_err(|e| plot_error(path, e))?;

    chart
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc("Amplitude")
        .draw()
        .map_err(|e| plot_error(path, e))?;

    chart
        .draw_series(LineSeries::new(
            freqs.into_iter().zip(magnitudes),
            &BLUE,
        ))
        .map_err(|e| plot_error(path, e))?;

    root.present().map_err(|e| plot_error(path, e))?;
    Ok(())
}

/// Render a bar chart of contacts per surname
pub fn plot_surname_distribution<P: AsRef<Path>>(book: &ContactBook, path: P) -> Result<()> {
    let path = path.as_ref();
    let counts = book.surname_counts();
    let surnames: Vec<String> = counts.iter().map(|(s, _)| s.clone()).collect();
    let max_count = counts.iter().map(|(_, c)| *c).max().unwrap_or(0) as i32;

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| plot_error(path, e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Distribution of Contacts by Surname", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(
            (0..counts.len().max(1) as i32).into_segmented(),
            0..max_count + 1,
        )
        .map_err(|e| plot_error(path, e))?;

    chart
        .configure_mesh()
        .x_desc("Surnames")
        .y_desc("Number of Contacts")
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) => surnames
                .get(*i as usize)
                .cloned()
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(|e| plot_error(path, e))?;

    chart
        .draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
            Rectangle::new(
                [
                    (SegmentValue::Exact(i as i32), 0),
                    (SegmentValue::Exact(i as i32 + 1), *count as i32),
                ],
                BLUE.filled(),
            )
        }))
        .map_err(|e| plot_error(path, e))?;

    root.present().map_err(|e| plot_error(path, e))?;
    Ok(())
}
