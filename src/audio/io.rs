//! Audio file I/O operations
//!
//! WAV files are handled by hound; compressed formats (MP3, OGG) go through
//! symphonia. All sources are decoded to mono at their native sample rate —
//! multi-channel audio is downmixed by channel averaging, and no resampling
//! is performed.

use crate::audio::Signal;
use crate::error::{Result, SpectraError};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::fs::File;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decode an audio file into a mono Signal at its native sample rate
pub fn decode<P: AsRef<Path>>(path: P) -> Result<Signal> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("wav") => decode_wav(path),
        _ => decode_compressed(path),
    }
}

/// Encode a Signal to a 16-bit PCM WAV file, clamping samples to -1.0..1.0
pub fn encode<P: AsRef<Path>>(signal: &Signal, path: P) -> Result<()> {
    let path = path.as_ref();
    let spec = WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| write_error(path, e))?;

    for &sample in signal.samples() {
        let clamped = sample.clamp(-1.0, 1.0);
        let int_sample = (clamped * i16::MAX as f64) as i16;
        writer
            .write_sample(int_sample)
            .map_err(|e| write_error(path, e))?;
    }

    writer.finalize().map_err(|e| write_error(path, e))?;
    Ok(())
}

/// Encode a Signal to a 32-bit float WAV file (lossless round trip)
pub fn encode_float<P: AsRef<Path>>(signal: &Signal, path: P) -> Result<()> {
    let path = path.as_ref();
    let spec = WavSpec {
        channels: 1,
        sample_rate: signal.sample_rate(),
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| write_error(path, e))?;

    for &sample in signal.samples() {
        writer
            .write_sample(sample as f32)
            .map_err(|e| write_error(path, e))?;
    }

    writer.finalize().map_err(|e| write_error(path, e))?;
    Ok(())
}

fn read_error(path: &Path, source: hound::Error) -> SpectraError {
    SpectraError::AudioReadError {
        path: path.display().to_string(),
        source,
    }
}

fn write_error(path: &Path, source: hound::Error) -> SpectraError {
    SpectraError::AudioWriteError {
        path: path.display().to_string(),
        source,
    }
}

fn decode_error(path: &Path, source: SymphoniaError) -> SpectraError {
    SpectraError::AudioDecodeError {
        path: path.display().to_string(),
        source,
    }
}

fn decode_wav(path: &Path) -> Result<Signal> {
    let reader = WavReader::open(path).map_err(|e| read_error(path, e))?;

    let spec = reader.spec();
    let channels = spec.channels as usize;
    let sample_rate = spec.sample_rate;

    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from).map_err(|e| read_error(path, e)))
            .collect::<Result<_>>()?,
        SampleFormat::Int => {
            let max_val = (1u32 << (spec.bits_per_sample - 1)) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / max_val).map_err(|e| read_error(path, e)))
                .collect::<Result<_>>()?
        }
    };

    Signal::new(downmix(&interleaved, channels), sample_rate)
}

/// Average interleaved frames into one channel
fn downmix(interleaved: &[f64], channels: usize) -> Vec<f64> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f64>() / frame.len() as f64)
        .collect()
}

fn decode_compressed(path: &Path) -> Result<Signal> {
    let file = File::open(path).map_err(|e| decode_error(path, SymphoniaError::IoError(e)))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| decode_error(path, e))?;

    let mut format = probed.format;
    let track = format
        .default_track()
        .ok_or_else(|| SpectraError::UnsupportedFormat {
            details: format!("no audio track in {}", path.display()),
        })?;
    let track_id = track.id;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| decode_error(path, e))?;

    let mut sample_rate = track.codec_params.sample_rate.unwrap_or(0);
    let mut channels = 0usize;
    let mut samples: Vec<f64> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(decode_error(path, e)),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if sample_buf.is_none() {
                    let spec = *decoded.spec();
                    sample_rate = spec.rate;
                    channels = spec.channels.count();
                    sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
                }
                if let Some(buf) = &mut sample_buf {
                    buf.copy_interleaved_ref(decoded);
                    if channels <= 1 {
                        samples.extend(buf.samples().iter().map(|&s| f64::from(s)));
                    } else {
                        samples.extend(buf.samples().chunks(channels).map(|frame| {
                            frame.iter().map(|&s| f64::from(s)).sum::<f64>()
                                / frame.len() as f64
                        }));
                    }
                }
            }
            // Skip over malformed packets rather than abort mid-file
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => return Err(decode_error(path, e)),
        }
    }

    if samples.is_empty() {
        return Err(SpectraError::UnsupportedFormat {
            details: format!("no decodable audio in {}", path.display()),
        });
    }

    Signal::new(samples, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_wav_round_trip_float() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.wav");

        let original = Signal::sine(440.0, 0.5, 44100);
        encode_float(&original, &path).unwrap();

        let loaded = decode(&path).unwrap();

        assert_eq!(original.sample_rate(), loaded.sample_rate());
        assert_eq!(original.len(), loaded.len());
        // f64 -> f32 -> f64 loses precision below 1e-7 for unit amplitudes
        assert!(original.approx_eq(&loaded, 1e-6));
    }

    #[test]
    fn test_wav_round_trip_16bit() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_16bit.wav");

        let original = Signal::sine(440.0, 0.5, 44100);
        encode(&original, &path).unwrap();

        let loaded = decode(&path).unwrap();

        assert_eq!(original.sample_rate(), loaded.sample_rate());
        assert!(original.approx_eq(&loaded, 1e-3));
    }

    #[test]
    fn test_stereo_wav_downmixes_to_mono() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stereo.wav");

        let spec = WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        // L = 0.5, R = -0.5 throughout: the downmix must cancel to zero
        for _ in 0..800 {
            writer.write_sample(0.5f32).unwrap();
            writer.write_sample(-0.5f32).unwrap();
        }
        writer.finalize().unwrap();

        let loaded = decode(&path).unwrap();
        assert_eq!(loaded.len(), 800);
        assert!(loaded.samples().iter().all(|&s| s.abs() < 1e-9));
    }

    #[test]
    fn test_decode_missing_file() {
        let result = decode("nonexistent_file.wav");
        assert!(matches!(result, Err(SpectraError::AudioReadError { .. })));
    }

    #[test]
    fn test_decode_missing_compressed_file_names_path() {
        match decode("nonexistent_file.mp3") {
            Err(SpectraError::AudioDecodeError { path, .. }) => {
                assert!(path.contains("nonexistent_file.mp3"));
            }
            other => panic!("expected a decode error carrying the path, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_clamps_out_of_range_samples() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hot.wav");

        let signal = Signal::new(vec![2.0, -2.0, 0.0], 8000).unwrap();
        encode(&signal, &path).unwrap();

        let loaded = decode(&path).unwrap();
        assert!(loaded.samples()[0] <= 1.0);
        assert!(loaded.samples()[1] >= -1.0);
    }
}
