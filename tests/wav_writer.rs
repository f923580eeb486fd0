//! Writer for WAV files

use std::path::Path;

use hound::*;

use dual_osc_dsp::{Sample, AUDIO_RATE, OUTPUT_BITS};

/// Writes output samples as mono WAV file in 16-bit integer format.
pub fn write(
    filename: impl AsRef<std::path::Path> + core::fmt::Display,
    samples: &[Sample],
) -> std::io::Result<()> {
    let path = format!("out/{filename}");
    let path = Path::new(path.as_str());

    // Create parent directories to the path if they don't exist.
    let parent = path.parent().unwrap();
    std::fs::create_dir_all(parent).ok();

    let spec = WavSpec {
        channels: 1,
        sample_rate: AUDIO_RATE,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).map_err(to_io_error)?;

    for sample in samples {
        writer
            .write_sample(*sample << (16 - OUTPUT_BITS))
            .map_err(to_io_error)?;
    }

    writer.finalize().map_err(to_io_error)
}

fn to_io_error(error: hound::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error)
}
