//! WAV codec built on `hound`
//!
//! Decoding accepts any PCM WAV hound can read: stereo is down-mixed to
//! mono by channel average, integer widths other than 16 bits are rescaled,
//! float samples are quantized. Encoding always produces the canonical
//! format: 44-byte RIFF/WAVE/fmt/data header, PCM tag 1, mono, 8000 Hz,
//! 16 bits per sample, data immediately following.

use crate::error::TrackError;
use std::io::Cursor;
use std::path::Path;

/// Sample rate of encoded output, in Hz
pub const SAMPLE_RATE: u32 = 8000;
/// Channel count of encoded output
pub const CHANNELS: u16 = 1;
/// Bit depth of encoded output
pub const BITS_PER_SAMPLE: u16 = 16;

/// Decode WAV bytes into a mono `i16` sample sequence
///
/// # Errors
///
/// Returns `Codec` if the bytes are not a readable PCM WAV.
pub fn decode(bytes: &[u8]) -> Result<Vec<i16>, TrackError> {
    let reader = hound::WavReader::new(Cursor::new(bytes))?;
    read_samples(reader)
}

/// Encode samples as canonical mono/8000 Hz/16-bit PCM WAV bytes
///
/// # Errors
///
/// Returns `Codec` if the writer fails (it does not for in-memory output
/// of representable lengths).
pub fn encode(samples: &[i16]) -> Result<Vec<u8>, TrackError> {
    let spec = hound::WavSpec {
        channels: CHANNELS,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(cursor.into_inner())
}

/// Load a WAV file into a mono `i16` sample sequence
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, `Codec` if it is not a
/// readable PCM WAV.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<i16>, TrackError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}

/// Save samples to a WAV file in the canonical encoded format
///
/// # Errors
///
/// Returns `Io`/`Codec` on write failure.
pub fn save(path: impl AsRef<Path>, samples: &[i16]) -> Result<(), TrackError> {
    let bytes = encode(samples)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn read_samples<R: std::io::Read>(mut reader: hound::WavReader<R>) -> Result<Vec<i16>, TrackError> {
    let spec = reader.spec();
    log::debug!(
        "decoding wav: {} ch, {} Hz, {} bits, {:?}",
        spec.channels,
        spec.sample_rate,
        spec.bits_per_sample,
        spec.sample_format
    );

    let samples: Vec<i16> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| (v.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16))
            .collect::<Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let bits = i32::from(spec.bits_per_sample);
            reader
                .samples::<i32>()
                .map(|s| {
                    s.map(|v| {
                        if bits > 16 {
                            (v >> (bits - 16)) as i16
                        } else {
                            (v << (16 - bits)) as i16
                        }
                    })
                })
                .collect::<Result<_, _>>()?
        }
    };

    if spec.channels <= 1 {
        return Ok(samples);
    }

    // down-mix to mono by channel average
    let mono = samples
        .chunks(usize::from(spec.channels))
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| i32::from(s)).sum();
            (sum / frame.len() as i32) as i16
        })
        .collect();
    Ok(mono)
}
