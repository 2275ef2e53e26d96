use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use lofty::{
    config::WriteOptions,
    file::{AudioFile, FileType, TaggedFileExt},
    tag::{Accessor, Tag, TagExt, TagType},
};
use walkdir::WalkDir;

/// Whether ffprobe and ffmpeg can be run.
///
/// Tests that run them are skipped without them.
#[allow(dead_code)]
pub fn tools_available() -> bool {
    let available = which::which("ffprobe").is_ok() && which::which("ffmpeg").is_ok();

    if !available {
        eprintln!("ffprobe or ffmpeg is not found. The test is skipped.");
    }

    available
}

/// Creates a 16-bit stereo WAV file of 0.1 seconds of silence.
pub fn create_wav(path: &Path, sample_rate: u32) -> Result<()> {
    const CHANNELS: u16 = 2;
    const BITS_PER_SAMPLE: u16 = 16;

    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let data_size = sample_rate / 10 * u32::from(block_align);

    let mut bytes = Vec::with_capacity(44 + data_size as usize);

    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_size).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&CHANNELS.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * u32::from(block_align)).to_le_bytes());
    bytes.extend_from_slice(&block_align.to_le_bytes());
    bytes.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_size.to_le_bytes());
    bytes.resize(44 + data_size as usize, 0);

    if let Some(directory) = path.parent() {
        fs::create_dir_all(directory)?;
    }

    fs::write(path, bytes)?;

    Ok(())
}

/// Creates a WAV file with artist and album in its RIFF INFO chunk.
#[allow(dead_code)]
pub fn create_tagged_wav(path: &Path, sample_rate: u32, artist: &str, album: &str) -> Result<()> {
    create_wav(path, sample_rate)?;

    let mut tag = Tag::new(TagType::RiffInfo);

    tag.set_artist(artist.to_owned());
    tag.set_album(album.to_owned());
    tag.save_to_path(path, WriteOptions::default())?;

    Ok(())
}

/// Asserts that `path` is an MP4 file at 44.1 kHz.
#[allow(dead_code)]
pub fn assert_alac_file(path: &Path) {
    let tagged_file = lofty::read_from_path(path).unwrap();

    assert_eq!(FileType::Mp4, tagged_file.file_type());
    assert_eq!(Some(44100), tagged_file.properties().sample_rate());
}

/// Lists files under `directory`.
#[allow(dead_code)]
pub fn list_files(directory: &Path) -> Vec<PathBuf> {
    WalkDir::new(directory)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}
