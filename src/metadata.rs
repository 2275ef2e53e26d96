// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Metadata of music files.

use anyhow::{Context, Result};
use serde::Deserialize;

/// The artist used when a file has no artist tag.
pub const UNKNOWN_ARTIST: &str = "Unknown_Artist";

/// The album used when a file has no album tag.
pub const UNKNOWN_ALBUM: &str = "Unknown_Album";

/// The codec name used when the audio stream cannot be probed.
pub const UNKNOWN_CODEC: &str = "unknown";

/// Tags of a music file that decide where the converted file is located.
///
/// An empty tag is treated as an absent tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub artist: Option<String>,

    pub album: Option<String>,
}

impl TrackTags {
    pub fn artist_or_default(&self) -> &str {
        self.artist.as_deref().unwrap_or(UNKNOWN_ARTIST)
    }

    pub fn album_or_default(&self) -> &str {
        self.album.as_deref().unwrap_or(UNKNOWN_ALBUM)
    }
}

/// Parameters of the first audio stream of a music file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamInfo {
    pub codec_name: Option<String>,

    pub sample_rate: Option<u32>,
}

impl StreamInfo {
    pub fn codec_name_or_default(&self) -> &str {
        self.codec_name.as_deref().unwrap_or(UNKNOWN_CODEC)
    }
}

/// Parses a tag value printed by ffprobe with `-of default=nw=1:nk=1`.
pub fn parse_tag_value(output: &str) -> Option<String> {
    let value = output.trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

#[derive(Deserialize, Debug)]
struct ProbedStreams {
    #[serde(default)]
    streams: Vec<ProbedStream>,
}

#[derive(Deserialize, Debug)]
struct ProbedStream {
    codec_name: Option<String>,

    // ffprobe prints the sample rate as a string.
    sample_rate: Option<String>,
}

/// Parses stream information printed by ffprobe with `-of json`.
///
/// A file without audio stream has no codec and no sample rate.
pub fn parse_stream_info(output: &str) -> Result<StreamInfo> {
    let probed: ProbedStreams =
        serde_json::from_str(output).context("ffprobe printed invalid JSON")?;

    let Some(stream) = probed.streams.into_iter().next() else {
        return Ok(StreamInfo::default());
    };

    let sample_rate = stream
        .sample_rate
        .map(|sample_rate| {
            sample_rate
                .trim()
                .parse::<u32>()
                .with_context(|| format!("sample rate {sample_rate:?} is not a number"))
        })
        .transpose()?;

    Ok(StreamInfo {
        codec_name: stream
            .codec_name
            .filter(|codec_name| !codec_name.is_empty()),
        sample_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_value_is_trimmed() {
        assert_eq!(
            Some("Pink Floyd".to_owned()),
            parse_tag_value("Pink Floyd\n")
        );
    }

    #[test]
    fn empty_tag_value_is_absent() {
        assert!(parse_tag_value("").is_none());
        assert!(parse_tag_value(" \n").is_none());
    }

    #[test]
    fn defaults_of_absent_tags() {
        let tags = TrackTags::default();

        assert_eq!(UNKNOWN_ARTIST, tags.artist_or_default());
        assert_eq!(UNKNOWN_ALBUM, tags.album_or_default());
    }

    #[test]
    fn parse_flac_stream() {
        let output = r#"{
            "programs": [],
            "streams": [
                {
                    "codec_name": "flac",
                    "sample_rate": "96000"
                }
            ]
        }"#;

        let stream_info = parse_stream_info(output).unwrap();

        assert_eq!(Some("flac"), stream_info.codec_name.as_deref());
        assert_eq!(Some(96000), stream_info.sample_rate);
    }

    #[test]
    fn parse_output_without_streams() {
        let stream_info = parse_stream_info(r#"{"programs": [], "streams": []}"#).unwrap();

        assert_eq!(StreamInfo::default(), stream_info);
        assert_eq!(UNKNOWN_CODEC, stream_info.codec_name_or_default());
    }

    #[test]
    fn parse_stream_without_sample_rate() {
        let stream_info = parse_stream_info(r#"{"streams": [{"codec_name": "alac"}]}"#).unwrap();

        assert_eq!(Some("alac"), stream_info.codec_name.as_deref());
        assert!(stream_info.sample_rate.is_none());
    }

    #[test]
    fn invalid_sample_rate_is_error() {
        let output = r#"{"streams": [{"codec_name": "alac", "sample_rate": "fast"}]}"#;

        assert!(parse_stream_info(output).is_err());
    }

    #[test]
    fn invalid_json_is_error() {
        assert!(parse_stream_info("").is_err());
    }
}
