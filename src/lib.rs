// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

pub mod conversion_error;
pub mod discovery;
pub mod element;
pub mod job_result;
pub mod metadata;
pub mod music_converter;
pub mod organize_to_alac;
pub mod output_path;
pub mod selection;
