// doodba-tools: Doodba Addons Toolkit
//
// SPDX-FileCopyrightText: 2026 Alexandre D. Díaz
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         scan / convert / resolve / versions
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              scan        compose    net
//!            walker +    dedupe/yaml  registry
//!            manifests        |       client
//!                             v
//!                          bundle
//!                        zip export
//!
//!   +-----------------------------------------+
//!   |  foundation       error, logging        |
//!   +-----------------------------------------+
//! ```

pub mod bundle;
pub mod cli;
pub mod cmd;
pub mod compose;
pub mod config;
pub mod error;
pub mod logging;
pub mod net;
pub mod scan;
