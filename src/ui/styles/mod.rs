// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the UI containers.

pub mod container;
